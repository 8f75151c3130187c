//! User confirmation prompts for destructive operations

use log::debug;
use std::io::{BufRead, Write};

use crate::error::{HubError, Result};
use crate::hub::RepositoryIdentifier;

/// The only answer that confirms a deletion
pub const CONFIRMATION_ANSWER: &str = "yes";

/// Ask the user to confirm deleting `repo`.
///
/// With `skip` set nothing is printed or read. Otherwise the prompt goes to
/// `output` and one line is read from `input`; only `yes` (after trimming,
/// case-sensitive) proceeds. End of input counts as a refusal, a read error
/// is returned as-is.
pub fn confirm_deletion<R, W>(
    repo: &RepositoryIdentifier,
    skip: bool,
    input: &mut R,
    output: &mut W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    if skip {
        debug!("Skipping confirmation for {}", repo);
        return Ok(());
    }

    write!(output, "Really delete repository '{}' (yes/N)? ", repo)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    if answer.trim() != CONFIRMATION_ANSWER {
        debug!("Confirmation declined with answer {:?}", answer.trim());
        return Err(HubError::ConfirmationDeclined);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    fn repo() -> RepositoryIdentifier {
        RepositoryIdentifier::new("alice", "recipes")
    }

    fn confirm_with(answer: &str) -> (Result<()>, String) {
        let mut input = Cursor::new(answer.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = confirm_deletion(&repo(), false, &mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    /// Reader that fails every read
    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "terminal went away"))
        }
    }

    #[test]
    fn test_yes_proceeds() {
        let (result, prompt) = confirm_with("yes\n");
        assert!(result.is_ok());
        assert_eq!(prompt, "Really delete repository 'alice/recipes' (yes/N)? ");
    }

    #[test]
    fn test_yes_with_whitespace_proceeds() {
        let (result, _) = confirm_with("  yes \r\n");
        assert!(result.is_ok());
    }

    #[test]
    fn test_other_answers_decline() {
        for answer in ["Yes\n", "YES\n", "y\n", "no\n", "\n", "yes please\n"] {
            let (result, _) = confirm_with(answer);
            assert!(
                matches!(result, Err(HubError::ConfirmationDeclined)),
                "answer {:?} should decline",
                answer
            );
        }
    }

    #[test]
    fn test_closed_stream_declines() {
        let (result, _) = confirm_with("");
        assert!(matches!(result, Err(HubError::ConfirmationDeclined)));
    }

    #[test]
    fn test_read_failure_is_error() {
        let mut input = io::BufReader::new(FailingReader);
        let mut output = Vec::new();
        let result = confirm_deletion(&repo(), false, &mut input, &mut output);
        match result {
            Err(HubError::Io(e)) => assert!(e.to_string().contains("terminal went away")),
            other => panic!("Expected HubError::Io, got {:?}", other),
        }
    }

    #[test]
    fn test_skip_does_no_io() {
        let mut input = io::BufReader::new(FailingReader);
        let mut output = Vec::new();
        let result = confirm_deletion(&repo(), true, &mut input, &mut output);
        assert!(result.is_ok());
        assert!(output.is_empty());
    }
}
