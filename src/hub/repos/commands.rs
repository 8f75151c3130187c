//! Repository command implementations

use log::{debug, info};
use std::io::{self, BufRead, Write};

use crate::cli::{Cli, DeleteArgs, DELETE_USAGE};
use crate::error::{HubError, Result};
use crate::hub::{HostConfig, HubClient, HubConfigStore};
use crate::ui::{confirm_deletion, create_spinner, finish_spinner};

use super::models::{DeletionOutcome, FailureKind, RepositoryIdentifier};
use super::resolver::{parse_identifier, ParsedIdentifier};

/// Action named in errors raised after the argument was accepted
const ACTION: &str = "deleting repository";

/// Behaviour switches for the delete flow
#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteOptions {
    /// Skip the confirmation prompt (--yes)
    pub skip_confirmation: bool,
    /// Suppress spinners (--batch)
    pub quiet: bool,
}

/// Run the delete command
///
/// Resolves the argument, host and credentials, then hands over to
/// [`delete_repository`] with the process's stdin and stdout.
pub async fn run_delete_command(cli: &Cli, args: &DeleteArgs) -> Result<()> {
    let raw = args.name.as_deref().ok_or_else(|| HubError::Usage {
        message: "Expecting name of repository to delete".to_string(),
        usage: DELETE_USAGE.to_string(),
    })?;
    let parsed = parse_identifier(raw)?;

    let store = HubConfigStore::new();
    let host = HostConfig::resolve(cli.host.as_deref(), cli.token.as_deref(), &store, cli.batch)
        .map_err(|e| e.with_action(ACTION))?;
    let client = HubClient::new(&host);

    let options = DeleteOptions {
        skip_confirmation: args.yes,
        quiet: cli.batch,
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let repo = delete_repository(&client, &host, parsed, options, &mut input, &mut output).await?;
    info!("Deleted repository {} on {}", repo, host.host);
    Ok(())
}

/// Resolve the owner, confirm, delete and report.
///
/// Prompt, advisory and success line are written to `output`; the answer to
/// the prompt is read from `input`. Returns the repository that was deleted.
pub async fn delete_repository<R, W>(
    client: &HubClient,
    host: &HostConfig,
    parsed: ParsedIdentifier,
    options: DeleteOptions,
    input: &mut R,
    output: &mut W,
) -> Result<RepositoryIdentifier>
where
    R: BufRead,
    W: Write,
{
    let owner = match parsed.owner() {
        Some(owner) => owner.to_string(),
        None => default_owner(client, host, options.quiet)
            .await
            .map_err(|e| e.with_action(ACTION))?,
    };
    let repo = parsed.with_default_owner(&owner);
    debug!("Resolved repository {}", repo);

    confirm_deletion(&repo, options.skip_confirmation, input, output)?;

    if let DeletionOutcome::Failure { kind, error } =
        invoke_deletion(client, &repo, options.quiet).await
    {
        if kind == FailureKind::Forbidden {
            writeln!(output, "{}\n", scope_advisory(host))?;
        }
        return Err(error.with_action(ACTION));
    }

    writeln!(output, "Deleted repository {}", repo.name)?;
    Ok(repo)
}

/// Issue the delete call once and classify the result
pub async fn invoke_deletion(
    client: &HubClient,
    repo: &RepositoryIdentifier,
    quiet: bool,
) -> DeletionOutcome {
    let spinner = create_spinner(&format!("Deleting repository {}...", repo), quiet);
    let result = client.delete_repository(repo).await;
    finish_spinner(spinner);

    match result {
        Ok(()) => DeletionOutcome::Success,
        Err(error) => {
            let kind = FailureKind::classify(&error);
            debug!("Deletion of {} failed ({:?}): {}", repo, kind, error);
            DeletionOutcome::Failure { kind, error }
        }
    }
}

/// Hint shown when the token is not allowed to delete repositories
pub fn scope_advisory(host: &HostConfig) -> String {
    format!(
        "Please edit the token used for hub at {}\n\
         and verify that the `delete_repo` scope is enabled.",
        host.tokens_url()
    )
}

/// Login of the configured user, asking the API when none is configured
async fn default_owner(client: &HubClient, host: &HostConfig, quiet: bool) -> Result<String> {
    if let Some(user) = &host.user {
        debug!("Using configured user {} as owner", user);
        return Ok(user.clone());
    }

    let spinner = create_spinner("Looking up current user...", quiet);
    let user = client.current_user().await;
    finish_spinner(spinner);
    Ok(user?.login)
}
