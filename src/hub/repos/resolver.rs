//! Repository identifier resolution
//!
//! Turns the `[OWNER/]NAME` positional argument into a [`RepositoryIdentifier`].
//! Validation happens up front so a flag-like token is rejected before any
//! configuration or network lookup; the default owner is applied afterwards,
//! and only when the argument does not name one.

use log::debug;

use crate::error::{HubError, Result};

use super::models::RepositoryIdentifier;

/// Positional argument split into its parts, owner not yet defaulted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedIdentifier {
    owner: Option<String>,
    name: String,
}

impl ParsedIdentifier {
    /// Owner named explicitly in the argument
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True when the owner must come from the authenticated user
    pub fn needs_default_owner(&self) -> bool {
        self.owner.is_none()
    }

    /// Complete the identifier, using `default_owner` if none was given
    pub fn with_default_owner(self, default_owner: &str) -> RepositoryIdentifier {
        let owner = self.owner.unwrap_or_else(|| default_owner.to_string());
        RepositoryIdentifier::new(owner, self.name)
    }
}

/// Split and validate a raw `[OWNER/]NAME` argument.
///
/// The split happens at the first '/', so the name may itself contain '/'.
pub fn parse_identifier(raw: &str) -> Result<ParsedIdentifier> {
    if raw.is_empty() || raw.starts_with('-') {
        return Err(HubError::InvalidArgument(raw.to_string()));
    }

    let parsed = match raw.split_once('/') {
        Some((owner, name)) => ParsedIdentifier {
            owner: Some(owner.to_string()),
            name: name.to_string(),
        },
        None => ParsedIdentifier {
            owner: None,
            name: raw.to_string(),
        },
    };

    if parsed.name.is_empty() || parsed.name.starts_with('-') {
        return Err(HubError::InvalidArgument(raw.to_string()));
    }

    debug!("Parsed repository argument '{}' as {:?}", raw, parsed);
    Ok(parsed)
}

/// Resolve a raw argument against a known default owner
pub fn resolve_identifier(raw: &str, default_owner: &str) -> Result<RepositoryIdentifier> {
    Ok(parse_identifier(raw)?.with_default_owner(default_owner))
}
