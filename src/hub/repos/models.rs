//! Repository data models

use std::fmt;

use crate::error::HubError;

/// A repository addressed by owner and name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryIdentifier {
    /// User or organization owning the repository
    pub owner: String,
    /// Repository name; never empty, never starts with '-'
    pub name: String,
}

impl RepositoryIdentifier {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RepositoryIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Why a deletion failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The token lacks permission (HTTP 403)
    Forbidden,
    /// Any other failure
    Other,
}

impl FailureKind {
    /// Classify a failed deletion
    pub fn classify(error: &HubError) -> Self {
        if error.is_forbidden() {
            FailureKind::Forbidden
        } else {
            FailureKind::Other
        }
    }
}

/// Result of the single delete call
#[derive(Debug)]
pub enum DeletionOutcome {
    Success,
    Failure { kind: FailureKind, error: HubError },
}

impl DeletionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DeletionOutcome::Success)
    }

    /// Raw message of the failure, as the remote service reported it
    pub fn message(&self) -> Option<String> {
        match self {
            DeletionOutcome::Success => None,
            DeletionOutcome::Failure { error, .. } => Some(error.to_string()),
        }
    }
}
