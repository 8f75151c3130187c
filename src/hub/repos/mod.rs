//! Repository module

mod api;
mod commands;
mod models;
pub mod resolver;

pub use commands::{
    delete_repository, invoke_deletion, run_delete_command, scope_advisory, DeleteOptions,
};
pub use models::{DeletionOutcome, FailureKind, RepositoryIdentifier};
pub use resolver::{parse_identifier, resolve_identifier, ParsedIdentifier};
