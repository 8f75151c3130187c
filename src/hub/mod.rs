//! GitHub API client module
//!
//! This module provides functionality to interact with the GitHub REST API.

mod client;
pub mod config_file;
mod credentials;
mod host;
pub mod repos;
mod users;

pub use client::HubClient;
pub use config_file::{HostEntry, HubConfig, HubConfigStore};
pub use credentials::TokenResolver;
pub use host::{HostConfig, HostResolver};
pub use repos::{
    delete_repository, invoke_deletion, parse_identifier, resolve_identifier, run_delete_command,
    scope_advisory, DeleteOptions, DeletionOutcome, FailureKind, ParsedIdentifier,
    RepositoryIdentifier,
};
pub use users::User;
