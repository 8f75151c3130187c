//! hubctl - Manage GitHub repositories from the command line
//!
//! # Features
//!
//! - Delete a repository owned by you or by an organization
//! - Interactive confirmation, skippable with `--yes`
//! - Host and token resolution from CLI, environment and the hub config file
//! - GitHub Enterprise hosts
//!
//! # Example
//!
//! ```bash
//! # Delete one of your own repositories
//! hubctl delete recipes
//!
//! # Delete a repository in an organization without prompting
//! hubctl delete -y sinatra/recipes
//!
//! # Delete on a GitHub Enterprise host
//! hubctl --host github.example.com delete team/tooling
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod hub;
pub mod ui;

pub use cli::{Cli, Command, DeleteArgs};
pub use error::{HubError, Result};
pub use hub::{
    run_delete_command, HostConfig, HostResolver, HubClient, HubConfigStore,
    RepositoryIdentifier, TokenResolver,
};
