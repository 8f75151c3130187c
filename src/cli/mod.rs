//! CLI argument parsing

mod delete;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use delete::{DeleteArgs, DELETE_USAGE};

/// hubctl CLI
#[derive(Parser, Debug)]
#[command(name = "hubctl")]
#[command(version)]
#[command(about = "Manage GitHub repositories from the command line", long_about = None)]
pub struct Cli {
    /// GitHub host (overrides GITHUB_HOST and the hub config file)
    #[arg(short = 'H', long, global = true)]
    pub host: Option<String>,

    /// API token (overrides GITHUB_TOKEN and the hub config file)
    #[arg(short = 't', long, global = true)]
    pub token: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL, global = true)]
    pub log_level: String,

    /// Batch mode - no interactive host selection, no spinners
    #[arg(short, long, default_value_t = false, global = true)]
    pub batch: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Delete an existing repository on GitHub
    Delete(DeleteArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delete_args(cli: Cli) -> DeleteArgs {
        match cli.command {
            Command::Delete(args) => args,
        }
    }

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["hubctl", "delete", "recipes"]);
        assert!(cli.host.is_none());
        assert!(cli.token.is_none());
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert!(!cli.batch);

        let args = delete_args(cli);
        assert_eq!(args.name.as_deref(), Some("recipes"));
        assert!(!args.yes);
    }

    #[test]
    fn test_delete_with_yes_short() {
        let args = delete_args(Cli::parse_from(["hubctl", "delete", "-y", "sinatra/recipes"]));
        assert!(args.yes);
        assert_eq!(args.name.as_deref(), Some("sinatra/recipes"));
    }

    #[test]
    fn test_delete_with_yes_long_after_name() {
        let args = delete_args(Cli::parse_from(["hubctl", "delete", "recipes", "--yes"]));
        assert!(args.yes);
        assert_eq!(args.name.as_deref(), Some("recipes"));
    }

    #[test]
    fn test_delete_without_name_parses() {
        let args = delete_args(Cli::parse_from(["hubctl", "delete"]));
        assert!(args.name.is_none());
    }

    #[test]
    fn test_delete_hyphen_name_reaches_positional() {
        let args = delete_args(Cli::parse_from(["hubctl", "delete", "--", "-bad"]));
        assert_eq!(args.name.as_deref(), Some("-bad"));
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::parse_from([
            "hubctl",
            "delete",
            "recipes",
            "-H",
            "github.example.com",
            "-t",
            "secret",
            "-l",
            "debug",
            "--batch",
        ]);
        assert_eq!(cli.host.as_deref(), Some("github.example.com"));
        assert_eq!(cli.token.as_deref(), Some("secret"));
        assert_eq!(cli.log_level, "debug");
        assert!(cli.batch);
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(Cli::try_parse_from(["hubctl"]).is_err());
    }
}
