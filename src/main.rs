//! hubctl - Main entry point

use clap::Parser;
use log::{debug, info};
use std::process::ExitCode;

use hubctl::{run_delete_command, Cli, Command};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting hubctl v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: host={:?}, batch={}, command={:?}",
        cli.host, cli.batch, cli.command
    );

    let result = match &cli.command {
        Command::Delete(args) => run_delete_command(&cli, args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
