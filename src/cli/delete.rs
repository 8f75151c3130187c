//! Delete command arguments

use clap::Parser;

/// Synopsis printed when the repository name is missing
pub const DELETE_USAGE: &str = "Usage: hubctl delete [-y] [<ORGANIZATION>/]<NAME>";

/// Arguments for 'delete' command
#[derive(Parser, Debug)]
#[command(
    override_usage = "hubctl delete [-y] [<ORGANIZATION>/]<NAME>",
    after_help = "EXAMPLES:\n  \
        hubctl delete recipes            # personal repo deleted on GitHub\n  \
        hubctl delete sinatra/recipes    # repo deleted in GitHub organization\n  \
        hubctl delete -y sinatra/recipes # no confirmation prompt"
)]
pub struct DeleteArgs {
    /// The name for the repository on GitHub
    ///
    ///   NAME                owner defaults to the authenticated user
    ///   ORGANIZATION/NAME   repository owned by ORGANIZATION
    #[arg(
        value_name = "[ORGANIZATION/]NAME",
        allow_hyphen_values = true,
        verbatim_doc_comment
    )]
    pub name: Option<String>,

    /// Skip the confirmation prompt and immediately delete the repository
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}
