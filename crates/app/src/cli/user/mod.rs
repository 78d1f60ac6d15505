use clap::{Args, Subcommand};

mod promote;

#[derive(Debug, Args)]
pub(crate) struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Debug, Subcommand)]
enum UserSubcommand {
    /// Grant staff access
    Promote(promote::StaffArgs),

    /// Remove staff access
    Demote(promote::StaffArgs),
}

pub(crate) async fn run(command: UserCommand) -> Result<(), String> {
    match command.command {
        UserSubcommand::Promote(args) => promote::run(args, true).await,
        UserSubcommand::Demote(args) => promote::run(args, false).await,
    }
}
