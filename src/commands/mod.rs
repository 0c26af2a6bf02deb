use anyhow::Result;

use crate::{
    app::context::AppContext,
    cli::{Cli, Commands},
    core::manager::ManagerError,
    ui::Console,
};

pub mod backup;
pub mod full;
pub mod menu;
pub mod replace;
pub mod restore;
pub mod status;

/// Unified interface implemented by each subcommand handler.
pub trait Command {
    /// Execute the subcommand.
    ///
    /// # Errors
    /// Returns an error if the command fails fatally. Ordinary operation
    /// failures are reported on the console and are not errors.
    fn run(&self, ctx: &AppContext) -> Result<()>;
}

/// Central dispatcher: routes parsed CLI to subcommand handlers.
///
/// # Errors
/// Returns an error if startup resolution or the invoked handler fails.
pub fn dispatch(cli: &Cli) -> Result<()> {
    match &cli.command {
        None => {
            let ctx = AppContext::for_user(None, cli.verbose)?;
            menu::MenuCommand.run(&ctx)
        }
        Some(Commands::Direct {
            backup,
            replace,
            full,
            restore,
            check,
            user,
        }) => {
            let ctx = AppContext::for_user(user.as_deref(), cli.verbose)?;
            if *backup {
                backup::BackupCommand.run(&ctx)
            } else if *replace {
                replace::ReplaceCommand.run(&ctx)
            } else if *full {
                full::FullProcessCommand.run(&ctx)
            } else if *restore {
                restore::RestoreCommand.run(&ctx)
            } else if *check {
                status::StatusCommand.run(&ctx)
            } else {
                ctx.console.info("No action specified. Use --help for options.");
                Ok(())
            }
        }
    }
}

/// Print an operation failure, with reinstall guidance for a missing payload.
pub(crate) fn report_error(console: &Console, err: &ManagerError) {
    console.error(err);
    if matches!(err, ManagerError::PayloadMissing(_)) {
        console.info("Package files may be missing. Try reinstalling the package.");
    }
}
