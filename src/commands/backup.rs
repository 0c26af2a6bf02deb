use anyhow::Result;

use super::Command;
use crate::app::context::AppContext;
use crate::core::manager::{self, BackupOutcome};

pub struct BackupCommand;

impl Command for BackupCommand {
    fn run(&self, ctx: &AppContext) -> Result<()> {
        run(ctx);
        Ok(())
    }
}

/// Run the backup operation and report the result.
/// Returns true only when a backup file was written.
pub fn run(ctx: &AppContext) -> bool {
    let confirm = || {
        ctx.console
            .confirm("Backup file already exists. Overwrite?")
    };

    match manager::backup(&ctx.paths, confirm) {
        Ok(BackupOutcome::Created) => {
            ctx.console
                .success(format!("Backup created: {}", ctx.paths.backup.display()));
            true
        }
        Ok(BackupOutcome::Cancelled) => {
            ctx.console.warning("Backup cancelled");
            false
        }
        Err(err) => {
            super::report_error(&ctx.console, &err);
            false
        }
    }
}
