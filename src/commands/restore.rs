use anyhow::Result;

use super::Command;
use crate::app::context::AppContext;
use crate::core::manager;

pub struct RestoreCommand;

impl Command for RestoreCommand {
    fn run(&self, ctx: &AppContext) -> Result<()> {
        run(ctx);
        Ok(())
    }
}

/// Run the restore operation and report the result.
pub fn run(ctx: &AppContext) -> bool {
    match manager::restore(&ctx.paths) {
        Ok(()) => {
            ctx.console.success(format!(
                "File restored from backup: {}",
                ctx.paths.target.display()
            ));
            true
        }
        Err(err) => {
            super::report_error(&ctx.console, &err);
            false
        }
    }
}
