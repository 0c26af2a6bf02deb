use anyhow::Result;

use super::Command;
use crate::app::context::AppContext;
use crate::core::manager;

pub struct ReplaceCommand;

impl Command for ReplaceCommand {
    fn run(&self, ctx: &AppContext) -> Result<()> {
        run(ctx);
        Ok(())
    }
}

/// Run the replace operation and report the result.
pub fn run(ctx: &AppContext) -> bool {
    match manager::replace(&ctx.paths) {
        Ok(()) => {
            ctx.console
                .success(format!("File replaced: {}", ctx.paths.target.display()));
            true
        }
        Err(err) => {
            super::report_error(&ctx.console, &err);
            false
        }
    }
}
