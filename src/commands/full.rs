use anyhow::Result;

use super::{Command, backup, replace};
use crate::app::context::AppContext;

pub struct FullProcessCommand;

impl Command for FullProcessCommand {
    fn run(&self, ctx: &AppContext) -> Result<()> {
        run(ctx);
        Ok(())
    }
}

/// Backup then replace, for non-interactive use.
///
/// Backup failure or cancellation stops the sequence. A replace failure
/// after a successful backup is not rolled back automatically; the user is
/// pointed at the restore action instead.
pub fn run(ctx: &AppContext) -> bool {
    ctx.console.info("Starting full process...");

    if !backup::run(ctx) {
        return false;
    }

    if replace::run(ctx) {
        return true;
    }

    ctx.console
        .warning("Replace failed after backup. Run `direct --restore` to roll back.");
    false
}
