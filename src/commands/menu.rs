use anyhow::Result;

use super::{Command, backup, replace, restore, status};
use crate::app::context::AppContext;

const TITLE: &str = concat!("Omarchy Menu Manager v", env!("CARGO_PKG_VERSION"));
const SUBTITLE: &str = "Backup and replace tool for Omarchy Menu";

pub struct MenuCommand;

impl Command for MenuCommand {
    fn run(&self, ctx: &AppContext) -> Result<()> {
        loop {
            ctx.console.header(TITLE, SUBTITLE);
            ctx.console.plain("  1) Full Process (Backup + Replace)");
            ctx.console.plain("  2) Backup Only");
            ctx.console.plain("  3) Replace Only (No Backup)");
            ctx.console.plain("  4) Restore from Backup");
            ctx.console.plain("  5) Check Status");
            ctx.console.plain("  6) Exit\n");

            // End of input behaves like an explicit exit.
            let Some(choice) = ctx.console.ask("Enter your choice (1-6): ") else {
                break;
            };

            match choice.as_str() {
                "1" => full_process(ctx),
                "2" => {
                    ctx.console.plain("\nCreating backup...\n");
                    backup::run(ctx);
                }
                "3" => replace_only(ctx),
                "4" => restore_from_backup(ctx),
                "5" => status::run(ctx),
                "6" => {
                    ctx.console.plain("\nExiting...\n");
                    break;
                }
                _ => ctx.console.error("Invalid option. Please choose 1-6."),
            }

            ctx.console.pause();
        }

        Ok(())
    }
}

/// Backup then replace, with a restore offer if the replace step fails.
fn full_process(ctx: &AppContext) {
    ctx.console.plain("\nStarting full process...\n");

    if !ctx
        .console
        .confirm("This will backup and replace the omarchy-menu file. Continue?")
    {
        return;
    }

    ctx.console.plain("\nStep 1/2: Creating backup...");
    if !backup::run(ctx) {
        return;
    }

    ctx.console.plain("\nStep 2/2: Replacing file...");
    if replace::run(ctx) {
        ctx.console.plain("\nAll operations completed successfully.");
        return;
    }

    ctx.console.plain("");
    if ctx.console.confirm("Replace failed. Restore from backup?") {
        restore::run(ctx);
    }
}

fn replace_only(ctx: &AppContext) {
    ctx.console.plain("\nReplace without backup\n");
    ctx.console
        .warning("This will replace the file WITHOUT creating a backup!");

    if ctx.console.confirm("Are you sure you want to continue?") {
        replace::run(ctx);
    }
}

fn restore_from_backup(ctx: &AppContext) {
    ctx.console.plain("\nRestore from backup\n");

    if ctx
        .console
        .confirm("This will restore the original file from backup. Continue?")
    {
        restore::run(ctx);
    }
}
