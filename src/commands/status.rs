use std::time::SystemTime;

use anyhow::Result;

use super::Command;
use crate::app::context::AppContext;
use crate::core::manager;

pub struct StatusCommand;

impl Command for StatusCommand {
    fn run(&self, ctx: &AppContext) -> Result<()> {
        run(ctx);
        Ok(())
    }
}

/// Report the state of the three managed files, each independently.
pub fn run(ctx: &AppContext) {
    let report = manager::status(&ctx.paths);
    let console = &ctx.console;

    console.plain("\nSystem Status\n");

    match &report.target.info {
        Some(info) => {
            console.success(format!("Original file exists: {}", report.target.path.display()));
            console.plain(format!(
                "   Size: {} bytes | Modified: {}",
                info.size,
                format_timestamp(info.modified)
            ));
        }
        None => console.error(format!(
            "Original file not found: {}",
            report.target.path.display()
        )),
    }

    match &report.backup.info {
        Some(info) => {
            console.success(format!("Backup exists: {}", report.backup.path.display()));
            console.plain(format!(
                "   Size: {} bytes | Created: {}",
                info.size,
                format_timestamp(info.modified)
            ));
        }
        None => console.info(format!(
            "No backup found at: {}",
            report.backup.path.display()
        )),
    }

    match &report.payload.info {
        Some(info) => {
            console.success(format!(
                "Replacement file ready: {}",
                report.payload.path.display()
            ));
            console.plain(format!(
                "   Size: {} bytes | Modified: {}",
                info.size,
                format_timestamp(info.modified)
            ));
        }
        None => {
            console.error(format!(
                "Replacement file not found: {}",
                report.payload.path.display()
            ));
            console.warning("Package files may be missing. Try reinstalling the package.");
        }
    }

    console.plain("");
}

/// Render a file timestamp in the local offset, RFC 3339.
fn format_timestamp(modified: Option<SystemTime>) -> String {
    use time::{OffsetDateTime, UtcOffset, format_description::well_known::Rfc3339};

    let Some(modified) = modified else {
        return "unknown".to_string();
    };

    let dt = OffsetDateTime::from(modified);
    let dt = UtcOffset::current_local_offset().map_or(dt, |offset| dt.to_offset(offset));
    dt.format(&Rfc3339).unwrap_or_else(|_| dt.to_string())
}
