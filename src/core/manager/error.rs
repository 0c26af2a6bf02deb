use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure modes of the file state manager.
///
/// A declined confirmation is not an error; see
/// [`super::backup::BackupOutcome::Cancelled`].
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("Source file not found: {}", .0.display())]
    SourceMissing(PathBuf),

    #[error("Replacement file not found: {}", .0.display())]
    PayloadMissing(PathBuf),

    #[error("Target directory not found: {}", .0.display())]
    TargetDirMissing(PathBuf),

    #[error("No backup file found at {}", .0.display())]
    BackupMissing(PathBuf),

    #[error("Copy to {} failed", .to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not mark {} executable", .0.display())]
    Permissions(PathBuf, #[source] io::Error),

    #[error("Could not lock {}", .0.display())]
    Lock(PathBuf, #[source] io::Error),
}
