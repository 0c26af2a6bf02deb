use tracing::debug;

use super::copy::copy_atomic;
use super::error::ManagerError;
use super::lock;
use super::paths::ScriptPaths;

/// Result of a backup request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupOutcome {
    /// The backup file was written.
    Created,
    /// A backup already existed and the caller declined to overwrite it.
    Cancelled,
}

/// Copy the live script to its backup path.
///
/// `confirm_overwrite` is invoked only when a backup already exists; a false
/// answer cancels the operation and leaves the existing backup untouched.
///
/// # Errors
/// `SourceMissing` if the live script does not exist, `Copy` if the copy
/// itself fails.
pub fn backup(
    paths: &ScriptPaths,
    confirm_overwrite: impl FnOnce() -> bool,
) -> Result<BackupOutcome, ManagerError> {
    if !paths.target.exists() {
        return Err(ManagerError::SourceMissing(paths.target.clone()));
    }

    let _lock = lock::acquire(&paths.lock_file())?;

    if paths.backup.exists() && !confirm_overwrite() {
        debug!(backup = %paths.backup.display(), "overwrite declined");
        return Ok(BackupOutcome::Cancelled);
    }

    copy_atomic(&paths.target, &paths.backup).map_err(|source| ManagerError::Copy {
        from: paths.target.clone(),
        to: paths.backup.clone(),
        source,
    })?;

    Ok(BackupOutcome::Created)
}
