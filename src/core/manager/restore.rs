use super::copy::{copy_atomic, set_executable};
use super::error::ManagerError;
use super::lock;
use super::paths::ScriptPaths;

/// Copy the backup over the live script and mark it executable.
///
/// # Errors
/// `BackupMissing` if no backup exists, `Copy`/`Permissions` on I/O failure.
pub fn restore(paths: &ScriptPaths) -> Result<(), ManagerError> {
    if !paths.backup.exists() {
        return Err(ManagerError::BackupMissing(paths.backup.clone()));
    }

    let _lock = lock::acquire(&paths.lock_file())?;

    copy_atomic(&paths.backup, &paths.target).map_err(|source| ManagerError::Copy {
        from: paths.backup.clone(),
        to: paths.target.clone(),
        source,
    })?;

    set_executable(&paths.target)
        .map_err(|e| ManagerError::Permissions(paths.target.clone(), e))?;

    Ok(())
}
