use tracing::debug;

use super::copy::{copy_atomic, set_executable};
use super::error::ManagerError;
use super::lock;
use super::paths::ScriptPaths;

/// Copy the bundled payload over the live script and mark it executable.
///
/// The target keeps mode 0755 regardless of the payload's own permissions.
///
/// # Errors
/// `PayloadMissing` if the bundled file is absent, `TargetDirMissing` if the
/// script's directory does not exist, `Copy`/`Permissions` on I/O failure.
pub fn replace(paths: &ScriptPaths) -> Result<(), ManagerError> {
    if !paths.payload.exists() {
        return Err(ManagerError::PayloadMissing(paths.payload.clone()));
    }

    let target_dir = paths
        .target_dir()
        .filter(|dir| dir.exists())
        .ok_or_else(|| {
            let dir = paths.target_dir().unwrap_or(&paths.target);
            ManagerError::TargetDirMissing(dir.to_path_buf())
        })?;
    debug!(dir = %target_dir.display(), "target directory present");

    let _lock = lock::acquire(&paths.lock_file())?;

    copy_atomic(&paths.payload, &paths.target).map_err(|source| ManagerError::Copy {
        from: paths.payload.clone(),
        to: paths.target.clone(),
        source,
    })?;

    set_executable(&paths.target)
        .map_err(|e| ManagerError::Permissions(paths.target.clone(), e))?;

    Ok(())
}
