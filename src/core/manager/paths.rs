use std::path::{Path, PathBuf};

use crate::config::{BACKUP_SUFFIX, SCRIPT_NAME};

/// The three filesystem locations managed by the tool.
///
/// `backup` and `payload` are only ever written by this tool; `target` is
/// the live script and gets its executable bit reapplied after every write.
#[derive(Debug, Clone)]
pub struct ScriptPaths {
    /// The live script.
    pub target: PathBuf,
    /// Saved prior copy of `target`.
    pub backup: PathBuf,
    /// Bundled replacement file shipped with the tool.
    pub payload: PathBuf,
}

impl ScriptPaths {
    #[must_use]
    pub fn new(home_root: &Path, files_dir: &Path, username: &str) -> Self {
        let target = home_root
            .join(username)
            .join(".local/share/omarchy/bin")
            .join(SCRIPT_NAME);

        let mut backup = target.clone().into_os_string();
        backup.push(BACKUP_SUFFIX);

        Self {
            target,
            backup: PathBuf::from(backup),
            payload: files_dir.join(SCRIPT_NAME),
        }
    }

    /// Directory that must exist before `target` can be written.
    #[must_use]
    pub fn target_dir(&self) -> Option<&Path> {
        self.target.parent()
    }

    /// Lock file used to serialize mutating operations on `target`.
    #[must_use]
    pub fn lock_file(&self) -> PathBuf {
        let mut os = self.target.clone().into_os_string();
        os.push(".lock");
        PathBuf::from(os)
    }
}
