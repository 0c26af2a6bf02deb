use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::paths::ScriptPaths;

/// Point-in-time report over the three managed files.
#[derive(Debug, Clone)]
pub struct StatusReport {
    pub target: FileStatus,
    pub backup: FileStatus,
    pub payload: FileStatus,
}

/// Availability of one managed file. `info` is `None` when the file is
/// absent or unreadable.
#[derive(Debug, Clone)]
pub struct FileStatus {
    pub path: PathBuf,
    pub info: Option<FileInfo>,
}

#[derive(Debug, Clone, Copy)]
pub struct FileInfo {
    pub size: u64,
    pub modified: Option<SystemTime>,
}

impl FileStatus {
    fn probe(path: &Path) -> Self {
        let info = fs::metadata(path)
            .ok()
            .filter(fs::Metadata::is_file)
            .map(|meta| FileInfo {
                size: meta.len(),
                modified: meta.modified().ok(),
            });
        Self {
            path: path.to_path_buf(),
            info,
        }
    }

    #[must_use]
    pub const fn exists(&self) -> bool {
        self.info.is_some()
    }
}

/// Probe all three paths. Never fails; each file is reported independently.
#[must_use]
pub fn status(paths: &ScriptPaths) -> StatusReport {
    StatusReport {
        target: FileStatus::probe(&paths.target),
        backup: FileStatus::probe(&paths.backup),
        payload: FileStatus::probe(&paths.payload),
    }
}
