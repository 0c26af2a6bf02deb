use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

use fs2::FileExt;
use tracing::debug;

use super::error::ManagerError;

/// Guard that holds the advisory lock serializing mutating operations.
pub struct OpsLock {
    file: File,
}

impl Drop for OpsLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

/// Acquire an exclusive advisory lock at `path`, blocking until available.
///
/// Returns `None` when the lock file cannot be created because its directory
/// is missing; callers report the more specific path error instead.
///
/// # Errors
/// Returns an error if the lock file cannot be opened or locked.
pub fn acquire(path: &Path) -> Result<Option<OpsLock>, ManagerError> {
    let file = match OpenOptions::new()
        .create(true)
        .truncate(false)
        .read(true)
        .write(true)
        .open(path)
    {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(ManagerError::Lock(path.to_path_buf(), e)),
    };

    debug!(path = %path.display(), "waiting for manager lock");
    file.lock_exclusive()
        .map_err(|e| ManagerError::Lock(path.to_path_buf(), e))?;

    Ok(Some(OpsLock { file }))
}

#[cfg(test)]
mod tests {
    use std::{sync::mpsc, thread, time::Duration};

    use super::*;

    #[test]
    fn lock_blocks_until_released() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("script.lock");
        let guard = acquire(&path).expect("first lock").expect("lock acquired");

        let (tx, rx) = mpsc::channel();
        let contended = path.clone();
        let handle = thread::spawn(move || {
            let _guard = acquire(&contended).expect("second lock");
            tx.send(()).expect("send");
        });

        // The second lock should still be blocked.
        assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());

        drop(guard);

        // After releasing the first lock, the second must proceed.
        rx.recv_timeout(Duration::from_secs(2))
            .expect("second lock must proceed after release");
        handle.join().expect("thread join");
    }

    #[test]
    fn missing_directory_skips_locking() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("no-such-dir").join("script.lock");

        assert!(acquire(&path).expect("no error").is_none());
    }
}
