use std::fs::File;
use std::io;
use std::path::Path;

use tracing::debug;

/// Copy `from` over `to` without ever exposing a half-written destination.
///
/// Contents are staged in a temporary file in the destination's directory
/// and renamed into place; a failed copy leaves `to` exactly as it was.
pub(crate) fn copy_atomic(from: &Path, to: &Path) -> io::Result<()> {
    let dir = to.parent().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "destination has no parent directory",
        )
    })?;

    let mut src = File::open(from)?;
    let mut staged = tempfile::Builder::new()
        .prefix(".omm-staged-")
        .tempfile_in(dir)?;
    io::copy(&mut src, staged.as_file_mut())?;
    staged.as_file().sync_all()?;
    staged.persist(to).map_err(|e| e.error)?;

    debug!(from = %from.display(), to = %to.display(), "copied file");
    Ok(())
}

/// Set owner rwx, group/other rx on `path`.
pub(crate) fn set_executable(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn copies_content() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let from = tmp.path().join("from");
        let to = tmp.path().join("to");
        fs::write(&from, b"payload bytes").expect("write");

        copy_atomic(&from, &to).expect("copy");

        assert_eq!(fs::read(&to).expect("read"), b"payload bytes");
    }

    #[test]
    fn overwrites_existing_destination() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let from = tmp.path().join("from");
        let to = tmp.path().join("to");
        fs::write(&from, b"new").expect("write");
        fs::write(&to, b"old").expect("write");

        copy_atomic(&from, &to).expect("copy");

        assert_eq!(fs::read(&to).expect("read"), b"new");
    }

    #[test]
    fn missing_source_leaves_destination_untouched() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let from = tmp.path().join("absent");
        let to = tmp.path().join("to");
        fs::write(&to, b"old").expect("write");

        let err = copy_atomic(&from, &to).expect_err("must fail");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);

        assert_eq!(fs::read(&to).expect("read"), b"old");
    }

    #[test]
    fn leaves_no_staging_files_behind() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let from = tmp.path().join("from");
        let to = tmp.path().join("to");
        fs::write(&from, b"x").expect("write");

        copy_atomic(&from, &to).expect("copy");

        let names: Vec<_> = fs::read_dir(tmp.path())
            .expect("read_dir")
            .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
            .collect();
        assert!(names.iter().all(|n| !n.starts_with(".omm-staged-")));
    }

    #[test]
    fn marks_files_executable() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("script");
        fs::write(&path, b"#!/bin/sh\n").expect("write");

        set_executable(&path).expect("chmod");

        let mode = fs::metadata(&path).expect("metadata").permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }
}
