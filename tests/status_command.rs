use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::{PredicateBooleanExt, predicate};
use tempfile::TempDir;

const USER: &str = "tester";

fn sandbox() -> (TempDir, PathBuf, PathBuf, PathBuf) {
    let temp = TempDir::new().unwrap();
    let home_root = temp.path().join("home");
    let files_dir = temp.path().join("files");
    let bin_dir = home_root.join(USER).join(".local/share/omarchy/bin");
    fs::create_dir_all(&bin_dir).unwrap();
    fs::create_dir_all(&files_dir).unwrap();
    (temp, home_root, files_dir, bin_dir)
}

fn manager_cmd(home_root: &Path, files_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("omarchy-menu-manager").unwrap();
    cmd.env("OMARCHY_MM_HOME_ROOT", home_root)
        .env("OMARCHY_MM_FILES_DIR", files_dir);
    cmd
}

#[test]
fn status_with_all_files_present() {
    let (_temp, home_root, files_dir, bin_dir) = sandbox();
    fs::write(bin_dir.join("omarchy-menu"), "live").unwrap();
    fs::write(bin_dir.join("omarchy-menu.backup"), "saved").unwrap();
    fs::write(files_dir.join("omarchy-menu"), "payload").unwrap();

    manager_cmd(&home_root, &files_dir)
        .args(["direct", "--check", "--user", USER])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Original file exists")
                .and(predicate::str::contains("Backup exists"))
                .and(predicate::str::contains("Replacement file ready"))
                .and(predicate::str::contains("Size: 4 bytes")),
        );
}

#[test]
fn status_with_no_files_reports_each_independently() {
    let (_temp, home_root, files_dir, _bin_dir) = sandbox();

    manager_cmd(&home_root, &files_dir)
        .args(["direct", "--check", "--user", USER])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Original file not found")
                .and(predicate::str::contains("No backup found"))
                .and(predicate::str::contains("Replacement file not found")),
        );
}

#[test]
fn status_with_only_a_backup() {
    let (_temp, home_root, files_dir, bin_dir) = sandbox();
    fs::write(bin_dir.join("omarchy-menu.backup"), "saved").unwrap();

    manager_cmd(&home_root, &files_dir)
        .args(["direct", "--check", "--user", USER])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Original file not found")
                .and(predicate::str::contains("Backup exists"))
                .and(predicate::str::contains("Replacement file not found")),
        );
}
