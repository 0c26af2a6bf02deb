use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::core::manager::ScriptPaths;

/// Name of the managed script, identical for target, backup base, and payload.
pub const SCRIPT_NAME: &str = "omarchy-menu";

/// Suffix appended to the target path to form the backup path.
pub const BACKUP_SUFFIX: &str = ".backup";

/// Overrides the root under which per-user home directories live (`/home`).
pub const HOME_ROOT_ENV: &str = "OMARCHY_MM_HOME_ROOT";

/// Overrides the directory holding the bundled replacement file.
pub const FILES_DIR_ENV: &str = "OMARCHY_MM_FILES_DIR";

/// Path layout resolved once at startup.
///
/// Defaults follow the installed package: home directories under `/home`,
/// bundled files in `files/` next to the executable. Both roots can be
/// relocated through environment variables so tests and packagers can point
/// the tool at a scratch tree.
#[derive(Debug, Clone)]
pub struct Layout {
    pub home_root: PathBuf,
    pub files_dir: PathBuf,
}

impl Layout {
    /// Resolve the layout. Environment overrides take precedence.
    ///
    /// # Errors
    /// Returns an error if the running executable cannot be located while
    /// deriving the default files directory.
    pub fn load() -> Result<Self> {
        let home_root =
            env::var_os(HOME_ROOT_ENV).map_or_else(|| PathBuf::from("/home"), PathBuf::from);

        let files_dir = match env::var_os(FILES_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => default_files_dir()?,
        };

        Ok(Self {
            home_root,
            files_dir,
        })
    }

    /// Derive the three managed paths for `username`.
    #[must_use]
    pub fn paths_for(&self, username: &str) -> ScriptPaths {
        ScriptPaths::new(&self.home_root, &self.files_dir, username)
    }
}

fn default_files_dir() -> Result<PathBuf> {
    let exe = env::current_exe().context("failed to locate the running executable")?;
    let dir = exe
        .parent()
        .context("executable path has no parent directory")?;
    Ok(dir.join("files"))
}

/// Name of the invoking OS user, from the password database.
///
/// # Errors
/// Returns an error if the lookup fails or the effective uid has no entry.
pub fn current_username() -> Result<String> {
    let uid = nix::unistd::Uid::effective();
    let user = nix::unistd::User::from_uid(uid)
        .context("failed to read the password database")?
        .with_context(|| format!("no password database entry for uid {uid}"))?;
    Ok(user.name)
}
