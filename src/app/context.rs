use anyhow::Result;

use crate::config::{self, Layout};
use crate::core::manager::ScriptPaths;
use crate::ui::Console;

/// Per-invocation state handed to every command handler.
///
/// Carries the resolved file paths and the single console handle, so no
/// command reaches for globals.
pub struct AppContext {
    pub paths: ScriptPaths,
    pub console: Console,
    pub verbosity: u8,
}

impl AppContext {
    #[must_use]
    pub fn new(paths: ScriptPaths, console: Console, verbosity: u8) -> Self {
        Self {
            paths,
            console,
            verbosity,
        }
    }

    /// Convenience constructor resolving layout and username.
    ///
    /// `user` overrides the invoking OS user when given.
    ///
    /// # Errors
    /// Returns an error if the layout or the invoking user cannot be resolved.
    pub fn for_user(user: Option<&str>, verbosity: u8) -> Result<Self> {
        let layout = Layout::load()?;
        let username = match user {
            Some(name) => name.to_owned(),
            None => config::current_username()?,
        };
        Ok(Self::new(
            layout.paths_for(&username),
            Console::new(),
            verbosity,
        ))
    }
}
