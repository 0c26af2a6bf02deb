use std::fmt::Display;
use std::io::{self, BufRead, Write};

use console::{Term, style};

/// Parse an interactive yes/no answer.
///
/// Only `y` and `yes` (case-insensitive) count as yes; everything else,
/// including an empty line, is no.
#[must_use]
pub fn parse_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Console handle for user-facing output and prompts.
///
/// Owns the process stdin handle so all prompting goes through one place;
/// acquired once at startup and carried in the application context.
pub struct Console {
    input: io::Stdin,
}

impl Console {
    #[must_use]
    pub fn new() -> Self {
        Self { input: io::stdin() }
    }

    pub fn info(&self, msg: impl Display) {
        println!("{} {msg}", style("INFO").cyan());
    }

    pub fn success(&self, msg: impl Display) {
        println!("{} {msg}", style("SUCCESS").green());
    }

    pub fn error(&self, msg: impl Display) {
        println!("{} {msg}", style("ERROR").red());
    }

    pub fn warning(&self, msg: impl Display) {
        println!("{} {msg}", style("WARNING").yellow());
    }

    pub fn plain(&self, msg: impl Display) {
        println!("{msg}");
    }

    /// Clear the screen (terminal only) and print the banner.
    pub fn header(&self, title: &str, subtitle: &str) {
        let term = Term::stdout();
        if term.is_term() {
            let _ = term.clear_screen();
        }
        println!("{}", style(title).bold());
        println!("{subtitle}\n");
    }

    /// Ask a yes/no question. Read failure or end of input counts as no.
    pub fn confirm(&self, prompt: &str) -> bool {
        self.ask(&format!("{prompt} (y/n): "))
            .is_some_and(|answer| parse_yes(&answer))
    }

    /// Prompt for one line of input; `None` on end of input or read failure.
    pub fn ask(&self, prompt: &str) -> Option<String> {
        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match self.input.lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    pub fn pause(&self) {
        let _ = self.ask("\nPress Enter to continue...");
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
