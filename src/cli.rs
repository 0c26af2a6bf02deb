use clap::{ArgAction, Parser, Subcommand};

/// omarchy-menu-manager command-line interface
#[derive(Parser, Debug, Clone)]
#[command(name = "omarchy-menu-manager", version, about = "Backup and replace tool for the Omarchy menu script", long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv). `RUST_LOG` overrides this.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Without a subcommand the interactive menu is shown.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run a single action without the interactive menu
    Direct {
        /// Back up the live script
        #[arg(short, long)]
        backup: bool,

        /// Replace the live script with the bundled file
        #[arg(short, long)]
        replace: bool,

        /// Full process: backup, then replace
        #[arg(short, long)]
        full: bool,

        /// Restore the live script from its backup
        #[arg(short = 's', long)]
        restore: bool,

        /// Report the state of the managed files
        #[arg(short, long)]
        check: bool,

        /// Act on this user's files instead of the invoking user's
        #[arg(short, long, value_name = "NAME")]
        user: Option<String>,
    },
}
