use anyhow::Result;
use clap::Parser;
use omarchy_menu_manager::cli::Cli;
use omarchy_menu_manager::commands;
use omarchy_menu_manager::logging::init::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose)?;

    commands::dispatch(&cli)
}
