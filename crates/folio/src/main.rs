//! Folio CLI entry point.

use clap::Parser;

use folio::cli::{Cli, Commands};
use folio::{commands, logging, tui};

fn main() {
    // Optional overrides from ~/.folio/.env.local
    folio_core::load_env_file();

    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.log_level(), cli.is_interactive()) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let result = match cli.command {
        Some(Commands::View { section }) => tui::run(cli.content.as_deref(), section.as_deref()),
        Some(cmd) => commands::execute(cmd, cli.content.as_deref()),
        None => tui::run(cli.content.as_deref(), None),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
