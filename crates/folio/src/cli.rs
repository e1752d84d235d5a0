//! Command-line interface definition using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Build version string with git hash and build date.
fn version_string() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const BUILD_DATE: &str = env!("BUILD_DATE");

    static VERSION_STRING: std::sync::OnceLock<String> = std::sync::OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} ({}, {})", VERSION, GIT_HASH, BUILD_DATE))
}

/// Folio - single-page portfolio in the terminal or as static HTML
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version = version_string(), about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Replacement profile JSON (default: built-in content)
    #[arg(short, long, env = "FOLIO_CONTENT", global = true)]
    pub content: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the portfolio in the terminal
    View {
        /// Jump to a section on start (about, skills, experience, projects, contact)
        #[arg(short, long)]
        section: Option<String>,
    },

    /// Write the portfolio as a static HTML page
    Export {
        /// Output file
        #[arg(short, long, default_value = "index.html")]
        out: PathBuf,

        /// Background image path or URL referenced by the hero section
        #[arg(short, long, default_value = crate::render::DEFAULT_BACKGROUND)]
        background: String,
    },

    /// Print the profile content
    Content {
        /// Output format (json, brief)
        #[arg(short, long, default_value = "brief")]
        format: OutputFormat,
    },

    /// List outbound links and how each is handed off
    Links,

    /// Validate the profile content
    Check,
}

/// Output format for the content command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    #[default]
    Brief,
}

impl Cli {
    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }

    /// Whether the command takes over the terminal.
    pub fn is_interactive(&self) -> bool {
        matches!(self.command, None | Some(Commands::View { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_no_args() {
        // No args opens the viewer
        let cli = Cli::parse_from(["folio"]);
        assert!(cli.command.is_none());
        assert!(cli.is_interactive());
    }

    #[test]
    fn test_cli_parse_export_defaults() {
        let cli = Cli::parse_from(["folio", "export"]);
        match cli.command {
            Some(Commands::Export { out, background }) => {
                assert_eq!(out, PathBuf::from("index.html"));
                assert_eq!(background, crate::render::DEFAULT_BACKGROUND);
            }
            _ => panic!("Expected Export command"),
        }
        assert!(!Cli::parse_from(["folio", "export"]).is_interactive());
    }

    #[test]
    fn test_cli_parse_view_section() {
        let cli = Cli::parse_from(["folio", "view", "--section", "projects"]);
        match cli.command {
            Some(Commands::View { section }) => assert_eq!(section.as_deref(), Some("projects")),
            _ => panic!("Expected View command"),
        }
    }

    #[test]
    fn test_cli_parse_content_format() {
        let cli = Cli::parse_from(["folio", "content", "--format", "json"]);
        match cli.command {
            Some(Commands::Content { format }) => assert_eq!(format, OutputFormat::Json),
            _ => panic!("Expected Content command"),
        }
    }

    #[test]
    fn test_cli_verbose() {
        let cli = Cli::parse_from(["folio", "check", "-vv"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_cli_help() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_version_string_carries_build_stamp() {
        let version = version_string();
        assert!(version.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(version.contains(env!("GIT_HASH")));
        // BUILD_DATE is YYYY-MM-DD
        let date = env!("BUILD_DATE");
        assert_eq!(date.len(), 10);
        assert!(version.ends_with(&format!("{})", date)));
    }
}
