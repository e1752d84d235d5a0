//! Tracing subscriber setup.
//!
//! Non-interactive commands log to stderr. The terminal viewer owns the
//! screen, so while it runs logs go to a file under the config directory.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

/// Initialise the global subscriber.
///
/// `RUST_LOG` takes precedence over `level`.
pub fn init(level: tracing::Level, interactive: bool) -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    if interactive {
        let path = folio_core::log_file();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}
