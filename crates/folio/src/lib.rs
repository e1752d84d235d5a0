//! Folio library.
//!
//! This crate provides the presentational components and page composer
//! (HTML), the interactive terminal viewer, and the CLI commands.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
pub mod tui;

use std::path::Path;

use folio_models::{ContentError, Profile};
use tracing::info;

/// Load the profile to present.
///
/// An explicit path wins over the configured one; with neither, the
/// built-in profile is used.
pub fn load_profile(
    explicit: Option<&Path>,
    configured: Option<&Path>,
) -> Result<Profile, ContentError> {
    match explicit.or(configured) {
        Some(path) => {
            info!(path = %path.display(), "loading profile");
            Profile::from_json_file(path)
        }
        None => Ok(Profile::builtin()),
    }
}
