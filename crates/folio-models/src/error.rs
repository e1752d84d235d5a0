//! Error types for content loading and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised when a profile is loaded or fails its invariants.
#[derive(Error, Debug)]
pub enum ContentError {
    /// A skill group has no skills.
    #[error("skill group '{0}' has no skills")]
    EmptySkillGroup(String),

    /// Two skill groups share a title.
    #[error("duplicate skill group title: {0}")]
    DuplicateSkillGroup(String),

    /// An experience entry has no responsibility bullets.
    #[error("experience entry '{0}' has no responsibilities")]
    EmptyResponsibilities(String),

    /// A social link uses a scheme the page cannot hand off.
    #[error("social link '{label}' has unsupported target: {href}")]
    UnsupportedLink {
        /// Accessible label of the link.
        label: String,
        /// The offending target.
        href: String,
    },

    /// The displayed name is empty.
    #[error("profile name is empty")]
    EmptyName,

    /// Failed to read a content file.
    #[error("failed to read {path}: {source}")]
    ReadError {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Content file is not valid JSON for a profile.
    #[error("invalid content JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for content operations.
pub type Result<T> = std::result::Result<T, ContentError>;
