//! Outbound link handling.
//!
//! Link targets are opaque strings. The only thing this module decides is
//! how each one is handed off: web targets go to a browser, `mailto:` and
//! `tel:` go to whatever the OS registers for them, and placeholders (`#`)
//! go nowhere.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

/// How a link target is handed off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkKind {
    /// `http`/`https`: opens in a new, unprivileged browsing context.
    Web,
    /// `mailto:`: OS mail handler.
    Mail,
    /// `tel:`: OS telephony handler.
    Tel,
    /// `#`, empty, or a relative fragment; does not navigate.
    Placeholder,
    /// Any other absolute scheme.
    Unsupported(String),
}

impl LinkKind {
    /// Classify a link target by scheme.
    pub fn classify(href: &str) -> Self {
        let href = href.trim();
        if href.is_empty() || href.starts_with('#') {
            return LinkKind::Placeholder;
        }

        match Url::parse(href) {
            Ok(url) => match url.scheme() {
                "http" | "https" => LinkKind::Web,
                "mailto" => LinkKind::Mail,
                "tel" => LinkKind::Tel,
                other => LinkKind::Unsupported(other.to_string()),
            },
            Err(_) => LinkKind::Placeholder,
        }
    }

    /// Whether following the link leaves the page.
    pub fn navigates(&self) -> bool {
        matches!(self, LinkKind::Web | LinkKind::Mail | LinkKind::Tel)
    }
}

/// Errors from handing a link to the OS.
#[derive(Error, Debug)]
pub enum LinkError {
    /// No opener program was found on the PATH.
    #[error("no system link opener found (tried: {0})")]
    NoOpener(String),

    /// The opener could not be started.
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The target's scheme cannot be handed off.
    #[error("unsupported link scheme '{scheme}' in {href}")]
    Unsupported { scheme: String, href: String },
}

/// Result of a handoff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// Handed to the OS as the given kind.
    Opened(LinkKind),
    /// Placeholder target; nothing happened.
    Ignored,
}

/// Something that can hand a link target off.
pub trait LinkOpener {
    fn open(&self, href: &str) -> Result<LinkOutcome, LinkError>;
}

#[cfg(target_os = "macos")]
const OPENER_CANDIDATES: &[&str] = &["open"];

#[cfg(target_os = "windows")]
const OPENER_CANDIDATES: &[&str] = &["explorer"];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const OPENER_CANDIDATES: &[&str] = &["xdg-open", "gio", "wslview"];

/// Opens links with the platform's opener command.
#[derive(Debug, Clone)]
pub struct SystemOpener {
    program: PathBuf,
}

impl SystemOpener {
    /// Use a specific opener program.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Find the platform opener on the PATH.
    pub fn detect() -> Result<Self, LinkError> {
        OPENER_CANDIDATES
            .iter()
            .find_map(|name| which::which(name).ok())
            .map(Self::with_program)
            .ok_or_else(|| LinkError::NoOpener(OPENER_CANDIDATES.join(", ")))
    }

    pub fn program(&self) -> &PathBuf {
        &self.program
    }

    fn command(&self, href: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        // gio needs a subcommand
        if self.program.file_name().is_some_and(|n| n == "gio") {
            cmd.arg("open");
        }
        cmd.arg(href);
        cmd
    }
}

impl LinkOpener for SystemOpener {
    fn open(&self, href: &str) -> Result<LinkOutcome, LinkError> {
        let kind = LinkKind::classify(href);
        match &kind {
            LinkKind::Placeholder => {
                debug!(href, "placeholder link, not opening");
                return Ok(LinkOutcome::Ignored);
            }
            LinkKind::Unsupported(scheme) => {
                return Err(LinkError::Unsupported {
                    scheme: scheme.clone(),
                    href: href.to_string(),
                });
            }
            _ => {}
        }

        self.command(href)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| {
                warn!(program = %self.program.display(), %source, "link opener failed");
                LinkError::Launch {
                    program: self.program.clone(),
                    source,
                }
            })?;

        debug!(href, ?kind, "handed link to system opener");
        Ok(LinkOutcome::Opened(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_web() {
        assert_eq!(LinkKind::classify("https://github.com/Mansi-126"), LinkKind::Web);
        assert_eq!(LinkKind::classify("http://example.com"), LinkKind::Web);
    }

    #[test]
    fn test_classify_handoff_schemes() {
        assert_eq!(LinkKind::classify("mailto:someone@example.com"), LinkKind::Mail);
        assert_eq!(LinkKind::classify("tel:+917403518888"), LinkKind::Tel);
    }

    #[test]
    fn test_classify_placeholder() {
        assert_eq!(LinkKind::classify("#"), LinkKind::Placeholder);
        assert_eq!(LinkKind::classify(""), LinkKind::Placeholder);
        assert_eq!(LinkKind::classify("#projects"), LinkKind::Placeholder);
        assert_eq!(LinkKind::classify("relative/path"), LinkKind::Placeholder);
        assert!(!LinkKind::Placeholder.navigates());
    }

    #[test]
    fn test_classify_unsupported() {
        assert_eq!(
            LinkKind::classify("ftp://example.com"),
            LinkKind::Unsupported("ftp".to_string())
        );
    }

    #[test]
    fn test_placeholder_is_not_launched() {
        // The program does not exist; a placeholder must never reach it.
        let opener = SystemOpener::with_program("/nonexistent/opener");
        assert_eq!(opener.open("#").unwrap(), LinkOutcome::Ignored);
    }

    #[test]
    fn test_unsupported_is_rejected() {
        let opener = SystemOpener::with_program("/nonexistent/opener");
        let err = opener.open("ftp://example.com").unwrap_err();
        assert!(matches!(err, LinkError::Unsupported { ref scheme, .. } if scheme == "ftp"));
    }

    #[test]
    fn test_missing_program_reports_launch_error() {
        let opener = SystemOpener::with_program("/nonexistent/opener");
        let err = opener.open("https://example.com").unwrap_err();
        assert!(matches!(err, LinkError::Launch { .. }));
    }
}
