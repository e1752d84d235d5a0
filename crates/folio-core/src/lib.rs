//! Folio Core - the page's client-side interaction logic.
//!
//! This crate provides everything with runtime state or side effects, kept
//! independent of any particular renderer:
//!
//! - **controller**: Scroll-driven nav condensation, the typing reveal, and
//!   section navigation
//! - **viewport**: Capability trait for scroll position and element lookup
//! - **host**: Listener/timer registration and a clock-driven host
//! - **reveal**: Finite character-prefix sequence behind the typing effect
//! - **visibility**: One-shot "revealed when first seen" latches
//! - **links**: Scheme classification and OS handoff for outbound links
//! - **config**: Paths and tunables loaded from the environment

pub mod config;
pub mod controller;
pub mod host;
pub mod links;
pub mod reveal;
pub mod viewport;
pub mod visibility;

pub use config::{
    config_dir, env_file, load_env_file, log_file, logs_dir, ConfigError, FolioConfig,
};
pub use controller::{
    nav_condensed, ControllerSettings, DisplayState, InteractionController, MountId,
};
pub use host::{EventHost, HostEvent, IntervalHost, ListenerId, TimerId};
pub use links::{LinkError, LinkKind, LinkOpener, LinkOutcome, SystemOpener};
pub use reveal::RevealSequence;
pub use viewport::{ElementRef, Viewport};
pub use visibility::{VisibilityLatch, VisibilitySet};
