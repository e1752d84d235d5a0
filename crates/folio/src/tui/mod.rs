//! Terminal viewer for the portfolio.
//!
//! Provides a single scrolling document with:
//! - Navigation bar that condenses once the page is scrolled
//! - Hero name typed out one character at a time
//! - Blocks that fade in the first time they come on screen
//! - Mobile-style menu and clickable links

mod app;
mod document;
mod events;
mod input;
mod scroll;
mod ui;

pub use app::{App, BlockVisibility, ClickAction, ClickableItem};
pub use document::{wrap, DocLine, Document, DocumentViewport, LineKind, ROW_PX};
pub use events::run;
