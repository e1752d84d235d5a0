//! HTML rendering: components, page composition and export.

pub mod export;
pub mod html;
pub mod page;

pub use export::{export_page, ExportError};
pub use page::{compose_page, PageOptions, DEFAULT_BACKGROUND};
