//! Viewport capability.
//!
//! The controller never reads scroll position or queries elements from
//! global state. Whatever renders the page implements [`Viewport`] and hands
//! it to the controller.

/// A located element, as returned by [`Viewport::find_element_by_id`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementRef {
    /// Element identifier.
    pub id: String,
    /// Offset of the element's top edge from the document top.
    pub top: u32,
}

impl ElementRef {
    /// Create a new element reference.
    pub fn new(id: impl Into<String>, top: u32) -> Self {
        Self { id: id.into(), top }
    }
}

/// Scroll position and element lookup for one rendered document.
pub trait Viewport {
    /// Current vertical scroll offset.
    fn current_scroll_offset(&self) -> u32;

    /// Locate the element with the given identifier.
    fn find_element_by_id(&self, id: &str) -> Option<ElementRef>;

    /// Start a smooth scroll that aligns the element's top with the viewport.
    ///
    /// Fire-and-forget: the scroll may complete over later frames.
    fn smooth_scroll_to(&mut self, element: &ElementRef);

    /// Start a smooth scroll to the top of the document.
    fn scroll_to_top(&mut self);
}
