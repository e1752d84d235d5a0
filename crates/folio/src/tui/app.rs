//! TUI application state and logic.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use folio_core::{
    ControllerSettings, InteractionController, IntervalHost, LinkOpener, VisibilitySet,
};
use folio_models::Profile;
use ratatui::layout::Rect;
use tracing::debug;

use super::document::{Document, DocumentViewport};

/// How long a block takes to fade in once revealed.
pub const FADE_DURATION: Duration = Duration::from_millis(600);

/// Layout size used until the first draw.
const INITIAL_SIZE: (u16, u16) = (80, 20);

/// Action triggered by clicking a screen region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Navigate to a section by id.
    Navigate(String),
    ToggleMenu,
    ScrollTop,
    /// Follow the link on a document row.
    OpenLink(String),
}

/// A clickable screen region registered during drawing.
#[derive(Debug, Clone)]
pub struct ClickableItem {
    pub rect: Rect,
    pub action: ClickAction,
}

impl ClickableItem {
    /// Whether the cell at (`x`, `y`) falls inside this region.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Fade progress of a reveal-once block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockVisibility {
    Hidden,
    Fading,
    Shown,
}

/// TUI application state.
pub struct App {
    pub profile: Profile,
    /// The profile laid out at the current width
    pub document: Document,
    pub controller: InteractionController<DocumentViewport, IntervalHost>,
    /// Reveal-once latches keyed by block index
    pub visibility: VisibilitySet<usize>,
    pub(super) revealed_at: HashMap<usize, Instant>,
    pub(super) now: Instant,
    year: i32,
    /// Content area size the document was laid out for
    size: (u16, u16),

    /// Highlighted entry in the mobile menu
    pub menu_selected: usize,
    /// Index into `document.links` of the focused link
    pub link_cursor: Option<usize>,
    /// One-line status message for the footer
    pub status: Option<String>,
    pub should_quit: bool,

    /// Clickable regions from the last draw
    pub clickable_items: Vec<ClickableItem>,
    /// Document area from the last draw
    pub content_area: Option<Rect>,

    pub(super) opener: Box<dyn LinkOpener>,
}

impl App {
    /// Create a mounted app.
    pub fn new(
        profile: Profile,
        settings: ControllerSettings,
        opener: Box<dyn LinkOpener>,
        now: Instant,
        year: i32,
    ) -> Self {
        let (width, height) = INITIAL_SIZE;
        let document = Document::build(&profile, width, year);
        let viewport = DocumentViewport::new(&document, height);
        let mut controller = InteractionController::new(
            viewport,
            IntervalHost::new(now),
            profile.name.clone(),
            settings,
        );
        controller.mount();

        let mut app = Self {
            profile,
            document,
            controller,
            visibility: VisibilitySet::new(),
            revealed_at: HashMap::new(),
            now,
            year,
            size: INITIAL_SIZE,
            menu_selected: 0,
            link_cursor: None,
            status: None,
            should_quit: false,
            clickable_items: Vec::new(),
            content_area: None,
            opener,
        };
        app.observe_blocks();
        app
    }

    /// Re-lay out the document if the content area changed size.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.size == (width, height) {
            return;
        }
        let reflow = self.size.0 != width;
        self.size = (width, height);

        if !reflow {
            self.controller.viewport_mut().relayout(&self.document, height);
            self.dispatch_scroll();
            return;
        }

        // Keep the same section on screen across reflow
        let anchor = self.current_section_row();
        self.document = Document::build(&self.profile, width, self.year);
        self.controller.viewport_mut().relayout(&self.document, height);
        if let Some((id, delta)) = anchor {
            if let Some(&row) = self.document.anchors.get(&id) {
                self.controller.viewport_mut().jump_to(row + delta);
            }
        }
        self.link_cursor = None;

        debug!(width, height, rows = self.document.len(), "document relaid out");
        self.dispatch_scroll();
    }

    /// Advance time: smooth scrolling, timers and reveal latches.
    pub fn tick(&mut self, now: Instant) {
        self.now = now;

        if self.controller.viewport_mut().step() {
            self.dispatch_scroll();
        }

        let events = self.controller.host_mut().poll(now);
        for event in events {
            self.controller.handle(event);
        }

        self.observe_blocks();
    }

    /// Deliver pending scroll notifications to the controller.
    pub(super) fn dispatch_scroll(&mut self) {
        let events = self.controller.host().notify_scroll();
        for event in events {
            self.controller.handle(event);
        }
        self.observe_blocks();
    }

    fn observe_blocks(&mut self) {
        let visible = self.document.blocks_in(self.controller.viewport().visible_rows());
        for block in visible {
            if self.visibility.observe(block, true) {
                self.revealed_at.insert(block, self.now);
            }
        }
    }

    /// Fade state of `block` at the last tick.
    pub fn block_visibility(&self, block: usize) -> BlockVisibility {
        match self.revealed_at.get(&block) {
            None => BlockVisibility::Hidden,
            Some(at) if self.now.duration_since(*at) < FADE_DURATION => BlockVisibility::Fading,
            Some(_) => BlockVisibility::Shown,
        }
    }

    /// Section containing the top visible row, with the row's distance from
    /// its anchor.
    fn current_section_row(&self) -> Option<(String, u32)> {
        let offset = self.controller.viewport().offset();
        self.document
            .anchors
            .iter()
            .filter(|(_, row)| **row <= offset)
            .max_by_key(|(_, row)| **row)
            .map(|(id, row)| (id.clone(), offset - *row))
    }

    /// Clear clickable items before a render cycle.
    pub fn clear_clickable_items(&mut self) {
        self.clickable_items.clear();
    }

    /// Register a clickable region.
    pub fn add_clickable_item(&mut self, rect: Rect, action: ClickAction) {
        self.clickable_items.push(ClickableItem { rect, action });
    }

    /// Row of the focused link, if any.
    pub fn focused_link_row(&self) -> Option<usize> {
        self.link_cursor
            .and_then(|i| self.document.links.get(i))
            .copied()
    }

    /// Unregister from the host before the terminal goes away.
    pub fn shutdown(&mut self) {
        self.controller.unmount();
    }
}

#[cfg(test)]
pub(super) mod tests {
    use super::*;
    use folio_core::{LinkError, LinkKind, LinkOutcome};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Opener that records targets instead of launching anything.
    #[derive(Clone, Default)]
    pub struct RecordingOpener(pub Rc<RefCell<Vec<String>>>);

    impl LinkOpener for RecordingOpener {
        fn open(&self, href: &str) -> Result<LinkOutcome, LinkError> {
            let kind = LinkKind::classify(href);
            if kind == LinkKind::Placeholder {
                return Ok(LinkOutcome::Ignored);
            }
            self.0.borrow_mut().push(href.to_string());
            Ok(LinkOutcome::Opened(kind))
        }
    }

    pub fn test_app(now: Instant) -> (App, Rc<RefCell<Vec<String>>>) {
        let opener = RecordingOpener::default();
        let opened = Rc::clone(&opener.0);
        let app = App::new(
            Profile::builtin(),
            ControllerSettings::default(),
            Box::new(opener),
            now,
            2025,
        );
        (app, opened)
    }

    #[test]
    fn test_new_app_is_mounted_and_typing() {
        let now = Instant::now();
        let (mut app, _) = test_app(now);
        assert!(app.controller.is_mounted());
        assert_eq!(app.controller.revealed_text(), "");

        app.tick(now + Duration::from_millis(150));
        assert_eq!(app.controller.revealed_text(), "M");
        app.tick(now + Duration::from_millis(300));
        assert_eq!(app.controller.revealed_text(), "Ma");
    }

    #[test]
    fn test_clickable_item_contains() {
        let item = ClickableItem {
            rect: Rect {
                x: 10,
                y: 5,
                width: 20,
                height: 1,
            },
            action: ClickAction::ToggleMenu,
        };

        assert!(item.contains(10, 5));
        assert!(item.contains(29, 5));
        assert!(!item.contains(9, 5));
        assert!(!item.contains(30, 5));
        assert!(!item.contains(15, 6));
    }

    #[test]
    fn test_blocks_reveal_once_and_fade() {
        let now = Instant::now();
        let (mut app, _) = test_app(now);

        let about = app.document.anchors["about"];
        app.controller.viewport_mut().jump_to(about);
        app.dispatch_scroll();
        assert_eq!(app.block_visibility(0), BlockVisibility::Fading);

        app.tick(now + FADE_DURATION);
        assert_eq!(app.block_visibility(0), BlockVisibility::Shown);

        // Scrolling away leaves it revealed
        app.controller.viewport_mut().jump_to(0);
        app.dispatch_scroll();
        assert_eq!(app.block_visibility(0), BlockVisibility::Shown);
    }

    #[test]
    fn test_scroll_condenses_nav() {
        let now = Instant::now();
        let (mut app, _) = test_app(now);
        assert!(!app.controller.nav_condensed());

        // 4 rows = 64 px > 50
        app.controller.viewport_mut().jump_to(4);
        app.dispatch_scroll();
        assert!(app.controller.nav_condensed());

        app.controller.viewport_mut().jump_to(3);
        app.dispatch_scroll();
        assert!(!app.controller.nav_condensed());
    }

    #[test]
    fn test_resize_keeps_section() {
        let now = Instant::now();
        let (mut app, _) = test_app(now);
        let skills = app.document.anchors["skills"];
        app.controller.viewport_mut().jump_to(skills);

        app.resize(40, 20);
        assert_eq!(app.document.width, 40);
        assert_eq!(app.controller.viewport().offset(), app.document.anchors["skills"]);
    }

    #[test]
    fn test_shutdown_releases_host() {
        let now = Instant::now();
        let (mut app, _) = test_app(now);
        app.shutdown();
        assert_eq!(app.controller.host().listener_count(), 0);
        assert_eq!(app.controller.host().timer_count(), 0);
    }
}
