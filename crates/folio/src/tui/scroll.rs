//! Scrolling operations for the document area.

use super::App;

impl App {
    /// Scroll by `delta` rows immediately.
    pub fn scroll_lines(&mut self, delta: i64) {
        if self.controller.viewport_mut().scroll_by(delta) {
            self.dispatch_scroll();
        }
    }

    /// Scroll up by one line.
    pub fn scroll_up(&mut self) {
        self.scroll_lines(-1);
    }

    /// Scroll down by one line.
    pub fn scroll_down(&mut self) {
        self.scroll_lines(1);
    }

    /// Scroll up by a page.
    pub fn scroll_page_up(&mut self) {
        let page = self.page_size();
        self.scroll_lines(-page);
    }

    /// Scroll down by a page.
    pub fn scroll_page_down(&mut self) {
        let page = self.page_size();
        self.scroll_lines(page);
    }

    /// Smooth scroll back to the top, like clicking the logo.
    pub fn scroll_to_top(&mut self) {
        self.controller.scroll_to_top();
    }

    /// Jump to the end of the document.
    pub fn scroll_to_bottom(&mut self) {
        let max = self.controller.viewport().max_offset();
        if self.controller.viewport_mut().jump_to(max) {
            self.dispatch_scroll();
        }
    }

    /// Bring `row` on screen if it is not already.
    pub(super) fn scroll_row_into_view(&mut self, row: usize) {
        let row = row as u32;
        let visible = self.controller.viewport().visible_rows();
        if visible.contains(&row) {
            return;
        }
        let height = self.controller.viewport().height();
        let top = row.saturating_sub(height / 3);
        if self.controller.viewport_mut().jump_to(top) {
            self.dispatch_scroll();
        }
    }

    fn page_size(&self) -> i64 {
        i64::from(self.controller.viewport().height().saturating_sub(2).max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::super::app::tests::test_app;
    use std::time::Instant;

    #[test]
    fn test_line_and_page_scroll() {
        let (mut app, _) = test_app(Instant::now());

        app.scroll_down();
        app.scroll_down();
        assert_eq!(app.controller.viewport().offset(), 2);

        app.scroll_page_down();
        assert_eq!(app.controller.viewport().offset(), 2 + 18);

        app.scroll_page_up();
        app.scroll_up();
        assert_eq!(app.controller.viewport().offset(), 1);

        app.scroll_up();
        app.scroll_up();
        assert_eq!(app.controller.viewport().offset(), 0);
    }

    #[test]
    fn test_scroll_to_bottom_condenses_nav() {
        let (mut app, _) = test_app(Instant::now());
        app.scroll_to_bottom();
        assert_eq!(
            app.controller.viewport().offset(),
            app.controller.viewport().max_offset()
        );
        assert!(app.controller.nav_condensed());
    }

    #[test]
    fn test_scroll_to_top_is_smooth() {
        let now = Instant::now();
        let (mut app, _) = test_app(now);
        app.scroll_to_bottom();

        app.scroll_to_top();
        assert!(app.controller.viewport().is_animating());
        let mut frames = 0;
        while app.controller.viewport().is_animating() {
            app.tick(now);
            frames += 1;
            assert!(frames < 200);
        }
        assert_eq!(app.controller.viewport().offset(), 0);
        assert!(!app.controller.nav_condensed());
    }
}
