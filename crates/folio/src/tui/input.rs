//! Input handling for the TUI.
//!
//! Maps keys and mouse events onto controller operations: section
//! navigation, the mobile menu, link focus and handoff.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use folio_core::{LinkKind, LinkOutcome};
use folio_models::NAV_ITEMS;
use tracing::{info, warn};

use super::app::{App, ClickAction};

/// Rows moved per mouse wheel notch.
const WHEEL_ROWS: i64 = 3;

impl App {
    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.controller.mobile_menu_open() {
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.menu_select_up(),
                KeyCode::Down | KeyCode::Char('j') => self.menu_select_down(),
                KeyCode::Enter => {
                    let section = NAV_ITEMS[self.menu_selected].target();
                    self.navigate(section);
                }
                KeyCode::Esc | KeyCode::Char('m') => self.toggle_menu(),
                KeyCode::Char(c @ '1'..='5') => self.navigate_numbered(c),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
            KeyCode::PageUp => self.scroll_page_up(),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_page_down(),
            KeyCode::Home | KeyCode::Char('g') => self.scroll_to_top(),
            KeyCode::End | KeyCode::Char('G') => self.scroll_to_bottom(),
            KeyCode::Char(c @ '1'..='5') => self.navigate_numbered(c),
            KeyCode::Char('m') => self.toggle_menu(),
            KeyCode::Tab => self.focus_next_link(),
            KeyCode::BackTab => self.focus_prev_link(),
            KeyCode::Enter | KeyCode::Char('o') => self.open_focused_link(),
            KeyCode::Esc if self.link_cursor.is_some() => self.link_cursor = None,
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    /// Handle a mouse event.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll_lines(-WHEEL_ROWS),
            MouseEventKind::ScrollDown => self.scroll_lines(WHEEL_ROWS),
            MouseEventKind::Down(MouseButton::Left) => self.click(mouse.column, mouse.row),
            _ => {}
        }
    }

    /// Perform the action registered at (`x`, `y`), if any.
    pub fn click(&mut self, x: u16, y: u16) {
        let Some(action) = self
            .clickable_items
            .iter()
            .find(|item| item.contains(x, y))
            .map(|item| item.action.clone())
        else {
            return;
        };

        match action {
            ClickAction::Navigate(id) => self.navigate(&id),
            ClickAction::ToggleMenu => self.toggle_menu(),
            ClickAction::ScrollTop => self.scroll_to_top(),
            ClickAction::OpenLink(href) => self.follow(&href),
        }
    }

    /// Navigate to a section by id. Unknown ids change nothing.
    pub fn navigate(&mut self, section_id: &str) {
        if self.controller.navigate_to(section_id) {
            self.status = None;
        }
    }

    fn navigate_numbered(&mut self, c: char) {
        let index = c as usize - '1' as usize;
        if let Some(item) = NAV_ITEMS.get(index) {
            self.navigate(item.target());
        }
    }

    pub fn toggle_menu(&mut self) {
        self.controller.toggle_mobile_menu();
        self.menu_selected = 0;
    }

    pub fn menu_select_up(&mut self) {
        self.menu_selected = self.menu_selected.checked_sub(1).unwrap_or(NAV_ITEMS.len() - 1);
    }

    pub fn menu_select_down(&mut self) {
        self.menu_selected = (self.menu_selected + 1) % NAV_ITEMS.len();
    }

    /// Focus the next link, wrapping around.
    pub fn focus_next_link(&mut self) {
        let count = self.document.links.len();
        if count == 0 {
            return;
        }
        let next = self.link_cursor.map_or(0, |i| (i + 1) % count);
        self.focus_link(next);
    }

    /// Focus the previous link, wrapping around.
    pub fn focus_prev_link(&mut self) {
        let count = self.document.links.len();
        if count == 0 {
            return;
        }
        let prev = self.link_cursor.map_or(count - 1, |i| (i + count - 1) % count);
        self.focus_link(prev);
    }

    fn focus_link(&mut self, index: usize) {
        self.link_cursor = Some(index);
        if let Some(row) = self.focused_link_row() {
            self.scroll_row_into_view(row);
            if let Some(href) = self.document.lines[row].link.clone() {
                self.status = Some(href);
            }
        }
    }

    fn open_focused_link(&mut self) {
        let href = self
            .focused_link_row()
            .and_then(|row| self.document.lines[row].link.clone());
        if let Some(href) = href {
            self.follow(&href);
        }
    }

    /// Follow a link target: in-page fragments navigate, everything else
    /// is handed to the opener.
    pub fn follow(&mut self, href: &str) {
        if let Some(id) = href.strip_prefix('#').filter(|id| !id.is_empty()) {
            self.navigate(id);
            return;
        }

        match self.opener.open(href) {
            Ok(LinkOutcome::Opened(kind)) => {
                info!(href = %href, kind = ?kind, "Opened link");
                self.status = Some(match kind {
                    LinkKind::Mail => format!("Opened mail handler for {}", href),
                    LinkKind::Tel => format!("Opened phone handler for {}", href),
                    _ => format!("Opened {}", href),
                });
            }
            Ok(LinkOutcome::Ignored) => {
                self.status = Some("Link not available yet".to_string());
            }
            Err(e) => {
                warn!(href = %href, error = %e, "Failed to open link");
                self.status = Some(format!("Error: {}", e));
            }
        }
    }
}
