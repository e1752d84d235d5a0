//! TUI rendering using ratatui.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use folio_models::NAV_ITEMS;

use super::app::{App, BlockVisibility, ClickAction, ClickableItem};
use super::document::{DocLine, LineKind};

/// Below this width the nav collapses into the menu toggle.
const MOBILE_BREAKPOINT: u16 = 72;

const MENU_WIDTH: u16 = 24;

/// Draw the TUI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    // Clear clickable items before each render cycle
    app.clear_clickable_items();

    let nav_height = if app.controller.nav_condensed() { 1 } else { 3 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(nav_height), // Navigation bar
            Constraint::Min(3),             // Document
            Constraint::Length(1),          // Footer
        ])
        .split(frame.area());

    app.resize(chunks[1].width, chunks[1].height);

    draw_nav(frame, app, chunks[0]);
    draw_document(frame, app, chunks[1]);
    draw_footer(frame, app, chunks[2]);

    if app.controller.mobile_menu_open() {
        draw_menu(frame, app, chunks[1]);
    }

    app.content_area = Some(chunks[1]);
}

/// Draw the fixed navigation bar.
fn draw_nav(frame: &mut Frame, app: &mut App, area: Rect) {
    let condensed = app.controller.nav_condensed();
    let style = if condensed {
        Style::default().bg(Color::Rgb(17, 26, 46)).fg(Color::White)
    } else {
        Style::default()
    };
    // The expanded bar pads one row above and below
    let row = Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    };
    frame.render_widget(Block::default().style(style), area);

    let logo = format!(" {} ", app.profile.short_name);
    let logo_width = logo.chars().count() as u16;
    let logo_rect = Rect {
        width: logo_width.min(row.width),
        ..row
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            logo,
            style.fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        logo_rect,
    );
    app.add_clickable_item(logo_rect, ClickAction::ScrollTop);

    if row.width < MOBILE_BREAKPOINT {
        let label = if app.controller.mobile_menu_open() { " ✕ " } else { " ≡ " };
        let toggle = Rect {
            x: row.x + row.width.saturating_sub(4),
            width: 3.min(row.width),
            ..row
        };
        frame.render_widget(Paragraph::new(Span::styled(label, style)), toggle);
        app.add_clickable_item(toggle, ClickAction::ToggleMenu);
        return;
    }

    // Desktop items, right aligned
    let labels: Vec<String> = NAV_ITEMS
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{} {}", i + 1, item.label))
        .collect();
    let total: u16 = labels.iter().map(|l| l.chars().count() as u16 + 3).sum();
    let mut x = row.x + row.width.saturating_sub(total);
    for (label, item) in labels.into_iter().zip(NAV_ITEMS.iter()) {
        let width = label.chars().count() as u16;
        let rect = Rect { x, width, ..row };
        frame.render_widget(
            Paragraph::new(Span::styled(label, style.fg(Color::Gray))),
            rect,
        );
        app.add_clickable_item(rect, ClickAction::Navigate(item.target().to_string()));
        x += width + 3;
    }
}

fn block_style(app: &App, line: &DocLine) -> Option<Style> {
    match line.block.map(|b| app.block_visibility(b)) {
        Some(BlockVisibility::Hidden) => Some(Style::default().fg(Color::Black)),
        Some(BlockVisibility::Fading) => Some(Style::default().fg(Color::DarkGray)),
        _ => None,
    }
}

fn hero_name_line(app: &App) -> Line<'static> {
    let mut spans = vec![
        Span::raw("  "),
        Span::styled(
            app.controller.revealed_text().to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
    ];
    spans.push(Span::styled(
        "|",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::SLOW_BLINK),
    ));
    Line::from(spans)
}

/// Draw the visible slice of the document.
fn draw_document(frame: &mut Frame, app: &mut App, area: Rect) {
    let rows = app.controller.viewport().visible_rows();
    let focused = app.focused_link_row();

    let mut lines: Vec<Line> = Vec::with_capacity(area.height as usize);
    let mut links: Vec<(u16, String)> = Vec::new();

    for (screen_row, index) in (rows.start as usize..rows.end as usize).enumerate() {
        let Some(doc_line) = app.document.lines.get(index) else {
            break;
        };

        let mut line = match doc_line.kind {
            LineKind::HeroName => hero_name_line(app),
            LineKind::Plain => doc_line.line.clone(),
        };
        if let Some(style) = block_style(app, doc_line) {
            line = line.patch_style(style);
        }
        if focused == Some(index) {
            line = line.patch_style(Style::default().add_modifier(Modifier::REVERSED));
        }
        if let Some(href) = &doc_line.link {
            links.push((screen_row as u16, href.clone()));
        }
        lines.push(line);
    }

    for (screen_row, href) in links {
        let rect = Rect {
            y: area.y + screen_row,
            height: 1,
            ..area
        };
        app.add_clickable_item(rect, ClickAction::OpenLink(href));
    }

    frame.render_widget(Paragraph::new(Text::from(lines)), area);
}

/// Draw the mobile menu over the top right of the document.
fn draw_menu(frame: &mut Frame, app: &mut App, area: Rect) {
    let width = MENU_WIDTH.min(area.width);
    let height = (NAV_ITEMS.len() as u16 + 2).min(area.height);
    let menu_area = Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height,
    };

    let items: Vec<ListItem> = NAV_ITEMS
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let marker = if i == app.menu_selected { ">" } else { " " };
            let style = if i == app.menu_selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!(" {} {} {}", marker, i + 1, item.label)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Menu "),
    );
    frame.render_widget(Clear, menu_area);
    frame.render_widget(list, menu_area);

    for (i, item) in NAV_ITEMS.iter().enumerate() {
        let y = menu_area.y + 1 + i as u16;
        if y + 1 >= menu_area.y + menu_area.height {
            break;
        }
        let rect = Rect {
            x: menu_area.x + 1,
            y,
            width: menu_area.width.saturating_sub(2),
            height: 1,
        };
        // Drawn over the document, so checked first
        let action = ClickAction::Navigate(item.target().to_string());
        app.clickable_items.insert(0, ClickableItem { rect, action });
    }
}

/// Draw the footer with keybindings and status.
fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let viewport = app.controller.viewport();
    let percent = if viewport.max_offset() == 0 {
        100
    } else {
        viewport.offset() * 100 / viewport.max_offset()
    };

    let keys = if app.controller.mobile_menu_open() {
        "↑/↓ select | Enter go | m/Esc close"
    } else {
        "j/k scroll | 1-5 sections | m menu | Tab links | o open | q quit"
    };

    let text = match &app.status {
        Some(status) => format!(" {:>3}% | {} | {} ", percent, status, keys),
        None => format!(" {:>3}% | {} ", percent, keys),
    };
    let footer = Paragraph::new(text)
        .alignment(Alignment::Left)
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(footer, area);
}
