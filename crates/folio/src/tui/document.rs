//! The portfolio laid out as terminal rows.
//!
//! [`Document::build`] flattens a [`Profile`] into styled lines at a given
//! width and records where each section starts. [`DocumentViewport`] is the
//! [`Viewport`] the controller drives: it owns the scroll position over
//! those rows and eases toward scroll targets one frame at a time.

use std::collections::HashMap;
use std::ops::Range;

use folio_core::{ElementRef, Viewport};
use folio_models::{Profile, SectionId, SocialLink};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Pixels reported per terminal row.
///
/// Offsets are exposed in page pixels so scroll thresholds mean the same
/// thing here as in the exported page.
pub const ROW_PX: u32 = 16;

/// Left margin for body text.
const INDENT: &str = "  ";

/// Narrowest layout width.
const MIN_WIDTH: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Plain,
    /// Placeholder for the typed hero name, filled in at draw time.
    HeroName,
}

/// One terminal row of the document.
#[derive(Debug, Clone)]
pub struct DocLine {
    pub line: Line<'static>,
    pub kind: LineKind,
    /// Reveal-once block this row belongs to.
    pub block: Option<usize>,
    /// Link target activated from this row.
    pub link: Option<String>,
}

/// A profile laid out at a fixed width.
#[derive(Debug, Clone)]
pub struct Document {
    pub lines: Vec<DocLine>,
    /// Section id to first row.
    pub anchors: HashMap<String, u32>,
    /// Number of reveal-once blocks.
    pub blocks: usize,
    /// Rows carrying a link, in document order.
    pub links: Vec<usize>,
    pub width: u16,
}

impl Document {
    /// Lay out `profile` for a content area `width` columns wide.
    pub fn build(profile: &Profile, width: u16, year: i32) -> Self {
        let mut b = Builder::new(width);

        b.anchor(SectionId::Top.as_str());
        b.anchor(SectionId::Hero.as_str());
        hero(&mut b, profile);

        b.anchor(SectionId::About.as_str());
        about(&mut b, profile);

        b.anchor(SectionId::Skills.as_str());
        skills(&mut b, profile);

        b.anchor(SectionId::Experience.as_str());
        experience(&mut b, profile);

        b.anchor(SectionId::Projects.as_str());
        projects(&mut b, profile);

        b.anchor(SectionId::Contact.as_str());
        contact(&mut b, profile);

        footer(&mut b, profile, year);
        b.finish()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Blocks with at least one row in `rows`.
    pub fn blocks_in(&self, rows: Range<u32>) -> Vec<usize> {
        let start = rows.start as usize;
        let end = (rows.end as usize).min(self.lines.len());
        let mut blocks: Vec<usize> = self
            .lines
            .get(start..end)
            .unwrap_or_default()
            .iter()
            .filter_map(|l| l.block)
            .collect();
        blocks.dedup();
        blocks
    }
}

/// Greedy word wrap by character count.
///
/// Words longer than `width` are kept whole on their own line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if len > 0 && len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            len = 0;
        }
        if len > 0 {
            current.push(' ');
            len += 1;
        }
        current.push_str(word);
        len += word_len;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

struct Builder {
    width: usize,
    lines: Vec<DocLine>,
    anchors: HashMap<String, u32>,
    blocks: usize,
    block: Option<usize>,
    links: Vec<usize>,
}

impl Builder {
    fn new(width: u16) -> Self {
        Self {
            width: usize::from(width).max(MIN_WIDTH),
            lines: Vec::new(),
            anchors: HashMap::new(),
            blocks: 0,
            block: None,
            links: Vec::new(),
        }
    }

    fn text_width(&self) -> usize {
        self.width - INDENT.len() * 2
    }

    fn anchor(&mut self, id: &str) {
        self.anchors.insert(id.to_string(), self.lines.len() as u32);
    }

    fn push_kind(&mut self, line: Line<'static>, kind: LineKind, link: Option<String>) {
        if link.is_some() {
            self.links.push(self.lines.len());
        }
        self.lines.push(DocLine {
            line,
            kind,
            block: self.block,
            link,
        });
    }

    fn push(&mut self, line: Line<'static>) {
        self.push_kind(line, LineKind::Plain, None);
    }

    fn blank(&mut self) {
        self.push(Line::default());
    }

    fn text(&mut self, text: &str, style: Style) {
        for row in wrap(text, self.text_width()) {
            self.push(Line::from(vec![Span::raw(INDENT), Span::styled(row, style)]));
        }
    }

    /// Wrapped text whose continuation rows line up after `marker`.
    fn item(&mut self, marker: &str, text: &str, style: Style) {
        let pad = " ".repeat(marker.chars().count());
        let width = self.text_width().saturating_sub(pad.len());
        for (i, row) in wrap(text, width).into_iter().enumerate() {
            let lead = if i == 0 { marker.to_string() } else { pad.clone() };
            self.push(Line::from(vec![
                Span::raw(INDENT),
                Span::styled(lead, Style::default().fg(Color::Cyan)),
                Span::styled(row, style),
            ]));
        }
    }

    fn heading(&mut self, title: &str) {
        self.blank();
        self.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(
                title.to_string(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]));
        self.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(
                "─".repeat(title.chars().count()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        self.blank();
    }

    fn link(&mut self, spans: Vec<Span<'static>>, href: &str) {
        let mut all = vec![Span::raw(INDENT)];
        all.extend(spans);
        self.push_kind(Line::from(all), LineKind::Plain, Some(href.to_string()));
    }

    fn social_link(&mut self, link: &SocialLink) {
        self.link(
            vec![
                Span::styled(
                    format!("[{}] ", link.icon.glyph()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(link.label.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!("  {}", link.href), Style::default().fg(Color::DarkGray)),
            ],
            &link.href,
        );
    }

    fn begin_block(&mut self) {
        self.block = Some(self.blocks);
        self.blocks += 1;
    }

    fn end_block(&mut self) {
        self.block = None;
    }

    fn finish(self) -> Document {
        Document {
            width: self.width as u16,
            lines: self.lines,
            anchors: self.anchors,
            blocks: self.blocks,
            links: self.links,
        }
    }
}

fn muted() -> Style {
    Style::default().fg(Color::Gray)
}

fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn hero(b: &mut Builder, profile: &Profile) {
    let hero = &profile.hero;

    b.blank();
    b.blank();
    b.push(Line::from(vec![
        Span::raw(INDENT),
        Span::styled(format!("( {} )", hero.badge), Style::default().fg(Color::Green)),
    ]));
    b.blank();
    b.text(hero.greeting.trim_end(), bold());
    b.push_kind(Line::default(), LineKind::HeroName, None);
    b.blank();
    b.text(&format!("A passionate {} {}", hero.role, hero.tagline), muted());
    b.blank();
    b.link(
        vec![Span::styled("▸ View Projects", Style::default().fg(Color::Cyan))],
        "#projects",
    );
    b.link(vec![Span::styled("▸ Contact Me", bold())], "#contact");
    b.blank();
    for link in &profile.hero_links {
        b.social_link(link);
    }
}

fn about(b: &mut Builder, profile: &Profile) {
    b.heading("About Me");

    b.begin_block();
    for paragraph in &profile.bio {
        b.text(paragraph, muted());
        b.blank();
    }
    for info in &profile.info {
        b.item(&format!("[{}] ", info.icon.glyph()), &info.text, Style::default());
    }
    b.end_block();

    b.blank();
    b.begin_block();
    b.text("Education", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    for entry in &profile.education {
        b.blank();
        b.text(&entry.label, Style::default().fg(Color::Cyan));
        b.text(&entry.degree, bold());
        b.text(&entry.institution, muted());
        if let Some(grade) = &entry.grade {
            b.text(&format!("[ {} ]", grade), Style::default().fg(Color::Yellow));
        }
    }
    b.end_block();
}

fn skills(b: &mut Builder, profile: &Profile) {
    b.heading("Technical Skills");
    b.text(&profile.skills_intro, muted());

    for group in &profile.skills {
        b.blank();
        b.begin_block();
        b.item(&format!("[{}] ", group.icon.glyph()), &group.title, bold());
        b.item("     ", &group.skills.join(" · "), Style::default());
        b.end_block();
    }
}

fn experience(b: &mut Builder, profile: &Profile) {
    b.heading("Professional Experience");

    for entry in &profile.experience {
        b.begin_block();
        b.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(entry.role.clone(), bold()),
            Span::raw("  "),
            Span::styled(format!("[{}]", entry.status), Style::default().fg(Color::Green)),
        ]));
        b.text(&entry.organization, Style::default().fg(Color::Cyan));
        b.text(&entry.duration, muted());
        b.blank();
        for bullet in &entry.responsibilities {
            b.item("• ", bullet, Style::default());
        }
        b.end_block();
        b.blank();
    }
}

fn projects(b: &mut Builder, profile: &Profile) {
    b.heading("Featured Projects");

    for project in &profile.projects {
        b.link(
            vec![
                Span::styled(project.title.clone(), bold()),
                Span::styled("  ↗", Style::default().fg(Color::Cyan)),
            ],
            &project.link,
        );
        b.text(&project.description, muted());
        for feature in &project.features {
            b.item("◦ ", feature, Style::default());
        }
        let tags: Vec<String> = project.tags.iter().map(|t| format!("[{}]", t)).collect();
        b.text(&tags.join(" "), Style::default().fg(Color::DarkGray));
        b.blank();
    }

    b.text("Achievements", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    b.blank();
    for achievement in &profile.achievements {
        b.item(&format!("{} ", achievement.emoji), &achievement.text, Style::default());
    }
}

fn contact(b: &mut Builder, profile: &Profile) {
    let c = &profile.contact;
    b.heading("Contact");

    b.begin_block();
    b.text("CALL ME DIRECTLY", Style::default().fg(Color::DarkGray));
    b.link(vec![Span::styled(c.phone_display.clone(), bold())], &c.phone_uri);
    b.end_block();
    b.blank();

    b.begin_block();
    b.text("DROP ME AN EMAIL", Style::default().fg(Color::DarkGray));
    b.link(vec![Span::styled(c.email.clone(), bold())], &format!("mailto:{}", c.email));
    b.end_block();
    b.blank();

    b.begin_block();
    b.text(&c.headline, bold());
    b.text(&c.pitch, muted());
    b.link(
        vec![Span::styled(
            format!("[ {} ]", c.action_label),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        )],
        &format!("mailto:{}", c.email),
    );
    b.end_block();
}

fn footer(b: &mut Builder, profile: &Profile, year: i32) {
    b.blank();
    b.push(Line::from(Span::styled(
        "─".repeat(b.width),
        Style::default().fg(Color::DarkGray),
    )));
    b.text(
        &format!("© {} {}. All rights reserved.", year, profile.name),
        Style::default().fg(Color::DarkGray),
    );
    for link in &profile.footer_links {
        b.social_link(link);
    }
    b.blank();
}

/// Scroll state over a [`Document`].
#[derive(Debug, Clone)]
pub struct DocumentViewport {
    offset: u32,
    target: Option<u32>,
    anchors: HashMap<String, u32>,
    total_rows: u32,
    height: u32,
}

impl DocumentViewport {
    pub fn new(document: &Document, height: u16) -> Self {
        Self {
            offset: 0,
            target: None,
            anchors: document.anchors.clone(),
            total_rows: document.len() as u32,
            height: u32::from(height),
        }
    }

    /// First visible row.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn max_offset(&self) -> u32 {
        self.total_rows.saturating_sub(self.height)
    }

    /// Rows currently on screen.
    pub fn visible_rows(&self) -> Range<u32> {
        self.offset..(self.offset + self.height).min(self.total_rows)
    }

    /// Whether a smooth scroll is in flight.
    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Scroll immediately by `delta` rows, cancelling any smooth scroll.
    ///
    /// Returns `true` if the offset changed.
    pub fn scroll_by(&mut self, delta: i64) -> bool {
        self.target = None;
        let next = (i64::from(self.offset) + delta).clamp(0, i64::from(self.max_offset()));
        self.set_offset(next as u32)
    }

    /// Jump to `row`, cancelling any smooth scroll.
    pub fn jump_to(&mut self, row: u32) -> bool {
        self.target = None;
        self.set_offset(row.min(self.max_offset()))
    }

    /// Advance a smooth scroll by one frame.
    ///
    /// Covers a third of the remaining distance, at least one row. Returns
    /// `true` if the offset changed.
    pub fn step(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };

        let distance = target.abs_diff(self.offset);
        let stride = (distance / 3).max(1);
        let next = if target > self.offset {
            self.offset + stride.min(distance)
        } else {
            self.offset - stride.min(distance)
        };
        if next == target {
            self.target = None;
        }
        self.set_offset(next)
    }

    /// Adopt a new layout, keeping the offset where possible.
    pub fn relayout(&mut self, document: &Document, height: u16) {
        self.anchors = document.anchors.clone();
        self.total_rows = document.len() as u32;
        self.height = u32::from(height);
        self.offset = self.offset.min(self.max_offset());
        self.target = self.target.map(|t| t.min(self.max_offset()));
    }

    fn set_offset(&mut self, offset: u32) -> bool {
        let changed = offset != self.offset;
        self.offset = offset;
        changed
    }
}

impl Viewport for DocumentViewport {
    fn current_scroll_offset(&self) -> u32 {
        self.offset.saturating_mul(ROW_PX)
    }

    fn find_element_by_id(&self, id: &str) -> Option<ElementRef> {
        self.anchors
            .get(id)
            .map(|row| ElementRef::new(id, row.saturating_mul(ROW_PX)))
    }

    fn smooth_scroll_to(&mut self, element: &ElementRef) {
        let row = (element.top / ROW_PX).min(self.max_offset());
        self.target = (row != self.offset).then_some(row);
    }

    fn scroll_to_top(&mut self) {
        self.target = (self.offset != 0).then_some(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> Document {
        Document::build(&Profile::builtin(), 80, 2025)
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap("", 10), vec![""]);
        assert_eq!(wrap("supercalifragilistic ok", 5), vec!["supercalifragilistic", "ok"]);
    }

    #[test]
    fn test_wrap_counts_chars_not_bytes() {
        assert_eq!(wrap("é é é", 3), vec!["é é", "é"]);
    }

    #[test]
    fn test_anchors_in_order() {
        let doc = document();
        assert_eq!(doc.anchors["top"], 0);
        assert_eq!(doc.anchors["hero"], 0);

        let rows: Vec<u32> = SectionId::ALL[2..]
            .iter()
            .map(|s| doc.anchors[s.as_str()])
            .collect();
        assert!(rows.windows(2).all(|w| w[0] < w[1]));
        assert!(*rows.last().unwrap() < doc.len() as u32);
    }

    #[test]
    fn test_single_hero_name_line() {
        let doc = document();
        let names = doc
            .lines
            .iter()
            .filter(|l| l.kind == LineKind::HeroName)
            .count();
        assert_eq!(names, 1);
    }

    #[test]
    fn test_links_recorded() {
        let doc = document();
        let hrefs: Vec<&str> = doc
            .links
            .iter()
            .filter_map(|&row| doc.lines[row].link.as_deref())
            .collect();
        assert!(hrefs.contains(&"https://inprofile.co"));
        assert!(hrefs.contains(&"tel:+917403518888"));
        assert!(hrefs.contains(&"#projects"));
    }

    #[test]
    fn test_narrow_layout_is_longer() {
        let wide = Document::build(&Profile::builtin(), 120, 2025);
        let narrow = Document::build(&Profile::builtin(), 30, 2025);
        assert!(narrow.len() > wide.len());
        assert!(narrow.blocks == wide.blocks);
    }

    #[test]
    fn test_blocks_in_range() {
        let doc = document();
        let about = doc.anchors["about"];
        let blocks = doc.blocks_in(about..about + 10);
        assert_eq!(blocks.first(), Some(&0));
        assert!(doc.blocks_in(0..3).is_empty());
    }

    #[test]
    fn test_viewport_reports_pixels() {
        let doc = document();
        let mut viewport = DocumentViewport::new(&doc, 20);
        viewport.scroll_by(4);
        assert_eq!(viewport.current_scroll_offset(), 4 * ROW_PX);

        let skills = viewport.find_element_by_id("skills").unwrap();
        assert_eq!(skills.top, doc.anchors["skills"] * ROW_PX);
        assert!(viewport.find_element_by_id("nope").is_none());
    }

    #[test]
    fn test_smooth_scroll_converges() {
        let doc = document();
        let mut viewport = DocumentViewport::new(&doc, 20);
        let target = viewport.find_element_by_id("experience").unwrap();
        viewport.smooth_scroll_to(&target);
        assert!(viewport.is_animating());

        let mut frames = 0;
        while viewport.step() {
            frames += 1;
            assert!(frames < 100);
        }
        assert!(!viewport.is_animating());
        assert_eq!(viewport.offset(), doc.anchors["experience"].min(viewport.max_offset()));
    }

    #[test]
    fn test_manual_scroll_cancels_animation() {
        let doc = document();
        let mut viewport = DocumentViewport::new(&doc, 20);
        viewport.jump_to(40);
        viewport.scroll_to_top();
        assert!(viewport.step());
        viewport.scroll_by(1);
        assert!(!viewport.is_animating());
    }

    #[test]
    fn test_scroll_clamped() {
        let doc = document();
        let mut viewport = DocumentViewport::new(&doc, 20);
        assert!(!viewport.scroll_by(-5));
        viewport.scroll_by(i64::from(u32::MAX));
        assert_eq!(viewport.offset(), viewport.max_offset());
    }
}
