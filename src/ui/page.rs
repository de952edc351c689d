//! Page layout and rendering — the document as a tall virtual canvas.
//!
//! [`PageLayout::build`] lays the static content out for a given terminal
//! size and produces (a) a flat list of positioned draw ops, (b) live
//! [`SectionBounds`] for the scroll-spy, (c) card slots for reveal/tilt, and
//! (d) document-space hit zones for clicks.  Layout is a pure function of
//! size × content, so it is rebuilt on resize and reused across frames.
//!
//! [`render_page`] paints the slice of the document currently inside the
//! viewport.  Cards and the timeline are rendered into scratch buffers and
//! blitted row-by-row so partially visible blocks clip cleanly at the
//! viewport edges.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
};

use crate::app::state::AppState;
use crate::core::content::{self, CardContent, CardSpan, Section, SectionBody};
use crate::core::geometry::{SectionBounds, SectionId};
use crate::ui::theme::Theme;

use super::card;
use super::timeline::{TimelineHit, TimelineWidget};

/// Gap between sections, and the vertical padding inside them.
const SECTION_GAP: usize = 4;
/// Gap between cards in a grid.
const CARD_GAP: usize = 1;
/// Total height of the timeline widget (selector strip + slide).
const TIMELINE_HEIGHT: usize = 18;

// ───────────────────────────────────────── document geometry ─

/// A rectangle in document space: `y`/`height` are document rows (unbounded),
/// `x`/`width` are terminal columns.
#[derive(Debug, Clone, Copy)]
pub struct PageRect {
    pub x: u16,
    pub y: usize,
    pub width: u16,
    pub height: usize,
}

impl PageRect {
    pub fn contains(&self, x: u16, y: usize) -> bool {
        x >= self.x
            && x < self.x + self.width
            && y >= self.y
            && y < self.y + self.height
    }

    /// Does this rect overlap the viewport rows `[top, bottom)`?
    pub fn intersects_rows(&self, top: usize, bottom: usize) -> bool {
        self.y < bottom && self.y + self.height > top
    }
}

// ───────────────────────────────────────── draw ops ──────────

/// Style class of a positioned text line.
#[derive(Debug, Clone, Copy)]
pub enum TextKind {
    HeroTitle,
    SectionTitle,
    Badge,
    Lede,
    Body,
    Muted,
    Hint,
}

impl TextKind {
    fn style(self) -> Style {
        match self {
            TextKind::HeroTitle => Theme::hero_title_style(),
            TextKind::SectionTitle => Theme::section_title_style(),
            TextKind::Badge => Theme::subtitle_badge_style(),
            TextKind::Lede => Theme::lede_style(),
            TextKind::Body => Theme::body_style(),
            TextKind::Muted => Theme::muted_style(),
            TextKind::Hint => Theme::rule_style(),
        }
    }
}

/// One positioned drawing primitive.
#[derive(Debug)]
pub enum DrawOp {
    Text {
        x: u16,
        y: usize,
        text: String,
        kind: TextKind,
    },
    /// Horizontal accent rule.
    Rule { x: u16, y: usize, width: u16 },
    /// Bento card; geometry lives in [`PageLayout::cards`].
    Card { slot: usize },
    /// The timeline carousel hub.
    Timeline { rect: PageRect },
    /// The tabbed cultural-analysis panel.
    Analysis { rect: PageRect },
}

/// Click actions resolvable from document-space hit zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    /// The hero scroll chevron.
    HeroChevron,
    /// A cultural-analysis tab.
    AnalysisTab(usize),
}

#[derive(Debug)]
pub struct PageHit {
    pub rect: PageRect,
    pub action: PageAction,
}

/// One bento card's place in the document.
#[derive(Debug)]
pub struct CardSlot {
    pub index: usize,
    pub section_id: SectionId,
    pub rect: PageRect,
    pub content: &'static CardContent,
}

// ───────────────────────────────────────── layout ────────────

/// The laid-out document.
#[derive(Debug)]
pub struct PageLayout {
    pub width: u16,
    pub viewport_height: u16,
    pub total_height: usize,
    pub sections: Vec<SectionBounds>,
    pub cards: Vec<CardSlot>,
    pub hits: Vec<PageHit>,
    pub ops: Vec<DrawOp>,
}

impl PageLayout {
    /// Lay out the whole document for a viewport of `width` × `viewport_height`.
    pub fn build(width: u16, viewport_height: u16) -> Self {
        let mut l = Layouter::new(width, viewport_height);
        for section in content::SECTIONS {
            l.section(section);
        }
        l.footer();
        l.finish()
    }

    /// Live bounds lookup for the activity resolver.
    pub fn bounds_of(&self, id: &str) -> Option<SectionBounds> {
        self.sections.iter().find(|b| b.id == id).copied()
    }

    /// Document top row of a section, for scroll-to-target.
    pub fn section_top(&self, id: &str) -> Option<usize> {
        self.bounds_of(id).map(|b| b.top as usize)
    }

    /// The card slot under a document-space point, if any.
    pub fn card_at(&self, x: u16, y: usize) -> Option<&CardSlot> {
        self.cards.iter().find(|c| c.rect.contains(x, y))
    }

    /// The first hit zone under a document-space point.
    pub fn hit_at(&self, x: u16, y: usize) -> Option<PageAction> {
        self.hits
            .iter()
            .find(|h| h.rect.contains(x, y))
            .map(|h| h.action)
    }
}

/// Greedy word wrap.  German body text here is single-width throughout, so
/// column count equals char count.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Incremental document layouter — walks sections top to bottom, emitting
/// draw ops and recording bounds as it goes.
struct Layouter {
    width: u16,
    viewport_height: u16,
    /// Left edge and width of the content column.
    margin: u16,
    content_w: u16,
    cursor: usize,
    sections: Vec<SectionBounds>,
    cards: Vec<CardSlot>,
    hits: Vec<PageHit>,
    ops: Vec<DrawOp>,
    next_card: usize,
}

impl Layouter {
    fn new(width: u16, viewport_height: u16) -> Self {
        let margin = if width > 100 { (width - 96) / 2 } else { 2.min(width / 8) };
        let content_w = width.saturating_sub(margin * 2).max(20);
        Self {
            width,
            viewport_height,
            margin,
            content_w,
            cursor: 0,
            sections: Vec::new(),
            cards: Vec::new(),
            hits: Vec::new(),
            ops: Vec::new(),
            next_card: 0,
        }
    }

    fn centered_x(&self, text_width: u16) -> u16 {
        (self.width.saturating_sub(text_width)) / 2
    }

    fn text(&mut self, x: u16, text: impl Into<String>, kind: TextKind) {
        self.ops.push(DrawOp::Text {
            x,
            y: self.cursor,
            text: text.into(),
            kind,
        });
    }

    fn centered_text(&mut self, text: impl Into<String>, kind: TextKind) {
        let text = text.into();
        let x = self.centered_x(text.chars().count() as u16);
        self.text(x, text, kind);
    }

    fn section(&mut self, section: &'static Section) {
        let top = self.cursor;
        match section.body {
            SectionBody::Hero { title_lines, hint } => self.hero(title_lines, hint),
            SectionBody::Prose { lede, paragraphs } => self.prose(lede, paragraphs),
            SectionBody::Timeline => {
                self.header(section);
                self.timeline();
            }
            SectionBody::Cards(cards) => {
                self.header(section);
                self.card_grid(section.id, cards);
            }
            SectionBody::Analysis => {
                self.header(section);
                self.analysis();
            }
        }
        self.cursor += SECTION_GAP;
        self.sections.push(SectionBounds {
            id: section.id,
            top: top as f64,
            height: (self.cursor - top) as f64,
        });
    }

    /// Full-viewport opener: spaced-out title near the vertical centre, a
    /// clickable scroll chevron near the bottom.
    fn hero(&mut self, title_lines: &[&str], hint: &str) {
        let top = self.cursor;
        let height = (self.viewport_height as usize).max(12);

        let mut y = top + height / 2 - title_lines.len();
        for line in title_lines {
            // Letter-space the title so it reads as display type.
            let spaced: String = line
                .chars()
                .flat_map(|c| [c, ' '])
                .collect::<String>()
                .trim_end()
                .to_string();
            let x = self.centered_x(spaced.chars().count() as u16);
            self.ops.push(DrawOp::Text {
                x,
                y,
                text: spaced,
                kind: TextKind::HeroTitle,
            });
            y += 2;
        }

        let chevron_y = top + height - 3;
        let x = self.centered_x(hint.chars().count() as u16);
        self.ops.push(DrawOp::Text {
            x,
            y: chevron_y,
            text: hint.to_string(),
            kind: TextKind::Hint,
        });
        self.hits.push(PageHit {
            rect: PageRect {
                x: x.saturating_sub(1),
                y: chevron_y,
                width: hint.chars().count() as u16 + 2,
                height: 1,
            },
            action: PageAction::HeroChevron,
        });

        self.cursor = top + height;
    }

    fn prose(&mut self, lede: &str, paragraphs: &[&str]) {
        self.cursor += SECTION_GAP;
        let quote_w = self.content_w.min(64);
        for line in wrap_text(lede, quote_w) {
            self.centered_text(line, TextKind::Lede);
            self.cursor += 1;
        }
        self.cursor += 1;
        let rule_w = 24u16.min(self.content_w);
        self.ops.push(DrawOp::Rule {
            x: self.centered_x(rule_w),
            y: self.cursor,
            width: rule_w,
        });
        self.cursor += 2;
        for para in paragraphs {
            for line in wrap_text(para, quote_w) {
                self.centered_text(line, TextKind::Muted);
                self.cursor += 1;
            }
            self.cursor += 1;
        }
    }

    /// Section header: subtitle badge, display title, accent rule.
    fn header(&mut self, section: &'static Section) {
        self.cursor += SECTION_GAP;
        if let Some(subtitle) = section.subtitle {
            let badge = format!("· {} ·", subtitle.to_uppercase());
            self.centered_text(badge, TextKind::Badge);
            self.cursor += 2;
        }
        self.centered_text(section.title, TextKind::SectionTitle);
        self.cursor += 1;
        let rule_w = 32u16.min(self.content_w);
        self.ops.push(DrawOp::Rule {
            x: self.centered_x(rule_w),
            y: self.cursor,
            width: rule_w,
        });
        self.cursor += 2;
    }

    fn timeline(&mut self) {
        let rect = PageRect {
            x: self.margin,
            y: self.cursor,
            width: self.content_w,
            height: TIMELINE_HEIGHT,
        };
        self.ops.push(DrawOp::Timeline { rect });
        self.cursor += TIMELINE_HEIGHT;
    }

    /// Bento grid: half-span cards pair up side by side when the content
    /// column is wide enough; everything else takes the full column.
    fn card_grid(&mut self, section_id: SectionId, cards: &'static [CardContent]) {
        let two_up = self.content_w >= 72;
        let half_w = (self.content_w - CARD_GAP as u16) / 2;

        let mut i = 0;
        while i < cards.len() {
            let a = &cards[i];
            let pair = two_up
                && a.span == CardSpan::Half
                && cards.get(i + 1).is_some_and(|b| b.span == CardSpan::Half);

            if pair {
                let b = &cards[i + 1];
                let ha = card::measure(a, half_w);
                let hb = card::measure(b, half_w);
                let h = ha.max(hb);
                self.card_slot(section_id, a, self.margin, half_w, h);
                self.card_slot(
                    section_id,
                    b,
                    self.margin + half_w + CARD_GAP as u16,
                    half_w,
                    h,
                );
                self.cursor += h as usize + CARD_GAP;
                i += 2;
            } else {
                let h = card::measure(a, self.content_w);
                self.card_slot(section_id, a, self.margin, self.content_w, h);
                self.cursor += h as usize + CARD_GAP;
                i += 1;
            }
        }
    }

    fn card_slot(
        &mut self,
        section_id: SectionId,
        content: &'static CardContent,
        x: u16,
        width: u16,
        height: u16,
    ) {
        let slot = self.cards.len();
        self.cards.push(CardSlot {
            index: self.next_card,
            section_id,
            rect: PageRect {
                x,
                y: self.cursor,
                width,
                height: height as usize,
            },
            content,
        });
        self.next_card += 1;
        self.ops.push(DrawOp::Card { slot });
    }

    fn analysis(&mut self) {
        // Panel height is the max over topics so switching tabs never
        // reflows the document below.
        let inner_w = self.content_w.saturating_sub(4);
        let body_h = content::ANALYSIS_TOPICS
            .iter()
            .map(|t| {
                let mut rows = 2; // title + gap
                for p in t.paragraphs {
                    rows += wrap_text(p, inner_w).len() + 1;
                }
                rows
            })
            .max()
            .unwrap_or(0);
        let height = 2 + body_h + 2; // tab row + gap + bordered panel padding

        let rect = PageRect {
            x: self.margin,
            y: self.cursor,
            width: self.content_w,
            height,
        };

        // Tab hit zones are static: equal thirds of the tab row.
        let tab_w = self.content_w / content::ANALYSIS_TOPICS.len() as u16;
        for (i, _) in content::ANALYSIS_TOPICS.iter().enumerate() {
            self.hits.push(PageHit {
                rect: PageRect {
                    x: self.margin + tab_w * i as u16,
                    y: self.cursor,
                    width: tab_w,
                    height: 1,
                },
                action: PageAction::AnalysisTab(i),
            });
        }

        self.ops.push(DrawOp::Analysis { rect });
        self.cursor += height;
    }

    fn footer(&mut self) {
        self.cursor += 2;
        self.centered_text("♛", TextKind::Muted);
        self.cursor += 1;
        self.centered_text("O S M A N I S C H E S   R E I C H", TextKind::Muted);
        self.cursor += 2;
    }

    fn finish(self) -> PageLayout {
        PageLayout {
            width: self.width,
            viewport_height: self.viewport_height,
            total_height: self.cursor,
            sections: self.sections,
            cards: self.cards,
            hits: self.hits,
            ops: self.ops,
        }
    }
}

// ───────────────────────────────────────── rendering ─────────

/// Paint the visible slice of the document and refresh the screen-space
/// timeline hit zones on `state`.
pub fn render_page(area: Rect, buf: &mut Buffer, state: &mut AppState) {
    let scroll = state.scroll.row();
    let view_top = scroll;
    let view_bottom = scroll + area.height as usize;

    let mut timeline_hits: Vec<TimelineHit> = Vec::new();

    for op in &state.layout.ops {
        match op {
            DrawOp::Text { x, y, text, kind } => {
                if *y >= view_top && *y < view_bottom {
                    let sy = area.y + (*y - scroll) as u16;
                    buf.set_stringn(
                        area.x + *x,
                        sy,
                        text,
                        area.width.saturating_sub(*x) as usize,
                        kind.style(),
                    );
                }
            }
            DrawOp::Rule { x, y, width } => {
                if *y >= view_top && *y < view_bottom {
                    let sy = area.y + (*y - scroll) as u16;
                    let w = (*width).min(area.width.saturating_sub(*x));
                    buf.set_string(area.x + *x, sy, "─".repeat(w as usize), Theme::rule_style());
                }
            }
            DrawOp::Card { slot } => {
                let slot = &state.layout.cards[*slot];
                let gate = &state.gates[slot.index];
                if !slot.rect.intersects_rows(view_top, view_bottom) {
                    continue;
                }
                // Unrevealed cards hold their space but stay dark.
                if gate.progress() == 0.0 {
                    continue;
                }
                let progress = gate.progress();
                // Reveal slides the card up from a few rows below its slot.
                let rise = ((1.0 - progress) * 3.0).round() as usize;
                let tilt = state
                    .hover
                    .filter(|h| h.card == slot.index)
                    .map(|h| h.tilt);

                let scratch = card::scratch(
                    slot.content,
                    slot.rect.width,
                    slot.rect.height as u16,
                    progress,
                    tilt,
                );
                blit(&scratch, buf, area, slot.rect.x, slot.rect.y + rise, scroll);
            }
            DrawOp::Timeline { rect } => {
                if !rect.intersects_rows(view_top, view_bottom) {
                    // Off-screen controls must not swallow clicks.
                    continue;
                }
                let widget = TimelineWidget::new(&state.carousel);
                let (scratch, local_hits) = widget.render_to_scratch(rect.width, rect.height as u16);
                blit(&scratch, buf, area, rect.x, rect.y, scroll);

                // Translate local hit rects to screen space, clipping rows
                // that fell outside the viewport.
                for hit in local_hits {
                    let doc_top = rect.y + hit.rect.y as usize;
                    let doc_bottom = doc_top + hit.rect.height as usize;
                    let clip_top = doc_top.max(view_top);
                    let clip_bottom = doc_bottom.min(view_bottom);
                    if clip_top >= clip_bottom {
                        continue;
                    }
                    timeline_hits.push(TimelineHit {
                        rect: Rect::new(
                            area.x + rect.x + hit.rect.x,
                            area.y + (clip_top - scroll) as u16,
                            hit.rect.width,
                            (clip_bottom - clip_top) as u16,
                        ),
                        action: hit.action,
                    });
                }
            }
            DrawOp::Analysis { rect } => {
                if !rect.intersects_rows(view_top, view_bottom) {
                    continue;
                }
                let scratch = render_analysis(rect.width, rect.height as u16, state.analysis_tab);
                blit(&scratch, buf, area, rect.x, rect.y, scroll);
            }
        }
    }

    state.timeline_hits = timeline_hits;

    render_scrollbar(
        area,
        state.layout.total_height,
        scroll,
        area.height as usize,
        buf,
    );
}

/// Copy the visible rows of a scratch buffer into the frame at document
/// position (`doc_x`, `doc_y`), clipping against `area`.
fn blit(src: &Buffer, dst: &mut Buffer, area: Rect, doc_x: u16, doc_y: usize, scroll: usize) {
    let src_area = *src.area();
    for row in 0..src_area.height {
        let y = doc_y + row as usize;
        if y < scroll {
            continue;
        }
        let sy = (y - scroll) as u16;
        if sy >= area.height {
            break;
        }
        for col in 0..src_area.width {
            let sx = doc_x + col;
            if sx >= area.width {
                break;
            }
            if let (Some(src_cell), Some(dst_cell)) = (
                src.cell(Position::new(col, row)),
                dst.cell_mut(Position::new(area.x + sx, area.y + sy)),
            ) {
                *dst_cell = src_cell.clone();
            }
        }
    }
}

/// The tabbed cultural-analysis panel: segmented control on top, one topic
/// body below.  Exactly one topic is active; switching never reflows.
fn render_analysis(width: u16, height: u16, active_tab: usize) -> Buffer {
    use ratatui::widgets::{Block, BorderType, Borders, Widget};

    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);

    let topics = content::ANALYSIS_TOPICS;
    let tab_w = width / topics.len() as u16;
    for (i, topic) in topics.iter().enumerate() {
        let style = if i == active_tab {
            Theme::tab_active_style()
        } else {
            Theme::tab_style()
        };
        let x = tab_w * i as u16;
        let label = format!("{:^1$}", topic.label, tab_w as usize);
        buf.set_stringn(x, 0, label, tab_w as usize, style);
    }

    let panel = Rect::new(0, 2, width, height.saturating_sub(2));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::card_border_style());
    let inner = block.inner(panel);
    block.render(panel, &mut buf);

    let topic = &topics[active_tab.min(topics.len() - 1)];
    let mut y = inner.y;
    buf.set_stringn(
        inner.x + 1,
        y,
        topic.title,
        inner.width.saturating_sub(2) as usize,
        Theme::card_title_style(),
    );
    y += 2;
    for para in topic.paragraphs {
        for line in wrap_text(para, inner.width.saturating_sub(2)) {
            if y >= inner.y + inner.height {
                break;
            }
            buf.set_stringn(
                inner.x + 1,
                y,
                line,
                inner.width.saturating_sub(2) as usize,
                Theme::body_style(),
            );
            y += 1;
        }
        y += 1;
    }

    buf
}

fn render_scrollbar(area: Rect, total: usize, offset: usize, visible: usize, buf: &mut Buffer) {
    if total <= visible || area.height < 2 || area.width == 0 {
        return;
    }
    let x = area.x + area.width.saturating_sub(1);
    let h = area.height as f64;
    let thumb_sz = ((visible as f64 / total as f64) * h).ceil().max(1.0) as u16;
    let max_off = total.saturating_sub(visible) as f64;
    let thumb_pos = if max_off > 0.0 {
        ((offset as f64 / max_off) * (h - thumb_sz as f64)).round() as u16
    } else {
        0
    };

    for row in 0..area.height {
        let is_thumb = row >= thumb_pos && row < thumb_pos + thumb_sz;
        let (ch, style) = if is_thumb {
            ('█', Theme::scrollbar_thumb_style())
        } else {
            ('│', Theme::scrollbar_track_style())
        };
        if let Some(cell) = buf.cell_mut(Position::new(x, area.y + row)) {
            cell.set_char(ch).set_style(style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_width() {
        let lines = wrap_text("eins zwei drei vier fünf", 9);
        assert_eq!(lines, vec!["eins zwei", "drei vier", "fünf"]);
        for line in &lines {
            assert!(line.chars().count() <= 9);
        }
    }

    #[test]
    fn wrap_keeps_overlong_words_whole() {
        let lines = wrap_text("Dardanellen-Geschütz ja", 10);
        assert_eq!(lines[0], "Dardanellen-Geschütz");
    }

    #[test]
    fn sections_are_contiguous_and_ordered() {
        let layout = PageLayout::build(100, 40);
        assert_eq!(layout.sections.len(), content::SECTIONS.len());

        let mut prev_bottom = 0.0;
        for bounds in &layout.sections {
            assert_eq!(bounds.top, prev_bottom, "gap before {}", bounds.id);
            assert!(bounds.height > 0.0);
            prev_bottom = bounds.bottom();
        }
        assert!(layout.total_height as f64 >= prev_bottom);
    }

    #[test]
    fn every_card_gets_a_slot_inside_its_section() {
        let layout = PageLayout::build(100, 40);
        assert_eq!(layout.cards.len(), content::card_count());

        for slot in &layout.cards {
            let bounds = layout.bounds_of(slot.section_id).unwrap();
            assert!(slot.rect.y as f64 >= bounds.top);
            assert!((slot.rect.y + slot.rect.height) as f64 <= bounds.bottom());
        }
    }

    #[test]
    fn card_indices_are_stable_and_dense() {
        let layout = PageLayout::build(100, 40);
        for (i, slot) in layout.cards.iter().enumerate() {
            assert_eq!(slot.index, i);
        }
    }

    #[test]
    fn narrow_terminal_still_lays_out() {
        let layout = PageLayout::build(40, 20);
        assert!(layout.total_height > 0);
        assert_eq!(layout.sections.len(), content::SECTIONS.len());
    }

    #[test]
    fn layout_is_deterministic() {
        let a = PageLayout::build(100, 40);
        let b = PageLayout::build(100, 40);
        assert_eq!(a.total_height, b.total_height);
        for (ba, bb) in a.sections.iter().zip(&b.sections) {
            assert_eq!(ba, bb);
        }
    }

    #[test]
    fn analysis_tabs_have_hit_zones() {
        let layout = PageLayout::build(100, 40);
        let tabs: Vec<_> = layout
            .hits
            .iter()
            .filter(|h| matches!(h.action, PageAction::AnalysisTab(_)))
            .collect();
        assert_eq!(tabs.len(), content::ANALYSIS_TOPICS.len());
    }

    #[test]
    fn hero_chevron_is_clickable() {
        let layout = PageLayout::build(100, 40);
        let chevron = layout
            .hits
            .iter()
            .find(|h| h.action == PageAction::HeroChevron)
            .unwrap();
        // Chevron sits inside the hero section.
        let hero = layout.bounds_of("hero").unwrap();
        assert!((chevron.rect.y as f64) < hero.bottom());
    }
}
