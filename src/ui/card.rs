//! Bento card rendering.
//!
//! Cards are drawn into scratch buffers sized to their document slot, then
//! blitted by the page renderer so they clip cleanly at the viewport edges.
//! Two presentation effects feed in from the core:
//!
//! - **Reveal**: until the one-shot gate fires, the slot stays empty; while
//!   the reveal progress eases in, the card body renders dimmed (the page
//!   renderer adds the upward slide).
//! - **Tilt**: while the pointer hovers, the border lifts and the edge the
//!   card tilts toward the viewer catches a glare accent.  The transform is
//!   consumed here only — it never reaches any other component.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    widgets::{Block, BorderType, Borders, Widget},
};

use crate::core::content::{CardArt, CardContent};
use crate::core::tilt::TiltTransform;
use crate::ui::theme::{Theme, INK, PANEL};

use super::page::wrap_text;

/// Height of the textured placeholder band on image cards.
const IMAGE_BAND_H: usize = 4;

/// Rotation below which an edge shows no glare (degrees).
const GLARE_THRESHOLD: f64 = 1.0;

// ───────────────────────────────────────── composition ───────

enum CardRow {
    Band,
    Blank,
    Title,
    Text(String),
}

/// Flatten a card's content into rows for the given inner width.  Measure
/// and render both go through this, so heights always agree.
fn compose(content: &CardContent, inner_w: u16) -> Vec<CardRow> {
    let mut rows = Vec::new();

    if matches!(content.art, CardArt::Image(_)) {
        for _ in 0..IMAGE_BAND_H {
            rows.push(CardRow::Band);
        }
        rows.push(CardRow::Blank);
    }
    if content.title.is_some() {
        rows.push(CardRow::Title);
        rows.push(CardRow::Blank);
    }
    for (i, para) in content.paragraphs.iter().enumerate() {
        if i > 0 {
            rows.push(CardRow::Blank);
        }
        for line in wrap_text(para, inner_w) {
            rows.push(CardRow::Text(line));
        }
    }
    while matches!(rows.last(), Some(CardRow::Blank)) {
        rows.pop();
    }
    rows
}

/// Height in rows a card needs at `width` columns (borders included).
pub fn measure(content: &CardContent, width: u16) -> u16 {
    let inner_w = width.saturating_sub(4).max(10);
    compose(content, inner_w).len() as u16 + 2
}

// ───────────────────────────────────────── rendering ─────────

/// Render a card into a scratch buffer of exactly `width` × `height`.
///
/// `reveal` in `(0, 1]` dims the body while the entrance animation eases;
/// `tilt` is present only while the pointer hovers this card.
pub fn scratch(
    content: &CardContent,
    width: u16,
    height: u16,
    reveal: f64,
    tilt: Option<TiltTransform>,
) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);

    let bg = match content.art {
        CardArt::Dark => INK,
        _ => PANEL,
    };
    let border_style = if tilt.is_some_and(|t| t.scale > 1.0) {
        Theme::card_lift_border_style()
    } else {
        Theme::card_border_style()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    block.render(area, &mut buf);

    let revealing = reveal < 1.0;
    let body_style = if revealing {
        Theme::card_revealing_style()
    } else {
        Theme::body_style()
    };

    let inner_w = width.saturating_sub(4).max(10);
    let mut y = inner.y;
    for row in compose(content, inner_w) {
        if y >= inner.y + inner.height {
            break;
        }
        match row {
            CardRow::Band => {
                if let CardArt::Image(key) = content.art {
                    render_band_row(&mut buf, inner, y, key);
                }
            }
            CardRow::Blank => {}
            CardRow::Title => {
                let mut x = inner.x + 1;
                if let Some(icon) = content.icon {
                    buf.set_string(x, y, icon, Theme::card_icon_style());
                    x += 2;
                }
                if let Some(title) = content.title {
                    let style = if revealing {
                        Theme::card_revealing_style()
                    } else {
                        Theme::card_title_style()
                    };
                    buf.set_stringn(x, y, title, (inner.width.saturating_sub(2)) as usize, style);
                }
            }
            CardRow::Text(line) => {
                buf.set_stringn(
                    inner.x + 1,
                    y,
                    line,
                    inner.width.saturating_sub(2) as usize,
                    body_style,
                );
            }
        }
        y += 1;
    }

    if let Some(t) = tilt {
        render_glare(&mut buf, area, t);
    }

    buf
}

/// One row of the textured placeholder band.  The pattern is a stable hash
/// of the asset key so each image reads as a distinct texture, with the key
/// captioned on the band's last row.
fn render_band_row(buf: &mut Buffer, inner: Rect, y: u16, key: &str) {
    let seed: u32 = key.bytes().map(u32::from).sum();
    let glyphs = ['░', '▒', '▓'];
    let row = y - inner.y;

    for col in 0..inner.width {
        let n = (seed
            .wrapping_add(u32::from(col).wrapping_mul(7))
            .wrapping_add(u32::from(row).wrapping_mul(13)))
            % 4;
        let ch = glyphs.get(n as usize).copied().unwrap_or(' ');
        if let Some(cell) = buf.cell_mut(Position::new(inner.x + col, y)) {
            cell.set_char(ch).set_style(Theme::image_band_style());
        }
    }

    if row as usize == IMAGE_BAND_H - 1 {
        let caption = format!(" {key} ");
        buf.set_stringn(
            inner.x + 1,
            y,
            caption,
            inner.width.saturating_sub(2) as usize,
            Theme::image_caption_style(),
        );
    }
}

/// Restyle the border edge tilted toward the viewer.  A positive `rotate_x`
/// means the cursor is near the top edge, so the top catches the light; a
/// positive `rotate_y` means the cursor is near the right edge.
fn render_glare(buf: &mut Buffer, area: Rect, t: TiltTransform) {
    let glare = Theme::card_glare_style();
    let right = area.width.saturating_sub(1);
    let bottom = area.height.saturating_sub(1);

    if t.rotate_x > GLARE_THRESHOLD {
        for x in 0..area.width {
            if let Some(cell) = buf.cell_mut(Position::new(x, 0)) {
                cell.set_style(glare);
            }
        }
    } else if t.rotate_x < -GLARE_THRESHOLD {
        for x in 0..area.width {
            if let Some(cell) = buf.cell_mut(Position::new(x, bottom)) {
                cell.set_style(glare);
            }
        }
    }

    if t.rotate_y > GLARE_THRESHOLD {
        for y in 0..area.height {
            if let Some(cell) = buf.cell_mut(Position::new(right, y)) {
                cell.set_style(glare);
            }
        }
    } else if t.rotate_y < -GLARE_THRESHOLD {
        for y in 0..area.height {
            if let Some(cell) = buf.cell_mut(Position::new(0, y)) {
                cell.set_style(glare);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::CardSpan;

    static TEXT_CARD: CardContent = CardContent {
        title: Some("Strategie"),
        icon: Some("⚔"),
        art: CardArt::Dark,
        span: CardSpan::Half,
        paragraphs: &["Mehmed II. bestieg 1451 den Thron."],
    };

    static IMAGE_ONLY_CARD: CardContent = CardContent {
        title: None,
        icon: None,
        art: CardArt::Image("bursa"),
        span: CardSpan::Full,
        paragraphs: &[],
    };

    #[test]
    fn measure_matches_rendered_rows() {
        for width in [30u16, 48, 80] {
            let h = measure(&TEXT_CARD, width);
            let buf = scratch(&TEXT_CARD, width, h, 1.0, None);
            assert_eq!(buf.area().height, h);
        }
    }

    #[test]
    fn image_only_card_is_band_plus_borders() {
        let h = measure(&IMAGE_ONLY_CARD, 40);
        assert_eq!(h as usize, IMAGE_BAND_H + 2);
    }

    #[test]
    fn narrower_cards_grow_taller() {
        let wide = measure(&TEXT_CARD, 80);
        let narrow = measure(&TEXT_CARD, 30);
        assert!(narrow >= wide);
    }

    #[test]
    fn title_is_painted() {
        let h = measure(&TEXT_CARD, 40);
        let buf = scratch(&TEXT_CARD, 40, h, 1.0, None);
        let row: String = (0..40)
            .filter_map(|x| buf.cell(Position::new(x, 1)).map(|c| c.symbol().to_string()))
            .collect();
        assert!(row.contains("Strategie"));
    }

    #[test]
    fn hover_tilt_restyles_the_facing_edge() {
        let h = measure(&TEXT_CARD, 40);
        let tilt = TiltTransform {
            rotate_x: 6.0,
            rotate_y: 0.0,
            scale: 1.02,
        };
        let buf = scratch(&TEXT_CARD, 40, h, 1.0, Some(tilt));
        let top_left = buf.cell(Position::new(0, 0)).unwrap();
        assert_eq!(top_left.style().fg, Theme::card_glare_style().fg);
    }

    #[test]
    fn identity_tilt_leaves_the_border_alone() {
        let h = measure(&TEXT_CARD, 40);
        let buf = scratch(&TEXT_CARD, 40, h, 1.0, Some(TiltTransform::IDENTITY));
        let top_left = buf.cell(Position::new(0, 0)).unwrap();
        assert_eq!(top_left.style().fg, Theme::card_border_style().fg);
    }
}
