//! Floating navigation bar.
//!
//! One row of chapter labels plus a home glyph.  The entry matching the
//! resolver's active section renders highlighted; clicking any entry asks the
//! app to scroll there.  Hit zones are returned in screen coordinates, so
//! the mouse handler can test raw event positions against them directly.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::core::content::{HOME_SECTION, NAV_ITEMS};
use crate::core::geometry::SectionId;
use crate::ui::theme::Theme;

/// A clickable nav entry, in screen coordinates.
#[derive(Debug, Clone, Copy)]
pub struct NavHit {
    pub rect: Rect,
    pub id: SectionId,
}

pub struct NavBar {
    active: Option<SectionId>,
    scrolled: bool,
}

impl NavBar {
    pub fn new(active: Option<SectionId>, scrolled: bool) -> Self {
        Self { active, scrolled }
    }

    /// Render the bar and return the hit zones of the entries that fit.
    pub fn render_and_hit(&self, area: Rect, buf: &mut Buffer) -> Vec<NavHit> {
        let mut hits = Vec::new();
        if area.height == 0 || area.width < 8 {
            return hits;
        }

        Widget::render(
            ratatui::widgets::Block::default().style(Theme::nav_bar_style(self.scrolled)),
            area,
            buf,
        );

        // Home glyph pinned left, chapter labels centred in the rest.
        let home = " ⌂ ";
        buf.set_string(area.x, area.y, home, Theme::nav_inactive_style());
        hits.push(NavHit {
            rect: Rect::new(area.x, area.y, home.chars().count() as u16, 1),
            id: HOME_SECTION,
        });

        let labels_w: u16 = NAV_ITEMS
            .iter()
            .map(|item| item.label.chars().count() as u16 + 4)
            .sum();
        let left_pad = home.chars().count() as u16;
        let mut x = if area.width > labels_w {
            area.x + (area.width - labels_w) / 2
        } else {
            area.x + left_pad
        }
        .max(area.x + left_pad);

        for item in NAV_ITEMS {
            let label = format!("  {}  ", item.label);
            let w = label.chars().count() as u16;
            if x + w > area.x + area.width {
                break;
            }
            let style = if self.active == Some(item.id) {
                Theme::nav_active_style()
            } else {
                Theme::nav_inactive_style()
            };
            buf.set_stringn(x, area.y, &label, w as usize, style);
            hits.push(NavHit {
                rect: Rect::new(x, area.y, w, 1),
                id: item.id,
            });
            x += w;
        }

        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Position;

    #[test]
    fn every_entry_gets_a_hit_zone_on_a_wide_bar() {
        let area = Rect::new(0, 0, 120, 1);
        let mut buf = Buffer::empty(area);
        let hits = NavBar::new(None, false).render_and_hit(area, &mut buf);
        // Home plus each chapter label.
        assert_eq!(hits.len(), NAV_ITEMS.len() + 1);
        assert_eq!(hits[0].id, HOME_SECTION);
    }

    #[test]
    fn active_entry_is_highlighted() {
        let area = Rect::new(0, 0, 120, 1);
        let mut buf = Buffer::empty(area);
        let hits = NavBar::new(Some("rise"), false).render_and_hit(area, &mut buf);
        let rise = hits
            .iter()
            .find(|h| h.id == "rise")
            .copied()
            .unwrap();
        let cell = buf
            .cell(Position::new(rise.rect.x + 2, rise.rect.y))
            .unwrap();
        assert_eq!(cell.style().bg, Theme::nav_active_style().bg);
    }

    #[test]
    fn narrow_bar_drops_trailing_entries_instead_of_wrapping() {
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        let hits = NavBar::new(None, false).render_and_hit(area, &mut buf);
        assert!(hits.len() < NAV_ITEMS.len() + 1);
        for h in &hits {
            assert!(h.rect.x + h.rect.width <= 30);
        }
    }

    #[test]
    fn hit_zones_do_not_overlap() {
        let area = Rect::new(0, 0, 120, 1);
        let mut buf = Buffer::empty(area);
        let hits = NavBar::new(None, true).render_and_hit(area, &mut buf);
        for pair in hits.windows(2) {
            assert!(pair[0].rect.x + pair[0].rect.width <= pair[1].rect.x);
        }
    }
}
