//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// The chronicle's accent gold.
pub const GOLD: Color = Color::Rgb(212, 175, 55);
/// Card panel background.
pub const PANEL: Color = Color::Rgb(28, 28, 30);
/// Near-black background for dark cards.
pub const INK: Color = Color::Rgb(10, 10, 10);

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── headings ───────────────────────────────────────────────
    pub fn hero_title_style() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn section_title_style() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn subtitle_badge_style() -> Style {
        Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
    }

    pub fn rule_style() -> Style {
        Style::default().fg(GOLD)
    }

    // ── body text ──────────────────────────────────────────────
    pub fn lede_style() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn body_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn muted_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    // ── nav bar ────────────────────────────────────────────────
    pub fn nav_active_style() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_inactive_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    /// Elevated nav chrome once the page has scrolled past the threshold.
    pub fn nav_bar_style(scrolled: bool) -> Style {
        if scrolled {
            Style::default().bg(Color::Rgb(18, 18, 20))
        } else {
            Style::default()
        }
    }

    // ── cards ──────────────────────────────────────────────────
    pub fn card_border_style() -> Style {
        Style::default().fg(Color::Rgb(60, 60, 64))
    }

    /// Border while the pointer hovers (card lifted toward the cursor).
    pub fn card_lift_border_style() -> Style {
        Style::default().fg(Color::Rgb(140, 140, 148))
    }

    /// The glare accent on the edge tilted toward the viewer.
    pub fn card_glare_style() -> Style {
        Style::default().fg(GOLD)
    }

    pub fn card_title_style() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn card_icon_style() -> Style {
        Style::default().fg(GOLD)
    }

    /// Card text while the reveal animation is still easing in.
    pub fn card_revealing_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn image_band_style() -> Style {
        Style::default().fg(Color::Rgb(70, 60, 40)).bg(INK)
    }

    pub fn image_caption_style() -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    }

    // ── timeline ───────────────────────────────────────────────
    pub fn strip_year_active_style() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn strip_year_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn strip_dot_active_style() -> Style {
        Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
    }

    pub fn strip_line_style() -> Style {
        Style::default().fg(Color::Rgb(50, 50, 54))
    }

    pub fn slide_year_style() -> Style {
        Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
    }

    pub fn chapter_button_style() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    // ── analysis tabs ──────────────────────────────────────────
    pub fn tab_active_style() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Color::Rgb(58, 58, 60))
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_style() -> Style {
        Style::default().fg(Color::Gray).bg(PANEL)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::Rgb(18, 18, 20)).fg(Color::Gray)
    }

    pub fn scrollbar_thumb_style() -> Style {
        Style::default().fg(GOLD)
    }

    pub fn scrollbar_track_style() -> Style {
        Style::default().fg(Color::Rgb(40, 40, 44))
    }
}
