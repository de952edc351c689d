//! Central application state.

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::carousel::Carousel;
use crate::core::content;
use crate::core::reveal::RevealGate;
use crate::core::spy::ActivityResolver;
use crate::core::tilt::{TiltEngine, TiltTransform};
use crate::ui::nav::NavHit;
use crate::ui::page::PageLayout;
use crate::ui::scroll::ScrollAnimator;
use crate::ui::timeline::TimelineHit;

/// The card currently under the pointer, with its live tilt transform.
#[derive(Debug, Clone, Copy)]
pub struct CardHover {
    pub card: usize,
    pub tilt: TiltTransform,
}

pub struct AppState {
    pub config: AppConfig,

    /// Laid-out document for the current terminal size.
    pub layout: PageLayout,
    /// Screen rect of the page viewport, updated each frame.
    pub page_area: Rect,

    pub scroll: ScrollAnimator,
    pub resolver: ActivityResolver,
    pub carousel: Carousel,
    /// One reveal gate per bento card, indexed by card slot.
    pub gates: Vec<RevealGate>,
    pub tilt: TiltEngine,
    pub hover: Option<CardHover>,
    pub analysis_tab: usize,

    /// Screen-space hit zones refreshed by the renderers each frame.
    pub nav_hits: Vec<NavHit>,
    pub timeline_hits: Vec<TimelineHit>,

    pub should_quit: bool,
    pub status_message: Option<String>,
    /// Skip entrance and scroll animations entirely.
    pub no_anim: bool,
}

impl AppState {
    pub fn new(config: AppConfig, width: u16, viewport_height: u16, no_anim: bool) -> Self {
        let t = config.tuning;
        let layout = PageLayout::build(width, viewport_height);

        let mut scroll = ScrollAnimator::new(t.scroll_speed);
        scroll.set_instant(no_anim);
        scroll.set_range(layout.total_height as f64, f64::from(viewport_height));

        let gates = (0..content::card_count())
            .map(|_| RevealGate::new(t.reveal_ease))
            .collect();

        Self {
            layout,
            page_area: Rect::new(0, 0, width, viewport_height),
            scroll,
            resolver: ActivityResolver::new(content::section_ids(), t.probe_divisor),
            carousel: Carousel::new(content::TIMELINE_EVENTS, t.carousel_ease),
            gates,
            tilt: TiltEngine::new(t.tilt_max_deg, t.lift_scale),
            hover: None,
            analysis_tab: 0,
            nav_hits: Vec::new(),
            timeline_hits: Vec::new(),
            should_quit: false,
            status_message: None,
            no_anim,
            config,
        }
    }

    /// Rebuild the document layout for a new viewport size.  Scroll position
    /// is kept (re-clamped to the new document height); reveal gates and the
    /// carousel carry over untouched.
    pub fn relayout(&mut self, width: u16, viewport_height: u16) {
        self.layout = PageLayout::build(width, viewport_height);
        self.scroll
            .set_range(self.layout.total_height as f64, f64::from(viewport_height));
        // Stale hover geometry would point at the old layout.
        self.hover = None;
        tracing::debug!(
            width,
            viewport_height,
            total = self.layout.total_height,
            "page relayout"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(AppConfig::load(), 100, 40, false)
    }

    #[test]
    fn one_gate_per_card() {
        let s = state();
        assert_eq!(s.gates.len(), s.layout.cards.len());
    }

    #[test]
    fn relayout_keeps_scroll_in_range() {
        let mut s = state();
        s.scroll.jump_to(1.0e9);
        let before = s.scroll.offset();
        assert!(before <= s.layout.total_height as f64);

        s.relayout(60, 20);
        assert!(s.scroll.offset() <= s.layout.total_height as f64);
        assert!(s.hover.is_none());
    }
}
