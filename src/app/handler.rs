//! Input handling and the per-tick update pipeline.
//!
//! Every scroll mutation funnels through [`scroll_to_section`] or the
//! animator directly; [`sync_viewport`] then derives the active section and
//! feeds the reveal gates from the *animated* position, so spy and reveal
//! behave identically for wheel, keys, and programmatic jumps.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::config::Action;
use crate::core::content::HERO_CHEVRON_TARGET;
use crate::core::geometry::{SectionId, ViewportSample};
use crate::ui::page::PageAction;
use crate::ui::timeline::TimelineAction;

use super::state::{AppState, CardHover};

/// Fraction of the viewport a PageUp/PageDown moves.
const PAGE_FRACTION: f64 = 0.8;

// ───────────────────────────────────────── keys ──────────────

pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+C quits regardless of bindings.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.should_quit = true;
        return;
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };

    let step = state.config.tuning.wheel_step_rows;
    let page = f64::from(state.page_area.height) * PAGE_FRACTION;

    match action {
        Action::ScrollUp => state.scroll.scroll_by(-step),
        Action::ScrollDown => state.scroll.scroll_by(step),
        Action::PageUp => state.scroll.scroll_by(-page),
        Action::PageDown => state.scroll.scroll_by(page),
        Action::JumpTop => state.scroll.scroll_to(0.0),
        Action::JumpBottom => state.scroll.scroll_to(state.layout.total_height as f64),
        Action::PrevSlide => {
            let i = state.carousel.selected();
            if i > 0 {
                state.carousel.select(i - 1);
            }
        }
        Action::NextSlide => {
            state.carousel.select(state.carousel.selected() + 1);
        }
        Action::OpenChapter => {
            scroll_to_section(state, state.carousel.destination());
        }
        Action::PrevSection => jump_section(state, -1),
        Action::NextSection => jump_section(state, 1),
        Action::CycleAnalysis => {
            state.analysis_tab =
                (state.analysis_tab + 1) % crate::core::content::ANALYSIS_TOPICS.len();
        }
        Action::Quit => state.should_quit = true,
    }
}

/// Scroll to the section `delta` steps away from the active one in layout
/// order.
fn jump_section(state: &mut AppState, delta: isize) {
    let sections = state.resolver.sections();
    let current = state
        .resolver
        .active()
        .and_then(|id| sections.iter().position(|s| s.id == id))
        .unwrap_or(0);
    let next = sections
        .get(current.saturating_add_signed(delta))
        .map(|s| s.id);
    if let Some(id) = next {
        scroll_to_section(state, id);
    }
}

// ───────────────────────────────────────── mouse ─────────────

pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    let step = state.config.tuning.wheel_step_rows;

    match mouse.kind {
        MouseEventKind::ScrollUp => state.scroll.scroll_by(-step),
        MouseEventKind::ScrollDown => state.scroll.scroll_by(step),
        MouseEventKind::Moved => update_hover(state, mouse.column, mouse.row),
        MouseEventKind::Down(MouseButton::Left) => handle_click(state, mouse.column, mouse.row),
        _ => {}
    }
}

/// Track the pointer: when it sits over a card, derive the tilt transform
/// from its position within that card; anywhere else, release the hover so
/// the card snaps back to its resting pose.
fn update_hover(state: &mut AppState, column: u16, row: u16) {
    let Some((doc_x, doc_y)) = to_document(state, column, row) else {
        state.hover = None;
        return;
    };
    let Some(slot) = state.layout.card_at(doc_x, doc_y) else {
        state.hover = None;
        return;
    };

    let tilt = state.tilt.at(
        f64::from(doc_x - slot.rect.x),
        (doc_y - slot.rect.y) as f64,
        f64::from(slot.rect.width),
        slot.rect.height as f64,
    );
    state.hover = Some(CardHover {
        card: slot.index,
        tilt,
    });
}

fn handle_click(state: &mut AppState, column: u16, row: u16) {
    let pos = Position::new(column, row);

    // Screen-space zones first: nav bar, then the timeline controls.
    if let Some(hit) = state.nav_hits.iter().find(|h| h.rect.contains(pos)) {
        let id = hit.id;
        scroll_to_section(state, id);
        return;
    }
    if let Some(hit) = state.timeline_hits.iter().find(|h| h.rect.contains(pos)) {
        match hit.action {
            TimelineAction::SelectSlide(i) => state.carousel.select(i),
            TimelineAction::OpenChapter => {
                scroll_to_section(state, state.carousel.destination());
            }
        }
        return;
    }

    // Document-space zones.
    if let Some((doc_x, doc_y)) = to_document(state, column, row) {
        match state.layout.hit_at(doc_x, doc_y) {
            Some(PageAction::HeroChevron) => scroll_to_section(state, HERO_CHEVRON_TARGET),
            Some(PageAction::AnalysisTab(i)) => state.analysis_tab = i,
            None => {}
        }
    }
}

/// Translate screen coordinates into document space, or `None` when the
/// point is outside the page viewport.
fn to_document(state: &AppState, column: u16, row: u16) -> Option<(u16, usize)> {
    let area = state.page_area;
    if !area.contains(Position::new(column, row)) {
        return None;
    }
    let doc_x = column - area.x;
    let doc_y = (row - area.y) as usize + state.scroll.row();
    Some((doc_x, doc_y))
}

// ───────────────────────────────────────── scrolling ─────────

/// Smooth-scroll so `id`'s header lands just below the top of the viewport.
pub fn scroll_to_section(state: &mut AppState, id: SectionId) {
    let Some(top) = state.layout.section_top(id) else {
        tracing::warn!(section = id, "scroll target not in layout");
        return;
    };
    let margin = state.config.tuning.header_margin_rows;
    let target = top.saturating_sub(margin) as f64;
    tracing::debug!(section = id, target, "scrolling to section");
    state.scroll.scroll_to(target);
}

// ───────────────────────────────────────── per-tick update ───

/// Advance all animations one frame, then derive viewport-dependent state.
pub fn tick(state: &mut AppState) {
    state.scroll.tick();
    state.carousel.tick();
    if state.no_anim {
        while state.carousel.is_animating() {
            state.carousel.tick();
        }
    }
    for gate in &mut state.gates {
        gate.tick();
    }
    sync_viewport(state);
}

/// Re-derive the active section and fire reveal gates from the current
/// scroll position.
pub fn sync_viewport(state: &mut AppState) {
    let sample = ViewportSample::new(state.scroll.offset(), f64::from(state.page_area.height));
    let layout = &state.layout;
    state.resolver.resolve(sample, |id| layout.bounds_of(id));

    let view_top = state.scroll.row();
    let view_bottom = view_top + state.page_area.height as usize;
    for slot in &state.layout.cards {
        let gate = &mut state.gates[slot.index];
        if !gate.is_observing() {
            continue;
        }
        let intersecting = slot.rect.intersects_rows(view_top, view_bottom);
        if gate.observe(intersecting) && state.no_anim {
            gate.settle();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crossterm::event::KeyEventState;

    fn state() -> AppState {
        let config = AppConfig {
            bindings: AppConfig::default_bindings(),
            tuning: crate::config::Tuning::default(),
        };
        let mut s = AppState::new(config, 100, 40, false);
        sync_viewport(&mut s);
        s
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: crossterm::event::KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn settle(s: &mut AppState) {
        for _ in 0..500 {
            tick(s);
            if !s.scroll.is_animating() && !s.carousel.is_animating() {
                break;
            }
        }
    }

    #[test]
    fn jump_to_section_activates_it() {
        let mut s = state();
        scroll_to_section(&mut s, "rise");
        settle(&mut s);
        assert_eq!(s.resolver.active(), Some("rise"));
    }

    #[test]
    fn chevron_click_scrolls_to_the_intro_text() {
        let mut s = state();
        let chevron = s
            .layout
            .hits
            .iter()
            .find(|h| h.action == PageAction::HeroChevron)
            .map(|h| (h.rect.x, h.rect.y))
            .unwrap();
        // Scroll is 0, so document rows equal screen rows inside the hero.
        handle_click(&mut s, chevron.0, chevron.1 as u16);
        settle(&mut s);
        assert_eq!(s.resolver.active(), Some(HERO_CHEVRON_TARGET));
    }

    #[test]
    fn open_chapter_delegates_to_the_slide_destination() {
        let mut s = state();
        s.carousel.select(3);
        handle_key(&mut s, key(KeyCode::Enter));
        settle(&mut s);
        assert_eq!(s.resolver.active(), Some("vienna"));
    }

    #[test]
    fn scrolling_past_a_card_reveals_it_exactly_once() {
        let mut s = state();
        assert!(s.gates.iter().all(|g| g.is_observing()));

        // Scroll deep enough that the first card grid has passed through
        // the viewport.
        scroll_to_section(&mut s, "rise");
        settle(&mut s);

        let first = &s.layout.cards[0];
        assert!(!s.gates[first.index].is_observing());
    }

    #[test]
    fn hover_on_a_card_sets_tilt_and_leaving_clears_it() {
        let mut s = state();
        // Bring the first card grid on screen.
        scroll_to_section(&mut s, "intro");
        settle(&mut s);

        let scroll = s.scroll.row();
        let slot = s
            .layout
            .cards
            .iter()
            .find(|c| c.rect.y >= scroll && c.rect.y < scroll + 40)
            .unwrap();
        let (cx, cy) = (slot.rect.x + 1, (slot.rect.y - scroll) as u16 + 1);
        let index = slot.index;

        update_hover(&mut s, cx, cy);
        let hover = s.hover.unwrap();
        assert_eq!(hover.card, index);
        assert!(!hover.tilt.is_identity());

        // Pointer off any card.
        update_hover(&mut s, 0, 0);
        assert!(s.hover.is_none());
    }

    #[test]
    fn section_keys_walk_the_document_in_order() {
        let mut s = state();
        settle(&mut s);
        assert_eq!(s.resolver.active(), Some("hero"));

        handle_key(&mut s, key(KeyCode::Char(']')));
        settle(&mut s);
        assert_eq!(s.resolver.active(), Some("intro-text"));

        handle_key(&mut s, key(KeyCode::Char('[')));
        settle(&mut s);
        assert_eq!(s.resolver.active(), Some("hero"));
    }

    #[test]
    fn analysis_tab_cycles_and_wraps() {
        let mut s = state();
        for expected in [1, 2, 0] {
            handle_key(&mut s, key(KeyCode::Tab));
            assert_eq!(s.analysis_tab, expected);
        }
    }

    #[test]
    fn ctrl_c_always_quits() {
        let mut s = state();
        let ev = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: crossterm::event::KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        handle_key(&mut s, ev);
        assert!(s.should_quit);
    }
}
