//! Document scroll with exponential ease-out toward a target offset.
//!
//! This is the page-level scroll-to-target primitive: nav clicks, carousel
//! chapter jumps, and keyboard paging all set a target; each tick the current
//! offset closes a fixed fraction of the remaining distance — visible
//! deceleration, settling with a snap below half a row.

/// Eased scroll animator over the document's row space.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    /// Current offset in fractional rows from the document top.
    current: f64,
    /// Offset the animation is easing toward.
    target: f64,
    /// Fraction of the remaining distance covered per tick.
    /// Good range: 0.25–0.45 at 30 fps.
    speed: f64,
    /// Largest valid offset (`total_height - viewport_height`).
    max_offset: f64,
    /// When set, targets apply instantly (reduced-motion mode).
    instant: bool,
}

impl ScrollAnimator {
    pub fn new(speed: f64) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            speed: speed.clamp(0.05, 0.95),
            max_offset: 0.0,
            instant: false,
        }
    }

    /// Disable easing: every target lands on the next frame.
    pub fn set_instant(&mut self, instant: bool) {
        self.instant = instant;
    }

    /// Update the scrollable range after a layout rebuild.  Both the current
    /// offset and the target are re-clamped so a resize never leaves the
    /// viewport past the end of the document.
    pub fn set_range(&mut self, total_height: f64, viewport_height: f64) {
        self.max_offset = (total_height - viewport_height).max(0.0);
        self.current = self.current.clamp(0.0, self.max_offset);
        self.target = self.target.clamp(0.0, self.max_offset);
    }

    /// Ease toward an absolute offset.
    pub fn scroll_to(&mut self, offset: f64) {
        self.target = offset.clamp(0.0, self.max_offset);
        if self.instant {
            self.current = self.target;
        }
    }

    /// Relative scroll (mouse wheel, arrow keys).  Moves the target from its
    /// current position so repeated wheel events accumulate.
    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll_to(self.target + delta);
    }

    /// Jump without animation (initial `--start` positioning).
    pub fn jump_to(&mut self, offset: f64) {
        self.target = offset.clamp(0.0, self.max_offset);
        self.current = self.target;
    }

    /// Close part of the remaining distance.  Call once per frame.
    pub fn tick(&mut self) {
        let remaining = self.target - self.current;
        if remaining.abs() < 0.4 {
            self.current = self.target;
        } else {
            self.current += remaining * self.speed;
        }
    }

    /// Current offset in fractional rows.
    pub fn offset(&self) -> f64 {
        self.current
    }

    /// Current offset rounded to whole rows for rendering.
    pub fn row(&self) -> usize {
        self.current.round().max(0.0) as usize
    }

    /// True while there is visible motion left.
    pub fn is_animating(&self) -> bool {
        self.current != self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator() -> ScrollAnimator {
        let mut s = ScrollAnimator::new(0.35);
        s.set_range(1000.0, 40.0);
        s
    }

    #[test]
    fn eases_toward_the_target_and_settles() {
        let mut s = animator();
        s.scroll_to(100.0);
        assert!(s.is_animating());

        let mut last = s.offset();
        for _ in 0..60 {
            s.tick();
            assert!(s.offset() >= last); // monotonic approach
            last = s.offset();
        }
        assert!(!s.is_animating());
        assert_eq!(s.offset(), 100.0);
    }

    #[test]
    fn targets_clamp_to_document_range() {
        let mut s = animator();
        s.scroll_to(99999.0);
        assert_eq!(s.target, 960.0);
        s.scroll_by(-99999.0);
        assert_eq!(s.target, 0.0);
    }

    #[test]
    fn wheel_deltas_accumulate_on_the_target() {
        let mut s = animator();
        s.scroll_by(3.0);
        s.scroll_by(3.0);
        assert_eq!(s.target, 6.0);
    }

    #[test]
    fn resize_reclamps_current_offset() {
        let mut s = animator();
        s.jump_to(900.0);
        s.set_range(500.0, 40.0);
        assert_eq!(s.offset(), 460.0);
    }

    #[test]
    fn instant_mode_skips_the_animation() {
        let mut s = animator();
        s.set_instant(true);
        s.scroll_to(200.0);
        assert_eq!(s.offset(), 200.0);
        assert!(!s.is_animating());
    }
}
