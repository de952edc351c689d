//! Timeline carousel — the selectable slide state machine.
//!
//! Exactly one of the fixed entries is selected at a time (index 0 at start)
//! and the only driver of change is explicit user selection; there is no
//! auto-advance timer.  Selecting also retargets the selector strip so the
//! chosen year scrolls into the centre of the strip — a purely cosmetic
//! synchronization in which the visual strip follows the logical index,
//! never the reverse.

use super::geometry::SectionId;

/// One static timeline event.  Immutable for the whole run.
#[derive(Debug, Clone, Copy)]
pub struct CarouselEntry {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Key into the asset placeholder table.
    pub image_key: &'static str,
    /// Section the "Zum Kapitel" action jumps to.
    pub destination: SectionId,
}

/// Render pose of one slide.  Non-selected slides keep a suppressed pose
/// (offset a few rows, fully dimmed) rather than disappearing, so the
/// selection transition always has a fixed start and end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlidePose {
    /// Extra rows below the resting position.
    pub offset_rows: f64,
    /// 1.0 = fully shown, 0.0 = suppressed.
    pub opacity: f64,
}

/// Rows a suppressed slide sits below its resting position.
const SUPPRESSED_OFFSET: f64 = 3.0;

/// The carousel state machine.
#[derive(Debug)]
pub struct Carousel {
    entries: &'static [CarouselEntry],
    selected: usize,
    /// Slide being transitioned away from; equals `selected` when settled.
    previous: usize,
    /// 1.0 right after a selection, decays toward 0.0 per tick.
    transition: f64,
    /// Transition damping per tick.
    ease: f64,
}

impl Carousel {
    pub fn new(entries: &'static [CarouselEntry], ease: f64) -> Self {
        Self {
            entries,
            selected: 0,
            previous: 0,
            transition: 0.0,
            ease: ease.clamp(0.05, 0.95),
        }
    }

    pub fn entries(&self) -> &'static [CarouselEntry] {
        self.entries
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_entry(&self) -> &'static CarouselEntry {
        &self.entries[self.selected]
    }

    /// Select slide `i`.  Out-of-range indices are a no-op: controls are
    /// generated from the same entry list, so this only fires on a
    /// programming error, not user input.
    pub fn select(&mut self, i: usize) {
        if i >= self.entries.len() {
            tracing::warn!(index = i, len = self.entries.len(), "carousel select out of range");
            return;
        }
        if i == self.selected {
            return;
        }
        self.previous = self.selected;
        self.selected = i;
        self.transition = 1.0;
        tracing::debug!(slide = i, year = self.entries[i].year, "timeline slide selected");
    }

    /// Destination section of the current slide, for delegation to the
    /// scroll-to-target primitive.  Does not mutate carousel state.
    pub fn destination(&self) -> SectionId {
        self.entries[self.selected].destination
    }

    /// Decay the selection transition.  Call once per tick.
    pub fn tick(&mut self) {
        self.transition *= 1.0 - self.ease;
        if self.transition < 0.02 {
            self.transition = 0.0;
            self.previous = self.selected;
        }
    }

    pub fn is_animating(&self) -> bool {
        self.transition != 0.0
    }

    /// Pose of slide `i` for the current frame.
    pub fn slide_pose(&self, i: usize) -> SlidePose {
        if i == self.selected {
            // Incoming slide rises from the suppressed pose.
            SlidePose {
                offset_rows: SUPPRESSED_OFFSET * self.transition,
                opacity: 1.0 - self.transition,
            }
        } else if i == self.previous && self.transition > 0.0 {
            // Outgoing slide sinks back toward the suppressed pose.
            SlidePose {
                offset_rows: SUPPRESSED_OFFSET * (1.0 - self.transition),
                opacity: self.transition,
            }
        } else {
            SlidePose {
                offset_rows: SUPPRESSED_OFFSET,
                opacity: 0.0,
            }
        }
    }

    /// Horizontal strip offset that centres item `selected` within a strip
    /// of `strip_width` columns, given a per-item pitch.  Clamped so the
    /// strip never scrolls past its ends.
    pub fn strip_center_offset(&self, item_pitch: f64, strip_width: f64) -> f64 {
        let total = item_pitch * self.entries.len() as f64;
        if total <= strip_width {
            return 0.0;
        }
        let item_centre = (self.selected as f64 + 0.5) * item_pitch;
        (item_centre - strip_width / 2.0).clamp(0.0, total - strip_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static ENTRIES: &[CarouselEntry] = &[
        CarouselEntry {
            year: "1299",
            title: "Der Anfang",
            description: "",
            image_key: "timeline_1299",
            destination: "intro",
        },
        CarouselEntry {
            year: "1453",
            title: "Konstantinopel",
            description: "",
            image_key: "timeline_1453",
            destination: "rise",
        },
        CarouselEntry {
            year: "1683",
            title: "Wien",
            description: "",
            image_key: "timeline_1683",
            destination: "vienna",
        },
    ];

    fn carousel() -> Carousel {
        Carousel::new(ENTRIES, 0.3)
    }

    #[test]
    fn starts_at_index_zero() {
        assert_eq!(carousel().selected(), 0);
    }

    #[test]
    fn select_in_range_updates_index() {
        let mut c = carousel();
        c.select(2);
        assert_eq!(c.selected(), 2);
        assert_eq!(c.selected_entry().year, "1683");
    }

    #[test]
    fn repeated_select_is_idempotent() {
        let mut c = carousel();
        c.select(1);
        while c.is_animating() {
            c.tick();
        }
        // Selecting the already-selected slide changes nothing and starts
        // no transition.
        c.select(1);
        assert_eq!(c.selected(), 1);
        assert!(!c.is_animating());
    }

    #[test]
    fn out_of_range_select_is_a_noop() {
        let mut c = carousel();
        c.select(1);
        c.select(99);
        assert_eq!(c.selected(), 1);
    }

    #[test]
    fn destination_reads_selected_entry() {
        let mut c = carousel();
        assert_eq!(c.destination(), "intro");
        c.select(1);
        assert_eq!(c.destination(), "rise");
    }

    #[test]
    fn transition_settles_to_fixed_poses() {
        let mut c = carousel();
        c.select(1);
        assert!(c.is_animating());
        for _ in 0..100 {
            c.tick();
        }
        assert!(!c.is_animating());
        assert_eq!(c.slide_pose(1), SlidePose { offset_rows: 0.0, opacity: 1.0 });
        assert_eq!(
            c.slide_pose(0),
            SlidePose { offset_rows: SUPPRESSED_OFFSET, opacity: 0.0 }
        );
    }

    #[test]
    fn strip_centering_follows_the_selection() {
        let mut c = carousel();
        // Strip narrower than the three 20-column items.
        assert_eq!(c.strip_center_offset(20.0, 40.0), 0.0); // item 0, clamped left
        c.select(2);
        for _ in 0..100 {
            c.tick();
        }
        assert_eq!(c.strip_center_offset(20.0, 40.0), 20.0); // clamped right
    }

    #[test]
    fn wide_strip_never_scrolls() {
        let mut c = carousel();
        c.select(2);
        assert_eq!(c.strip_center_offset(20.0, 200.0), 0.0);
    }
}
