//! Viewport geometry — samples of the scrolling viewport and live section
//! bounds, measured in fractional terminal rows.
//!
//! Everything here is a pure value type: a [`ViewportSample`] is taken fresh
//! on every scroll-affecting event and discarded after use, and
//! [`SectionBounds`] are always read from the current page layout rather than
//! cached across samples (a resize changes every height).

/// Identifier of a section in the document.  All sections come from static
/// content, so ids are `'static`.
pub type SectionId = &'static str;

// ───────────────────────────────────────── viewport sample ───

/// One ephemeral reading of the scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSample {
    /// Distance from the document top to the first visible row.
    pub scroll_offset: f64,
    /// Height of the visible viewport in rows.
    pub viewport_height: f64,
}

impl ViewportSample {
    pub fn new(scroll_offset: f64, viewport_height: f64) -> Self {
        Self {
            scroll_offset,
            viewport_height,
        }
    }

    /// The vertical document coordinate used to test section activity.
    ///
    /// Placed at the upper third of the viewport (for the default divisor
    /// of 3) so a section reads as active slightly before it is centred.
    pub fn probe_point(&self, divisor: f64) -> f64 {
        self.scroll_offset + self.viewport_height / divisor
    }
}

// ───────────────────────────────────────── section bounds ────

/// Live vertical extent of one section within the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub id: SectionId,
    /// Document row of the section's first line.
    pub top: f64,
    /// Total height in rows.
    pub height: f64,
}

impl SectionBounds {
    /// Half-open containment test: `top <= probe < top + height`.
    pub fn contains(&self, probe: f64) -> bool {
        self.top <= probe && probe < self.top + self.height
    }

    /// Row just past the section's last line.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_sits_in_upper_third() {
        let sample = ViewportSample::new(0.0, 900.0);
        assert_eq!(sample.probe_point(3.0), 300.0);

        let sample = ViewportSample::new(500.0, 900.0);
        assert_eq!(sample.probe_point(3.0), 800.0);
    }

    #[test]
    fn containment_is_half_open() {
        let b = SectionBounds {
            id: "a",
            top: 100.0,
            height: 50.0,
        };
        assert!(b.contains(100.0));
        assert!(b.contains(149.9));
        assert!(!b.contains(150.0));
        assert!(!b.contains(99.9));
    }

    #[test]
    fn short_sections_still_match() {
        // A section thinner than one scroll step is matched as long as the
        // probe lands inside it.
        let b = SectionBounds {
            id: "thin",
            top: 10.0,
            height: 0.5,
        };
        assert!(b.contains(10.2));
    }
}
