//! Scroll-spy — resolves the single "active" section from the scroll position.
//!
//! The resolver owns the one mutable `ActiveSection` slot.  It is fed a fresh
//! [`ViewportSample`] per scroll event plus a lookup for live section bounds,
//! and scans the fixed layout-order section list for the first section
//! containing the probe point.  First match wins; if nothing matches (probe
//! above the first section or below the last) the previous answer is kept so
//! the nav highlight never flickers to nothing.

use super::geometry::{SectionBounds, SectionId, ViewportSample};

/// A section's identity plus its fixed rank in the document's top-to-bottom
/// layout.  The ordered descriptor list is built once from static content and
/// never changes; resolution correctness depends on it matching the real
/// visual order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub id: SectionId,
    pub dom_order: usize,
}

/// Resolves scroll samples to at most one active section id.
#[derive(Debug)]
pub struct ActivityResolver {
    sections: Vec<SectionDescriptor>,
    active: Option<SectionId>,
    probe_divisor: f64,
}

impl ActivityResolver {
    /// Build from the layout-ordered id list.  `probe_divisor` positions the
    /// probe at `viewport_height / divisor` below the scroll offset.
    pub fn new(ids: impl IntoIterator<Item = SectionId>, probe_divisor: f64) -> Self {
        let sections = ids
            .into_iter()
            .enumerate()
            .map(|(dom_order, id)| SectionDescriptor { id, dom_order })
            .collect();
        Self {
            sections,
            active: None,
            probe_divisor,
        }
    }

    /// The current active section, if any sample has ever matched.
    pub fn active(&self) -> Option<SectionId> {
        self.active
    }

    /// Layout-ordered descriptors (used for keyboard section jumps).
    pub fn sections(&self) -> &[SectionDescriptor] {
        &self.sections
    }

    /// Consume one viewport sample and update the active section.
    ///
    /// `bounds_of` reads live bounds for a section; returning `None` (the
    /// section is missing from the current layout) skips it rather than
    /// aborting the scan.  Sections are visited strictly in layout order and
    /// the scan stops at the first hit — the deliberate tie-break when bounds
    /// overlap.
    pub fn resolve(
        &mut self,
        sample: ViewportSample,
        mut bounds_of: impl FnMut(SectionId) -> Option<SectionBounds>,
    ) -> Option<SectionId> {
        let probe = sample.probe_point(self.probe_divisor);

        for section in &self.sections {
            let Some(bounds) = bounds_of(section.id) else {
                continue;
            };
            if bounds.contains(probe) {
                if self.active != Some(section.id) {
                    tracing::trace!(section = section.id, probe, "active section changed");
                    self.active = Some(section.id);
                }
                break;
            }
        }
        // No match: keep the previous answer.
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds { id: "a", top: 0.0, height: 500.0 },
            SectionBounds { id: "b", top: 500.0, height: 500.0 },
        ]
    }

    fn lookup(bounds: &[SectionBounds]) -> impl FnMut(SectionId) -> Option<SectionBounds> + '_ {
        move |id| bounds.iter().find(|b| b.id == id).copied()
    }

    #[test]
    fn probe_selects_expected_section() {
        let bounds = two_sections();
        let mut resolver = ActivityResolver::new(["a", "b"], 3.0);

        let active = resolver.resolve(ViewportSample::new(0.0, 900.0), lookup(&bounds));
        assert_eq!(active, Some("a")); // probe at 300

        let active = resolver.resolve(ViewportSample::new(500.0, 900.0), lookup(&bounds));
        assert_eq!(active, Some("b")); // probe at 800
    }

    #[test]
    fn resolution_is_deterministic() {
        let bounds = two_sections();
        let mut resolver = ActivityResolver::new(["a", "b"], 3.0);
        let first = resolver.resolve(ViewportSample::new(250.0, 900.0), lookup(&bounds));
        let second = resolver.resolve(ViewportSample::new(250.0, 900.0), lookup(&bounds));
        assert_eq!(first, second);
    }

    #[test]
    fn overlapping_bounds_prefer_layout_order() {
        let bounds = vec![
            SectionBounds { id: "first", top: 0.0, height: 1000.0 },
            SectionBounds { id: "second", top: 0.0, height: 1000.0 },
        ];
        let mut resolver = ActivityResolver::new(["first", "second"], 3.0);
        let active = resolver.resolve(ViewportSample::new(100.0, 300.0), lookup(&bounds));
        assert_eq!(active, Some("first"));
    }

    #[test]
    fn gap_retains_previous_active() {
        let bounds = two_sections();
        let mut resolver = ActivityResolver::new(["a", "b"], 3.0);
        resolver.resolve(ViewportSample::new(0.0, 900.0), lookup(&bounds));
        assert_eq!(resolver.active(), Some("a"));

        // Probe far below both sections: previous answer sticks.
        let active = resolver.resolve(ViewportSample::new(5000.0, 900.0), lookup(&bounds));
        assert_eq!(active, Some("a"));
    }

    #[test]
    fn missing_bounds_are_skipped() {
        let bounds = vec![SectionBounds { id: "b", top: 0.0, height: 100.0 }];
        let mut resolver = ActivityResolver::new(["a", "b"], 3.0);
        // "a" has no measurable bounds; scan must fall through to "b".
        let active = resolver.resolve(ViewportSample::new(0.0, 90.0), lookup(&bounds));
        assert_eq!(active, Some("b"));
    }

    #[test]
    fn starts_with_no_active_section() {
        let resolver = ActivityResolver::new(["a"], 3.0);
        assert_eq!(resolver.active(), None);
    }
}
