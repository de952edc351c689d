//! Pointer tilt — maps a pointer position over a card to a small
//! pseudo-3D transform.
//!
//! Pure arithmetic per pointer-move event: no state is kept between events
//! and the output never feeds back into any other component.  The card
//! renderer consumes the transform as a side-channel (edge glare + lift
//! emphasis) without touching the rest of the frame.

/// Rotation/scale pose for one card.  Degrees for the rotations, a plain
/// factor for the scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltTransform {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: f64,
}

impl TiltTransform {
    /// The flat resting pose, restored on pointer leave.
    pub const IDENTITY: Self = Self {
        rotate_x: 0.0,
        rotate_y: 0.0,
        scale: 1.0,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

/// Tilt parameters.  `max_deg` is a visual tuning constant, not a
/// correctness constraint; 8° reads well on most terminals.
#[derive(Debug, Clone, Copy)]
pub struct TiltEngine {
    /// Maximum rotation magnitude in degrees, reached at the card edges.
    pub max_deg: f64,
    /// Uniform scale applied while the pointer is over the card, slightly
    /// above 1 so the card reads as lifting toward the cursor.
    pub lift_scale: f64,
}

impl TiltEngine {
    pub fn new(max_deg: f64, lift_scale: f64) -> Self {
        Self { max_deg, lift_scale }
    }

    /// Transform for a pointer at `(x, y)` relative to the card's top-left
    /// corner, for a card of size `(w, h)`.
    ///
    /// The normalized offset from centre is clamped to ±1, so a pointer
    /// reported just outside the hit area still yields at most `max_deg`.
    /// The sign inversion on `rotate_x` is intentional: pushing the cursor
    /// toward the top edge tilts that edge away from the viewer.
    pub fn at(&self, x: f64, y: f64, w: f64, h: f64) -> TiltTransform {
        let cx = w / 2.0;
        let cy = h / 2.0;
        if cx <= 0.0 || cy <= 0.0 {
            return TiltTransform::IDENTITY;
        }

        let nx = ((x - cx) / cx).clamp(-1.0, 1.0);
        let ny = ((y - cy) / cy).clamp(-1.0, 1.0);

        TiltTransform {
            rotate_x: ny * -self.max_deg,
            rotate_y: nx * self.max_deg,
            scale: self.lift_scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> TiltEngine {
        TiltEngine::new(8.0, 1.02)
    }

    #[test]
    fn centre_yields_zero_rotation() {
        for (w, h) in [(10.0, 4.0), (120.0, 33.0), (1.0, 1.0)] {
            let t = engine().at(w / 2.0, h / 2.0, w, h);
            assert_eq!(t.rotate_x, 0.0);
            assert_eq!(t.rotate_y, 0.0);
        }
    }

    #[test]
    fn tilt_is_linear_within_bounds() {
        let e = engine();
        let near = e.at(55.0, 20.0, 100.0, 40.0);
        let far = e.at(60.0, 20.0, 100.0, 40.0);
        assert!((far.rotate_y - near.rotate_y * 2.0).abs() < 1e-9);
    }

    #[test]
    fn edges_reach_the_maximum() {
        let e = engine();
        let t = e.at(100.0, 0.0, 100.0, 40.0);
        assert_eq!(t.rotate_y, 8.0);
        assert_eq!(t.rotate_x, 8.0); // top edge, inverted sign
    }

    #[test]
    fn out_of_bounds_pointer_is_clamped() {
        let e = engine();
        let t = e.at(250.0, -10.0, 100.0, 40.0);
        assert_eq!(t.rotate_y, 8.0);
        assert_eq!(t.rotate_x, 8.0);
    }

    #[test]
    fn top_of_card_tilts_top_away() {
        // Cursor above centre → rotate_x positive (top edge leans back).
        let t = engine().at(50.0, 5.0, 100.0, 40.0);
        assert!(t.rotate_x > 0.0);
        // Cursor left of centre → rotate_y negative.
        let t = engine().at(10.0, 20.0, 100.0, 40.0);
        assert!(t.rotate_y < 0.0);
    }

    #[test]
    fn hover_applies_the_lift_scale() {
        let t = engine().at(10.0, 10.0, 100.0, 40.0);
        assert_eq!(t.scale, 1.02);
    }

    #[test]
    fn degenerate_card_is_identity() {
        assert!(engine().at(0.0, 0.0, 0.0, 0.0).is_identity());
    }
}
