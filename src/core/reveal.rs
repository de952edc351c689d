//! One-shot reveal gates — cards animate in the first time they enter the
//! viewport and never animate again.
//!
//! Subscribe, act once, unsubscribe: a gate asks to be fed intersection
//! observations only until its first hit.  After that [`RevealGate::is_observing`]
//! turns false and the owner stops testing the card against the viewport,
//! so fully revealed content costs nothing on later scrolls.

/// Per-card visibility state.  Monotonic: `Visible` never reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    NotObserved,
    Visible,
}

/// Reveal gate plus the eased slide/fade-in progress it drives.
#[derive(Debug, Clone)]
pub struct RevealGate {
    state: RevealState,
    /// 0.0 at the moment of reveal, eased toward 1.0 per tick.
    progress: f64,
    /// Damping factor per tick, smooth-scroll style.
    ease: f64,
}

impl RevealGate {
    pub fn new(ease: f64) -> Self {
        Self {
            state: RevealState::NotObserved,
            progress: 0.0,
            ease: ease.clamp(0.05, 0.95),
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Whether the owner still needs to test this card for intersection.
    pub fn is_observing(&self) -> bool {
        self.state == RevealState::NotObserved
    }

    /// Feed one intersection observation.  Returns `true` exactly once, on
    /// the `NotObserved → Visible` transition; every later call is a no-op.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.state == RevealState::Visible {
            return false;
        }
        if intersecting {
            self.state = RevealState::Visible;
            return true;
        }
        false
    }

    /// Advance the reveal animation.  Call once per tick.
    pub fn tick(&mut self) {
        if self.state == RevealState::Visible && self.progress < 1.0 {
            self.progress += (1.0 - self.progress) * self.ease;
            if self.progress > 0.99 {
                self.progress = 1.0;
            }
        }
    }

    /// Animation progress in `[0, 1]`.  Stays 0 until revealed.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Skip the animation entirely (reduced-motion mode).
    pub fn settle(&mut self) {
        if self.state == RevealState::Visible {
            self.progress = 1.0;
        }
    }
}
