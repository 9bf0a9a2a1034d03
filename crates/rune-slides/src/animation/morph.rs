//! Runtime interpolation of one shared element across a slide change.
//!
//! When the outgoing and incoming slides both carry an element tagged with
//! the same identity, the renderer drives a [`Morph`] from the old anchor to
//! the new one instead of cutting between them.

use super::interpolate::Interpolate;
use super::timing::Timing;
use crate::identity::Anchor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphState {
    /// Waiting out the timing delay.
    Pending,
    Running,
    Finished,
}

/// An in-progress interpolation between two anchors.
#[derive(Debug, Clone)]
pub struct Morph {
    pub id: String,
    pub from: Anchor,
    pub to: Anchor,
    pub timing: Timing,
    pub elapsed_ms: f32,
    pub state: MorphState,
}

impl Morph {
    pub fn new(id: impl Into<String>, from: Anchor, to: Anchor, timing: Timing) -> Self {
        let mut morph = Self {
            id: id.into(),
            from,
            to,
            timing,
            elapsed_ms: 0.0,
            state: MorphState::Pending,
        };
        morph.refresh_state();
        morph
    }

    /// Visual state at the current point in time.
    pub fn current(&self) -> Anchor {
        match self.state {
            MorphState::Pending => self.from,
            MorphState::Finished => self.to,
            MorphState::Running => {
                let t = self.timing.progress_at(self.elapsed_ms);
                self.from.interpolate(&self.to, t)
            }
        }
    }

    /// Advance by `delta_ms`. Returns `true` while the morph is still active.
    pub fn advance(&mut self, delta_ms: f32) -> bool {
        if self.state == MorphState::Finished {
            return false;
        }
        self.elapsed_ms += delta_ms.max(0.0);
        self.refresh_state();
        self.state != MorphState::Finished
    }

    /// Start over towards `to`, beginning at the current visual position.
    pub fn retarget(&mut self, to: Anchor, timing: Timing) {
        self.from = self.current();
        self.to = to;
        self.timing = timing;
        self.elapsed_ms = 0.0;
        self.refresh_state();
    }

    pub fn is_finished(&self) -> bool {
        self.state == MorphState::Finished
    }

    fn refresh_state(&mut self) {
        self.state = if self.elapsed_ms < self.timing.delay_ms {
            MorphState::Pending
        } else if self.elapsed_ms - self.timing.delay_ms >= self.timing.duration_ms {
            MorphState::Finished
        } else {
            MorphState::Running
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Rect;

    fn anchors() -> (Anchor, Anchor) {
        (
            Anchor::new(Rect::new(0.0, 0.0, 100.0, 20.0), 1.0),
            Anchor::new(Rect::new(200.0, 100.0, 300.0, 60.0), 1.0),
        )
    }

    #[test]
    fn test_morph_lifecycle() {
        let (from, to) = anchors();
        let mut morph = Morph::new("title", from, to, Timing::linear(100.0));
        assert_eq!(morph.state, MorphState::Running);
        assert_eq!(morph.current(), from);

        assert!(morph.advance(50.0));
        let mid = morph.current();
        assert!((mid.frame.x - 100.0).abs() < 0.01);
        assert!((mid.frame.w - 200.0).abs() < 0.01);

        assert!(!morph.advance(60.0));
        assert!(morph.is_finished());
        assert_eq!(morph.current(), to);
        assert!(!morph.advance(10.0));
    }

    #[test]
    fn test_morph_waits_for_delay() {
        let (from, to) = anchors();
        let mut morph = Morph::new("title", from, to, Timing::linear(100.0).with_delay(40.0));
        assert_eq!(morph.state, MorphState::Pending);
        morph.advance(20.0);
        assert_eq!(morph.current(), from);
        morph.advance(30.0);
        assert_eq!(morph.state, MorphState::Running);
    }

    #[test]
    fn test_zero_duration_morph_finishes_immediately() {
        let (from, to) = anchors();
        let morph = Morph::new("title", from, to, Timing::instant());
        assert!(morph.is_finished());
        assert_eq!(morph.current(), to);
    }

    #[test]
    fn test_retarget_continues_from_current_position() {
        let (from, to) = anchors();
        let mut morph = Morph::new("title", from, to, Timing::linear(100.0));
        morph.advance(50.0);

        let back = Anchor::new(Rect::new(0.0, 0.0, 100.0, 20.0), 1.0);
        morph.retarget(back, Timing::linear(200.0));

        assert_eq!(morph.elapsed_ms, 0.0);
        assert!((morph.current().frame.x - 100.0).abs() < 0.01);
        morph.advance(200.0);
        assert_eq!(morph.current(), back);
    }
}
