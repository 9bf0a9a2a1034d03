//! Timing descriptors for step and slide transitions.
//!
//! A [`Timing`] is the only thing the engine knows about an animation: how
//! long it runs, how long it waits, and which curve shapes it. The renderer
//! owns the actual interpolation.

use serde::{Deserialize, Serialize};

use super::easing::EasingFunction;

/// Duration, delay and curve of one animated transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Duration of the transition in milliseconds.
    pub duration_ms: f32,
    /// Delay before the transition starts in milliseconds.
    pub delay_ms: f32,
    /// Easing curve.
    pub easing: EasingFunction,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            duration_ms: 300.0,
            delay_ms: 0.0,
            easing: EasingFunction::default(),
        }
    }
}

impl Timing {
    pub fn new(duration_ms: f32, easing: EasingFunction) -> Self {
        Self {
            duration_ms,
            delay_ms: 0.0,
            easing,
        }
    }

    /// Linear timing of the given duration.
    pub fn linear(duration_ms: f32) -> Self {
        Self::new(duration_ms, EasingFunction::Linear)
    }

    /// A transition that completes immediately.
    pub fn instant() -> Self {
        Self::linear(0.0)
    }

    pub fn with_delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Total time from trigger to completion.
    pub fn total_ms(&self) -> f32 {
        self.delay_ms.max(0.0) + self.duration_ms.max(0.0)
    }

    /// Linear progress in `[0, 1]` after `elapsed_ms`, honouring the delay.
    pub fn linear_progress_at(&self, elapsed_ms: f32) -> f32 {
        let active = (elapsed_ms - self.delay_ms).max(0.0);
        if self.duration_ms > 0.0 {
            (active / self.duration_ms).clamp(0.0, 1.0)
        } else if elapsed_ms >= self.delay_ms {
            1.0
        } else {
            0.0
        }
    }

    /// Eased progress after `elapsed_ms`.
    pub fn progress_at(&self, elapsed_ms: f32) -> f32 {
        self.easing.evaluate(self.linear_progress_at(elapsed_ms))
    }
}
