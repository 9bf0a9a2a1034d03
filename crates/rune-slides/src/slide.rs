//! Slides and the animation steps they declare.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::animation::Timing;
use crate::context::NavigationContext;
use crate::view::View;

/// Ordered step descriptors of one slide.
///
/// Entry `k` governs the transition from step `k` into step `k + 1`, so a
/// declaration with `n` entries yields `n + 1` visible states.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StepDeclaration(Vec<Timing>);

impl StepDeclaration {
    pub fn new(steps: impl IntoIterator<Item = Timing>) -> Self {
        Self(steps.into_iter().collect())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// `n` steps sharing the same timing.
    pub fn uniform(n: usize, timing: Timing) -> Self {
        Self(vec![timing; n])
    }

    /// Visible states of the slide: declared steps plus the initial state.
    pub fn number_of_steps(&self) -> usize {
        self.0.len() + 1
    }

    /// Timing of the transition out of `step` into `step + 1`.
    pub fn timing_into_next(&self, step: usize) -> Option<Timing> {
        self.0.get(step).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Timing>> for StepDeclaration {
    fn from(steps: Vec<Timing>) -> Self {
        Self(steps)
    }
}

/// One navigable unit of content.
///
/// `content` is called with the ambient context on every render and must
/// produce a view for every `current_step` in `0..steps().number_of_steps()`.
pub trait Slide {
    /// Extra animation steps of this slide. Defaults to none.
    fn steps(&self) -> StepDeclaration {
        StepDeclaration::empty()
    }

    fn content(&self, cx: &NavigationContext) -> View;
}

/// Slide backed by a closure, for content that needs no type of its own.
pub struct FnSlide<F> {
    steps: StepDeclaration,
    content: F,
}

impl<F> Slide for FnSlide<F>
where
    F: Fn(&NavigationContext) -> View,
{
    fn steps(&self) -> StepDeclaration {
        self.steps.clone()
    }

    fn content(&self, cx: &NavigationContext) -> View {
        (self.content)(cx)
    }
}

impl<F> fmt::Debug for FnSlide<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSlide")
            .field("steps", &self.steps)
            .finish_non_exhaustive()
    }
}

/// Build a slide from its step timings and a content closure.
pub fn slide<F>(steps: impl Into<StepDeclaration>, content: F) -> FnSlide<F>
where
    F: Fn(&NavigationContext) -> View,
{
    FnSlide {
        steps: steps.into(),
        content,
    }
}
