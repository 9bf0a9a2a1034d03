//! The navigation state machine.
//!
//! A [`Presentation`] owns the slide list, the current `(slide, step)`
//! position and the identity registry of one running deck. Each call to
//! [`Presentation::render`] draws only the active slide, collects its step
//! declaration through a [`StepChannel`], wraps the content in the theme and
//! reports which shared identities the renderer should morph.
//!
//! # Transitions
//!
//! ```text
//! next():     step + 1 < steps  → (slide, step + 1)   timed by the slide's step k
//!             slide + 1 < count → (slide + 1, 0)      timed by the slide timing
//!             otherwise         → no-op
//! previous(): slide > 0         → (slide - 1, 0)      timed by the slide timing
//!             otherwise         → no-op
//! ```
//!
//! `previous()` always lands on the first step of the preceding slide, even
//! when the current slide has advanced past its first step.

use serde::{Deserialize, Serialize};

use crate::animation::Timing;
use crate::context::NavigationContext;
use crate::identity::{IdentityRegistry, MatchedPair, Namespace};
use crate::input::Command;
use crate::slide::StepDeclaration;
use crate::slide_list::SlideList;
use crate::steps::StepChannel;
use crate::theme::{PlainTheme, Theme};
use crate::view::View;

/// A `(slide, step)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub slide: usize,
    pub step: usize,
}

impl Position {
    pub const fn new(slide: usize, step: usize) -> Self {
        Self { slide, step }
    }
}

impl From<(usize, usize)> for Position {
    fn from((slide, step): (usize, usize)) -> Self {
        Self::new(slide, step)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    /// Same slide, next animation step.
    Step,
    /// Different slide.
    Slide,
}

/// A position change and the timing the renderer should animate it with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub from: Position,
    pub to: Position,
    pub kind: TransitionKind,
    pub timing: Timing,
}

/// Output of one render pass.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Context the content was rendered with.
    pub context: NavigationContext,
    /// Themed content of the active slide.
    pub view: View,
    /// Step declaration reported by the active slide.
    pub steps: StepDeclaration,
    /// Transition from the previously rendered position to this one, if any.
    /// Several navigations between two renders are folded into one, with the
    /// kind and timing of the last.
    pub transition: Option<Transition>,
    /// Shared elements to morph, only filled when `transition` is set.
    pub matches: Vec<MatchedPair>,
}

/// Navigation controller for one running deck.
pub struct Presentation<L, T = PlainTheme> {
    slides: L,
    theme: T,
    slide_timing: Timing,
    current_slide: usize,
    current_step: usize,
    namespace: Namespace,
    identities: IdentityRegistry,
    pending: Option<Transition>,
}

impl<L: SlideList> Presentation<L, PlainTheme> {
    pub fn new(slides: L) -> Self {
        Self::with_theme(slides, PlainTheme)
    }
}

impl<L: SlideList, T: Theme> Presentation<L, T> {
    pub fn with_theme(slides: L, theme: T) -> Self {
        Self {
            slides,
            theme,
            slide_timing: Timing::default(),
            current_slide: 0,
            current_step: 0,
            namespace: Namespace::new(),
            identities: IdentityRegistry::new(),
            pending: None,
        }
    }

    /// Timing used for slide changes.
    pub fn with_slide_timing(mut self, timing: Timing) -> Self {
        self.slide_timing = timing;
        self
    }

    /// Jump to the first step of `slide` before anything is rendered. Out of
    /// range values are clamped to the last slide.
    pub fn start_at(mut self, slide: usize) -> Self {
        self.current_slide = slide.min(self.slide_count().saturating_sub(1));
        self.current_step = 0;
        self
    }

    pub fn slide_count(&self) -> usize {
        self.slides.count()
    }

    pub fn slides(&self) -> &L {
        &self.slides
    }

    pub fn position(&self) -> Position {
        Position::new(self.current_slide, self.current_step)
    }

    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    pub fn identities(&self) -> &IdentityRegistry {
        &self.identities
    }

    pub fn slide_timing(&self) -> Timing {
        self.slide_timing
    }

    /// Snapshot handed to slides and the theme.
    pub fn context(&self) -> NavigationContext {
        NavigationContext {
            current_step: self.current_step,
            current_slide: self.current_slide,
            slide_count: self.slide_count(),
            namespace: self.namespace,
        }
    }

    /// Step declaration of the active slide, gathered the same way a render
    /// pass gathers it.
    pub fn active_steps(&self) -> StepDeclaration {
        let mut channel = StepChannel::begin();
        if self.slide_count() > 0 {
            channel.emit(self.slides.slide_at(self.current_slide).steps());
        }
        channel.finish()
    }

    /// Visible states of the active slide.
    pub fn number_of_steps(&self) -> usize {
        self.active_steps().number_of_steps()
    }

    /// Advance one step, or to the next slide after the last step.
    ///
    /// Returns `None` at the last step of the last slide.
    pub fn next(&mut self) -> Option<Transition> {
        let count = self.slide_count();
        if count == 0 {
            tracing::trace!("next() on an empty presentation");
            return None;
        }

        let steps = self.active_steps();
        let from = self.position();

        let kind = if self.current_step + 1 < steps.number_of_steps() {
            TransitionKind::Step
        } else if self.current_slide + 1 < count {
            TransitionKind::Slide
        } else {
            tracing::trace!(?from, "next() at the end of the presentation");
            return None;
        };

        let timing = match kind {
            TransitionKind::Step => {
                let timing = steps
                    .timing_into_next(self.current_step)
                    .unwrap_or(self.slide_timing);
                self.current_step += 1;
                timing
            }
            TransitionKind::Slide => {
                self.current_slide += 1;
                self.current_step = 0;
                self.slide_timing
            }
        };

        Some(self.record(Transition {
            from,
            to: self.position(),
            kind,
            timing,
        }))
    }

    /// Go back to the first step of the previous slide.
    ///
    /// Returns `None` on the first slide, whatever its current step.
    pub fn previous(&mut self) -> Option<Transition> {
        if self.current_slide == 0 {
            tracing::trace!(step = self.current_step, "previous() on the first slide");
            return None;
        }

        let from = self.position();
        self.current_slide -= 1;
        self.current_step = 0;

        Some(self.record(Transition {
            from,
            to: self.position(),
            kind: TransitionKind::Slide,
            timing: self.slide_timing,
        }))
    }

    pub fn handle(&mut self, command: Command) -> Option<Transition> {
        match command {
            Command::Next => self.next(),
            Command::Previous => self.previous(),
        }
    }

    /// Render the active slide.
    ///
    /// Consumes the transition recorded by the last `next`/`previous`. An
    /// empty presentation renders an empty view without touching the list.
    pub fn render(&mut self) -> Frame {
        let context = self.context();
        let transition = self.pending.take();

        if context.slide_count == 0 {
            return Frame {
                context,
                view: View::empty(),
                steps: StepDeclaration::empty(),
                transition,
                matches: Vec::new(),
            };
        }

        let slide = self.slides.slide_at(self.current_slide);
        let mut channel = StepChannel::begin();
        channel.emit(slide.steps());
        let content = slide.content(&context);
        let steps = channel.finish();

        let view = self.theme.apply(content, &context);
        let matches = self.identities.match_and_register(self.namespace, &view);
        let matches = if transition.is_some() {
            matches
        } else {
            Vec::new()
        };

        tracing::trace!(
            slide = context.current_slide,
            step = context.current_step,
            steps = steps.number_of_steps(),
            nodes = view.node_count(),
            "rendered frame"
        );

        Frame {
            context,
            view,
            steps,
            transition,
            matches,
        }
    }

    fn record(&mut self, transition: Transition) -> Transition {
        tracing::debug!(
            from = ?transition.from,
            to = ?transition.to,
            kind = ?transition.kind,
            duration_ms = transition.timing.duration_ms,
            "presentation transition"
        );
        self.pending = match self.pending.take() {
            None => Some(transition),
            Some(earlier) => fold(earlier, transition),
        };
        transition
    }
}

/// Combine two transitions recorded without a render in between. `None` when
/// the deck is back where it was last rendered.
fn fold(earlier: Transition, later: Transition) -> Option<Transition> {
    if earlier.from == later.to {
        return None;
    }
    let kind = if earlier.from.slide == later.to.slide {
        TransitionKind::Step
    } else {
        TransitionKind::Slide
    };
    Some(Transition {
        from: earlier.from,
        to: later.to,
        kind,
        timing: later.timing,
    })
}

impl<L: SlideList, T> std::fmt::Debug for Presentation<L, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Presentation")
            .field("slide_count", &self.slides.count())
            .field("current_slide", &self.current_slide)
            .field("current_step", &self.current_step)
            .field("namespace", &self.namespace)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}
