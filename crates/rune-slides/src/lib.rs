//! Rune Slides: slide composition and navigation for Rune decks.
//!
//! The crate owns three things and leaves drawing to the renderer:
//!
//! - **Composition**: [`slides!`] and [`SlideListBuilder`] turn a block of
//!   heterogeneous slides into one indexable [`SlideList`].
//! - **Navigation**: [`Presentation`] steps through slides and their
//!   animation steps, picks the [`Timing`] for every transition and pushes a
//!   [`NavigationContext`] down into the content on each render.
//! - **Shared identity**: [`IdentityRegistry`] remembers where tagged
//!   elements were so the renderer can morph them across slide changes.
//!
//! # Data flow
//!
//! ```text
//! Presentation ── NavigationContext ──> active Slide ──> View
//!      ^                                     │
//!      └──────── StepDeclaration ────────────┘   (StepChannel)
//!
//! View ── Theme ──> themed View ── IdentityRegistry ──> MatchedPair[]
//! ```
//!
//! # Example
//!
//! ```
//! use rune_slides::{slide, slides, Presentation, StepDeclaration, Timing, View};
//!
//! let title = slide(StepDeclaration::empty(), |_| View::text("Rune Slides", 48.0));
//! let bullets = slide(StepDeclaration::uniform(2, Timing::linear(200.0)), |cx| {
//!     View::text(format!("{} bullet(s)", cx.current_step + 1), 24.0)
//! });
//!
//! let mut deck = Presentation::new(slides![title, bullets]);
//! deck.next();
//! deck.next();
//! let frame = deck.render();
//! assert_eq!((frame.context.current_slide, frame.context.current_step), (1, 1));
//! ```

pub mod animation;
pub mod context;
pub mod error;
pub mod identity;
pub mod input;
pub mod presentation;
pub mod slide;
pub mod slide_list;
pub mod steps;
pub mod theme;
pub mod view;

pub use animation::{EasingFunction, Interpolate, Morph, MorphState, Timing};
pub use context::NavigationContext;
pub use error::{Error, Result};
pub use identity::{Anchor, IdentityRegistry, MatchedPair, Namespace};
pub use input::{Command, KeyMap};
pub use presentation::{Frame, Position, Presentation, Transition, TransitionKind};
pub use slide::{FnSlide, Slide, StepDeclaration, slide};
pub use slide_list::{Concat, EmptySlides, SlideGroup, SlideList, SlideListBuilder};
pub use steps::StepChannel;
pub use theme::{BuiltinTheme, PlainTheme, ProgressTheme, Theme, ThemeKind};
pub use view::{Axis, MatchedGeometry, Rect, View, ViewKind};
