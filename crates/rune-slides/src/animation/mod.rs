//! Animation vocabulary shared by slides and the renderer.
//!
//! - **Timing**: duration, delay and curve of a step or slide transition
//! - **Easing**: CSS-compatible curves
//! - **Interpolation**: blending between visual states
//! - **Morph**: interpolation of one shared element across a slide change
//!
//! ```text
//! Slide ── declares ──> [Timing; n]      (one per extra step)
//! Presentation ── selects ──> Timing      (per transition)
//! Renderer ── drives ──> Morph            (per matched identity)
//! ```

pub mod easing;
pub mod interpolate;
pub mod morph;
pub mod timing;

pub use easing::EasingFunction;
pub use interpolate::Interpolate;
pub use morph::{Morph, MorphState};
pub use timing::Timing;
