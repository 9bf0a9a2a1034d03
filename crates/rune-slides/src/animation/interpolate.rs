//! Linear interpolation between visual states.

use crate::identity::Anchor;
use crate::view::Rect;

/// Types that can be blended between two values.
///
/// `t = 0.0` returns `self`, `t = 1.0` returns `to`. Values outside `[0, 1]`
/// extrapolate, which overshooting bezier curves rely on.
pub trait Interpolate: Sized {
    fn interpolate(&self, to: &Self, t: f32) -> Self;
}

#[inline]
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

impl Interpolate for f32 {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        lerp(*self, *to, t)
    }
}

impl Interpolate for Rect {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        Self {
            x: lerp(self.x, to.x, t),
            y: lerp(self.y, to.y, t),
            w: lerp(self.w, to.w, t),
            h: lerp(self.h, to.h, t),
        }
    }
}

impl Interpolate for Anchor {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        Self {
            frame: self.frame.interpolate(&to.frame, t),
            opacity: lerp(self.opacity, to.opacity, t).clamp(0.0, 1.0),
        }
    }
}
