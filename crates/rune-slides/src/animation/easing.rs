//! Easing curves for step and slide transitions.
//!
//! Curves follow the CSS timing-function definitions so that decks authored
//! against a browser-based player animate the same way here.
//!
//! ```
//! use rune_slides::animation::EasingFunction;
//!
//! let curve: EasingFunction = "ease-out".parse().unwrap();
//! assert!(curve.evaluate(0.5) > 0.5);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Maps linear progress in `[0, 1]` to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EasingFunction {
    /// No easing.
    Linear,
    /// CSS `ease`, `cubic-bezier(0.25, 0.1, 0.25, 1.0)`.
    Ease,
    /// CSS `ease-in`, `cubic-bezier(0.42, 0, 1, 1)`.
    EaseIn,
    /// CSS `ease-out`, `cubic-bezier(0, 0, 0.58, 1)`.
    EaseOut,
    /// CSS `ease-in-out`, `cubic-bezier(0.42, 0, 0.58, 1)`.
    #[default]
    EaseInOut,
    /// Custom curve through control points `(x1, y1)` and `(x2, y2)`.
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl EasingFunction {
    /// Evaluate the curve at progress `t`. Input is clamped to `[0, 1]`.
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Self::Linear => t,
            Self::Ease => Bezier::new(0.25, 0.1, 0.25, 1.0).sample(t),
            Self::EaseIn => Bezier::new(0.42, 0.0, 1.0, 1.0).sample(t),
            Self::EaseOut => Bezier::new(0.0, 0.0, 0.58, 1.0).sample(t),
            Self::EaseInOut => Bezier::new(0.42, 0.0, 0.58, 1.0).sample(t),
            Self::CubicBezier { x1, y1, x2, y2 } => Bezier::new(x1, y1, x2, y2).sample(t),
        }
    }

    /// Create a custom cubic bezier curve.
    ///
    /// # Panics
    /// Panics if `x1` or `x2` are outside `[0, 1]`.
    pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        assert!(
            (0.0..=1.0).contains(&x1) && (0.0..=1.0).contains(&x2),
            "Bezier x values must be in [0, 1]"
        );
        Self::CubicBezier { x1, y1, x2, y2 }
    }

    /// CSS name of this curve, or `None` for custom beziers.
    pub fn css_name(&self) -> Option<&'static str> {
        match self {
            Self::Linear => Some("linear"),
            Self::Ease => Some("ease"),
            Self::EaseIn => Some("ease-in"),
            Self::EaseOut => Some("ease-out"),
            Self::EaseInOut => Some("ease-in-out"),
            Self::CubicBezier { .. } => None,
        }
    }
}

impl FromStr for EasingFunction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "linear" => return Ok(Self::Linear),
            "ease" => return Ok(Self::Ease),
            "ease-in" => return Ok(Self::EaseIn),
            "ease-out" => return Ok(Self::EaseOut),
            "ease-in-out" => return Ok(Self::EaseInOut),
            _ => {}
        }

        let args = name
            .strip_prefix("cubic-bezier(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| Error::UnknownEasing(s.to_string()))?;
        let points: Vec<f32> = args
            .split(',')
            .map(|p| p.trim().parse::<f32>())
            .collect::<Result<_, _>>()
            .map_err(|_| Error::UnknownEasing(s.to_string()))?;

        match points.as_slice() {
            &[x1, y1, x2, y2] if (0.0..=1.0).contains(&x1) && (0.0..=1.0).contains(&x2) => {
                Ok(Self::CubicBezier { x1, y1, x2, y2 })
            }
            _ => Err(Error::UnknownEasing(s.to_string())),
        }
    }
}

/// Cubic bezier with endpoints fixed at `(0, 0)` and `(1, 1)`.
#[derive(Clone, Copy)]
struct Bezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl Bezier {
    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(self, progress: f32) -> f32 {
        if progress <= 0.0 {
            return 0.0;
        }
        if progress >= 1.0 {
            return 1.0;
        }
        let t = self.solve_x(progress);
        component(self.y1, self.y2, t)
    }

    /// Newton-Raphson search for the curve parameter whose x equals `target`.
    fn solve_x(self, target: f32) -> f32 {
        let mut t = target;
        for _ in 0..8 {
            let err = component(self.x1, self.x2, t) - target;
            if err.abs() < 1e-6 {
                break;
            }
            let slope = derivative(self.x1, self.x2, t);
            if slope.abs() < 1e-6 {
                break;
            }
            t = (t - err / slope).clamp(0.0, 1.0);
        }
        t
    }
}

/// `3(1-t)²t·p1 + 3(1-t)t²·p2 + t³`
#[inline]
fn component(p1: f32, p2: f32, t: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t
}

#[inline]
fn derivative(p1: f32, p2: f32, t: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * p1 + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_linear_is_identity() {
        let ease = EasingFunction::Linear;
        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert!(approx_eq(ease.evaluate(t), t));
        }
    }

    #[test]
    fn test_named_curves_hit_endpoints() {
        for ease in [
            EasingFunction::Ease,
            EasingFunction::EaseIn,
            EasingFunction::EaseOut,
            EasingFunction::EaseInOut,
        ] {
            assert!(approx_eq(ease.evaluate(0.0), 0.0), "{ease:?} at 0");
            assert!(approx_eq(ease.evaluate(1.0), 1.0), "{ease:?} at 1");
        }
    }

    #[test]
    fn test_default_is_ease_in_out() {
        assert_eq!(EasingFunction::default(), EasingFunction::EaseInOut);
        assert_eq!(EasingFunction::default().css_name(), Some("ease-in-out"));
    }

    #[test]
    fn test_ease_in_out_is_symmetric() {
        let ease = EasingFunction::EaseInOut;
        assert!(approx_eq(ease.evaluate(0.5), 0.5));
        assert!(approx_eq(ease.evaluate(0.25) + ease.evaluate(0.75), 1.0));
    }

    #[test]
    fn test_ease_in_and_out_shapes() {
        assert!(EasingFunction::EaseIn.evaluate(0.25) < 0.25);
        assert!(EasingFunction::EaseOut.evaluate(0.25) > 0.25);
    }

    #[test]
    fn test_clamping() {
        let ease = EasingFunction::Ease;
        assert!(approx_eq(ease.evaluate(-0.5), 0.0));
        assert!(approx_eq(ease.evaluate(1.5), 1.0));
    }

    #[test]
    fn test_parse_css_names() {
        assert_eq!("linear".parse::<EasingFunction>().unwrap(), EasingFunction::Linear);
        assert_eq!(" Ease-In ".parse::<EasingFunction>().unwrap(), EasingFunction::EaseIn);
        assert_eq!(
            "cubic-bezier(0.4, 0, 0.2, 1)".parse::<EasingFunction>().unwrap(),
            EasingFunction::CubicBezier { x1: 0.4, y1: 0.0, x2: 0.2, y2: 1.0 }
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("bouncy".parse::<EasingFunction>().is_err());
        assert!("cubic-bezier(0.4, 0)".parse::<EasingFunction>().is_err());
        assert!("cubic-bezier(1.4, 0, 0.2, 1)".parse::<EasingFunction>().is_err());
    }

    #[test]
    fn test_css_name_round_trip() {
        let ease = EasingFunction::EaseOut;
        let name = ease.css_name().unwrap();
        assert_eq!(name.parse::<EasingFunction>().unwrap(), ease);
        assert_eq!(EasingFunction::cubic_bezier(0.1, 0.2, 0.3, 0.4).css_name(), None);
    }

    #[test]
    #[should_panic(expected = "Bezier x values must be in [0, 1]")]
    fn test_invalid_bezier_x() {
        EasingFunction::cubic_bezier(-0.1, 0.0, 0.5, 1.0);
    }
}
