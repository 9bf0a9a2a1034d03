//! Navigation snapshot handed to every slide and theme on each render.

use serde::{Deserialize, Serialize};

use crate::identity::Namespace;

/// Where the presentation is, as seen by the content being rendered.
///
/// A fresh value is built for every render pass. Slides never hold on to the
/// controller; this snapshot is the only way they learn the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationContext {
    pub current_step: usize,
    pub current_slide: usize,
    pub slide_count: usize,
    pub namespace: Namespace,
}

impl NavigationContext {
    /// Context for rendering a single slide outside a presentation, e.g. in
    /// tests or thumbnails.
    pub fn standalone(current_step: usize) -> Self {
        Self {
            current_step,
            current_slide: 0,
            slide_count: 1,
            namespace: Namespace::new(),
        }
    }

    pub fn is_first_slide(&self) -> bool {
        self.current_slide == 0
    }

    pub fn is_last_slide(&self) -> bool {
        self.current_slide + 1 >= self.slide_count
    }

    /// Fraction of the deck reached, counting the current slide as seen.
    pub fn progress(&self) -> f32 {
        if self.slide_count == 0 {
            return 0.0;
        }
        (self.current_slide + 1) as f32 / self.slide_count as f32
    }

    /// Whether step `step` has been reached on the current slide.
    pub fn reached(&self, step: usize) -> bool {
        self.current_step >= step
    }
}
