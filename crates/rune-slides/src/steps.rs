//! Upward channel carrying the active slide's step declaration.
//!
//! Slides report their steps while being rendered; the controller reads the
//! result once the pass is over. The channel holds no history: each pass
//! starts from an empty declaration and the last emission wins.

use crate::slide::StepDeclaration;

/// Render-scoped, last-writer-wins step declaration.
#[derive(Debug, Default)]
pub struct StepChannel {
    value: StepDeclaration,
    emissions: usize,
}

impl StepChannel {
    /// Open a new pass with the default (empty) declaration.
    pub fn begin() -> Self {
        Self::default()
    }

    /// Report a declaration, replacing any earlier report in this pass.
    pub fn emit(&mut self, declaration: StepDeclaration) {
        self.value = declaration;
        self.emissions += 1;
    }

    /// Number of reports received in this pass.
    pub fn emissions(&self) -> usize {
        self.emissions
    }

    /// Close the pass and yield the surviving declaration.
    pub fn finish(self) -> StepDeclaration {
        if self.emissions > 1 {
            tracing::trace!(
                emissions = self.emissions,
                "multiple step declarations in one pass; keeping the last"
            );
        }
        self.value
    }
}
