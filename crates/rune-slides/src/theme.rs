//! Visual decoration applied around the visible slide.

use std::str::FromStr;

use crate::context::NavigationContext;
use crate::error::Error;
use crate::view::{Axis, Rect, View};

/// Wraps the current slide's content. Themes read the navigation context but
/// never change navigation state.
pub trait Theme {
    fn apply(&self, content: View, cx: &NavigationContext) -> View;
}

impl<F> Theme for F
where
    F: Fn(View, &NavigationContext) -> View,
{
    fn apply(&self, content: View, cx: &NavigationContext) -> View {
        self(content, cx)
    }
}

/// Leaves content untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTheme;

impl Theme for PlainTheme {
    fn apply(&self, content: View, _cx: &NavigationContext) -> View {
        content
    }
}

/// Adds a progress bar and an `n / total` caption below the content.
#[derive(Debug, Clone, Copy)]
pub struct ProgressTheme {
    /// Canvas the bar spans, in logical pixels.
    pub canvas: Rect,
    pub bar_height: f32,
    pub bar_rgba: [f32; 4],
}

impl Default for ProgressTheme {
    fn default() -> Self {
        Self {
            canvas: Rect::new(0.0, 0.0, 1280.0, 720.0),
            bar_height: 6.0,
            bar_rgba: [0.25, 0.55, 1.0, 1.0],
        }
    }
}

impl Theme for ProgressTheme {
    fn apply(&self, content: View, cx: &NavigationContext) -> View {
        let Rect { x, y, w, h } = self.canvas;
        let bar_y = y + h - self.bar_height;
        let bar = View::fill(self.bar_rgba).frame(Rect::new(x, bar_y, w * cx.progress(), self.bar_height));
        let caption = View::text(
            format!("{} / {}", cx.current_slide + 1, cx.slide_count),
            14.0,
        )
        .frame(Rect::new(x + w - 96.0, bar_y - 24.0, 88.0, 18.0));

        View::stack(Axis::Layered)
            .frame(self.canvas)
            .child(content)
            .child(bar)
            .child(caption)
    }
}

/// Built-in themes selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Plain,
    Progress,
}

impl FromStr for ThemeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "progress" => Ok(Self::Progress),
            _ => Err(Error::UnknownTheme(s.to_string())),
        }
    }
}

/// A built-in theme chosen at runtime.
#[derive(Debug, Clone, Copy)]
pub enum BuiltinTheme {
    Plain(PlainTheme),
    Progress(ProgressTheme),
}

impl From<ThemeKind> for BuiltinTheme {
    fn from(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Plain => Self::Plain(PlainTheme),
            ThemeKind::Progress => Self::Progress(ProgressTheme::default()),
        }
    }
}

impl Theme for BuiltinTheme {
    fn apply(&self, content: View, cx: &NavigationContext) -> View {
        match self {
            Self::Plain(theme) => theme.apply(content, cx),
            Self::Progress(theme) => theme.apply(content, cx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Namespace;
    use crate::view::ViewKind;

    fn cx(current_slide: usize, slide_count: usize) -> NavigationContext {
        NavigationContext {
            current_step: 0,
            current_slide,
            slide_count,
            namespace: Namespace::new(),
        }
    }

    #[test]
    fn test_plain_theme_is_identity() {
        let content = View::text("Hi", 12.0);
        assert_eq!(PlainTheme.apply(content.clone(), &cx(0, 1)), content);
    }

    #[test]
    fn test_progress_theme_tracks_position() {
        let theme = ProgressTheme::default();
        let view = theme.apply(View::text("Hi", 12.0), &cx(1, 4));

        assert_eq!(view.children.len(), 3);
        let bar = &view.children[1];
        assert_eq!(bar.frame.w, 640.0);
        assert_eq!(
            view.children[2].kind,
            ViewKind::Text {
                content: "2 / 4".into(),
                size: 14.0
            }
        );
    }

    #[test]
    fn test_closure_theme() {
        let theme = |content: View, cx: &NavigationContext| {
            View::stack(Axis::Vertical)
                .child(content)
                .child(View::text(format!("#{}", cx.current_slide), 10.0))
        };
        let view = theme.apply(View::empty(), &cx(2, 3));
        assert_eq!(view.children.len(), 2);
    }

    #[test]
    fn test_theme_kind_from_str() {
        assert_eq!("Progress".parse::<ThemeKind>().unwrap(), ThemeKind::Progress);
        assert_eq!("plain".parse::<ThemeKind>().unwrap(), ThemeKind::Plain);
        assert!("neon".parse::<ThemeKind>().is_err());
    }
}
