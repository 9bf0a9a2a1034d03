//! The bundled demo deck and the glue that turns a [`RuneConfig`] into a
//! running [`Presentation`].

use anyhow::{Context, Result};
use rune_config::RuneConfig;
use rune_slides::{
    Axis, BuiltinTheme, EasingFunction, KeyMap, NavigationContext, Presentation, Rect,
    SlideList, StepDeclaration, ThemeKind, Timing, View, slide, slides,
};

const TITLE_FRAME: Rect = Rect::new(140.0, 280.0, 1000.0, 96.0);
const HEADER_FRAME: Rect = Rect::new(48.0, 32.0, 600.0, 48.0);

fn heading(text: &str, frame: Rect, size: f32, cx: &NavigationContext) -> View {
    View::text(text, size)
        .frame(frame)
        .matched_geometry("title", cx.namespace)
}

/// Three slides: a title, a bullet list revealed one step at a time and a
/// closing slide. The title text morphs between all of them.
pub fn demo_slides() -> impl SlideList {
    const BULLETS: [&str; 3] = [
        "Slides compose with slides![]",
        "Steps reveal content in place",
        "Tagged views morph across slides",
    ];

    let title = slide(StepDeclaration::empty(), |cx: &NavigationContext| {
        View::stack(Axis::Layered).child(heading("Rune Slides", TITLE_FRAME, 64.0, cx))
    });

    let bullets = slide(
        StepDeclaration::uniform(BULLETS.len() - 1, Timing::linear(200.0)),
        |cx: &NavigationContext| {
            let items = BULLETS.iter().enumerate().map(|(i, text)| {
                let frame = Rect::new(72.0, 140.0 + 64.0 * i as f32, 900.0, 48.0);
                let opacity = if cx.reached(i) { 1.0 } else { 0.0 };
                View::text(*text, 28.0).frame(frame).opacity(opacity)
            });
            View::stack(Axis::Vertical)
                .child(heading("Rune Slides", HEADER_FRAME, 32.0, cx))
                .children(items)
        },
    );

    let closing = slide(StepDeclaration::empty(), |cx: &NavigationContext| {
        View::stack(Axis::Layered)
            .child(View::fill([0.08, 0.08, 0.1, 1.0]).frame(Rect::new(0.0, 0.0, 1280.0, 720.0)))
            .child(heading("Thanks!", TITLE_FRAME, 64.0, cx))
    });

    slides![title, bullets, closing]
}

/// Slide transition timing from `[transitions]`.
pub fn slide_timing(config: &RuneConfig) -> Result<Timing> {
    let easing: EasingFunction = config
        .transitions
        .slide_easing
        .parse()
        .context("invalid [transitions] slide_easing")?;
    Ok(Timing::new(config.transitions.slide_duration_ms.max(0.0), easing))
}

/// Key table from `[keys]`.
pub fn key_map(config: &RuneConfig) -> KeyMap {
    KeyMap::from_bindings(&config.keys.next, &config.keys.previous)
}

pub fn build<L: SlideList>(
    slides: L,
    config: &RuneConfig,
) -> Result<Presentation<L, BuiltinTheme>> {
    let kind: ThemeKind = config
        .presentation
        .theme
        .parse()
        .context("invalid [presentation] theme")?;

    Ok(Presentation::with_theme(slides, BuiltinTheme::from(kind))
        .with_slide_timing(slide_timing(config)?)
        .start_at(config.presentation.start_slide))
}
