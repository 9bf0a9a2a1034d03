//! Headless host for Rune Slides.
//!
//! Reads one key name per line from stdin (`Right`, `Left`, `Space`, ...),
//! maps it through the configured key table and logs every rendered frame.
//! `q` or end of input quits.
//!
//! Run with: `RUST_LOG=info cargo run -p rune-deck`

use anyhow::{Context, Result};
use rune_config::RuneConfig;
use rune_slides::{Frame, KeyMap, Presentation, SlideList, Theme};
use std::io::BufRead;

mod deck;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = RuneConfig::load();
    log::debug!("loaded config: {config:?}");

    let keys = deck::key_map(&config);
    let mut presentation = deck::build(deck::demo_slides(), &config)?;
    log::info!(
        "presenting {} slides with the {} theme",
        presentation.slide_count(),
        config.presentation.theme
    );
    report(&presentation.render());

    run(&mut presentation, &keys, std::io::stdin().lock())
}

fn run<L, T, R>(presentation: &mut Presentation<L, T>, keys: &KeyMap, input: R) -> Result<()>
where
    L: SlideList,
    T: Theme,
    R: BufRead,
{
    for line in input.lines() {
        let line = line.context("failed to read from stdin")?;
        let key = line.trim();
        if key.is_empty() {
            continue;
        }
        if key.eq_ignore_ascii_case("q") {
            break;
        }

        let Some(command) = keys.command_for(key) else {
            log::warn!("no command bound to key {key:?}");
            continue;
        };
        match presentation.handle(command) {
            Some(_) => report(&presentation.render()),
            None => log::info!("{command:?}: already at the edge of the deck"),
        }
    }
    Ok(())
}

fn report(frame: &Frame) {
    let cx = &frame.context;
    log::info!(
        "slide {}/{} step {}/{}",
        cx.current_slide + 1,
        cx.slide_count,
        cx.current_step + 1,
        frame.steps.number_of_steps()
    );
    if let Some(transition) = &frame.transition {
        log::info!(
            "{:?} transition over {}ms ({})",
            transition.kind,
            transition.timing.total_ms(),
            transition.timing.easing.css_name().unwrap_or("cubic-bezier")
        );
    }
    for pair in &frame.matches {
        log::info!(
            "morph {:?}: {:?} -> {:?}",
            pair.id,
            pair.from.frame,
            pair.to.frame
        );
    }
    tracing::trace!("frame outline:\n{}", frame.view.outline());
}
