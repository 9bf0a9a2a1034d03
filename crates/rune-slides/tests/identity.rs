use rune_slides::{
    Anchor, Axis, IdentityRegistry, Morph, NavigationContext, Namespace, Presentation,
    ProgressTheme, Rect, StepDeclaration, Timing, TransitionKind, View, slide, slides,
};

fn title_slide() -> impl rune_slides::Slide {
    slide(StepDeclaration::empty(), |cx: &NavigationContext| {
        View::stack(Axis::Vertical).child(
            View::text("Rune Slides", 64.0)
                .frame(Rect::new(140.0, 300.0, 1000.0, 90.0))
                .matched_geometry("title", cx.namespace),
        )
    })
}

fn body_slide() -> impl rune_slides::Slide {
    slide(StepDeclaration::empty(), |cx: &NavigationContext| {
        View::stack(Axis::Vertical)
            .child(
                View::text("Rune Slides", 28.0)
                    .frame(Rect::new(40.0, 30.0, 400.0, 40.0))
                    .matched_geometry("title", cx.namespace),
            )
            .child(
                View::text("Body", 20.0)
                    .frame(Rect::new(40.0, 100.0, 800.0, 400.0))
                    .matched_geometry("body", cx.namespace),
            )
    })
}

#[test]
fn title_morphs_from_previous_slide() {
    let mut deck = Presentation::new(slides![title_slide(), body_slide()]);
    let ns = deck.namespace();

    let first = deck.render();
    assert!(first.matches.is_empty());
    let slide0_anchor = deck
        .identities()
        .resolve(ns, "title")
        .expect("title registered on slide 0");
    assert_eq!(slide0_anchor.frame, Rect::new(140.0, 300.0, 1000.0, 90.0));

    let transition = deck.next().expect("advance to slide 1");
    assert_eq!(transition.kind, TransitionKind::Slide);

    let second = deck.render();
    assert_eq!(second.matches.len(), 1, "only the title existed before");
    let pair = &second.matches[0];
    assert_eq!(pair.id, "title");
    assert_eq!(pair.from, slide0_anchor);
    assert_eq!(pair.to.frame, Rect::new(40.0, 30.0, 400.0, 40.0));

    // The renderer drives the morph with the transition's timing.
    let mut morph = Morph::new(pair.id.clone(), pair.from, pair.to, transition.timing);
    while morph.advance(16.0) {}
    assert_eq!(morph.current(), pair.to);
}

#[test]
fn going_back_matches_against_the_later_slide() {
    let mut deck = Presentation::new(slides![title_slide(), body_slide()]);
    deck.render();
    deck.next();
    deck.render();

    deck.previous();
    let frame = deck.render();
    assert_eq!(frame.matches.len(), 1);
    assert_eq!(frame.matches[0].from.frame, Rect::new(40.0, 30.0, 400.0, 40.0));
    assert_eq!(frame.matches[0].to.frame, Rect::new(140.0, 300.0, 1000.0, 90.0));
}

#[test]
fn unregistered_identifier_has_no_match() {
    let registry = IdentityRegistry::new();
    assert!(registry.resolve(Namespace::new(), "title").is_none());

    let mut deck = Presentation::new(slides![title_slide(), body_slide()]);
    deck.render();
    assert!(deck.identities().resolve(deck.namespace(), "body").is_none());
}

#[test]
fn presentations_use_separate_namespaces() {
    let a = Presentation::new(slides![title_slide()]);
    let b = Presentation::new(slides![title_slide()]);
    assert_ne!(a.namespace(), b.namespace());
}

#[test]
fn themed_frames_keep_identities() {
    let mut deck = Presentation::with_theme(
        slides![title_slide(), body_slide()],
        ProgressTheme::default(),
    );
    deck.render();
    deck.next();
    let frame = deck.render();

    assert_eq!(frame.matches.len(), 1);
    // Content, progress bar, caption.
    assert_eq!(frame.view.children.len(), 3);
    assert_eq!(frame.view.children[1].frame.w, 1280.0);
}

#[test]
fn step_changes_report_matches_on_the_same_slide() {
    let growing = slide(
        StepDeclaration::uniform(1, Timing::linear(120.0)),
        |cx: &NavigationContext| {
            let width = if cx.current_step == 0 { 100.0 } else { 300.0 };
            View::fill([1.0; 4])
                .frame(Rect::new(0.0, 0.0, width, 50.0))
                .matched_geometry("box", cx.namespace)
        },
    );
    let mut deck = Presentation::new(growing);
    deck.render();
    let t = deck.next().expect("one extra step");
    assert_eq!(t.timing, Timing::linear(120.0));

    let frame = deck.render();
    assert_eq!(frame.matches.len(), 1);
    assert_eq!(frame.matches[0].from, Anchor::new(Rect::new(0.0, 0.0, 100.0, 50.0), 1.0));
    assert_eq!(frame.matches[0].to.frame.w, 300.0);
}

#[test]
fn element_missing_from_outgoing_slide_appears_without_morph() {
    let plain = slide(StepDeclaration::empty(), |_: &NavigationContext| {
        View::text("Interlude", 32.0)
    });
    let closing = slide(StepDeclaration::empty(), |cx: &NavigationContext| {
        View::text("Rune Slides", 64.0)
            .frame(Rect::new(900.0, 900.0, 200.0, 90.0))
            .matched_geometry("title", cx.namespace)
    });
    let mut deck = Presentation::new(slides![title_slide(), plain, closing]);

    deck.render();
    deck.next();
    assert!(deck.render().matches.is_empty());

    deck.next().expect("advance to slide 2");
    let frame = deck.render();
    assert!(
        frame.matches.is_empty(),
        "title morphed from a slide that was not on screen: {:?}",
        frame.matches
    );
    // The anchor is still updated for the next transition.
    let anchor = deck.identities().resolve(deck.namespace(), "title");
    assert_eq!(anchor.map(|a| a.frame.x), Some(900.0));
}
