//! Property-based tests for page behavior
//!
//! Uses proptest to verify the single-showcase and single-open invariants and
//! the bounds of the gradient and card visuals.

use proptest::prelude::*;
use sanctuary_core::gradient::{scroll_progress, DARK, WARM_BOTTOM, WARM_TOP};
use sanctuary_core::{
    CardState, CardVisual, Direction, Gradient, LayoutSnapshot, Page, PageEvent, Rect, Rgb,
    SiteContent, Tuning, WindowMetrics,
};

// ============================================================================
// Strategy Generators
// ============================================================================

const CARDS: usize = 6;
const PANELS: usize = 4;

/// Six releases; even ones link to a devotion, index 4 links to a missing one.
fn content() -> SiteContent {
    let releases: Vec<String> = (0..CARDS)
        .map(|i| {
            let link = match i {
                4 => r#", "devotion_id": "ghost""#.to_string(),
                i if i % 2 == 0 => format!(r#", "devotion_id": "d{}""#, i / 2),
                _ => String::new(),
            };
            format!(r#"{{ "id": "r{i}", "title": "R{i}"{link} }}"#)
        })
        .collect();
    let devotions: Vec<String> = (0..PANELS)
        .map(|i| format!(r#"{{ "id": "d{i}", "title": "D{i}" }}"#))
        .collect();
    let json = format!(
        r#"{{ "title": "t", "releases": [{}], "devotions": [{}] }}"#,
        releases.join(","),
        devotions.join(",")
    );
    SiteContent::from_json(&json).unwrap()
}

fn layout() -> LayoutSnapshot {
    let mut layout = LayoutSnapshot {
        container: Some(Rect::new(0.0, 0.0, 900.0, 300.0)),
        cards: (0..CARDS)
            .map(|i| Rect::new(i as f64 * 220.0, 0.0, 200.0, 300.0))
            .collect(),
        ..Default::default()
    };
    for i in 0..PANELS {
        layout
            .panel_heights
            .insert(format!("d{i}"), 100.0 + i as f64 * 10.0);
    }
    layout
}

/// User interactions on the page
#[derive(Debug, Clone)]
enum Interaction {
    Card(usize),
    Devotion(usize),
    Arrow(bool),
    Resize,
}

fn interactions_strategy(max: usize) -> impl Strategy<Value = Vec<Interaction>> {
    prop::collection::vec(
        prop_oneof![
            3 => (0..CARDS + 2).prop_map(Interaction::Card),
            2 => (0..PANELS + 1).prop_map(Interaction::Devotion),
            1 => any::<bool>().prop_map(Interaction::Arrow),
            1 => Just(Interaction::Resize),
        ],
        0..max,
    )
}

fn to_event(interaction: &Interaction) -> PageEvent {
    match interaction {
        Interaction::Card(i) => PageEvent::CardClick { index: *i },
        Interaction::Devotion(i) => PageEvent::DevotionClick { id: format!("d{i}") },
        Interaction::Arrow(left) => PageEvent::CarouselButton(if *left {
            Direction::Left
        } else {
            Direction::Right
        }),
        Interaction::Resize => PageEvent::Resize,
    }
}

fn channels_between(c: Rgb, from: Rgb, to: Rgb) -> bool {
    let within = |v: u8, a: u8, b: u8| v >= a.min(b) && v <= a.max(b);
    within(c.r, from.r, to.r) && within(c.g, from.g, to.g) && within(c.b, from.b, to.b)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// At most one card is showcase/flipped after any interaction sequence
    #[test]
    fn single_showcase(ops in interactions_strategy(40)) {
        let mut page = Page::new(&content());
        let layout = layout();
        page.dispatch(PageEvent::Load, &layout);

        for op in &ops {
            page.dispatch(to_event(op), &layout);
            let showcased = (0..CARDS)
                .filter(|&i| page.card_state(i) == CardState::Showcase)
                .count();
            prop_assert!(showcased <= 1);
            let flipped = (0..CARDS).filter(|&i| page.card_state(i).is_flipped()).count();
            prop_assert!(flipped <= 1);
        }
    }

    /// At most one devotion panel is open after any interaction sequence
    #[test]
    fn single_open_devotion(ops in interactions_strategy(40)) {
        let mut page = Page::new(&content());
        let layout = layout();
        page.dispatch(PageEvent::Load, &layout);

        for op in &ops {
            page.dispatch(to_event(op), &layout);
            let open = (0..PANELS)
                .filter(|i| page.panel_state(&format!("d{i}")).is_open())
                .count();
            prop_assert!(open <= 1);
            prop_assert_eq!(page.devotions_active(), open == 1);
        }
    }

    /// Clicking an unlinked card never changes the devotions
    #[test]
    fn unlinked_card_never_touches_devotions(
        ops in interactions_strategy(20),
        card in prop::sample::select(vec![1usize, 3, 5]),
    ) {
        let mut page = Page::new(&content());
        let layout = layout();
        page.dispatch(PageEvent::Load, &layout);
        for op in &ops {
            page.dispatch(to_event(op), &layout);
        }

        let before: Vec<_> = (0..PANELS).map(|i| page.panel_state(&format!("d{i}"))).collect();
        page.dispatch(PageEvent::CardClick { index: card }, &layout);
        let after: Vec<_> = (0..PANELS).map(|i| page.panel_state(&format!("d{i}"))).collect();
        prop_assert_eq!(before, after);
    }

    /// Gradient channels stay between their anchors for any scroll position
    #[test]
    fn gradient_within_anchors(
        scroll_y in -1e5f64..1e6,
        document_height in 0f64..1e6,
        viewport_height in 1f64..5000.0,
    ) {
        let metrics = WindowMetrics { scroll_y, document_height, viewport_height };
        if let Some(t) = scroll_progress(&metrics, 0.5) {
            prop_assert!((0.0..=1.0).contains(&t));
            let gradient = Gradient::at(t);
            prop_assert!(channels_between(gradient.top, DARK, WARM_TOP));
            prop_assert!(channels_between(gradient.bottom, DARK, WARM_BOTTOM));
        } else {
            prop_assert!(document_height - viewport_height <= 0.0);
        }
    }

    /// Gradient channels are monotonic in t
    #[test]
    fn gradient_monotonic(a in 0f64..=1.0, b in 0f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let g_lo = Gradient::at(lo);
        let g_hi = Gradient::at(hi);
        prop_assert!(g_lo.top.r <= g_hi.top.r);
        prop_assert!(g_lo.top.g <= g_hi.top.g);
        prop_assert!(g_lo.top.b <= g_hi.top.b);
        prop_assert!(g_lo.bottom.r <= g_hi.bottom.r);
        prop_assert!(g_lo.bottom.g <= g_hi.bottom.g);
        prop_assert!(g_lo.bottom.b <= g_hi.bottom.b);
    }

    /// Card visuals stay within their documented ranges
    #[test]
    fn card_visual_bounds(
        card_left in -5000f64..5000.0,
        card_width in 0f64..600.0,
        container_width in 0f64..2000.0,
        showcase in any::<bool>(),
    ) {
        let tuning = Tuning::default();
        let state = if showcase { CardState::Showcase } else { CardState::Normal };
        let visual = CardVisual::compute(
            Rect::new(0.0, 0.0, container_width, 300.0),
            Rect::new(card_left, 0.0, card_width, 300.0),
            state,
            &tuning,
        );
        prop_assert!((0.0..=1.0).contains(&visual.t));
        prop_assert!(visual.scale >= 0.55 - 1e-9 && visual.scale <= 1.0);
        prop_assert!(visual.opacity >= 0.5 - 1e-9 && visual.opacity <= 1.0);
        if let sanctuary_core::Face::Tilt(deg) = visual.face {
            prop_assert!(deg.abs() <= 20.0 + 1e-9);
        }
    }
}
