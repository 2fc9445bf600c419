//! Release Card Component
//!
//! One carousel card. The front shows the cover, the back shows the release
//! notes once the card is flipped.

use dioxus::prelude::*;
use sanctuary_core::{CardState, CardVisual, Release};

/// CSS classes for a card in the given state.
pub fn release_card_class(state: CardState) -> &'static str {
    match state {
        CardState::Normal => "release-card",
        CardState::Showcase => "release-card showcase flipped",
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ReleaseCardProps {
    pub release: Release,
    pub state: CardState,
    /// Last computed visual; cards render unstyled until measured
    #[props(default)]
    pub visual: Option<CardVisual>,
    pub on_click: EventHandler<()>,
}

/// Carousel card with a flippable inner face.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ReleaseCard {
///         release: release.clone(),
///         state: page.read().card_state(index),
///         visual: page.read().card_visual(index).copied(),
///         on_click: move |_| dispatch(PageEvent::CardClick { index }),
///     }
/// }
/// ```
#[component]
pub fn ReleaseCard(props: ReleaseCardProps) -> Element {
    let card_style = props.visual.map(|v| v.card_style()).unwrap_or_default();
    let face_style = props.visual.map(|v| v.face_style()).unwrap_or_default();
    let release = &props.release;

    rsx! {
        div {
            class: release_card_class(props.state),
            style: "{card_style}",
            "data-release-id": "{release.id}",
            "data-devotion-id": release.devotion_id.clone().unwrap_or_default(),
            onclick: move |_| props.on_click.call(()),

            div { class: "album-inner", style: "{face_style}",
                div { class: "album-front",
                    if let Some(ref cover) = release.cover {
                        img { src: "{cover}", alt: "{release.title}", class: "album-cover" }
                    } else {
                        div { class: "album-placeholder", "{release.title}" }
                    }
                }
                div { class: "album-back",
                    h3 { class: "album-title", "{release.title}" }
                    if let Some(year) = release.year {
                        span { class: "album-year", "{year}" }
                    }
                    if let Some(ref text) = release.back_text {
                        p { class: "album-notes", "{text}" }
                    }
                    if release.devotion_id.is_some() {
                        span { class: "album-devotion-hint", "read the devotion" }
                    }
                }
            }
        }
    }
}
