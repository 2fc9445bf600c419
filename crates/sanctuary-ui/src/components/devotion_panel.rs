//! Devotion Panel Component
//!
//! Accordion item. The body collapses to zero height through CSS and expands
//! to the `max-height` the page measured for it.

use dioxus::prelude::*;
use sanctuary_core::{Devotion, PanelState};

/// CSS classes for a panel in the given state.
pub fn devotion_class(state: &PanelState) -> &'static str {
    if state.is_open() {
        "devotion active open"
    } else {
        "devotion"
    }
}

/// CSS classes for the devotions section.
pub fn devotions_section_class(active: bool) -> &'static str {
    if active {
        "devotions active"
    } else {
        "devotions"
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct DevotionPanelProps {
    pub devotion: Devotion,
    pub state: PanelState,
    /// Clicking anywhere on the panel toggles it
    pub on_click: EventHandler<String>,
}

#[component]
pub fn DevotionPanel(props: DevotionPanelProps) -> Element {
    let id = props.devotion.id.clone();
    let body_style = props.state.body_style().unwrap_or_default();
    let devotion = &props.devotion;

    rsx! {
        article {
            id: "{devotion.id}",
            class: devotion_class(&props.state),
            onclick: move |_| props.on_click.call(id.clone()),

            header { class: "devotion-header",
                h3 { class: "devotion-title", "{devotion.title}" }
                if let Some(ref verse) = devotion.verse {
                    p { class: "devotion-verse", "{verse}" }
                }
                span { class: "devotion-chevron",
                    if props.state.is_open() { "\u{2212}" } else { "+" }
                }
            }

            div { class: "devotion-body", style: "{body_style}",
                for (i, paragraph) in devotion.body.iter().enumerate() {
                    p { key: "{i}", "{paragraph}" }
                }
            }
        }
    }
}
