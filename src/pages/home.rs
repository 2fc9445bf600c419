//! Home page - the whole devotional site.
//!
//! Header, release carousel, devotions accordion. Every interaction is routed
//! through the bridge so the page state machine stays the single source of
//! truth.

use dioxus::prelude::*;
use sanctuary_core::{Direction, PageEvent};
use sanctuary_ui::{devotions_section_class, CarouselButton, DevotionPanel, NavMenu, ReleaseCard};

use crate::bridge::{self, dispatch};
use crate::context::{use_content, use_page};

/// Home page component.
#[component]
pub fn Home() -> Element {
    let content = use_content();
    let page = use_page();

    // Listeners need the carousel container in the DOM.
    use_effect(move || bridge::install_listeners(page));

    let state = page.read();
    let background = state
        .background_css()
        .map(|css| format!("background: {css};"))
        .unwrap_or_default();

    rsx! {
        div {
            id: "top",
            class: "page",
            style: "{background}",
            onclick: move |_| dispatch(page, PageEvent::OutsideNavClick),

            NavMenu {
                title: content.title.clone(),
                links: content.nav_links.clone(),
                open: state.nav_open(),
                on_toggle: move |_| dispatch(page, PageEvent::MenuToggle),
                on_anchor: move |href| dispatch(page, PageEvent::NavLinkClick { href }),
            }

            header { class: "hero",
                h1 { class: "hero-title", "{content.title}" }
                if !content.tagline.is_empty() {
                    p { class: "hero-tagline", "{content.tagline}" }
                }
            }

            section { id: "music", class: "music",
                h2 { class: "section-header", "Releases" }

                div { class: "carousel",
                    CarouselButton {
                        direction: Direction::Left,
                        on_click: move |d| dispatch(page, PageEvent::CarouselButton(d)),
                    }

                    div { class: "music-scroll",
                        for (index, release) in content.releases.iter().enumerate() {
                            ReleaseCard {
                                key: "{release.id}",
                                release: release.clone(),
                                state: state.card_state(index),
                                visual: state.card_visual(index).copied(),
                                on_click: move |_| dispatch(page, PageEvent::CardClick { index }),
                            }
                        }
                    }

                    CarouselButton {
                        direction: Direction::Right,
                        on_click: move |d| dispatch(page, PageEvent::CarouselButton(d)),
                    }
                }
            }

            section {
                id: "devotions",
                class: devotions_section_class(state.devotions_active()),
                h2 { class: "section-header", "Devotions" }

                for devotion in content.devotions.iter() {
                    DevotionPanel {
                        key: "{devotion.id}",
                        devotion: devotion.clone(),
                        state: state.panel_state(&devotion.id),
                        on_click: move |id| dispatch(page, PageEvent::DevotionClick { id }),
                    }
                }
            }

            footer { class: "site-footer",
                p { "\u{00A9} {content.title}" }
            }
        }
    }
}
