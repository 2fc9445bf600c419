//! Navigation Menu Component
//!
//! Fixed header with site title, a menu toggle for narrow screens, and the
//! link list. In-page links are reported to the page instead of jumping.

use dioxus::prelude::*;
use sanctuary_core::NavLink;

/// CSS class for the link list.
pub fn nav_list_class(open: bool) -> &'static str {
    if open {
        "nav-links show"
    } else {
        "nav-links"
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavMenuProps {
    /// Site title shown at the left of the header
    pub title: String,
    pub links: Vec<NavLink>,
    /// Whether the link list is visible
    pub open: bool,
    /// Toggle control clicked
    pub on_toggle: EventHandler<()>,
    /// In-page link clicked (receives the full `#id` href)
    pub on_anchor: EventHandler<String>,
}

/// Navigation header.
///
/// Clicks inside the nav never bubble to the page, so the page's outside-click
/// handler only sees clicks that really are outside.
#[component]
pub fn NavMenu(props: NavMenuProps) -> Element {
    rsx! {
        nav {
            class: "site-nav",
            onclick: move |evt| evt.stop_propagation(),

            span { class: "nav-title", "{props.title}" }

            button {
                id: "menu-toggle",
                class: "menu-toggle",
                "aria-label": "Toggle navigation",
                "aria-expanded": if props.open { "true" } else { "false" },
                onclick: move |evt| {
                    evt.stop_propagation();
                    props.on_toggle.call(());
                },
                span { class: "menu-bar" }
                span { class: "menu-bar" }
                span { class: "menu-bar" }
            }

            ul {
                id: "nav-links",
                class: nav_list_class(props.open),
                for link in props.links.iter() {
                    {
                        let href = link.href.clone();
                        let is_anchor = link.anchor_id().is_some();
                        rsx! {
                            li { key: "{link.href}",
                                a {
                                    href: "{link.href}",
                                    onclick: move |evt| {
                                        if is_anchor {
                                            evt.prevent_default();
                                            props.on_anchor.call(href.clone());
                                        }
                                    },
                                    "{link.label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_class_tracks_open_state() {
        assert_eq!(nav_list_class(true), "nav-links show");
        assert_eq!(nav_list_class(false), "nav-links");
    }
}
