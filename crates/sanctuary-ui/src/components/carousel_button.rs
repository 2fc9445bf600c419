//! Carousel arrow buttons.

use dioxus::prelude::*;
use sanctuary_core::Direction;

/// CSS classes for an arrow button.
pub fn carousel_button_class(direction: Direction) -> &'static str {
    match direction {
        Direction::Left => "carousel-btn left",
        Direction::Right => "carousel-btn right",
    }
}

#[component]
pub fn CarouselButton(direction: Direction, on_click: EventHandler<Direction>) -> Element {
    let (glyph, label) = match direction {
        Direction::Left => ("\u{2039}", "Previous releases"),
        Direction::Right => ("\u{203A}", "Next releases"),
    };

    rsx! {
        button {
            class: carousel_button_class(direction),
            "aria-label": label,
            onclick: move |_| on_click.call(direction),
            "{glyph}"
        }
    }
}
