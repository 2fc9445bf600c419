use dioxus::prelude::*;
use sanctuary_core::Page;

use crate::context::get_content;
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, content and page state, then renders the single
/// page.
#[component]
pub fn App() -> Element {
    let content = use_hook(get_content);
    let page: Signal<Page> = use_signal(|| Page::new(&content));

    use_context_provider(|| content.clone());
    use_context_provider(|| page);

    rsx! {
        style { {GLOBAL_STYLES} }
        Home {}
    }
}
