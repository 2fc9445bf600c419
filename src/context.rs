//! Page context provider for Sanctuary.
//!
//! Provides the site content and the interactive page state to all
//! components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| content.clone());
//! use_context_provider(|| page);
//!
//! // In child components
//! let page = use_page();
//! bridge::dispatch(page, PageEvent::MenuToggle);
//! ```

use dioxus::prelude::*;
use sanctuary_core::{Page, SiteContent};

/// Site content loaded at startup.
pub fn get_content() -> SiteContent {
    crate::get_content()
}

/// Hook to access the site content from context.
pub fn use_content() -> SiteContent {
    use_context::<SiteContent>()
}

/// Hook to access the interactive page state.
///
/// Writes go through `bridge::dispatch` so host commands are executed.
pub fn use_page() -> Signal<Page> {
    use_context::<Signal<Page>>()
}
