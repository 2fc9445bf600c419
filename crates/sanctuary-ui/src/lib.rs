//! Sanctuary UI Components
//!
//! Presentational Dioxus components for the devotional page. Components are
//! stateless: they render whatever [`sanctuary_core::Page`] says and report
//! clicks back through event handlers.
//!
//! ## Markup contract
//!
//! Class and id names are load-bearing. The desktop bridge measures geometry
//! with these selectors:
//!
//! - `nav`, `#menu-toggle`, `#nav-links` (class `show` while open)
//! - `.music-scroll` holding `.release-card` elements with an `.album-inner`
//! - `#devotions` holding `.devotion` panels with a `.devotion-body`

pub mod components;

pub use components::*;
