//! Sanctuary Core Library
//!
//! Interactive behavior of the Sanctuary devotional page, independent of any
//! renderer.
//!
//! ## Overview
//!
//! The page has five behaviors sharing one event stream:
//!
//! - **Nav menu**: toggle button, closes on outside click
//! - **Smooth scroll**: in-page anchors scroll below the fixed header
//! - **Background gradient**: warms with scroll progress, once per frame
//! - **Carousel**: 3D release cards, click to center, showcase and flip
//! - **Devotions**: accordion panels, at most one open
//!
//! Each is an explicit state machine. [`Page`] owns them all and turns events
//! plus measured geometry into state changes and host [`Command`]s.
//!
//! ## Quick Start
//!
//! ```
//! use sanctuary_core::{LayoutSnapshot, Page, PageEvent, SiteContent};
//!
//! let content = SiteContent::default();
//! let mut page = Page::new(&content);
//!
//! let commands = page.dispatch(PageEvent::Load, &LayoutSnapshot::default());
//! assert!(!commands.is_empty());
//!
//! page.dispatch(PageEvent::MenuToggle, &LayoutSnapshot::default());
//! assert!(page.nav_open());
//! ```

pub mod carousel;
pub mod config;
pub mod content;
pub mod devotion;
pub mod error;
pub mod geometry;
pub mod gradient;
pub mod logging;
pub mod nav;
pub mod page;
pub mod throttle;

// Re-exports
pub use carousel::{Card, CardState, CardVisual, Carousel, Direction, Face};
pub use config::Tuning;
pub use content::{Devotion, NavLink, Release, SiteContent};
pub use devotion::{Accordion, PanelState, Toggle};
pub use error::{PageError, PageResult};
pub use geometry::{Layout, LayoutSnapshot, Rect, WindowMetrics};
pub use gradient::{BackgroundGradient, Gradient, Rgb};
pub use nav::NavMenu;
pub use page::{Command, Page, PageEvent, ScrollBehavior};
pub use throttle::{FrameTarget, FrameThrottle};
