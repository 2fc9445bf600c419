//! Navigation menu and in-page smooth scrolling.

use crate::geometry::Layout;

/// Collapsible navigation link list.
///
/// The toggle control flips it; a click anywhere outside the nav region
/// closes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        tracing::debug!(open = self.open, "Nav menu toggled");
    }

    /// Close unconditionally. Idempotent.
    pub fn close(&mut self) {
        if self.open {
            tracing::debug!("Nav menu closed");
        }
        self.open = false;
    }
}

/// Where a clicked navigation link should take the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnchorTarget {
    /// Not an in-page link; leave it to normal navigation
    External,
    /// In-page link whose target element is missing
    Missing,
    /// Scroll the window to this offset
    ScrollTo(f64),
}

/// Resolve an `href` against the current layout.
///
/// The destination keeps the target's top edge just below the fixed header:
/// current scroll offset plus the target's viewport-relative top, minus the
/// header height.
pub fn resolve_anchor(href: &str, layout: &impl Layout) -> AnchorTarget {
    let Some(id) = href.strip_prefix('#') else {
        return AnchorTarget::External;
    };

    match layout.element_top(id) {
        Some(top) => {
            let destination = layout.window().scroll_y + top - layout.nav_height();
            AnchorTarget::ScrollTo(destination)
        }
        None => {
            tracing::debug!(id, "Anchor target not found");
            AnchorTarget::Missing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{LayoutSnapshot, WindowMetrics};

    fn layout() -> LayoutSnapshot {
        let mut layout = LayoutSnapshot {
            window: WindowMetrics {
                scroll_y: 300.0,
                document_height: 4000.0,
                viewport_height: 900.0,
            },
            nav_height: 72.0,
            ..Default::default()
        };
        layout.anchors.insert("music".to_string(), 450.0);
        layout.anchors.insert("top".to_string(), -300.0);
        layout
    }

    #[test]
    fn toggle_flips_and_close_is_idempotent() {
        let mut menu = NavMenu::new();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn anchor_accounts_for_header() {
        assert_eq!(
            resolve_anchor("#music", &layout()),
            AnchorTarget::ScrollTo(300.0 + 450.0 - 72.0)
        );
        assert_eq!(
            resolve_anchor("#top", &layout()),
            AnchorTarget::ScrollTo(-72.0)
        );
    }

    #[test]
    fn non_hash_links_are_external() {
        assert_eq!(
            resolve_anchor("https://example.com/#music", &layout()),
            AnchorTarget::External
        );
        assert_eq!(resolve_anchor("music", &layout()), AnchorTarget::External);
    }

    #[test]
    fn missing_target_is_ignored() {
        assert_eq!(resolve_anchor("#tour", &layout()), AnchorTarget::Missing);
    }
}
