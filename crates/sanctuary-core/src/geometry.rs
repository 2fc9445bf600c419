//! Geometry measured from the rendered page.
//!
//! Behavior never touches the DOM directly. Every handler that needs sizes or
//! positions reads them through the [`Layout`] trait, which the desktop app
//! implements with a [`LayoutSnapshot`] measured in the webview and tests
//! implement with hand-built snapshots.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Viewport-relative bounding rectangle (CSS pixels).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Horizontal midpoint.
    pub fn mid_x(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// Vertical scroll state of the window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowMetrics {
    /// Current vertical scroll offset
    pub scroll_y: f64,
    /// Full document height (`documentElement.scrollHeight`)
    pub document_height: f64,
    /// Viewport height (`innerHeight`)
    pub viewport_height: f64,
}

impl WindowMetrics {
    /// Total distance the window can scroll. Non-positive on short pages.
    pub fn scrollable_height(&self) -> f64 {
        self.document_height - self.viewport_height
    }
}

/// Read access to current page geometry.
pub trait Layout {
    /// Window scroll metrics.
    fn window(&self) -> WindowMetrics;

    /// Height of the fixed navigation header.
    fn nav_height(&self) -> f64;

    /// Viewport-relative top of the element with the given id, if it exists.
    fn element_top(&self, id: &str) -> Option<f64>;

    /// Bounding rectangle of the carousel scroll container, if it exists.
    fn carousel(&self) -> Option<Rect>;

    /// Bounding rectangle of the card at `index` in document order.
    fn card(&self, index: usize) -> Option<Rect>;

    /// Number of cards currently rendered in the container.
    fn card_count(&self) -> usize;

    /// Natural content height of a devotion panel body.
    fn panel_content_height(&self, id: &str) -> Option<f64>;
}

/// A full measurement of the page taken at one instant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSnapshot {
    pub window: WindowMetrics,
    pub nav_height: f64,
    /// Viewport-relative tops of anchor targets, keyed by element id
    pub anchors: HashMap<String, f64>,
    pub container: Option<Rect>,
    /// Card rectangles in document order
    pub cards: Vec<Rect>,
    /// Devotion body `scrollHeight`, keyed by devotion id
    pub panel_heights: HashMap<String, f64>,
}

impl Layout for LayoutSnapshot {
    fn window(&self) -> WindowMetrics {
        self.window
    }

    fn nav_height(&self) -> f64 {
        self.nav_height
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        self.anchors.get(id).copied()
    }

    fn carousel(&self) -> Option<Rect> {
        self.container
    }

    fn card(&self, index: usize) -> Option<Rect> {
        self.cards.get(index).copied()
    }

    fn card_count(&self) -> usize {
        self.cards.len()
    }

    fn panel_content_height(&self, id: &str) -> Option<f64> {
        self.panel_heights.get(id).copied()
    }
}
