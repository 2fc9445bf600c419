//! Scroll-driven background gradient.
//!
//! ```text
//!   scroll 0%  ──────────────▶ 100%
//!   top:    dark ──▶ warm top    (74, 46, 29)
//!   bottom: dark ──▶ warm bottom (149, 122, 105)
//! ```
//!
//! Progress is square-rooted so early scrolling warms the page faster.

use std::fmt;

use crate::geometry::WindowMetrics;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Per-channel linear interpolation, rounded to the nearest integer.
    pub fn lerp(self, to: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            let v = a as f64 + (b as f64 - a as f64) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(mix(self.r, to.r), mix(self.g, to.g), mix(self.b, to.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Baseline at the top of the page.
pub const DARK: Rgb = Rgb::new(18, 18, 18);
/// Upper half target color.
pub const WARM_TOP: Rgb = Rgb::new(74, 46, 29);
/// Lower stop target color.
pub const WARM_BOTTOM: Rgb = Rgb::new(149, 122, 105);

/// A three-stop vertical gradient: `top` at 0% and 50%, `bottom` at 100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub top: Rgb,
    pub bottom: Rgb,
}

impl Gradient {
    /// Gradient for an interpolation parameter already in [0, 1].
    pub fn at(t: f64) -> Self {
        Self {
            top: DARK.lerp(WARM_TOP, t),
            bottom: DARK.lerp(WARM_BOTTOM, t),
        }
    }

    /// CSS `background` value.
    pub fn to_css(&self) -> String {
        format!(
            "linear-gradient(to bottom, {top} 0%, {top} 50%, {bottom} 100%)",
            top = self.top,
            bottom = self.bottom
        )
    }
}

/// Interpolation parameter for a scroll position, or `None` when the page
/// cannot scroll.
pub fn scroll_progress(metrics: &WindowMetrics, exponent: f64) -> Option<f64> {
    let scrollable = metrics.scrollable_height();
    if scrollable <= 0.0 {
        return None;
    }
    let t = (metrics.scroll_y / scrollable).clamp(0.0, 1.0);
    Some(t.powf(exponent))
}

/// Holds the background currently applied to the page.
#[derive(Debug, Clone, Default)]
pub struct BackgroundGradient {
    current: Option<Gradient>,
}

impl BackgroundGradient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute from window metrics. Leaves the current background
    /// untouched and returns `false` on an unscrollable page.
    pub fn update(&mut self, metrics: &WindowMetrics, exponent: f64) -> bool {
        match scroll_progress(metrics, exponent) {
            Some(t) => {
                let gradient = Gradient::at(t);
                tracing::trace!(t, css = %gradient.to_css(), "Background gradient updated");
                self.current = Some(gradient);
                true
            }
            None => {
                tracing::trace!(
                    scrollable = metrics.scrollable_height(),
                    "Page not scrollable, keeping background"
                );
                false
            }
        }
    }

    pub fn current(&self) -> Option<&Gradient> {
        self.current.as_ref()
    }

    /// CSS for the current background, if one has been computed.
    pub fn css(&self) -> Option<String> {
        self.current.map(|g| g.to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_y: f64, document_height: f64, viewport_height: f64) -> WindowMetrics {
        WindowMetrics {
            scroll_y,
            document_height,
            viewport_height,
        }
    }

    #[test]
    fn top_of_page_is_dark() {
        let t = scroll_progress(&metrics(0.0, 2000.0, 1000.0), 0.5).unwrap();
        assert_eq!(t, 0.0);
        assert_eq!(Gradient::at(t), Gradient { top: DARK, bottom: DARK });
    }

    #[test]
    fn halfway_matches_reference_color() {
        let t = scroll_progress(&metrics(500.0, 2000.0, 1000.0), 0.5).unwrap();
        assert!((t - 0.5f64.sqrt()).abs() < 1e-9);

        let gradient = Gradient::at(t);
        assert_eq!(gradient.top, Rgb::new(58, 38, 26));
        assert_eq!(gradient.bottom, Rgb::new(111, 92, 80));
    }

    #[test]
    fn overscroll_is_clamped() {
        let t = scroll_progress(&metrics(5000.0, 2000.0, 1000.0), 0.5).unwrap();
        assert_eq!(t, 1.0);
        assert_eq!(Gradient::at(t).top, WARM_TOP);
        assert_eq!(Gradient::at(t).bottom, WARM_BOTTOM);

        let t = scroll_progress(&metrics(-40.0, 2000.0, 1000.0), 0.5).unwrap();
        assert_eq!(t, 0.0);
    }

    #[test]
    fn unscrollable_page_keeps_background() {
        let mut bg = BackgroundGradient::new();
        assert!(bg.update(&metrics(1000.0, 2000.0, 1000.0), 0.5));
        let before = bg.css();

        assert!(!bg.update(&metrics(0.0, 800.0, 800.0), 0.5));
        assert!(!bg.update(&metrics(0.0, 600.0, 800.0), 0.5));
        assert_eq!(bg.css(), before);
    }

    #[test]
    fn css_has_three_stops() {
        let css = Gradient::at(1.0).to_css();
        assert_eq!(
            css,
            "linear-gradient(to bottom, rgb(74,46,29) 0%, rgb(74,46,29) 50%, rgb(149,122,105) 100%)"
        );
    }
}
