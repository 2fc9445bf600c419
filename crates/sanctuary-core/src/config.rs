//! Tunable constants for page behavior.
//!
//! Defaults reproduce the live site. A content file may override any subset
//! under its `"tuning"` key.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Numeric knobs for the carousel, gradient, and devotion behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Fraction of container width at which a card counts as fully off-center
    pub max_distance_ratio: f64,
    /// Scale lost by a card at full distance
    pub max_shrink: f64,
    /// Opacity lost by a card at full distance
    pub max_fade: f64,
    /// `translateZ` of a centered card, in px
    pub depth_near: f64,
    /// `translateZ` range across full distance, in px
    pub depth_span: f64,
    /// Tilt of an unflipped card at full distance, in degrees
    pub max_tilt_deg: f64,
    pub showcase_z_index: i32,
    pub card_z_index: i32,
    /// Fraction of visible width scrolled by the carousel arrow buttons
    pub nav_step_ratio: f64,
    /// Exponent applied to normalized scroll progress
    pub gradient_exponent: f64,
    /// Delay before an opened devotion is scrolled into view
    pub scroll_into_view_delay_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            max_distance_ratio: 0.7,
            max_shrink: 0.45,
            max_fade: 0.5,
            depth_near: 100.0,
            depth_span: 200.0,
            max_tilt_deg: 20.0,
            showcase_z_index: 10,
            card_z_index: 1,
            nav_step_ratio: 0.5,
            gradient_exponent: 0.5,
            scroll_into_view_delay_ms: 100,
        }
    }
}

impl Tuning {
    pub fn scroll_into_view_delay(&self) -> Duration {
        Duration::from_millis(self.scroll_into_view_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{ "max_tilt_deg": 35.0 }"#).unwrap();
        assert_eq!(tuning.max_tilt_deg, 35.0);
        assert_eq!(tuning.max_shrink, 0.45);
        assert_eq!(tuning.scroll_into_view_delay(), Duration::from_millis(100));
    }
}
