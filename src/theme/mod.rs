//! Visual theme for Sanctuary.

mod styles;

pub use styles::GLOBAL_STYLES;
