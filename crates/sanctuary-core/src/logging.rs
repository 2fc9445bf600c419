//! Console logging setup.
//!
//! `RUST_LOG` wins when set; otherwise the verbosity count picks the level
//! for the Sanctuary crates while everything else stays at `warn`.
//!
//! ```bash
//! # Trace every frame recompute
//! RUST_LOG=sanctuary_core=trace sanctuary
//! ```

use tracing_subscriber::EnvFilter;

/// Crates whose level follows the verbosity flag.
const OWN_CRATES: [&str; 3] = ["sanctuary", "sanctuary_core", "sanctuary_ui"];

/// Filter directive for a `-v` count.
pub fn filter_for_verbosity(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let mut directive = String::from("warn");
    for krate in OWN_CRATES {
        directive.push_str(&format!(",{krate}={level}"));
    }
    directive
}

/// Install the global fmt subscriber.
///
/// Returns `false` when a subscriber was already installed (tests, embedding).
pub fn init_logging(verbosity: u8) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for_verbosity(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
