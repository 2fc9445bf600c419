//! Per-frame throttling for high-frequency scroll sources.
//!
//! The first request in a frame schedules one; every further request is
//! dropped until the scheduled frame has run.

/// Which recompute a scheduled animation frame belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameTarget {
    /// Background gradient driven by window scroll
    Window,
    /// Card visuals driven by carousel scroll
    Carousel,
}

/// Explicit pending-frame flag.
#[derive(Debug, Default, Clone)]
pub struct FrameThrottle {
    pending: bool,
    dropped: u64,
}

impl FrameThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for a frame. Returns `true` only when the caller must schedule one.
    pub fn request(&mut self) -> bool {
        if self.pending {
            self.dropped += 1;
            return false;
        }
        self.pending = true;
        true
    }

    /// Mark the scheduled frame as run. Returns `false` for a stray frame
    /// that was never requested.
    pub fn complete(&mut self) -> bool {
        std::mem::replace(&mut self.pending, false)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Requests coalesced into an already pending frame since creation.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}
