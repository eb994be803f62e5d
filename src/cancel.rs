//! Cooperative cancellation
//!
//! Running animations poll the token at fixed checkpoints and return once
//! it has been cancelled. Only plain loads and stores are used, so the token
//! also works on cores without compare-and-swap.

use core::sync::atomic::{AtomicBool, Ordering};

/// Shared run/stop flag for a single animation
#[derive(Debug)]
pub struct CancelToken {
    active: AtomicBool,
}

impl CancelToken {
    /// Create a cancelled token
    pub const fn new() -> Self {
        Self {
            active: AtomicBool::new(false),
        }
    }

    /// Allow an animation to run
    pub fn arm(&self) {
        self.active.store(true, Ordering::Release);
    }

    /// Ask the running animation to stop
    pub fn cancel(&self) {
        self.active.store(false, Ordering::Release);
    }

    /// Check if the animation may keep running
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}
