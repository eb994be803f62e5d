//! Request handoff between the dispatcher and the animator
//!
//! A single-slot mailbox built on `critical-section`. The newest request
//! replaces any request that has not been picked up yet. Submitting a
//! request cancels the running animation, and taking one arms the
//! [`CancelToken`]; both happen inside the same critical section as the
//! slot update, so a cancel can never be lost between the two sides.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::animation::AnimationMode;
use crate::cancel::CancelToken;

/// Request to switch the strip to a new animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripRequest {
    pub mode: AnimationMode,
    pub brightness: f32,
}

#[derive(Debug)]
struct HandoffState {
    pending: Option<StripRequest>,
    running: bool,
    closed: bool,
}

/// Mailbox shared by the request domain and the animation domain
///
/// Meant to be placed in a `static` and shared by reference.
pub struct AnimationHandoff {
    state: Mutex<RefCell<HandoffState>>,
    cancel: CancelToken,
}

impl AnimationHandoff {
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(RefCell::new(HandoffState {
                pending: None,
                running: false,
                closed: false,
            })),
            cancel: CancelToken::new(),
        }
    }

    /// Token observed by the running animation
    pub const fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// Queue a request and stop the running animation
    ///
    /// Returns the request it replaced, if the previous one had not been
    /// picked up yet.
    pub fn submit(&self, request: StripRequest) -> Option<StripRequest> {
        critical_section::with(|cs| {
            let mut state = self.state.borrow(cs).borrow_mut();
            self.cancel.cancel();
            state.pending.replace(request)
        })
    }

    /// Take the pending request and arm the cancel token for it
    ///
    /// Returns `None` if nothing is pending or the handoff is closed.
    pub fn take(&self) -> Option<StripRequest> {
        critical_section::with(|cs| {
            let mut state = self.state.borrow(cs).borrow_mut();
            if state.closed {
                return None;
            }
            let request = state.pending.take()?;
            state.running = true;
            self.cancel.arm();
            Some(request)
        })
    }

    /// Mark the taken request as finished
    pub fn finish(&self) {
        critical_section::with(|cs| {
            self.state.borrow(cs).borrow_mut().running = false;
        });
    }

    /// Check if no request is pending or running
    ///
    /// Once idle, the strip holds the last frame of the last animation and
    /// nothing else writes to it.
    pub fn is_idle(&self) -> bool {
        critical_section::with(|cs| {
            let state = self.state.borrow(cs).borrow();
            !state.running && state.pending.is_none()
        })
    }

    /// Check if an animation is currently running
    pub fn is_running(&self) -> bool {
        critical_section::with(|cs| self.state.borrow(cs).borrow().running)
    }

    /// Stop the running animation and shut the animator down
    pub fn close(&self) {
        critical_section::with(|cs| {
            let mut state = self.state.borrow(cs).borrow_mut();
            state.closed = true;
            state.pending = None;
            self.cancel.cancel();
        });
    }

    pub fn is_closed(&self) -> bool {
        critical_section::with(|cs| self.state.borrow(cs).borrow().closed)
    }
}

impl Default for AnimationHandoff {
    fn default() -> Self {
        Self::new()
    }
}
