//! Animation-side half of the strip controller
//!
//! The animator owns the pixel buffer and is the only code that writes
//! to it. Requests run strictly one after another: a new animation starts
//! only after the previous one has returned.

use embedded_hal::delay::DelayNs;
use log::{debug, info};

use crate::FrameSerializer;
use crate::animation::AnimationMode;
use crate::config::AnimationTimings;
use crate::context::{StripContext, pause};
use crate::handoff::AnimationHandoff;
use crate::pixel_buffer::PixelBuffer;

/// Runs requested animations on a strip of N LEDs
///
/// # Usage
///
/// ```ignore
/// static HANDOFF: AnimationHandoff = AnimationHandoff::new();
///
/// // Animation core
/// let mut animator: Animator<_, _, 30> =
///     Animator::new(&HANDOFF, serializer, delay, config.timings);
/// animator.serve();
///
/// // Request core
/// let mut dispatcher = Dispatcher::new(&HANDOFF, &config);
/// dispatcher.dispatch_request_line(line);
/// ```
pub struct Animator<'a, S, D, const N: usize> {
    handoff: &'a AnimationHandoff,
    buffer: PixelBuffer<N>,
    serializer: S,
    delay: D,
    timings: AnimationTimings,
}

impl<'a, S, D, const N: usize> Animator<'a, S, D, N>
where
    S: FrameSerializer,
    D: DelayNs,
{
    pub fn new(
        handoff: &'a AnimationHandoff,
        serializer: S,
        delay: D,
        timings: AnimationTimings,
    ) -> Self {
        Self {
            handoff,
            buffer: PixelBuffer::new(),
            serializer,
            delay,
            timings,
        }
    }

    /// Run the pending request, if any
    ///
    /// Blocks until a one-shot mode has drawn its frame or a continuous
    /// mode has been cancelled. Returns the mode that ran.
    pub fn run_next(&mut self) -> Option<AnimationMode> {
        let handoff = self.handoff;
        let request = handoff.take()?;
        info!("Starting {} animation", request.mode.as_str());

        let mut ctx = StripContext::new(
            &mut self.buffer,
            request.brightness,
            &mut self.serializer,
            &mut self.delay,
        );
        request
            .mode
            .run(&mut ctx, &self.timings, handoff.cancel_token());
        handoff.finish();

        if request.mode.is_continuous() {
            info!("Stopped {} animation", request.mode.as_str());
        }
        Some(request.mode)
    }

    /// Serve requests until the handoff is closed
    pub fn serve(&mut self) {
        while !self.handoff.is_closed() {
            if self.run_next().is_none() {
                pause(&mut self.delay, self.timings.idle_poll);
            }
        }
        debug!("Animation handoff closed");
    }

    /// Current contents of the strip
    pub const fn buffer(&self) -> &PixelBuffer<N> {
        &self.buffer
    }

    pub const fn serializer(&self) -> &S {
        &self.serializer
    }

    /// Release the serializer and the delay provider
    pub fn into_parts(self) -> (S, D) {
        (self.serializer, self.delay)
    }
}
