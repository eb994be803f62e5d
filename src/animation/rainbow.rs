//! Rotating rainbow
//!
//! Spreads the whole color wheel across the strip once and rotates it by
//! one wheel step per frame.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

use crate::FrameSerializer;
use crate::cancel::CancelToken;
use crate::color::wheel;
use crate::context::StripContext;

/// Hue offsets in one pass of the rainbow (offsets `0..=254`)
pub const HUE_OFFSETS: usize = 255;

/// Run the rainbow until `cancel` is cancelled
///
/// The token is checked before every frame, so at most one frame is
/// drawn and shown after cancellation is requested.
pub fn rainbow_cycle<S, D, const N: usize>(
    ctx: &mut StripContext<'_, S, D, N>,
    frame_delay: Duration,
    cancel: &CancelToken,
) where
    S: FrameSerializer,
    D: DelayNs,
{
    while cancel.is_active() {
        for offset in 0..HUE_OFFSETS {
            if !cancel.is_active() {
                return;
            }
            for index in 0..N {
                ctx.set(index, wheel(wheel_position(index, N, offset)));
            }
            ctx.show();
            ctx.pause(frame_delay);
        }
    }
}

/// Wheel position of LED `index` at hue `offset`
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn wheel_position(index: usize, len: usize, offset: usize) -> i32 {
    ((index * 256 / len + offset) & 0xFF) as i32
}
