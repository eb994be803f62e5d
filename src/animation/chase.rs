//! Color chase
//!
//! Lights the strip one pixel at a time, then clears it one pixel at a
//! time. The token is only checked between full reveal+clear passes, so a
//! cancelled chase always leaves the strip dark.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

use crate::FrameSerializer;
use crate::cancel::CancelToken;
use crate::color::{BLACK, Rgb};
use crate::context::StripContext;

/// Run the chase until `cancel` is cancelled
pub fn color_chase<S, D, const N: usize>(
    ctx: &mut StripContext<'_, S, D, N>,
    color: Rgb,
    pixel_delay: Duration,
    cancel: &CancelToken,
) where
    S: FrameSerializer,
    D: DelayNs,
{
    while cancel.is_active() {
        sweep(ctx, color, pixel_delay);
        sweep(ctx, BLACK, pixel_delay);
    }
}

/// Paint the strip with `color` one pixel per frame
fn sweep<S, D, const N: usize>(
    ctx: &mut StripContext<'_, S, D, N>,
    color: Rgb,
    pixel_delay: Duration,
) where
    S: FrameSerializer,
    D: DelayNs,
{
    for index in 0..N {
        ctx.set(index, color);
        ctx.show();
        ctx.pause(pixel_delay);
    }
}
