//! Strip animations
//!
//! Animations draw through a [`StripContext`] and block in its delay
//! provider between frames. Long-running animations poll a
//! [`CancelToken`] and return once it is cancelled; one-shot animations
//! draw a single frame and return immediately.

mod chase;
mod rainbow;

pub use chase::color_chase;
use embedded_hal::delay::DelayNs;
pub use rainbow::{HUE_OFFSETS, rainbow_cycle};

use crate::FrameSerializer;
use crate::cancel::CancelToken;
use crate::color::{BLACK, Rgb};
use crate::config::AnimationTimings;
use crate::context::StripContext;

pub(crate) const MODE_NAME_OFF: &str = "off";
pub(crate) const MODE_NAME_DEFAULT: &str = "default";
pub(crate) const MODE_NAME_WAVE: &str = "wave";
pub(crate) const MODE_NAME_RGB: &str = "rgb";

/// Animation the strip should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationMode {
    /// All pixels off
    Off,
    /// Solid color
    Fill(Rgb),
    /// Rotating color wheel
    RainbowCycle,
    /// Pixel-by-pixel reveal and clear of a color
    ColorChase(Rgb),
}

impl AnimationMode {
    /// Name of the mode in commands
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => MODE_NAME_OFF,
            Self::Fill(_) => MODE_NAME_DEFAULT,
            Self::RainbowCycle => MODE_NAME_WAVE,
            Self::ColorChase(_) => MODE_NAME_RGB,
        }
    }

    /// Check if the mode keeps running until cancelled
    pub const fn is_continuous(self) -> bool {
        matches!(self, Self::RainbowCycle | Self::ColorChase(_))
    }

    /// Run the animation on the strip
    ///
    /// Returns once a one-shot mode has drawn its frame or a continuous
    /// mode has observed the cancelled `cancel` token.
    pub fn run<S, D, const N: usize>(
        self,
        ctx: &mut StripContext<'_, S, D, N>,
        timings: &AnimationTimings,
        cancel: &CancelToken,
    ) where
        S: FrameSerializer,
        D: DelayNs,
    {
        match self {
            Self::Off => fill(ctx, BLACK),
            Self::Fill(color) => fill(ctx, color),
            Self::RainbowCycle => rainbow_cycle(ctx, timings.frame_delay, cancel),
            Self::ColorChase(color) => color_chase(ctx, color, timings.pixel_delay, cancel),
        }
    }
}

/// Paint the whole strip with `color` and show it once
pub fn fill<S, D, const N: usize>(ctx: &mut StripContext<'_, S, D, N>, color: Rgb)
where
    S: FrameSerializer,
    D: DelayNs,
{
    ctx.fill(color);
    ctx.show();
}
