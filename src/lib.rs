#![no_std]

pub mod animation;
pub mod animator;
pub mod cancel;
pub mod color;
pub mod command;
pub mod config;
pub mod context;
pub mod dispatcher;
pub mod handoff;
pub mod pixel_buffer;
pub mod ws2812;

pub use animation::{AnimationMode, color_chase, fill, rainbow_cycle};
pub use animator::Animator;
pub use cancel::CancelToken;
pub use color::{ColorDecodeError, Rgb, parse_hex_color, wheel};
pub use command::{CommandError, CommandParams, parse_brightness};
pub use config::{AnimationTimings, StripConfig};
pub use context::StripContext;
pub use dispatcher::Dispatcher;
pub use handoff::{AnimationHandoff, StripRequest};
pub use pixel_buffer::{PixelBuffer, pack, unpack};
pub use embassy_time::Duration;

/// Hardware boundary for packed frames
///
/// Implement this trait to hand frames to the one-wire LED peripheral.
/// Every word holds one LED in GRB order (see [`pack`]). Implementations
/// should not block longer than it takes to queue the frame.
pub trait FrameSerializer {
    /// Queue one frame of packed pixel words
    fn put(&mut self, frame: &[u32]);
}

impl<T: FrameSerializer + ?Sized> FrameSerializer for &mut T {
    fn put(&mut self, frame: &[u32]) {
        (**self).put(frame);
    }
}
