//! Default strip configuration

use embassy_time::Duration;

/// Number of LEDs on the reference strip
pub const LED_COUNT: usize = 30;

/// Output brightness used until a command sets another one
pub const DEFAULT_BRIGHTNESS: f32 = 0.5;

/// Bytes in front of the hex digits of an encoded color (`%23`)
pub const COLOR_PREFIX_LEN: usize = 3;

pub const DEFAULT_TIMINGS: AnimationTimings = AnimationTimings {
    frame_delay: Duration::from_millis(10),
    pixel_delay: Duration::from_millis(30),
    idle_poll: Duration::from_millis(20),
};

/// Delays used by the animations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTimings {
    /// Pause after every rainbow frame
    pub frame_delay: Duration,
    /// Pause after every pixel of a color chase
    pub pixel_delay: Duration,
    /// How often an idle animator checks for new requests
    pub idle_poll: Duration,
}

impl Default for AnimationTimings {
    fn default() -> Self {
        DEFAULT_TIMINGS
    }
}

/// Configuration shared by the dispatcher and the animator
#[derive(Debug, Clone, Copy)]
pub struct StripConfig {
    pub brightness: f32,
    pub color_prefix_len: usize,
    pub timings: AnimationTimings,
}

impl StripConfig {
    pub const fn new() -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            color_prefix_len: COLOR_PREFIX_LEN,
            timings: DEFAULT_TIMINGS,
        }
    }
}

impl Default for StripConfig {
    fn default() -> Self {
        Self::new()
    }
}
