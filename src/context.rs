use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

use crate::FrameSerializer;
use crate::color::Rgb;
use crate::pixel_buffer::PixelBuffer;

/// Everything an animation needs to draw on the strip
///
/// Bundles the pixel buffer with the output brightness, the frame
/// serializer and a blocking delay provider.
pub struct StripContext<'a, S, D, const N: usize> {
    buffer: &'a mut PixelBuffer<N>,
    serializer: &'a mut S,
    delay: &'a mut D,
    brightness: f32,
}

impl<'a, S, D, const N: usize> StripContext<'a, S, D, N>
where
    S: FrameSerializer,
    D: DelayNs,
{
    pub fn new(
        buffer: &'a mut PixelBuffer<N>,
        brightness: f32,
        serializer: &'a mut S,
        delay: &'a mut D,
    ) -> Self {
        Self {
            buffer,
            serializer,
            delay,
            brightness,
        }
    }

    /// Number of LEDs in the strip
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub const fn brightness(&self) -> f32 {
        self.brightness
    }

    pub fn set(&mut self, index: usize, color: Rgb) {
        self.buffer.set(index, color);
    }

    pub fn fill(&mut self, color: Rgb) {
        self.buffer.fill(color);
    }

    /// Transmit the current buffer at the context brightness
    pub fn show(&mut self) {
        self.buffer.show(self.brightness, &mut *self.serializer);
    }

    /// Block for `duration`
    pub fn pause(&mut self, duration: Duration) {
        pause(&mut *self.delay, duration);
    }
}

/// Block on `delay` for `duration`, saturating at `u32::MAX` microseconds
pub(crate) fn pause<D: DelayNs>(delay: &mut D, duration: Duration) {
    let micros = u32::try_from(duration.as_micros()).unwrap_or(u32::MAX);
    delay.delay_us(micros);
}
