//! Packed pixel storage
//!
//! Pixels are kept in the word layout the strip expects on the wire:
//! green in bits 23..16, red in bits 15..8 and blue in bits 7..0.

use crate::FrameSerializer;
use crate::color::Rgb;

/// Pack a color into a GRB word
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn pack(color: Rgb) -> u32 {
    ((color.g as u32) << 16) | ((color.r as u32) << 8) | color.b as u32
}

/// Unpack a GRB word into a color
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn unpack(word: u32) -> Rgb {
    Rgb {
        r: ((word >> 8) & 0xFF) as u8,
        g: ((word >> 16) & 0xFF) as u8,
        b: (word & 0xFF) as u8,
    }
}

/// Scale a channel by `brightness`, truncating toward zero
///
/// The cast saturates, so brightness above 1.0 clips at 255 and negative
/// or NaN brightness yields 0.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scale_channel(value: u8, brightness: f32) -> u8 {
    libm::floorf(f32::from(value) * brightness) as u8
}

/// Scale all channels of a color by `brightness`
#[inline]
pub fn scale_color(color: Rgb, brightness: f32) -> Rgb {
    Rgb {
        r: scale_channel(color.r, brightness),
        g: scale_channel(color.g, brightness),
        b: scale_channel(color.b, brightness),
    }
}

/// Fixed-length buffer of packed pixels
///
/// N is the number of LEDs in the strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer<const N: usize> {
    words: [u32; N],
}

impl<const N: usize> PixelBuffer<N> {
    /// Create a buffer with every pixel off
    pub const fn new() -> Self {
        Self { words: [0; N] }
    }

    /// Number of pixels in the buffer
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Set a single pixel
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below `N`.
    pub fn set(&mut self, index: usize, color: Rgb) {
        assert!(
            index < N,
            "pixel index {index} is out of range for a strip of {N} LEDs"
        );
        self.words[index] = pack(color);
    }

    /// Set every pixel to `color`
    pub fn fill(&mut self, color: Rgb) {
        for index in 0..N {
            self.set(index, color);
        }
    }

    /// Read a pixel back
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below `N`.
    pub fn get(&self, index: usize) -> Rgb {
        unpack(self.words[index])
    }

    /// Raw packed words
    pub const fn words(&self) -> &[u32; N] {
        &self.words
    }

    /// Send the buffer to the serializer, dimmed by `brightness`
    ///
    /// The stored pixels are not modified.
    pub fn show<S: FrameSerializer + ?Sized>(&self, brightness: f32, serializer: &mut S) {
        let mut frame = [0u32; N];
        for (dimmed, &word) in frame.iter_mut().zip(self.words.iter()) {
            *dimmed = pack(scale_color(unpack(word), brightness));
        }
        serializer.put(&frame);
    }
}

impl<const N: usize> Default for PixelBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
