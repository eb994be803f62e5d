//! WS2812 one-wire protocol
//!
//! Bit timings of the PIO program that drives the reference strip, and a
//! [`FrameSerializer`] that produces the same waveform from an SPI bus.
//!
//! Each data bit takes `T1 + T2 + T3` PIO cycles. The line goes high for
//! `T1` cycles, stays high for another `T2` cycles only when the bit is
//! set, and spends the rest of the bit low.

use embedded_hal::spi::SpiBus;
use heapless::Vec;
use log::warn;

use crate::FrameSerializer;

/// PIO state machine clock
pub const PIO_FREQUENCY_HZ: u32 = 8_000_000;

/// Cycles of the leading high phase, common to both bit values
pub const T1: u32 = 2;
/// Cycles that stay high for a "1" and go low for a "0"
pub const T2: u32 = 5;
/// Cycles of the trailing low phase, common to both bit values
pub const T3: u32 = 3;

/// PIO cycles per data bit
pub const CYCLES_PER_BIT: u32 = T1 + T2 + T3;

/// Data bit rate on the wire
pub const BIT_RATE_HZ: u32 = PIO_FREQUENCY_HZ / CYCLES_PER_BIT;

/// Length of a single PIO cycle
pub const CYCLE_NS: u32 = 1_000_000_000 / PIO_FREQUENCY_HZ;

/// Bits per pixel word
pub const BITS_PER_PIXEL: u32 = 24;

/// High and low phase of a single data bit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitTiming {
    pub high_ns: u32,
    pub low_ns: u32,
}

impl BitTiming {
    /// Total length of the bit
    pub const fn period_ns(self) -> u32 {
        self.high_ns + self.low_ns
    }
}

/// Waveform of a "0" bit
pub const ZERO_BIT: BitTiming = BitTiming {
    high_ns: T1 * CYCLE_NS,
    low_ns: (T2 + T3) * CYCLE_NS,
};

/// Waveform of a "1" bit
pub const ONE_BIT: BitTiming = BitTiming {
    high_ns: (T1 + T2) * CYCLE_NS,
    low_ns: T3 * CYCLE_NS,
};

/// Align a pixel word for a left-shifting FIFO with a 24-bit autopull
///
/// The state machine shifts bits out from the top of the word, so the
/// green byte must land in bits 31..24.
#[inline]
pub const fn fifo_word(word: u32) -> u32 {
    word << (32 - BITS_PER_PIXEL)
}

/// SPI clock for [`Ws2812Spi`]; four SPI bits encode one data bit
pub const SPI_FREQUENCY_HZ: u32 = 3_200_000;

/// Encoded size of one pixel word
pub const BYTES_PER_PIXEL: usize = 12;

/// Zero bytes sent after a frame to latch it (well above 50 µs)
pub const RESET_LEN: usize = 50;

/// SPI bytes for two consecutive data bits, indexed by their value
const PATTERNS: [u8; 4] = [0b1000_1000, 0b1000_1110, 0b1110_1000, 0b1110_1110];

/// Size of an encoded frame of `leds` pixels, reset included
pub const fn encoded_len(leds: usize) -> usize {
    leds * BYTES_PER_PIXEL + RESET_LEN
}

/// Encode a GRB pixel word into SPI bytes, most significant bit first
pub const fn encode_word(word: u32) -> [u8; BYTES_PER_PIXEL] {
    let mut bytes = [0u8; BYTES_PER_PIXEL];
    let mut i = 0;
    while i < BYTES_PER_PIXEL {
        let shift = BITS_PER_PIXEL as usize - 2 * (i + 1);
        bytes[i] = PATTERNS[((word >> shift) & 0b11) as usize];
        i += 1;
    }
    bytes
}

/// Frame serializer that bit-bangs the protocol through an SPI bus
///
/// BUF is the size of the encode buffer; use [`encoded_len`] to size it
/// for the strip. Frames that do not fit are dropped.
pub struct Ws2812Spi<SPI, const BUF: usize> {
    spi: SPI,
    buffer: Vec<u8, BUF>,
}

impl<SPI, const BUF: usize> Ws2812Spi<SPI, BUF>
where
    SPI: SpiBus<u8>,
{
    /// Wrap an SPI bus running at [`SPI_FREQUENCY_HZ`]
    pub const fn new(spi: SPI) -> Self {
        Self {
            spi,
            buffer: Vec::new(),
        }
    }

    pub fn release(self) -> SPI {
        self.spi
    }

    fn encode(&mut self, frame: &[u32]) -> Result<(), ()> {
        self.buffer.clear();
        for &word in frame {
            self.buffer.extend_from_slice(&encode_word(word))?;
        }
        self.buffer.extend_from_slice(&[0u8; RESET_LEN])
    }
}

impl<SPI, const BUF: usize> FrameSerializer for Ws2812Spi<SPI, BUF>
where
    SPI: SpiBus<u8>,
{
    fn put(&mut self, frame: &[u32]) {
        if self.encode(frame).is_err() {
            warn!(
                "Dropping frame of {} pixels: needs {} bytes, buffer holds {}",
                frame.len(),
                encoded_len(frame.len()),
                BUF
            );
            return;
        }
        if let Err(err) = self
            .spi
            .write(&self.buffer)
            .and_then(|()| self.spi.flush())
        {
            warn!("Failed to write frame: {:?}", err);
        }
    }
}
