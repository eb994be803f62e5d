//! Color wheel
//!
//! Maps a position on a 256-step circle to a fully saturated color.
//! The hue transitions red → green → blue → back to red over three
//! bands of 85 steps each.

use crate::color::{BLACK, Rgb};

/// Width of a single band of the wheel
const BAND: i32 = 85;

/// Get the wheel color at `pos`
///
/// The caller is expected to wrap `pos` into `0..=255` (e.g. `pos & 0xFF`).
/// Positions outside that range yield black.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn wheel(pos: i32) -> Rgb {
    if pos < 0 || pos > 255 {
        return BLACK;
    }
    if pos < BAND {
        return Rgb {
            r: (255 - pos * 3) as u8,
            g: (pos * 3) as u8,
            b: 0,
        };
    }
    if pos < BAND * 2 {
        let pos = pos - BAND;
        return Rgb {
            r: 0,
            g: (255 - pos * 3) as u8,
            b: (pos * 3) as u8,
        };
    }
    let pos = pos - BAND * 2;
    Rgb {
        r: (pos * 3) as u8,
        g: 0,
        b: (255 - pos * 3) as u8,
    }
}
