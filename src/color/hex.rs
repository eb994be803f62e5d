use core::fmt;

use crate::color::Rgb;

/// Number of hex digits in an encoded color
const HEX_DIGITS: usize = 6;

/// Error returned when a hex color cannot be decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDecodeError {
    /// Input is shorter than the prefix (or the prefix splits a character)
    MissingPrefix,
    /// Payload after the prefix is not exactly six digits long
    InvalidLength(usize),
    /// Payload contains a non-hex character
    InvalidDigit,
}

impl fmt::Display for ColorDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPrefix => f.write_str("color is missing its prefix"),
            Self::InvalidLength(len) => {
                write!(f, "expected {HEX_DIGITS} hex digits, got {len}")
            }
            Self::InvalidDigit => f.write_str("color contains a non-hex digit"),
        }
    }
}

/// Decode an `RRGGBB` color preceded by `prefix_len` bytes
///
/// The prefix is skipped without inspection. Query strings carry the `#`
/// as `%23`, hence the usual prefix length of 3.
///
/// # Example
///
/// ```
/// use myrtio_strip_animator::{Rgb, parse_hex_color};
///
/// assert_eq!(parse_hex_color("%23ff8000", 3), Ok(Rgb::new(255, 128, 0)));
/// ```
pub fn parse_hex_color(input: &str, prefix_len: usize) -> Result<Rgb, ColorDecodeError> {
    let digits = input
        .get(prefix_len..)
        .ok_or(ColorDecodeError::MissingPrefix)?
        .as_bytes();
    if digits.len() != HEX_DIGITS {
        return Err(ColorDecodeError::InvalidLength(digits.len()));
    }

    Ok(Rgb {
        r: hex_byte(digits[0], digits[1])?,
        g: hex_byte(digits[2], digits[3])?,
        b: hex_byte(digits[4], digits[5])?,
    })
}

fn hex_byte(high: u8, low: u8) -> Result<u8, ColorDecodeError> {
    Ok((hex_nibble(high)? << 4) | hex_nibble(low)?)
}

const fn hex_nibble(digit: u8) -> Result<u8, ColorDecodeError> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        _ => Err(ColorDecodeError::InvalidDigit),
    }
}
