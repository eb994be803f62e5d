//! Command decoding
//!
//! Turns the `mode`/`color`/`brightness` strings of a request into an
//! [`AnimationMode`] and an output brightness.

use core::fmt;

use crate::animation::{
    AnimationMode, MODE_NAME_DEFAULT, MODE_NAME_OFF, MODE_NAME_RGB, MODE_NAME_WAVE,
};
use crate::color::{ColorDecodeError, parse_hex_color};

const PARAM_MODE: &str = "mode";
const PARAM_COLOR: &str = "color";
const PARAM_BRIGHTNESS: &str = "brightness";

/// Error returned when a command cannot be decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Mode name is not known
    UnknownMode,
    /// Mode needs a color and the color is malformed
    Color(ColorDecodeError),
    /// Brightness is not a number
    Brightness,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMode => f.write_str("unknown mode"),
            Self::Color(err) => write!(f, "invalid color: {err}"),
            Self::Brightness => f.write_str("invalid brightness"),
        }
    }
}

impl From<ColorDecodeError> for CommandError {
    fn from(err: ColorDecodeError) -> Self {
        Self::Color(err)
    }
}

/// Raw command parameters as received from the network
///
/// Missing parameters are empty strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandParams<'a> {
    pub mode: &'a str,
    pub color: &'a str,
    pub brightness: &'a str,
}

impl<'a> CommandParams<'a> {
    pub const fn new(mode: &'a str, color: &'a str, brightness: &'a str) -> Self {
        Self {
            mode,
            color,
            brightness,
        }
    }

    /// Extract the parameters from the query of an HTTP request line
    ///
    /// ```
    /// use myrtio_strip_animator::CommandParams;
    ///
    /// let params =
    ///     CommandParams::from_request_line("GET /?mode=wave&brightness=0.3 HTTP/1.1");
    /// assert_eq!(params, CommandParams::new("wave", "", "0.3"));
    /// ```
    pub fn from_request_line(line: &'a str) -> Self {
        let mut params = Self::default();
        let Some((_, rest)) = line.split_once('?') else {
            return params;
        };
        let query = rest.split([' ', '\r', '\n']).next().unwrap_or_default();

        for pair in query.split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key {
                PARAM_MODE => params.mode = value,
                PARAM_COLOR => params.color = value,
                PARAM_BRIGHTNESS => params.brightness = value,
                _ => {}
            }
        }
        params
    }

    /// Decode the animation mode
    ///
    /// The color is only decoded for modes that use it, so a malformed
    /// color does not prevent switching to `wave` or `off`.
    pub fn mode(&self, color_prefix_len: usize) -> Result<AnimationMode, CommandError> {
        let color = || parse_hex_color(self.color, color_prefix_len);
        match self.mode {
            MODE_NAME_OFF => Ok(AnimationMode::Off),
            MODE_NAME_DEFAULT => Ok(AnimationMode::Fill(color()?)),
            MODE_NAME_WAVE => Ok(AnimationMode::RainbowCycle),
            MODE_NAME_RGB => Ok(AnimationMode::ColorChase(color()?)),
            _ => Err(CommandError::UnknownMode),
        }
    }

    /// Decode the brightness
    pub fn brightness(&self) -> Result<f32, CommandError> {
        parse_brightness(self.brightness)
    }
}

/// Parse a brightness value
///
/// The value is not clamped to `0.0..=1.0`.
pub fn parse_brightness(input: &str) -> Result<f32, CommandError> {
    input.trim().parse().map_err(|_| CommandError::Brightness)
}
