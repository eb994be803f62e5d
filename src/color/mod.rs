mod hex;
mod wheel;

pub use hex::{ColorDecodeError, parse_hex_color};
use smart_leds::RGB8;
pub use wheel::wheel;

pub type Rgb = RGB8;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const YELLOW: Rgb = Rgb { r: 255, g: 150, b: 0 };
pub const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
pub const CYAN: Rgb = Rgb { r: 0, g: 255, b: 255 };
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
pub const PURPLE: Rgb = Rgb { r: 180, g: 0, b: 255 };
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Named palette, black first
pub const PALETTE: [Rgb; 8] = [BLACK, RED, YELLOW, GREEN, CYAN, BLUE, PURPLE, WHITE];
