mod tests {
    use myrtio_strip_animator::color::{BLACK, PALETTE, RED, WHITE};
    use myrtio_strip_animator::{ColorDecodeError, Rgb, parse_hex_color, wheel};

    #[test]
    fn test_wheel_band_boundaries() {
        assert_eq!(wheel(0), Rgb::new(255, 0, 0));
        assert_eq!(wheel(85), Rgb::new(0, 255, 0));
        assert_eq!(wheel(170), Rgb::new(0, 0, 255));
        assert_eq!(wheel(255), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_wheel_wraps_to_start() {
        assert_eq!(wheel(256 & 0xFF), wheel(0));
    }

    #[test]
    fn test_wheel_inside_bands() {
        assert_eq!(wheel(1), Rgb::new(252, 3, 0));
        assert_eq!(wheel(84), Rgb::new(3, 252, 0));
        assert_eq!(wheel(100), Rgb::new(0, 210, 45));
        assert_eq!(wheel(169), Rgb::new(0, 3, 252));
        assert_eq!(wheel(200), Rgb::new(90, 0, 165));
    }

    #[test]
    fn test_wheel_channels_sum_to_full() {
        for pos in 0..=255 {
            let color = wheel(pos);
            let sum = u16::from(color.r) + u16::from(color.g) + u16::from(color.b);
            assert_eq!(sum, 255, "position {pos}");
        }
    }

    #[test]
    fn test_wheel_out_of_range_is_black() {
        assert_eq!(wheel(-1), BLACK);
        assert_eq!(wheel(256), BLACK);
        assert_eq!(wheel(i32::MAX), BLACK);
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("XXXff0000", 3), Ok(RED));
        assert_eq!(parse_hex_color("%23FFFFFF", 3), Ok(WHITE));
        assert_eq!(parse_hex_color("%2300a0Bf", 3), Ok(Rgb::new(0, 160, 191)));
        assert_eq!(parse_hex_color("123456", 0), Ok(Rgb::new(0x12, 0x34, 0x56)));
    }

    #[test]
    fn test_parse_hex_color_errors() {
        assert_eq!(parse_hex_color("%2", 3), Err(ColorDecodeError::MissingPrefix));
        assert_eq!(parse_hex_color("", 3), Err(ColorDecodeError::MissingPrefix));
        assert_eq!(
            parse_hex_color("%23ff00", 3),
            Err(ColorDecodeError::InvalidLength(4))
        );
        assert_eq!(
            parse_hex_color("%23ff000000", 3),
            Err(ColorDecodeError::InvalidLength(8))
        );
        assert_eq!(
            parse_hex_color("%23ff00zz", 3),
            Err(ColorDecodeError::InvalidDigit)
        );
        assert_eq!(
            parse_hex_color("%23+f0000", 3),
            Err(ColorDecodeError::InvalidDigit)
        );
    }

    #[test]
    fn test_parse_hex_color_prefix_inside_character() {
        assert_eq!(
            parse_hex_color("é1ff0000", 1),
            Err(ColorDecodeError::MissingPrefix)
        );
    }

    #[test]
    fn test_palette_starts_with_black() {
        assert_eq!(PALETTE[0], BLACK);
        assert_eq!(PALETTE[PALETTE.len() - 1], WHITE);
    }
}
