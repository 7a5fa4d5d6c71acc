//! Header color parsing and per-icon defaults.

use crate::builder::Icon;
use crate::error::Error;

/// Red, green, blue and alpha channels, each normalized to [0, 1].
pub(crate) type Rgba = [f64; 4];

/// Parses a `#RRGGBB` or `#RRGGBBAA` string into normalized channels.
///
/// The leading `#` is optional. A 6-digit string is RGB with an implicit
/// full-opacity alpha. Any other length, or any non-hex digit, is a fatal
/// configuration error: a malformed color is a programming mistake by the
/// caller, not a runtime condition to paper over.
pub(crate) fn parse_hex(color: &str) -> Result<Rgba, Error> {
    let digits = color.strip_prefix('#').unwrap_or(color);
    if digits.len() != 6 && digits.len() != 8 {
        return Err(Error::InvalidColorLength {
            color: color.to_string(),
        });
    }

    // from_str_radix tolerates a leading '+', so check digits explicitly
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidColorDigit {
            color: color.to_string(),
        });
    }

    let mut rgba: Rgba = [0.0, 0.0, 0.0, 1.0];
    for (i, pair) in digits.as_bytes().chunks(2).enumerate() {
        // chunks(2) over 6 or 8 ASCII hex digits always yields full pairs
        let pair = std::str::from_utf8(pair).map_err(|_| Error::InvalidColorDigit {
            color: color.to_string(),
        })?;
        let byte = u8::from_str_radix(pair, 16).map_err(|_| Error::InvalidColorDigit {
            color: color.to_string(),
        })?;
        rgba[i] = f64::from(byte) / 255.0;
    }
    Ok(rgba)
}

/// The header background color implied by an icon kind when the caller did
/// not pick one explicitly.
pub(crate) fn default_color(icon: Icon) -> Rgba {
    match icon {
        Icon::None | Icon::Info | Icon::Custom => [1.0, 1.0, 1.0, 1.0],
        Icon::Warning => [0.941, 0.729, 0.192, 1.0],
        Icon::Question => [0.118, 0.69, 0.157, 1.0],
        Icon::Error => [0.941, 0.259, 0.192, 1.0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_hex(rgba: Rgba) -> String {
        rgba.iter()
            .map(|c| format!("{:02X}", (c * 255.0).round() as u8))
            .collect()
    }

    #[test]
    fn parses_eight_digit_rgba() {
        let rgba = parse_hex("#6879D0FF").unwrap();
        assert_eq!(
            rgba,
            [
                f64::from(0x68) / 255.0,
                f64::from(0x79) / 255.0,
                f64::from(0xD0) / 255.0,
                1.0
            ]
        );
    }

    #[test]
    fn six_digit_rgb_gets_full_opacity() {
        let rgba = parse_hex("112233").unwrap();
        assert_eq!(rgba[3], 1.0);
        assert_eq!(rgba[0], f64::from(0x11) / 255.0);
        assert_eq!(rgba[2], f64::from(0x33) / 255.0);
    }

    #[test]
    fn hash_prefix_is_optional() {
        assert_eq!(parse_hex("#A0B0C0").unwrap(), parse_hex("A0B0C0").unwrap());
    }

    #[test]
    fn valid_colors_round_trip_within_rounding() {
        for color in ["6879D0FF", "000000", "FFFFFF", "0A141EFF", "F0BA31"] {
            let rgba = parse_hex(color).unwrap();
            for c in rgba {
                assert!((0.0..=1.0).contains(&c));
            }
            let expected = if color.len() == 6 {
                format!("{color}FF")
            } else {
                color.to_string()
            };
            assert_eq!(to_hex(rgba), expected);
        }
    }

    #[test]
    fn rejects_wrong_lengths() {
        for color in ["", "#", "#FFF", "12345", "1234567", "#123456789"] {
            assert!(matches!(
                parse_hex(color),
                Err(Error::InvalidColorLength { .. })
            ));
        }
    }

    #[test]
    fn rejects_non_hex_digits() {
        for color in ["#GGGGGG", "12345Z", "#6879D0FG", "héx£12"] {
            assert!(matches!(
                parse_hex(color),
                Err(Error::InvalidColorDigit { .. }) | Err(Error::InvalidColorLength { .. })
            ));
        }
    }

    #[test]
    fn default_colors_follow_icon_kind() {
        assert_eq!(default_color(Icon::None), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(default_color(Icon::Info), default_color(Icon::Custom));
        assert_eq!(default_color(Icon::Warning), [0.941, 0.729, 0.192, 1.0]);
        assert_eq!(default_color(Icon::Question), [0.118, 0.69, 0.157, 1.0]);
        assert_eq!(default_color(Icon::Error), [0.941, 0.259, 0.192, 1.0]);
    }
}
