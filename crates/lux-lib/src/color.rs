//! Color parsing, formatting and gradient math for G213 lighting.
//!
//! `g213-led` takes colors as six lowercase hex digits with no `#` prefix,
//! which is exactly what [`Rgb`]'s `Display` produces.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Serialize, Serializer};

use crate::error::{LuxError, Result};

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value. Bits above 24 are ignored.
    pub const fn from_u32(val: u32) -> Self {
        Rgb {
            r: (val >> 16) as u8,
            g: (val >> 8) as u8,
            b: val as u8,
        }
    }

    /// Parse exactly six hex digits (no `#`, no whitespace).
    pub fn from_hex(s: &str) -> Result<Self> {
        if !is_valid_hex(s) {
            return Err(LuxError::Color(format!(
                "Invalid RGB code '{s}' (expected 6-character hex code, e.g. ff0000)"
            )));
        }
        // Validated above, so every pair parses.
        let channel = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).unwrap_or_default();
        Ok(Rgb::new(channel(0), channel(2), channel(4)))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = LuxError;

    fn from_str(s: &str) -> Result<Self> {
        Rgb::from_hex(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// True when `s` is exactly six ASCII hex digits.
pub fn is_valid_hex(s: &str) -> bool {
    s.len() == 6 && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Draw each channel uniformly and independently from 0..=255.
pub fn random_color(rng: &mut impl Rng) -> Rgb {
    Rgb::new(
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
    )
}

/// Linear gradient of `count` colors from `left` to `right`, inclusive.
///
/// Channel `i` is `left + (right - left) * i / (count - 1)` truncated toward
/// zero. The numerator is rearranged to stay non-negative, so integer
/// division truncates the same way.
pub fn interpolate(left: Rgb, right: Rgb, count: usize) -> Vec<Rgb> {
    if count <= 1 {
        return std::iter::repeat_n(left, count).collect();
    }
    let steps = (count - 1) as u32;
    let lerp = |a: u8, b: u8, i: u32| ((a as u32 * (steps - i) + b as u32 * i) / steps) as u8;
    (0..count as u32)
        .map(|i| {
            Rgb::new(
                lerp(left.r, right.r, i),
                lerp(left.g, right.g, i),
                lerp(left.b, right.b, i),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn hex(s: &str) -> Rgb {
        Rgb::from_hex(s).unwrap()
    }

    // ── is_valid_hex ──

    #[test]
    fn valid_hex_lower_upper_mixed() {
        assert!(is_valid_hex("ff0000"));
        assert!(is_valid_hex("ABCDEF"));
        assert!(is_valid_hex("0a1B2c"));
        assert!(is_valid_hex("000000"));
    }

    #[test]
    fn invalid_hex_wrong_length() {
        assert!(!is_valid_hex(""));
        assert!(!is_valid_hex("fff"));
        assert!(!is_valid_hex("fffff"));
        assert!(!is_valid_hex("fffffff"));
        assert!(!is_valid_hex("ff000000"));
    }

    #[test]
    fn invalid_hex_non_hex_chars() {
        assert!(!is_valid_hex("GG0000"));
        assert!(!is_valid_hex("#ff000"));
        assert!(!is_valid_hex(" fffff"));
        assert!(!is_valid_hex("+fffff"));
        assert!(!is_valid_hex("ff_ff0"));
    }

    #[test]
    fn invalid_hex_multibyte_is_rejected() {
        // Six bytes, but not six hex digits.
        assert!(!is_valid_hex("ffé0f"));
        assert!(!is_valid_hex("ééé"));
    }

    // ── from_hex / Display ──

    #[test]
    fn parse_channels() {
        assert_eq!(hex("bf0a30"), Rgb::new(0xbf, 0x0a, 0x30));
        assert_eq!(hex("ABCDEF"), Rgb::new(0xab, 0xcd, 0xef));
    }

    #[test]
    fn parse_rejects_with_descriptive_error() {
        let err = Rgb::from_hex("GG0000").unwrap_err();
        assert!(matches!(err, LuxError::Color(_)));
        assert!(err.to_string().contains("GG0000"));
    }

    #[test]
    fn parse_rejects_hash_prefix() {
        assert!(Rgb::from_hex("#ff0000").is_err());
    }

    #[test]
    fn display_is_lowercase_without_hash() {
        assert_eq!(Rgb::new(0xAB, 0x0C, 0xFF).to_string(), "ab0cff");
        assert_eq!(Rgb::BLACK.to_string(), "000000");
    }

    #[test]
    fn from_str_matches_from_hex() {
        let c: Rgb = "002868".parse().unwrap();
        assert_eq!(c, Rgb::from_u32(0x002868));
    }

    #[test]
    fn from_u32_unpacks_channels() {
        assert_eq!(Rgb::from_u32(0x55ff12), Rgb::new(0x55, 0xff, 0x12));
        assert_eq!(Rgb::from_u32(0xff00_0000), Rgb::BLACK);
    }

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&Rgb::from_u32(0xbf0a30)).unwrap();
        assert_eq!(json, "\"bf0a30\"");
    }

    // ── random_color ──

    #[test]
    fn random_color_is_deterministic_for_seed() {
        let a = random_color(&mut StdRng::seed_from_u64(7));
        let b = random_color(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn random_color_varies() {
        let mut rng = StdRng::seed_from_u64(42);
        let colors: Vec<Rgb> = (0..32).map(|_| random_color(&mut rng)).collect();
        assert!(colors.windows(2).any(|w| w[0] != w[1]));
    }

    // ── interpolate ──

    #[test]
    fn gradient_black_to_white_truncates() {
        let zones = interpolate(Rgb::BLACK, Rgb::WHITE, 5);
        let hexes: Vec<String> = zones.iter().map(Rgb::to_string).collect();
        assert_eq!(hexes, ["000000", "3f3f3f", "7f7f7f", "bfbfbf", "ffffff"]);
    }

    #[test]
    fn gradient_descending_truncates_the_sum() {
        // 255 + (0 - 255) * 0.25 = 191.25 -> 191, not 255 - 63.
        let zones = interpolate(Rgb::WHITE, Rgb::BLACK, 5);
        let hexes: Vec<String> = zones.iter().map(Rgb::to_string).collect();
        assert_eq!(hexes, ["ffffff", "bfbfbf", "7f7f7f", "3f3f3f", "000000"]);
    }

    #[test]
    fn gradient_constant_when_endpoints_equal() {
        let c = hex("4169e1");
        assert_eq!(interpolate(c, c, 5), vec![c; 5]);
    }

    #[test]
    fn gradient_endpoints_are_exact() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let a = random_color(&mut rng);
            let b = random_color(&mut rng);
            let zones = interpolate(a, b, 5);
            assert_eq!(zones.len(), 5);
            assert_eq!(zones[0], a);
            assert_eq!(zones[4], b);
        }
    }

    #[test]
    fn gradient_mixed_channel_directions() {
        let zones = interpolate(hex("ff0080"), hex("00ff80"), 5);
        assert_eq!(zones[1], Rgb::new(0xbf, 0x3f, 0x80));
        assert_eq!(zones[2], Rgb::new(0x7f, 0x7f, 0x80));
    }

    #[test]
    fn gradient_degenerate_counts() {
        let a = hex("123456");
        assert!(interpolate(a, Rgb::WHITE, 0).is_empty());
        assert_eq!(interpolate(a, Rgb::WHITE, 1), vec![a]);
        assert_eq!(interpolate(a, Rgb::WHITE, 2), vec![a, Rgb::WHITE]);
    }
}
