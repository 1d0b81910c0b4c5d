//! sRGB hex colors
//!
//! Accepts `RGB` or `RRGGBB`, optionally prefixed with `#`, case-insensitive.
//! Anything else is rejected with [`Error::InvalidHex`] rather than mapped to
//! black.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A 24-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    /// Create a new color from channel values
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex string (`#F1C27D`, `f1c27d`, `#fc7`)
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if digits.is_empty() {
            return Err(Error::invalid_hex(input, "empty color"));
        }
        if !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::invalid_hex(input, "non-hex digit"));
        }

        let nibbles: Vec<u8> = digits.bytes().map(hex_value).collect();
        match *nibbles.as_slice() {
            // Shorthand doubles each digit: #fc7 == #ffcc77
            [r, g, b] => Ok(Self::new(r * 17, g * 17, b * 17)),
            [r1, r0, g1, g0, b1, b0] => Ok(Self::new(
                (r1 << 4) | r0,
                (g1 << 4) | g0,
                (b1 << 4) | b0,
            )),
            _ => Err(Error::invalid_hex(input, "expected 3 or 6 hex digits")),
        }
    }

    /// Convert to an array
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Format as `#RRGGBB`
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
}

#[inline]
fn hex_value(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        _ => c - b'A' + 10,
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb8 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Rgb8 {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Rgb8> for String {
    fn from(color: Rgb8) -> Self {
        color.to_string()
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from(arr: [u8; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digits() {
        assert_eq!(Rgb8::parse("#F1C27D").unwrap(), Rgb8::new(0xF1, 0xC2, 0x7D));
        assert_eq!(Rgb8::parse("8d5524").unwrap(), Rgb8::new(0x8D, 0x55, 0x24));
    }

    #[test]
    fn test_parse_shorthand() {
        assert_eq!(Rgb8::parse("#fc7").unwrap(), Rgb8::new(0xFF, 0xCC, 0x77));
        assert_eq!(Rgb8::parse("000").unwrap(), Rgb8::BLACK);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(Rgb8::parse("  #ffffff\n").unwrap(), Rgb8::WHITE);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "#", "#12345", "#1234567", "#GGHHII", "##fff", "12 345"] {
            let err = Rgb8::parse(bad).unwrap_err();
            assert!(
                matches!(err, Error::InvalidHex { .. }),
                "{:?} should be rejected, got {:?}",
                bad,
                err
            );
        }
    }

    #[test]
    fn test_display_uppercase() {
        assert_eq!(Rgb8::new(0xab, 0x01, 0xff).to_string(), "#AB01FF");
    }

    #[test]
    fn test_serde_as_string() {
        let color: Rgb8 = serde_json::from_str("\"#8D5524\"").unwrap();
        assert_eq!(color, Rgb8::new(0x8D, 0x55, 0x24));
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#8D5524\"");
        assert!(serde_json::from_str::<Rgb8>("\"nope\"").is_err());
    }
}
