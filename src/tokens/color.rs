//! Hex colors and relative luminance.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Why a hex color string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("must start with `#`")]
    MissingHash,

    #[error("expected 6 hex digits, found {0}")]
    Length(usize),

    #[error("`{0}` is not a hex digit")]
    Digit(char),
}

/// An sRGB color parsed from `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF);
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// WCAG 2.1 relative luminance in `0.0..=1.0`.
    pub fn relative_luminance(&self) -> f64 {
        let [r, g, b] = [self.r, self.g, self.b].map(linearize);
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }
}

/// sRGB channel to linear light.
fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

impl FromStr for HexColor {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').ok_or(HexError::MissingHash)?;

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(HexError::Digit(bad));
        }
        if digits.len() != 6 {
            return Err(HexError::Length(digits.len()));
        }

        let mut rgb = [0u8; 3];
        hex::decode_to_slice(digits, &mut rgb).map_err(|err| match err {
            hex::FromHexError::InvalidHexCharacter { c, .. } => HexError::Digit(c),
            _ => HexError::Length(digits.len()),
        })?;
        let [r, g, b] = rgb;
        Ok(Self { r, g, b })
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", hex::encode_upper([self.r, self.g, self.b]))
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
