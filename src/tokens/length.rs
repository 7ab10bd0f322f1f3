//! CSS lengths used by spacing, sizing and type tokens.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LengthError {
    #[error("empty value")]
    Empty,

    #[error("`{0}` is not a number")]
    Number(String),

    #[error("unsupported unit `{0}`, expected rem, em, px, %, vh, vw or ch")]
    Unit(String),

    #[error("a unit is required for non-zero lengths")]
    MissingUnit,

    #[error("must not be negative")]
    Negative,

    #[error("line height must be a positive number or a length")]
    LineHeight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Rem,
    Em,
    Px,
    Percent,
    Vh,
    Vw,
    Ch,
}

impl Unit {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rem => "rem",
            Self::Em => "em",
            Self::Px => "px",
            Self::Percent => "%",
            Self::Vh => "vh",
            Self::Vw => "vw",
            Self::Ch => "ch",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "rem" => Self::Rem,
            "em" => Self::Em,
            "px" => Self::Px,
            "%" => Self::Percent,
            "vh" => Self::Vh,
            "vw" => Self::Vw,
            "ch" => Self::Ch,
            _ => return None,
        })
    }
}

/// A non-negative CSS length. A bare `0` carries no unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: Option<Unit>,
}

impl Length {
    pub const fn new(value: f64, unit: Unit) -> Self {
        Self {
            value,
            unit: Some(unit),
        }
    }

    /// Value in pixels, when the unit is absolute (`px`, or a bare zero).
    pub fn as_px(&self) -> Option<f64> {
        match self.unit {
            Some(Unit::Px) => Some(self.value),
            None => Some(0.0),
            _ => None,
        }
    }
}

impl FromStr for Length {
    type Err = LengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LengthError::Empty);
        }

        let split = s
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
            .unwrap_or(s.len());
        let (number, unit) = s.split_at(split);

        let value: f64 = number
            .parse()
            .map_err(|_| LengthError::Number(number.to_string()))?;
        if !value.is_finite() {
            return Err(LengthError::Number(number.to_string()));
        }
        if value < 0.0 {
            return Err(LengthError::Negative);
        }

        if unit.is_empty() {
            return if value == 0.0 {
                Ok(Self { value, unit: None })
            } else {
                Err(LengthError::MissingUnit)
            };
        }

        let unit = Unit::parse(unit).ok_or_else(|| LengthError::Unit(unit.to_string()))?;
        Ok(Self::new(value, unit))
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Some(unit) => write!(f, "{}{}", self.value, unit.as_str()),
            None => write!(f, "{}", self.value),
        }
    }
}

impl Serialize for Length {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Line height: a unitless multiplier (`1.2`) or an explicit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineHeight {
    Ratio(f64),
    Length(Length),
}

impl FromStr for LineHeight {
    type Err = LengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(ratio) = s.parse::<f64>() {
            return if ratio.is_finite() && ratio > 0.0 {
                Ok(Self::Ratio(ratio))
            } else {
                Err(LengthError::LineHeight)
            };
        }
        s.parse().map(Self::Length)
    }
}

impl fmt::Display for LineHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ratio(ratio) => write!(f, "{ratio}"),
            Self::Length(length) => write!(f, "{length}"),
        }
    }
}

impl Serialize for LineHeight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
