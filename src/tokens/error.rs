//! Token validation errors.

use super::{HexError, LengthError};
use crate::config::types::{write_located, write_report};
use std::fmt;
use thiserror::Error;

/// Token table a diagnostic belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Screen,
    Color,
    FontFamily,
    FontSize,
    Spacing,
    MaxWidth,
    BorderRadius,
}

impl TokenCategory {
    /// TOML key of the table under `[theme]`.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Screen => "screens",
            Self::Color => "colors",
            Self::FontFamily => "font_family",
            Self::FontSize => "font_size",
            Self::Spacing => "spacing",
            Self::MaxWidth => "max_width",
            Self::BorderRadius => "border_radius",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One problem found in the token tables.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TokenIssue {
    #[error("duplicate {category} token `{name}`")]
    Duplicate {
        category: TokenCategory,
        name: String,
    },

    #[error("token name must not be empty")]
    EmptyName,

    #[error("malformed hex color `{value}`: {source}")]
    MalformedHex {
        value: String,
        #[source]
        source: HexError,
    },

    #[error("malformed length `{value}`: {source}")]
    MalformedLength {
        value: String,
        #[source]
        source: LengthError,
    },

    #[error("breakpoint width `{value}` must be a whole number of px")]
    BreakpointUnit { value: String },

    #[error("breakpoint ({min_width}px) must be wider than `{previous}` ({previous_width}px)")]
    BreakpointOrder {
        min_width: u32,
        previous: String,
        previous_width: u32,
    },

    #[error("unknown breakpoint `{0}`")]
    UnknownBreakpoint(String),

    #[error("unknown font family `{0}`")]
    UnknownFontFamily(String),

    #[error("font family has an empty stack")]
    EmptyFontStack,

    #[error("font weight {0} is not one of 100, 200, ..., 900")]
    FontWeight(u16),

    #[error("contrast pairing references unknown color `{0}`")]
    UnknownColor(String),

    #[error("declared contrast ratio {0} is outside 1..=21")]
    RatioRange(f64),
}

/// An issue located at a token path, e.g. `theme.colors.brand-primary`.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenDiagnostic {
    pub path: String,
    pub issue: TokenIssue,
}

impl fmt::Display for TokenDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_located(f, &self.path, &self.issue, None)
    }
}

/// Malformed token tables. Fatal: nothing is rendered with a broken theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    diagnostics: Vec<TokenDiagnostic>,
}

impl ValidationError {
    pub(crate) fn new(diagnostics: Vec<TokenDiagnostic>) -> Self {
        Self { diagnostics }
    }

    pub fn diagnostics(&self) -> &[TokenDiagnostic] {
        &self.diagnostics
    }

    pub fn issues(&self) -> impl Iterator<Item = &TokenIssue> {
        self.diagnostics.iter().map(|d| &d.issue)
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(f, "token validation failed:", &self.diagnostics)
    }
}

impl std::error::Error for ValidationError {}
