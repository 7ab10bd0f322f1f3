//! Design token registry.
//!
//! [`validate`] turns the raw `[theme]` tables into a [`DesignTokenSet`]:
//! a frozen, queryable structure with no mutation API. Hard problems
//! (duplicates, dangling references, malformed values) fail with a
//! [`ValidationError`] that lists every issue; contrast annotations that
//! disagree with the measured ratio come back as [`ContrastWarning`]s.
//!
//! | Module       | Purpose                                         |
//! |--------------|-------------------------------------------------|
//! | `color`      | `#RRGGBB` parsing, relative luminance           |
//! | `contrast`   | WCAG ratios, levels, pairing checks             |
//! | `length`     | CSS lengths and line heights                    |
//! | `typography` | Font families and the responsive type scale     |
//! | `validate`   | Raw tables to `DesignTokenSet`                  |

mod color;
mod contrast;
mod error;
mod length;
mod typography;
mod validate;

pub use color::{HexColor, HexError};
pub use contrast::{ContrastPairing, ContrastWarning, WcagLevel, contrast_ratio};
pub use error::{TokenCategory, TokenDiagnostic, TokenIssue, ValidationError};
pub use length::{Length, LengthError, LineHeight, Unit};
pub use typography::{FontFamily, ResponsiveStep, TypeScaleEntry, TypeStep};
pub use validate::{Validated, validate};

use rustc_hash::FxHashMap;
use serde::Serialize;

/// Minimum viewport width at which responsive rules change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breakpoint {
    pub name: String,
    pub min_width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorToken {
    /// Registry key, `group-name` for grouped colors.
    pub name: String,
    pub group: Option<String>,
    /// Name inside the group (same as `name` when ungrouped).
    pub local_name: String,
    pub value: HexColor,
    pub usage: Option<String>,
    /// This color as text on other palette colors.
    pub pairings: Vec<ContrastPairing>,
}

/// Named length: spacing, max width or border radius.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LengthToken {
    pub name: String,
    pub value: Length,
}

/// Position lookup per category.
#[derive(Debug, Clone, Default, PartialEq)]
struct TokenIndex {
    breakpoints: FxHashMap<String, usize>,
    colors: FxHashMap<String, usize>,
    font_families: FxHashMap<String, usize>,
    type_scale: FxHashMap<String, usize>,
    spacing: FxHashMap<String, usize>,
    max_width: FxHashMap<String, usize>,
    border_radius: FxHashMap<String, usize>,
}

impl TokenIndex {
    fn positions<'a, T: 'a>(
        items: impl IntoIterator<Item = &'a T>,
        name: impl Fn(&T) -> &str,
    ) -> FxHashMap<String, usize> {
        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| (name(item).to_string(), i))
            .collect()
    }
}

/// Validated, read-only design tokens.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignTokenSet {
    content: Vec<String>,
    breakpoints: Vec<Breakpoint>,
    colors: Vec<ColorToken>,
    font_families: Vec<FontFamily>,
    type_scale: Vec<TypeScaleEntry>,
    spacing: Vec<LengthToken>,
    max_width: Vec<LengthToken>,
    border_radius: Vec<LengthToken>,
    #[serde(skip)]
    index: TokenIndex,
}

impl DesignTokenSet {
    #[allow(clippy::too_many_arguments)]
    fn new(
        content: Vec<String>,
        breakpoints: Vec<Breakpoint>,
        colors: Vec<ColorToken>,
        font_families: Vec<FontFamily>,
        type_scale: Vec<TypeScaleEntry>,
        spacing: Vec<LengthToken>,
        max_width: Vec<LengthToken>,
        border_radius: Vec<LengthToken>,
    ) -> Self {
        let index = TokenIndex {
            breakpoints: TokenIndex::positions(&breakpoints, |b| b.name.as_str()),
            colors: TokenIndex::positions(&colors, |c| c.name.as_str()),
            font_families: TokenIndex::positions(&font_families, |f| f.name.as_str()),
            type_scale: TokenIndex::positions(&type_scale, |t| t.name.as_str()),
            spacing: TokenIndex::positions(&spacing, |l| l.name.as_str()),
            max_width: TokenIndex::positions(&max_width, |l| l.name.as_str()),
            border_radius: TokenIndex::positions(&border_radius, |l| l.name.as_str()),
        };
        Self {
            content,
            breakpoints,
            colors,
            font_families,
            type_scale,
            spacing,
            max_width,
            border_radius,
            index,
        }
    }

    pub fn color_by_name(&self, name: &str) -> Option<&ColorToken> {
        self.index.colors.get(name).map(|&i| &self.colors[i])
    }

    pub fn type_scale_by_name(&self, name: &str) -> Option<&TypeScaleEntry> {
        self.index.type_scale.get(name).map(|&i| &self.type_scale[i])
    }

    /// Breakpoints, strictly increasing by width.
    pub fn breakpoints_ascending(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    pub fn breakpoint_by_name(&self, name: &str) -> Option<&Breakpoint> {
        self.index.breakpoints.get(name).map(|&i| &self.breakpoints[i])
    }

    pub fn spacing_by_name(&self, name: &str) -> Option<&LengthToken> {
        self.index.spacing.get(name).map(|&i| &self.spacing[i])
    }

    pub fn max_width_by_name(&self, name: &str) -> Option<&LengthToken> {
        self.index.max_width.get(name).map(|&i| &self.max_width[i])
    }

    pub fn radius_by_name(&self, name: &str) -> Option<&LengthToken> {
        self.index.border_radius.get(name).map(|&i| &self.border_radius[i])
    }

    pub fn font_family_by_name(&self, name: &str) -> Option<&FontFamily> {
        self.index.font_families.get(name).map(|&i| &self.font_families[i])
    }

    /// Colors in declaration order.
    pub fn colors(&self) -> &[ColorToken] {
        &self.colors
    }

    pub fn type_scale(&self) -> &[TypeScaleEntry] {
        &self.type_scale
    }

    pub fn font_families(&self) -> &[FontFamily] {
        &self.font_families
    }

    pub fn spacing(&self) -> &[LengthToken] {
        &self.spacing
    }

    pub fn max_width(&self) -> &[LengthToken] {
        &self.max_width
    }

    pub fn border_radius(&self) -> &[LengthToken] {
        &self.border_radius
    }

    /// Content globs for the utility-CSS scanner.
    pub fn content(&self) -> &[String] {
        &self.content
    }

    /// Every declared contrast pairing.
    pub fn pairings(&self) -> impl Iterator<Item = &ContrastPairing> {
        self.colors.iter().flat_map(|c| c.pairings.iter())
    }
}
