//! Raw token entries, one struct per TOML table shape.

use crate::tokens::WcagLevel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `[[theme.screens]]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenEntry {
    pub name: String,
    /// Minimum viewport width, in `px` (e.g. `"768px"`).
    pub min_width: String,
}

/// `[[theme.colors]]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorEntry {
    /// Optional group; the token is addressed as `group-name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    pub name: String,
    /// `#RRGGBB`
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    /// This color used as text on other palette colors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contrast: Vec<PairingEntry>,
}

impl ColorEntry {
    /// Token name the entry registers under.
    pub fn token_name(&self) -> String {
        match &self.group {
            Some(group) => format!("{group}-{}", self.name),
            None => self.name.clone(),
        }
    }
}

/// `[[theme.colors.contrast]]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairingEntry {
    /// Background color token name.
    pub on: String,
    /// Declared contrast ratio (`14.6` for 14.6:1).
    pub ratio: f64,
    /// Declared WCAG classification.
    pub level: WcagLevel,
}

/// `[[theme.font_size]]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSizeEntry {
    pub name: String,
    #[serde(default = "default_family")]
    pub family: String,
    pub weight: u16,
    pub size: String,
    pub line_height: String,
    /// Overrides from a breakpoint upward.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub screens: BTreeMap<String, StepEntry>,
}

fn default_family() -> String {
    "sans".into()
}

/// `screens.<name> = { size, line_height }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepEntry {
    pub size: String,
    /// Inherits the base line height when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
}

/// `[[theme.spacing]]`, `[[theme.max_width]]`, `[[theme.border_radius]]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthEntry {
    pub name: String,
    pub value: String,
}
