//! `[theme]` section configuration.
//!
//! Raw design-token tables as written in `brightkeep.toml`. Nothing here
//! is validated; `tokens::validate` turns a [`ThemeSectionConfig`] into a
//! frozen `DesignTokenSet`.
//!
//! Token tables are arrays of tables so that every entry keeps its
//! declaration order and duplicates can be reported instead of silently
//! merged.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! content = ["./src/**/*.{astro,html,md,mdx,ts}"]
//!
//! [[theme.screens]]
//! name = "lg"
//! min_width = "1024px"
//!
//! [[theme.colors]]
//! group = "brand"
//! name = "primary"
//! value = "#1B2A4A"
//!
//! [[theme.colors.contrast]]
//! on = "brand-surface"
//! ratio = 14.6
//! level = "aaa"
//! ```

mod contrast;
mod entries;

pub use contrast::ContrastConfig;
pub use entries::{ColorEntry, FontSizeEntry, LengthEntry, PairingEntry, ScreenEntry, StepEntry};

use macros::Config;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Source globs scanned by the utility-CSS framework.
pub const DEFAULT_CONTENT: &str = "./src/**/*.{astro,html,js,jsx,md,mdx,svelte,ts,tsx,vue}";

/// Theme section configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme")]
pub struct ThemeSectionConfig {
    /// Files scanned for utility classes.
    pub content: Vec<String>,

    /// Breakpoints, in ascending order.
    #[config(skip)]
    pub screens: Vec<ScreenEntry>,

    #[config(skip)]
    pub colors: Vec<ColorEntry>,

    /// Font stacks by family name.
    #[config(skip)]
    pub font_family: BTreeMap<String, Vec<String>>,

    #[config(skip)]
    pub font_size: Vec<FontSizeEntry>,

    #[config(skip)]
    pub spacing: Vec<LengthEntry>,

    #[config(skip)]
    pub max_width: Vec<LengthEntry>,

    #[config(skip)]
    pub border_radius: Vec<LengthEntry>,

    #[config(skip)]
    pub contrast: ContrastConfig,
}

impl Default for ThemeSectionConfig {
    fn default() -> Self {
        Self {
            content: vec![DEFAULT_CONTENT.into()],
            screens: Vec::new(),
            colors: Vec::new(),
            font_family: BTreeMap::new(),
            font_size: Vec::new(),
            spacing: Vec::new(),
            max_width: Vec::new(),
            border_radius: Vec::new(),
            contrast: ContrastConfig::default(),
        }
    }
}

impl ThemeSectionConfig {
    /// Validate the parts of the theme section that are not tokens.
    ///
    /// # Checks
    /// - if `tailwind_enabled`, `content` must not be empty
    /// - no content glob may be blank
    pub fn validate(&self, tailwind_enabled: bool, diag: &mut crate::config::ConfigDiagnostics) {
        if tailwind_enabled && self.content.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.content,
                format!("the tailwind integration is enabled but {} is empty", Self::FIELDS.content),
                format!("set {}, e.g.: [\"{}\"]", Self::FIELDS.content, DEFAULT_CONTENT),
            );
        }

        if self.content.iter().any(|glob| glob.trim().is_empty()) {
            diag.error(
                Self::FIELDS.content,
                format!("{} contains an empty pattern", Self::FIELDS.content),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigDiagnostics, test_parse_config};
    use crate::tokens::WcagLevel;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.theme.content, vec![DEFAULT_CONTENT.to_string()]);
        assert!(config.theme.colors.is_empty());
        assert!(config.theme.contrast.enable);
    }

    #[test]
    fn test_parse_token_tables() {
        let config = test_parse_config(
            r##"
[[theme.screens]]
name = "md"
min_width = "768px"

[[theme.colors]]
group = "brand"
name = "primary"
value = "#1B2A4A"
usage = "hero background"

[[theme.colors.contrast]]
on = "white"
ratio = 14.2
level = "aaa"

[theme.font_family]
sans = ["Inter", "sans-serif"]

[[theme.font_size]]
name = "h1"
size = "2.25rem"
line_height = "1.2"
weight = 700
screens.md = { size = "3rem" }

[[theme.spacing]]
name = "section"
value = "5rem"
"##,
        );
        let theme = &config.theme;
        assert_eq!(theme.screens[0].min_width, "768px");
        assert_eq!(theme.colors[0].group.as_deref(), Some("brand"));
        assert_eq!(theme.colors[0].contrast[0].level, WcagLevel::Aaa);
        assert_eq!(theme.font_family["sans"], vec!["Inter", "sans-serif"]);
        assert_eq!(theme.font_size[0].family, "sans");
        assert_eq!(theme.font_size[0].screens["md"].size, "3rem");
        assert!(theme.font_size[0].screens["md"].line_height.is_none());
        assert_eq!(theme.spacing[0].value, "5rem");
    }

    #[test]
    fn test_empty_content_with_tailwind() {
        let config = test_parse_config("[theme]\ncontent = []");
        let mut diag = ConfigDiagnostics::new();
        config.theme.validate(true, &mut diag);
        assert_eq!(diag.errors()[0].field.as_str(), "theme.content");

        let mut diag = ConfigDiagnostics::new();
        config.theme.validate(false, &mut diag);
        assert!(!diag.has_errors());
    }
}
