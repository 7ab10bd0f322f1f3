//! Configuration file generation.
//!
//! Creates brightkeep.toml for a new site.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::section::{BuildSectionConfig, ContrastConfig, ThemeSectionConfig};
use crate::embed::DEFAULT_THEME;

/// Generate brightkeep.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "# BrightKeep configuration file (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# PUBLIC_SITE_URL, when set, overrides [build].site\n\n");

    // [build] section
    out.push_str(&BuildSectionConfig::template_with_header());
    out.push('\n');

    // [theme] section
    out.push_str(&ThemeSectionConfig::template_with_header());
    out.push('\n');

    // [theme.contrast] section
    out.push_str(&ContrastConfig::template_with_header());
    out.push('\n');

    // token tables
    out.push_str(DEFAULT_THEME);

    out
}

/// Write the config template to `path`; refuses to overwrite unless `force`.
pub fn write_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "'{}' already exists, pass --force to overwrite",
            path.display()
        );
    }

    fs::write(path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}
