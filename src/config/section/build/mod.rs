//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "static"
//! site = "https://brightkeep.com.au"
//! integrations = ["tailwind", "sitemap"]
//! out_dir = "dist"
//! ```

use crate::build::{Integration, OutputMode};
use crate::config::ConfigDiagnostics;
use macros::Config;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Site-level build options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "build")]
pub struct BuildSectionConfig {
    /// Output mode. Only "static" is supported.
    pub output: OutputMode,

    /// Canonical site URL. PUBLIC_SITE_URL overrides it.
    pub site: Option<String>,

    /// Enabled integrations, in pipeline order.
    pub integrations: Vec<Integration>,

    /// Build output directory.
    pub out_dir: PathBuf,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            output: OutputMode::Static,
            site: None,
            integrations: vec![Integration::Tailwind, Integration::Sitemap],
            out_dir: "dist".into(),
        }
    }
}

impl BuildSectionConfig {
    /// Validate build configuration.
    ///
    /// # Checks
    /// - each integration is listed once
    /// - `out_dir` is not empty
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let mut seen = FxHashSet::default();
        for integration in &self.integrations {
            if !seen.insert(*integration) {
                diag.error_with_hint(
                    Self::FIELDS.integrations,
                    format!("integration `{integration}` is listed more than once"),
                    format!("remove the duplicate from {}", Self::FIELDS.integrations),
                );
            }
        }

        if self.out_dir.as_os_str().is_empty() {
            diag.error(
                Self::FIELDS.out_dir,
                format!("{} must not be empty", Self::FIELDS.out_dir),
            );
        }
    }
}
