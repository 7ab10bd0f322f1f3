//! Site configuration management for `brightkeep.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   └── theme/     # [theme] token tables and [theme.contrast]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global site handle
//! ├── util.rs        # URL and config-file helpers
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section            | Purpose                                        |
//! |--------------------|------------------------------------------------|
//! | `[build]`          | Output mode, site URL, integrations, out dir   |
//! | `[theme]`          | Content globs and raw design-token tables      |
//! | `[theme.contrast]` | Contrast re-measurement settings               |

pub mod section;
pub mod types;
pub mod util;

pub use section::{BuildSectionConfig, ContrastConfig, ThemeSectionConfig};
pub use types::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, init_site, site,
};

use crate::build::Integration;
use crate::embed::DEFAULT_THEME;
use crate::log;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config filename, searched upward from the working directory.
pub const CONFIG_FILE: &str = "brightkeep.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing brightkeep.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file; `None` for the embedded default.
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Build settings
    #[serde(default)]
    pub build: BuildSectionConfig,

    /// Design tokens
    #[serde(default)]
    pub theme: ThemeSectionConfig,
}

impl SiteConfig {
    /// Locate and load the configuration.
    ///
    /// An explicit `config` path must exist. Otherwise `brightkeep.toml` is
    /// searched upward from `cwd`, and the embedded BrightKeep default is
    /// used when none is found.
    pub fn locate(config: Option<&Path>, cwd: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = config {
            let path = if path.is_absolute() {
                path.to_path_buf()
            } else {
                cwd.join(path)
            };
            return Self::from_path(&path);
        }

        match util::find_config_file(cwd, Path::new(CONFIG_FILE)) {
            Some(path) => Self::from_path(&path),
            None => {
                crate::debug!("config"; "no {} found, using embedded defaults", CONFIG_FILE);
                Self::embedded()
            }
        }
    }

    /// The embedded BrightKeep configuration.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_str(DEFAULT_THEME)
    }

    /// Parse configuration from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Directory that relative output paths resolve against.
    pub fn root(&self, cwd: &Path) -> PathBuf {
        self.config_path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.to_path_buf())
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the non-token parts of the configuration.
    ///
    /// Collects all errors and returns them at once. Token tables are
    /// validated separately by `tokens::validate`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.build.validate(&mut diag);
        self.theme.validate(
            self.build.integrations.contains(&Integration::Tailwind),
            &mut diag,
        );
        self.theme.contrast.validate(&mut diag);

        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
