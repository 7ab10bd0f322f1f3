//! Build options consumed by the static-site pipeline.
//!
//! Resolution order for the canonical site URL, highest first:
//!
//! | Source                  | Example                                 |
//! |-------------------------|-----------------------------------------|
//! | `--site-url`            | `brightkeep export -U https://a.dev`    |
//! | `PUBLIC_SITE_URL`       | `PUBLIC_SITE_URL=https://example.org`   |
//! | `[build] site`          | `site = "https://staging.example.org"`  |
//! | fallback                | `https://brightkeep.com.au`             |

mod env;

pub use env::{Env, ProcessEnv, SITE_URL_VAR, non_empty_var};

use crate::config::section::BuildSectionConfig;
use crate::config::{ConfigError, util::extract_url_path};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use url::Url;

/// Canonical site URL used when nothing overrides it.
pub const FALLBACK_SITE_URL: &str = "https://brightkeep.com.au";

/// How the site is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Every page is prerendered to a file at build time.
    #[default]
    Static,
}

impl OutputMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Static => "static",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build integration (plugin) wired into the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Integration {
    /// Utility-CSS framework; consumes the design tokens.
    Tailwind,
    /// Sitemap generator; needs the canonical site URL.
    Sitemap,
}

impl Integration {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tailwind => "tailwind",
            Self::Sitemap => "sitemap",
        }
    }
}

impl fmt::Display for Integration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved, immutable build options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    output: OutputMode,
    site: String,
    site_url: Url,
    integrations: Vec<Integration>,
    out_dir: PathBuf,
}

impl BuildOptions {
    /// Build options from defaults and the environment alone.
    pub fn load(env: &impl Env) -> Result<Self, ConfigError> {
        Self::from_section(&BuildSectionConfig::default(), env)
    }

    /// Build options from a `[build]` section and the environment.
    ///
    /// `PUBLIC_SITE_URL` outranks `[build] site`; an empty variable counts
    /// as unset.
    pub fn from_section(section: &BuildSectionConfig, env: &impl Env) -> Result<Self, ConfigError> {
        let site = non_empty_var(env, SITE_URL_VAR)
            .or_else(|| section.site.clone())
            .unwrap_or_else(|| FALLBACK_SITE_URL.to_string());
        let site_url = parse_site_url(&site)?;

        Ok(Self {
            output: section.output,
            site,
            site_url,
            integrations: section.integrations.clone(),
            out_dir: section.out_dir.clone(),
        })
    }

    /// Apply a command-line site URL, which outranks every other source.
    pub fn with_site_override(mut self, site: &str) -> Result<Self, ConfigError> {
        self.site_url = parse_site_url(site)?;
        self.site = site.to_string();
        Ok(self)
    }

    pub const fn output(&self) -> OutputMode {
        self.output
    }

    /// Site URL exactly as provided.
    pub fn site(&self) -> &str {
        &self.site
    }

    pub fn site_url(&self) -> &Url {
        &self.site_url
    }

    /// URL path component, e.g. `docs` for `https://example.org/docs/`.
    pub fn path_prefix(&self) -> String {
        extract_url_path(self.site_url.as_str()).unwrap_or_default()
    }

    pub fn integrations(&self) -> &[Integration] {
        &self.integrations
    }

    pub fn has_integration(&self, integration: Integration) -> bool {
        self.integrations.contains(&integration)
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}

/// Validate a canonical site URL: absolute, http(s), with a host.
fn parse_site_url(value: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::SiteUrl {
        value: value.to_string(),
        reason,
    };

    let parsed = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!(
            "scheme '{}' not supported, must be http or https",
            parsed.scheme()
        )));
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(invalid("URL must have a valid host".into()));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn env(pairs: &[(&str, &str)]) -> FxHashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_fallback_without_override() {
        let options = BuildOptions::load(&env(&[])).unwrap();
        assert_eq!(options.site(), "https://brightkeep.com.au");
        assert_eq!(options.output(), OutputMode::Static);
        assert_eq!(
            options.integrations(),
            &[Integration::Tailwind, Integration::Sitemap]
        );
        assert_eq!(options.out_dir(), Path::new("dist"));
        assert_eq!(options.path_prefix(), "");
    }

    #[test]
    fn test_env_override_is_exact() {
        let options = BuildOptions::load(&env(&[(SITE_URL_VAR, "https://example.org")])).unwrap();
        assert_eq!(options.site(), "https://example.org");
        assert_eq!(options.site_url().host_str(), Some("example.org"));
    }

    #[test]
    fn test_env_override_not_trimmed() {
        let options = BuildOptions::load(&env(&[(SITE_URL_VAR, "https://example.org/ ")])).unwrap();
        assert_eq!(options.site(), "https://example.org/ ");
        assert_eq!(options.site_url().host_str(), Some("example.org"));
    }

    #[test]
    fn test_empty_override_falls_back() {
        let options = BuildOptions::load(&env(&[(SITE_URL_VAR, "")])).unwrap();
        assert_eq!(options.site(), FALLBACK_SITE_URL);
    }

    #[test]
    fn test_malformed_override_fails() {
        for bad in ["example.org", "/relative/path", "ftp://example.org", "mailto:a@b.c"] {
            let err = BuildOptions::load(&env(&[(SITE_URL_VAR, bad)])).unwrap_err();
            assert!(
                matches!(&err, ConfigError::SiteUrl { value, .. } if value == bad),
                "{bad}: {err}"
            );
        }
    }

    #[test]
    fn test_env_outranks_section() {
        let section = BuildSectionConfig {
            site: Some("https://staging.example.org".into()),
            ..BuildSectionConfig::default()
        };
        let options = BuildOptions::from_section(&section, &env(&[])).unwrap();
        assert_eq!(options.site(), "https://staging.example.org");

        let options =
            BuildOptions::from_section(&section, &env(&[(SITE_URL_VAR, "https://example.org")]))
                .unwrap();
        assert_eq!(options.site(), "https://example.org");
    }

    #[test]
    fn test_cli_override_and_prefix() {
        let options = BuildOptions::load(&env(&[(SITE_URL_VAR, "https://example.org")]))
            .unwrap()
            .with_site_override("https://example.github.io/brightkeep/")
            .unwrap();
        assert_eq!(options.site(), "https://example.github.io/brightkeep/");
        assert_eq!(options.path_prefix(), "brightkeep");

        let err = BuildOptions::load(&env(&[]))
            .unwrap()
            .with_site_override("nope")
            .unwrap_err();
        assert!(matches!(err, ConfigError::SiteUrl { .. }));
    }
}
