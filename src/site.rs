//! Fully resolved site: build options plus validated design tokens.

use crate::build::{BuildOptions, Env};
use crate::config::SiteConfig;
use crate::debug;
use crate::tokens::{self, ContrastWarning, DesignTokenSet, Validated};
use anyhow::Result;

/// Everything a build needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Site {
    pub options: BuildOptions,
    pub tokens: DesignTokenSet,
    /// Advisory contrast mismatches found during validation.
    pub warnings: Vec<ContrastWarning>,
}

impl Site {
    /// Resolve a configuration against the environment.
    ///
    /// Site URL precedence: `site_override` (CLI), `PUBLIC_SITE_URL`,
    /// `[build].site`, then the built-in fallback.
    pub fn resolve(config: &SiteConfig, env: &impl Env, site_override: Option<&str>) -> Result<Self> {
        config.validate()?;

        let mut options = BuildOptions::from_section(&config.build, env)?;
        if let Some(site) = site_override {
            options = options.with_site_override(site)?;
        }
        debug!("config"; "site url: {}", options.site());

        let Validated { tokens, warnings } = tokens::validate(&config.theme)?;
        debug!(
            "config";
            "{} colors, {} breakpoints, {} type steps",
            tokens.colors().len(),
            tokens.breakpoints_ascending().len(),
            tokens.type_scale().len()
        );

        Ok(Self {
            options,
            tokens,
            warnings,
        })
    }
}
