//! Common utilities shared across CLI commands.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::build::{Env, ProcessEnv};
use crate::config::{SiteConfig, init_site};
use crate::log;
use crate::site::Site;
use crate::tokens::ContrastWarning;

/// Locate the configuration, resolve it against the process environment
/// and install the result as the process-wide site.
pub fn load_site(
    config: Option<&Path>,
    site_url: Option<&str>,
) -> Result<(SiteConfig, Arc<Site>)> {
    let cwd = current_dir()?;
    let (config, site) = resolve_site(config, &cwd, &ProcessEnv, site_url)?;
    let site = init_site(site)?;
    crate::debug!("config"; "site installed for {}", site.options.site());
    Ok((config, site))
}

/// Locate the configuration from `cwd` and resolve it against `env`.
pub fn resolve_site(
    config: Option<&Path>,
    cwd: &Path,
    env: &impl Env,
    site_url: Option<&str>,
) -> Result<(SiteConfig, Site)> {
    let config = SiteConfig::locate(config, cwd)?;
    let site = Site::resolve(&config, env, site_url)?;
    Ok((config, site))
}

pub fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().context("Failed to read current directory")
}

/// Print contrast warnings under the `contrast` prefix.
pub fn print_warnings(warnings: &[ContrastWarning]) {
    for warning in warnings {
        log!("contrast"; "{}", warning);
    }
}
