//! `check`: validate configuration and tokens.

use anyhow::{Result, bail};
use std::path::Path;

use super::common::{load_site, print_warnings};
use crate::log;

pub fn run(config: Option<&Path>, site_url: Option<&str>, strict: bool) -> Result<()> {
    let (_, site) = load_site(config, site_url)?;
    print_warnings(&site.warnings);

    let pairings = site.tokens.pairings().count();
    if strict && !site.warnings.is_empty() {
        bail!(
            "{} of {} contrast annotations disagree with the measured ratio",
            site.warnings.len(),
            pairings
        );
    }

    log!(
        "ok";
        "{} colors, {} breakpoints, {} type steps, {} pairings checked ({})",
        site.tokens.colors().len(),
        site.tokens.breakpoints_ascending().len(),
        site.tokens.type_scale().len(),
        pairings,
        site.options.site()
    );
    Ok(())
}
