//! `export`: write theme files for the site build.

use anyhow::Result;
use std::path::Path;

use super::common::{current_dir, load_site, print_warnings};
use crate::{export, log};

pub fn run(config: Option<&Path>, site_url: Option<&str>, output: &Path, minify: bool) -> Result<()> {
    let (config, site) = load_site(config, site_url)?;
    print_warnings(&site.warnings);

    let dir = config.root(&current_dir()?).join(output);
    for path in export::write_all(&site, &dir, minify)? {
        log!("export"; "{}", path.display());
    }
    Ok(())
}
