//! Site initialization module.
//!
//! Writes a commented `brightkeep.toml` carrying the default tokens.

mod config;

use crate::{config::CONFIG_FILE, log};
use anyhow::Result;
use std::path::Path;

/// Write the default configuration to `path`, or `./brightkeep.toml`.
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_site(path: Option<&Path>, force: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_config_template());
        return Ok(());
    }

    let path = match path {
        Some(path) => path.to_path_buf(),
        None => super::common::current_dir()?.join(CONFIG_FILE),
    };
    config::write_config(&path, force)?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}
