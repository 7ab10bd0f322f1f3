//! Process-wide site handle.
//!
//! Uses `arc-swap` for lock-free reads. The handle is filled exactly once
//! at build start (`cli::common::load_site`); afterwards every reader gets
//! the same frozen `Site`.

use super::ConfigError;
use crate::site::Site;
use arc_swap::ArcSwapOption;
use std::sync::Arc;

/// Global site storage.
static SITE: ArcSwapOption<Site> = ArcSwapOption::const_empty();

/// Current site, if one has been installed.
#[inline]
pub fn site() -> Option<Arc<Site>> {
    SITE.load_full()
}

/// Install the site for this process.
///
/// Fails with `ConfigError::AlreadyInitialized` on a second call; the
/// installed value is never replaced.
pub fn init_site(site: Site) -> Result<Arc<Site>, ConfigError> {
    let arc = Arc::new(site);
    let empty: Option<Arc<Site>> = None;
    let previous = SITE.compare_and_swap(&empty, Some(Arc::clone(&arc)));
    if previous.is_some() {
        return Err(ConfigError::AlreadyInitialized);
    }
    Ok(arc)
}
