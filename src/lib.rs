//! BrightKeep - build configuration and design tokens for the BrightKeep site.
//!
//! Resolves the build options (output mode, canonical site URL,
//! integrations) and validates the design-token tables into a frozen
//! [`tokens::DesignTokenSet`], which [`export`] renders as Tailwind and
//! CSS theme files.
//!
//! ```ignore
//! let config = SiteConfig::locate(None, &cwd)?;
//! let site = Site::resolve(&config, &ProcessEnv, None)?;
//! let navy = site.tokens.color_by_name("brand-primary");
//! ```

pub mod logger;

pub mod build;
pub mod cli;
pub mod config;
pub mod embed;
pub mod export;
pub mod site;
pub mod tokens;

pub use build::{BuildOptions, Env, ProcessEnv};
pub use config::SiteConfig;
pub use site::Site;
pub use tokens::DesignTokenSet;
