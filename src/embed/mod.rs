//! Embedded static resources.
//!
//! - `theme.toml` - BrightKeep design tokens, used when no `brightkeep.toml`
//!   exists and as the body of the `init` template

/// Default `[theme]` token tables.
pub const DEFAULT_THEME: &str = include_str!("theme.toml");
