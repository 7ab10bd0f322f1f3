//! Theme files consumed by the site build.
//!
//! - `theme.json`: Tailwind `content` + `theme` fragment
//! - `tokens.css`: CSS custom properties

pub mod css;
pub mod tailwind;

use crate::log;
use crate::site::Site;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const THEME_JSON: &str = "theme.json";
pub const TOKENS_CSS: &str = "tokens.css";

/// Write both theme files into `dir`, creating it when missing.
///
/// Returns the written paths. If minification fails the unminified
/// stylesheet is written instead.
pub fn write_all(site: &Site, dir: &Path, minify: bool) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory '{}'", dir.display()))?;

    let json = serde_json::to_string_pretty(&tailwind::theme_json(&site.tokens))?;
    let json_path = dir.join(THEME_JSON);
    fs::write(&json_path, json + "\n")
        .with_context(|| format!("Failed to write '{}'", json_path.display()))?;

    let mut css = css::stylesheet(&site.tokens);
    if minify {
        match css::minify(&css) {
            Some(minified) => css = minified,
            None => log!("warning"; "css minification failed, writing unminified {}", TOKENS_CSS),
        }
    }
    let css_path = dir.join(TOKENS_CSS);
    fs::write(&css_path, css)
        .with_context(|| format!("Failed to write '{}'", css_path.display()))?;

    Ok(vec![json_path, css_path])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn site() -> Site {
        let config = SiteConfig::embedded().unwrap();
        Site::resolve(&config, &HashMap::<String, String>::new(), None).unwrap()
    }

    #[test]
    fn test_write_all_creates_files() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("nested/theme");

        let written = write_all(&site(), &out, false).unwrap();
        assert_eq!(written, vec![out.join(THEME_JSON), out.join(TOKENS_CSS)]);

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out.join(THEME_JSON)).unwrap()).unwrap();
        assert_eq!(json["theme"]["extend"]["colors"]["brand"]["surface"], "#F8F9FA");

        let css = fs::read_to_string(out.join(TOKENS_CSS)).unwrap();
        assert!(css.contains("--color-brand-surface: #F8F9FA;"));
    }

    #[test]
    fn test_write_all_minified() {
        let dir = TempDir::new().unwrap();
        write_all(&site(), dir.path(), true).unwrap();
        let css = fs::read_to_string(dir.path().join(TOKENS_CSS)).unwrap();
        assert!(!css.contains("\n  --"));
        assert!(css.contains("--color-brand-surface"));
    }
}
