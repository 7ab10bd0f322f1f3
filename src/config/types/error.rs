//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors. All of them abort the build.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("invalid site URL `{value}`: {reason}")]
    SiteUrl { value: String, reason: String },

    #[error("site configuration is already initialized")]
    AlreadyInitialized,

    // no #[from]: a source() here would print every diagnostic twice
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

// ============================================================================
// report rendering
// ============================================================================

/// `[path]` line followed by `→ message`, plus an optional hint line.
pub(crate) fn write_located(
    f: &mut fmt::Formatter<'_>,
    path: &str,
    message: &dyn fmt::Display,
    hint: Option<&str>,
) -> fmt::Result {
    writeln!(f, "{}{}{}", "[".dimmed(), path.cyan(), "]".dimmed())?;
    write!(f, "{} {}", "→".red(), message)?;
    if let Some(hint) = hint {
        write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
    }
    Ok(())
}

/// Title, blank-line separated items, and a count when there is more than one.
pub(crate) fn write_report<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    items: &[T],
) -> fmt::Result {
    writeln!(f, "{}\n", title.red().bold())?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            writeln!(f, "\n")?;
        }
        write!(f, "{item}")?;
    }
    if items.len() > 1 {
        write!(
            f,
            "\n\n{} {} {}",
            "found".dimmed(),
            items.len().to_string().red().bold(),
            "errors".dimmed()
        )?;
    }
    Ok(())
}

// ============================================================================
// diagnostics
// ============================================================================

/// A single configuration error at a field path.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    /// Config field path (e.g., "build.integrations")
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_located(f, self.field.as_str(), &self.message, self.hint.as_deref())
    }
}

/// Errors collected over one validation pass.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic {
            field,
            message: message.into(),
            hint: None,
        });
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors.push(ConfigDiagnostic {
            field,
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    /// `Err(self)` when any error was collected.
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(f, "config validation failed:", &self.errors)
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("brightkeep.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("brightkeep.toml"));

        let url_err = ConfigError::SiteUrl {
            value: "not a url".into(),
            reason: "relative URL without a base".into(),
        };
        let display = format!("{url_err}");
        assert!(display.contains("not a url"));
        assert!(display.contains("relative URL"));
    }

    #[test]
    fn test_diagnostics_collects_all_errors() {
        let mut diag = ConfigDiagnostics::new();
        assert!(!diag.has_errors());

        diag.error(FieldPath::new("build.integrations"), "listed twice");
        diag.error_with_hint(FieldPath::new("theme.content"), "empty", "add a glob");
        assert_eq!(diag.len(), 2);

        let err = diag.into_result().unwrap_err();
        let display = format!("{err}");
        assert!(display.contains("build.integrations"));
        assert!(display.contains("add a glob"));
        assert!(display.contains("errors"));
    }
}
