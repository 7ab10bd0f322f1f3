//! `[theme.contrast]` configuration.

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};

/// Contrast re-measurement of declared color pairings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme.contrast")]
pub struct ContrastConfig {
    /// Re-measure declared pairings and warn on mismatches.
    pub enable: bool,

    /// Allowed difference between declared and measured ratios.
    pub tolerance: f64,
}

impl Default for ContrastConfig {
    fn default() -> Self {
        Self {
            enable: true,
            tolerance: 0.1,
        }
    }
}

impl ContrastConfig {
    /// `tolerance` must be a finite, non-negative ratio difference.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            diag.error_with_hint(
                Self::FIELDS.tolerance,
                format!(
                    "{} must be a finite number >= 0, found {}",
                    Self::FIELDS.tolerance,
                    self.tolerance
                ),
                "the default is 0.1",
            );
        }
    }
}
