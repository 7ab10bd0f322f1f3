//! WCAG 2.1 contrast ratios and classification.

use super::HexColor;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Contrast ratio between two colors, in `1.0..=21.0`. Order-independent.
pub fn contrast_ratio(a: HexColor, b: HexColor) -> f64 {
    let (la, lb) = (a.relative_luminance(), b.relative_luminance());
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Highest WCAG text classification a ratio satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WcagLevel {
    /// Below 3:1; not for text.
    Fail,
    /// 3:1, AA for large text (18px+, or 14px+ bold) only.
    Large,
    /// 4.5:1, AA for all text.
    Aa,
    /// 7:1, AAA for all text.
    Aaa,
}

impl WcagLevel {
    pub fn from_ratio(ratio: f64) -> Self {
        match ratio {
            r if r >= 7.0 => Self::Aaa,
            r if r >= 4.5 => Self::Aa,
            r if r >= 3.0 => Self::Large,
            _ => Self::Fail,
        }
    }

    /// Whether body-size text may use the pairing.
    pub const fn passes_normal_text(&self) -> bool {
        matches!(self, Self::Aa | Self::Aaa)
    }

    pub const fn passes_large_text(&self) -> bool {
        !matches!(self, Self::Fail)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fail => "fail",
            Self::Large => "large",
            Self::Aa => "aa",
            Self::Aaa => "aaa",
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declared foreground/background pairing and its measurement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastPairing {
    pub foreground: String,
    pub background: String,
    pub declared_ratio: f64,
    pub declared_level: WcagLevel,
    pub ratio: f64,
    pub level: WcagLevel,
}

impl ContrastPairing {
    pub fn measure(
        foreground: (&str, HexColor),
        background: (&str, HexColor),
        declared_ratio: f64,
        declared_level: WcagLevel,
    ) -> Self {
        let ratio = contrast_ratio(foreground.1, background.1);
        Self {
            foreground: foreground.0.to_string(),
            background: background.0.to_string(),
            declared_ratio,
            declared_level,
            ratio,
            level: WcagLevel::from_ratio(ratio),
        }
    }

    /// Returns a warning when the declaration disagrees with the measurement.
    pub fn check(&self, tolerance: f64) -> Option<ContrastWarning> {
        let ratio_off = (self.declared_ratio - self.ratio).abs() > tolerance;
        let level_off = self.declared_level != self.level;
        (ratio_off || level_off).then(|| ContrastWarning {
            pairing: self.clone(),
            level_mismatch: level_off,
        })
    }
}

/// Declared contrast annotation that does not match the measured value.
///
/// Annotations are advisory, so this never fails a build on its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastWarning {
    #[serde(flatten)]
    pub pairing: ContrastPairing,
    /// The WCAG class differs, not just the ratio.
    pub level_mismatch: bool,
}

impl fmt::Display for ContrastWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.pairing;
        write!(
            f,
            "`{}` on `{}`: declared ~{:.1}:1 ({}), measured {:.2}:1 ({})",
            p.foreground, p.background, p.declared_ratio, p.declared_level, p.ratio, p.level
        )?;
        if self.level_mismatch {
            write!(f, " {}", "level differs".red())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> HexColor {
        s.parse().unwrap()
    }

    #[test]
    fn test_black_on_white_is_maximum() {
        let ratio = contrast_ratio(HexColor::BLACK, HexColor::WHITE);
        assert!((ratio - 21.0).abs() < 1e-9);
        assert_eq!(contrast_ratio(HexColor::WHITE, HexColor::WHITE), 1.0);
    }

    #[test]
    fn test_order_independent() {
        let (a, b) = (hex("#1B2A4A"), hex("#F8F9FA"));
        assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
    }

    #[test]
    fn test_brand_pairings() {
        // Navy on Off-White and Slate on White from the brand palette.
        let navy_on_surface = contrast_ratio(hex("#1B2A4A"), hex("#F8F9FA"));
        assert!((navy_on_surface - 13.49).abs() < 0.01, "{navy_on_surface}");

        let slate_on_white = contrast_ratio(hex("#6B7280"), HexColor::WHITE);
        assert!((slate_on_white - 4.83).abs() < 0.01, "{slate_on_white}");
        assert_eq!(WcagLevel::from_ratio(slate_on_white), WcagLevel::Aa);
    }

    #[test]
    fn test_levels() {
        assert_eq!(WcagLevel::from_ratio(2.99), WcagLevel::Fail);
        assert_eq!(WcagLevel::from_ratio(3.0), WcagLevel::Large);
        assert_eq!(WcagLevel::from_ratio(4.5), WcagLevel::Aa);
        assert_eq!(WcagLevel::from_ratio(7.0), WcagLevel::Aaa);
        assert!(WcagLevel::Aa.passes_normal_text());
        assert!(!WcagLevel::Large.passes_normal_text());
        assert!(WcagLevel::Large.passes_large_text());
    }

    #[test]
    fn test_check_within_tolerance() {
        let pairing = ContrastPairing::measure(
            ("brand-muted", hex("#6B7280")),
            ("white", HexColor::WHITE),
            4.8,
            WcagLevel::Aa,
        );
        assert!(pairing.check(0.1).is_none());
    }

    #[test]
    fn test_check_reports_level_mismatch() {
        // Coral Pink on White is annotated as large-text safe, but measures below 3:1.
        let pairing = ContrastPairing::measure(
            ("brand-accent", hex("#FF6B6B")),
            ("white", HexColor::WHITE),
            3.9,
            WcagLevel::Large,
        );
        let warning = pairing.check(0.1).unwrap();
        assert!(warning.level_mismatch);
        assert_eq!(warning.pairing.level, WcagLevel::Fail);
        assert!(warning.to_string().contains("`brand-accent` on `white`"));
    }
}
