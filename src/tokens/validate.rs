//! Raw `[theme]` tables to a validated [`DesignTokenSet`].

use super::{
    Breakpoint, ColorToken, ContrastPairing, ContrastWarning, DesignTokenSet, FontFamily,
    HexColor, Length, LengthToken, LineHeight, ResponsiveStep, TokenCategory, TokenDiagnostic,
    TokenIssue, TypeScaleEntry, TypeStep, ValidationError,
};
use crate::config::section::{ColorEntry, FontSizeEntry, LengthEntry, ScreenEntry, ThemeSectionConfig};
use rustc_hash::{FxHashMap, FxHashSet};

/// Result of a successful validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Validated {
    pub tokens: DesignTokenSet,
    /// Declared contrast annotations that disagree with the measurement.
    pub warnings: Vec<ContrastWarning>,
}

/// Validate raw token tables.
///
/// Every hard issue is collected before failing, so one run reports the
/// whole list.
pub fn validate(theme: &ThemeSectionConfig) -> Result<Validated, ValidationError> {
    let mut v = Validator::default();

    let breakpoints = v.screens(&theme.screens);
    let (mut colors, declared_colors) = v.colors(&theme.colors);
    let font_families = v.font_families(theme);
    let type_scale = v.font_sizes(&theme.font_size, &breakpoints, theme);
    let spacing = v.lengths(TokenCategory::Spacing, &theme.spacing);
    let max_width = v.lengths(TokenCategory::MaxWidth, &theme.max_width);
    let border_radius = v.lengths(TokenCategory::BorderRadius, &theme.border_radius);
    v.pairings(&theme.colors, &mut colors, &declared_colors);

    if !v.diagnostics.is_empty() {
        return Err(ValidationError::new(v.diagnostics));
    }

    let warnings = if theme.contrast.enable {
        colors
            .iter()
            .flat_map(|c| c.pairings.iter())
            .filter_map(|p| p.check(theme.contrast.tolerance))
            .collect()
    } else {
        Vec::new()
    };

    let tokens = DesignTokenSet::new(
        theme.content.clone(),
        breakpoints,
        colors,
        font_families,
        type_scale,
        spacing,
        max_width,
        border_radius,
    );
    Ok(Validated { tokens, warnings })
}

#[derive(Default)]
struct Validator {
    diagnostics: Vec<TokenDiagnostic>,
}

impl Validator {
    fn report(&mut self, category: TokenCategory, name: &str, issue: TokenIssue) {
        let path = if name.is_empty() {
            format!("theme.{}", category.key())
        } else {
            format!("theme.{}.{}", category.key(), name)
        };
        self.diagnostics.push(TokenDiagnostic { path, issue });
    }

    /// Check name is present and unused; reports and returns false otherwise.
    fn claim(&mut self, category: TokenCategory, name: &str, seen: &mut FxHashSet<String>) -> bool {
        if name.trim().is_empty() {
            self.report(category, "", TokenIssue::EmptyName);
            return false;
        }
        if !seen.insert(name.to_string()) {
            self.report(
                category,
                name,
                TokenIssue::Duplicate {
                    category,
                    name: name.to_string(),
                },
            );
            return false;
        }
        true
    }

    fn length(&mut self, category: TokenCategory, name: &str, value: &str) -> Option<Length> {
        value
            .parse()
            .map_err(|source| {
                self.report(
                    category,
                    name,
                    TokenIssue::MalformedLength {
                        value: value.to_string(),
                        source,
                    },
                )
            })
            .ok()
    }

    fn line_height(&mut self, name: &str, value: &str) -> Option<LineHeight> {
        value
            .parse()
            .map_err(|source| {
                self.report(
                    TokenCategory::FontSize,
                    name,
                    TokenIssue::MalformedLength {
                        value: value.to_string(),
                        source,
                    },
                )
            })
            .ok()
    }

    // ========================================================================
    // categories
    // ========================================================================

    /// Breakpoints must be declared with strictly increasing widths.
    fn screens(&mut self, entries: &[ScreenEntry]) -> Vec<Breakpoint> {
        let category = TokenCategory::Screen;
        let mut seen = FxHashSet::default();
        let mut out: Vec<Breakpoint> = Vec::with_capacity(entries.len());
        let mut widest: Option<(String, u32)> = None;

        for entry in entries {
            if !self.claim(category, &entry.name, &mut seen) {
                continue;
            }
            let Some(length) = self.length(category, &entry.name, &entry.min_width) else {
                continue;
            };
            let Some(min_width) = whole_px(length) else {
                self.report(
                    category,
                    &entry.name,
                    TokenIssue::BreakpointUnit {
                        value: entry.min_width.clone(),
                    },
                );
                continue;
            };

            if let Some((previous, previous_width)) = &widest
                && min_width <= *previous_width
            {
                self.report(
                    category,
                    &entry.name,
                    TokenIssue::BreakpointOrder {
                        min_width,
                        previous: previous.clone(),
                        previous_width: *previous_width,
                    },
                );
            } else {
                widest = Some((entry.name.clone(), min_width));
            }

            out.push(Breakpoint {
                name: entry.name.clone(),
                min_width,
            });
        }
        out
    }

    /// Parse colors. Also returns every declared name, including ones whose
    /// value failed to parse, so pairings can tell "unknown" from "broken".
    fn colors(&mut self, entries: &[ColorEntry]) -> (Vec<ColorToken>, FxHashSet<String>) {
        let category = TokenCategory::Color;
        let mut seen = FxHashSet::default();
        let mut out = Vec::with_capacity(entries.len());

        for entry in entries {
            if entry.group.as_deref().is_some_and(|g| g.trim().is_empty()) {
                self.report(category, "", TokenIssue::EmptyName);
                continue;
            }
            let name = entry.token_name();
            if entry.name.trim().is_empty() {
                self.report(category, "", TokenIssue::EmptyName);
                continue;
            }
            if !self.claim(category, &name, &mut seen) {
                continue;
            }

            match entry.value.parse::<HexColor>() {
                Ok(value) => out.push(ColorToken {
                    name,
                    group: entry.group.clone(),
                    local_name: entry.name.clone(),
                    value,
                    usage: entry.usage.clone(),
                    pairings: Vec::new(),
                }),
                Err(source) => self.report(
                    category,
                    &name,
                    TokenIssue::MalformedHex {
                        value: entry.value.clone(),
                        source,
                    },
                ),
            }
        }
        (out, seen)
    }

    fn font_families(&mut self, theme: &ThemeSectionConfig) -> Vec<FontFamily> {
        let category = TokenCategory::FontFamily;
        let mut out = Vec::with_capacity(theme.font_family.len());

        for (name, stack) in &theme.font_family {
            if name.trim().is_empty() {
                self.report(category, "", TokenIssue::EmptyName);
                continue;
            }
            if stack.is_empty() || stack.iter().any(|font| font.trim().is_empty()) {
                self.report(category, name, TokenIssue::EmptyFontStack);
                continue;
            }
            out.push(FontFamily {
                name: name.clone(),
                stack: stack.clone(),
            });
        }
        out
    }

    fn font_sizes(
        &mut self,
        entries: &[FontSizeEntry],
        breakpoints: &[Breakpoint],
        theme: &ThemeSectionConfig,
    ) -> Vec<TypeScaleEntry> {
        let category = TokenCategory::FontSize;
        let widths: FxHashMap<&str, u32> = breakpoints
            .iter()
            .map(|b| (b.name.as_str(), b.min_width))
            .collect();
        let mut seen = FxHashSet::default();
        let mut out = Vec::with_capacity(entries.len());

        for entry in entries {
            if !self.claim(category, &entry.name, &mut seen) {
                continue;
            }
            let mut ok = true;

            if !theme.font_family.contains_key(&entry.family) {
                self.report(
                    category,
                    &entry.name,
                    TokenIssue::UnknownFontFamily(entry.family.clone()),
                );
                ok = false;
            }
            if !(100..=900).contains(&entry.weight) || entry.weight % 100 != 0 {
                self.report(category, &entry.name, TokenIssue::FontWeight(entry.weight));
                ok = false;
            }

            let size = self.length(category, &entry.name, &entry.size);
            let line_height = self.line_height(&entry.name, &entry.line_height);

            let mut responsive = Vec::with_capacity(entry.screens.len());
            for (breakpoint, step) in &entry.screens {
                let path = format!("{}.screens.{}", entry.name, breakpoint);
                let Some(&min_width) = widths.get(breakpoint.as_str()) else {
                    self.report(
                        category,
                        &path,
                        TokenIssue::UnknownBreakpoint(breakpoint.clone()),
                    );
                    ok = false;
                    continue;
                };
                let step_size = self.length(category, &path, &step.size);
                let step_line_height = match &step.line_height {
                    Some(value) => self.line_height(&path, value),
                    None => line_height,
                };
                match (step_size, step_line_height) {
                    (Some(size), Some(line_height)) => responsive.push(ResponsiveStep {
                        breakpoint: breakpoint.clone(),
                        min_width,
                        step: TypeStep { size, line_height },
                    }),
                    _ => ok = false,
                }
            }
            responsive.sort_by_key(|r| r.min_width);

            if let (true, Some(size), Some(line_height)) = (ok, size, line_height) {
                out.push(TypeScaleEntry {
                    name: entry.name.clone(),
                    family: entry.family.clone(),
                    weight: entry.weight,
                    base: TypeStep { size, line_height },
                    responsive,
                });
            }
        }
        out
    }

    fn lengths(&mut self, category: TokenCategory, entries: &[LengthEntry]) -> Vec<LengthToken> {
        let mut seen = FxHashSet::default();
        let mut out = Vec::with_capacity(entries.len());
        for entry in entries {
            if !self.claim(category, &entry.name, &mut seen) {
                continue;
            }
            if let Some(value) = self.length(category, &entry.name, &entry.value) {
                out.push(LengthToken {
                    name: entry.name.clone(),
                    value,
                });
            }
        }
        out
    }

    /// Measure declared pairings once every color is parsed.
    fn pairings(
        &mut self,
        entries: &[ColorEntry],
        colors: &mut [ColorToken],
        declared: &FxHashSet<String>,
    ) {
        let category = TokenCategory::Color;
        let values: FxHashMap<String, HexColor> =
            colors.iter().map(|c| (c.name.clone(), c.value)).collect();
        let mut measured: FxHashMap<String, Vec<ContrastPairing>> = FxHashMap::default();

        for entry in entries {
            let name = entry.token_name();
            for pairing in &entry.contrast {
                if !(1.0..=21.0).contains(&pairing.ratio) {
                    self.report(category, &name, TokenIssue::RatioRange(pairing.ratio));
                    continue;
                }
                if !declared.contains(&pairing.on) {
                    self.report(
                        category,
                        &name,
                        TokenIssue::UnknownColor(pairing.on.clone()),
                    );
                    continue;
                }
                // Declared but malformed: already reported.
                let (Some(&fg), Some(&bg)) = (values.get(&name), values.get(&pairing.on)) else {
                    continue;
                };
                measured
                    .entry(name.clone())
                    .or_default()
                    .push(ContrastPairing::measure(
                        (&name, fg),
                        (&pairing.on, bg),
                        pairing.ratio,
                        pairing.level,
                    ));
            }
        }

        for color in colors.iter_mut() {
            if let Some(pairings) = measured.remove(&color.name) {
                color.pairings = pairings;
            }
        }
    }
}

/// Breakpoints are whole pixels.
fn whole_px(length: Length) -> Option<u32> {
    let px = length.as_px()?;
    (px.fract() == 0.0 && px <= f64::from(u32::MAX)).then_some(px as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SiteConfig, test_parse_config};
    use crate::tokens::WcagLevel;

    fn brightkeep() -> ThemeSectionConfig {
        SiteConfig::embedded().unwrap().theme
    }

    fn issues(theme: &ThemeSectionConfig) -> Vec<TokenIssue> {
        validate(theme).unwrap_err().issues().cloned().collect()
    }

    #[test]
    fn test_brightkeep_defaults_validate() {
        let Validated { tokens, .. } = validate(&brightkeep()).unwrap();
        assert_eq!(tokens.colors().len(), 8);
        assert_eq!(
            tokens.color_by_name("brand-primary").unwrap().value,
            HexColor::new(0x1B, 0x2A, 0x4A)
        );
        assert_eq!(tokens.spacing_by_name("section-lg").unwrap().value.to_string(), "7rem");
        assert_eq!(tokens.max_width_by_name("content").unwrap().value.to_string(), "1200px");
        assert_eq!(tokens.radius_by_name("card").unwrap().value.to_string(), "0.75rem");
        assert_eq!(
            tokens.font_family_by_name("mono").unwrap().stack,
            vec!["JetBrains Mono", "monospace"]
        );
    }

    #[test]
    fn test_breakpoints_strictly_increasing() {
        let Validated { tokens, .. } = validate(&brightkeep()).unwrap();
        let widths: Vec<_> = tokens
            .breakpoints_ascending()
            .iter()
            .map(|b| (b.name.as_str(), b.min_width))
            .collect();
        assert_eq!(
            widths,
            vec![("sm", 375), ("md", 768), ("lg", 1024), ("xl", 1440)]
        );
        assert!(widths.windows(2).all(|w| w[0].1 < w[1].1));
    }

    #[test]
    fn test_type_scale_references_resolve() {
        let Validated { tokens, .. } = validate(&brightkeep()).unwrap();
        for entry in tokens.type_scale() {
            assert!(tokens.font_family_by_name(&entry.family).is_some());
            for step in &entry.responsive {
                assert!(tokens.breakpoint_by_name(&step.breakpoint).is_some());
            }
        }

        let h1 = tokens.type_scale_by_name("h1").unwrap();
        assert_eq!(h1.weight, 700);
        assert_eq!(h1.size_for("lg").to_string(), "3.5rem");

        // body inherits its base line height on desktop
        let body = tokens.type_scale_by_name("body").unwrap();
        assert_eq!(body.step_at(1024).line_height, LineHeight::Ratio(1.6));
        assert_eq!(body.step_at(1024).size.to_string(), "1.125rem");
    }

    #[test]
    fn test_navy_on_off_white_measured() {
        let Validated { tokens, warnings } = validate(&brightkeep()).unwrap();
        let navy = tokens.color_by_name("brand-primary").unwrap();
        let pairing = &navy.pairings[0];
        assert_eq!(pairing.background, "brand-surface");
        assert_eq!(pairing.declared_ratio, 14.6);
        assert!((pairing.ratio - 13.49).abs() < 0.01, "{}", pairing.ratio);
        assert_eq!(pairing.level, WcagLevel::Aaa);

        // The annotation overstates the ratio by more than the tolerance.
        let warning = warnings
            .iter()
            .find(|w| w.pairing.foreground == "brand-primary")
            .unwrap();
        assert!(!warning.level_mismatch);
    }

    #[test]
    fn test_contrast_warnings_are_not_fatal() {
        let Validated { warnings, tokens } = validate(&brightkeep()).unwrap();
        assert_eq!(tokens.pairings().count(), 7);
        assert_eq!(warnings.len(), 7);

        let coral_on_white = warnings
            .iter()
            .find(|w| w.pairing.foreground == "brand-accent" && w.pairing.background == "white")
            .unwrap();
        assert!(coral_on_white.level_mismatch);
        assert_eq!(coral_on_white.pairing.level, WcagLevel::Fail);
    }

    #[test]
    fn test_contrast_check_disabled() {
        let mut theme = brightkeep();
        theme.contrast.enable = false;
        let validated = validate(&theme).unwrap();
        assert!(validated.warnings.is_empty());
        assert_eq!(validated.tokens.pairings().count(), 7);
    }

    #[test]
    fn test_duplicate_color_names() {
        let theme = test_parse_config(
            r##"
[[theme.colors]]
name = "primary"
value = "#1B2A4A"

[[theme.colors]]
name = "primary"
value = "#FF6B6B"
"##,
        )
        .theme;
        assert_eq!(
            issues(&theme),
            vec![TokenIssue::Duplicate {
                category: TokenCategory::Color,
                name: "primary".into()
            }]
        );
    }

    #[test]
    fn test_group_and_flat_names_collide() {
        let theme = test_parse_config(
            r##"
[[theme.colors]]
group = "brand"
name = "primary"
value = "#1B2A4A"

[[theme.colors]]
name = "brand-primary"
value = "#1B2A4A"
"##,
        )
        .theme;
        let err = validate(&theme).unwrap_err();
        assert_eq!(err.diagnostics()[0].path, "theme.colors.brand-primary");
    }

    #[test]
    fn test_malformed_hex_fails() {
        for bad in ["#FFF", "#GGGGGG", "1B2A4A", "#1B2A4A00", ""] {
            let mut theme = ThemeSectionConfig::default();
            theme.colors.push(ColorEntry {
                group: None,
                name: "primary".into(),
                value: bad.into(),
                usage: None,
                contrast: Vec::new(),
            });
            let found = issues(&theme);
            assert!(
                matches!(&found[..], [TokenIssue::MalformedHex { value, .. }] if value == bad),
                "{bad}: {found:?}"
            );
        }
    }

    #[test]
    fn test_valid_hex_accepted() {
        for good in ["#000000", "#ffffff", "#1b2A4a", "#0D9488"] {
            let mut theme = ThemeSectionConfig::default();
            theme.colors.push(ColorEntry {
                group: None,
                name: "c".into(),
                value: good.into(),
                usage: None,
                contrast: Vec::new(),
            });
            assert!(validate(&theme).is_ok(), "{good}");
        }
    }

    #[test]
    fn test_breakpoints_out_of_order() {
        let theme = test_parse_config(
            r#"
[[theme.screens]]
name = "md"
min_width = "768px"

[[theme.screens]]
name = "sm"
min_width = "375px"

[[theme.screens]]
name = "tablet"
min_width = "768px"

[[theme.screens]]
name = "wide"
min_width = "90rem"
"#,
        )
        .theme;
        let found = issues(&theme);
        assert_eq!(found.len(), 3);
        assert!(matches!(
            &found[0],
            TokenIssue::BreakpointOrder { min_width: 375, previous, .. } if previous == "md"
        ));
        assert!(matches!(&found[1], TokenIssue::BreakpointOrder { min_width: 768, .. }));
        assert!(matches!(&found[2], TokenIssue::BreakpointUnit { .. }));
    }

    #[test]
    fn test_unknown_breakpoint_and_family() {
        let theme = test_parse_config(
            r#"
[[theme.screens]]
name = "lg"
min_width = "1024px"

[theme.font_family]
sans = ["Inter", "sans-serif"]

[[theme.font_size]]
name = "h1"
family = "serif"
size = "2.25rem"
line_height = "1.2"
weight = 750
screens.xxl = { size = "4rem" }
"#,
        )
        .theme;
        let err = validate(&theme).unwrap_err();
        let found: Vec<_> = err.issues().cloned().collect();
        assert!(found.contains(&TokenIssue::UnknownFontFamily("serif".into())));
        assert!(found.contains(&TokenIssue::FontWeight(750)));
        assert!(found.contains(&TokenIssue::UnknownBreakpoint("xxl".into())));
        assert!(
            err.diagnostics()
                .iter()
                .any(|d| d.path == "theme.font_size.h1.screens.xxl")
        );
    }

    #[test]
    fn test_pairing_unknown_color() {
        let theme = test_parse_config(
            r##"
[[theme.colors]]
name = "navy"
value = "#1B2A4A"

[[theme.colors.contrast]]
on = "cream"
ratio = 14.0
level = "aaa"
"##,
        )
        .theme;
        assert_eq!(issues(&theme), vec![TokenIssue::UnknownColor("cream".into())]);
    }

    #[test]
    fn test_pairing_ratio_out_of_range() {
        let theme = test_parse_config(
            r##"
[[theme.colors]]
name = "navy"
value = "#1B2A4A"

[[theme.colors.contrast]]
on = "white"
ratio = 25.0
level = "aaa"

[[theme.colors.contrast]]
on = "white"
ratio = 0.5
level = "fail"

[[theme.colors]]
name = "white"
value = "#FFFFFF"
"##,
        )
        .theme;
        let err = validate(&theme).unwrap_err();
        assert_eq!(
            err.issues().cloned().collect::<Vec<_>>(),
            vec![TokenIssue::RatioRange(25.0), TokenIssue::RatioRange(0.5)]
        );
        assert!(err.diagnostics().iter().all(|d| d.path == "theme.colors.navy"));
    }

    #[test]
    fn test_pairing_on_malformed_color_reports_once() {
        let theme = test_parse_config(
            r##"
[[theme.colors]]
name = "navy"
value = "#1B2A4A"

[[theme.colors.contrast]]
on = "cream"
ratio = 14.0
level = "aaa"

[[theme.colors]]
name = "cream"
value = "#FFFDD"
"##,
        )
        .theme;
        let found = issues(&theme);
        assert_eq!(found.len(), 1);
        assert!(matches!(found[0], TokenIssue::MalformedHex { .. }));
    }

    #[test]
    fn test_scales_duplicates_and_lengths() {
        let theme = test_parse_config(
            r#"
[[theme.spacing]]
name = "section"
value = "5rem"

[[theme.spacing]]
name = "section"
value = "6rem"

[[theme.border_radius]]
name = "card"
value = "12"
"#,
        )
        .theme;
        let found = issues(&theme);
        assert_eq!(found.len(), 2);
        assert!(matches!(
            &found[0],
            TokenIssue::Duplicate { category: TokenCategory::Spacing, .. }
        ));
        assert!(matches!(&found[1], TokenIssue::MalformedLength { .. }));
    }

    #[test]
    fn test_all_issues_collected() {
        let theme = test_parse_config(
            r##"
[[theme.colors]]
name = "a"
value = "#12"

[[theme.spacing]]
name = ""
value = "1rem"

[theme.font_family]
sans = []
"##,
        )
        .theme;
        let err = validate(&theme).unwrap_err();
        assert_eq!(err.len(), 3);
        assert!(err.to_string().contains("found"));
    }
}
