//! CSS custom properties for the design tokens.

use crate::tokens::{DesignTokenSet, TypeStep};
use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use std::fmt::Write;

/// `:root` variables, then one `@media (min-width)` block per breakpoint
/// that changes the type scale.
pub fn stylesheet(tokens: &DesignTokenSet) -> String {
    let mut out = String::from(":root {\n");

    for color in tokens.colors() {
        var(&mut out, 1, &format!("color-{}", color.name), &color.value.to_string());
    }
    for family in tokens.font_families() {
        var(&mut out, 1, &format!("font-{}", family.name), &family.css_value());
    }
    for entry in tokens.type_scale() {
        type_vars(&mut out, 1, &entry.name, &entry.base);
        var(
            &mut out,
            1,
            &format!("text-{}--font-weight", entry.name),
            &entry.weight.to_string(),
        );
    }
    for t in tokens.spacing() {
        var(&mut out, 1, &format!("spacing-{}", t.name), &t.value.to_string());
    }
    for t in tokens.max_width() {
        var(&mut out, 1, &format!("max-width-{}", t.name), &t.value.to_string());
    }
    for t in tokens.border_radius() {
        var(&mut out, 1, &format!("radius-{}", t.name), &t.value.to_string());
    }
    out.push_str("}\n");

    for breakpoint in tokens.breakpoints_ascending() {
        let overrides: Vec<_> = tokens
            .type_scale()
            .iter()
            .filter_map(|entry| {
                entry
                    .responsive
                    .iter()
                    .find(|r| r.breakpoint == breakpoint.name)
                    .map(|r| (entry.name.as_str(), &r.step))
            })
            .collect();
        if overrides.is_empty() {
            continue;
        }

        let _ = writeln!(out, "\n@media (min-width: {}px) {{\n  :root {{", breakpoint.min_width);
        for (name, step) in overrides {
            type_vars(&mut out, 2, name, step);
        }
        out.push_str("  }\n}\n");
    }
    out
}

fn type_vars(out: &mut String, depth: usize, name: &str, step: &TypeStep) {
    var(out, depth, &format!("text-{name}"), &step.size.to_string());
    var(
        out,
        depth,
        &format!("text-{name}--line-height"),
        &step.line_height.to_string(),
    );
}

fn var(out: &mut String, depth: usize, name: &str, value: &str) {
    let _ = writeln!(out, "{:indent$}--{name}: {value};", "", indent = depth * 2);
}

/// Minify CSS source code.
pub fn minify(source: &str) -> Option<String> {
    let stylesheet = StyleSheet::parse(source, ParserOptions::default()).ok()?;
    let result = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .ok()?;
    Some(result.code)
}
