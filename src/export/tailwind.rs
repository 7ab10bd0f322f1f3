//! Tailwind `theme` object.
//!
//! Breakpoints replace Tailwind's defaults; everything else goes under
//! `theme.extend` so the stock palette and scales stay available.

use crate::tokens::{DesignTokenSet, LengthToken, TypeStep};
use serde_json::{Map, Value, json};

/// Tailwind config fragment: `{ content, theme: { screens, extend } }`.
pub fn theme_json(tokens: &DesignTokenSet) -> Value {
    json!({
        "content": tokens.content(),
        "theme": {
            "screens": screens(tokens),
            "extend": {
                "colors": colors(tokens),
                "fontFamily": font_family(tokens),
                "fontSize": font_size(tokens),
                "spacing": lengths(tokens.spacing()),
                "maxWidth": lengths(tokens.max_width()),
                "borderRadius": lengths(tokens.border_radius())
            }
        }
    })
}

fn screens(tokens: &DesignTokenSet) -> Map<String, Value> {
    tokens
        .breakpoints_ascending()
        .iter()
        .map(|b| (b.name.clone(), Value::String(format!("{}px", b.min_width))))
        .collect()
}

/// Grouped colors nest: `brand-primary` becomes `colors.brand.primary`.
fn colors(tokens: &DesignTokenSet) -> Map<String, Value> {
    let mut out = Map::new();
    for color in tokens.colors() {
        let value = Value::String(color.value.to_string());
        match &color.group {
            Some(group) => {
                let entry = out
                    .entry(group.clone())
                    .or_insert_with(|| Value::Object(Map::new()));
                if let Value::Object(members) = entry {
                    members.insert(color.local_name.clone(), value);
                }
            }
            None => {
                out.insert(color.name.clone(), value);
            }
        }
    }
    out
}

fn font_family(tokens: &DesignTokenSet) -> Map<String, Value> {
    tokens
        .font_families()
        .iter()
        .map(|f| (f.name.clone(), json!(f.stack)))
        .collect()
}

/// `h1` plus one `h1-<breakpoint>` entry per responsive step.
fn font_size(tokens: &DesignTokenSet) -> Map<String, Value> {
    let mut out = Map::new();
    for entry in tokens.type_scale() {
        let weight = entry.weight.to_string();
        out.insert(entry.name.clone(), step(&entry.base, &weight));
        for responsive in &entry.responsive {
            out.insert(
                format!("{}-{}", entry.name, responsive.breakpoint),
                step(&responsive.step, &weight),
            );
        }
    }
    out
}

fn step(step: &TypeStep, weight: &str) -> Value {
    json!([
        step.size.to_string(),
        { "lineHeight": step.line_height.to_string(), "fontWeight": weight }
    ])
}

fn lengths(tokens: &[LengthToken]) -> Map<String, Value> {
    tokens
        .iter()
        .map(|t| (t.name.clone(), Value::String(t.value.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::tokens::validate;

    fn brightkeep() -> Value {
        let config = SiteConfig::embedded().unwrap();
        theme_json(&validate(&config.theme).unwrap().tokens)
    }

    #[test]
    fn test_type_scale_entries() {
        let json = brightkeep();
        let font_size = &json["theme"]["extend"]["fontSize"];
        assert_eq!(
            font_size["h1"],
            json!(["2.25rem", { "lineHeight": "1.2", "fontWeight": "700" }])
        );
        assert_eq!(
            font_size["h1-lg"],
            json!(["3.5rem", { "lineHeight": "1.1", "fontWeight": "700" }])
        );
        assert_eq!(
            font_size["body-lg"],
            json!(["1.125rem", { "lineHeight": "1.6", "fontWeight": "400" }])
        );
        assert!(font_size.get("small-lg").is_none());
        assert_eq!(font_size.as_object().unwrap().len(), 11);
    }

    #[test]
    fn test_grouped_colors_nest() {
        let json = brightkeep();
        let colors = &json["theme"]["extend"]["colors"];
        assert_eq!(colors["brand"]["primary"], "#1B2A4A");
        assert_eq!(colors["brand"]["muted"], "#6B7280");
        assert_eq!(colors["white"], "#FFFFFF");
    }

    #[test]
    fn test_screens_replace_defaults() {
        let json = brightkeep();
        let screens = json["theme"]["screens"].as_object().unwrap();
        let keys: Vec<_> = screens.keys().map(String::as_str).collect();
        assert_eq!(keys, ["sm", "md", "lg", "xl"]);
        assert_eq!(screens["xl"], "1440px");
        assert!(json["theme"]["extend"].get("screens").is_none());
    }

    #[test]
    fn test_scales_and_content() {
        let json = brightkeep();
        let extend = &json["theme"]["extend"];
        assert_eq!(extend["spacing"]["section-lg"], "7rem");
        assert_eq!(extend["maxWidth"]["content"], "1200px");
        assert_eq!(extend["borderRadius"]["card"], "0.75rem");
        assert_eq!(extend["fontFamily"]["mono"], json!(["JetBrains Mono", "monospace"]));
        assert_eq!(
            json["content"],
            json!(["./src/**/*.{astro,html,js,jsx,md,mdx,svelte,ts,tsx,vue}"])
        );
    }
}
