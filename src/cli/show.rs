//! `show`: print the resolved site.

use anyhow::Result;
use owo_colors::OwoColorize;
use serde_json::{Value, json};
use std::path::Path;

use super::common::load_site;
use crate::site::Site;

pub fn run(config: Option<&Path>, site_url: Option<&str>, as_json: bool) -> Result<()> {
    let (_, site) = load_site(config, site_url)?;
    if as_json {
        println!("{}", serde_json::to_string_pretty(&site_json(&site))?);
    } else {
        print!("{}", summary(&site));
    }
    Ok(())
}

fn site_json(site: &Site) -> Value {
    let options = &site.options;
    json!({
        "build": {
            "output": options.output(),
            "site": options.site(),
            "path_prefix": options.path_prefix(),
            "integrations": options.integrations(),
            "out_dir": options.out_dir(),
        },
        "tokens": site.tokens,
        "warnings": site.warnings,
    })
}

fn summary(site: &Site) -> String {
    let options = &site.options;
    let tokens = &site.tokens;
    let mut out = String::new();

    let integrations: Vec<_> = options.integrations().iter().map(|i| i.as_str()).collect();
    out.push_str(&format!("{}\n", "build".bold()));
    out.push_str(&format!("  output        {}\n", options.output()));
    out.push_str(&format!("  site          {}\n", options.site()));
    out.push_str(&format!("  integrations  {}\n", integrations.join(", ")));
    out.push_str(&format!("  out_dir       {}\n", options.out_dir().display()));

    out.push_str(&format!("\n{}\n", "screens".bold()));
    for b in tokens.breakpoints_ascending() {
        out.push_str(&format!("  {:<14}{}px\n", b.name, b.min_width));
    }

    out.push_str(&format!("\n{}\n", "colors".bold()));
    for c in tokens.colors() {
        out.push_str(&format!("  {:<18}{}", c.name, c.value));
        if let Some(usage) = &c.usage {
            out.push_str(&format!("  {}", usage.dimmed()));
        }
        out.push('\n');
        for p in &c.pairings {
            out.push_str(&format!("    on {:<15}{:>6.2}:1  {}\n", p.background, p.ratio, p.level));
        }
    }

    out.push_str(&format!("\n{}\n", "type scale".bold()));
    for t in tokens.type_scale() {
        out.push_str(&format!(
            "  {:<8}{:<10}{:<6}{} {}\n",
            t.name,
            t.base.size.to_string(),
            t.base.line_height.to_string(),
            t.weight,
            t.family
        ));
        for r in &t.responsive {
            out.push_str(&format!(
                "    {:<6}{:<10}{}\n",
                r.breakpoint,
                r.step.size.to_string(),
                r.step.line_height
            ));
        }
    }
    out
}
