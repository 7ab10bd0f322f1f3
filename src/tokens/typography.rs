//! Font families and the responsive type scale.

use super::{Length, LineHeight};
use serde::Serialize;

/// A named font stack, most preferred first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontFamily {
    pub name: String,
    pub stack: Vec<String>,
}

impl FontFamily {
    /// CSS `font-family` value; names containing spaces are quoted.
    pub fn css_value(&self) -> String {
        self.stack
            .iter()
            .map(|font| {
                if font.contains(char::is_whitespace) {
                    format!("\"{font}\"")
                } else {
                    font.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Size and line height at one point of the scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TypeStep {
    pub size: Length,
    pub line_height: LineHeight,
}

/// A step that applies from a breakpoint upward.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponsiveStep {
    pub breakpoint: String,
    pub min_width: u32,
    #[serde(flatten)]
    pub step: TypeStep,
}

/// A named entry of the type scale (`h1`, `body`, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeScaleEntry {
    pub name: String,
    pub family: String,
    pub weight: u16,
    pub base: TypeStep,
    /// Overrides in ascending breakpoint order.
    pub responsive: Vec<ResponsiveStep>,
}

impl TypeScaleEntry {
    /// Step in effect at a viewport width, mobile-first.
    pub fn step_at(&self, viewport_px: u32) -> &TypeStep {
        self.responsive
            .iter()
            .rev()
            .find(|r| r.min_width <= viewport_px)
            .map_or(&self.base, |r| &r.step)
    }

    /// Size declared for a breakpoint name, or the base size when the entry
    /// has no override there.
    pub fn size_for(&self, breakpoint: &str) -> Length {
        self.responsive
            .iter()
            .find(|r| r.breakpoint == breakpoint)
            .map_or(self.base.size, |r| r.step.size)
    }
}
