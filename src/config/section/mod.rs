//! Configuration section definitions.
//!
//! Each module corresponds to a section in `brightkeep.toml`:
//!
//! | Module  | TOML Section | Purpose                                   |
//! |---------|--------------|-------------------------------------------|
//! | `build` | `[build]`    | Output mode, site URL, integrations       |
//! | `theme` | `[theme]`    | Raw design tokens and contrast settings   |

pub mod build;
pub mod theme;

pub use build::BuildSectionConfig;
pub use theme::{
    ColorEntry, ContrastConfig, FontSizeEntry, LengthEntry, PairingEntry, ScreenEntry, StepEntry,
    ThemeSectionConfig,
};
