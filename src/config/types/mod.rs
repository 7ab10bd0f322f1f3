//! Configuration utility types.
//!
//! | Module   | Purpose                                          |
//! |----------|--------------------------------------------------|
//! | `error`  | `ConfigError` and collected diagnostics          |
//! | `field`  | Field paths generated by `#[derive(Config)]`     |
//! | `handle` | Process-wide, set-once `Site` handle             |

mod error;
mod field;
pub mod handle;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub(crate) use error::{write_located, write_report};
pub use field::FieldPath;
pub use handle::{init_site, site};
