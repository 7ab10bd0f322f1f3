//! Environment sources for build options.

use std::collections::HashMap;
use std::hash::BuildHasher;

/// Environment variable overriding the canonical site URL.
pub const SITE_URL_VAR: &str = "PUBLIC_SITE_URL";

/// A read-only, environment-variable-like mapping.
pub trait Env {
    /// Look up a variable. `None` when unset.
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Env for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl<S: BuildHasher> Env for HashMap<String, String, S> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Read a variable, treating empty and whitespace-only values as unset.
///
/// A set value is returned exactly as stored.
pub fn non_empty_var(env: &impl Env, key: &str) -> Option<String> {
    env.var(key).filter(|value| !value.trim().is_empty())
}
