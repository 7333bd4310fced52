//! Resource-string lookup for UI labels.
//!
//! Ships with built-in English defaults; deployments override them with a
//! JSON object file pointed at by `LOCALE_FILE`.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

/// Resource key for the "no selection" dropdown entry.
pub const NONE_KEY: &str = "admin.common.none";

#[derive(Debug, Clone)]
pub struct Locale {
    resources: HashMap<String, String>,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            resources: builtin(),
        }
    }
}

fn builtin() -> HashMap<String, String> {
    [(NONE_KEY, "None")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl Locale {
    /// Load overrides from a JSON object file on top of the built-in defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read locale file {}", path.display()))?;
        let overrides: HashMap<String, String> = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid locale file {}", path.display()))?;

        let mut resources = builtin();
        resources.extend(overrides);
        Ok(Self { resources })
    }

    /// Resolve a resource key, falling back to the key itself when unknown.
    pub fn resource<'a>(&'a self, key: &'a str) -> &'a str {
        self.resources.get(key).map(String::as_str).unwrap_or(key)
    }
}
