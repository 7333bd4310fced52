//! Wire models returned by the catalog service.

use serde::{Deserialize, Serialize};

/// Separator between levels in a category breadcrumb, both for display and
/// when a typeahead widget echoes a breadcrumb back as the search term.
pub const BREADCRUMB_SEPARATOR: &str = ">>";

/// A category node.
///
/// `ancestors` carries the display names of the full parent chain, root
/// first, so breadcrumbs can be formatted without further catalog calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub parent_id: i64,
    #[serde(default)]
    pub ancestors: Vec<String>,
    #[serde(default)]
    pub published: bool,
}

impl Category {
    /// `Ancestors >> ... >> Name` display string.
    pub fn breadcrumb(&self) -> String {
        if self.ancestors.is_empty() {
            return self.name.clone();
        }
        let mut parts = self.ancestors.clone();
        parts.push(self.name.clone());
        parts.join(&format!(" {BREADCRUMB_SEPARATOR} "))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manufacturer {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vendor {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub active: bool,
}
