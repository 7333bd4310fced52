//! The (label, value) pair a dropdown option is made of.

use serde::{Deserialize, Serialize};

/// One dropdown option.
///
/// Immutable once constructed. There is deliberately no `selected` field:
/// cached lists are shared, and presentation state on shared instances is how
/// the cache gets tainted. Callers that need selection wrap the item instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub label: String,
    /// Stringified entity id; `"0"` for the placeholder.
    pub value: String,
}

impl ListItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}
