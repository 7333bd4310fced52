//! Select-list building for admin typeahead dropdowns.

pub mod breadcrumb;
pub mod builder;
pub mod cache;
pub mod item;

pub use builder::SelectListBuilder;
pub use cache::SelectListCache;
pub use item::ListItem;

use std::fmt;

/// The dropdown domain being searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Category,
    Manufacturer,
    Vendor,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Category => "category",
            EntityKind::Manufacturer => "manufacturer",
            EntityKind::Vendor => "vendor",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
