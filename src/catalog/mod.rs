//! Client for the external catalog/directory service.
//!
//! The admin area does not own catalog data; it reads it over HTTP. The
//! [`CatalogClient`] trait is the seam the select-list builder works against,
//! with [`HttpCatalog`] as the production implementation and mocks in tests.

pub mod errors;
pub mod http;
pub mod models;

pub use errors::CatalogError;
pub use http::HttpCatalog;
pub use models::{Category, Manufacturer, Vendor};

use async_trait::async_trait;

/// Read-only operations the select-list builder needs from the catalog.
///
/// `include_hidden` controls whether unpublished/inactive records are
/// returned; the admin area always asks for them.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// All categories, in catalog display order.
    async fn all_categories(&self, include_hidden: bool) -> Result<Vec<Category>, CatalogError>;

    /// Categories whose name matches `term`, across all hierarchy levels.
    async fn search_categories(
        &self,
        term: &str,
        include_hidden: bool,
    ) -> Result<Vec<Category>, CatalogError>;

    /// Direct children of the given category.
    async fn child_categories(
        &self,
        parent_id: i64,
        include_hidden: bool,
    ) -> Result<Vec<Category>, CatalogError>;

    /// Exact-name category lookup. Zero or one result.
    async fn find_category_by_name(&self, name: &str) -> Result<Option<Category>, CatalogError>;

    /// All manufacturers.
    async fn all_manufacturers(
        &self,
        include_hidden: bool,
    ) -> Result<Vec<Manufacturer>, CatalogError>;

    /// Manufacturers whose name matches `term`.
    async fn search_manufacturers(
        &self,
        term: &str,
        include_hidden: bool,
    ) -> Result<Vec<Manufacturer>, CatalogError>;

    /// All vendors.
    async fn all_vendors(&self, include_hidden: bool) -> Result<Vec<Vendor>, CatalogError>;

    /// Vendors whose name matches `term`.
    async fn search_vendors(
        &self,
        term: &str,
        include_hidden: bool,
    ) -> Result<Vec<Vendor>, CatalogError>;
}
