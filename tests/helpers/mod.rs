//! Shared test fixtures: an in-memory catalog with per-operation call counters.
#![allow(dead_code)]

use admin_select::catalog::{CatalogClient, CatalogError, Category, Manufacturer, Vendor};
use admin_select::localization::Locale;
use admin_select::select::{SelectListBuilder, SelectListCache};
use admin_select::state::AppState;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

fn category(id: i64, name: &str, parent_id: i64, ancestors: &[&str]) -> Category {
    Category {
        id,
        name: name.to_string(),
        parent_id,
        ancestors: ancestors.iter().map(|a| a.to_string()).collect(),
        published: true,
    }
}

/// In-memory [`CatalogClient`] over a small fixed catalog tree:
///
/// ```text
/// Electronics (1)
/// ├── Phones (2)
/// │   ├── Smartphones (4)
/// │   └── Satellite Phones (5)
/// └── Photo (3)
/// ```
#[derive(Default)]
pub struct MockCatalog {
    categories: Vec<Category>,
    manufacturers: Vec<Manufacturer>,
    vendors: Vec<Vendor>,
    fail_next: AtomicBool,
    pub category_search_calls: AtomicUsize,
    pub category_children_calls: AtomicUsize,
    pub category_by_name_calls: AtomicUsize,
    pub category_list_calls: AtomicUsize,
    pub manufacturer_search_calls: AtomicUsize,
    pub manufacturer_list_calls: AtomicUsize,
    pub vendor_search_calls: AtomicUsize,
    pub vendor_list_calls: AtomicUsize,
}

impl MockCatalog {
    pub fn seeded() -> Self {
        Self {
            categories: vec![
                category(1, "Electronics", 0, &[]),
                category(2, "Phones", 1, &["Electronics"]),
                category(3, "Photo", 1, &["Electronics"]),
                category(4, "Smartphones", 2, &["Electronics", "Phones"]),
                category(5, "Satellite Phones", 2, &["Electronics", "Phones"]),
            ],
            manufacturers: vec![
                Manufacturer {
                    id: 10,
                    name: "Acme".to_string(),
                    published: true,
                },
                Manufacturer {
                    id: 11,
                    name: "Acme Deluxe".to_string(),
                    published: false,
                },
                Manufacturer {
                    id: 12,
                    name: "Widgetco".to_string(),
                    published: true,
                },
            ],
            vendors: vec![
                Vendor {
                    id: 20,
                    name: "Northwind".to_string(),
                    active: true,
                },
                Vendor {
                    id: 21,
                    name: "Norrland Trade".to_string(),
                    active: true,
                },
            ],
            ..Self::default()
        }
    }

    /// Make the next catalog call fail with an upstream 503.
    pub fn fail_next_call(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    fn take_failure(&self) -> Result<(), CatalogError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(CatalogError::BadStatus {
                status: 503,
                url: "http://catalog.test/unavailable".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogClient for MockCatalog {
    async fn all_categories(&self, _include_hidden: bool) -> Result<Vec<Category>, CatalogError> {
        self.category_list_calls.fetch_add(1, Ordering::SeqCst);
        self.take_failure()?;
        Ok(self.categories.clone())
    }

    async fn search_categories(
        &self,
        term: &str,
        _include_hidden: bool,
    ) -> Result<Vec<Category>, CatalogError> {
        self.category_search_calls.fetch_add(1, Ordering::SeqCst);
        self.take_failure()?;
        let term = term.to_lowercase();
        Ok(self
            .categories
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&term))
            .cloned()
            .collect())
    }

    async fn child_categories(
        &self,
        parent_id: i64,
        _include_hidden: bool,
    ) -> Result<Vec<Category>, CatalogError> {
        self.category_children_calls.fetch_add(1, Ordering::SeqCst);
        self.take_failure()?;
        Ok(self
            .categories
            .iter()
            .filter(|c| c.parent_id == parent_id)
            .cloned()
            .collect())
    }

    async fn find_category_by_name(&self, name: &str) -> Result<Option<Category>, CatalogError> {
        self.category_by_name_calls.fetch_add(1, Ordering::SeqCst);
        self.take_failure()?;
        Ok(self.categories.iter().find(|c| c.name == name).cloned())
    }

    async fn all_manufacturers(
        &self,
        _include_hidden: bool,
    ) -> Result<Vec<Manufacturer>, CatalogError> {
        self.manufacturer_list_calls.fetch_add(1, Ordering::SeqCst);
        self.take_failure()?;
        Ok(self.manufacturers.clone())
    }

    async fn search_manufacturers(
        &self,
        term: &str,
        include_hidden: bool,
    ) -> Result<Vec<Manufacturer>, CatalogError> {
        self.manufacturer_search_calls.fetch_add(1, Ordering::SeqCst);
        self.take_failure()?;
        let term = term.to_lowercase();
        Ok(self
            .manufacturers
            .iter()
            .filter(|m| m.name.to_lowercase().contains(&term))
            .filter(|m| include_hidden || m.published)
            .cloned()
            .collect())
    }

    async fn all_vendors(&self, _include_hidden: bool) -> Result<Vec<Vendor>, CatalogError> {
        self.vendor_list_calls.fetch_add(1, Ordering::SeqCst);
        self.take_failure()?;
        Ok(self.vendors.clone())
    }

    async fn search_vendors(
        &self,
        term: &str,
        _include_hidden: bool,
    ) -> Result<Vec<Vendor>, CatalogError> {
        self.vendor_search_calls.fetch_add(1, Ordering::SeqCst);
        self.take_failure()?;
        let term = term.to_lowercase();
        Ok(self
            .vendors
            .iter()
            .filter(|v| v.name.to_lowercase().contains(&term))
            .cloned()
            .collect())
    }
}

/// A builder over a fresh seeded catalog. Returns the catalog too so tests
/// can assert call counts.
pub fn seeded_builder() -> (Arc<MockCatalog>, SelectListBuilder) {
    let catalog = Arc::new(MockCatalog::seeded());
    let builder = SelectListBuilder::new(
        catalog.clone(),
        SelectListCache::new(),
        Locale::default(),
    );
    (catalog, builder)
}

/// App state over a fresh seeded catalog, for router-level tests.
pub fn seeded_state() -> (Arc<MockCatalog>, AppState) {
    let catalog = Arc::new(MockCatalog::seeded());
    let state = AppState::new(catalog.clone(), Locale::default());
    (catalog, state)
}
