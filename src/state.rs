//! Application state shared across web handlers.

use crate::catalog::CatalogClient;
use crate::localization::Locale;
use crate::select::{SelectListBuilder, SelectListCache};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub select_lists: Arc<SelectListBuilder>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogClient>, locale: Locale) -> Self {
        Self {
            select_lists: Arc::new(SelectListBuilder::new(
                catalog,
                SelectListCache::new(),
                locale,
            )),
        }
    }
}
