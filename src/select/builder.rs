//! Cache-aside construction of admin select lists.
//!
//! Every live-search result starts from a synthetic "None" placeholder so the
//! widget always has a no-selection option. The placeholder leads when it is
//! the only entry and trails when real matches are present, so matches surface
//! first while typing. Returned lists are fresh clones of the cached items;
//! whatever a consumer does to them never reaches the cache.

use crate::catalog::{CatalogClient, CatalogError, Category};
use crate::localization::{Locale, NONE_KEY};
use crate::select::EntityKind;
use crate::select::breadcrumb::parse_term;
use crate::select::cache::{CacheKey, SEARCH_TTL, SelectListCache};
use crate::select::item::ListItem;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Minimum trimmed term length before any cache or catalog access happens.
const MIN_TERM_CHARS: usize = 2;

/// Builds (and caches) the `{label, value}` lists behind the admin typeahead
/// endpoints. One instance is shared process-wide via [`crate::state::AppState`].
pub struct SelectListBuilder {
    catalog: Arc<dyn CatalogClient>,
    cache: SelectListCache,
    locale: Locale,
}

impl SelectListBuilder {
    pub fn new(catalog: Arc<dyn CatalogClient>, cache: SelectListCache, locale: Locale) -> Self {
        Self {
            catalog,
            cache,
            locale,
        }
    }

    fn placeholder(&self) -> ListItem {
        ListItem::new(self.locale.resource(NONE_KEY), "0")
    }

    /// The list returned when nothing can be searched: just the placeholder.
    pub fn placeholder_only(&self) -> Vec<ListItem> {
        vec![self.placeholder()]
    }

    /// Live-search entry point for the typeahead endpoints.
    pub async fn search(
        &self,
        kind: EntityKind,
        term: &str,
        include_hidden: bool,
    ) -> Result<Vec<ListItem>, CatalogError> {
        match kind {
            EntityKind::Category => self.search_categories(term, include_hidden).await,
            EntityKind::Manufacturer | EntityKind::Vendor => {
                self.search_by_name(kind, term, include_hidden).await
            }
        }
    }

    /// Flat name search for manufacturers and vendors.
    async fn search_by_name(
        &self,
        kind: EntityKind,
        term: &str,
        include_hidden: bool,
    ) -> Result<Vec<ListItem>, CatalogError> {
        let mut items = self.placeholder_only();

        let term = term.trim();
        if term.chars().count() < MIN_TERM_CHARS {
            return Ok(items);
        }

        let key = CacheKey::new(kind, format!("term:{term}"));
        let matches = self
            .get_or_fetch(key, Some(SEARCH_TTL), || async {
                Ok(match kind {
                    EntityKind::Manufacturer => self
                        .catalog
                        .search_manufacturers(term, include_hidden)
                        .await?
                        .into_iter()
                        .map(|m| ListItem::new(m.name, m.id.to_string()))
                        .collect(),
                    EntityKind::Vendor => self
                        .catalog
                        .search_vendors(term, include_hidden)
                        .await?
                        .into_iter()
                        .map(|v| ListItem::new(v.name, v.id.to_string()))
                        .collect(),
                    // Categories go through `search_categories` for breadcrumb handling.
                    EntityKind::Category => Vec::new(),
                })
            })
            .await?;

        items.extend(matches.iter().cloned());
        Ok(demote_placeholder(items))
    }

    /// Category search with breadcrumb awareness.
    ///
    /// A term without a separator (or with a searchable leaf) matches names
    /// across all hierarchy levels. A term ending in `>>` drills into the
    /// children of the named parent; a leaf after the separator narrows those
    /// children by case-sensitive name prefix. An unknown parent is a normal
    /// no-match outcome, not an error.
    async fn search_categories(
        &self,
        term: &str,
        include_hidden: bool,
    ) -> Result<Vec<ListItem>, CatalogError> {
        let mut items = self.placeholder_only();

        if term.trim().chars().count() < MIN_TERM_CHARS {
            return Ok(items);
        }

        let query = parse_term(term);
        let leaf_searchable = query.leaf.chars().count() >= MIN_TERM_CHARS;

        let matches = if query.parent.is_empty() {
            if !leaf_searchable {
                return Ok(items);
            }
            // Name search across all levels, hierarchy ignored.
            let key = CacheKey::new(EntityKind::Category, format!("term:{}", query.leaf));
            self.get_or_fetch(key, Some(SEARCH_TTL), || async {
                let categories = self
                    .catalog
                    .search_categories(&query.leaf, include_hidden)
                    .await?;
                Ok(breadcrumb_items(categories))
            })
            .await?
        } else {
            let Some(parent) = self.catalog.find_category_by_name(&query.parent).await? else {
                debug!(parent = %query.parent, "breadcrumb parent not found");
                return Ok(items);
            };

            if query.leaf.is_empty() {
                // All direct children of the right-most breadcrumb term.
                let key = CacheKey::new(EntityKind::Category, format!("parent-id:{}", parent.id));
                self.get_or_fetch(key, Some(SEARCH_TTL), || async {
                    let children = self
                        .catalog
                        .child_categories(parent.id, include_hidden)
                        .await?;
                    Ok(breadcrumb_items(children))
                })
                .await?
            } else {
                // Children of the parent narrowed by the typed leaf prefix.
                let key =
                    CacheKey::new(EntityKind::Category, format!("parent-name:{}", query.parent));
                self.get_or_fetch(key, Some(SEARCH_TTL), || async {
                    let children = self
                        .catalog
                        .child_categories(parent.id, include_hidden)
                        .await?;
                    Ok(breadcrumb_items(
                        children
                            .into_iter()
                            .filter(|c| c.name.starts_with(&query.leaf))
                            .collect(),
                    ))
                })
                .await?
            }
        };

        items.extend(matches.iter().cloned());
        Ok(demote_placeholder(items))
    }

    /// Full entity list for static (non-search) dropdowns.
    ///
    /// No placeholder injection, cached without expiry keyed by visibility;
    /// invalidation happens externally when the catalog changes.
    pub async fn full_list(
        &self,
        kind: EntityKind,
        include_hidden: bool,
    ) -> Result<Vec<ListItem>, CatalogError> {
        let key = CacheKey::new(kind, format!("all:{include_hidden}"));
        let cached = self
            .get_or_fetch(key, None, || async {
                Ok(match kind {
                    EntityKind::Category => {
                        breadcrumb_items(self.catalog.all_categories(include_hidden).await?)
                    }
                    EntityKind::Manufacturer => self
                        .catalog
                        .all_manufacturers(include_hidden)
                        .await?
                        .into_iter()
                        .map(|m| ListItem::new(m.name, m.id.to_string()))
                        .collect(),
                    EntityKind::Vendor => self
                        .catalog
                        .all_vendors(include_hidden)
                        .await?
                        .into_iter()
                        .map(|v| ListItem::new(v.name, v.id.to_string()))
                        .collect(),
                })
            })
            .await?;

        Ok(cached.iter().cloned().collect())
    }

    /// Cache-aside read: return the fresh cached list, or run `fetch`, store
    /// the result, and return it. On fetch failure nothing is cached and the
    /// error propagates to the caller.
    async fn get_or_fetch<F, Fut>(
        &self,
        key: CacheKey,
        ttl: Option<Duration>,
        fetch: F,
    ) -> Result<Arc<Vec<ListItem>>, CatalogError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<ListItem>, CatalogError>>,
    {
        if let Some(cached) = self.cache.get(&key) {
            debug!(key = %key, "select list cache hit");
            return Ok(cached);
        }

        if !self.cache.try_claim(&key) {
            // Another request is building this list -- build it too rather
            // than wait. (Singleflight is best-effort, not strict.)
        }

        match fetch().await {
            Ok(built) => {
                let value = Arc::new(built);
                self.cache.insert(key.clone(), value.clone(), ttl);
                self.cache.release(&key);
                Ok(value)
            }
            Err(e) => {
                self.cache.release(&key);
                Err(e)
            }
        }
    }
}

/// Map categories to items labeled with their formatted breadcrumb.
fn breadcrumb_items(categories: Vec<Category>) -> Vec<ListItem> {
    categories
        .into_iter()
        .map(|c| ListItem::new(c.breadcrumb(), c.id.to_string()))
        .collect()
}

/// Move the leading placeholder to the end once real matches are present.
fn demote_placeholder(mut items: Vec<ListItem>) -> Vec<ListItem> {
    if items.len() > 1 {
        let placeholder = items.remove(0);
        items.push(placeholder);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_item_lists_keep_the_placeholder_first() {
        let items = vec![ListItem::new("None", "0")];
        let items = demote_placeholder(items);
        assert_eq!(items[0].value, "0");
    }

    #[test]
    fn placeholder_moves_behind_real_matches() {
        let items = vec![
            ListItem::new("None", "0"),
            ListItem::new("Phones", "7"),
            ListItem::new("Photo", "9"),
        ];
        let items = demote_placeholder(items);
        assert_eq!(
            items.iter().map(|i| i.value.as_str()).collect::<Vec<_>>(),
            ["7", "9", "0"]
        );
    }
}
