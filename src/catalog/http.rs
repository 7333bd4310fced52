//! HTTP implementation of [`CatalogClient`].
//!
//! Talks JSON to the catalog service under a configurable base URL:
//!
//! - `GET /categories?term=&include_hidden=` (omit `term` for the full list)
//! - `GET /categories/children?parent_id=&include_hidden=`
//! - `GET /categories/by-name?name=` (zero-or-one element array)
//! - `GET /manufacturers?term=&include_hidden=`
//! - `GET /vendors?term=&include_hidden=`

use crate::catalog::CatalogClient;
use crate::catalog::errors::CatalogError;
use crate::catalog::models::{Category, Manufacturer, Vendor};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::trace;
use url::Url;

pub struct HttpCatalog {
    http: reqwest::Client,
    base: Url,
}

impl HttpCatalog {
    pub fn new(base: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("admin-select/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, base })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, CatalogError> {
        let mut url = self.base.join(path)?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        trace!(url = %url, "catalog request");

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::BadStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| CatalogError::ParseFailed {
                url: url.to_string(),
                source,
            })
    }
}

fn flag(include_hidden: bool) -> &'static str {
    if include_hidden { "true" } else { "false" }
}

#[async_trait]
impl CatalogClient for HttpCatalog {
    async fn all_categories(&self, include_hidden: bool) -> Result<Vec<Category>, CatalogError> {
        self.get_json("categories", &[("include_hidden", flag(include_hidden))])
            .await
    }

    async fn search_categories(
        &self,
        term: &str,
        include_hidden: bool,
    ) -> Result<Vec<Category>, CatalogError> {
        self.get_json(
            "categories",
            &[("term", term), ("include_hidden", flag(include_hidden))],
        )
        .await
    }

    async fn child_categories(
        &self,
        parent_id: i64,
        include_hidden: bool,
    ) -> Result<Vec<Category>, CatalogError> {
        self.get_json(
            "categories/children",
            &[
                ("parent_id", &parent_id.to_string()),
                ("include_hidden", flag(include_hidden)),
            ],
        )
        .await
    }

    async fn find_category_by_name(&self, name: &str) -> Result<Option<Category>, CatalogError> {
        let matches: Vec<Category> = self
            .get_json("categories/by-name", &[("name", name)])
            .await?;
        Ok(matches.into_iter().next())
    }

    async fn all_manufacturers(
        &self,
        include_hidden: bool,
    ) -> Result<Vec<Manufacturer>, CatalogError> {
        self.get_json("manufacturers", &[("include_hidden", flag(include_hidden))])
            .await
    }

    async fn search_manufacturers(
        &self,
        term: &str,
        include_hidden: bool,
    ) -> Result<Vec<Manufacturer>, CatalogError> {
        self.get_json(
            "manufacturers",
            &[("term", term), ("include_hidden", flag(include_hidden))],
        )
        .await
    }

    async fn all_vendors(&self, include_hidden: bool) -> Result<Vec<Vendor>, CatalogError> {
        self.get_json("vendors", &[("include_hidden", flag(include_hidden))])
            .await
    }

    async fn search_vendors(
        &self,
        term: &str,
        include_hidden: bool,
    ) -> Result<Vec<Vendor>, CatalogError> {
        self.get_json(
            "vendors",
            &[("term", term), ("include_hidden", flag(include_hidden))],
        )
        .await
    }
}
