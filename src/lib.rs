//! Admin search-select service: cached typeahead lists for the store back office.
//!
//! Select2-style admin widgets post a partial search term and get back a short
//! JSON list of `{label, value}` pairs for categories, manufacturers, or
//! vendors. Lists are built cache-aside against the external catalog service.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod localization;
pub mod logging;
pub mod select;
pub mod state;
pub mod web;
