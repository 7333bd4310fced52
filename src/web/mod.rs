//! Web API module for the admin select service.

pub mod error;
pub mod routes;
pub mod search_select;
pub mod status;

pub use routes::*;
