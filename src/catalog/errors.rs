//! Error types for the catalog service client.

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog returned HTTP {status} for {url}")]
    BadStatus { status: u16, url: String },
    #[error("failed to parse catalog response from {url}")]
    ParseFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("invalid catalog URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error(transparent)]
    RequestFailed(#[from] reqwest::Error),
}
