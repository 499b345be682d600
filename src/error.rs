use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: StatusCode },

    /// The page came back but had no product cards; usually the markup changed.
    #[error("no product containers found for query {query:?}")]
    NoProducts { query: String },
}
