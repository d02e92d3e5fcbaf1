//! Error types for pagelift.
//!
//! This module defines the error types returned by the scraping pipeline.

/// Error type for scraping operations.
///
/// Every error aborts the pipeline immediately; there is no partial
/// [`ScrapeResult`](crate::ScrapeResult). Malformed HTML is not an error
/// condition - the parser recovers and extraction proceeds on whatever
/// structure is left.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No URL was provided before the fetch.
    #[error("no URL provided")]
    MissingInput,

    /// Transport-level failure reaching the retrieval service or target,
    /// including a malformed gateway envelope.
    #[error("network request failed: {0}")]
    Network(String),

    /// The retrieval succeeded at transport level, but the target page
    /// fetch reported a non-success HTTP status.
    #[error("page fetch returned HTTP status {status}")]
    Fetch {
        /// HTTP status code reported for the target page.
        status: u16,
    },

    /// The page URL (or configured gateway endpoint) cannot be parsed
    /// for origin resolution.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Result type alias for scraping operations.
pub type Result<T> = std::result::Result<T, Error>;
