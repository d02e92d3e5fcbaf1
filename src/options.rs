//! Configuration options for the scraping pipeline.
//!
//! The `Options` struct controls fetch routing and extraction thresholds.
//! Use `Default::default()` for standard settings.

use std::time::Duration;

/// Default intermediary retrieval endpoint.
///
/// The endpoint receives the target URL as a `url` query parameter and
/// answers with a JSON envelope carrying the upstream status code and the
/// raw page body.
pub const DEFAULT_GATEWAY: &str = "https://api.allorigins.win/get";

/// Default HTTP timeout for a fetch.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration options for scraping.
///
/// All fields are public for easy configuration.
///
/// # Example
///
/// ```rust
/// use pagelift::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Fetch the target directly instead of through the gateway
/// let options = Options {
///     gateway: None,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Intermediary retrieval endpoint wrapping the target URL.
    ///
    /// `None` fetches the target directly.
    ///
    /// Default: [`DEFAULT_GATEWAY`]
    pub gateway: Option<String>,

    /// Timeout applied to the HTTP request.
    ///
    /// Default: 30 seconds
    pub timeout: Duration,

    /// User-Agent header sent with the request.
    ///
    /// Default: `pagelift/<version>`
    pub user_agent: String,

    /// Paragraph text at or below this length (in characters, after
    /// trimming) is dropped as noise.
    ///
    /// Default: `10`
    pub min_paragraph_len: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            gateway: Some(DEFAULT_GATEWAY.to_string()),
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("pagelift/", env!("CARGO_PKG_VERSION")).to_string(),
            min_paragraph_len: 10,
        }
    }
}
