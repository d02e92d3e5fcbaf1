//! Page retrieval.
//!
//! One outbound HTTP GET per pipeline run, no retries. By default the
//! request is routed through an intermediary retrieval service that wraps
//! the target URL and answers with a JSON envelope (upstream status code +
//! raw body); with no gateway configured the target is fetched directly and
//! its bytes are transcoded to UTF-8.
//!
//! Cancellation is by dropping the future: the pipeline awaits the fetch
//! before any parsing, so no extraction runs against an abandoned request.

use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::encoding;
use crate::error::{Error, Result};
use crate::options::Options;

/// JSON wrapper returned by the intermediary retrieval service.
#[derive(Debug, Deserialize)]
struct Envelope {
    status: EnvelopeStatus,
    contents: String,
}

/// Status metadata inside the envelope.
#[derive(Debug, Deserialize)]
struct EnvelopeStatus {
    http_code: u16,
}

/// Fetch the page HTML for a target URL according to the options.
pub(crate) async fn fetch_page(url: &str, options: &Options) -> Result<String> {
    let client = build_client(options)?;

    match options.gateway.as_deref() {
        Some(endpoint) => fetch_via_gateway(&client, endpoint, url).await,
        None => fetch_direct(&client, url).await,
    }
}

fn build_client(options: &Options) -> Result<Client> {
    Client::builder()
        .user_agent(options.user_agent.clone())
        .timeout(options.timeout)
        .build()
        .map_err(|err| Error::Network(err.to_string()))
}

/// Build the gateway request URL with the target passed URL-encoded in the
/// `url` query parameter.
fn gateway_request_url(endpoint: &str, target: &str) -> Result<Url> {
    let mut request =
        Url::parse(endpoint).map_err(|_| Error::InvalidUrl(endpoint.to_string()))?;
    request.query_pairs_mut().append_pair("url", target);
    Ok(request)
}

/// Unwrap a gateway envelope into the page body.
///
/// A malformed envelope is a failure of the retrieval service itself and
/// maps to [`Error::Network`]; a non-success upstream code maps to
/// [`Error::Fetch`].
fn page_from_envelope(body: &str) -> Result<String> {
    let envelope: Envelope = serde_json::from_str(body)
        .map_err(|err| Error::Network(format!("malformed retrieval envelope: {err}")))?;

    let status = envelope.status.http_code;
    if !(200..300).contains(&status) {
        return Err(Error::Fetch { status });
    }

    Ok(envelope.contents)
}

async fn fetch_via_gateway(client: &Client, endpoint: &str, target: &str) -> Result<String> {
    let request = gateway_request_url(endpoint, target)?;
    tracing::debug!(%request, "fetching through retrieval gateway");

    let response = client
        .get(request)
        .send()
        .await
        .map_err(|err| Error::Network(err.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Network(format!(
            "retrieval service returned HTTP {}",
            status.as_u16()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|err| Error::Network(err.to_string()))?;

    let html = page_from_envelope(&body)?;
    tracing::info!(url = target, bytes = html.len(), "page fetched via gateway");
    Ok(html)
}

async fn fetch_direct(client: &Client, target: &str) -> Result<String> {
    tracing::debug!(url = target, "fetching target directly");

    let response = client
        .get(target)
        .send()
        .await
        .map_err(|err| Error::Network(err.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Fetch {
            status: status.as_u16(),
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|err| Error::Network(err.to_string()))?;

    tracing::info!(url = target, bytes = body.len(), "page fetched directly");
    Ok(encoding::transcode_to_utf8(&body))
}
