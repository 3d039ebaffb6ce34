//! HTTP client creation and conditional requests for feeds.

use anyhow::Result;
use reqwest::header;
use tokio::time::timeout;
use tracing::debug;

use super::types::{FetchedPage, REQUEST_TIMEOUT};
use crate::TARGET_WEB_REQUEST;

/// Create the client used for feed requests
pub fn create_http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .gzip(true)
        .redirect(reqwest::redirect::Policy::default())
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))
}

/// Fetch a feed URL, passing through conditional-request hints when present.
///
/// A 304 reply is returned like any other page; deciding what it means is the
/// shaper's job.
pub async fn conditional_fetch(
    url: &str,
    etag: Option<&str>,
    last_modified: Option<&str>,
) -> Result<FetchedPage> {
    let client = create_http_client()?;

    let mut request = client
        .get(url)
        .header(header::USER_AGENT, "feedsnap/0.1")
        .header(
            header::ACCEPT,
            "application/rss+xml, application/atom+xml, application/feed+json, application/xml, text/xml, */*;q=0.9",
        );
    if let Some(value) = etag {
        debug!(target: TARGET_WEB_REQUEST, "Sending If-None-Match for {}: {}", url, value);
        request = request.header(header::IF_NONE_MATCH, value);
    }
    if let Some(value) = last_modified {
        debug!(target: TARGET_WEB_REQUEST, "Sending If-Modified-Since for {}: {}", url, value);
        request = request.header(header::IF_MODIFIED_SINCE, value);
    }

    let response = timeout(REQUEST_TIMEOUT, request.send()).await.map_err(|_| {
        anyhow::anyhow!(
            "Request to {} timed out after {} seconds",
            url,
            REQUEST_TIMEOUT.as_secs()
        )
    })??;

    let status = response.status().as_u16();
    let mut headers = Vec::new();
    for (name, value) in response.headers() {
        if let Ok(value_str) = value.to_str() {
            headers.push((name.to_string(), value_str.to_string()));
        }
    }

    let body = response.bytes().await?.to_vec();
    debug!(
        target: TARGET_WEB_REQUEST,
        "Fetched {} with status {} ({} bytes)", url, status, body.len()
    );

    Ok(FetchedPage {
        status,
        headers,
        body,
    })
}
