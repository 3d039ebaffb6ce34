//! Top-level fetch-and-shape entry point.

use serde_json::json;
use tracing::{debug, warn};

use super::client::conditional_fetch;
use super::parser::build_parsed_result;
use super::shape::shape_result;
use super::types::ShapeOptions;
use super::util::{datetime_from_parts, http_date, is_valid_url};
use crate::TARGET_WEB_REQUEST;

/// Fetch a feed URL and return the normalized document as compact JSON.
///
/// `modified` is the nine-integer sequence a previous call emitted; it is
/// rebuilt into an HTTP date for the If-Modified-Since hint. Never fails:
/// every fetch or parse problem degrades to a smaller but still valid
/// document.
pub async fn fetch_feed_json(
    url: &str,
    etag: Option<&str>,
    modified: Option<&[i64]>,
    options: &ShapeOptions,
) -> String {
    let last_modified = modified.and_then(|parts| {
        let rebuilt = datetime_from_parts(parts);
        if rebuilt.is_none() {
            debug!(target: TARGET_WEB_REQUEST, "Ignoring malformed last-modified hint: {:?}", parts);
        }
        rebuilt.map(|dt| http_date(&dt))
    });

    let parsed = if is_valid_url(url) {
        match conditional_fetch(url, etag, last_modified.as_deref()).await {
            Ok(page) => build_parsed_result(&page),
            Err(err) => {
                warn!(target: TARGET_WEB_REQUEST, "Fetch of {} failed: {}", url, err);
                json!({})
            }
        }
    } else {
        warn!(target: TARGET_WEB_REQUEST, "Refusing to fetch invalid URL: {}", url);
        json!({})
    };

    let document = shape_result(&parsed, options);
    serde_json::to_string(&document)
        .unwrap_or_else(|_| r#"{"header":{},"feed":{},"entries":[]}"#.to_string())
}
