//! Assembly of the loose parsed-feed tree the shaper consumes.

use feed_rs::model::{Entry, Feed};
use feed_rs::parser;
use serde_json::{json, Map, Value};
use std::io::Cursor;
use tracing::debug;

use super::types::FetchedPage;
use super::util::{calendar_value, parse_http_date};
use crate::TARGET_WEB_REQUEST;

/// Build the parsed-feed tree from a fetched page.
///
/// Header metadata (status, etag, modified, response headers) is always
/// present; `feed` and `entries` only appear when the body parses as a feed.
/// A body that does not parse degrades to a header-only tree, which the
/// shaper reduces to a status-only document.
pub fn build_parsed_result(page: &FetchedPage) -> Value {
    let mut result = Map::new();
    result.insert("status".to_string(), json!(page.status));

    let mut headers = Map::new();
    for (name, value) in &page.headers {
        headers.insert(name.to_lowercase(), json!(value));
    }
    if let Some(etag) = headers.get("etag").and_then(Value::as_str) {
        let etag = etag.to_string();
        result.insert("etag".to_string(), json!(etag));
    }
    if let Some(modified) = headers
        .get("last-modified")
        .and_then(Value::as_str)
        .and_then(parse_http_date)
    {
        result.insert("modified".to_string(), calendar_value(&modified));
    }
    result.insert("headers".to_string(), Value::Object(headers));

    match parser::parse(Cursor::new(&page.body)) {
        Ok(feed) => {
            let entries: Vec<Value> = feed.entries.iter().map(entry_value).collect();
            result.insert("feed".to_string(), feed_value(&feed));
            result.insert("entries".to_string(), Value::Array(entries));
        }
        Err(err) => {
            debug!(target: TARGET_WEB_REQUEST, "Body did not parse as a feed: {}", err);
        }
    }

    Value::Object(result)
}

fn feed_value(feed: &Feed) -> Value {
    let mut map = Map::new();
    if let Some(title) = &feed.title {
        map.insert("title".to_string(), json!(title.content));
    }
    if let Some(description) = &feed.description {
        map.insert("subtitle".to_string(), json!(description.content));
    }
    if let Some(author) = feed.authors.first() {
        map.insert("author".to_string(), json!(author.name));
    }
    if let Some(link) = feed.links.first() {
        map.insert("link".to_string(), json!(link.href));
    }
    if let Some(image) = feed.logo.as_ref().or(feed.icon.as_ref()) {
        map.insert("image".to_string(), json!({"href": image.uri}));
    }
    if let Some(published) = feed.published.or(feed.updated) {
        map.insert("published_parsed".to_string(), calendar_value(&published));
    }
    Value::Object(map)
}

fn entry_value(entry: &Entry) -> Value {
    let mut map = Map::new();
    if let Some(title) = &entry.title {
        map.insert("title".to_string(), json!(title.content));
    }
    if let Some(author) = entry.authors.first() {
        map.insert("author".to_string(), json!(author.name));
    }
    if let Some(link) = entry.links.first() {
        map.insert("link".to_string(), json!(link.href));
    }
    if let Some(published) = entry.published.or(entry.updated) {
        map.insert("published_parsed".to_string(), calendar_value(&published));
    }
    if let Some(summary) = &entry.summary {
        map.insert("summary".to_string(), json!(summary.content));
    }
    if !entry.categories.is_empty() {
        let tags: Vec<Value> = entry
            .categories
            .iter()
            .map(|category| json!({"term": category.term}))
            .collect();
        map.insert("tags".to_string(), Value::Array(tags));
    }
    Value::Object(map)
}
