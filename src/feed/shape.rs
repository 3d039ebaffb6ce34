//! Reduction of a parsed-feed tree to the normalized output document.

use serde_json::{json, Value};
use tracing::debug;

use super::project::copy_if_exists;
use super::types::ShapeOptions;
use crate::TARGET_SHAPE;

/// Diagnostic prefix some parser backends emit instead of setting status 304.
const UNCHANGED_PREFIX: &str = "The feed has not changed since";

/// Fixed (source path, target path) pairs for the header and feed sections.
const HEADER_FIELDS: [(&str, &str); 3] = [
    ("etag", "header/etag"),
    ("modified", "header/modified"),
    ("headers/date", "header/date"),
];

const FEED_FIELDS: [(&str, &str); 6] = [
    ("feed/title", "feed/title"),
    ("feed/subtitle", "feed/subtitle"),
    ("feed/author", "feed/author"),
    ("feed/link", "feed/link"),
    ("feed/image/href", "feed/icon"),
    ("feed/published_parsed", "feed/published"),
];

const ENTRY_FIELDS: [(&str, &str); 5] = [
    ("title", "title"),
    ("subtitle", "subtitle"),
    ("author", "author"),
    ("link", "link"),
    ("published_parsed", "published"),
];

/// Reduce a parsed-feed tree to the `header`/`feed`/`entries` document.
///
/// Always returns a well-formed document. An unchanged feed (status 304,
/// explicit or via the diagnostic message) or an empty entry list yields only
/// `header.status`; an unresolvable status yields the fully minimal document.
/// Every other field is present exactly when its source path resolves.
pub fn shape_result(parsed: &Value, options: &ShapeOptions) -> Value {
    let mut result = json!({"header": {}, "feed": {}, "entries": []});

    let mut status = parsed.get("status").and_then(Value::as_i64);
    if let Some(message) = parsed.get("debug_message").and_then(Value::as_str) {
        if message.starts_with(UNCHANGED_PREFIX) {
            status = Some(304);
        }
    }
    let Some(status) = status else {
        debug!(target: TARGET_SHAPE, "No status on parsed result, returning minimal document");
        return result;
    };
    result["header"]["status"] = status.into();

    let entries = match parsed.get("entries").and_then(Value::as_array) {
        Some(list) if status != 304 && !list.is_empty() => list,
        _ => return result,
    };

    for &(source_path, target_path) in HEADER_FIELDS.iter().chain(FEED_FIELDS.iter()) {
        copy_if_exists(parsed, source_path, &mut result, target_path);
    }

    let mut shaped_entries = Vec::with_capacity(entries.len());
    for entry in entries {
        let mut shaped = json!({});
        for &(source_path, target_path) in ENTRY_FIELDS.iter() {
            copy_if_exists(entry, source_path, &mut shaped, target_path);
        }
        if options.copy_entry_summary {
            copy_if_exists(entry, "summary", &mut shaped, "summary");
        }
        if options.copy_entry_tags {
            if let Some(terms) = tag_terms(entry) {
                shaped["tags"] = Value::from(terms);
            }
        }
        shaped_entries.push(shaped);
    }
    result["entries"] = Value::Array(shaped_entries);

    result
}

/// Collect the `term` of every tag object on an entry. All-or-nothing: a
/// single tag without a term drops the whole field.
fn tag_terms(entry: &Value) -> Option<Vec<String>> {
    let tags = entry.get("tags")?.as_array()?;
    tags.iter()
        .map(|tag| tag.get("term").and_then(Value::as_str).map(str::to_string))
        .collect()
}
