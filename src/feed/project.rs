//! Best-effort field projection over loose value trees.

use serde_json::{Map, Value};

use super::util::calendar_parts;

/// Resolve a `/`-delimited path against a value tree, left to right. Missing
/// keys and non-object steps short-circuit to None.
pub fn lookup_path<'a>(source: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = source;
    for segment in path.split('/') {
        current = current.get(segment)?;
    }
    Some(current)
}

/// Copy one field from `source` into `target` if the whole source path
/// resolves. A miss at any step leaves `target` untouched; every projected
/// field is optional in the output.
pub fn copy_if_exists(source: &Value, source_path: &str, target: &mut Value, target_path: &str) {
    let Some(value) = lookup_path(source, source_path) else {
        return;
    };
    let source_key = source_path.rsplit('/').next().unwrap_or(source_path);
    set_path(target, target_path, format_value(source_key, value));
}

/// Walk the target path, creating intermediate objects, and drop the value in
/// at the last segment. A non-object along the way aborts the write.
fn set_path(target: &mut Value, path: &str, value: Value) {
    let segments: Vec<&str> = path.split('/').collect();
    let Some((last, parents)) = segments.split_last() else {
        return;
    };
    let mut slot = target;
    for segment in parents {
        let Some(map) = slot.as_object_mut() else {
            return;
        };
        slot = map
            .entry((*segment).to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
    if let Some(map) = slot.as_object_mut() {
        map.insert((*last).to_string(), value);
    }
}

/// Value-level transforms applied on projection: calendar structs flatten to
/// their nine ordered integers, and etags lose one trailing `-gzip` (some
/// servers append it to the validator without the content having changed,
/// which would defeat change detection on the caller side).
fn format_value(source_key: &str, value: &Value) -> Value {
    if let Some(parts) = calendar_parts(value) {
        return Value::from(parts);
    }
    if source_key == "etag" {
        if let Some(etag) = value.as_str() {
            return Value::from(etag.strip_suffix("-gzip").unwrap_or(etag));
        }
    }
    value.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lookup_walks_nested_objects() {
        let source = json!({"feed": {"image": {"href": "https://example.com/icon.png"}}});
        assert_eq!(
            lookup_path(&source, "feed/image/href"),
            Some(&json!("https://example.com/icon.png"))
        );
        assert_eq!(lookup_path(&source, "feed/image"), Some(&json!({"href": "https://example.com/icon.png"})));
    }

    #[test]
    fn lookup_misses_short_circuit() {
        let source = json!({"feed": {"title": "t"}});
        assert!(lookup_path(&source, "feed/image/href").is_none());
        assert!(lookup_path(&source, "entries/title").is_none());
        // walking through a leaf is a miss, not a panic
        assert!(lookup_path(&source, "feed/title/content").is_none());
    }

    #[test]
    fn copy_writes_through_nested_target_paths() {
        let source = json!({"feed": {"image": {"href": "icon.png"}}});
        let mut target = json!({"feed": {}});
        copy_if_exists(&source, "feed/image/href", &mut target, "feed/icon");
        assert_eq!(target, json!({"feed": {"icon": "icon.png"}}));
    }

    #[test]
    fn copy_creates_missing_intermediate_objects() {
        let source = json!({"etag": "v1"});
        let mut target = json!({});
        copy_if_exists(&source, "etag", &mut target, "header/etag");
        assert_eq!(target, json!({"header": {"etag": "v1"}}));
    }

    #[test]
    fn copy_is_a_no_op_on_resolution_failure() {
        let source = json!({"feed": {"title": "t"}});
        let mut target = json!({"header": {}});
        copy_if_exists(&source, "feed/subtitle", &mut target, "header/subtitle");
        assert_eq!(target, json!({"header": {}}));
    }

    #[test]
    fn etag_values_lose_one_trailing_gzip_marker() {
        let source = json!({"etag": "abc123-gzip"});
        let mut target = json!({"header": {}});
        copy_if_exists(&source, "etag", &mut target, "header/etag");
        assert_eq!(target["header"]["etag"], json!("abc123"));

        let source = json!({"etag": "abc-gzip-gzip"});
        let mut target = json!({"header": {}});
        copy_if_exists(&source, "etag", &mut target, "header/etag");
        assert_eq!(target["header"]["etag"], json!("abc-gzip"));
    }

    #[test]
    fn gzip_stripping_only_applies_to_etag_keys() {
        let source = json!({"title": "release-gzip"});
        let mut target = json!({});
        copy_if_exists(&source, "title", &mut target, "title");
        assert_eq!(target["title"], json!("release-gzip"));
    }

    #[test]
    fn calendar_structs_flatten_on_copy() {
        let source = json!({"published_parsed": {
            "year": 2020, "month": 1, "day": 2, "hour": 3, "minute": 4,
            "second": 5, "weekday": 6, "yearday": 7, "isdst": 8,
        }});
        let mut target = json!({});
        copy_if_exists(&source, "published_parsed", &mut target, "published");
        assert_eq!(target["published"], json!([2020, 1, 2, 3, 4, 5, 6, 7, 8]));
    }
}
