// crates/hkaddr-core/src/raw.rs

//! # Raw Document Access
//!
//! Input files are only loosely shaped, so nothing here deserializes into a
//! fixed schema. Instead every field is reached through a total path lookup
//! that degrades to an empty default when the path does not resolve.

use serde_json::Value;

/// Walks `path` through nested JSON objects.
///
/// Returns `None` as soon as a key is missing or an intermediate node is not
/// an object. Never panics.
///
/// ```rust
/// use hkaddr_core::raw::lookup;
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": {"c": 1}}});
/// assert_eq!(lookup(&doc, &["a", "b", "c"]), Some(&json!(1)));
/// assert_eq!(lookup(&doc, &["a", "x"]), None);
/// assert_eq!(lookup(&doc, &["a", "b", "c", "d"]), None);
/// ```
pub fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(value, |cur, key| cur.as_object()?.get(*key))
}

/// Like [`lookup`] but yields the string at `path`, or `""` when the path
/// does not resolve or the leaf is not a JSON string.
pub fn lookup_str<'a>(value: &'a Value, path: &[&str]) -> &'a str {
    lookup(value, path).and_then(Value::as_str).unwrap_or("")
}

/// Like [`lookup`] but yields `Value::Null` for unresolved paths, so callers
/// can keep chaining lookups on the result.
pub fn lookup_or_null<'a>(value: &'a Value, path: &[&str]) -> &'a Value {
    static NULL: Value = Value::Null;
    lookup(value, path).unwrap_or(&NULL)
}
