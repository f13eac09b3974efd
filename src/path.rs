//! Dotted option paths and the options-subtree rule.
//!
//! An option path like `" core . prefix.function "` is split on `.`, each
//! segment is trimmed, and empty segments are dropped, so it normalizes to
//! `core.prefix.function`. The last segment is the leaf name and everything
//! before it is the parent path.

use serde_json::Value;

/// Split a dotted name into trimmed, non-empty segments.
pub fn explode_name(name: &str) -> Vec<&str> {
    name.split('.')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Normalize a dotted name: `" a..b . c."` → `"a.b.c"`.
pub fn normalize(name: &str) -> String {
    explode_name(name).join(".")
}

/// Whether a mapping key is a canonical decimal integer (`"0"`, `"42"`, `"-7"`).
///
/// Such keys index list-like data rather than naming options. Non-canonical
/// forms (`"07"`, `"+1"`, `"-0"`, `" 1"`) are plain string keys.
pub fn is_numeric_key(key: &str) -> bool {
    let digits = key.strip_prefix('-').unwrap_or(key);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if digits.starts_with('0') {
        // Only a bare "0" is canonical; "-0" and "007" are not.
        return key == "0";
    }
    key.parse::<i64>().is_ok()
}

/// Whether a value is a subtree of further options rather than a terminal.
///
/// True only for a non-empty object whose keys are all non-numeric strings.
/// Scalars, arrays, empty objects and integer-keyed objects are terminal.
pub fn contains_options(value: &Value) -> bool {
    match value {
        Value::Object(map) => !map.is_empty() && map.keys().all(|key| !is_numeric_key(key)),
        _ => false,
    }
}
