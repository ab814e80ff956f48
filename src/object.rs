//! JSON object shaping: pruning, key subsetting, entry transforms, and
//! content hashing.
//!
//! Everything here operates on `serde_json` object shapes and returns
//! new values; inputs are never mutated.

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Removes null-valued properties from an object, recursively.
///
/// Arrays are traversed, scalars pass through unchanged.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use u_kit::object::prune_object;
/// let pruned = prune_object(&json!({"a": 1, "b": null}));
/// assert_eq!(pruned, json!({"a": 1}));
/// ```
pub fn prune_object(object: &Value) -> Value {
    match object {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(_, value)| !value.is_null())
                .map(|(key, value)| (key.clone(), prune_object(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(prune_object).collect()),
        other => other.clone(),
    }
}

/// Picks a subset of keys from an object.
///
/// Keys appear in the order requested. A key that is missing or holds
/// null comes back as the empty string.
///
/// # Examples
/// ```
/// use serde_json::{json, Map, Value};
/// use u_kit::object::pick;
/// let base: Map<String, Value> =
///     serde_json::from_value(json!({"a": 1, "b": 2, "c": 3})).unwrap();
/// let picked = pick(&base, &["a", "c"]);
/// assert_eq!(Value::Object(picked), json!({"a": 1, "c": 3}));
/// ```
pub fn pick(base: &Map<String, Value>, keys: &[&str]) -> Map<String, Value> {
    keys.iter()
        .map(|&key| {
            let value = base
                .get(key)
                .filter(|value| !value.is_null())
                .cloned()
                .unwrap_or_else(|| Value::String(String::new()));
            (key.to_string(), value)
        })
        .collect()
}

/// Transforms an object entry by entry.
///
/// `get_key` and `get_value` each see the original key and value; a
/// transformer that changes nothing is the identity closure. When two
/// transformed keys collide, the later entry wins.
///
/// # Examples
/// ```
/// use serde_json::{json, Map, Value};
/// use u_kit::object::object_map;
/// let base: Map<String, Value> =
///     serde_json::from_value(json!({"a": 1, "b": 2, "c": 3})).unwrap();
/// let doubled = object_map(
///     &base,
///     |key, _| key.to_uppercase(),
///     |value, _| json!(value.as_i64().unwrap() * 2),
/// );
/// assert_eq!(Value::Object(doubled), json!({"A": 2, "B": 4, "C": 6}));
/// ```
pub fn object_map<K, V>(object: &Map<String, Value>, get_key: K, get_value: V) -> Map<String, Value>
where
    K: Fn(&str, &Value) -> String,
    V: Fn(&Value, &str) -> Value,
{
    object
        .iter()
        .map(|(key, value)| (get_key(key, value), get_value(value, key)))
        .collect()
}

/// Generates a deterministic key for an object, ignoring field order.
///
/// Serializes the object with its top-level keys sorted, digests the
/// JSON with SHA-256, and returns the digest as lowercase hex.
///
/// # Examples
/// ```
/// use serde_json::{json, Map, Value};
/// use u_kit::object::create_object_hash;
/// let a: Map<String, Value> =
///     serde_json::from_value(json!({"x": 1, "y": 2})).unwrap();
/// let b: Map<String, Value> =
///     serde_json::from_value(json!({"y": 2, "x": 1})).unwrap();
/// assert_eq!(create_object_hash(&a)?, create_object_hash(&b)?);
/// # Ok::<(), serde_json::Error>(())
/// ```
pub fn create_object_hash(object: &Map<String, Value>) -> Result<String, serde_json::Error> {
    let sorted: BTreeMap<&String, &Value> = object.iter().collect();
    let json = serde_json::to_string(&sorted)?;
    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
