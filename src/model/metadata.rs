//! Free-form disclosure metadata attached to a product.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Insertion-ordered mapping of metadata keys to disclosed values.
///
/// Values are usually strings, but producers are not forced to send
/// strings, so any JSON value is accepted and coerced on use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(IndexMap<String, Value>);

impl Metadata {
    /// Create an empty mapping
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Insert or replace a value, keeping the original position on replace
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether `key` carries a present value (see [`is_present_value`]).
    #[must_use]
    pub fn is_present(&self, key: &str) -> bool {
        self.0.get(key).is_some_and(is_present_value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate all entries in insertion order, present or not
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate only entries whose value is present
    pub fn present_entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.iter().filter(|(_, v)| is_present_value(v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Presence predicate used by both scoring and categorization.
///
/// Strings count when non-empty after trimming, so `"false"` and `"0"`
/// are present. Booleans count when `true`, numbers when non-zero,
/// arrays and objects when non-empty. `null` never counts.
#[must_use]
pub fn is_present_value(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Plain string form of a value: strings verbatim, everything else as JSON.
#[must_use]
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Deserialize a metadata field that may be missing or `null`.
pub(crate) fn deserialize_nullable<'de, D>(deserializer: D) -> Result<Metadata, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Metadata>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_presence_predicate() {
        assert!(is_present_value(&json!("cotton")));
        assert!(is_present_value(&json!("false")));
        assert!(is_present_value(&json!("0")));
        assert!(is_present_value(&json!(true)));
        assert!(is_present_value(&json!(12.5)));
        assert!(is_present_value(&json!(["GOTS"])));

        assert!(!is_present_value(&json!("")));
        assert!(!is_present_value(&json!("   ")));
        assert!(!is_present_value(&json!(false)));
        assert!(!is_present_value(&json!(0)));
        assert!(!is_present_value(&json!([])));
        assert!(!is_present_value(&json!({})));
        assert!(!is_present_value(&Value::Null));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let metadata: Metadata =
            serde_json::from_str(r#"{"zeta": "1", "alpha": "2", "mid": "3"}"#).unwrap();
        let keys: Vec<&str> = metadata.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_present_entries_skips_blank() {
        let metadata = Metadata::new()
            .with("materials", "cotton")
            .with("brand", "")
            .with("notes", Value::Null);
        let present: Vec<&str> = metadata.present_entries().map(|(k, _)| k).collect();
        assert_eq!(present, vec!["materials"]);
        assert!(metadata.is_present("materials"));
        assert!(!metadata.is_present("brand"));
        assert!(!metadata.is_present("missing"));
    }

    #[test]
    fn test_value_to_string() {
        assert_eq!(value_to_string(&json!("plain")), "plain");
        assert_eq!(value_to_string(&json!(4.2)), "4.2");
        assert_eq!(value_to_string(&json!(true)), "true");
        assert_eq!(value_to_string(&json!(["a", "b"])), r#"["a","b"]"#);
    }
}
