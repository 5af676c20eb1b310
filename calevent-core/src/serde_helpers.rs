//! Custom deserializers for loosely typed wire fields.
//!
//! Response fields use `Option<Option<T>>` with `#[serde(default)]`: an
//! absent key stays `None`, an explicit `null` becomes `Some(None)`.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

/// Mark a key as present, keeping `null` apart from a missing key.
pub(crate) fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Accept a JSON string or number, keeping it as a string.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<StringOrNumber>::deserialize(deserializer)?;
    Ok(Some(value.map(|v| match v {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "present")]
        title: Option<Option<String>>,
        #[serde(default, deserialize_with = "string_or_number")]
        collection: Option<Option<String>>,
    }

    #[test]
    fn test_null_is_distinct_from_absent() {
        let patch: Patch = serde_json::from_value(json!({"title": null})).unwrap();
        assert_eq!(patch.title, Some(None));
        assert_eq!(patch.collection, None);

        let patch: Patch = serde_json::from_value(json!({"title": "Standup", "collection": 100})).unwrap();
        assert_eq!(patch.title, Some(Some("Standup".to_string())));
        assert_eq!(patch.collection, Some(Some("100".to_string())));
    }
}
