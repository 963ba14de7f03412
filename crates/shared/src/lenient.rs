//! Field deserializers for loosely typed store documents.
//!
//! Documents written by older app versions and crawler scripts disagree on
//! field types. These helpers accept whatever shape is there and fall back
//! to "absent" instead of rejecting the whole document.

use serde::{Deserialize, Deserializer, de::IgnoredAny};

use crate::Quantity;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Quantity field: numbers and non-blank strings are kept as written,
/// anything else is `None`.
pub fn quantity<'de, D>(deserializer: D) -> Result<Option<Quantity>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawScalar>::deserialize(deserializer)? {
        Some(RawScalar::Number(value)) if value.is_finite() => Some(Quantity::Number(value)),
        Some(RawScalar::Text(text)) if !text.trim().is_empty() => Some(Quantity::Text(text)),
        _ => None,
    })
}

/// Text field: strings are kept, numbers are rendered, anything else is `None`.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawScalar>::deserialize(deserializer)? {
        Some(RawScalar::Text(text)) => Some(text),
        Some(RawScalar::Number(value)) => Some(value.to_string()),
        _ => None,
    })
}

/// Same as [`text`] but missing values become an empty string.
pub fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text(deserializer)?.unwrap_or_default())
}

/// `null` is read as the type's default (`recipe.ingredients || []`).
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// List of strings where non-string entries are dropped.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<RawScalar>> = Option::deserialize(deserializer)?;

    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|value| match value {
            RawScalar::Text(text) => Some(text),
            _ => None,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Doc {
        #[serde(default, deserialize_with = "quantity")]
        quantity: Option<Quantity>,
        #[serde(default, deserialize_with = "text")]
        unit: Option<String>,
        #[serde(default, deserialize_with = "string_list")]
        tags: Vec<String>,
    }

    #[test]
    fn test_lenient_fields() {
        let doc: Doc =
            serde_json::from_str(r#"{"quantity": "3", "unit": 2, "tags": ["한식", 1, null]}"#)
                .unwrap();
        assert_eq!(doc.quantity, Some(Quantity::from(3.0)));
        assert_eq!(doc.quantity.unwrap().to_string(), "3");
        assert_eq!(doc.unit.as_deref(), Some("2"));
        assert_eq!(doc.tags, vec!["한식".to_string()]);

        let doc: Doc = serde_json::from_str(r#"{"quantity": {"value": 1}, "unit": null}"#).unwrap();
        assert_eq!(doc.quantity, None);

        let doc: Doc = serde_json::from_str(r#"{"quantity": "200g"}"#).unwrap();
        assert_eq!(doc.quantity.as_ref().map(ToString::to_string).as_deref(), Some("200g"));
        assert_eq!(doc.quantity.and_then(|q| q.to_f64()), None);

        let doc: Doc = serde_json::from_str(r#"{"quantity": "  "}"#).unwrap();
        assert_eq!(doc.quantity, None);
        assert_eq!(doc.unit, None);
        assert!(doc.tags.is_empty());
    }
}
