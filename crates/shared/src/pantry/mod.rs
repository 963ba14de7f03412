use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{DateLike, Quantity, lenient};

/// One entry of the user's inventory snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PantryItem {
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub normalized_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::quantity",
        skip_serializing_if = "Option::is_none"
    )]
    pub quantity: Option<Quantity>,
    #[serde(
        default,
        deserialize_with = "crate::lenient_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub expiration_date: Option<DateLike>,
    /// Older clients wrote `expiryDate`; only read when `expirationDate` is absent.
    #[serde(
        default,
        rename = "expiryDate",
        deserialize_with = "crate::lenient_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub expiry_date: Option<DateLike>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PantryItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_quantity(mut self, quantity: impl Into<Quantity>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    pub fn with_expiration(mut self, expiration: impl Into<DateLike>) -> Self {
        self.expiration_date = Some(expiration.into());
        self
    }

    pub fn with_normalized_name(mut self, normalized_name: impl Into<String>) -> Self {
        self.normalized_name = Some(normalized_name.into());
        self
    }

    /// Expiry date, `expirationDate` first.
    pub fn expiry(&self) -> Option<&DateLike> {
        self.expiration_date
            .as_ref()
            .or(self.expiry_date.as_ref())
    }

    /// Name used for indexing: `normalizedName` when present, else `name`.
    pub fn match_name(&self) -> &str {
        self.normalized_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Timestamp;

    #[test]
    fn test_deserialize_store_document() {
        let item: PantryItem = serde_json::from_str(
            r#"{
                "id": "abc",
                "name": "우유",
                "quantity": "2",
                "category": "유제품",
                "expirationDate": {"seconds": 1700000000, "nanoseconds": 0}
            }"#,
        )
        .unwrap();

        assert_eq!(item.name, "우유");
        assert_eq!(item.quantity, Some(Quantity::from(2.0)));
        assert_eq!(
            item.expiration_date,
            Some(DateLike::Timestamp(Timestamp::new(1_700_000_000, 0)))
        );
        assert_eq!(item.extra.get("id"), Some(&Value::from("abc")));
    }

    #[test]
    fn test_malformed_fields_fall_back() {
        let item: PantryItem =
            serde_json::from_str(r#"{"name": null, "quantity": "많이", "expiryDate": true}"#)
                .unwrap();

        assert_eq!(item.name, "");
        assert_eq!(item.quantity.as_ref().and_then(Quantity::to_f64), None);
        assert_eq!(item.expiry(), None);
    }

    #[test]
    fn test_both_expiry_keys() {
        let item: PantryItem = serde_json::from_str(
            r#"{"name": "우유", "quantity": 1, "expirationDate": "2025-06-11", "expiryDate": "2025-06-20"}"#,
        )
        .unwrap();

        assert_eq!(item.expiry(), Some(&DateLike::from("2025-06-11")));

        let legacy: PantryItem =
            serde_json::from_str(r#"{"name": "우유", "expiryDate": "2025-06-20"}"#).unwrap();
        assert_eq!(legacy.expiration_date, None);
        assert_eq!(legacy.expiry(), Some(&DateLike::from("2025-06-20")));
    }
}
