use serde::{Deserialize, Deserializer, Serialize, de::IgnoredAny};
use serde_json::{Map, Value};

use crate::{Quantity, lenient};

/// A catalog recipe.
///
/// Fields the engine does not know about (`servings`, `difficulty`, crawler
/// metadata, ...) are kept in `extra` and written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub ingredients: Vec<Ingredient>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub steps: Vec<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::string_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tags: Vec<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Recipe {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_ingredients<I>(mut self, ingredients: impl IntoIterator<Item = I>) -> Self
    where
        I: Into<Ingredient>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_steps<S: Into<String>>(mut self, steps: impl IntoIterator<Item = S>) -> Self {
        self.steps = steps.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tags<S: Into<String>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// A required ingredient.
///
/// Catalog documents list ingredients either as bare strings or as records;
/// both shapes deserialize into this one type. Entries of any other shape
/// become an ingredient without a name, which scoring skips.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// As written in the catalog ("2", "1/2", "200g", "조금").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized_name: Option<String>,
}

impl Ingredient {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_quantity(mut self, quantity: impl Into<Quantity>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Name used for matching: `normalizedName` when present, else `name`.
    pub fn match_name(&self) -> &str {
        self.normalized_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or(self.name.as_deref())
            .unwrap_or_default()
    }

    /// Display name, empty when the entry had none.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

impl From<&str> for Ingredient {
    fn from(value: &str) -> Self {
        Ingredient::named(value)
    }
}

impl From<String> for Ingredient {
    fn from(value: String) -> Self {
        Ingredient::named(value)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IngredientRecord {
    #[serde(default, deserialize_with = "lenient::text")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient::quantity")]
    quantity: Option<Quantity>,
    #[serde(default, deserialize_with = "lenient::text")]
    unit: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    normalized_name: Option<String>,
}

impl<'de> Deserialize<'de> for Ingredient {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Name(String),
            Record(IngredientRecord),
            Other(IgnoredAny),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Name(name) => Ingredient::named(name),
            Raw::Record(record) => Ingredient {
                name: record.name,
                quantity: record.quantity,
                unit: record.unit,
                normalized_name: record.normalized_name,
            },
            Raw::Other(_) => Ingredient::default(),
        })
    }
}

/// An ingredient the pantry cannot cover, as shown in the "to buy" list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingIngredient {
    pub name: String,
    pub quantity: Quantity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}
