use eatsoon_shared::{MissingIngredient, Quantity};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

pub const DEFAULT_UNIT: &str = "개";

#[derive(Debug, thiserror::Error)]
pub enum ShoppingListError {
    #[error("shopping list item not found: {0}")]
    ItemNotFound(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub id: String,
    pub name: String,
    pub quantity: Quantity,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub from_recipe_id: Option<String>,
}

impl ShoppingItem {
    fn same_line(&self, name: &str, unit: &str) -> bool {
        !self.checked
            && self.name.trim().to_lowercase() == name.to_lowercase()
            && self.unit.trim() == unit
    }
}

/// Counts reported by [`ShoppingList::add_missing`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MergeOutcome {
    pub added: usize,
    pub merged: usize,
}

/// User shopping list
///
/// Items keep insertion order. Checked items are never merged into, so
/// ticking something off and adding it again starts a fresh line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds a manual entry and returns its id. Quantity defaults to 1, unit to "개".
    pub fn add_item(
        &mut self,
        name: &str,
        quantity: Option<Quantity>,
        unit: Option<&str>,
    ) -> String {
        self.push(
            name.trim(),
            quantity.unwrap_or_else(Quantity::one),
            unit.unwrap_or(DEFAULT_UNIT).trim(),
            None,
        )
    }

    /// Flips the checked state and returns the new value.
    pub fn toggle(&mut self, id: &str) -> Result<bool, ShoppingListError> {
        let item = self.get_mut(id)?;
        item.checked = !item.checked;

        Ok(item.checked)
    }

    pub fn mark_all_checked(&mut self) {
        for item in self.items.iter_mut() {
            item.checked = true;
        }
    }

    /// Drops every checked item and returns how many were removed.
    pub fn remove_checked(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.checked);

        before - self.items.len()
    }

    pub fn remove(&mut self, id: &str) -> Result<ShoppingItem, ShoppingListError> {
        let position = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| ShoppingListError::ItemNotFound(id.to_owned()))?;

        Ok(self.items.remove(position))
    }

    /// Puts a recipe's missing ingredients on the list.
    ///
    /// An unchecked line with the same name (case-insensitive) and unit gets
    /// its quantity increased, as long as both quantities are amounts ("200g"
    /// and "조금" are not). Anything else becomes a new line tagged with the
    /// recipe id.
    pub fn add_missing(&mut self, missing: &[MissingIngredient], recipe_id: &str) -> MergeOutcome {
        let mut outcome = MergeOutcome::default();

        for ingredient in missing {
            let name = ingredient.name.trim();
            let unit = ingredient.unit.as_deref().unwrap_or_default().trim();

            let target = self.items.iter_mut().find_map(|item| {
                if !item.same_line(name, unit) {
                    return None;
                }
                let sum = item.quantity.checked_add(&ingredient.quantity)?;
                Some((item, sum))
            });

            match target {
                Some((item, sum)) => {
                    item.quantity = sum;
                    outcome.merged += 1;
                }
                None => {
                    self.push(name, ingredient.quantity.clone(), unit, Some(recipe_id));
                    outcome.added += 1;
                }
            }
        }

        tracing::debug!(
            recipe_id,
            added = outcome.added,
            merged = outcome.merged,
            "missing ingredients added to shopping list"
        );

        outcome
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut ShoppingItem, ShoppingListError> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| ShoppingListError::ItemNotFound(id.to_owned()))
    }

    fn push(
        &mut self,
        name: &str,
        quantity: Quantity,
        unit: &str,
        recipe_id: Option<&str>,
    ) -> String {
        let id = Ulid::new().to_string();

        self.items.push(ShoppingItem {
            id: id.clone(),
            name: name.to_owned(),
            quantity,
            unit: unit.to_owned(),
            checked: false,
            from_recipe_id: recipe_id.filter(|id| !id.is_empty()).map(str::to_owned),
        });

        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_item_defaults() {
        let mut list = ShoppingList::new();
        let id = list.add_item("  우유 ", None, None);

        let item = list.get(&id).unwrap();
        assert_eq!(item.name, "우유");
        assert_eq!(item.quantity, Quantity::one());
        assert_eq!(item.unit, "개");
        assert!(!item.checked);
        assert_eq!(item.from_recipe_id, None);
    }

    #[test]
    fn test_toggle_and_remove_checked() {
        let mut list = ShoppingList::new();
        let milk = list.add_item("우유", Some(Quantity::from(2.0)), Some("팩"));
        let eggs = list.add_item("계란", Some(Quantity::from(10.0)), None);

        assert!(list.toggle(&milk).unwrap());
        assert!(!list.toggle(&milk).unwrap());
        assert!(list.toggle(&milk).unwrap());

        assert_eq!(list.remove_checked(), 1);
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].id, eggs);
    }

    #[test]
    fn test_unknown_id() {
        let mut list = ShoppingList::new();

        assert!(matches!(
            list.toggle("nope"),
            Err(ShoppingListError::ItemNotFound(id)) if id == "nope"
        ));
        assert!(list.remove("nope").is_err());
    }

    #[test]
    fn test_mark_all_checked() {
        let mut list = ShoppingList::new();
        list.add_item("우유", None, None);
        list.add_item("계란", None, None);

        list.mark_all_checked();
        assert!(list.items().iter().all(|item| item.checked));
        assert_eq!(list.remove_checked(), 2);
        assert!(list.is_empty());
    }

    #[test]
    fn test_serialized_as_array() {
        let mut list = ShoppingList::new();
        list.add_item("우유", None, None);

        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json[0]["name"], "우유");
        assert_eq!(json[0]["fromRecipeId"], serde_json::Value::Null);

        let back: ShoppingList = serde_json::from_value(json).unwrap();
        assert_eq!(back, list);
    }

    #[test]
    fn test_written_quantity_is_stored() {
        let mut list = ShoppingList::new();
        list.add_item("돼지고기", Some("200g".into()), Some(""));

        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json[0]["quantity"], "200g");
    }
}
