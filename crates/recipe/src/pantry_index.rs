use std::collections::HashMap;

use eatsoon_shared::PantryItem;

use crate::normalize::normalize_name;

/// Pantry entries grouped by normalized name.
///
/// Keys keep the order in which they were first seen and entries keep
/// snapshot order inside each key, so scans over the index are stable.
/// The index borrows the snapshot it was built from; it is rebuilt for every
/// ranking call and never stored.
#[derive(Debug, Clone, Default)]
pub struct PantryIndex<'a> {
    positions: HashMap<String, usize>,
    groups: Vec<(String, Vec<&'a PantryItem>)>,
}

impl<'a> PantryIndex<'a> {
    pub fn build(items: &'a [PantryItem]) -> Self {
        items.iter().collect()
    }

    pub fn insert(&mut self, item: &'a PantryItem) {
        let key = normalize_name(item.match_name());

        match self.positions.get(&key) {
            Some(&position) => self.groups[position].1.push(item),
            None => {
                self.positions.insert(key.clone(), self.groups.len());
                self.groups.push((key, vec![item]));
            }
        }
    }

    /// Entries stored under an already normalized key, empty when unknown.
    pub fn get(&self, key: &str) -> &[&'a PantryItem] {
        self.positions
            .get(key)
            .map(|&position| self.groups[position].1.as_slice())
            .unwrap_or_default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[&'a PantryItem])> {
        self.groups
            .iter()
            .map(|(key, items)| (key.as_str(), items.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<'a> FromIterator<&'a PantryItem> for PantryIndex<'a> {
    fn from_iter<T: IntoIterator<Item = &'a PantryItem>>(iter: T) -> Self {
        let mut index = PantryIndex::default();
        for item in iter {
            index.insert(item);
        }
        index
    }
}

/// Builds the normalized-name lookup for a pantry snapshot.
pub fn index_pantry(items: &[PantryItem]) -> PantryIndex<'_> {
    PantryIndex::build(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use eatsoon_shared::Quantity;

    #[test]
    fn test_empty_pantry() {
        let index = index_pantry(&[]);
        assert!(index.is_empty());
        assert!(index.get("계란").is_empty());
    }

    #[test]
    fn test_groups_by_normalized_name_in_order() {
        let pantry = vec![
            PantryItem::new("Milk").with_quantity(1.0),
            PantryItem::new("계란").with_quantity(3.0),
            PantryItem::new("  milk ").with_quantity(2.0),
            PantryItem::new("Whole Milk").with_normalized_name("MILK"),
        ];

        let index = index_pantry(&pantry);

        assert_eq!(index.len(), 2);
        let milk = index.get("milk");
        assert_eq!(milk.len(), 3);
        assert_eq!(milk[0].quantity, Some(Quantity::from(1.0)));
        assert_eq!(milk[1].quantity, Some(Quantity::from(2.0)));
        assert_eq!(milk[2].name, "Whole Milk");

        let keys: Vec<&str> = index.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["milk", "계란"]);
    }

    #[test]
    fn test_identical_items_are_not_deduplicated() {
        let pantry = vec![PantryItem::new("두부"), PantryItem::new("두부")];
        let index = index_pantry(&pantry);

        assert_eq!(index.get("두부").len(), 2);
        assert!(index.contains_key("두부"));
    }
}
