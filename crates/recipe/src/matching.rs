use eatsoon_shared::PantryItem;

use crate::normalize::normalize_name;
use crate::pantry_index::PantryIndex;

/// Finds the pantry entries that can stand in for an ingredient.
///
/// Exact normalized-name matches win. Without one, every key that contains
/// the ingredient name, or is contained by it, contributes its entries in
/// index order, so "대파" finds an item stored as "대파송송썬것".
pub fn find_matching_pantry_items<'a>(
    ingredient_name: &str,
    index: &PantryIndex<'a>,
) -> Vec<&'a PantryItem> {
    let needle = normalize_name(ingredient_name);
    if needle.is_empty() {
        return Vec::new();
    }

    let exact = index.get(&needle);
    if !exact.is_empty() {
        return exact.to_vec();
    }

    index
        .iter()
        .filter(|(key, _)| !key.is_empty() && (key.contains(&needle) || needle.contains(key)))
        .flat_map(|(_, items)| items.iter().copied())
        .collect()
}

/// Water is assumed to always be on hand.
///
/// Loose check used for display: anything mentioning water counts.
pub fn is_water(ingredient_name: &str) -> bool {
    let name = normalize_name(ingredient_name);
    name.contains('물') || name.contains("water")
}

/// Exactly "물" or "water", so 물엿 and 찬물 stay ordinary ingredients.
pub fn is_plain_water(ingredient_name: &str) -> bool {
    let name = normalize_name(ingredient_name);
    name == "물" || name == "water"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_wins() {
        let pantry = vec![
            PantryItem::new("대파"),
            PantryItem::new("대파송송썬것"),
        ];
        let index = PantryIndex::build(&pantry);

        let found = find_matching_pantry_items(" 대파 ", &index);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "대파");
    }

    #[test]
    fn test_substring_fallback_both_directions() {
        let pantry = vec![
            PantryItem::new("대파송송썬것"),
            PantryItem::new("양파"),
            PantryItem::new("쪽파"),
        ];
        let index = PantryIndex::build(&pantry);

        let found = find_matching_pantry_items("대파", &index);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "대파송송썬것");

        let found = find_matching_pantry_items("다진 양파 1/2개", &index);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "양파");
    }

    #[test]
    fn test_fallback_collects_every_matching_key() {
        let pantry = vec![
            PantryItem::new("돼지고기 목살"),
            PantryItem::new("소고기"),
            PantryItem::new("돼지고기 앞다리"),
        ];
        let index = PantryIndex::build(&pantry);

        let names: Vec<&str> = find_matching_pantry_items("돼지고기", &index)
            .into_iter()
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(names, vec!["돼지고기 목살", "돼지고기 앞다리"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let pantry = vec![PantryItem::new("두부"), PantryItem::new("")];
        let index = PantryIndex::build(&pantry);

        assert!(find_matching_pantry_items("치즈", &index).is_empty());
        assert!(find_matching_pantry_items("", &index).is_empty());
        assert!(find_matching_pantry_items("치즈", &PantryIndex::default()).is_empty());
    }

    #[test]
    fn test_is_water() {
        assert!(is_water("물"));
        assert!(is_water(" 물 2컵"));
        assert!(is_water("Water"));
        assert!(is_water("찬물"));
        assert!(!is_water("소금"));
        assert!(!is_water(""));
    }

    #[test]
    fn test_is_plain_water() {
        assert!(is_plain_water(" 물 "));
        assert!(is_plain_water("WATER"));
        assert!(!is_plain_water("물엿"));
        assert!(!is_plain_water("찬물"));
        assert!(!is_plain_water("물 2컵"));
        assert!(!is_plain_water(""));
    }
}
