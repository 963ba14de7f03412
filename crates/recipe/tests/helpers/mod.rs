#![allow(dead_code)]

use eatsoon_recipe::{PantryItem, Recipe};
use time::{Duration, OffsetDateTime, macros::datetime};

pub const NOW: OffsetDateTime = datetime!(2025-06-10 09:00:00 UTC);

pub fn in_days(days: i64) -> OffsetDateTime {
    NOW + Duration::days(days)
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Small fridge used by most scenarios.
pub fn fridge() -> Vec<PantryItem> {
    vec![
        PantryItem::new("계란").with_quantity(6.0).with_expiration(in_days(2)),
        PantryItem::new("대파송송썬것").with_quantity(1.0),
        PantryItem::new("두부").with_quantity(1.0).with_expiration(in_days(1)),
        PantryItem::new("김치").with_quantity(1.0),
        PantryItem::new("소금").with_quantity(1.0),
    ]
}

pub fn catalog() -> Vec<Recipe> {
    vec![
        Recipe::new("r1", "계란말이").with_ingredients(["계란", "대파", "소금"]),
        Recipe::new("r2", "두부조림").with_ingredients(["두부", "간장", "물"]),
        Recipe::new("r3", "김치찌개").with_ingredients(["김치", "두부", "돼지고기", "물"]),
        Recipe::new("r4", "소금물").with_ingredients(["소금"]),
        Recipe::new("r5", "빈 레시피"),
        Recipe::new("r6", "스테이크").with_ingredients(["소고기", "버터", "마늘", "로즈마리"]),
    ]
}
