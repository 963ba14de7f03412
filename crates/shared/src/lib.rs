mod date;
pub mod lenient;
pub mod pantry;
mod quantity;
pub mod recipe;

pub use date::*;
pub use pantry::PantryItem;
pub use quantity::{Quantity, format_fraction, parse_quantity};
pub use recipe::{Ingredient, MissingIngredient, Recipe};
