pub mod catalog;
pub mod config;
pub mod observability;
pub mod search_term;

pub use catalog::CatalogError;
pub use search_term::SearchTermStore;
