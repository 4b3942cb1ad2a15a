pub mod store;

pub use store::{CatalogStore, CategoryFilter, ALL_CATEGORIES};
