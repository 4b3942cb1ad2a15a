pub mod a001_product;
pub mod a002_catalog;
pub mod a003_favorites;
