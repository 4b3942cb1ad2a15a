pub mod a001_product;
pub mod a003_favorites;
