pub mod header;
pub mod mobile_menu;

pub use header::Header;
