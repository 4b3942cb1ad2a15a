pub mod storage;
pub mod store;

pub use storage::{KeyValueStorage, MemoryStorage};
pub use store::{FavoritesStore, ToggleOutcome};
