//! Persisted favorites (wishlist).
//!
//! Favorites are snapshots of catalog records taken when the product was
//! liked. Every read goes back to storage, so `load` always reflects the last
//! persisted state.

use super::storage::KeyValueStorage;
use crate::domain::a001_product::{ProductId, ProductRecord};
use crate::shared::error::StorageError;

/// Result of a like/unlike click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub added: bool,
}

type ChangeListener = Box<dyn Fn(&[ProductRecord])>;

pub struct FavoritesStore<S: KeyValueStorage> {
    storage: S,
    key: String,
    listener: Option<ChangeListener>,
}

impl<S: KeyValueStorage> FavoritesStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            listener: None,
        }
    }

    /// Registers a callback invoked with the persisted favorites after every
    /// toggle (badge counters, open favorites panel).
    pub fn with_listener(mut self, listener: impl Fn(&[ProductRecord]) + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Absent key, unreadable storage and undecodable data all mean "no favorites".
    pub fn load(&self) -> Vec<ProductRecord> {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                log::warn!("Favorites storage unreadable: {}", err);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<ProductRecord>>(&raw) {
            Ok(favorites) => favorites,
            Err(err) => {
                log::warn!("Ignoring stored favorites under '{}': {}", self.key, err);
                Vec::new()
            }
        }
    }

    /// Overwrites the stored favorites.
    pub fn save(&self, favorites: &[ProductRecord]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(favorites).map_err(|err| StorageError::Write {
            key: self.key.clone(),
            reason: err.to_string(),
        })?;
        self.storage.set_item(&self.key, &raw)
    }

    pub fn count(&self) -> usize {
        self.load().len()
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.load().iter().any(|fav| fav.id == id)
    }

    /// Removes `id` if liked, otherwise adds a snapshot resolved via `lookup`.
    ///
    /// An id that `lookup` cannot resolve still reports `added: true` but
    /// stores nothing.
    pub fn toggle<F>(&self, id: ProductId, lookup: F) -> ToggleOutcome
    where
        F: FnOnce(ProductId) -> Option<ProductRecord>,
    {
        let mut favorites = self.load();

        let outcome = match favorites.iter().position(|fav| fav.id == id) {
            Some(index) => {
                favorites.remove(index);
                ToggleOutcome { added: false }
            }
            None => {
                match lookup(id) {
                    Some(product) => favorites.push(product),
                    None => log::warn!("Product {} not found in catalog; favorite not stored", id),
                }
                ToggleOutcome { added: true }
            }
        };

        if let Err(err) = self.save(&favorites) {
            log::error!("Failed to save favorites: {}", err);
        }

        if let Some(listener) = &self.listener {
            listener(&self.load());
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_favorites::storage::MemoryStorage;
    use std::cell::{Cell, RefCell};
    use std::collections::HashSet;
    use std::rc::Rc;

    const KEY: &str = "scanLankaFavs";

    fn catalog() -> Vec<ProductRecord> {
        vec![
            ProductRecord::new(1, "whiteboard", "Standard White Board", 3500.0, "a.png"),
            ProductRecord::new(2, "greenboard", "Green Chalk Board", 4500.0, "b.png"),
            ProductRecord::new(3, "chess", "Chess Set", 1200.0, "c.png"),
        ]
    }

    fn lookup(id: ProductId) -> Option<ProductRecord> {
        catalog().into_iter().find(|p| p.id == id)
    }

    struct BrokenStorage;

    impl KeyValueStorage for BrokenStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let store = FavoritesStore::new(MemoryStorage::new(), KEY);
        let favorites = vec![catalog()[2].clone(), catalog()[0].clone()];

        store.save(&favorites).unwrap();
        assert_eq!(store.load(), favorites);
    }

    #[test]
    fn test_load_missing_key_is_empty() {
        let store = FavoritesStore::new(MemoryStorage::new(), KEY);
        assert!(store.load().is_empty());
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_load_undecodable_is_empty() {
        let storage = MemoryStorage::new();
        let store = FavoritesStore::new(storage.clone(), KEY);

        for raw in ["not json", "{\"id\": 1}", "42", "null", "[1, 2]"] {
            storage.set_item(KEY, raw).unwrap();
            assert!(store.load().is_empty(), "expected empty for {}", raw);
        }
    }

    #[test]
    fn test_unavailable_storage_is_empty() {
        let store = FavoritesStore::new(BrokenStorage, KEY);
        assert!(store.load().is_empty());
        assert_eq!(store.toggle(1, lookup), ToggleOutcome { added: true });
        assert!(store.save(&catalog()).is_err());
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let store = FavoritesStore::new(MemoryStorage::new(), KEY);
        store.save(&[catalog()[1].clone()]).unwrap();
        let before = store.load();

        assert_eq!(store.toggle(1, lookup), ToggleOutcome { added: true });
        assert_eq!(store.count(), 2);
        assert!(store.contains(1));

        assert_eq!(store.toggle(1, lookup), ToggleOutcome { added: false });
        assert_eq!(store.load(), before);
    }

    #[test]
    fn test_toggle_keeps_ids_unique() {
        let store = FavoritesStore::new(MemoryStorage::new(), KEY);

        for id in [1, 2, 1, 3, 3, 1, 2, 2, 1, 3] {
            store.toggle(id, lookup);
            let ids: Vec<ProductId> = store.load().iter().map(|f| f.id).collect();
            let unique: HashSet<ProductId> = ids.iter().copied().collect();
            assert_eq!(ids.len(), unique.len());
        }
    }

    #[test]
    fn test_favorite_is_a_snapshot() {
        let store = FavoritesStore::new(MemoryStorage::new(), KEY);
        store.toggle(1, lookup);

        // цена в каталоге поменялась, избранное хранит старую
        let repriced = |id| lookup(id).map(|mut p| {
            p.price = 9999.0;
            p
        });
        store.toggle(2, repriced);

        let favorites = store.load();
        assert_eq!(favorites[0].price, 3500.0);
        assert_eq!(favorites[1].price, 9999.0);
    }

    #[test]
    fn test_unresolvable_id_reports_added_but_stores_nothing() {
        let store = FavoritesStore::new(MemoryStorage::new(), KEY);

        let outcome = store.toggle(77, lookup);
        assert!(outcome.added);
        assert_eq!(store.count(), 0);
        assert!(!store.contains(77));
    }

    #[test]
    fn test_listener_sees_persisted_state() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let calls = Rc::new(Cell::new(0));

        let store = FavoritesStore::new(MemoryStorage::new(), KEY).with_listener({
            let seen = seen.clone();
            let calls = calls.clone();
            move |favorites: &[ProductRecord]| {
                calls.set(calls.get() + 1);
                *seen.borrow_mut() = favorites.iter().map(|f| f.id).collect::<Vec<_>>();
            }
        });

        store.toggle(2, lookup);
        store.toggle(3, lookup);
        assert_eq!(*seen.borrow(), vec![2, 3]);

        store.toggle(2, lookup);
        assert_eq!(*seen.borrow(), vec![3]);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_storage_holds_json_array() {
        let storage = MemoryStorage::new();
        let store = FavoritesStore::new(storage.clone(), KEY);
        store.toggle(3, lookup);

        let raw = storage.get_item(KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["id"], 3);
        assert_eq!(value[0]["name"], "Chess Set");
    }
}
