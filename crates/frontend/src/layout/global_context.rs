use crate::routes::routes::Page;
use crate::shared::api_utils::{load_catalog, load_config};
use crate::shared::dom;
use crate::shared::storage::BrowserStorage;
use contracts::domain::a001_product::{ProductId, ProductRecord};
use contracts::domain::a002_catalog::CatalogStore;
use contracts::domain::a003_favorites::{FavoritesStore, ToggleOutcome};
use contracts::shared::config::SiteConfig;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Page controller: owns the catalog, the favorites mirror and chrome state.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub config: RwSignal<SiteConfig>,
    pub page: RwSignal<Page>,
    pub catalog: RwSignal<CatalogStore>,
    /// Set once `config.toml` (or the embedded fallback) has been applied
    pub config_loaded: RwSignal<bool>,
    pub catalog_loaded: RwSignal<bool>,
    /// Last persisted favorites; written only by the favorites store listener
    pub favorites: RwSignal<Vec<ProductRecord>>,
    pub favorites_open: RwSignal<bool>,
    pub mobile_menu_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        let config = SiteConfig::embedded();
        let favorites =
            FavoritesStore::new(BrowserStorage, config.storage.favorites_key.clone()).load();

        Self {
            catalog: RwSignal::new(CatalogStore::new(
                Vec::new(),
                config.catalog.supplementary_categories.clone(),
            )),
            config: RwSignal::new(config),
            page: RwSignal::new(Page::from_pathname(&dom::current_pathname())),
            config_loaded: RwSignal::new(false),
            catalog_loaded: RwSignal::new(false),
            favorites: RwSignal::new(favorites),
            favorites_open: RwSignal::new(false),
            mobile_menu_open: RwSignal::new(false),
        }
    }

    /// Loads config, then the product sheet. Runs once per page load.
    pub fn init(&self) {
        let ctx = *self;
        spawn_local(async move {
            let config = load_config().await;
            ctx.config.set(config.clone());
            ctx.config_loaded.set(true);
            ctx.refresh_favorites();

            let records = load_catalog(&config).await;
            ctx.catalog.set(CatalogStore::new(
                records,
                config.catalog.supplementary_categories.clone(),
            ));
            ctx.catalog_loaded.set(true);
        });
    }

    fn favorites_store(&self) -> FavoritesStore<BrowserStorage> {
        let favorites = self.favorites;
        let key = self
            .config
            .with_untracked(|config| config.storage.favorites_key.clone());

        FavoritesStore::new(BrowserStorage, key)
            .with_listener(move |saved| favorites.set(saved.to_vec()))
    }

    pub fn refresh_favorites(&self) {
        self.favorites.set(self.favorites_store().load());
    }

    /// Like/unlike a product. Badge and favorites panel refresh through the
    /// store listener.
    pub fn toggle_favorite(&self, id: ProductId) -> ToggleOutcome {
        let catalog = self.catalog;
        self.favorites_store().toggle(id, |id| {
            catalog.with_untracked(|catalog| catalog.find(id).cloned())
        })
    }

    pub fn favorites_count(&self) -> usize {
        self.favorites.with(|favorites| favorites.len())
    }

    pub fn toggle_favorites_modal(&self) {
        let open = !self.favorites_open.get_untracked();
        self.favorites_open.set(open);
        dom::set_page_scroll_locked(open);

        if self.mobile_menu_open.get_untracked() {
            self.close_mobile_menu();
        }
    }

    pub fn open_mobile_menu(&self) {
        self.mobile_menu_open.set(true);
        dom::set_page_scroll_locked(true);
    }

    pub fn close_mobile_menu(&self) {
        if !self.mobile_menu_open.get_untracked() {
            return;
        }
        self.mobile_menu_open.set(false);
        // The favorites modal keeps the page locked while it is open.
        dom::set_page_scroll_locked(self.favorites_open.get_untracked());
    }

    pub fn toggle_mobile_menu(&self) {
        if self.mobile_menu_open.get_untracked() {
            self.close_mobile_menu();
        } else {
            self.open_mobile_menu();
        }
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to use the page controller.
pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
