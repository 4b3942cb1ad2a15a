pub mod view_model;

use crate::domain::a001_product::ui::card::ProductCard;
use crate::layout::global_context::use_app_context;
use crate::shared::empty_state::EmptyStateView;
use contracts::domain::a002_catalog::CategoryFilter;
use leptos::prelude::*;
pub use view_model::{shop_view, ShopView};

/// Shop page: category sidebar, product counter and filtered grid.
#[component]
pub fn ShopPage() -> impl IntoView {
    let ctx = use_app_context();
    let filter = RwSignal::new(CategoryFilter::All);

    // Favorites are read untracked: liking a product must not rebuild the grid.
    let shop = Memo::new(move |_| {
        let config = ctx.config.get();
        let favorites = ctx.favorites.get_untracked();
        let list = filter.with(|f| ctx.catalog.with(|catalog| catalog.filter(f)));
        shop_view(&list, &favorites, &config)
    });

    let select = move |next: CategoryFilter| {
        filter.set(next);
        ctx.close_mobile_menu();
    };
    let on_reset = Callback::new(move |next: CategoryFilter| select(next));

    let categories = move || {
        ctx.catalog.with(|catalog| {
            catalog
                .distinct_categories()
                .into_iter()
                .filter(|category| !category.is_empty())
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="shop-layout">
            <aside class="shop-sidebar">
                <h3>"Categories"</h3>
                <ul class="category-list">
                    <li
                        class:active=move || filter.with(|f| *f == CategoryFilter::All)
                        on:click=move |_| select(CategoryFilter::All)
                    >
                        "All Products"
                    </li>
                    <For
                        each=categories
                        key=|category| category.clone()
                        let:category
                    >
                        {{
                            let selected = CategoryFilter::Category(category.clone());
                            let target = selected.clone();
                            view! {
                                <li
                                    class:active=move || filter.with(|f| *f == selected)
                                    on:click=move |_| select(target.clone())
                                >
                                    {category}
                                </li>
                            }
                        }}
                    </For>
                </ul>
            </aside>

            <section class="shop-main">
                <p class="shop-summary">
                    "Showing " <span id="product-count">{move || shop.with(|s| s.count()).to_string()}</span> " products"
                </p>
                <div id="shop-grid" class="product-grid">
                    {move || {
                        if !ctx.catalog_loaded.get() {
                            return view! { <p class="grid-loading">"Loading products..."</p> }.into_any();
                        }
                        match shop.get() {
                            ShopView::Empty(state) => view! {
                                <div class="grid-empty">
                                    <EmptyStateView state=state on_reset=on_reset />
                                </div>
                            }.into_any(),
                            ShopView::Grid { cards, .. } => cards
                                .into_iter()
                                .map(|card| view! { <ProductCard card=card /> })
                                .collect_view()
                                .into_any(),
                        }
                    }}
                </div>
            </section>
        </div>
    }
}
