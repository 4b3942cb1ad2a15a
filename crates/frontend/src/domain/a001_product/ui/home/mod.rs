pub mod view_model;

use crate::domain::a001_product::ui::card::ProductCard;
use crate::layout::global_context::use_app_context;
use crate::layout::hero_slider::HeroSlider;
use crate::shared::tabs::{TabItem, TabSwitcher};
use leptos::prelude::*;
pub use view_model::{arrange_sections, home_view, CategorySection};

fn info_tabs() -> Vec<TabItem> {
    vec![
        TabItem {
            key: "boards",
            title: "Boards",
            body: "Whiteboards, greenboards and notice boards in standard and custom sizes.",
        },
        TabItem {
            key: "office",
            title: "Office",
            body: "Partitions and easels built to order for offices and training rooms.",
        },
        TabItem {
            key: "games",
            title: "Games",
            body: "Carrom and chess boards for home, school and club play.",
        },
    ]
}

#[component]
fn CategorySectionView(section: CategorySection) -> impl IntoView {
    let CategorySection {
        category,
        title,
        cards,
        show,
    } = section;

    view! {
        <section class="category-section" style:display={if show { "block" } else { "none" }}>
            <div class="section-header">
                <h2>{title}</h2>
                <a href="shop.html" class="view-all">"View all"</a>
            </div>
            <div id=format!("{}-grid", category) class="product-grid">
                {cards
                    .into_iter()
                    .map(|card| view! { <ProductCard card=card /> })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Home page: hero slider, capped category grids, info tabs.
#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();

    let sections = move || {
        let config = ctx.config.get();
        let favorites = ctx.favorites.get_untracked();
        let sections = ctx
            .catalog
            .with(|catalog| home_view(catalog, &favorites, &config));
        arrange_sections(sections, &config.catalog.home_sections)
    };

    view! {
        <Show when=move || ctx.config_loaded.get()>
            <HeroSlider />
        </Show>
        <div class="home-categories">
            {move || {
                sections()
                    .into_iter()
                    .map(|section| view! { <CategorySectionView section=section /> })
                    .collect_view()
            }}
        </div>
        <section class="info-section">
            <TabSwitcher tabs=info_tabs() />
        </section>
    }
}
