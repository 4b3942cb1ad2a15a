use super::mobile_menu::MobileMenu;
use crate::domain::a003_favorites::ui::FavoritesBadge;
use crate::layout::global_context::use_app_context;
use crate::routes::routes::{page_key, NAV_LINKS};
use crate::shared::dom;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let current = page_key(&dom::current_pathname());

    let links = NAV_LINKS
        .iter()
        .map(|(key, title)| {
            let is_active = current == *key;
            view! {
                <a href={*key} data-page={*key} class:active=is_active>
                    {*title}
                </a>
            }
        })
        .collect_view();

    view! {
        <header class="site-header">
            <a href="index.html" class="logo">"RD Trading"</a>
            <nav class="navbar">{links}</nav>
            <div class="header-actions">
                <button class="fav-toggle" title="Wishlist" on:click=move |_| ctx.toggle_favorites_modal()>
                    {icon("heart")}
                    <FavoritesBadge />
                </button>
                <button class="menu-toggle" title="Menu" on:click=move |_| ctx.toggle_mobile_menu()>
                    {icon("menu")}
                </button>
            </div>
        </header>
        <MobileMenu current=current />
    }
}
