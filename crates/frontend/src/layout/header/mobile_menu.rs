use crate::layout::global_context::use_app_context;
use crate::routes::routes::NAV_LINKS;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Slide-in sidebar for small screens; page scroll is locked while open.
#[component]
pub fn MobileMenu(current: String) -> impl IntoView {
    let ctx = use_app_context();
    let is_open = move || ctx.mobile_menu_open.get();

    let links = NAV_LINKS
        .iter()
        .map(|(key, title)| {
            let is_active = current == *key;
            view! {
                <a href={*key} data-mobile-page={*key} class:current=is_active>
                    {*title}
                </a>
            }
        })
        .collect_view();

    view! {
        <div
            class="mobile-overlay"
            class:active=is_open
            on:click=move |_| ctx.close_mobile_menu()
        ></div>
        <aside id="mobileSidebar" class="mobile-sidebar" class:open=is_open>
            <button class="mobile-close" on:click=move |_| ctx.close_mobile_menu()>
                {icon("x")}
            </button>
            <nav class="mobile-links">{links}</nav>
            <button class="mobile-fav" on:click=move |_| ctx.toggle_favorites_modal()>
                {icon("heart")}
                " Wishlist"
            </button>
        </aside>
    }
}
