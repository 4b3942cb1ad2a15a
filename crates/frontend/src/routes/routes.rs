use crate::domain::a001_product::ui::home::HomePage;
use crate::domain::a001_product::ui::shop::ShopPage;
use crate::layout::global_context::use_app_context;
use leptos::prelude::*;

/// Navigation entries: (page key, title)
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("index.html", "Home"),
    ("shop.html", "Shop"),
    ("about.html", "About Us"),
    ("contact.html", "Contact"),
];

/// Page file name from a location path; the site root is `index.html`.
pub fn page_key(pathname: &str) -> String {
    match pathname.rsplit('/').next() {
        Some(last) if !last.is_empty() => last.to_string(),
        _ => "index.html".to_string(),
    }
}

/// Which grid a page renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Shop,
}

impl Page {
    pub fn from_pathname(pathname: &str) -> Self {
        match page_key(pathname).as_str() {
            "shop.html" | "shop" => Page::Shop,
            _ => Page::Home,
        }
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_app_context();

    move || match ctx.page.get() {
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::Shop => view! { <ShopPage /> }.into_any(),
    }
}
