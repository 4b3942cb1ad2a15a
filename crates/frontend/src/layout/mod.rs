pub mod footer;
pub mod global_context;
pub mod header;
pub mod hero_slider;
pub mod scroll_top;

use crate::domain::a003_favorites::ui::FavoritesModal;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;
use scroll_top::ScrollTopButton;

/// Page shell.
///
/// ```text
/// +------------------------------------------+
/// |        Header (+ mobile sidebar)         |
/// +------------------------------------------+
/// |       Home or Shop page content          |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
///
/// The favorites modal and scroll-to-top button float above the page.
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <header::Header />
        <main class="main-content">
            <AppRoutes />
        </main>
        <footer::Footer />
        <FavoritesModal />
        <ScrollTopButton />
    }
}
