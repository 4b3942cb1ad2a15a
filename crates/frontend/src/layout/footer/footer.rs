use crate::layout::global_context::use_app_context;
use crate::routes::routes::NAV_LINKS;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_app_context();
    let phone = move || ctx.config.with(|config| format!("+{}", config.contact.whatsapp_number));

    view! {
        <footer data-zone="footer" class="site-footer">
            <div class="footer-brand">
                <h3>"RD Trading"</h3>
                <p>"Boards, partitions and game boards."</p>
            </div>
            <div class="footer-links">
                {NAV_LINKS
                    .iter()
                    .map(|(key, title)| view! { <a href={*key}>{*title}</a> })
                    .collect_view()}
            </div>
            <div class="footer-contact">
                <span>"WhatsApp: "</span>
                <span>{phone}</span>
            </div>
        </footer>
    }
}
