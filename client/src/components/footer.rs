//! Page footer.

use leptos::prelude::*;

use crate::app::SITE_NAME;
use crate::components::navbar::NAV_LINKS;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <span class="footer__brand">{SITE_NAME}</span>
            <nav class="footer__links">
                {NAV_LINKS
                    .iter()
                    .map(|(label, href)| view! { <a href=*href>{*label}</a> })
                    .collect_view()}
            </nav>
            <span class="footer__copy">"© "{SITE_NAME}". All rights reserved."</span>
        </footer>
    }
}
