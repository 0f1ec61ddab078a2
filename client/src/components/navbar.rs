//! Top navigation bar with section links, theme toggle, and quote button.

use leptos::prelude::*;

use crate::app::SITE_NAME;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// In-page anchors shown in the navbar, in page order.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "#home"),
    ("About", "#about"),
    ("Services", "#services"),
    ("Process", "#process"),
    ("Testimonials", "#testimonials"),
    ("Contact", "#contact"),
];

#[component]
pub fn Navbar(on_quote: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_theme = move |_| {
        let next = dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };
    let on_menu = move |_| ui.update(UiState::toggle_menu);
    let on_quote_click = move |_| {
        ui.update(UiState::close_menu);
        on_quote.run(());
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="#home">{SITE_NAME}</a>
            <ul class=move || if ui.get().menu_open { "navbar__links navbar__links--open" } else { "navbar__links" }>
                {NAV_LINKS
                    .iter()
                    .map(|(label, href)| {
                        view! {
                            <li>
                                <a href=*href on:click=move |_| ui.update(UiState::close_menu)>{*label}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="navbar__actions">
                <button class="navbar__theme" on:click=on_theme title="Toggle dark mode">
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>
                <button class="gradient-btn navbar__quote" on:click=on_quote_click>"Get a Quote"</button>
                <button class="navbar__menu" on:click=on_menu aria-label="Toggle menu">"☰"</button>
            </div>
        </nav>
    }
}
