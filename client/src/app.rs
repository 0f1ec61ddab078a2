//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use quote_flow::EmailJsConfig;

use crate::pages::home::HomePage;
use crate::state::ui::UiState;
use crate::util::dark_mode;

pub const SITE_NAME: &str = "Brightline Studio";

/// HTML shell rendered on the server for SSR + hydration.
///
/// When `emailjs` is configured its identifiers are rendered as `<meta>` tags,
/// which the hydrated quote form reads back at submit time.
pub fn shell(options: LeptosOptions, emailjs: Option<EmailJsConfig>) -> impl IntoView {
    let emailjs_meta = emailjs
        .map(|cfg| {
            cfg.meta_tags()
                .into_iter()
                .map(|(name, content)| view! { <meta name=name content=content.to_owned()/> })
                .collect_view()
        });

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                {emailjs_meta}
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared UI context and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    // Apply the stored theme once the browser side is running.
    Effect::new(move || {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/agency-site.css"/>
        <Title text=SITE_NAME/>
        <Meta
            name="description"
            content="Design, marketing, social media, networking, IT security and video production for growing businesses."
        />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
