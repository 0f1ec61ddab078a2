//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the Leptos SSR page at `/`, the compiled WASM/JS/CSS
//! bundle under `/pkg`, and a `/healthz` probe. Quote requests never touch
//! this server: the hydrated page posts them straight to EmailJS using the
//! identifiers rendered into its `<meta>` tags.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use quote_flow::EmailJsConfig;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Leptos SSR frontend plus static assets and health probe.
pub fn app(leptos_options: LeptosOptions, emailjs: Option<EmailJsConfig>) -> Router {
    let routes = generate_route_list(client::app::App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone(), emailjs.clone())
        })
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
