mod config;
mod routes;

use leptos::prelude::get_configuration;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let leptos_options = get_configuration(None)
        .expect("leptos configuration: missing [package.metadata.leptos]")
        .leptos_options;

    let app = routes::app(leptos_options, config.emailjs);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "agency-site listening");
    axum::serve(listener, app).await.expect("server failed");
}
