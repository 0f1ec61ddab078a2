use super::*;

async fn spawn_app() -> String {
    let options = LeptosOptions::builder()
        .output_name("agency-site")
        .site_root("target/routes-test-site")
        .build();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app(options, None)).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn healthz_reports_ok() {
    let base = spawn_app().await;
    let resp = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn missing_bundle_asset_is_not_found() {
    let base = spawn_app().await;
    let resp = reqwest::get(format!("{base}/pkg/agency-site.wasm")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
}
