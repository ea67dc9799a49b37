// Shared helpers for the integration tests. Each test binds its own
// ephemeral port so tests can run concurrently.
#![allow(dead_code)]

use axum::Router;
use tokio::net::TcpListener;

pub async fn spawn_server(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve test app");
    });

    format!("http://{}", addr)
}

pub async fn get_json(base: &str, path: &str) -> serde_json::Value {
    let client = rquest::Client::builder().build().expect("build test client");
    let response = client
        .get(format!("{base}{path}"))
        .send()
        .await
        .expect("request failed");
    assert!(response.status().is_success());

    let bytes = response.bytes().await.expect("read body");
    serde_json::from_slice(&bytes).expect("parse body as JSON")
}
