#![allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing, missing_docs)]

//! Tests against a live server bound to a real socket.
//!
//! Exercises the same binary wiring as `main`: listener, router,
//! middleware, store. Uses `reqwest` as an ordinary HTTP client.

use std::net::SocketAddr;

use enquiry_service::api;
use enquiry_service::app_state::AppState;
use enquiry_service::config::{EnquiryVariant, ServiceConfig};
use enquiry_service::persistence::store::EnquiryStore;

async fn spawn_server(variant: EnquiryVariant) -> (SocketAddr, EnquiryStore) {
    let config = ServiceConfig {
        listen_addr: "127.0.0.1:0".parse().expect("valid listen addr"),
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        database_min_connections: 1,
        database_connect_timeout_secs: 5,
        request_timeout_secs: 5,
        cors_allowed_origins: vec!["http://localhost:3000".to_string()],
        variant,
    };

    let store = EnquiryStore::connect(&config).await.expect("connect");
    store.ensure_schema().await.expect("schema bootstrap");
    let app = api::build_app(AppState::new(store.clone(), variant), &config).expect("app");

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    (addr, store)
}

fn interest_payload() -> serde_json::Value {
    serde_json::json!({
        "name": "Jane Doe",
        "email": "jane@x.com",
        "company": "Acme",
        "employees": "11-50",
        "interest": "pricing",
        "message": "Tell me more"
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn live_interest_round_trip() {
    let (addr, store) = spawn_server(EnquiryVariant::Interest).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{addr}/enquiry"))
        .json(&interest_payload())
        .send()
        .await
        .expect("request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["interest"], "pricing");
    assert_eq!(store.count().await.expect("count"), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_submissions_are_all_stored() {
    let (addr, store) = spawn_server(EnquiryVariant::Interest).await;
    let client = reqwest::Client::new();
    let url = format!("http://{addr}/enquiry");

    let (first, second) = tokio::join!(
        client.post(&url).json(&interest_payload()).send(),
        client.post(&url).json(&interest_payload()).send(),
    );

    assert_eq!(first.expect("first request").status(), reqwest::StatusCode::OK);
    assert_eq!(
        second.expect("second request").status(),
        reqwest::StatusCode::OK
    );
    assert_eq!(store.count().await.expect("count"), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn live_health_check() {
    let (addr, _store) = spawn_server(EnquiryVariant::Phone).await;

    let response = reqwest::get(format!("http://{addr}/health"))
        .await
        .expect("request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(body["status"], "healthy");
}
