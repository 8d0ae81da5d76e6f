//! API integration tests

use std::sync::Arc;

use chrono::NaiveDate;
use reqwest::{redirect::Policy, Client, StatusCode};
use serde_json::{json, Value};

use occupancy_tracker::{
    config::{AppConfig, RosterConfig},
    create_router,
    repository::Repository,
    services::{clock::FixedClock, Services},
    AppState,
};

/// Start the router on an ephemeral port and return the API base URL
async fn spawn_app(strict_guests: bool) -> String {
    let config = AppConfig {
        roster: RosterConfig {
            rooms: vec!["101".into(), "102".into(), "103".into(), "104".into()],
            strict_guests,
        },
        ..Default::default()
    };

    let today = NaiveDate::from_ymd_opt(2024, 1, 5).expect("valid date");
    let services = Services::new(
        Repository::new(),
        config.roster.clone(),
        config.share.clone(),
        Arc::new(FixedClock(today)),
    );
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, create_router(state))
            .await
            .expect("Server error");
    });

    format!("http://{}/api/v1", addr)
}

fn client() -> Client {
    Client::builder()
        .redirect(Policy::none())
        .build()
        .expect("Failed to build client")
}

/// Helper to create a session and return its ID
async fn create_session(client: &Client, base_url: &str, body: Value) -> String {
    let response = client
        .post(format!("{}/sessions", base_url))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_str().expect("No session ID").to_string()
}

async fn put_room(client: &Client, base_url: &str, id: &str, room: &str, body: Value) -> reqwest::Response {
    client
        .put(format!("{}/sessions/{}/rooms/{}", base_url, id, room))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request")
}

async fn toggle(client: &Client, base_url: &str, id: &str, room: &str, extra: &str) -> Value {
    let response = client
        .post(format!("{}/sessions/{}/rooms/{}/extras", base_url, id, room))
        .json(&json!({ "extra": extra }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    response.json().await.expect("Failed to parse response")
}

#[tokio::test]
async fn test_health_check() {
    let base_url = spawn_app(false).await;

    let response = client()
        .get(format!("{}/health", base_url))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_list_rooms() {
    let base_url = spawn_app(false).await;

    let body: Value = client()
        .get(format!("{}/rooms", base_url))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(body["rooms"], json!(["101", "102", "103", "104"]));
    assert_eq!(body["statuses"], json!(["occ", "VC", "DND", "S/O", "VD"]));
    assert_eq!(body["strict_guests"], false);
}

#[tokio::test]
async fn test_new_session_defaults() {
    let base_url = spawn_app(false).await;
    let client = client();

    // No body at all
    let response = client
        .post(format!("{}/sessions", base_url))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["context"]["date"], "2024-01-05");
    assert_eq!(body["context"]["attendant"], "");
    assert_eq!(body["rooms"].as_array().map(Vec::len), Some(4));
    assert_eq!(body["rooms"][0], json!({ "room": "101", "status": "", "guests": "", "extras": [] }));
}

#[tokio::test]
async fn test_full_report_flow() {
    let base_url = spawn_app(false).await;
    let client = client();
    let id = create_session(&client, &base_url, json!({ "attendant": "Jane" })).await;

    let response = put_room(&client, &base_url, &id, "101", json!({ "status": "occ", "guests": "2" })).await;
    assert!(response.status().is_success());
    let response = put_room(&client, &base_url, &id, "102", json!({ "status": "VC" })).await;
    assert!(response.status().is_success());
    let record = toggle(&client, &base_url, &id, "103", "Babycot").await;
    assert_eq!(record["extras"], json!(["Babycot"]));

    let text = client
        .get(format!("{}/sessions/{}/report/text", base_url, id))
        .send()
        .await
        .expect("Failed to send request")
        .text()
        .await
        .expect("Failed to read body");

    assert_eq!(
        text,
        "Occupancy - Morning\nDate: Jan 5, 2024\nAttendant: Jane\n\n101- occ 2\n102- VC\n\nBabycot: 103"
    );

    let body: Value = client
        .get(format!("{}/sessions/{}/report", base_url, id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(body["text"], text.as_str());
    assert_eq!(body["share"]["enabled"], true);
    assert!(body["share"]["url"]
        .as_str()
        .expect("No share URL")
        .starts_with("https://wa.me/?text=Occupancy%20-%20Morning"));
}

#[tokio::test]
async fn test_toggle_extra_twice_restores_room() {
    let base_url = spawn_app(false).await;
    let client = client();
    let id = create_session(&client, &base_url, json!({})).await;

    toggle(&client, &base_url, &id, "104", "Extra Bed").await;
    let record = toggle(&client, &base_url, &id, "104", "Babycot").await;
    assert_eq!(record["extras"], json!(["Babycot", "Extra Bed"]));

    toggle(&client, &base_url, &id, "104", "Babycot").await;
    let record = toggle(&client, &base_url, &id, "104", "Babycot").await;
    assert_eq!(record["extras"], json!(["Babycot", "Extra Bed"]));
}

#[tokio::test]
async fn test_share_requires_attendant() {
    let base_url = spawn_app(false).await;
    let client = client();
    let id = create_session(&client, &base_url, json!({})).await;

    let response = client
        .get(format!("{}/sessions/{}/share", base_url, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "ShareDisabled");

    let response = client
        .put(format!("{}/sessions/{}/context", base_url, id))
        .json(&json!({ "attendant": "Jane" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/sessions/{}/share", base_url, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .expect("No location header");
    assert!(location.starts_with("https://wa.me/?text="));
    assert!(location.contains("Attendant%3A%20Jane"));
}

#[tokio::test]
async fn test_strict_guest_count() {
    let base_url = spawn_app(true).await;
    let client = client();
    let id = create_session(&client, &base_url, json!({})).await;

    let response = put_room(&client, &base_url, &id, "101", json!({ "status": "occ", "guests": "12" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "BadValue");

    let response = put_room(&client, &base_url, &id, "101", json!({ "status": "occ", "guests": "10" })).await;
    assert!(response.status().is_success());
}

#[tokio::test]
async fn test_unknown_session_and_room() {
    let base_url = spawn_app(false).await;
    let client = client();

    let response = client
        .get(format!("{}/sessions/{}", base_url, uuid::Uuid::new_v4()))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "NoSuchSession");

    let id = create_session(&client, &base_url, json!({})).await;
    let response = put_room(&client, &base_url, &id, "999", json!({ "status": "VC" })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "NoSuchRoom");
}

#[tokio::test]
async fn test_delete_session() {
    let base_url = spawn_app(false).await;
    let client = client();
    let id = create_session(&client, &base_url, json!({})).await;

    let response = client
        .delete(format!("{}/sessions/{}", base_url, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = client
        .get(format!("{}/sessions/{}/report", base_url, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_stateless_report() {
    let base_url = spawn_app(false).await;

    let response = client()
        .post(format!("{}/report", base_url))
        .json(&json!({
            "attendant": "",
            "rooms": [
                { "room": "201", "status": "DND" },
                { "room": "202", "extras": ["Extra Bed"] },
                { "room": "203", "status": "occ", "guests": "" }
            ]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["text"],
        "Occupancy - Morning\nDate: \nAttendant: \n\n201- DND\n203- occ\n\nExtra Bed: 202"
    );
    assert_eq!(body["share"]["enabled"], false);
    assert!(body["share"]["url"].is_null());
}

#[tokio::test]
async fn test_malformed_session_body_rejected() {
    let base_url = spawn_app(false).await;
    let client = client();

    let response = client
        .post(format!("{}/sessions", base_url))
        .json(&json!({ "date": "05/01/2024", "attendant": "Jane" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "BadValue");
    assert!(body["message"].is_string());

    let response = client
        .get(format!("{}/ready", base_url))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["sessions"], 0);
}

#[tokio::test]
async fn test_invalid_codes_return_error_body() {
    let base_url = spawn_app(false).await;
    let client = client();
    let id = create_session(&client, &base_url, json!({})).await;

    let response = put_room(&client, &base_url, &id, "101", json!({ "status": "OOO" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "BadValue");

    let response = client
        .post(format!("{}/sessions/{}/rooms/101/extras", base_url, id))
        .json(&json!({ "extra": "Crib" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_stateless_report_rejects_repeated_room() {
    let base_url = spawn_app(false).await;

    let response = client()
        .post(format!("{}/report", base_url))
        .json(&json!({
            "attendant": "Jane",
            "rooms": [
                { "room": "201", "status": "VC" },
                { "room": "201", "status": "VD" }
            ]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "BadValue");
    assert!(body["message"]
        .as_str()
        .expect("No message")
        .contains("more than once"));
}
