//! In-process HTTP tests: the full router driven with `oneshot`

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::{Body, to_bytes};
use http::{Method, Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use park_server::ai::{FlowRunner, InferenceProvider, RetryPolicy, ScriptedProvider, UnconfiguredProvider};
use park_server::api::build_app;
use park_server::{Config, ServerState, ZoneStore};

const PHOTO: &str = "data:image/jpeg;base64,aGVsbG8=";
const UNAVAILABLE: &str =
    "The AI verification service is currently unavailable. Please try again later.";

fn app_with(provider: Arc<dyn InferenceProvider>) -> Router {
    let config = Config::from_lookup(|_| None);
    let flows = FlowRunner::new(provider, RetryPolicy::new(3, Duration::from_millis(1)));
    build_app(ServerState::with_parts(config, ZoneStore::seeded(), flows))
}

fn app(provider: &ScriptedProvider) -> Router {
    app_with(Arc::new(provider.clone()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    let request = match body {
        Some(b) => builder.body(Body::from(b.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn available(app: &Router, zone_id: &str) -> u64 {
    let (_, zone) = send(app, Method::GET, &format!("/api/zones/{zone_id}"), None).await;
    zone["availableSpaces"].as_u64().unwrap()
}

// ========== Zones ==========

#[tokio::test]
async fn test_health() {
    let app = app(&ScriptedProvider::new());
    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["zones"], 4);
    assert_eq!(body["provider"], "scripted");
    assert!(body["serverTime"].is_string());
}

#[tokio::test]
async fn test_list_zones_in_seed_order() {
    let app = app(&ScriptedProvider::new());
    let (status, body) = send(&app, Method::GET, "/api/zones", None).await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|z| z["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["zone-a", "zone-b", "zone-c", "zone-d"]);
    assert_eq!(body[0]["totalSpaces"], 100);
    assert_eq!(body[0]["availableSpaces"], 75);
}

#[tokio::test]
async fn test_get_unknown_zone_is_404() {
    let app = app(&ScriptedProvider::new());
    let (status, body) = send(&app, Method::GET, "/api/zones/zone-x", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 1001);
    assert_eq!(body["message"], "Parking zone not found.");
    assert_eq!(body["details"]["zone_id"], "zone-x");
}

#[tokio::test]
async fn test_book_until_full() {
    let app = app(&ScriptedProvider::new());

    for expected in (0..10).rev() {
        let (status, body) = send(&app, Method::POST, "/api/zones/zone-b/book", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(
            body["message"],
            "Booking confirmed for Market Zone B. One spot reserved."
        );
        assert_eq!(body["zone"]["availableSpaces"], expected);
    }

    let (status, body) = send(&app, Method::POST, "/api/zones/zone-b/book", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "Sorry, no available spaces left in this zone."
    );
    assert!(body.get("zone").is_none());
    assert_eq!(available(&app, "zone-b").await, 0);
}

#[tokio::test]
async fn test_book_unknown_zone() {
    let app = app(&ScriptedProvider::new());
    let (status, body) = send(&app, Method::POST, "/api/zones/nope/book", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Parking zone not found.");
}

#[tokio::test]
async fn test_occupancy_is_clamped() {
    let app = app(&ScriptedProvider::new());

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/zones/zone-a/occupancy",
        Some(json!({ "occupiedSpaces": 40 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));
    assert_eq!(available(&app, "zone-a").await, 60);

    send(
        &app,
        Method::PUT,
        "/api/zones/zone-a/occupancy",
        Some(json!({ "occupiedSpaces": 150 })),
    )
    .await;
    assert_eq!(available(&app, "zone-a").await, 0);

    send(
        &app,
        Method::PUT,
        "/api/zones/zone-a/occupancy",
        Some(json!({ "occupiedSpaces": -5 })),
    )
    .await;
    assert_eq!(available(&app, "zone-a").await, 100);
}

#[tokio::test]
async fn test_occupancy_unknown_zone() {
    let app = app(&ScriptedProvider::new());
    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/zones/zone-x/occupancy",
        Some(json!({ "occupiedSpaces": 1 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "success": false }));
}

// ========== AI flows ==========

#[tokio::test]
async fn test_vehicle_count_updates_zone() {
    let provider = ScriptedProvider::new().reply(r#"{"vehicleCount":20}"#);
    let app = app(&provider);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/zones/zone-c/vehicle-count",
        Some(json!({ "photoDataUri": PHOTO })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vehicleCount"], 20);
    assert_eq!(body["success"], true);
    assert_eq!(body["zone"]["availableSpaces"], 180);
    assert_eq!(available(&app, "zone-c").await, 180);
}

#[tokio::test]
async fn test_vehicle_count_unknown_zone_skips_model() {
    let provider = ScriptedProvider::new().reply(r#"{"vehicleCount":3}"#);
    let app = app(&provider);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/zones/zone-x/vehicle-count",
        Some(json!({ "photoDataUri": PHOTO })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_vehicle_count_malformed_output_leaves_zone() {
    let provider = ScriptedProvider::new().reply(r#"{"count":"many"}"#);
    let app = app(&provider);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/zones/zone-a/vehicle-count",
        Some(json!({ "photoDataUri": PHOTO })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], 2002);
    assert_eq!(available(&app, "zone-a").await, 75);
}

#[tokio::test]
async fn test_verify_success() {
    let provider = ScriptedProvider::new()
        .unavailable()
        .reply(r#"{"isVerified":true,"reason":"All details look valid."}"#);
    let app = app(&provider);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/verify",
        Some(json!({
            "vehicleNumber": "MH-12-AB-1234",
            "mobileNumber": "9876543210",
            "userPhotoDataUri": PHOTO,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "isVerified": true, "reason": "All details look valid." })
    );
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn test_verify_unavailable_after_retries() {
    let provider = ScriptedProvider::new()
        .unavailable()
        .unavailable()
        .unavailable();
    let app = app(&provider);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/verify",
        Some(json!({
            "vehicleNumber": "MH-12-AB-1234",
            "mobileNumber": "9876543210",
            "userPhotoDataUri": PHOTO,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], 2001);
    assert_eq!(body["message"], UNAVAILABLE);
    assert_eq!(body["details"]["attempts"], 3);
    assert_eq!(provider.calls(), 3);
}

#[tokio::test]
async fn test_verify_rejects_bad_mobile() {
    let provider = ScriptedProvider::new();
    let app = app(&provider);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/verify",
        Some(json!({
            "vehicleNumber": "MH-12-AB-1234",
            "mobileNumber": "98765",
            "userPhotoDataUri": PHOTO,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);
    assert_eq!(
        body["details"]["mobile_number"],
        json!(["Mobile number must be 10 digits."])
    );
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_verify_without_api_key_is_unavailable() {
    let app = app_with(Arc::new(UnconfiguredProvider));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/verify",
        Some(json!({
            "vehicleNumber": "MH-12-AB-1234",
            "mobileNumber": "9876543210",
            "userPhotoDataUri": PHOTO,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["message"], UNAVAILABLE);
    assert_eq!(body["details"]["attempts"], 1);
}

#[tokio::test]
async fn test_assistant_answers() {
    let provider = ScriptedProvider::new().reply(r#"{"answer":"Temple Zone C has the most space."}"#);
    let app = app(&provider);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/assistant",
        Some(json!({ "query": "Where should I park near the temple?" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["answer"], "Temple Zone C has the most space.");
}

#[tokio::test]
async fn test_assistant_rejects_empty_query() {
    let provider = ScriptedProvider::new();
    let app = app(&provider);

    let (status, _) = send(&app, Method::POST, "/api/assistant", Some(json!({ "query": "" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(provider.calls(), 0);
}
