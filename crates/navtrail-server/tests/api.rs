use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use navtrail_server::build_router;
use navtrail_server::state::AppState;

fn app() -> (Router, AppState) {
    let state = AppState::offline();
    (build_router(state.clone()), state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| json!(String::from_utf8_lossy(&bytes)))
    };
    (status, value)
}

async fn create_log(app: &Router, user: &str, title: &str) -> Value {
    let (status, log) = send(
        app,
        Method::POST,
        "/api/logs",
        Some(json!({
            "title": title,
            "description": "Island hopping",
            "startDate": "2024-07-01",
            "endDate": "2024-07-05",
            "isPublic": true,
            "userId": user,
            "tags": ["islands"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    log
}

#[tokio::test]
async fn health_reports_mock_integrations() {
    let (app, _) = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["integrations"]["weather"], "mock");
    assert_eq!(body["integrations"]["ai"], "mock");
}

#[tokio::test]
async fn log_lifecycle() {
    let (app, _) = app();
    let log = create_log(&app, "alice", "Greek islands").await;
    let id = log["id"].as_str().unwrap().to_string();
    assert_eq!(log["stats"]["totalDays"], 5);

    let (status, entry) = send(
        &app,
        Method::POST,
        &format!("/api/logs/{id}/entries"),
        Some(json!({
            "date": "2024-07-02",
            "title": "Ferry to Naxos",
            "mood": "excited",
            "location": {"name": "Naxos Port", "address": "Chora, Naxos, Greece"},
            "activities": ["Ferry crossing", "Beach afternoon"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let entry_id = entry["id"].as_str().unwrap().to_string();

    let (_, stats) = send(&app, Method::GET, &format!("/api/logs/{id}/stats"), None).await;
    assert_eq!(stats["totalEntries"], 1);
    assert_eq!(stats["citiesVisited"], json!(["Naxos"]));
    assert_eq!(stats["countriesVisited"], json!(["Greece"]));
    assert_eq!(stats["transportModes"]["boat"], 1);

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/logs/{id}/entries/{entry_id}"),
        Some(json!({"title": "Ferry to Paros"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Ferry to Paros");

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/logs/{id}/entries/{entry_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, log) = send(&app, Method::GET, &format!("/api/logs/{id}"), None).await;
    assert_eq!(log["entries"], json!([]));
    assert_eq!(log["locations"], json!([]));

    let (status, _) = send(&app, Method::DELETE, &format!("/api/logs/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, body) = send(&app, Method::GET, &format!("/api/logs/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains(&id));
}

#[tokio::test]
async fn photos_can_be_added_and_removed() {
    let (app, _) = app();
    let log = create_log(&app, "alice", "Greek islands").await;
    let id = log["id"].as_str().unwrap();
    let (_, entry) = send(
        &app,
        Method::POST,
        &format!("/api/logs/{id}/entries"),
        Some(json!({"date": "2024-07-03", "title": "Oia sunset"})),
    )
    .await;
    let entry_id = entry["id"].as_str().unwrap();

    let (status, photo) = send(
        &app,
        Method::POST,
        &format!("/api/logs/{id}/entries/{entry_id}/photos"),
        Some(json!({"url": "https://img.example/oia.jpg", "caption": "Sunset"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let photo_id = photo["id"].as_str().unwrap();

    let (_, stats) = send(&app, Method::GET, &format!("/api/logs/{id}/stats"), None).await;
    assert_eq!(stats["totalPhotos"], 1);

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/logs/{id}/entries/{entry_id}/photos/{photo_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn listing_filters_by_user_and_search() {
    let (app, _) = app();
    create_log(&app, "alice", "Greek islands").await;
    create_log(&app, "bob", "Scottish highlands").await;

    let (_, all) = send(&app, Method::GET, "/api/logs", None).await;
    assert_eq!(all.as_array().unwrap().len(), 2);

    let (_, bobs) = send(&app, Method::GET, "/api/logs?userId=bob", None).await;
    assert_eq!(bobs[0]["title"], "Scottish highlands");
    assert_eq!(bobs.as_array().unwrap().len(), 1);

    let (_, public) = send(&app, Method::GET, "/api/logs/public", None).await;
    assert_eq!(public.as_array().unwrap().len(), 2);

    let (_, found) = send(&app, Method::GET, "/api/logs/search?q=greek", None).await;
    assert_eq!(found.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn invalid_log_is_a_bad_request() {
    let (app, _) = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/logs",
        Some(json!({"title": " ", "startDate": "2024-07-01", "userId": "alice"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn malformed_requests_get_json_errors() {
    let (app, _) = app();

    let (status, body) = send(&app, Method::POST, "/api/logs", Some(json!({"title": "x"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("startDate"));

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/currency/convert?from=USD&to=EUR&amount=lots",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = send(&app, Method::GET, "/api/logs/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn null_end_date_clears_it() {
    let (app, _) = app();
    let log = create_log(&app, "alice", "Greek islands").await;
    let id = log["id"].as_str().unwrap();
    assert!(log["endDate"].is_string());

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/logs/{id}"),
        Some(json!({"endDate": null})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(updated["endDate"].is_null());
    assert_eq!(updated["stats"]["totalDays"], 1);
}

#[tokio::test]
async fn ai_routes_serve_mock_answers() {
    let (app, _) = app();
    let log = create_log(&app, "alice", "Greek islands").await;
    let id = log["id"].as_str().unwrap();

    let (status, reply) = send(
        &app,
        Method::POST,
        "/api/ai/chat",
        Some(json!({
            "messages": [{"role": "user", "content": "What is a sensible budget?"}],
            "logId": id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply["mock"], true);
    assert_eq!(reply["output"]["role"], "assistant");

    let (status, plan) = send(
        &app,
        Method::POST,
        "/api/ai/itinerary",
        Some(json!({"destination": "Athens", "days": 2, "interests": ["history"]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(plan["output"]["days"].as_array().unwrap().len(), 2);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/ai/itinerary",
        Some(json!({"destination": "Athens", "days": 30})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, insights) =
        send(&app, Method::GET, &format!("/api/logs/{id}/insights"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(insights["output"]["summary"].as_str().unwrap().starts_with("Over 5 days"));

    let (status, recs) =
        send(&app, Method::GET, "/api/ai/recommendations?userId=alice", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(recs["output"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn chat_with_unknown_log_is_not_found() {
    let (app, _) = app();
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/ai/chat",
        Some(json!({
            "messages": [{"role": "user", "content": "Hi"}],
            "logId": uuid::Uuid::new_v4()
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn proxies_fall_back_to_mocks() {
    let (app, _) = app();

    let (status, weather) = send(&app, Method::GET, "/api/weather?city=Athens", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(weather["source"], "mock");
    assert_eq!(weather["locationName"], "Athens");

    let (_, forecast) =
        send(&app, Method::GET, "/api/weather/forecast?lat=37.98&lng=23.72", None).await;
    assert_eq!(forecast["days"].as_array().unwrap().len(), 5);

    let (_, rates) = send(&app, Method::GET, "/api/currency/rates", None).await;
    assert_eq!(rates["base"], "USD");
    assert_eq!(rates["rates"]["USD"], 1.0);

    let (_, converted) = send(
        &app,
        Method::GET,
        "/api/currency/convert?from=USD&to=EUR&amount=100",
        None,
    )
    .await;
    assert_eq!(converted["result"], 92.0);

    let (_, places) = send(&app, Method::GET, "/api/places/search?query=Colosseum", None).await;
    assert_eq!(places["results"][0]["name"], "Colosseum");

    let (_, geocoded) =
        send(&app, Method::GET, "/api/places/geocode?address=Rome%2C%20Italy", None).await;
    assert_eq!(geocoded["address"], "Rome, Italy");

    let (status, route) = send(
        &app,
        Method::GET,
        "/api/directions?fromLat=37.98&fromLng=23.72&toLat=37.94&toLng=23.65&mode=walking",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(route["source"], "mock");
    assert_eq!(route["mode"], "walking");
}

#[tokio::test]
async fn proxy_input_errors_are_bad_requests() {
    let (app, _) = app();

    let (status, _) = send(&app, Method::GET, "/api/weather", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/currency/convert?from=USD&to=XYZ&amount=1",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("XYZ"));

    let (status, _) = send(&app, Method::GET, "/api/places/geocode?address=Atlantis", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn seeded_demo_log_is_served() {
    let (app, state) = app();
    let demo = navtrail_storage::seed::seed_demo(&state.store).await.unwrap();

    let (status, log) = send(&app, Method::GET, &format!("/api/logs/{}", demo.id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(log["entries"].as_array().unwrap().len(), 3);
}
