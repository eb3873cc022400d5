use attendance_web::errors::AttendanceError;
use attendance_web::remote::{AttendanceApi, HttpAttendanceClient, Increments};
use attendance_web::Config;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;

type Seen = Arc<Mutex<Vec<(String, Value)>>>;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 21).unwrap()
}

async fn respond(
    seen: &Seen,
    path: &str,
    body: Value,
    reply: (StatusCode, Value),
) -> (StatusCode, Json<Value>) {
    seen.lock().unwrap().push((path.to_string(), body));
    (reply.0, Json(reply.1))
}

async fn start_mock() -> (String, Seen) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route(
            "/update",
            patch(|State(seen): State<Seen>, Json(body): Json<Value>| async move {
                let reply = if body["courseName"] == "Ghost" {
                    (StatusCode::NOT_FOUND, json!({ "message": "Course not found" }))
                } else if body["courseName"] == "Clash" {
                    (StatusCode::CONFLICT, json!({ "message": "conflicting update" }))
                } else {
                    (StatusCode::OK, json!({ "ok": true }))
                };
                respond(&seen, "/update", body, reply).await
            }),
        )
        .route(
            "/absent",
            post(|State(seen): State<Seen>, Json(body): Json<Value>| async move {
                respond(&seen, "/absent", body, (StatusCode::CONFLICT, json!({ "message": "already marked" }))).await
            }),
        )
        .route(
            "/cancel",
            post(|State(seen): State<Seen>, Json(body): Json<Value>| async move {
                seen.lock().unwrap().push(("/cancel".to_string(), body));
                StatusCode::INTERNAL_SERVER_ERROR
            }),
        )
        .route(
            "/extra",
            post(|State(seen): State<Seen>, Json(body): Json<Value>| async move {
                respond(&seen, "/extra", body, (StatusCode::CONFLICT, json!({ "message": "duplicate extra class" }))).await
            }),
        )
        .route(
            "/",
            get(|| async {
                Json(json!([
                    { "courseName": "AIML", "attended": 3, "total": 4, "_id": "a1" },
                    { "courseName": "CD", "attended": 0, "total": 0 }
                ]))
            }),
        )
        .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), seen)
}

fn client(api_base: &str, status_api_base: &str) -> HttpAttendanceClient {
    HttpAttendanceClient::new(&Config {
        port: 0,
        api_base: api_base.to_string(),
        status_api_base: status_api_base.to_string(),
        request_timeout: Duration::from_secs(5),
    })
    .unwrap()
}

#[tokio::test]
async fn update_sends_camel_case_body_with_secret() {
    let (base, seen) = start_mock().await;
    let api = client(&base, &base);

    api.update_attendance("CD", Increments::ABSENT, "open-sesame")
        .await
        .unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen[0].0, "/update");
    assert_eq!(
        seen[0].1,
        json!({
            "courseName": "CD",
            "incrementAttended": 0,
            "incrementTotal": 1,
            "secret": "open-sesame"
        })
    );
}

#[tokio::test]
async fn server_message_is_surfaced() {
    let (base, _) = start_mock().await;
    let api = client(&base, &base);

    let err = api
        .update_attendance("Ghost", Increments::ATTENDED, "s")
        .await
        .unwrap_err();

    assert_eq!(err, AttendanceError::remote("Course not found"));
}

#[tokio::test]
async fn conflict_on_update_is_a_failure() {
    let (base, _) = start_mock().await;
    let api = client(&base, &base);

    let err = api
        .update_attendance("Clash", Increments::ATTENDED, "s")
        .await
        .unwrap_err();

    assert_eq!(err, AttendanceError::remote("conflicting update"));
}

#[tokio::test]
async fn conflict_on_absent_counts_as_success() {
    let (base, seen) = start_mock().await;
    let api = client(&base, &base);

    api.mark_absent("AIML", date(), "s").await.unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(
        seen[0].1,
        json!({ "courseName": "AIML", "date": "2026-10-21", "secret": "s" })
    );
}

#[tokio::test]
async fn bodyless_failure_uses_fallback_message() {
    let (base, _) = start_mock().await;
    let api = client(&base, &base);

    let err = api.mark_cancelled("CD", date(), "s").await.unwrap_err();

    assert_eq!(err.to_string(), "Failed to mark cancelled");
}

#[tokio::test]
async fn conflict_on_extra_is_a_failure() {
    let (base, _) = start_mock().await;
    let api = client(&base, &base);

    let err = api.record_extra("CD", date(), "s").await.unwrap_err();

    assert_eq!(err.to_string(), "duplicate extra class");
}

#[tokio::test]
async fn listing_uses_status_base_url() {
    let (base, _) = start_mock().await;
    let api = client("http://127.0.0.1:9", &base);

    let records = api.list_attendance().await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id.as_deref(), Some("a1"));
    assert_eq!(records[1].total, 0);
}

#[tokio::test]
async fn unreachable_service_is_network_unavailable() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let api = client(&format!("http://127.0.0.1:{port}"), "http://127.0.0.1:9");

    let err = api
        .update_attendance("CD", Increments::ATTENDED, "s")
        .await
        .unwrap_err();

    assert!(matches!(err, AttendanceError::NetworkUnavailable(_)));
}
