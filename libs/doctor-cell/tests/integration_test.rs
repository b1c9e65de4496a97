use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use doctor_cell::models::Doctor;
use doctor_cell::router::{doctor_routes, DoctorCellState};
use doctor_cell::services::{AppointmentDirectory, AvailabilityService, DoctorService};
use shared_store::InMemoryStore;

struct NoAppointments;

#[async_trait::async_trait]
impl AppointmentDirectory for NoAppointments {
    async fn booked_times(&self, _doctor_id: Uuid) -> Vec<DateTime<Utc>> {
        Vec::new()
    }
}

fn test_app() -> Router {
    let store: Arc<InMemoryStore<Doctor>> = Arc::new(InMemoryStore::new());
    let doctors = DoctorService::new(store.clone());
    let availability = AvailabilityService::new(store, Arc::new(NoAppointments));
    doctor_routes(Arc::new(DoctorCellState {
        doctors,
        availability,
    }))
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_doctor(app: &Router) -> String {
    let (status, body) = send_json(
        app,
        "POST",
        "/",
        json!({
            "name": "Nadia Brennan",
            "rcm": "RCM-2210",
            "phone_number": "+353 1 555 0102",
            "specialties": ["Dermatology"]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn create_and_get_doctor() {
    let app = test_app();
    let id = create_doctor(&app).await;

    let (status, body) = send(&app, "GET", &format!("/{}", id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Nadia Brennan");
    assert_eq!(body["rcm"], "RCM-2210");
    assert_eq!(body["working_hours"], json!([]));
}

#[tokio::test]
async fn get_unknown_doctor_is_404_with_error_body() {
    let app = test_app();

    let (status, body) = send(&app, "GET", &format!("/{}", Uuid::new_v4())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Doctor not found");
}

#[tokio::test]
async fn update_doctor_patches_fields() {
    let app = test_app();
    let id = create_doctor(&app).await;

    let (status, body) = send_json(
        &app,
        "PUT",
        &format!("/{}", id),
        json!({"phone_number": "+353 1 555 0199"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["phone_number"], "+353 1 555 0199");
    assert_eq!(body["name"], "Nadia Brennan");
}

#[tokio::test]
async fn delete_doctor_then_get_is_404() {
    let app = test_app();
    let id = create_doctor(&app).await;

    let (status, _) = send(&app, "DELETE", &format!("/{}", id)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "GET", &format!("/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_doctors_filters_by_specialty() {
    let app = test_app();
    create_doctor(&app).await;

    let (status, body) = send(&app, "GET", "/?specialty=dermatology").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);

    let (_, body) = send(&app, "GET", "/?specialty=neurology").await;
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn duplicate_working_hours_conflict_leaves_list_unchanged() {
    let app = test_app();
    let id = create_doctor(&app).await;
    let entry = json!({"day": "Monday", "time_slot": "09:00 AM - 05:00 PM"});

    let (status, _) =
        send_json(&app, "POST", &format!("/{}/working-hours", id), entry.clone()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send_json(&app, "POST", &format!("/{}/working-hours", id), entry).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("Monday"));

    let (_, body) = send(&app, "GET", &format!("/{}/working-hours", id)).await;
    assert_eq!(body["working_hours"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn malformed_time_slot_is_rejected_with_400() {
    let app = test_app();
    let id = create_doctor(&app).await;

    let (status, body) = send_json(
        &app,
        "POST",
        &format!("/{}/working-hours", id),
        json!({"day": "Monday", "time_slot": "morning-ish"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Invalid time slot"));
}

#[tokio::test]
async fn remove_working_hours_requires_exact_match() {
    let app = test_app();
    let id = create_doctor(&app).await;
    send_json(
        &app,
        "POST",
        &format!("/{}/working-hours", id),
        json!({"day": "Monday", "time_slot": "09:00 AM - 05:00 PM"}),
    )
    .await;

    let (status, _) = send_json(
        &app,
        "DELETE",
        &format!("/{}/working-hours", id),
        json!({"day": "Tuesday", "time_slot": "09:00 AM - 05:00 PM"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send_json(
        &app,
        "DELETE",
        &format!("/{}/working-hours", id),
        json!({"day": "Monday", "time_slot": "9:00 AM - 5:00 PM"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["working_hours"], json!([]));
}

#[tokio::test]
async fn specialty_add_and_remove() {
    let app = test_app();
    let id = create_doctor(&app).await;

    let (status, _) = send_json(
        &app,
        "POST",
        &format!("/{}/specialties", id),
        json!({"specialty": "Dermatology"}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = send_json(
        &app,
        "POST",
        &format!("/{}/specialties", id),
        json!({"specialty": "Allergology"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["specialties"].as_array().unwrap().len(), 2);

    let (status, body) = send_json(
        &app,
        "DELETE",
        &format!("/{}/specialties", id),
        json!({"specialty": "Allergology"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["specialties"], json!(["Dermatology"]));
}

#[tokio::test]
async fn availability_endpoint_reports_bool() {
    let app = test_app();
    let id = create_doctor(&app).await;
    send_json(
        &app,
        "POST",
        &format!("/{}/working-hours", id),
        json!({"day": "Monday", "time_slot": "09:00 AM - 05:00 PM"}),
    )
    .await;

    // 2026-08-31 is a Monday.
    let (status, body) = send_json(
        &app,
        "POST",
        &format!("/{}/availability", id),
        json!({"date": "2026-08-31T10:00:00Z"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["available"], true);

    let (_, body) = send_json(
        &app,
        "POST",
        &format!("/{}/availability", id),
        json!({"date": "2026-08-31T08:00:00Z"}),
    )
    .await;
    assert_eq!(body["available"], false);
}

#[tokio::test]
async fn availability_with_malformed_date_is_400() {
    let app = test_app();
    let id = create_doctor(&app).await;

    let (status, body) = send_json(
        &app,
        "POST",
        &format!("/{}/availability", id),
        json!({"date": "next monday"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Invalid date"));
}
