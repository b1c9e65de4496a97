use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use appointment_cell::models::Appointment;
use appointment_cell::notify::LogNotifier;
use appointment_cell::router::{appointment_routes, AppointmentCellState};
use appointment_cell::services::{
    AppointmentBook, AppointmentService, ScheduleAppointmentService,
};
use doctor_cell::models::{CreateDoctorRequest, DayOfWeek, Doctor};
use doctor_cell::services::{AvailabilityService, DoctorService};
use patient_cell::models::{CreatePatientRequest, Patient};
use patient_cell::services::PatientService;
use shared_store::InMemoryStore;

struct TestApp {
    app: Router,
    patients: PatientService,
    doctors: DoctorService,
}

fn build_app() -> TestApp {
    let patient_store: Arc<InMemoryStore<Patient>> = Arc::new(InMemoryStore::new());
    let doctor_store: Arc<InMemoryStore<Doctor>> = Arc::new(InMemoryStore::new());
    let appointment_store: Arc<InMemoryStore<Appointment>> = Arc::new(InMemoryStore::new());

    let patients = PatientService::new(patient_store);
    let doctors = DoctorService::new(doctor_store.clone());
    let availability = AvailabilityService::new(
        doctor_store,
        Arc::new(AppointmentBook::new(appointment_store.clone())),
    );
    let scheduler = ScheduleAppointmentService::new(
        appointment_store.clone(),
        patients.clone(),
        doctors.clone(),
        availability,
        Arc::new(LogNotifier),
    );
    let appointments = AppointmentService::new(appointment_store);

    let app = appointment_routes(Arc::new(AppointmentCellState {
        appointments,
        scheduler,
    }));

    TestApp {
        app,
        patients,
        doctors,
    }
}

async fn seed(world: &TestApp) -> (Uuid, Uuid) {
    let patient = world
        .patients
        .create(CreatePatientRequest {
            name: "Aoife Doyle".to_string(),
            identification_document: "ID-7781".to_string(),
            email: "aoife.doyle@example.com".to_string(),
            phone_number: "+353 1 555 0200".to_string(),
            blood_type: "O+".to_string(),
            allergies: Vec::new(),
        })
        .await
        .unwrap();

    let doctor = world
        .doctors
        .create(CreateDoctorRequest {
            name: "Greta Olsen".to_string(),
            rcm: "RCM-4411".to_string(),
            phone_number: "+353 1 555 0101".to_string(),
            specialties: Vec::new(),
        })
        .await
        .unwrap();
    world
        .doctors
        .add_working_hours(doctor.id, DayOfWeek::Monday, "09:00 AM - 05:00 PM")
        .await
        .unwrap();

    (patient.id, doctor.id)
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

async fn send(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn schedule_via_http_returns_created_appointment() {
    let world = build_app();
    let (patient_id, doctor_id) = seed(&world).await;

    // 2026-08-31 is a Monday.
    let (status, body) = send_json(
        &world.app,
        "POST",
        "/",
        json!({
            "date": "2026-08-31T10:00:00Z",
            "patientId": patient_id,
            "doctorId": doctor_id,
            "reason": "Routine check"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "scheduled");
    assert_eq!(body["patient_id"], json!(patient_id));

    let id = body["id"].as_str().unwrap();
    let (status, fetched) = send(&world.app, &format!("/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["reason"], "Routine check");
}

#[tokio::test]
async fn schedule_with_unknown_patient_is_404() {
    let world = build_app();
    let (_, doctor_id) = seed(&world).await;

    let (status, body) = send_json(
        &world.app,
        "POST",
        "/",
        json!({
            "date": "2026-08-31T10:00:00Z",
            "patientId": Uuid::new_v4(),
            "doctorId": doctor_id
        }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Patient not found");

    let (_, list) = send(&world.app, "/").await;
    assert_eq!(list["total"], 0);
}

#[tokio::test]
async fn double_booking_is_409() {
    let world = build_app();
    let (patient_id, doctor_id) = seed(&world).await;
    let request = json!({
        "date": "2026-08-31T10:00:00Z",
        "patientId": patient_id,
        "doctorId": doctor_id
    });

    let (status, _) = send_json(&world.app, "POST", "/", request.clone()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send_json(&world.app, "POST", "/", request).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("not available"));
}

#[tokio::test]
async fn list_filters_by_doctor_patient_and_status() {
    let world = build_app();
    let (patient_id, doctor_id) = seed(&world).await;
    send_json(
        &world.app,
        "POST",
        "/",
        json!({
            "date": "2026-08-31T10:00:00Z",
            "patientId": patient_id,
            "doctorId": doctor_id
        }),
    )
    .await;

    let (_, body) = send(&world.app, &format!("/?doctor_id={}", doctor_id)).await;
    assert_eq!(body["total"], 1);

    let (_, body) = send(&world.app, &format!("/?doctor_id={}", Uuid::new_v4())).await;
    assert_eq!(body["total"], 0);

    let (_, body) = send(&world.app, "/?status=scheduled").await;
    assert_eq!(body["total"], 1);

    let (_, body) = send(&world.app, "/?status=cancelled").await;
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn get_unknown_appointment_is_404() {
    let world = build_app();

    let (status, body) = send(&world.app, &format!("/{}", Uuid::new_v4())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Appointment not found");
}
