use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use appointment_cell::notify::Notifier;
use appointment_cell::router::{appointment_routes, AppointmentCellState};
use appointment_cell::services::{AppointmentBook, AppointmentService, ScheduleAppointmentService};
use doctor_cell::router::{doctor_routes, DoctorCellState};
use doctor_cell::services::{AvailabilityService, DoctorService};
use examination_cell::router::{examination_routes, ExaminationCellState};
use examination_cell::services::ExaminationService;
use patient_cell::router::{patient_routes, PatientCellState};
use patient_cell::services::PatientService;
use shared_store::InMemoryStore;

/// Composition root: every store and service is built here and injected
/// into its cell. Nothing module-level, nothing ambient.
pub fn create_router(notifier: Arc<dyn Notifier>) -> Router {
    let doctor_store = Arc::new(InMemoryStore::new());
    let patient_store = Arc::new(InMemoryStore::new());
    let appointment_store = Arc::new(InMemoryStore::new());
    let examination_store = Arc::new(InMemoryStore::new());

    let doctors = DoctorService::new(doctor_store.clone());
    let patients = PatientService::new(patient_store);
    let availability = AvailabilityService::new(
        doctor_store,
        Arc::new(AppointmentBook::new(appointment_store.clone())),
    );
    let scheduler = ScheduleAppointmentService::new(
        appointment_store.clone(),
        patients.clone(),
        doctors.clone(),
        availability.clone(),
        notifier,
    );
    let appointments = AppointmentService::new(appointment_store);
    let examinations = ExaminationService::new(examination_store, patients.clone());

    Router::new()
        .route("/health", get(health))
        .nest(
            "/api/doctors",
            doctor_routes(Arc::new(DoctorCellState {
                doctors,
                availability,
            })),
        )
        .nest(
            "/api/patients",
            patient_routes(Arc::new(PatientCellState { patients })),
        )
        .nest(
            "/api/appointments",
            appointment_routes(Arc::new(AppointmentCellState {
                appointments,
                scheduler,
            })),
        )
        .nest(
            "/api/examinations",
            examination_routes(Arc::new(ExaminationCellState { examinations })),
        )
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Hospital Management API is running"
    }))
}
