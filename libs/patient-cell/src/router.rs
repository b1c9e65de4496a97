use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::services::PatientService;

pub struct PatientCellState {
    pub patients: PatientService,
}

pub fn patient_routes(state: Arc<PatientCellState>) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::list_patients).post(handlers::create_patient),
        )
        .route(
            "/{patient_id}",
            get(handlers::get_patient)
                .put(handlers::update_patient)
                .delete(handlers::delete_patient),
        )
        .route("/search/name/{name}", get(handlers::search_by_name))
        .route(
            "/search/bloodType/{blood_type}",
            get(handlers::search_by_blood_type),
        )
        .route("/{patient_id}/allergies", post(handlers::add_allergy))
        .route(
            "/{patient_id}/medical-record",
            get(handlers::get_medical_record),
        )
        .route(
            "/{patient_id}/medical-record/diagnoses",
            post(handlers::add_diagnosis),
        )
        .route(
            "/{patient_id}/medical-record/treatments",
            post(handlers::add_treatment),
        )
        .route(
            "/{patient_id}/medical-record/medications",
            post(handlers::add_medication),
        )
        .with_state(state)
}
