use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::services::{AvailabilityService, DoctorService};

pub struct DoctorCellState {
    pub doctors: DoctorService,
    pub availability: AvailabilityService,
}

pub fn doctor_routes(state: Arc<DoctorCellState>) -> Router {
    Router::new()
        .route("/", get(handlers::list_doctors).post(handlers::create_doctor))
        .route(
            "/{doctor_id}",
            get(handlers::get_doctor)
                .put(handlers::update_doctor)
                .delete(handlers::delete_doctor),
        )
        .route(
            "/{doctor_id}/working-hours",
            get(handlers::list_working_hours)
                .post(handlers::add_working_hours)
                .delete(handlers::remove_working_hours),
        )
        .route(
            "/{doctor_id}/specialties",
            post(handlers::add_specialty).delete(handlers::remove_specialty),
        )
        .route("/{doctor_id}/availability", post(handlers::check_availability))
        .with_state(state)
}
