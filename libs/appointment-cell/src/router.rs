use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::services::{AppointmentService, ScheduleAppointmentService};

pub struct AppointmentCellState {
    pub appointments: AppointmentService,
    pub scheduler: ScheduleAppointmentService,
}

pub fn appointment_routes(state: Arc<AppointmentCellState>) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::list_appointments).post(handlers::schedule_appointment),
        )
        .route("/{appointment_id}", get(handlers::get_appointment))
        .with_state(state)
}
