use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::AppError;

use crate::models::ScheduleAppointmentRequest;
use crate::router::AppointmentCellState;
use crate::services::AppointmentFilter;

#[derive(Debug, Deserialize)]
pub struct AppointmentListQuery {
    #[serde(alias = "doctorId")]
    pub doctor_id: Option<Uuid>,
    #[serde(alias = "patientId")]
    pub patient_id: Option<Uuid>,
    pub status: Option<String>,
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<AppointmentCellState>>,
    Query(query): Query<AppointmentListQuery>,
) -> Result<Json<Value>, AppError> {
    let appointments = state
        .appointments
        .list(AppointmentFilter {
            doctor_id: query.doctor_id,
            patient_id: query.patient_id,
            status: query.status,
        })
        .await;

    let total = appointments.len();
    Ok(Json(json!({
        "appointments": appointments,
        "total": total
    })))
}

#[axum::debug_handler]
pub async fn schedule_appointment(
    State(state): State<Arc<AppointmentCellState>>,
    Json(request): Json<ScheduleAppointmentRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let appointment = state.scheduler.execute(request).await?;
    Ok((StatusCode::CREATED, Json(json!(appointment))))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<Arc<AppointmentCellState>>,
    Path(appointment_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let appointment = state.appointments.get(appointment_id).await?;
    Ok(Json(json!(appointment)))
}
