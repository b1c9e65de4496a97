use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::{datetime, AppError};

use crate::models::{
    AvailabilityCheckRequest, CreateDoctorRequest, SpecialtyRequest, UpdateDoctorRequest,
    WorkingHoursRequest,
};
use crate::router::DoctorCellState;

#[derive(Debug, Deserialize)]
pub struct DoctorListQuery {
    pub specialty: Option<String>,
}

#[axum::debug_handler]
pub async fn list_doctors(
    State(state): State<Arc<DoctorCellState>>,
    Query(query): Query<DoctorListQuery>,
) -> Result<Json<Value>, AppError> {
    let doctors = match query.specialty {
        Some(ref specialty) => state.doctors.find_by_specialization(specialty).await,
        None => state.doctors.list().await,
    };

    let total = doctors.len();
    Ok(Json(json!({
        "doctors": doctors,
        "total": total
    })))
}

#[axum::debug_handler]
pub async fn create_doctor(
    State(state): State<Arc<DoctorCellState>>,
    Json(request): Json<CreateDoctorRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let doctor = state.doctors.create(request).await?;
    Ok((StatusCode::CREATED, Json(json!(doctor))))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(state): State<Arc<DoctorCellState>>,
    Path(doctor_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let doctor = state.doctors.get(doctor_id).await?;
    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn update_doctor(
    State(state): State<Arc<DoctorCellState>>,
    Path(doctor_id): Path<Uuid>,
    Json(request): Json<UpdateDoctorRequest>,
) -> Result<Json<Value>, AppError> {
    let doctor = state.doctors.update(doctor_id, request).await?;
    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn delete_doctor(
    State(state): State<Arc<DoctorCellState>>,
    Path(doctor_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.doctors.delete(doctor_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn list_working_hours(
    State(state): State<Arc<DoctorCellState>>,
    Path(doctor_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let doctor = state.doctors.get(doctor_id).await?;
    Ok(Json(json!({
        "working_hours": doctor.working_hours
    })))
}

#[axum::debug_handler]
pub async fn add_working_hours(
    State(state): State<Arc<DoctorCellState>>,
    Path(doctor_id): Path<Uuid>,
    Json(request): Json<WorkingHoursRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let doctor = state
        .doctors
        .add_working_hours(doctor_id, request.day, &request.time_slot)
        .await?;
    Ok((StatusCode::CREATED, Json(json!(doctor))))
}

#[axum::debug_handler]
pub async fn remove_working_hours(
    State(state): State<Arc<DoctorCellState>>,
    Path(doctor_id): Path<Uuid>,
    Json(request): Json<WorkingHoursRequest>,
) -> Result<Json<Value>, AppError> {
    let doctor = state
        .doctors
        .remove_working_hours(doctor_id, request.day, &request.time_slot)
        .await?;
    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn add_specialty(
    State(state): State<Arc<DoctorCellState>>,
    Path(doctor_id): Path<Uuid>,
    Json(request): Json<SpecialtyRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let doctor = state
        .doctors
        .add_specialty(doctor_id, request.specialty)
        .await?;
    Ok((StatusCode::CREATED, Json(json!(doctor))))
}

#[axum::debug_handler]
pub async fn remove_specialty(
    State(state): State<Arc<DoctorCellState>>,
    Path(doctor_id): Path<Uuid>,
    Json(request): Json<SpecialtyRequest>,
) -> Result<Json<Value>, AppError> {
    let doctor = state
        .doctors
        .remove_specialty(doctor_id, &request.specialty)
        .await?;
    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn check_availability(
    State(state): State<Arc<DoctorCellState>>,
    Path(doctor_id): Path<Uuid>,
    Json(request): Json<AvailabilityCheckRequest>,
) -> Result<Json<Value>, AppError> {
    let when = datetime::parse_utc(&request.date)?;
    let available = state
        .availability
        .is_doctor_available(doctor_id, when)
        .await?;

    Ok(Json(json!({
        "available": available
    })))
}
