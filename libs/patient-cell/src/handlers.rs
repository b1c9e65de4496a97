use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::AppError;

use crate::models::{
    AllergyRequest, CreatePatientRequest, RecordEntryRequest, UpdatePatientRequest,
};
use crate::router::PatientCellState;

#[axum::debug_handler]
pub async fn list_patients(
    State(state): State<Arc<PatientCellState>>,
) -> Result<Json<Value>, AppError> {
    let patients = state.patients.list().await;
    let total = patients.len();
    Ok(Json(json!({
        "patients": patients,
        "total": total
    })))
}

#[axum::debug_handler]
pub async fn create_patient(
    State(state): State<Arc<PatientCellState>>,
    Json(request): Json<CreatePatientRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let patient = state.patients.create(request).await?;
    Ok((StatusCode::CREATED, Json(json!(patient))))
}

#[axum::debug_handler]
pub async fn get_patient(
    State(state): State<Arc<PatientCellState>>,
    Path(patient_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let patient = state.patients.get(patient_id).await?;
    Ok(Json(json!(patient)))
}

#[axum::debug_handler]
pub async fn update_patient(
    State(state): State<Arc<PatientCellState>>,
    Path(patient_id): Path<Uuid>,
    Json(request): Json<UpdatePatientRequest>,
) -> Result<Json<Value>, AppError> {
    let patient = state.patients.update(patient_id, request).await?;
    Ok(Json(json!(patient)))
}

#[axum::debug_handler]
pub async fn delete_patient(
    State(state): State<Arc<PatientCellState>>,
    Path(patient_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.patients.delete(patient_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn search_by_name(
    State(state): State<Arc<PatientCellState>>,
    Path(name): Path<String>,
) -> Result<Json<Value>, AppError> {
    let patients = state.patients.find_by_name(&name).await;
    let total = patients.len();
    Ok(Json(json!({
        "patients": patients,
        "total": total
    })))
}

#[axum::debug_handler]
pub async fn search_by_blood_type(
    State(state): State<Arc<PatientCellState>>,
    Path(blood_type): Path<String>,
) -> Result<Json<Value>, AppError> {
    let patients = state.patients.find_by_blood_type(&blood_type).await;
    let total = patients.len();
    Ok(Json(json!({
        "patients": patients,
        "total": total
    })))
}

#[axum::debug_handler]
pub async fn add_allergy(
    State(state): State<Arc<PatientCellState>>,
    Path(patient_id): Path<Uuid>,
    Json(request): Json<AllergyRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let patient = state.patients.add_allergy(patient_id, request.allergy).await?;
    Ok((StatusCode::CREATED, Json(json!(patient))))
}

#[axum::debug_handler]
pub async fn get_medical_record(
    State(state): State<Arc<PatientCellState>>,
    Path(patient_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let record = state.patients.medical_record(patient_id).await?;
    Ok(Json(json!(record)))
}

#[axum::debug_handler]
pub async fn add_diagnosis(
    State(state): State<Arc<PatientCellState>>,
    Path(patient_id): Path<Uuid>,
    Json(request): Json<RecordEntryRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let record = state
        .patients
        .add_diagnosis(patient_id, request.description)
        .await?;
    Ok((StatusCode::CREATED, Json(json!(record))))
}

#[axum::debug_handler]
pub async fn add_treatment(
    State(state): State<Arc<PatientCellState>>,
    Path(patient_id): Path<Uuid>,
    Json(request): Json<RecordEntryRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let record = state
        .patients
        .add_treatment(patient_id, request.description)
        .await?;
    Ok((StatusCode::CREATED, Json(json!(record))))
}

#[axum::debug_handler]
pub async fn add_medication(
    State(state): State<Arc<PatientCellState>>,
    Path(patient_id): Path<Uuid>,
    Json(request): Json<RecordEntryRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let record = state
        .patients
        .add_medication(patient_id, request.description)
        .await?;
    Ok((StatusCode::CREATED, Json(json!(record))))
}
