use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::{datetime, AppError};

use crate::models::{CreateExaminationRequest, UpdateExaminationRequest};
use crate::router::ExaminationCellState;

#[axum::debug_handler]
pub async fn list_examinations(
    State(state): State<Arc<ExaminationCellState>>,
) -> Result<Json<Value>, AppError> {
    let examinations = state.examinations.list().await;
    let total = examinations.len();
    Ok(Json(json!({
        "examinations": examinations,
        "total": total
    })))
}

#[axum::debug_handler]
pub async fn create_examination(
    State(state): State<Arc<ExaminationCellState>>,
    Json(request): Json<CreateExaminationRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let examination = state.examinations.create(request).await?;
    Ok((StatusCode::CREATED, Json(json!(examination))))
}

#[axum::debug_handler]
pub async fn get_examination(
    State(state): State<Arc<ExaminationCellState>>,
    Path(examination_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let examination = state.examinations.get(examination_id).await?;
    Ok(Json(json!(examination)))
}

#[axum::debug_handler]
pub async fn update_examination(
    State(state): State<Arc<ExaminationCellState>>,
    Path(examination_id): Path<Uuid>,
    Json(request): Json<UpdateExaminationRequest>,
) -> Result<Json<Value>, AppError> {
    let examination = state.examinations.update(examination_id, request).await?;
    Ok(Json(json!(examination)))
}

#[axum::debug_handler]
pub async fn delete_examination(
    State(state): State<Arc<ExaminationCellState>>,
    Path(examination_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.examinations.delete(examination_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn search_by_patient(
    State(state): State<Arc<ExaminationCellState>>,
    Path(patient_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let examinations = state.examinations.find_by_patient(patient_id).await;
    let total = examinations.len();
    Ok(Json(json!({
        "examinations": examinations,
        "total": total
    })))
}

#[axum::debug_handler]
pub async fn search_by_type(
    State(state): State<Arc<ExaminationCellState>>,
    Path(examination_type): Path<String>,
) -> Result<Json<Value>, AppError> {
    let examinations = state.examinations.find_by_type(&examination_type).await;
    let total = examinations.len();
    Ok(Json(json!({
        "examinations": examinations,
        "total": total
    })))
}

#[axum::debug_handler]
pub async fn search_by_date(
    State(state): State<Arc<ExaminationCellState>>,
    Path(date): Path<String>,
) -> Result<Json<Value>, AppError> {
    let date = datetime::parse_date(&date)?;
    let examinations = state.examinations.find_by_date(date).await;
    let total = examinations.len();
    Ok(Json(json!({
        "examinations": examinations,
        "total": total
    })))
}
