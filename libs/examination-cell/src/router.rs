use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::services::ExaminationService;

pub struct ExaminationCellState {
    pub examinations: ExaminationService,
}

pub fn examination_routes(state: Arc<ExaminationCellState>) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::list_examinations).post(handlers::create_examination),
        )
        .route(
            "/{examination_id}",
            get(handlers::get_examination)
                .put(handlers::update_examination)
                .delete(handlers::delete_examination),
        )
        .route(
            "/search/patient/{patient_id}",
            get(handlers::search_by_patient),
        )
        .route(
            "/search/type/{examination_type}",
            get(handlers::search_by_type),
        )
        .route("/search/date/{date}", get(handlers::search_by_date))
        .with_state(state)
}
