use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use patient_cell::services::PatientService;
use shared_models::{datetime, AppError};
use shared_store::InMemoryStore;

use crate::models::{CreateExaminationRequest, Examination, UpdateExaminationRequest};

#[derive(Clone)]
pub struct ExaminationService {
    store: Arc<InMemoryStore<Examination>>,
    patients: PatientService,
}

impl ExaminationService {
    pub fn new(store: Arc<InMemoryStore<Examination>>, patients: PatientService) -> Self {
        Self { store, patients }
    }

    pub async fn create(&self, request: CreateExaminationRequest) -> Result<Examination, AppError> {
        let date = datetime::parse_date(&request.date)?;

        // Verifies the owning patient before anything is stored.
        self.patients.get(request.patient_id).await?;

        debug!(
            "Recording {} examination for patient {}",
            request.examination_type, request.patient_id
        );

        let examination = Examination {
            id: Uuid::new_v4(),
            patient_id: request.patient_id,
            examination_type: request.examination_type,
            date,
            observations: request.observations.unwrap_or_default(),
        };

        self.store.add(examination.id, examination.clone()).await?;
        self.patients
            .record_examination(examination.patient_id, examination.id)
            .await?;

        Ok(examination)
    }

    pub async fn get(&self, id: Uuid) -> Result<Examination, AppError> {
        self.store
            .find_by_id(id)
            .await
            .ok_or_else(|| AppError::NotFound("Examination not found".to_string()))
    }

    pub async fn list(&self) -> Vec<Examination> {
        self.store.find_all().await
    }

    pub async fn find_by_patient(&self, patient_id: Uuid) -> Vec<Examination> {
        self.store
            .find_where(|examination| examination.patient_id == patient_id)
            .await
    }

    pub async fn find_by_type(&self, examination_type: &str) -> Vec<Examination> {
        self.store
            .find_where(|examination| {
                examination
                    .examination_type
                    .eq_ignore_ascii_case(examination_type)
            })
            .await
    }

    pub async fn find_by_date(&self, date: NaiveDate) -> Vec<Examination> {
        self.store
            .find_where(|examination| examination.date == date)
            .await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateExaminationRequest,
    ) -> Result<Examination, AppError> {
        debug!("Updating examination {}", id);

        let date = match request.date {
            Some(ref raw) => Some(datetime::parse_date(raw)?),
            None => None,
        };

        self.store
            .modify(id, |examination| {
                if let Some(examination_type) = request.examination_type {
                    examination.examination_type = examination_type;
                }
                if let Some(date) = date {
                    examination.date = date;
                }
                if let Some(observations) = request.observations {
                    examination.observations = observations;
                }
                examination.clone()
            })
            .await
            .map_err(|_| AppError::NotFound("Examination not found".to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        debug!("Deleting examination {}", id);

        self.store
            .delete(id)
            .await
            .map(|_| ())
            .map_err(|_| AppError::NotFound("Examination not found".to_string()))
    }
}
