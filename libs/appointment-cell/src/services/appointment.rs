use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use doctor_cell::services::AppointmentDirectory;
use shared_models::AppError;
use shared_store::InMemoryStore;

use crate::models::Appointment;

#[derive(Debug, Clone, Default)]
pub struct AppointmentFilter {
    pub doctor_id: Option<Uuid>,
    pub patient_id: Option<Uuid>,
    pub status: Option<String>,
}

#[derive(Clone)]
pub struct AppointmentService {
    store: Arc<InMemoryStore<Appointment>>,
}

impl AppointmentService {
    pub fn new(store: Arc<InMemoryStore<Appointment>>) -> Self {
        Self { store }
    }

    pub async fn get(&self, id: Uuid) -> Result<Appointment, AppError> {
        self.store
            .find_by_id(id)
            .await
            .ok_or_else(|| AppError::NotFound("Appointment not found".to_string()))
    }

    pub async fn list(&self, filter: AppointmentFilter) -> Vec<Appointment> {
        self.store
            .find_where(|appointment| {
                filter
                    .doctor_id
                    .map_or(true, |id| appointment.doctor_id == id)
                    && filter
                        .patient_id
                        .map_or(true, |id| appointment.patient_id == id)
                    && filter
                        .status
                        .as_deref()
                        .map_or(true, |status| appointment.status.eq_ignore_ascii_case(status))
            })
            .await
    }
}

/// Read-side adapter the doctor cell's availability check queries.
pub struct AppointmentBook {
    store: Arc<InMemoryStore<Appointment>>,
}

impl AppointmentBook {
    pub fn new(store: Arc<InMemoryStore<Appointment>>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AppointmentDirectory for AppointmentBook {
    async fn booked_times(&self, doctor_id: Uuid) -> Vec<DateTime<Utc>> {
        self.store
            .find_where(|appointment| appointment.doctor_id == doctor_id)
            .await
            .into_iter()
            .map(|appointment| appointment.date)
            .collect()
    }
}
