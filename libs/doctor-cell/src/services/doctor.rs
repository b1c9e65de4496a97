use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use shared_models::AppError;
use shared_store::InMemoryStore;

use crate::models::{
    CreateDoctorRequest, DayOfWeek, Doctor, TimeSlot, UpdateDoctorRequest, WorkingHours,
};

#[derive(Clone)]
pub struct DoctorService {
    store: Arc<InMemoryStore<Doctor>>,
}

impl DoctorService {
    pub fn new(store: Arc<InMemoryStore<Doctor>>) -> Self {
        Self { store }
    }

    pub async fn create(&self, request: CreateDoctorRequest) -> Result<Doctor, AppError> {
        debug!("Creating doctor profile for {}", request.name);

        let doctor = Doctor {
            id: Uuid::new_v4(),
            name: request.name,
            rcm: request.rcm,
            specialties: request.specialties,
            phone_number: request.phone_number,
            working_hours: WorkingHours::new(),
        };

        self.store.add(doctor.id, doctor.clone()).await?;
        Ok(doctor)
    }

    pub async fn get(&self, id: Uuid) -> Result<Doctor, AppError> {
        self.store
            .find_by_id(id)
            .await
            .ok_or_else(|| AppError::NotFound("Doctor not found".to_string()))
    }

    pub async fn list(&self) -> Vec<Doctor> {
        self.store.find_all().await
    }

    pub async fn find_by_specialization(&self, specialty: &str) -> Vec<Doctor> {
        self.store
            .find_where(|doctor| {
                doctor
                    .specialties
                    .iter()
                    .any(|s| s.eq_ignore_ascii_case(specialty))
            })
            .await
    }

    pub async fn update(&self, id: Uuid, request: UpdateDoctorRequest) -> Result<Doctor, AppError> {
        debug!("Updating doctor profile {}", id);

        self.store
            .modify(id, |doctor| {
                if let Some(name) = request.name {
                    doctor.name = name;
                }
                if let Some(rcm) = request.rcm {
                    doctor.rcm = rcm;
                }
                if let Some(phone_number) = request.phone_number {
                    doctor.phone_number = phone_number;
                }
                doctor.clone()
            })
            .await
            .map_err(|_| AppError::NotFound("Doctor not found".to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        debug!("Deleting doctor profile {}", id);

        self.store
            .delete(id)
            .await
            .map(|_| ())
            .map_err(|_| AppError::NotFound("Doctor not found".to_string()))
    }

    /// Appends a working-hours window. An identical `{day, slot}` pair is
    /// rejected here by a linear scan; overlapping-but-different slots are
    /// allowed.
    pub async fn add_working_hours(
        &self,
        id: Uuid,
        day: DayOfWeek,
        time_slot: &str,
    ) -> Result<Doctor, AppError> {
        let slot = TimeSlot::parse(time_slot)?;
        debug!("Adding working hours {} {} for doctor {}", day, slot, id);

        self.store
            .modify(id, |doctor| {
                if doctor.working_hours.contains(day, &slot) {
                    return Err(AppError::Conflict(format!(
                        "Doctor already has working hours on {} at {}",
                        day, slot
                    )));
                }
                doctor.working_hours.add_hours(day, slot);
                Ok(doctor.clone())
            })
            .await
            .map_err(|_| AppError::NotFound("Doctor not found".to_string()))?
    }

    pub async fn remove_working_hours(
        &self,
        id: Uuid,
        day: DayOfWeek,
        time_slot: &str,
    ) -> Result<Doctor, AppError> {
        let slot = TimeSlot::parse(time_slot)?;
        debug!("Removing working hours {} {} for doctor {}", day, slot, id);

        self.store
            .modify(id, |doctor| {
                if !doctor.working_hours.contains(day, &slot) {
                    return Err(AppError::NotFound(
                        "Working hours entry not found".to_string(),
                    ));
                }
                doctor.working_hours.remove_hours(day, &slot);
                Ok(doctor.clone())
            })
            .await
            .map_err(|_| AppError::NotFound("Doctor not found".to_string()))?
    }

    pub async fn add_specialty(&self, id: Uuid, specialty: String) -> Result<Doctor, AppError> {
        debug!("Adding specialty '{}' to doctor {}", specialty, id);

        self.store
            .modify(id, |doctor| {
                if doctor
                    .specialties
                    .iter()
                    .any(|s| s.eq_ignore_ascii_case(&specialty))
                {
                    return Err(AppError::Conflict(format!(
                        "Doctor already has specialty '{}'",
                        specialty
                    )));
                }
                doctor.specialties.push(specialty);
                Ok(doctor.clone())
            })
            .await
            .map_err(|_| AppError::NotFound("Doctor not found".to_string()))?
    }

    pub async fn remove_specialty(&self, id: Uuid, specialty: &str) -> Result<Doctor, AppError> {
        debug!("Removing specialty '{}' from doctor {}", specialty, id);

        self.store
            .modify(id, |doctor| {
                let before = doctor.specialties.len();
                doctor.specialties.retain(|s| !s.eq_ignore_ascii_case(specialty));
                if doctor.specialties.len() == before {
                    return Err(AppError::NotFound(format!(
                        "Specialty '{}' not found for this doctor",
                        specialty
                    )));
                }
                Ok(doctor.clone())
            })
            .await
            .map_err(|_| AppError::NotFound("Doctor not found".to_string()))?
    }
}
