use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use shared_models::AppError;
use shared_store::InMemoryStore;

use crate::models::{
    CreatePatientRequest, Diagnosis, MedicalRecord, Medication, Patient, Treatment,
    UpdatePatientRequest,
};

#[derive(Clone)]
pub struct PatientService {
    store: Arc<InMemoryStore<Patient>>,
}

impl PatientService {
    pub fn new(store: Arc<InMemoryStore<Patient>>) -> Self {
        Self { store }
    }

    pub async fn create(&self, request: CreatePatientRequest) -> Result<Patient, AppError> {
        debug!("Creating patient profile for {}", request.name);

        let patient = Patient {
            id: Uuid::new_v4(),
            name: request.name,
            identification_document: request.identification_document,
            email: request.email,
            phone_number: request.phone_number,
            blood_type: request.blood_type,
            allergies: request.allergies,
            appointments: Vec::new(),
            examinations: Vec::new(),
            medical_record: MedicalRecord::default(),
        };

        self.store.add(patient.id, patient.clone()).await?;
        Ok(patient)
    }

    pub async fn get(&self, id: Uuid) -> Result<Patient, AppError> {
        self.store
            .find_by_id(id)
            .await
            .ok_or_else(|| AppError::NotFound("Patient not found".to_string()))
    }

    pub async fn list(&self) -> Vec<Patient> {
        self.store.find_all().await
    }

    pub async fn find_by_name(&self, name: &str) -> Vec<Patient> {
        let needle = name.to_lowercase();
        self.store
            .find_where(|patient| patient.name.to_lowercase().contains(&needle))
            .await
    }

    pub async fn find_by_blood_type(&self, blood_type: &str) -> Vec<Patient> {
        self.store
            .find_where(|patient| patient.blood_type.eq_ignore_ascii_case(blood_type))
            .await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdatePatientRequest,
    ) -> Result<Patient, AppError> {
        debug!("Updating patient profile {}", id);

        self.store
            .modify(id, |patient| {
                if let Some(name) = request.name {
                    patient.name = name;
                }
                if let Some(identification_document) = request.identification_document {
                    patient.identification_document = identification_document;
                }
                if let Some(email) = request.email {
                    patient.email = email;
                }
                if let Some(phone_number) = request.phone_number {
                    patient.phone_number = phone_number;
                }
                if let Some(blood_type) = request.blood_type {
                    patient.blood_type = blood_type;
                }
                patient.clone()
            })
            .await
            .map_err(|_| AppError::NotFound("Patient not found".to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        debug!("Deleting patient profile {}", id);

        self.store
            .delete(id)
            .await
            .map(|_| ())
            .map_err(|_| AppError::NotFound("Patient not found".to_string()))
    }

    pub async fn add_allergy(&self, id: Uuid, allergy: String) -> Result<Patient, AppError> {
        debug!("Recording allergy '{}' for patient {}", allergy, id);

        self.store
            .modify(id, |patient| {
                patient.allergies.push(allergy);
                patient.clone()
            })
            .await
            .map_err(|_| AppError::NotFound("Patient not found".to_string()))
    }

    /// Called by the scheduling orchestrator once an appointment is stored.
    pub async fn record_appointment(
        &self,
        id: Uuid,
        appointment_id: Uuid,
    ) -> Result<(), AppError> {
        self.store
            .modify(id, |patient| patient.appointments.push(appointment_id))
            .await
            .map_err(|_| AppError::NotFound("Patient not found".to_string()))
    }

    /// Called by the examination cell once an examination is stored.
    pub async fn record_examination(
        &self,
        id: Uuid,
        examination_id: Uuid,
    ) -> Result<(), AppError> {
        self.store
            .modify(id, |patient| patient.examinations.push(examination_id))
            .await
            .map_err(|_| AppError::NotFound("Patient not found".to_string()))
    }

    pub async fn medical_record(&self, id: Uuid) -> Result<MedicalRecord, AppError> {
        Ok(self.get(id).await?.medical_record)
    }

    pub async fn add_diagnosis(
        &self,
        id: Uuid,
        description: String,
    ) -> Result<MedicalRecord, AppError> {
        debug!("Recording diagnosis for patient {}", id);

        self.store
            .modify(id, |patient| {
                patient
                    .medical_record
                    .diagnoses
                    .push(Diagnosis { description });
                patient.medical_record.clone()
            })
            .await
            .map_err(|_| AppError::NotFound("Patient not found".to_string()))
    }

    pub async fn add_treatment(
        &self,
        id: Uuid,
        description: String,
    ) -> Result<MedicalRecord, AppError> {
        debug!("Recording treatment for patient {}", id);

        self.store
            .modify(id, |patient| {
                patient
                    .medical_record
                    .treatments
                    .push(Treatment { description });
                patient.medical_record.clone()
            })
            .await
            .map_err(|_| AppError::NotFound("Patient not found".to_string()))
    }

    pub async fn add_medication(
        &self,
        id: Uuid,
        description: String,
    ) -> Result<MedicalRecord, AppError> {
        debug!("Recording medication for patient {}", id);

        self.store
            .modify(id, |patient| {
                patient
                    .medical_record
                    .medications
                    .push(Medication { description });
                patient.medical_record.clone()
            })
            .await
            .map_err(|_| AppError::NotFound("Patient not found".to_string()))
    }
}
