use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnosis {
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Treatment {
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Medication {
    pub description: String,
}

/// Lives only inside a Patient; no identity of its own. Entries are
/// append-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub diagnoses: Vec<Diagnosis>,
    pub treatments: Vec<Treatment>,
    pub medications: Vec<Medication>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    /// Parallel identification; never cross-checked for uniqueness.
    pub identification_document: String,
    pub email: String,
    pub phone_number: String,
    pub blood_type: String,
    pub allergies: Vec<String>,
    /// Ids only; appointments are resolved through their own repository.
    pub appointments: Vec<Uuid>,
    pub examinations: Vec<Uuid>,
    pub medical_record: MedicalRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePatientRequest {
    pub name: String,
    #[serde(alias = "identificationDocument")]
    pub identification_document: String,
    pub email: String,
    #[serde(alias = "phoneNumber")]
    pub phone_number: String,
    #[serde(alias = "bloodType")]
    pub blood_type: String,
    #[serde(default)]
    pub allergies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePatientRequest {
    pub name: Option<String>,
    #[serde(alias = "identificationDocument")]
    pub identification_document: Option<String>,
    pub email: Option<String>,
    #[serde(alias = "phoneNumber")]
    pub phone_number: Option<String>,
    #[serde(alias = "bloodType")]
    pub blood_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllergyRequest {
    pub allergy: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordEntryRequest {
    pub description: String,
}
