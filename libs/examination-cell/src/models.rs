use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Examination {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub examination_type: String,
    pub date: NaiveDate,
    pub observations: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExaminationRequest {
    #[serde(alias = "patientId")]
    pub patient_id: Uuid,
    #[serde(alias = "type", alias = "examinationType")]
    pub examination_type: String,
    /// Raw string so the service can reject malformed dates with a
    /// descriptive validation error.
    pub date: String,
    #[serde(default)]
    pub observations: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateExaminationRequest {
    #[serde(alias = "type", alias = "examinationType")]
    pub examination_type: Option<String>,
    pub date: Option<String>,
    pub observations: Option<String>,
}
