use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status is free-form text with a `"scheduled"` default; no state
/// machine is enforced.
pub const DEFAULT_STATUS: &str = "scheduled";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    /// Foreign keys only; patient and doctor live in their own
    /// repositories.
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub reason: String,
    pub status: String,
    pub observations: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: Uuid,
}

/// Accepts both the flat `{patient_id, doctor_id}` shape and the nested
/// `{patient: {id}, doctor: {id}}` shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleAppointmentRequest {
    pub date: String,
    #[serde(default, alias = "patientId")]
    pub patient_id: Option<Uuid>,
    #[serde(default, alias = "doctorId")]
    pub doctor_id: Option<Uuid>,
    #[serde(default)]
    pub patient: Option<EntityRef>,
    #[serde(default)]
    pub doctor: Option<EntityRef>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub observations: Option<String>,
}

impl ScheduleAppointmentRequest {
    pub fn patient_ref(&self) -> Option<Uuid> {
        self.patient_id
            .or_else(|| self.patient.as_ref().map(|p| p.id))
    }

    pub fn doctor_ref(&self) -> Option<Uuid> {
        self.doctor_id.or_else(|| self.doctor.as_ref().map(|d| d.id))
    }
}
