use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use doctor_cell::services::{AvailabilityService, DoctorService};
use patient_cell::services::PatientService;
use shared_models::{datetime, AppError};
use shared_store::InMemoryStore;

use crate::models::{Appointment, ScheduleAppointmentRequest, DEFAULT_STATUS};
use crate::notify::Notifier;

/// Coordinates patient lookup, doctor lookup, the availability check,
/// persistence and the confirmation notification as one logical
/// operation. Not transactional: a notification failure after the
/// appointment is stored is not compensated.
#[derive(Clone)]
pub struct ScheduleAppointmentService {
    appointments: Arc<InMemoryStore<Appointment>>,
    patients: PatientService,
    doctors: DoctorService,
    availability: AvailabilityService,
    notifier: Arc<dyn Notifier>,
    /// Serializes conflict-check-then-insert; the store alone cannot make
    /// that sequence atomic.
    booking_guard: Arc<Mutex<()>>,
}

impl ScheduleAppointmentService {
    pub fn new(
        appointments: Arc<InMemoryStore<Appointment>>,
        patients: PatientService,
        doctors: DoctorService,
        availability: AvailabilityService,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            appointments,
            patients,
            doctors,
            availability,
            notifier,
            booking_guard: Arc::new(Mutex::new(())),
        }
    }

    pub async fn execute(
        &self,
        request: ScheduleAppointmentRequest,
    ) -> Result<Appointment, AppError> {
        let date = datetime::parse_utc(&request.date)?;
        let patient_id = request
            .patient_ref()
            .ok_or_else(|| AppError::Validation("patient id is required".to_string()))?;
        let doctor_id = request
            .doctor_ref()
            .ok_or_else(|| AppError::Validation("doctor id is required".to_string()))?;

        debug!(
            "Scheduling appointment for patient {} with doctor {} at {}",
            patient_id, doctor_id, date
        );

        let _guard = self.booking_guard.lock().await;

        let patient = self.patients.get(patient_id).await?;
        let doctor = self.doctors.get(doctor_id).await?;

        if !self
            .availability
            .is_doctor_available(doctor_id, date)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Doctor {} is not available at {}",
                doctor.name,
                date.format("%Y-%m-%d %I:%M %p")
            )));
        }

        let appointment = Appointment {
            id: Uuid::new_v4(),
            date,
            patient_id,
            doctor_id,
            reason: request.reason.unwrap_or_default(),
            status: request.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            observations: request.observations.unwrap_or_default(),
        };

        self.appointments
            .add(appointment.id, appointment.clone())
            .await?;
        self.patients
            .record_appointment(patient_id, appointment.id)
            .await?;

        self.notifier
            .notify(
                &patient.email,
                &format!(
                    "Your appointment with Dr. {} is confirmed for {}",
                    doctor.name,
                    date.format("%Y-%m-%d %I:%M %p")
                ),
            )
            .await;

        info!(
            "Appointment {} scheduled for patient {} with doctor {}",
            appointment.id, patient_id, doctor_id
        );

        Ok(appointment)
    }
}
