use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Datelike, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

use shared_models::AppError;
use shared_store::InMemoryStore;

use crate::models::{DayOfWeek, Doctor};

/// Read-side port onto the appointment book, implemented by the
/// appointment cell. Keeps this cell free of a dependency on it.
#[async_trait]
pub trait AppointmentDirectory: Send + Sync {
    async fn booked_times(&self, doctor_id: Uuid) -> Vec<DateTime<Utc>>;
}

#[derive(Clone)]
pub struct AvailabilityService {
    doctors: Arc<InMemoryStore<Doctor>>,
    appointments: Arc<dyn AppointmentDirectory>,
}

impl AvailabilityService {
    pub fn new(
        doctors: Arc<InMemoryStore<Doctor>>,
        appointments: Arc<dyn AppointmentDirectory>,
    ) -> Self {
        Self {
            doctors,
            appointments,
        }
    }

    /// Decides whether `doctor_id` can be booked at `when`: no existing
    /// appointment at the exact same instant, and the instant falls inside
    /// at least one working-hours window for that weekday.
    pub async fn is_doctor_available(
        &self,
        doctor_id: Uuid,
        when: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        debug!("Checking availability for doctor {} at {}", doctor_id, when);

        let doctor = self
            .doctors
            .find_by_id(doctor_id)
            .await
            .ok_or_else(|| AppError::NotFound("Doctor not found".to_string()))?;

        // Conflicts are exact-timestamp only. Appointments carry no
        // duration, so interval overlap cannot be computed; bookings a
        // minute apart never conflict.
        let booked = self.appointments.booked_times(doctor_id).await;
        if booked.iter().any(|existing| *existing == when) {
            debug!(
                "Doctor {} already has an appointment at {}",
                doctor.name, when
            );
            return Ok(false);
        }

        let day = DayOfWeek::from_weekday(when.weekday());
        let time = when.time();
        if !doctor.working_hours.covers(day, time) {
            warn!(
                "Requested time {} {} is outside working hours for doctor {}",
                day,
                when.format("%I:%M %p"),
                doctor.name
            );
            return Ok(false);
        }

        Ok(true)
    }
}
