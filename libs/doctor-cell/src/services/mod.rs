pub mod availability;
pub mod doctor;

pub use availability::{AppointmentDirectory, AvailabilityService};
pub use doctor::DoctorService;
