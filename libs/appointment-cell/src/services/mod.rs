pub mod appointment;
pub mod schedule;

pub use appointment::{AppointmentBook, AppointmentFilter, AppointmentService};
pub use schedule::ScheduleAppointmentService;
