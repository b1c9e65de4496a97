pub mod handlers;
pub mod models;
pub mod notify;
pub mod router;
pub mod services;

pub use models::*;
pub use notify::{LogNotifier, Notifier};
pub use router::AppointmentCellState;
pub use services::{AppointmentBook, AppointmentFilter, AppointmentService, ScheduleAppointmentService};
