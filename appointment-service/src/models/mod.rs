pub mod appointment;

pub use appointment::{Appointment, AppointmentFields, STATUS_APPROVED, STATUS_PENDING};
