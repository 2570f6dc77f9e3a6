pub mod appointments;
pub mod health;

pub use appointments::{
    approve_appointment, create_appointment, delete_appointment, get_appointment,
    list_appointments, set_zoom_link, update_appointment,
};
pub use health::{health_check, metrics, root};
