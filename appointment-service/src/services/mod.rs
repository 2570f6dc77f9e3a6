pub mod appointments;
pub mod database;
pub mod memory;
pub mod metrics;
pub mod store;

pub use appointments::AppointmentService;
pub use database::MongoDb;
pub use memory::InMemoryStore;
pub use metrics::{get_metrics, init_metrics};
pub use store::{AppointmentStore, StoreError, StoreResult};
