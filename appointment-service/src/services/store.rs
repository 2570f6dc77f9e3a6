use crate::models::{Appointment, AppointmentFields};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid appointment identifier: {0}")]
    InvalidIdentifier(String),
    #[error("appointment not found: {0}")]
    RecordNotFound(String),
    #[error("store unavailable: {0}")]
    StoreUnavailable(anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::StoreUnavailable(anyhow::Error::new(err))
    }
}

impl From<mongodb::bson::ser::Error> for StoreError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        StoreError::StoreUnavailable(anyhow::Error::new(err))
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidIdentifier(_) | StoreError::RecordNotFound(_) => {
                AppError::NotFound(anyhow::anyhow!("Appointment not found"))
            }
            StoreError::StoreUnavailable(e) => {
                tracing::error!(error = %e, "Appointment store unavailable");
                AppError::ServiceUnavailable
            }
        }
    }
}

/// Parses the public identifier form into the store's primary key.
pub fn parse_id(id: &str) -> StoreResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| StoreError::InvalidIdentifier(id.to_string()))
}

/// Persistence for appointment documents.
///
/// Every method is a single store round-trip. Identifier-based methods fail
/// with `InvalidIdentifier` for malformed ids and `RecordNotFound` when no
/// document matches; a match always counts as success, even when the write
/// leaves the document unchanged.
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    async fn insert(&self, fields: AppointmentFields) -> StoreResult<Appointment>;
    async fn list(&self) -> StoreResult<Vec<Appointment>>;
    async fn get(&self, id: &str) -> StoreResult<Appointment>;
    async fn replace(&self, id: &str, fields: AppointmentFields) -> StoreResult<Appointment>;
    async fn delete(&self, id: &str) -> StoreResult<()>;
    async fn set_status(&self, id: &str, status: &str) -> StoreResult<()>;
    async fn set_zoom_link(&self, id: &str, zoom_link: &str) -> StoreResult<()>;
    async fn ping(&self) -> StoreResult<()>;
}
