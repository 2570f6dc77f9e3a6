//! In-memory implementation of the appointment store.
//!
//! Not durable: all state is lost on restart. Records are kept in insertion
//! order behind a `tokio::sync::RwLock`, which gives the same "natural order"
//! listing a fresh MongoDB collection does. Used by the test suites and for
//! local runs with `STORE_BACKEND=memory`.

use crate::models::{Appointment, AppointmentFields};
use crate::services::store::{parse_id, AppointmentStore, StoreError, StoreResult};
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    appointments: RwLock<Vec<Appointment>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn update_with<F>(&self, id: &str, apply: F) -> StoreResult<Appointment>
    where
        F: FnOnce(&mut Appointment) + Send,
    {
        let oid = parse_id(id)?;
        let mut appointments = self.appointments.write().await;
        let appointment = appointments
            .iter_mut()
            .find(|a| a.id == oid)
            .ok_or_else(|| StoreError::RecordNotFound(id.to_string()))?;
        apply(appointment);
        Ok(appointment.clone())
    }
}

#[async_trait]
impl AppointmentStore for InMemoryStore {
    async fn insert(&self, fields: AppointmentFields) -> StoreResult<Appointment> {
        let appointment = Appointment::new(fields);
        self.appointments.write().await.push(appointment.clone());
        Ok(appointment)
    }

    async fn list(&self) -> StoreResult<Vec<Appointment>> {
        Ok(self.appointments.read().await.clone())
    }

    async fn get(&self, id: &str) -> StoreResult<Appointment> {
        let oid = parse_id(id)?;
        self.appointments
            .read()
            .await
            .iter()
            .find(|a| a.id == oid)
            .cloned()
            .ok_or_else(|| StoreError::RecordNotFound(id.to_string()))
    }

    async fn replace(&self, id: &str, fields: AppointmentFields) -> StoreResult<Appointment> {
        self.update_with(id, |a| *a = Appointment::with_id(a.id, fields))
            .await
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let oid = parse_id(id)?;
        let mut appointments = self.appointments.write().await;
        let before = appointments.len();
        appointments.retain(|a| a.id != oid);
        if appointments.len() == before {
            return Err(StoreError::RecordNotFound(id.to_string()));
        }
        Ok(())
    }

    async fn set_status(&self, id: &str, status: &str) -> StoreResult<()> {
        self.update_with(id, |a| a.status = status.to_string())
            .await
            .map(|_| ())
    }

    async fn set_zoom_link(&self, id: &str, zoom_link: &str) -> StoreResult<()> {
        self.update_with(id, |a| a.zoom_link = Some(zoom_link.to_string()))
            .await
            .map(|_| ())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
