use crate::dtos::{AppointmentCreate, AppointmentResponse};
use crate::models::{AppointmentFields, STATUS_APPROVED};
use crate::services::store::{AppointmentStore, StoreResult};
use metrics::counter;
use std::sync::Arc;

/// Appointment operations on top of a shared store handle.
#[derive(Clone)]
pub struct AppointmentService {
    store: Arc<dyn AppointmentStore>,
}

impl AppointmentService {
    pub fn new(store: Arc<dyn AppointmentStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn AppointmentStore> {
        &self.store
    }

    pub async fn create(&self, req: AppointmentCreate) -> StoreResult<AppointmentResponse> {
        let appointment = self.store.insert(AppointmentFields::from(req)).await?;

        tracing::info!(appointment_id = %appointment.id, "Appointment created");
        counter!("appointments_created_total").increment(1);

        Ok(appointment.into())
    }

    pub async fn list(&self) -> StoreResult<Vec<AppointmentResponse>> {
        let appointments = self.store.list().await?;
        Ok(appointments.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: &str) -> StoreResult<AppointmentResponse> {
        Ok(self.store.get(id).await?.into())
    }

    pub async fn update(
        &self,
        id: &str,
        req: AppointmentCreate,
    ) -> StoreResult<AppointmentResponse> {
        let appointment = self
            .store
            .replace(id, AppointmentFields::from(req))
            .await?;

        tracing::info!(appointment_id = %appointment.id, "Appointment updated");
        Ok(appointment.into())
    }

    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        self.store.delete(id).await?;

        tracing::info!(appointment_id = %id, "Appointment deleted");
        counter!("appointments_deleted_total").increment(1);
        Ok(())
    }

    pub async fn approve(&self, id: &str) -> StoreResult<()> {
        self.store.set_status(id, STATUS_APPROVED).await?;

        tracing::info!(appointment_id = %id, "Appointment approved");
        counter!("appointments_approved_total").increment(1);
        Ok(())
    }

    pub async fn set_zoom_link(&self, id: &str, zoom_link: &str) -> StoreResult<()> {
        self.store.set_zoom_link(id, zoom_link).await?;

        tracing::info!(appointment_id = %id, "Zoom link set");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::memory::InMemoryStore;
    use crate::services::store::StoreError;

    fn request() -> AppointmentCreate {
        AppointmentCreate {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            service: "Consult".to_string(),
            date: "2024-01-01".to_string(),
            time: "10:00".to_string(),
            topic: "Intro".to_string(),
            status: None,
            zoom_link: None,
        }
    }

    fn service() -> AppointmentService {
        AppointmentService::new(Arc::new(InMemoryStore::new()))
    }

    #[tokio::test]
    async fn create_defaults_to_pending() {
        let created = service().create(request()).await.unwrap();

        assert!(!created.id.is_empty());
        assert_eq!(created.status, "Pending");
        assert_eq!(created.zoom_link, None);
    }

    #[tokio::test]
    async fn update_without_status_resets_it_to_pending() {
        let svc = service();
        let created = svc.create(request()).await.unwrap();
        svc.approve(&created.id).await.unwrap();

        let updated = svc.update(&created.id, request()).await.unwrap();
        assert_eq!(updated.status, "Pending");
    }

    #[tokio::test]
    async fn approve_changes_only_status() {
        let svc = service();
        let created = svc.create(request()).await.unwrap();

        svc.approve(&created.id).await.unwrap();

        let fetched = svc.get(&created.id).await.unwrap();
        assert_eq!(
            fetched,
            AppointmentResponse {
                status: "Approved".to_string(),
                ..created
            }
        );
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let svc = service();
        let created = svc.create(request()).await.unwrap();

        svc.delete(&created.id).await.unwrap();

        assert!(matches!(
            svc.get(&created.id).await,
            Err(StoreError::RecordNotFound(_))
        ));
    }
}
