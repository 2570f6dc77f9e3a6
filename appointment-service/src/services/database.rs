use crate::models::{Appointment, AppointmentFields};
use crate::services::store::{parse_id, AppointmentStore, StoreError, StoreResult};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{self, doc},
    options::{FindOneAndUpdateOptions, ReturnDocument},
    Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!("Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);

        // Fail startup early when the server is unreachable
        client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("Error connecting to MongoDB: {}", e);
                AppError::from(e)
            })?;

        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub fn appointments(&self) -> Collection<Appointment> {
        self.db.collection("appointments")
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl AppointmentStore for MongoDb {
    async fn insert(&self, fields: AppointmentFields) -> StoreResult<Appointment> {
        let appointment = Appointment::new(fields);
        self.appointments()
            .insert_one(&appointment, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert appointment {}: {}", appointment.id, e);
                StoreError::from(e)
            })?;
        Ok(appointment)
    }

    async fn list(&self) -> StoreResult<Vec<Appointment>> {
        let cursor = self.appointments().find(None, None).await?;
        let appointments: Vec<Appointment> = cursor.try_collect().await?;
        Ok(appointments)
    }

    async fn get(&self, id: &str) -> StoreResult<Appointment> {
        let oid = parse_id(id)?;
        self.appointments()
            .find_one(doc! { "_id": oid }, None)
            .await?
            .ok_or_else(|| StoreError::RecordNotFound(id.to_string()))
    }

    async fn replace(&self, id: &str, fields: AppointmentFields) -> StoreResult<Appointment> {
        let oid = parse_id(id)?;
        let update = doc! { "$set": bson::to_document(&fields)? };
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.appointments()
            .find_one_and_update(doc! { "_id": oid }, update, options)
            .await?
            .ok_or_else(|| StoreError::RecordNotFound(id.to_string()))
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let oid = parse_id(id)?;
        let result = self
            .appointments()
            .delete_one(doc! { "_id": oid }, None)
            .await?;

        if result.deleted_count == 0 {
            return Err(StoreError::RecordNotFound(id.to_string()));
        }
        Ok(())
    }

    async fn set_status(&self, id: &str, status: &str) -> StoreResult<()> {
        let oid = parse_id(id)?;
        let result = self
            .appointments()
            .update_one(doc! { "_id": oid }, doc! { "$set": { "status": status } }, None)
            .await?;

        if result.matched_count == 0 {
            return Err(StoreError::RecordNotFound(id.to_string()));
        }
        Ok(())
    }

    async fn set_zoom_link(&self, id: &str, zoom_link: &str) -> StoreResult<()> {
        let oid = parse_id(id)?;
        let result = self
            .appointments()
            .update_one(
                doc! { "_id": oid },
                doc! { "$set": { "zoom_link": zoom_link } },
                None,
            )
            .await?;

        if result.matched_count == 0 {
            return Err(StoreError::RecordNotFound(id.to_string()));
        }
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                StoreError::from(e)
            })?;
        Ok(())
    }
}
