//! Shared setup for appointment-service integration tests.

#![allow(dead_code)]

use anyhow::anyhow;
use appointment_service::config::{AppointmentConfig, MongoConfig, StoreBackend};
use appointment_service::models::{Appointment, AppointmentFields};
use appointment_service::services::{
    AppointmentService, AppointmentStore, InMemoryStore, MongoDb, StoreError, StoreResult,
};
use appointment_service::startup::Application;
use appointment_service::{build_router, AppState};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

pub fn test_config(store: StoreBackend, database: &str) -> AppointmentConfig {
    AppointmentConfig {
        common: CoreConfig { port: 0 },
        service_name: "appointment-service-test".to_string(),
        log_level: "debug".to_string(),
        otlp_endpoint: None,
        mongodb: MongoConfig {
            uri: std::env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database: database.to_string(),
        },
        store,
    }
}

/// Router over a fresh in-memory store.
pub fn memory_router() -> Router {
    let state = AppState {
        config: test_config(StoreBackend::Memory, "unused"),
        appointments: AppointmentService::new(Arc::new(InMemoryStore::new())),
    };
    build_router(state)
}

/// Store whose every call fails as if the database were unreachable.
pub struct FailingStore;

fn store_down() -> StoreError {
    StoreError::StoreUnavailable(anyhow!("down"))
}

#[async_trait]
impl AppointmentStore for FailingStore {
    async fn insert(&self, _fields: AppointmentFields) -> StoreResult<Appointment> {
        Err(store_down())
    }

    async fn list(&self) -> StoreResult<Vec<Appointment>> {
        Err(store_down())
    }

    async fn get(&self, _id: &str) -> StoreResult<Appointment> {
        Err(store_down())
    }

    async fn replace(&self, _id: &str, _fields: AppointmentFields) -> StoreResult<Appointment> {
        Err(store_down())
    }

    async fn delete(&self, _id: &str) -> StoreResult<()> {
        Err(store_down())
    }

    async fn set_status(&self, _id: &str, _status: &str) -> StoreResult<()> {
        Err(store_down())
    }

    async fn set_zoom_link(&self, _id: &str, _zoom_link: &str) -> StoreResult<()> {
        Err(store_down())
    }

    async fn ping(&self) -> StoreResult<()> {
        Err(store_down())
    }
}

/// Router over a store that is always unavailable.
pub fn failing_router() -> Router {
    let state = AppState {
        config: test_config(StoreBackend::Memory, "unused"),
        appointments: AppointmentService::new(Arc::new(FailingStore)),
    };
    build_router(state)
}

pub fn sample_appointment() -> Value {
    json!({
        "name": "A",
        "email": "a@x.com",
        "service": "Consult",
        "date": "2024-01-01",
        "time": "10:00",
        "topic": "Intro"
    })
}

/// Sends one request through the router and returns status and JSON body
/// (`Value::Null` for an empty body).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

/// Creates the sample appointment and returns its id.
pub async fn create_sample(app: &Router) -> String {
    let (status, body) = send(app, Method::POST, "/appointments/", Some(sample_appointment())).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

/// Full application bound to a random port against a live MongoDB.
pub struct TestApp {
    pub address: String,
    pub db: MongoDb,
    pub db_name: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let db_name = format!("appointments_test_{}", Uuid::new_v4().simple());
        let config = test_config(StoreBackend::MongoDb, &db_name);

        let db = MongoDb::connect(&config.mongodb.uri, &config.mongodb.database)
            .await
            .expect("Failed to connect to MongoDB");

        let state = AppState {
            config,
            appointments: AppointmentService::new(Arc::new(db.clone())),
        };
        let app = Application::build_with_state(state)
            .await
            .expect("Failed to build test application");
        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        for _ in 0..50 {
            if client.get(format!("{}/", address)).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            db,
            db_name,
        }
    }

    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}
