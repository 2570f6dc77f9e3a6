use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

pub const STATUS_PENDING: &str = "Pending";
pub const STATUS_APPROVED: &str = "Approved";

/// Appointment document as persisted in the `appointments` collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub email: String,
    pub service: String,
    pub date: String,
    pub time: String,
    pub topic: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub zoom_link: Option<String>,
}

/// Every field of an appointment except its identifier.
///
/// Updates replace this whole set; `zoom_link` is written as `null` when absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppointmentFields {
    pub name: String,
    pub email: String,
    pub service: String,
    pub date: String,
    pub time: String,
    pub topic: String,
    pub status: String,
    pub zoom_link: Option<String>,
}

fn default_status() -> String {
    STATUS_PENDING.to_string()
}

impl Appointment {
    pub fn new(fields: AppointmentFields) -> Self {
        Self::with_id(ObjectId::new(), fields)
    }

    pub fn with_id(id: ObjectId, fields: AppointmentFields) -> Self {
        Self {
            id,
            name: fields.name,
            email: fields.email,
            service: fields.service,
            date: fields.date,
            time: fields.time,
            topic: fields.topic,
            status: fields.status,
            zoom_link: fields.zoom_link,
        }
    }
}
