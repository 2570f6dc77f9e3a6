use crate::models::{Appointment, AppointmentFields, STATUS_PENDING};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Request body for creating or fully replacing an appointment.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AppointmentCreate {
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "Consultation")]
    pub service: String,
    #[schema(example = "2024-01-01")]
    pub date: String,
    #[schema(example = "10:00")]
    pub time: String,
    #[schema(example = "Introduction")]
    pub topic: String,
    /// Defaults to "Pending" when omitted
    #[serde(default)]
    #[schema(example = "Pending")]
    pub status: Option<String>,
    #[serde(default)]
    pub zoom_link: Option<String>,
}

impl From<AppointmentCreate> for AppointmentFields {
    fn from(req: AppointmentCreate) -> Self {
        Self {
            name: req.name,
            email: req.email,
            service: req.service,
            date: req.date,
            time: req.time,
            topic: req.topic,
            status: req.status.unwrap_or_else(|| STATUS_PENDING.to_string()),
            zoom_link: req.zoom_link,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct AppointmentResponse {
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub service: String,
    pub date: String,
    pub time: String,
    pub topic: String,
    #[schema(example = "Pending")]
    pub status: String,
    pub zoom_link: Option<String>,
}

impl From<Appointment> for AppointmentResponse {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id.to_hex(),
            name: appointment.name,
            email: appointment.email,
            service: appointment.service,
            date: appointment.date,
            time: appointment.time,
            topic: appointment.topic,
            status: appointment.status,
            zoom_link: appointment.zoom_link,
        }
    }
}

/// Meeting link supplied either as `?zoom_link=` or as a JSON body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ZoomLinkParams {
    #[schema(example = "https://zoom.us/j/123456789")]
    pub zoom_link: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Appointment approved successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(example = "Appointments API is running")]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_request_defaults_status_and_zoom_link() {
        let req: AppointmentCreate = serde_json::from_value(json!({
            "name": "A",
            "email": "a@x.com",
            "service": "Consult",
            "date": "2024-01-01",
            "time": "10:00",
            "topic": "Intro"
        }))
        .unwrap();

        let fields = AppointmentFields::from(req);
        assert_eq!(fields.status, "Pending");
        assert_eq!(fields.zoom_link, None);
    }

    #[test]
    fn create_request_keeps_explicit_status() {
        let req: AppointmentCreate = serde_json::from_value(json!({
            "name": "A",
            "email": "a@x.com",
            "service": "Consult",
            "date": "2024-01-01",
            "time": "10:00",
            "topic": "Intro",
            "status": "Approved",
            "zoom_link": "https://zoom.us/j/1"
        }))
        .unwrap();

        let fields = AppointmentFields::from(req);
        assert_eq!(fields.status, "Approved");
        assert_eq!(fields.zoom_link.as_deref(), Some("https://zoom.us/j/1"));
    }

    #[test]
    fn create_request_rejects_missing_required_field() {
        let result = serde_json::from_value::<AppointmentCreate>(json!({
            "name": "A",
            "email": "a@x.com"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn response_exposes_hex_id_and_null_zoom_link() {
        let appointment = Appointment::new(AppointmentFields {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            service: "Consult".to_string(),
            date: "2024-01-01".to_string(),
            time: "10:00".to_string(),
            topic: "Intro".to_string(),
            status: "Pending".to_string(),
            zoom_link: None,
        });
        let hex = appointment.id.to_hex();

        let body = serde_json::to_value(AppointmentResponse::from(appointment)).unwrap();
        assert_eq!(body["id"], hex);
        assert_eq!(body["zoom_link"], serde_json::Value::Null);
        assert!(body.get("_id").is_none());
    }
}
