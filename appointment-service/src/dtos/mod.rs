pub mod appointments;

pub use appointments::{
    AppointmentCreate, AppointmentResponse, MessageResponse, RootResponse, ZoomLinkParams,
};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body produced by `service_core::error::AppError`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Appointment not found")]
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
