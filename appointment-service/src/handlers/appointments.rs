use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use service_core::error::AppError;
use validator::{ValidationError, ValidationErrors};

use crate::dtos::{AppointmentCreate, AppointmentResponse, MessageResponse, ZoomLinkParams};
use crate::utils::{rejection_response, JsonBody};
use crate::AppState;

/// Create an appointment
#[utoipa::path(
    post,
    path = "/appointments/",
    request_body = AppointmentCreate,
    responses(
        (status = 201, description = "Appointment created", body = AppointmentResponse),
        (status = 422, description = "Invalid request body", body = ErrorResponse)
    ),
    tag = "Appointments"
)]
pub async fn create_appointment(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<AppointmentCreate>,
) -> Result<impl IntoResponse, AppError> {
    let appointment = state.appointments.create(req).await?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

/// List all appointments
#[utoipa::path(
    get,
    path = "/appointments/",
    responses(
        (status = 200, description = "All appointments", body = [AppointmentResponse])
    ),
    tag = "Appointments"
)]
pub async fn list_appointments(
    State(state): State<AppState>,
) -> Result<Json<Vec<AppointmentResponse>>, AppError> {
    Ok(Json(state.appointments.list().await?))
}

/// Get an appointment by id
#[utoipa::path(
    get,
    path = "/appointments/{id}",
    params(("id" = String, Path, description = "Appointment identifier")),
    responses(
        (status = 200, description = "Appointment found", body = AppointmentResponse),
        (status = 404, description = "Appointment not found", body = ErrorResponse)
    ),
    tag = "Appointments"
)]
pub async fn get_appointment(
    State(state): State<AppState>,
    Path(appointment_id): Path<String>,
) -> Result<Json<AppointmentResponse>, AppError> {
    Ok(Json(state.appointments.get(&appointment_id).await?))
}

/// Replace every field of an appointment
#[utoipa::path(
    put,
    path = "/appointments/{id}",
    params(("id" = String, Path, description = "Appointment identifier")),
    request_body = AppointmentCreate,
    responses(
        (status = 200, description = "Appointment updated", body = AppointmentResponse),
        (status = 404, description = "Appointment not found", body = ErrorResponse),
        (status = 422, description = "Invalid request body", body = ErrorResponse)
    ),
    tag = "Appointments"
)]
pub async fn update_appointment(
    State(state): State<AppState>,
    Path(appointment_id): Path<String>,
    JsonBody(req): JsonBody<AppointmentCreate>,
) -> Result<Json<AppointmentResponse>, AppError> {
    Ok(Json(state.appointments.update(&appointment_id, req).await?))
}

/// Delete an appointment
#[utoipa::path(
    delete,
    path = "/appointments/{id}",
    params(("id" = String, Path, description = "Appointment identifier")),
    responses(
        (status = 200, description = "Appointment deleted", body = MessageResponse),
        (status = 404, description = "Appointment not found", body = ErrorResponse)
    ),
    tag = "Appointments"
)]
pub async fn delete_appointment(
    State(state): State<AppState>,
    Path(appointment_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.appointments.delete(&appointment_id).await?;
    Ok(Json(MessageResponse::new("Appointment deleted successfully")))
}

/// Mark an appointment as approved
#[utoipa::path(
    put,
    path = "/appointments/{id}/approve",
    params(("id" = String, Path, description = "Appointment identifier")),
    responses(
        (status = 200, description = "Appointment approved", body = MessageResponse),
        (status = 404, description = "Appointment not found", body = ErrorResponse)
    ),
    tag = "Appointments"
)]
pub async fn approve_appointment(
    State(state): State<AppState>,
    Path(appointment_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.appointments.approve(&appointment_id).await?;
    Ok(Json(MessageResponse::new("Appointment approved successfully")))
}

/// Attach a meeting link to an appointment
#[utoipa::path(
    put,
    path = "/appointments/{id}/zoom-link",
    params(("id" = String, Path, description = "Appointment identifier"), ZoomLinkParams),
    request_body(
        content = ZoomLinkParams,
        description = "Alternative to the zoom_link query parameter"
    ),
    responses(
        (status = 200, description = "Zoom link set", body = MessageResponse),
        (status = 404, description = "Appointment not found", body = ErrorResponse),
        (status = 422, description = "zoom_link missing or body invalid", body = ErrorResponse)
    ),
    tag = "Appointments"
)]
pub async fn set_zoom_link(
    State(state): State<AppState>,
    Path(appointment_id): Path<String>,
    Query(query): Query<ZoomLinkParams>,
    body: Result<Json<ZoomLinkParams>, JsonRejection>,
) -> Result<Response, AppError> {
    // Query parameter wins over the body; the body is only inspected without it
    let zoom_link = match (query.zoom_link, body) {
        (Some(link), _) => link,
        (None, Ok(Json(params))) => params.zoom_link.ok_or_else(missing_zoom_link)?,
        (None, Err(JsonRejection::MissingJsonContentType(_))) => return Err(missing_zoom_link()),
        (None, Err(rejection)) => return Ok(rejection_response(rejection)),
    };

    state
        .appointments
        .set_zoom_link(&appointment_id, &zoom_link)
        .await?;
    Ok(Json(MessageResponse::new("Zoom link added successfully")).into_response())
}

fn missing_zoom_link() -> AppError {
    let mut errors = ValidationErrors::new();
    errors.add("zoom_link", ValidationError::new("required"));
    AppError::ValidationError(errors)
}
