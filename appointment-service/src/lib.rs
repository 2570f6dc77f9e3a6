pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
pub mod utils;

use axum::{
    http::Request,
    middleware::from_fn,
    routing::{get, put},
    Router,
};
use service_core::middleware::{
    metrics::metrics_middleware,
    tracing::{request_id_middleware, REQUEST_ID_HEADER},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppointmentConfig;
use crate::services::AppointmentService;

#[derive(OpenApi)]
#[openapi(
    info(title = "Appointments API"),
    paths(
        handlers::health::root,
        handlers::health::health_check,
        handlers::appointments::create_appointment,
        handlers::appointments::list_appointments,
        handlers::appointments::get_appointment,
        handlers::appointments::update_appointment,
        handlers::appointments::delete_appointment,
        handlers::appointments::approve_appointment,
        handlers::appointments::set_zoom_link,
    ),
    components(
        schemas(
            dtos::AppointmentCreate,
            dtos::AppointmentResponse,
            dtos::MessageResponse,
            dtos::RootResponse,
            dtos::ZoomLinkParams,
            dtos::ErrorResponse,
        )
    ),
    tags(
        (name = "Appointments", description = "Appointment records"),
        (name = "Observability", description = "Service health and monitoring"),
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub config: AppointmentConfig,
    pub appointments: AppointmentService,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .route(
            "/appointments/",
            get(handlers::list_appointments).post(handlers::create_appointment),
        )
        .route(
            "/appointments",
            get(handlers::list_appointments).post(handlers::create_appointment),
        )
        .route(
            "/appointments/:id",
            get(handlers::get_appointment)
                .put(handlers::update_appointment)
                .delete(handlers::delete_appointment),
        )
        .route(
            "/appointments/:id/approve",
            put(handlers::approve_appointment),
        )
        .route("/appointments/:id/zoom-link", put(handlers::set_zoom_link))
        .with_state(state)
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        // Any origin, method and header, credentials included
        .layer(CorsLayer::very_permissive())
}
