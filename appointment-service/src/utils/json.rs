use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::dtos::ErrorResponse;

/// JSON body extractor whose rejections use the service's error body.
///
/// Missing fields and type mismatches are 422, malformed JSON is 400 and a
/// missing content type is 415, as decided by axum's `JsonRejection`.
pub struct JsonBody<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_response)?;
        Ok(JsonBody(value))
    }
}

/// Error response for a rejected JSON body, keeping axum's status code.
pub fn rejection_response(rejection: JsonRejection) -> Response {
    let status = rejection.status();
    tracing::debug!(status = %status, "Rejected request body: {}", rejection.body_text());
    let body = ErrorResponse {
        error: "Invalid request body".to_string(),
        details: Some(rejection.body_text()),
    };
    (status, Json(body)).into_response()
}
