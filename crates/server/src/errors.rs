use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, info};

/// JSON error body: `{"error": <title>, "message": <detail>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: Option<String>) -> Self {
        Self { status, error, message }
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let (status, title) = match &e {
            ServiceError::Validation(_) => (StatusCode::BAD_REQUEST, "Validation Error"),
            ServiceError::Duplicate(_) => (StatusCode::CONFLICT, "Conflict"),
            ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, "Not Found"),
            ServiceError::NoChange(_) => (StatusCode::UNPROCESSABLE_ENTITY, "No Change"),
            ServiceError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        };
        if status.is_server_error() {
            error!(kind = e.kind(), error = %e, "request failed");
        } else {
            info!(kind = e.kind(), error = %e, "request rejected");
        }
        Self::new(status, title, Some(e.to_string()))
    }
}

impl From<models::ModelError> for JsonApiError {
    fn from(e: models::ModelError) -> Self {
        ServiceError::from(e).into()
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({"error": self.error, "message": self.message}))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
