use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use shared_clinicaon::ClinicaOnError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Unauthorized: {0}")]
    Unauthenticated(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Upstream error ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            AppError::Auth(msg) => (
                StatusCode::UNAUTHORIZED,
                "Authentication failed",
                msg.clone(),
            ),
            AppError::Unauthenticated(msg) => {
                (StatusCode::UNAUTHORIZED, "Unauthorized", msg.clone())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "Bad Request", msg.clone()),
            AppError::Upstream { status, message } => (
                StatusCode::BAD_GATEWAY,
                "Upstream error",
                format!("ClinicaOn returned {}: {}", status, message),
            ),
            AppError::Network(msg) => (StatusCode::BAD_GATEWAY, "Network error", msg.clone()),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                msg.clone(),
            ),
        };

        tracing::error!("Error: {}: {}", status, message);

        let body = Json(json!({
            "error": error,
            "message": message
        }));

        (status, body).into_response()
    }
}

impl From<ClinicaOnError> for AppError {
    fn from(err: ClinicaOnError) -> Self {
        match err {
            ClinicaOnError::Authentication(msg) => AppError::Auth(msg),
            ClinicaOnError::Unauthenticated => {
                AppError::Unauthenticated("Valid authentication token required".to_string())
            }
            ClinicaOnError::Upstream { status, message } => AppError::Upstream { status, message },
            ClinicaOnError::Network(msg) => AppError::Network(msg),
        }
    }
}
