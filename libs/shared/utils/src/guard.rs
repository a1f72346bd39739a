use std::sync::Arc;

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use tracing::debug;

use shared_clinicaon::ClinicaOnClient;
use shared_models::error::AppError;

// Middleware guarding routes that proxy authenticated ClinicaOn calls.
// Rejects before the handler runs so no upstream request is ever issued
// without a stored token.
pub async fn session_guard(
    State(client): State<Arc<ClinicaOnClient>>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    if !client.is_token_valid() {
        debug!("Rejecting {} - no valid ClinicaOn session", request.uri().path());
        return Err(AppError::Unauthenticated(
            "Valid authentication token required".to_string(),
        ));
    }

    Ok(next.run(request).await)
}
