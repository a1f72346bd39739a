use std::sync::Arc;

use axum::extract::{Json, State};
use tracing::debug;

use shared_clinicaon::ClinicaOnClient;
use shared_models::auth::{AuthStatusResponse, LoginRequest, LoginSuccessResponse, UserProfile};
use shared_models::error::AppError;

/// POST /login - authenticate against ClinicaOn and establish the session.
pub async fn login(
    State(client): State<Arc<ClinicaOnClient>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginSuccessResponse>, AppError> {
    debug!("Login request for {}", payload.email);

    let login = client.login(&payload.email, &payload.password).await?;

    Ok(Json(LoginSuccessResponse {
        success: true,
        message: "Login successful".to_string(),
        user: UserProfile::from(&login),
    }))
}

/// GET /status - report whether a ClinicaOn session is currently held.
/// The token is only disclosed while it is considered valid.
pub async fn auth_status(State(client): State<Arc<ClinicaOnClient>>) -> Json<AuthStatusResponse> {
    let authenticated = client.is_token_valid();

    Json(AuthStatusResponse {
        authenticated,
        token: if authenticated {
            client.get_token()
        } else {
            None
        },
    })
}
