use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_clinicaon::ClinicaOnClient;

use crate::handlers;

pub fn auth_routes(client: Arc<ClinicaOnClient>) -> Router {
    Router::new()
        .route("/login", post(handlers::login))
        .route("/status", get(handlers::auth_status))
        .with_state(client)
}
