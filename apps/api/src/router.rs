use std::sync::Arc;

use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde_json::json;

use agenda_cell::agenda_routes;
use auth_cell::auth_routes;
use shared_clinicaon::ClinicaOnClient;

pub fn create_router(client: Arc<ClinicaOnClient>) -> Router {
    Router::new()
        .route("/", get(health_check))
        .nest("/api/auth", auth_routes(client.clone()))
        .nest("/api/agenda", agenda_routes(client))
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": "ClinicaOn API Wrapper",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
