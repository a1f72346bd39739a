use std::sync::Arc;

use axum::{middleware, routing::get, Router};

use shared_clinicaon::ClinicaOnClient;
use shared_utils::guard::session_guard;

use crate::handlers;

pub fn agenda_routes(client: Arc<ClinicaOnClient>) -> Router {
    Router::new()
        .route("/", get(handlers::get_agenda))
        .route("/date/{date}", get(handlers::get_agenda_for_date))
        .layer(middleware::from_fn_with_state(client.clone(), session_guard))
        .with_state(client)
}
