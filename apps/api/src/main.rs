use std::net::SocketAddr;
use std::sync::Arc;

use dotenv::dotenv;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{self, TraceLayer};
use tracing::{info, warn, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod router;

use shared_clinicaon::ClinicaOnClient;
use shared_config::AppConfig;

#[tokio::main]
async fn main() {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ClinicaOn API wrapper");

    // Load configuration
    let config = AppConfig::from_env();

    // Set up CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // The single upstream session, owned here and shared with every route
    let client = Arc::new(ClinicaOnClient::new(&config));

    // Build the application router
    let app = router::create_router(client.clone())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors);

    // Auto-login with bootstrap credentials; a failure must not stop the
    // server from coming up, callers can still log in through the API.
    if let (Some(email), Some(password)) = (
        config.clinicaon_email.clone(),
        config.clinicaon_password.clone(),
    ) {
        let bootstrap = client.clone();
        tokio::spawn(async move {
            match bootstrap.login(&email, &password).await {
                Ok(_) => info!("Auto-login successful"),
                Err(err) => warn!("Auto-login failed: {}", err),
            }
        });
    }

    // Run the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
