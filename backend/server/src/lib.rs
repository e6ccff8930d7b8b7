//! Contact form backend for the app showcase site.
//!
//! # Flow
//! - The browser asks reCAPTCHA for a token bound to the `submit_form` action
//! - `POST /api/recaptcha` checks the token against the verification service
//! - On success the browser sends the fields to `POST /api/submit-form`
//! - The relay validates again and posts the fields to a Google Form, which is
//!   the only place submissions are kept
//!
//! Nothing is retried. A failed step answers with a stable message and the
//! user resubmits.
//!
//! # Configuration
//!
//! Environment, with defaults.
//! ```sh
//! RUST_PORT=3000
//! APP_ENV=production            # development logs upstream failures at warn
//! OUTBOUND_TIMEOUT_SECS=10
//! RECAPTCHA_VERIFY_URL=https://www.google.com/recaptcha/api/siteverify
//! FORMS_BASE_URL=https://docs.google.com/forms
//! ```
//!
//! Secrets, from the environment or `/run/secrets/<NAME>`.
//! ```sh
//! RECAPTCHA_SECRET_KEY
//! GOOGLE_FORM_ID
//! ```
//!
//! Verbose logs.
//! ```sh
//! RUST_LOG=server=debug cargo run -p contact
//! ```
use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{Method, header::CONTENT_TYPE},
    routing::post,
};
#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};
use tokio::{net::TcpListener, signal::ctrl_c};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod fake_upstream;
pub mod forms;
pub mod recaptcha;
pub mod routes;
pub mod state;
pub mod validation;

use config::Config;
use routes::{recaptcha_handler, submit_form_handler};
use state::AppState;

pub const BODY_LIMIT: usize = 64 * 1024;

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/recaptcha", post(recaptcha_handler))
        .route("/api/submit-form", post(submit_form_handler))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(cors)
        .with_state(state)
}

pub async fn start_server() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Loading config...");
    let config = Config::load()?;
    let address = format!("0.0.0.0:{}", config.port);

    let state = AppState::new(config)?;

    info!("Starting server...");
    let app = build_router(state);

    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
