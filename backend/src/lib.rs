//! Backend for the podcast launch site: one subscribe endpoint that validates
//! an email and either forwards it to SendFox or logs it, plus a health check.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config;
pub mod api {
    pub mod sendfox;
}
pub mod handlers {
    pub mod subscribe;
}

use api::sendfox::SendFoxClient;
use config::AppConfig;

pub struct AppState {
    /// `None` when SendFox credentials are absent; submissions are then
    /// logged and reported as successful.
    pub sendfox: Option<SendFoxClient>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            sendfox: config.sendfox.as_ref().map(SendFoxClient::new),
        }
    }
}

async fn health_check() -> &'static str {
    "OK"
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/subscribe", post(handlers::subscribe::subscribe))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any) // restrict to the frontend origin in production
                .allow_headers([axum::http::header::CONTENT_TYPE]),
        )
        .with_state(state)
}
