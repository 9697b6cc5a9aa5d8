pub mod f1;

use axum::{response::IntoResponse, routing::get, Json, Router};
use http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt, Registry};

pub use f1::f1_routes;

use crate::utils::state::AppState;

fn level_from(log_level: &str) -> Level {
    match log_level {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    }
}

pub fn init_tracing(log_level: &str) {
    let level = level_from(log_level);

    let filter = filter::Targets::new()
        .with_target("tower_http::trace::on_response", Level::TRACE)
        .with_target("tower_http::trace::on_request", Level::TRACE)
        .with_target("tower_http::trace::make_span", Level::DEBUG)
        .with_target("axum::rejection", Level::TRACE)
        .with_target("f1_dashboard", level)
        .with_default(Level::INFO);

    let tracing_layer = tracing_subscriber::fmt::layer();

    Registry::default().with(tracing_layer).with(filter).init();
}

pub fn make_app(state: Arc<AppState>) -> Router {
    let app = Router::new()
        .route("/", get(health_check))
        .nest("/api/f1", f1_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state);
    info!("Application initialized successfully");
    app
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"message": "Hello World"}))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_log_level_defaults_to_info() {
        assert_eq!(level_from("debug"), Level::DEBUG);
        assert_eq!(level_from("verbose"), Level::INFO);
    }
}
