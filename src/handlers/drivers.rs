use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;

use crate::{services::drivers, utils::state::AppState};

/// Always answers 200; no data is an empty list.
pub async fn driver_list(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let drivers = drivers::driver_list(state.timing.as_ref(), Utc::now())
        .await
        .into_option()
        .unwrap_or_default();
    Json(drivers)
}
