use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use chrono::{Datelike, Utc};
use tracing::error;

use crate::{models::error::Error, services::standings, utils::state::AppState};

/// Always answers 200; an unavailable table is served empty.
pub async fn driver_standings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(standings::driver_standings(state.standings.as_ref(), Utc::now().year()).await)
}

pub async fn constructor_standings(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, Error> {
    let data = standings::constructor_standings(state.standings.as_ref(), Utc::now().year())
        .await
        .map_err(|e| {
            error!("Controller Error (constructor_standings): {}", e);
            Error::internal("Internal Server Error: Could not retrieve constructor standings.")
        })?;
    Ok(Json(data))
}
