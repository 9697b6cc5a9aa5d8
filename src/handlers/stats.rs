use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use chrono::{Datelike, Utc};
use tracing::error;

use crate::{models::error::Error, services::season, utils::state::AppState};

pub async fn driver_stats(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, Error> {
    let now = Utc::now();
    let data = season::driver_season_stats(state.timing.as_ref(), &state.limiter, now.year(), now)
        .await
        .map_err(|e| {
            error!("Controller Error (driver_stats): {}", e);
            Error::internal("Internal Server Error: Could not retrieve driver stats.")
        })?;
    Ok(Json(data))
}

pub async fn constructor_wins(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, Error> {
    let now = Utc::now();
    let data = season::constructor_wins(state.timing.as_ref(), &state.limiter, now.year(), now)
        .await
        .map_err(|e| {
            error!("Controller Error (constructor_wins): {}", e);
            Error::internal("Internal Server Error: Could not retrieve constructor wins.")
        })?;
    Ok(Json(data))
}

pub async fn driver_positions(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, Error> {
    let now = Utc::now();
    let data = season::driver_race_positions(state.timing.as_ref(), &state.limiter, now.year(), now)
        .await
        .map_err(|e| {
            error!("Controller Error (driver_positions): {}", e);
            Error::internal("Internal Server Error: Could not retrieve driver race positions.")
        })?;
    Ok(Json(data))
}
