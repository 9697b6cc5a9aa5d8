use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use chrono::{Datelike, Utc};
use tracing::error;

use crate::{
    models::error::Error,
    services::{
        race_results, schedule,
        session_resolver::{self, Resolved},
    },
    utils::state::AppState,
};

pub async fn last_race_results(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, Error> {
    let data = race_results::last_race_results(state.timing.as_ref(), Utc::now())
        .await
        .map_err(|e| {
            error!("Controller Error (last_race_results): {}", e);
            Error::internal("Internal Server Error: Could not retrieve last race data.")
        })?;
    Ok(Json(data))
}

pub async fn next_race(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, Error> {
    let data = schedule::next_race_details(
        state.standings.as_ref(),
        state.weather.as_ref(),
        Utc::now().year(),
    )
    .await
    .map_err(|e| {
        error!("Controller Error (next_race): {}", e);
        Error::internal("Internal Server Error: Could not retrieve next race data.")
    })?;
    Ok(Json(data))
}

pub async fn next_session(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, Error> {
    match session_resolver::next_upcoming_race(state.timing.as_ref(), Utc::now()).await {
        Resolved::Found(upcoming) => Ok(Json(upcoming)),
        Resolved::Empty => Err(Error::internal(
            "Internal Server Error: Could not retrieve next session.",
        )),
    }
}
