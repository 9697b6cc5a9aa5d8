use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    handlers::{
        drivers::driver_list,
        race::{last_race_results, next_race, next_session},
        standings::{constructor_standings, driver_standings},
        stats::{constructor_wins, driver_positions, driver_stats},
    },
    utils::state::AppState,
};

pub fn f1_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/last-race", get(last_race_results))
        // Legacy alias kept for older dashboards.
        .route("/home", get(last_race_results))
        .route("/standings/drivers", get(driver_standings))
        .route("/standings/constructors", get(constructor_standings))
        .route("/next-race", get(next_race))
        .route("/next-session", get(next_session))
        .route("/drivers", get(driver_list))
        .route("/driver-stats", get(driver_stats))
        .route("/constructor-wins", get(constructor_wins))
        .route("/driver-positions", get(driver_positions))
}
