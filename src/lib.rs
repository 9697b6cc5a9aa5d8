//! Aggregation backend for the F1 dashboard: reconciles OpenF1 timing data,
//! Jolpica standings and Open-Meteo forecasts into one JSON model.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;
