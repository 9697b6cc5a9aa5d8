//! Upstream gateways and the aggregation services built on top of them.
//!
//! Each external provider sits behind a trait so the aggregation code can be
//! driven by in-memory fakes in tests.

pub mod drivers;
pub mod http;
pub mod jolpica;
pub mod open_meteo;
pub mod openf1;
pub mod race_results;
pub mod schedule;
pub mod season;
pub mod session_resolver;
pub mod standings;

#[cfg(test)]
pub(crate) mod fake;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::{
    error::UpstreamError,
    schedule::ScheduledRace,
    session::{DriverInfo, LapRecord, PositionSample, RaceResult, Session},
    standings::{ConstructorStandingsList, DriverStandingsList},
    weather::WeatherSnapshot,
};

/// Session and timing data (OpenF1).
#[async_trait]
pub trait TimingSource: Send + Sync {
    async fn list_sessions(
        &self,
        year: i32,
        session_name: Option<&str>,
    ) -> Result<Vec<Session>, UpstreamError>;

    async fn session_results(&self, session_key: i64) -> Result<Vec<RaceResult>, UpstreamError>;

    async fn drivers(&self, session_key: i64) -> Result<Vec<DriverInfo>, UpstreamError>;

    async fn driver(
        &self,
        session_key: i64,
        driver_number: u32,
    ) -> Result<Option<DriverInfo>, UpstreamError>;

    async fn laps(&self, session_key: i64) -> Result<Vec<LapRecord>, UpstreamError>;

    async fn starting_positions(
        &self,
        session_key: i64,
    ) -> Result<Vec<PositionSample>, UpstreamError>;
}

/// Championship tables and schedule (Jolpica).
#[async_trait]
pub trait StandingsSource: Send + Sync {
    async fn driver_standings(&self, year: i32)
        -> Result<Option<DriverStandingsList>, UpstreamError>;

    async fn constructor_standings(
        &self,
        year: i32,
    ) -> Result<Option<ConstructorStandingsList>, UpstreamError>;

    /// The provider's own "next race" pick; `None` once the season is over.
    async fn next_race(&self) -> Result<Option<ScheduledRace>, UpstreamError>;
}

#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn forecast(
        &self,
        lat: f64,
        lon: f64,
        date: NaiveDate,
    ) -> Result<Option<WeatherSnapshot>, UpstreamError>;
}
