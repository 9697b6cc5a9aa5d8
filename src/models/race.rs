use chrono::{DateTime, Utc};
use serde::Serialize;

use super::session::Gap;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub circuit: String,
    pub location: String,
    pub country: String,
    pub date: DateTime<Utc>,
    pub name: String,
    pub fastest_lap_time: Option<f64>,
}

/// A driver's line in the enriched classification of one race.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingEntry {
    pub position: Option<u32>,
    pub driver: String,
    pub driver_acronym: Option<String>,
    pub driver_number: u32,
    pub team: String,
    pub team_color: String,
    pub points: u32,
    pub has_fastest_lap: bool,
    pub fastest_lap_time: Option<f64>,
    pub gap_to_leader: Gap,
    pub time: Option<f64>,
    pub headshot_url: Option<String>,
    pub country_code: Option<String>,
    pub dnf: bool,
    pub dns: bool,
    pub dsq: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LastRaceResults {
    pub session_info: SessionInfo,
    pub standings: Vec<StandingEntry>,
}
