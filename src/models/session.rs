use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A track session as listed by OpenF1 `/sessions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Session {
    #[serde(rename(deserialize = "session_key"))]
    pub key: i64,
    #[serde(rename(deserialize = "session_name"))]
    pub name: String,
    #[serde(rename(deserialize = "circuit_short_name"), default)]
    pub circuit: String,
    #[serde(default)]
    pub location: String,
    #[serde(rename(deserialize = "country_name"), default)]
    pub country: String,
    #[serde(rename(deserialize = "date_start"))]
    pub start: DateTime<Utc>,
    #[serde(rename(deserialize = "date_end"), default)]
    pub end: Option<DateTime<Utc>>,
    #[serde(rename(deserialize = "meeting_key"), default)]
    pub meeting_key: Option<i64>,
    #[serde(default)]
    pub year: Option<i32>,
}

/// Roster entry from OpenF1 `/drivers`, scoped to one session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DriverInfo {
    #[serde(rename = "driver_number")]
    pub number: u32,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(rename = "name_acronym", default)]
    pub acronym: Option<String>,
    #[serde(rename = "team_name", default)]
    pub team: Option<String>,
    #[serde(rename = "team_colour", default)]
    pub team_color: Option<String>,
    #[serde(default)]
    pub headshot_url: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
}

/// Gap to the winner: seconds for drivers on the lead lap, text such as
/// `+1 LAP` otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Gap {
    Seconds(f64),
    Text(String),
}

impl Default for Gap {
    fn default() -> Self {
        Gap::Seconds(0.0)
    }
}

/// One driver's classification in OpenF1 `/session_result`.
///
/// The upstream `points` field is deliberately not read; points are derived
/// from the position.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RaceResult {
    pub driver_number: u32,
    #[serde(default)]
    pub position: Option<u32>,
    #[serde(default)]
    pub dnf: bool,
    #[serde(default)]
    pub dns: bool,
    #[serde(default)]
    pub dsq: bool,
    #[serde(default)]
    pub gap_to_leader: Option<Gap>,
    #[serde(rename = "duration", default)]
    pub time: Option<f64>,
    #[serde(rename = "number_of_laps", default)]
    pub laps_completed: Option<u32>,
}

impl RaceResult {
    pub fn retired(&self) -> bool {
        self.dnf || self.dns || self.dsq
    }

    /// Classified finishing position; `None` for DNF, DNS and DSQ.
    pub fn finish_position(&self) -> Option<u32> {
        if self.retired() {
            None
        } else {
            self.position
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LapRecord {
    pub driver_number: u32,
    #[serde(default)]
    pub lap_duration: Option<f64>,
}

/// A position sample from OpenF1 `/position`. The earliest one for a driver is
/// their grid slot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PositionSample {
    pub driver_number: u32,
    #[serde(default)]
    pub position: Option<u32>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}
