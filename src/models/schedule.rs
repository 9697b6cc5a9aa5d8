use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::weather::WeatherSnapshot;
use crate::utils::race_utils::{SessionCategory, WeekendSlot};

#[derive(Debug, Deserialize)]
pub struct RaceTableEnvelope {
    #[serde(rename = "RaceTable")]
    pub race_table: RaceTable,
}

#[derive(Debug, Deserialize)]
pub struct RaceTable {
    #[serde(rename = "Races", default)]
    pub races: Vec<ScheduledRace>,
}

/// A race weekend from Jolpica's schedule endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScheduledRace {
    pub season: String,
    pub round: String,
    #[serde(rename = "raceName")]
    pub race_name: String,
    #[serde(rename = "Circuit")]
    pub circuit: Circuit,
    pub date: NaiveDate,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(rename = "FirstPractice", default)]
    pub first_practice: Option<ScheduleTime>,
    #[serde(rename = "SecondPractice", default)]
    pub second_practice: Option<ScheduleTime>,
    #[serde(rename = "ThirdPractice", default)]
    pub third_practice: Option<ScheduleTime>,
    #[serde(rename = "SprintQualifying", default)]
    pub sprint_qualifying: Option<ScheduleTime>,
    #[serde(rename = "Sprint", default)]
    pub sprint: Option<ScheduleTime>,
    #[serde(rename = "Qualifying", default)]
    pub qualifying: Option<ScheduleTime>,
}

impl ScheduledRace {
    /// Scheduled date/time for a weekend slot, if the provider lists it.
    pub fn slot(&self, slot: WeekendSlot) -> Option<ScheduleTime> {
        match slot {
            WeekendSlot::FirstPractice => self.first_practice.clone(),
            WeekendSlot::SecondPractice => self.second_practice.clone(),
            WeekendSlot::ThirdPractice => self.third_practice.clone(),
            WeekendSlot::SprintQualifying => self.sprint_qualifying.clone(),
            WeekendSlot::Sprint => self.sprint.clone(),
            WeekendSlot::Qualifying => self.qualifying.clone(),
            WeekendSlot::Race => Some(ScheduleTime {
                date: self.date,
                time: self.time.clone(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Circuit {
    pub circuit_name: String,
    #[serde(rename = "Location")]
    pub location: CircuitLocation,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CircuitLocation {
    pub lat: String,
    pub long: String,
    pub locality: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScheduleTime {
    pub date: NaiveDate,
    #[serde(default)]
    pub time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekendSession {
    pub session_name: &'static str,
    pub session_type: SessionCategory,
    pub date_start: DateTime<Utc>,
    pub date_end: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextRaceDetails {
    pub race_name: String,
    pub circuit: String,
    pub location: String,
    pub country: String,
    pub race_date: DateTime<Utc>,
    pub meeting_key: String,
    pub sessions: Vec<WeekendSession>,
    pub weather: Option<WeatherSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonFinished {
    pub message: &'static str,
    pub next_season: i32,
}

impl SeasonFinished {
    pub fn after(year: i32) -> Self {
        Self {
            message: "Season finished",
            next_season: year + 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NextRace {
    Upcoming(Box<NextRaceDetails>),
    SeasonFinished(SeasonFinished),
}
