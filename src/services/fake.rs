use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use super::{StandingsSource, TimingSource, WeatherSource};
use crate::models::{
    error::UpstreamError,
    schedule::ScheduledRace,
    session::{DriverInfo, LapRecord, PositionSample, RaceResult, Session},
    standings::{ConstructorStandingsList, DriverStandingsList},
    weather::WeatherSnapshot,
};

fn unavailable(what: &str) -> UpstreamError {
    UpstreamError::Status {
        url: format!("fake://{what}"),
        status: 503,
    }
}

/// In-memory OpenF1. Unknown keys answer with empty lists.
#[derive(Default)]
pub struct FakeTiming {
    pub sessions: Vec<Session>,
    pub results: HashMap<i64, Vec<RaceResult>>,
    pub drivers: HashMap<i64, Vec<DriverInfo>>,
    pub laps: HashMap<i64, Vec<LapRecord>>,
    pub positions: HashMap<i64, Vec<PositionSample>>,
    pub failing_sessions: HashSet<i64>,
    pub failing_years: HashSet<i32>,
    pub session_list_calls: AtomicU64,
}

impl FakeTiming {
    fn check(&self, session_key: i64, what: &str) -> Result<(), UpstreamError> {
        if self.failing_sessions.contains(&session_key) {
            Err(unavailable(what))
        } else {
            Ok(())
        }
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.sessions.push(session);
        self
    }

    pub fn with_race(
        mut self,
        session: Session,
        results: Vec<RaceResult>,
        drivers: Vec<DriverInfo>,
    ) -> Self {
        self.results.insert(session.key, results);
        self.drivers.insert(session.key, drivers);
        self.sessions.push(session);
        self
    }
}

#[async_trait]
impl TimingSource for FakeTiming {
    async fn list_sessions(
        &self,
        year: i32,
        session_name: Option<&str>,
    ) -> Result<Vec<Session>, UpstreamError> {
        self.session_list_calls.fetch_add(1, Ordering::Relaxed);
        if self.failing_years.contains(&year) {
            return Err(unavailable("sessions"));
        }
        Ok(self
            .sessions
            .iter()
            .filter(|s| s.year == Some(year))
            .filter(|s| session_name.map_or(true, |name| s.name == name))
            .cloned()
            .collect())
    }

    async fn session_results(&self, session_key: i64) -> Result<Vec<RaceResult>, UpstreamError> {
        self.check(session_key, "session_result")?;
        Ok(self.results.get(&session_key).cloned().unwrap_or_default())
    }

    async fn drivers(&self, session_key: i64) -> Result<Vec<DriverInfo>, UpstreamError> {
        self.check(session_key, "drivers")?;
        Ok(self.drivers.get(&session_key).cloned().unwrap_or_default())
    }

    async fn driver(
        &self,
        session_key: i64,
        driver_number: u32,
    ) -> Result<Option<DriverInfo>, UpstreamError> {
        Ok(self
            .drivers(session_key)
            .await?
            .into_iter()
            .find(|d| d.number == driver_number))
    }

    async fn laps(&self, session_key: i64) -> Result<Vec<LapRecord>, UpstreamError> {
        self.check(session_key, "laps")?;
        Ok(self.laps.get(&session_key).cloned().unwrap_or_default())
    }

    async fn starting_positions(
        &self,
        session_key: i64,
    ) -> Result<Vec<PositionSample>, UpstreamError> {
        self.check(session_key, "position")?;
        Ok(self.positions.get(&session_key).cloned().unwrap_or_default())
    }
}

#[derive(Default)]
pub struct FakeStandings {
    pub drivers: Option<DriverStandingsList>,
    pub constructors: Option<ConstructorStandingsList>,
    pub next_race: Option<ScheduledRace>,
    pub failing: bool,
}

#[async_trait]
impl StandingsSource for FakeStandings {
    async fn driver_standings(
        &self,
        _year: i32,
    ) -> Result<Option<DriverStandingsList>, UpstreamError> {
        if self.failing {
            return Err(unavailable("driverStandings"));
        }
        Ok(self.drivers.clone())
    }

    async fn constructor_standings(
        &self,
        _year: i32,
    ) -> Result<Option<ConstructorStandingsList>, UpstreamError> {
        if self.failing {
            return Err(unavailable("constructorStandings"));
        }
        Ok(self.constructors.clone())
    }

    async fn next_race(&self) -> Result<Option<ScheduledRace>, UpstreamError> {
        if self.failing {
            return Err(unavailable("next"));
        }
        Ok(self.next_race.clone())
    }
}

#[derive(Default)]
pub struct FakeWeather {
    pub snapshot: Option<WeatherSnapshot>,
    pub failing: bool,
}

#[async_trait]
impl WeatherSource for FakeWeather {
    async fn forecast(
        &self,
        _lat: f64,
        _lon: f64,
        _date: NaiveDate,
    ) -> Result<Option<WeatherSnapshot>, UpstreamError> {
        if self.failing {
            return Err(unavailable("forecast"));
        }
        Ok(self.snapshot.clone())
    }
}

pub fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .unwrap()
        .with_timezone(&Utc)
}

pub fn race_session(key: i64, circuit: &str, start: &str) -> Session {
    let start = at(start);
    Session {
        key,
        name: "Race".to_string(),
        circuit: circuit.to_string(),
        location: circuit.to_string(),
        country: "Testland".to_string(),
        start,
        end: Some(start + chrono::Duration::hours(2)),
        meeting_key: Some(key * 10),
        year: Some(chrono::Datelike::year(&start)),
    }
}

pub fn named_session(key: i64, name: &str, start: &str) -> Session {
    Session {
        name: name.to_string(),
        ..race_session(key, "Circuit", start)
    }
}

pub fn driver(number: u32, acronym: &str, team: &str) -> DriverInfo {
    DriverInfo {
        number,
        full_name: Some(format!("Driver {acronym}")),
        acronym: Some(acronym.to_string()),
        team: Some(team.to_string()),
        team_color: Some("112233".to_string()),
        headshot_url: None,
        country_code: None,
    }
}

pub fn finished(driver_number: u32, position: u32) -> RaceResult {
    RaceResult {
        driver_number,
        position: Some(position),
        dnf: false,
        dns: false,
        dsq: false,
        gap_to_leader: None,
        time: None,
        laps_completed: Some(57),
    }
}

pub fn retired(driver_number: u32, position: Option<u32>) -> RaceResult {
    RaceResult {
        dnf: true,
        position,
        ..finished(driver_number, 0)
    }
}

pub fn lap(driver_number: u32, duration: Option<f64>) -> LapRecord {
    LapRecord {
        driver_number,
        lap_duration: duration,
    }
}

pub fn grid(driver_number: u32, position: u32) -> PositionSample {
    PositionSample {
        driver_number,
        position: Some(position),
        date: None,
    }
}
