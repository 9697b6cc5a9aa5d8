//! Locating the latest completed and the next upcoming race session.
//!
//! Lookups here fail soft: upstream errors are logged and reported as
//! [`Resolved::Empty`], leaving the caller to decide what "no session" means.

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use tracing::{error, info};

use super::TimingSource;
use crate::models::{error::UpstreamError, schedule::SeasonFinished, session::Session};
use crate::utils::race_utils::{map_session_name, WeekendSlot};

const RACE_SESSION_NAME: &str = "Race";

/// Outcome of a fail-soft lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<T> {
    Found(T),
    Empty,
}

impl<T> Resolved<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Resolved::Found(value) => Some(value),
            Resolved::Empty => None,
        }
    }
}

/// Years to query, in order: the current one, then the one before it for the
/// weeks before a new season's first race.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearFallback {
    current: i32,
}

impl YearFallback {
    pub fn new(current: i32) -> Self {
        Self { current }
    }

    pub fn years(self) -> [i32; 2] {
        [self.current, self.current - 1]
    }

    /// Race sessions of the first year in the sequence that has any.
    pub async fn race_sessions(
        self,
        timing: &dyn TimingSource,
    ) -> Result<Vec<Session>, UpstreamError> {
        for year in self.years() {
            let sessions = timing.list_sessions(year, Some(RACE_SESSION_NAME)).await?;
            if !sessions.is_empty() {
                return Ok(sessions);
            }
        }
        Ok(Vec::new())
    }
}

/// Most recent session that started strictly before `now`.
pub fn latest_completed(sessions: &[Session], now: DateTime<Utc>) -> Option<&Session> {
    sessions
        .iter()
        .filter(|s| s.start < now)
        .max_by_key(|s| s.start)
}

pub async fn latest_completed_race_session(
    timing: &dyn TimingSource,
    now: DateTime<Utc>,
) -> Resolved<Session> {
    match YearFallback::new(now.year()).race_sessions(timing).await {
        Ok(sessions) => match latest_completed(&sessions, now) {
            Some(session) => Resolved::Found(session.clone()),
            None => Resolved::Empty,
        },
        Err(e) => {
            error!("Error fetching session: {}", e);
            Resolved::Empty
        }
    }
}

/// Race sessions of `year` that have started before `now`, oldest first.
pub async fn completed_race_sessions(
    timing: &dyn TimingSource,
    year: i32,
    now: DateTime<Utc>,
) -> Result<Vec<Session>, UpstreamError> {
    let mut sessions: Vec<Session> = timing
        .list_sessions(year, Some(RACE_SESSION_NAME))
        .await?
        .into_iter()
        .filter(|s| s.start < now)
        .collect();
    sessions.sort_by_key(|s| s.start);
    info!("{} completed race sessions in {}", sessions.len(), year);
    Ok(sessions)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UpcomingRace {
    Scheduled(Session),
    SeasonFinished(SeasonFinished),
}

/// The upcoming race, or failing that the earliest upcoming session of any
/// kind.
pub fn pick_next_upcoming(sessions: &[Session], now: DateTime<Utc>) -> Option<&Session> {
    let mut upcoming: Vec<&Session> = sessions.iter().filter(|s| s.start > now).collect();
    upcoming.sort_by_key(|s| s.start);
    upcoming
        .iter()
        .find(|s| map_session_name(&s.name) == Some(WeekendSlot::Race))
        .or_else(|| upcoming.first())
        .copied()
}

pub async fn next_upcoming_race(
    timing: &dyn TimingSource,
    now: DateTime<Utc>,
) -> Resolved<UpcomingRace> {
    let year = now.year();
    match timing.list_sessions(year, None).await {
        Ok(sessions) => Resolved::Found(match pick_next_upcoming(&sessions, now) {
            Some(session) => UpcomingRace::Scheduled(session.clone()),
            None => UpcomingRace::SeasonFinished(SeasonFinished::after(year)),
        }),
        Err(e) => {
            error!("Error fetching upcoming sessions: {}", e);
            Resolved::Empty
        }
    }
}
