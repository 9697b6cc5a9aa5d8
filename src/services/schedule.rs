use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use tracing::warn;

use super::{StandingsSource, WeatherSource};
use crate::models::{
    error::ServiceError,
    schedule::{NextRace, NextRaceDetails, ScheduledRace, SeasonFinished, WeekendSession},
    weather::WeatherSnapshot,
};
use crate::utils::race_utils::WeekendSlot;

/// Combines a Jolpica date and `HH:MM:SSZ` time into a UTC instant.
fn start_at(date: NaiveDate, time: &str) -> Option<DateTime<Utc>> {
    let time = NaiveTime::parse_from_str(time.trim_end_matches('Z'), "%H:%M:%S").ok()?;
    Some(date.and_time(time).and_utc())
}

/// Weekend sessions with estimated end times, earliest first.
///
/// Slots without a usable date and time are left out. The race itself only
/// needs a date; without a readable time it is placed at midnight UTC.
pub fn build_weekend(race: &ScheduledRace) -> Vec<WeekendSession> {
    let mut sessions: Vec<WeekendSession> = WeekendSlot::ALL
        .into_iter()
        .filter_map(|slot| {
            let scheduled = race.slot(slot)?;
            let parsed = match &scheduled.time {
                Some(time) => {
                    let start = start_at(scheduled.date, time);
                    if start.is_none() {
                        warn!(
                            "Unreadable time {:?} for {} of {}",
                            time,
                            slot.display_name(),
                            race.race_name
                        );
                    }
                    start
                }
                None => None,
            };
            let start = match (parsed, slot) {
                (Some(start), _) => start,
                (None, WeekendSlot::Race) => scheduled.date.and_time(NaiveTime::MIN).and_utc(),
                (None, _) => return None,
            };
            Some(WeekendSession {
                session_name: slot.display_name(),
                session_type: slot.category(),
                date_start: start,
                date_end: start + slot.duration(),
            })
        })
        .collect();
    sessions.sort_by_key(|s| s.date_start);
    sessions
}

/// Best-effort race-day forecast; any failure is logged and yields `None`.
async fn race_day_weather(
    weather: &dyn WeatherSource,
    race: &ScheduledRace,
) -> Option<WeatherSnapshot> {
    let location = &race.circuit.location;
    let (Ok(lat), Ok(lon)) = (location.lat.parse::<f64>(), location.long.parse::<f64>()) else {
        warn!(
            "Unusable coordinates for {} ({}, {}), continuing without weather",
            race.circuit.circuit_name, location.lat, location.long
        );
        return None;
    };

    match weather.forecast(lat, lon, race.date).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!("Weather fetch failed, continuing without weather: {}", e);
            None
        }
    }
}

pub async fn next_race_details(
    standings: &dyn StandingsSource,
    weather: &dyn WeatherSource,
    current_year: i32,
) -> Result<NextRace, ServiceError> {
    let Some(race) = standings.next_race().await? else {
        return Ok(NextRace::SeasonFinished(SeasonFinished::after(current_year)));
    };

    let sessions = build_weekend(&race);
    let weather = race_day_weather(weather, &race).await;
    let race_date = sessions
        .iter()
        .find(|s| s.session_name == WeekendSlot::Race.display_name())
        .map(|s| s.date_start)
        .unwrap_or_else(|| race.date.and_time(NaiveTime::MIN).and_utc());

    Ok(NextRace::Upcoming(Box::new(NextRaceDetails {
        race_name: race.race_name,
        circuit: race.circuit.circuit_name,
        location: race.circuit.location.locality,
        country: race.circuit.location.country,
        race_date,
        meeting_key: race.round,
        sessions,
        weather,
    })))
}
