use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::info;

use super::{
    session_resolver::{latest_completed_race_session, Resolved},
    TimingSource,
};
use crate::models::{
    error::ServiceError,
    race::{LastRaceResults, SessionInfo, StandingEntry},
    session::{DriverInfo, LapRecord, RaceResult, Session},
};
use crate::utils::{race_utils::race_points, team_colors::resolve_color};

const UNKNOWN: &str = "Unknown";

/// Session-wide and per-driver best laps.
#[derive(Debug, Default, PartialEq)]
pub struct FastestLaps {
    pub overall: Option<(u32, f64)>,
    pub by_driver: HashMap<u32, f64>,
}

impl FastestLaps {
    /// Laps without a duration (in/out laps, red flags) are ignored.
    pub fn from_laps(laps: &[LapRecord]) -> Self {
        let mut fastest = FastestLaps::default();
        for lap in laps {
            let Some(duration) = lap.lap_duration else {
                continue;
            };
            fastest
                .by_driver
                .entry(lap.driver_number)
                .and_modify(|best| *best = best.min(duration))
                .or_insert(duration);
            if fastest.overall.map_or(true, |(_, best)| duration < best) {
                fastest.overall = Some((lap.driver_number, duration));
            }
        }
        fastest
    }

    pub fn holder(&self) -> Option<u32> {
        self.overall.map(|(driver, _)| driver)
    }

    pub fn time(&self) -> Option<f64> {
        self.overall.map(|(_, time)| time)
    }
}

/// Joins results, roster and lap data into the enriched classification.
///
/// Every result yields exactly one entry, ordered by upstream position with
/// unclassified drivers last.
pub fn build_standings(
    results: &[RaceResult],
    drivers: &[DriverInfo],
    fastest: &FastestLaps,
) -> Vec<StandingEntry> {
    let roster: HashMap<u32, &DriverInfo> = drivers.iter().map(|d| (d.number, d)).collect();

    let mut ordered: Vec<&RaceResult> = results.iter().collect();
    ordered.sort_by_key(|r| (r.position.is_none(), r.position));

    ordered
        .into_iter()
        .map(|result| {
            let info = roster.get(&result.driver_number);
            let team = info
                .and_then(|d| d.team.clone())
                .unwrap_or_else(|| UNKNOWN.to_string());
            let team_color = info
                .and_then(|d| d.team_color.clone())
                .unwrap_or_else(|| resolve_color(&team));
            let has_fastest_lap = fastest.holder() == Some(result.driver_number);

            StandingEntry {
                position: result.position,
                driver: info
                    .and_then(|d| d.full_name.clone())
                    .unwrap_or_else(|| UNKNOWN.to_string()),
                driver_acronym: info.and_then(|d| d.acronym.clone()),
                driver_number: result.driver_number,
                team,
                team_color,
                points: race_points(result.finish_position(), has_fastest_lap),
                has_fastest_lap,
                fastest_lap_time: fastest.by_driver.get(&result.driver_number).copied(),
                gap_to_leader: result.gap_to_leader.clone().unwrap_or_default(),
                time: result.time,
                headshot_url: info.and_then(|d| d.headshot_url.clone()),
                country_code: info.and_then(|d| d.country_code.clone()),
                dnf: result.dnf,
                dns: result.dns,
                dsq: result.dsq,
            }
        })
        .collect()
}

pub async fn results_for_session(
    timing: &dyn TimingSource,
    session: &Session,
) -> Result<LastRaceResults, ServiceError> {
    let (results, drivers, laps) = tokio::try_join!(
        timing.session_results(session.key),
        timing.drivers(session.key),
        timing.laps(session.key),
    )?;

    let fastest = FastestLaps::from_laps(&laps);
    let standings = build_standings(&results, &drivers, &fastest);

    Ok(LastRaceResults {
        session_info: SessionInfo {
            circuit: session.circuit.clone(),
            location: session.location.clone(),
            country: session.country.clone(),
            date: session.start,
            name: session.name.clone(),
            fastest_lap_time: fastest.time(),
        },
        standings,
    })
}

pub async fn last_race_results(
    timing: &dyn TimingSource,
    now: DateTime<Utc>,
) -> Result<LastRaceResults, ServiceError> {
    let Resolved::Found(session) = latest_completed_race_session(timing, now).await else {
        return Err(ServiceError::NoSessionFound);
    };
    info!(
        "Fetching results for: {} - {}",
        session.name, session.circuit
    );
    results_for_session(timing, &session).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::Gap;
    use crate::services::fake::{at, driver, finished, lap, race_session, retired, FakeTiming};

    fn podium_timing() -> FakeTiming {
        let session = race_session(9000, "Spa", "2025-07-27T13:00:00Z");
        let mut timing = FakeTiming::default().with_race(
            session,
            vec![retired(16, Some(3)), finished(44, 2), finished(1, 1)],
            vec![
                driver(1, "VER", "Red Bull Racing"),
                driver(44, "HAM", "Ferrari"),
                driver(16, "LEC", "Ferrari"),
            ],
        );
        timing.laps.insert(
            9000,
            vec![
                lap(1, Some(106.2)),
                lap(44, Some(105.9)),
                lap(44, None),
                lap(16, Some(107.0)),
                lap(1, Some(106.0)),
            ],
        );
        timing
    }

    #[tokio::test]
    async fn podium_with_fastest_lap_and_retirement() {
        let timing = podium_timing();

        let out = last_race_results(&timing, at("2025-08-01T00:00:00Z"))
            .await
            .unwrap();

        let summary: Vec<(Option<u32>, u32, u32, bool, bool)> = out
            .standings
            .iter()
            .map(|s| (s.position, s.driver_number, s.points, s.has_fastest_lap, s.dnf))
            .collect();
        assert_eq!(
            summary,
            vec![
                (Some(1), 1, 25, false, false),
                (Some(2), 44, 19, true, false),
                (Some(3), 16, 0, false, true),
            ]
        );
        assert_eq!(out.session_info.fastest_lap_time, Some(105.9));
        assert_eq!(out.session_info.circuit, "Spa");
        assert_eq!(out.standings[0].fastest_lap_time, Some(106.0));
    }

    #[test]
    fn fastest_lap_outside_top_ten_earns_nothing() {
        let results = vec![finished(1, 1), finished(23, 11)];
        let drivers = vec![driver(1, "VER", "Red Bull"), driver(23, "ALB", "Williams")];
        let fastest = FastestLaps::from_laps(&[lap(1, Some(80.5)), lap(23, Some(79.9))]);

        let standings = build_standings(&results, &drivers, &fastest);

        assert_eq!(standings[1].driver_number, 23);
        assert!(standings[1].has_fastest_lap);
        assert_eq!(standings[1].points, 0);
        assert_eq!(standings[0].points, 25);
    }

    #[test]
    fn unknown_driver_keeps_a_placeholder_row() {
        let results = vec![finished(1, 1), finished(99, 2)];
        let drivers = vec![driver(1, "VER", "Red Bull")];

        let standings = build_standings(&results, &drivers, &FastestLaps::default());

        assert_eq!(standings.len(), results.len());
        assert_eq!(standings[1].driver, "Unknown");
        assert_eq!(standings[1].team, "Unknown");
        assert_eq!(standings[1].team_color, "000000");
        assert_eq!(standings[1].gap_to_leader, Gap::Seconds(0.0));
    }

    #[test]
    fn unclassified_results_sort_last() {
        let results = vec![retired(5, None), finished(2, 2), finished(1, 1)];

        let standings = build_standings(&results, &[], &FastestLaps::default());

        let order: Vec<u32> = standings.iter().map(|s| s.driver_number).collect();
        assert_eq!(order, vec![1, 2, 5]);
    }

    #[tokio::test]
    async fn no_session_is_an_error() {
        let timing = FakeTiming::default();

        let err = last_race_results(&timing, at("2025-08-01T00:00:00Z"))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::NoSessionFound));
    }

    #[tokio::test]
    async fn upstream_failure_aborts_the_request() {
        let mut timing = podium_timing();
        timing.failing_sessions.insert(9000);

        let err = last_race_results(&timing, at("2025-08-01T00:00:00Z"))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::UpstreamFetch(_)));
    }

    #[tokio::test]
    async fn repeated_calls_are_identical() {
        let timing = podium_timing();
        let now = at("2025-08-01T00:00:00Z");

        let first = last_race_results(&timing, now).await.unwrap();
        let second = last_race_results(&timing, now).await.unwrap();

        assert_eq!(first, second);
    }
}
