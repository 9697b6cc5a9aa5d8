//! Season-wide aggregations over every completed race of a year.
//!
//! Sessions are walked one at a time through the shared [`RateLimiter`] to
//! stay polite with the free OpenF1 API. Each call owns its accumulator; a
//! session that fails to load is logged as a [`PartialDataWarning`] and left
//! out, the rest of the season is still processed.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::{session_resolver::completed_race_sessions, TimingSource};
use crate::models::{
    error::{PartialDataWarning, ServiceError, UpstreamError},
    session::{DriverInfo, PositionSample, RaceResult, Session},
    stats::{
        ConstructorWinEntry, ConstructorWins, DriverPositionTrend, DriverRacePositions,
        DriverSeasonStat, DriverSeasonStats,
    },
};
use crate::utils::{rate_limiter::RateLimiter, team_colors::resolve_color};

fn skip(session: &Session, source: UpstreamError) {
    let warning = PartialDataWarning {
        session_key: session.key,
        source,
    };
    warn!("{} ({})", warning, session.circuit);
}

fn roster(drivers: &[DriverInfo]) -> HashMap<u32, &DriverInfo> {
    drivers.iter().map(|d| (d.number, d)).collect()
}

/// Earliest positive position sample per driver. Undated samples keep
/// upstream order.
fn grid_positions(samples: &[PositionSample]) -> HashMap<u32, u32> {
    let mut earliest: HashMap<u32, &PositionSample> = HashMap::new();
    for sample in samples.iter().filter(|s| s.position.is_some_and(|p| p > 0)) {
        earliest
            .entry(sample.driver_number)
            .and_modify(|kept| {
                if let (Some(date), Some(kept_date)) = (sample.date, kept.date) {
                    if date < kept_date {
                        *kept = sample;
                    }
                }
            })
            .or_insert(sample);
    }
    earliest
        .into_iter()
        .filter_map(|(number, sample)| Some((number, sample.position?)))
        .collect()
}

#[derive(Debug)]
struct DriverTally {
    driver: String,
    driver_number: u32,
    team: String,
    team_color: String,
    dnf_count: u32,
    total_races: u32,
    grid_positions: Vec<u32>,
}

/// Per-driver DNF and grid statistics keyed by name acronym.
#[derive(Debug, Default)]
pub struct SeasonStatsAccumulator {
    drivers: BTreeMap<String, DriverTally>,
}

impl SeasonStatsAccumulator {
    pub fn record_session(
        &mut self,
        results: &[RaceResult],
        drivers: &[DriverInfo],
        positions: &[PositionSample],
    ) {
        let roster = roster(drivers);
        let grid = grid_positions(positions);

        for result in results {
            let Some(info) = roster.get(&result.driver_number) else {
                continue;
            };
            let Some(acronym) = info.acronym.clone() else {
                continue;
            };

            let tally = self.drivers.entry(acronym).or_insert_with(|| DriverTally {
                driver: info.full_name.clone().unwrap_or_default(),
                driver_number: result.driver_number,
                team: info.team.clone().unwrap_or_default(),
                team_color: info.team_color.clone().unwrap_or_default(),
                dnf_count: 0,
                total_races: 0,
                grid_positions: Vec::new(),
            });

            tally.total_races += 1;
            if result.retired() {
                tally.dnf_count += 1;
            }
            if let Some(position) = grid.get(&result.driver_number) {
                tally.grid_positions.push(*position);
            }
        }
    }

    /// Stats sorted by acronym.
    pub fn finish(self) -> Vec<DriverSeasonStat> {
        self.drivers
            .into_iter()
            .map(|(acronym, tally)| {
                let average_grid_position = if tally.grid_positions.is_empty() {
                    None
                } else {
                    let sum: u32 = tally.grid_positions.iter().sum();
                    Some(sum as f64 / tally.grid_positions.len() as f64)
                };
                DriverSeasonStat {
                    driver: tally.driver,
                    driver_acronym: acronym,
                    driver_number: tally.driver_number,
                    team: tally.team,
                    team_color: tally.team_color,
                    dnf_count: tally.dnf_count,
                    total_races: tally.total_races,
                    average_grid_position,
                }
            })
            .collect()
    }
}

pub async fn driver_season_stats(
    timing: &dyn TimingSource,
    limiter: &RateLimiter,
    year: i32,
    now: DateTime<Utc>,
) -> Result<DriverSeasonStats, ServiceError> {
    let sessions = completed_race_sessions(timing, year, now).await?;
    let mut stats = SeasonStatsAccumulator::default();

    for session in &sessions {
        let _permit = limiter.acquire().await?;
        let fetched = tokio::try_join!(
            timing.session_results(session.key),
            timing.drivers(session.key),
            timing.starting_positions(session.key),
        );
        match fetched {
            Ok((results, drivers, positions)) => {
                stats.record_session(&results, &drivers, &positions)
            }
            Err(e) => skip(session, e),
        }
    }

    Ok(DriverSeasonStats {
        season: year,
        stats: stats.finish(),
    })
}

/// Race wins per team name.
#[derive(Debug, Default)]
pub struct ConstructorTally {
    wins: BTreeMap<String, ConstructorWinEntry>,
}

impl ConstructorTally {
    pub fn record_win(&mut self, team: &str) {
        self.wins
            .entry(team.to_string())
            .or_insert_with(|| ConstructorWinEntry {
                team: team.to_string(),
                team_color: resolve_color(team),
                wins: 0,
            })
            .wins += 1;
    }

    /// Most wins first; ties keep alphabetical order.
    pub fn finish(self) -> Vec<ConstructorWinEntry> {
        let mut wins: Vec<ConstructorWinEntry> = self.wins.into_values().collect();
        wins.sort_by(|a, b| b.wins.cmp(&a.wins));
        wins
    }
}

/// Team of the session winner, if the session has a classified P1.
async fn winning_team(
    timing: &dyn TimingSource,
    session: &Session,
) -> Result<Option<String>, UpstreamError> {
    let results = timing.session_results(session.key).await?;
    let Some(winner) = results.iter().find(|r| r.position == Some(1)) else {
        return Ok(None);
    };
    let driver = timing.driver(session.key, winner.driver_number).await?;
    Ok(driver.and_then(|d| d.team))
}

pub async fn constructor_wins(
    timing: &dyn TimingSource,
    limiter: &RateLimiter,
    year: i32,
    now: DateTime<Utc>,
) -> Result<ConstructorWins, ServiceError> {
    let sessions = completed_race_sessions(timing, year, now).await?;
    let mut tally = ConstructorTally::default();

    for session in &sessions {
        let _permit = limiter.acquire().await?;
        match winning_team(timing, session).await {
            Ok(Some(team)) => tally.record_win(&team),
            Ok(None) => info!("No winner recorded for {}, skipping", session.circuit),
            Err(e) => skip(session, e),
        }
    }

    Ok(ConstructorWins {
        season: year,
        wins: tally.finish(),
    })
}

/// Finishing position per race, one aligned column per processed race.
#[derive(Debug, Default)]
pub struct PositionTrend {
    races: Vec<String>,
    drivers: Vec<DriverPositionTrend>,
    index: HashMap<String, usize>,
}

impl PositionTrend {
    /// Appends one race. Drivers seen for the first time are back-filled with
    /// `None`; every row is padded so `positions.len() == races.len()`.
    pub fn record_race(&mut self, race: &str, results: &[RaceResult], drivers: &[DriverInfo]) {
        self.races.push(race.to_string());
        let width = self.races.len();

        for info in drivers {
            let Some(acronym) = &info.acronym else {
                continue;
            };
            if !self.index.contains_key(acronym) {
                self.index.insert(acronym.clone(), self.drivers.len());
                self.drivers.push(DriverPositionTrend {
                    driver_name: info.full_name.clone().unwrap_or_default(),
                    driver_acronym: acronym.clone(),
                    team_color: info.team_color.clone().unwrap_or_default(),
                    positions: vec![None; width - 1],
                });
            }
        }

        for trend in &mut self.drivers {
            trend.positions.resize(width, None);
        }

        let roster = roster(drivers);
        for result in results {
            let Some(acronym) = roster
                .get(&result.driver_number)
                .and_then(|d| d.acronym.as_ref())
            else {
                continue;
            };
            if let Some(&row) = self.index.get(acronym) {
                self.drivers[row].positions[width - 1] = result.finish_position();
            }
        }
    }

    pub fn finish(self) -> (Vec<String>, Vec<DriverPositionTrend>) {
        (self.races, self.drivers)
    }
}

pub async fn driver_race_positions(
    timing: &dyn TimingSource,
    limiter: &RateLimiter,
    year: i32,
    now: DateTime<Utc>,
) -> Result<DriverRacePositions, ServiceError> {
    let sessions = completed_race_sessions(timing, year, now).await?;
    let mut trend = PositionTrend::default();

    for session in &sessions {
        let _permit = limiter.acquire().await?;
        let fetched = tokio::try_join!(
            timing.session_results(session.key),
            timing.drivers(session.key),
        );
        match fetched {
            Ok((results, _)) if results.is_empty() => {
                warn!("No results for {}, skipping", session.circuit)
            }
            Ok((results, drivers)) => trend.record_race(&session.circuit, &results, &drivers),
            Err(e) => skip(session, e),
        }
    }

    let (races, drivers) = trend.finish();
    Ok(DriverRacePositions {
        season: year,
        races,
        drivers,
    })
}
