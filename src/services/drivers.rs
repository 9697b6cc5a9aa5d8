use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::warn;

use super::{
    session_resolver::{latest_completed_race_session, Resolved},
    TimingSource,
};
use crate::models::{session::DriverInfo, standings::DriverSummary};

/// One entry per driver number, first occurrence wins.
pub fn dedup_drivers(drivers: Vec<DriverInfo>) -> Vec<DriverSummary> {
    let mut seen = HashSet::new();
    drivers
        .into_iter()
        .filter(|d| seen.insert(d.number))
        .map(|d| DriverSummary {
            number: d.number,
            name: d.full_name,
            acronym: d.acronym,
            team: d.team,
            headshot_url: d.headshot_url,
        })
        .collect()
}

/// Roster of the latest completed race. Never fails; no data is `Empty`.
pub async fn driver_list(
    timing: &dyn TimingSource,
    now: DateTime<Utc>,
) -> Resolved<Vec<DriverSummary>> {
    let Resolved::Found(session) = latest_completed_race_session(timing, now).await else {
        return Resolved::Empty;
    };
    match timing.drivers(session.key).await {
        Ok(drivers) => Resolved::Found(dedup_drivers(drivers)),
        Err(e) => {
            warn!("Driver list unavailable for session {}: {}", session.key, e);
            Resolved::Empty
        }
    }
}
