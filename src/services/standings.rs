use std::str::FromStr;

use tracing::warn;

use super::StandingsSource;
use crate::models::{
    error::ServiceError,
    standings::{
        ConstructorStanding, ConstructorStandingsList, DriverStanding, DriverStandingsList,
        JolpicaConstructorStanding, JolpicaDriverStanding, Standings,
    },
};
use crate::utils::team_colors::resolve_color;

fn season_or(season: &str, year: i32) -> i32 {
    season.parse().unwrap_or(year)
}

/// Jolpica sends counts as strings; an unreadable one is logged and counted as zero.
fn count<T: FromStr + Default>(field: &str, value: &str, name: &str) -> T {
    value.parse().unwrap_or_else(|_| {
        warn!("Unreadable {} {:?} for {}, using 0", field, value, name);
        T::default()
    })
}

fn driver_standing(entry: JolpicaDriverStanding) -> DriverStanding {
    let team = entry
        .constructors
        .first()
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "Unknown".to_string());
    let driver = format!("{} {}", entry.driver.given_name, entry.driver.family_name);
    DriverStanding {
        position: entry.position.and_then(|p| p.parse().ok()),
        points: count("points", &entry.points, &driver),
        wins: count("wins", &entry.wins, &driver),
        driver_number: entry.driver.permanent_number.and_then(|n| n.parse().ok()),
        driver,
        driver_acronym: entry.driver.code,
        team_color: resolve_color(&team),
        team,
        nationality: entry.driver.nationality,
    }
}

fn constructor_standing(entry: JolpicaConstructorStanding) -> ConstructorStanding {
    ConstructorStanding {
        position: entry.position.and_then(|p| p.parse().ok()),
        points: count("points", &entry.points, &entry.constructor.name),
        wins: count("wins", &entry.wins, &entry.constructor.name),
        team_color: resolve_color(&entry.constructor.name),
        team: entry.constructor.name,
        nationality: entry.constructor.nationality,
        wiki_url: entry.constructor.url,
    }
}

pub fn map_driver_standings(
    list: Option<DriverStandingsList>,
    year: i32,
) -> Standings<DriverStanding> {
    match list {
        Some(list) => Standings {
            season: season_or(&list.season, year),
            standings: list.driver_standings.into_iter().map(driver_standing).collect(),
        },
        None => Standings {
            season: year,
            standings: Vec::new(),
        },
    }
}

pub fn map_constructor_standings(
    list: Option<ConstructorStandingsList>,
    year: i32,
) -> Standings<ConstructorStanding> {
    match list {
        Some(list) => Standings {
            season: season_or(&list.season, year),
            standings: list
                .constructor_standings
                .into_iter()
                .map(constructor_standing)
                .collect(),
        },
        None => Standings {
            season: year,
            standings: Vec::new(),
        },
    }
}

/// Never fails: an upstream error is logged and served as an empty table.
pub async fn driver_standings(
    standings: &dyn StandingsSource,
    year: i32,
) -> Standings<DriverStanding> {
    match standings.driver_standings(year).await {
        Ok(list) => map_driver_standings(list, year),
        Err(e) => {
            warn!("Driver standings unavailable, serving an empty table: {}", e);
            map_driver_standings(None, year)
        }
    }
}

pub async fn constructor_standings(
    standings: &dyn StandingsSource,
    year: i32,
) -> Result<Standings<ConstructorStanding>, ServiceError> {
    let list = standings.constructor_standings(year).await?;
    Ok(map_constructor_standings(list, year))
}
