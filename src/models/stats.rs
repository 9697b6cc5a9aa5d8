use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverSeasonStat {
    pub driver: String,
    pub driver_acronym: String,
    pub driver_number: u32,
    pub team: String,
    pub team_color: String,
    pub dnf_count: u32,
    pub total_races: u32,
    pub average_grid_position: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverSeasonStats {
    pub season: i32,
    pub stats: Vec<DriverSeasonStat>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructorWinEntry {
    pub team: String,
    pub team_color: String,
    pub wins: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstructorWins {
    pub season: i32,
    pub wins: Vec<ConstructorWinEntry>,
}

/// Finishing position per race for one driver; `None` where the driver did
/// not take part or did not finish.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverPositionTrend {
    pub driver_name: String,
    pub driver_acronym: String,
    pub team_color: String,
    pub positions: Vec<Option<u32>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverRacePositions {
    pub season: i32,
    pub races: Vec<String>,
    pub drivers: Vec<DriverPositionTrend>,
}
