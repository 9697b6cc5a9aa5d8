use serde::{Deserialize, Serialize};

/// Ergast-style envelope shared by every Jolpica response.
#[derive(Debug, Deserialize)]
pub struct MrData<T> {
    #[serde(rename = "MRData")]
    pub mr_data: T,
}

#[derive(Debug, Deserialize)]
pub struct StandingsTableEnvelope<L> {
    #[serde(rename = "StandingsTable")]
    pub standings_table: StandingsTable<L>,
}

#[derive(Debug, Deserialize)]
pub struct StandingsTable<L> {
    #[serde(rename = "StandingsLists", default = "Vec::new")]
    pub standings_lists: Vec<L>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DriverStandingsList {
    pub season: String,
    #[serde(rename = "DriverStandings", default)]
    pub driver_standings: Vec<JolpicaDriverStanding>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JolpicaDriverStanding {
    #[serde(default)]
    pub position: Option<String>,
    pub points: String,
    pub wins: String,
    #[serde(rename = "Driver")]
    pub driver: JolpicaDriver,
    #[serde(rename = "Constructors", default)]
    pub constructors: Vec<JolpicaConstructor>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JolpicaDriver {
    #[serde(default)]
    pub permanent_number: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    pub given_name: String,
    pub family_name: String,
    #[serde(default)]
    pub nationality: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConstructorStandingsList {
    pub season: String,
    #[serde(rename = "ConstructorStandings", default)]
    pub constructor_standings: Vec<JolpicaConstructorStanding>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JolpicaConstructorStanding {
    #[serde(default)]
    pub position: Option<String>,
    pub points: String,
    pub wins: String,
    #[serde(rename = "Constructor")]
    pub constructor: JolpicaConstructor,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JolpicaConstructor {
    pub name: String,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverStanding {
    pub position: Option<u32>,
    pub points: f64,
    pub wins: u32,
    pub driver_number: Option<u32>,
    pub driver: String,
    pub driver_acronym: Option<String>,
    pub team: String,
    pub team_color: String,
    pub nationality: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructorStanding {
    pub position: Option<u32>,
    pub points: f64,
    pub wins: u32,
    pub team: String,
    pub team_color: String,
    pub nationality: Option<String>,
    pub wiki_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standings<T> {
    pub season: i32,
    pub standings: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverSummary {
    pub number: u32,
    pub name: Option<String>,
    pub acronym: Option<String>,
    pub team: Option<String>,
    pub headshot_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_driver_standings_envelope() {
        let payload = r#"{"MRData": {"StandingsTable": {"season": "2025", "StandingsLists": [
            {"season": "2025", "round": "3", "DriverStandings": [
                {"position": "1", "positionText": "1", "points": "62", "wins": "1",
                 "Driver": {"driverId": "norris", "permanentNumber": "4", "code": "NOR",
                            "givenName": "Lando", "familyName": "Norris", "nationality": "British"},
                 "Constructors": [{"constructorId": "mclaren", "name": "McLaren",
                                   "nationality": "British"}]}
            ]}
        ]}}}"#;
        let parsed: MrData<StandingsTableEnvelope<DriverStandingsList>> =
            serde_json::from_str(payload).unwrap();
        let lists = parsed.mr_data.standings_table.standings_lists;
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].driver_standings[0].driver.code.as_deref(), Some("NOR"));
        assert_eq!(lists[0].driver_standings[0].constructors[0].name, "McLaren");
    }
}
