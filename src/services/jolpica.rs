use async_trait::async_trait;
use reqwest::Client;

use super::{http::get_json, StandingsSource};
use crate::models::{
    error::UpstreamError,
    schedule::{RaceTableEnvelope, ScheduledRace},
    standings::{ConstructorStandingsList, DriverStandingsList, MrData, StandingsTableEnvelope},
};

const STANDINGS_LIMIT: u32 = 100;

pub struct JolpicaClient {
    http_client: Client,
    base_url: String,
}

impl JolpicaClient {
    pub fn new(http_client: Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn first_standings_list<L: serde::de::DeserializeOwned>(
        &self,
        url: String,
    ) -> Result<Option<L>, UpstreamError> {
        let res: MrData<StandingsTableEnvelope<L>> = get_json(
            &self.http_client,
            &url,
            &[("limit", STANDINGS_LIMIT.to_string())],
        )
        .await?;
        Ok(res.mr_data.standings_table.standings_lists.into_iter().next())
    }
}

#[async_trait]
impl StandingsSource for JolpicaClient {
    async fn driver_standings(
        &self,
        year: i32,
    ) -> Result<Option<DriverStandingsList>, UpstreamError> {
        self.first_standings_list(format!("{}/{year}/driverStandings.json", self.base_url))
            .await
    }

    async fn constructor_standings(
        &self,
        year: i32,
    ) -> Result<Option<ConstructorStandingsList>, UpstreamError> {
        self.first_standings_list(format!(
            "{}/{year}/constructorStandings.json",
            self.base_url
        ))
        .await
    }

    async fn next_race(&self) -> Result<Option<ScheduledRace>, UpstreamError> {
        let res: MrData<RaceTableEnvelope> = get_json(
            &self.http_client,
            &format!("{}/current/next.json", self.base_url),
            &[],
        )
        .await?;
        Ok(res.mr_data.race_table.races.into_iter().next())
    }
}
