use async_trait::async_trait;
use reqwest::Client;

use super::{http::get_json, TimingSource};
use crate::models::{
    error::UpstreamError,
    session::{DriverInfo, LapRecord, PositionSample, RaceResult, Session},
};

pub struct OpenF1Client {
    http_client: Client,
    base_url: String,
}

impl OpenF1Client {
    pub fn new(http_client: Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    async fn by_session<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        session_key: i64,
    ) -> Result<Vec<T>, UpstreamError> {
        get_json(
            &self.http_client,
            &self.endpoint(path),
            &[("session_key", session_key.to_string())],
        )
        .await
    }
}

#[async_trait]
impl TimingSource for OpenF1Client {
    async fn list_sessions(
        &self,
        year: i32,
        session_name: Option<&str>,
    ) -> Result<Vec<Session>, UpstreamError> {
        let mut query = vec![("year", year.to_string())];
        if let Some(name) = session_name {
            query.push(("session_name", name.to_string()));
        }
        get_json(&self.http_client, &self.endpoint("sessions"), &query).await
    }

    async fn session_results(&self, session_key: i64) -> Result<Vec<RaceResult>, UpstreamError> {
        self.by_session("session_result", session_key).await
    }

    async fn drivers(&self, session_key: i64) -> Result<Vec<DriverInfo>, UpstreamError> {
        self.by_session("drivers", session_key).await
    }

    async fn driver(
        &self,
        session_key: i64,
        driver_number: u32,
    ) -> Result<Option<DriverInfo>, UpstreamError> {
        let drivers: Vec<DriverInfo> = get_json(
            &self.http_client,
            &self.endpoint("drivers"),
            &[
                ("session_key", session_key.to_string()),
                ("driver_number", driver_number.to_string()),
            ],
        )
        .await?;
        Ok(drivers.into_iter().next())
    }

    async fn laps(&self, session_key: i64) -> Result<Vec<LapRecord>, UpstreamError> {
        self.by_session("laps", session_key).await
    }

    async fn starting_positions(
        &self,
        session_key: i64,
    ) -> Result<Vec<PositionSample>, UpstreamError> {
        self.by_session("position", session_key).await
    }
}
