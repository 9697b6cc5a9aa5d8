use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;

use super::{http::get_json, WeatherSource};
use crate::models::{
    error::UpstreamError,
    weather::{ForecastResponse, WeatherSnapshot},
};

const DAILY_FIELDS: &str =
    "weather_code,temperature_2m_max,temperature_2m_min,precipitation_probability_max";

pub struct OpenMeteoClient {
    http_client: Client,
    base_url: String,
}

impl OpenMeteoClient {
    pub fn new(http_client: Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl WeatherSource for OpenMeteoClient {
    async fn forecast(
        &self,
        lat: f64,
        lon: f64,
        date: NaiveDate,
    ) -> Result<Option<WeatherSnapshot>, UpstreamError> {
        let day = date.format("%Y-%m-%d").to_string();
        let res: ForecastResponse = get_json(
            &self.http_client,
            &format!("{}/forecast", self.base_url),
            &[
                ("latitude", lat.to_string()),
                ("longitude", lon.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
                ("start_date", day.clone()),
                ("end_date", day),
            ],
        )
        .await?;
        Ok(res.daily.map(|daily| daily.first_day()))
    }
}
