use std::sync::Arc;

use reqwest::Client;

use crate::services::{
    jolpica::JolpicaClient, open_meteo::OpenMeteoClient, openf1::OpenF1Client, StandingsSource,
    TimingSource, WeatherSource,
};
use crate::utils::{config::Config, rate_limiter::RateLimiter};

/// Shared by every request. Holds upstream clients and the season throttle,
/// never request data.
#[derive(Clone)]
pub struct AppState {
    pub timing: Arc<dyn TimingSource>,
    pub standings: Arc<dyn StandingsSource>,
    pub weather: Arc<dyn WeatherSource>,
    pub limiter: RateLimiter,
}

impl AppState {
    pub fn init(config: &Config) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(config.upstream_timeout)
            .build()?;

        Ok(AppState {
            timing: Arc::new(OpenF1Client::new(http_client.clone(), &config.openf1_url)),
            standings: Arc::new(JolpicaClient::new(http_client.clone(), &config.jolpica_url)),
            weather: Arc::new(OpenMeteoClient::new(http_client, &config.open_meteo_url)),
            limiter: RateLimiter::new(config.upstream_max_concurrent, config.season_request_delay),
        })
    }
}
