use serde::{Deserialize, Serialize};

/// Race-day forecast. Every field may be missing for dates outside the
/// provider's forecast window.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub temp_max: Option<f64>,
    pub temp_min: Option<f64>,
    pub precip_prob: Option<f64>,
    pub weather_code: Option<u32>,
}

/// Open-Meteo `/forecast` response, daily section only.
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub daily: Option<DailyForecast>,
}

#[derive(Debug, Deserialize)]
pub struct DailyForecast {
    #[serde(default)]
    pub weather_code: Vec<Option<u32>>,
    #[serde(default)]
    pub temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    pub temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    pub precipitation_probability_max: Vec<Option<f64>>,
}

impl DailyForecast {
    pub fn first_day(&self) -> WeatherSnapshot {
        WeatherSnapshot {
            temp_max: self.temperature_2m_max.first().copied().flatten(),
            temp_min: self.temperature_2m_min.first().copied().flatten(),
            precip_prob: self
                .precipitation_probability_max
                .first()
                .copied()
                .flatten(),
            weather_code: self.weather_code.first().copied().flatten(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_first_day_of_daily_forecast() {
        let payload = r#"{"latitude": 43.7, "longitude": 7.4, "daily": {
            "time": ["2025-05-25"],
            "weather_code": [3],
            "temperature_2m_max": [22.4],
            "temperature_2m_min": [16.1],
            "precipitation_probability_max": [null]
        }}"#;
        let parsed: ForecastResponse = serde_json::from_str(payload).unwrap();
        let snapshot = parsed.daily.unwrap().first_day();
        assert_eq!(snapshot.temp_max, Some(22.4));
        assert_eq!(snapshot.temp_min, Some(16.1));
        assert_eq!(snapshot.precip_prob, None);
        assert_eq!(snapshot.weather_code, Some(3));
    }
}
