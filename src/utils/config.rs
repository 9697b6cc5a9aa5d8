use std::time::Duration;

const OPENF1_URL: &str = "https://api.openf1.org/v1";
const JOLPICA_URL: &str = "https://api.jolpi.ca/ergast/f1";
const OPEN_METEO_URL: &str = "https://api.open-meteo.com/v1";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub log_level: String,
    pub openf1_url: String,
    pub jolpica_url: String,
    pub open_meteo_url: String,
    /// Pause between sessions in the season-wide loops.
    pub season_request_delay: Duration,
    pub upstream_max_concurrent: usize,
    pub upstream_timeout: Duration,
}

impl Config {
    pub fn init() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let string = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let number = |key: &str, default: u64| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .unwrap_or(default)
        };

        Config {
            bind_addr: string("BIND_ADDR", "127.0.0.1:3000"),
            log_level: string("LOG_LEVEL", "info").to_lowercase(),
            openf1_url: string("OPENF1_URL", OPENF1_URL),
            jolpica_url: string("JOLPICA_URL", JOLPICA_URL),
            open_meteo_url: string("OPEN_METEO_URL", OPEN_METEO_URL),
            season_request_delay: Duration::from_millis(number("SEASON_REQUEST_DELAY_MS", 100)),
            upstream_max_concurrent: number("UPSTREAM_MAX_CONCURRENT", 4) as usize,
            upstream_timeout: Duration::from_secs(number("UPSTREAM_TIMEOUT_SECS", 10)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.bind_addr, "127.0.0.1:3000");
        assert_eq!(config.openf1_url, "https://api.openf1.org/v1");
        assert_eq!(config.season_request_delay, Duration::from_millis(100));
        assert_eq!(config.upstream_max_concurrent, 4);
    }

    #[test]
    fn overrides_and_ignores_garbage_numbers() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("SEASON_REQUEST_DELAY_MS", "0"),
            ("UPSTREAM_TIMEOUT_SECS", "soon"),
            ("LOG_LEVEL", "DEBUG"),
        ]);
        let config = Config::from_lookup(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.season_request_delay, Duration::ZERO);
        assert_eq!(config.upstream_timeout, Duration::from_secs(10));
        assert_eq!(config.log_level, "debug");
    }
}
