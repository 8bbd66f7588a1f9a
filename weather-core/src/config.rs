use reqwest::Client;
use std::{collections::HashMap, time::Duration};

use crate::error::QueryError;

pub const GEONORGE_URL: &str = "https://ws.geonorge.no/stedsnavn/v1/navn";
pub const MET_NO_URL: &str = "https://api.met.no/weatherapi/locationforecast/2.0/compact.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// api.met.no rejects requests without an identifying User-Agent.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "weather-query/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/sigg3/weather_query)"
);

pub const GEOCODER_URL_ENV: &str = "WEATHER_QUERY_GEOCODER_URL";
pub const FORECAST_URL_ENV: &str = "WEATHER_QUERY_FORECAST_URL";
pub const USER_AGENT_ENV: &str = "WEATHER_QUERY_USER_AGENT";
pub const TIMEOUT_SECS_ENV: &str = "WEATHER_QUERY_TIMEOUT_SECS";

/// Endpoints and transport settings shared by both lookup stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub geocoder_url: String,
    pub forecast_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            geocoder_url: GEONORGE_URL.to_string(),
            forecast_url: MET_NO_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Defaults, overridden by any `WEATHER_QUERY_*` variables that are set.
    pub fn from_env() -> Self {
        Self::from_pairs(std::env::vars())
    }

    pub(crate) fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let env: HashMap<String, String> =
            pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        let defaults = Self::default();

        Self {
            geocoder_url: non_blank(&env, GEOCODER_URL_ENV).unwrap_or(defaults.geocoder_url),
            forecast_url: non_blank(&env, FORECAST_URL_ENV).unwrap_or(defaults.forecast_url),
            user_agent: non_blank(&env, USER_AGENT_ENV).unwrap_or(defaults.user_agent),
            timeout: non_blank(&env, TIMEOUT_SECS_ENV)
                .and_then(|value| value.parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }

    /// Build the one HTTP client handed to every stage.
    pub fn http_client(&self) -> Result<Client, QueryError> {
        Client::builder().timeout(self.timeout).build().map_err(QueryError::Client)
    }
}

fn non_blank(env: &HashMap<String, String>, key: &str) -> Option<String> {
    env.get(key).map(|value| value.trim()).filter(|value| !value.is_empty()).map(str::to_string)
}
