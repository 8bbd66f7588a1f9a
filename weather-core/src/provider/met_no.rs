use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{
    Client,
    header::{ACCEPT, USER_AGENT},
};
use serde::Deserialize;

use crate::{
    error::{QueryError, Stage},
    model::{InstantDetails, Observation, Place},
    provider::fetch_json,
};

use super::ForecastProvider;

/// MET Norway locationforecast 2.0, compact variant (the data behind yr.no).
#[derive(Debug, Clone)]
pub struct MetNo {
    http: Client,
    url: String,
    user_agent: String,
}

impl MetNo {
    pub fn new(http: Client, url: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
            user_agent: user_agent.into(),
        }
    }
}

#[async_trait]
impl ForecastProvider for MetNo {
    async fn current(&self, place: &Place) -> Result<Observation, QueryError> {
        tracing::debug!(
            lat = place.latitude,
            lon = place.longitude,
            url = %self.url,
            "fetching forecast"
        );

        let request = self
            .http
            .get(&self.url)
            .query(&[("lat", place.latitude), ("lon", place.longitude)])
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, self.user_agent.as_str());

        let parsed: MetResponse = fetch_json(Stage::FetchingWeather, request).await?;
        let observation = parsed.into_observation()?;

        tracing::debug!(time = %observation.time, "forecast received");
        Ok(observation)
    }
}

#[derive(Debug, Deserialize)]
struct MetResponse {
    properties: MetProperties,
}

#[derive(Debug, Deserialize)]
struct MetProperties {
    #[serde(default)]
    timeseries: Vec<MetTimeStep>,
}

#[derive(Debug, Deserialize)]
struct MetTimeStep {
    time: DateTime<Utc>,
    data: MetStepData,
}

#[derive(Debug, Deserialize)]
struct MetStepData {
    instant: MetInstant,
}

#[derive(Debug, Deserialize)]
struct MetInstant {
    details: InstantDetails,
}

impl MetResponse {
    fn into_observation(self) -> Result<Observation, QueryError> {
        let step = self
            .properties
            .timeseries
            .into_iter()
            .next()
            .ok_or(QueryError::EmptyResult {
                stage: Stage::FetchingWeather,
            })?;

        Ok(Observation {
            time: step.time,
            details: step.data.instant.details,
        })
    }
}
