use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

use crate::{
    config::ClientConfig,
    error::{QueryError, Stage, truncate_body},
    model::{Observation, Place},
    provider::{geonorge::GeoNorge, met_no::MetNo},
};

pub mod geonorge;
pub mod met_no;

/// Resolves a free-text place name to its first match.
#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    async fn locate(&self, query: &str) -> Result<Place, QueryError>;
}

/// Looks up the nearest forecast instant for a resolved place.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn current(&self, place: &Place) -> Result<Observation, QueryError>;
}

/// Construct both stages from config, sharing one HTTP client.
pub fn providers_from_config(config: &ClientConfig) -> Result<(GeoNorge, MetNo), QueryError> {
    let http = config.http_client()?;

    Ok((
        GeoNorge::new(http.clone(), config.geocoder_url.clone()),
        MetNo::new(http, config.forecast_url.clone(), config.user_agent.clone()),
    ))
}

/// Send `request`, require a 2xx status and decode the body as `T`.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    stage: Stage,
    request: RequestBuilder,
) -> Result<T, QueryError> {
    let res = request.send().await.map_err(|source| QueryError::Transport { stage, source })?;

    let status = res.status();
    let body = res.text().await.map_err(|source| QueryError::Transport { stage, source })?;
    tracing::debug!(%stage, %status, bytes = body.len(), "response received");

    if !status.is_success() {
        return Err(QueryError::Status {
            stage,
            status: status.as_u16(),
            body: truncate_body(&body),
        });
    }

    serde_json::from_str(&body).map_err(|source| QueryError::Decode { stage, source })
}
