use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::{QueryError, Stage},
    model::Place,
    provider::fetch_json,
};

use super::Geocoder;

/// EPSG:4258, ETRS89 geographic longitude/latitude.
const ETRS89: &str = "4258";

/// Kartverket's place-name search (stedsnavn).
#[derive(Debug, Clone)]
pub struct GeoNorge {
    http: Client,
    url: String,
}

impl GeoNorge {
    pub fn new(http: Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }
}

#[async_trait]
impl Geocoder for GeoNorge {
    async fn locate(&self, query: &str) -> Result<Place, QueryError> {
        tracing::debug!(query, url = %self.url, "resolving place name");

        let request = self.http.get(&self.url).query(&[
            ("sok", query),
            ("utkoordsys", ETRS89),
            ("treffPerSide", "1"),
            ("side", "1"),
        ]);

        let parsed: GnResponse = fetch_json(Stage::Geocoding, request).await?;
        let place = parsed.into_place()?;

        tracing::debug!(
            name = %place.name,
            longitude = place.longitude,
            latitude = place.latitude,
            "place resolved"
        );
        Ok(place)
    }
}

// Field-name table for the Norwegian response keys.
#[derive(Debug, Deserialize)]
struct GnResponse {
    #[serde(rename = "navn", default)]
    hits: Vec<GnHit>,
}

#[derive(Debug, Deserialize)]
struct GnHit {
    #[serde(rename = "skrivemåte")]
    name: String,
    #[serde(rename = "representasjonspunkt")]
    point: GnPoint,
}

#[derive(Debug, Deserialize)]
struct GnPoint {
    #[serde(rename = "øst")]
    east: f64,
    #[serde(rename = "nord")]
    north: f64,
}

impl GnResponse {
    fn into_place(self) -> Result<Place, QueryError> {
        let hit = self
            .hits
            .into_iter()
            .next()
            .ok_or(QueryError::EmptyResult {
                stage: Stage::Geocoding,
            })?;

        Ok(Place {
            name: hit.name,
            longitude: hit.point.east,
            latitude: hit.point.north,
        })
    }
}
