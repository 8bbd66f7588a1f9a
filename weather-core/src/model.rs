use chrono::{DateTime, Utc};
use serde::Deserialize;

/// First geocoder hit for a place query. Coordinates are ETRS89 (EPSG:4258).
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
}

/// Point-in-time measurements from the first forecast entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InstantDetails {
    pub air_pressure_at_sea_level: f64,
    pub air_temperature: f64,
    pub cloud_area_fraction: f64,
    pub relative_humidity: f64,
    pub wind_from_direction: f64,
    pub wind_speed: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub time: DateTime<Utc>,
    pub details: InstantDetails,
}
