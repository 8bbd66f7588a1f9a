//! Core library for the `weather-query` CLI.
//!
//! This crate defines:
//! - Client configuration (endpoints, User-Agent, timeout)
//! - The two lookup stages: place-name geocoding and forecast fetch
//! - Shared domain models and the plain-text report
//!
//! It is used by `weather-query`, but the stages can be driven by any caller
//! through [`query::run`].

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod query;
pub mod report;

pub use config::ClientConfig;
pub use error::{QueryError, Stage};
pub use model::{InstantDetails, Observation, Place};
pub use provider::{ForecastProvider, Geocoder, geonorge::GeoNorge, met_no::MetNo};
pub use report::Report;
