use crate::{
    error::QueryError,
    provider::{ForecastProvider, Geocoder},
    report::Report,
};

/// Geocode `place`, then fetch the current forecast for the first hit.
///
/// The forecast provider is never called if geocoding fails.
pub async fn run(
    place: &str,
    geocoder: &dyn Geocoder,
    forecast: &dyn ForecastProvider,
) -> Result<Report, QueryError> {
    let resolved = geocoder.locate(place).await?;
    let observation = forecast.current(&resolved).await?;

    Ok(Report::new(resolved, observation))
}
