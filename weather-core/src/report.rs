//! Plain-text rendering of a resolved place and its current forecast.

use std::fmt;

use crate::model::{Observation, Place};

const LABEL_WIDTH: usize = 30;

/// Celsius to Fahrenheit, with a floating-point `9 / 5` factor.
pub fn fahrenheit(celsius: f64) -> f64 {
    celsius * (9.0 / 5.0) + 32.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub place: Place,
    pub observation: Observation,
}

impl Report {
    pub fn new(place: Place, observation: Observation) -> Self {
        Self { place, observation }
    }

    pub fn temperature_f(&self) -> f64 {
        fahrenheit(self.observation.details.air_temperature)
    }

    /// The eight report lines, in display order.
    pub fn lines(&self) -> [String; 8] {
        let details = &self.observation.details;
        let timestamp = self.observation.time.format("%Y-%m-%d %H:%M:%S %z %Z");

        [
            line("Current weather in:", &self.place.name),
            line(
                "Coordinates (long, lat):",
                format!("{}, {}", self.place.longitude, self.place.latitude),
            ),
            line("Observation timestamp:", timestamp),
            line("Temperature (celsius):", format!("{}°C", details.air_temperature)),
            line("Temperature (fahrenheit):", format!("{}°F", self.temperature_f())),
            line("Airpressure at sea level:", format!("{} hPa", details.air_pressure_at_sea_level)),
            line("Current humidity:", format!("{} %", details.relative_humidity)),
            line("Wind speed:", format!("{} m/sec", details.wind_speed)),
        ]
    }
}

fn line(label: &str, value: impl fmt::Display) -> String {
    format!("{label:<width$}{value}", width = LABEL_WIDTH)
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}
