use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser};
use weather_core::{ClientConfig, provider::providers_from_config, query};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather-query",
    version,
    about = "Current weather from YR for a place name in Norway"
)]
pub struct Cli {
    /// Place name, e.g. "oslo" or "Bø i Telemark".
    pub place: Option<String>,

    /// Words after the place name are ignored; quote multi-word names.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,

    /// Log progress to stderr (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }

    pub async fn run(self) -> anyhow::Result<ExitCode> {
        if !self.rest.is_empty() {
            tracing::debug!(ignored = ?self.rest, "extra arguments ignored");
        }

        let Some(place) = self.place.filter(|p| !p.trim().is_empty()) else {
            println!("{}", usage(&program_name()));
            return Ok(ExitCode::from(1));
        };

        let config = ClientConfig::from_env();
        tracing::debug!(?config, "client configuration");

        let (geocoder, forecast) =
            providers_from_config(&config).context("Failed to set up HTTP client")?;

        let report = query::run(&place, &geocoder, &forecast)
            .await
            .with_context(|| format!("Could not fetch weather for '{place}'"))?;

        println!("{report}");
        Ok(ExitCode::SUCCESS)
    }
}

fn program_name() -> String {
    std::env::args().next().unwrap_or_else(|| "weather-query".to_string())
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {program} <place>\n\
         Error: Location string argument missing. Use any place in Norway."
    )
}
