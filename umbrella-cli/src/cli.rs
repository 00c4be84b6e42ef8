use std::time::Duration;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{ArgAction, Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text, validator::Validation};
use tracing::debug;
use umbrella_core::{
    Config, HttpForecastSource, UmbrellaRequest, recommend,
    url::{normalize_city, normalize_country},
};

use crate::output::umbrella_message;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "umbrella", version, about = "Do you need an umbrella in the next five days?")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` overrides it.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key and default location.
    Configure,

    /// Check which of the next five days need an umbrella.
    Check {
        /// City name; defaults to the configured city.
        #[arg(long)]
        city: Option<String>,

        /// Two letter country code; defaults to the configured country.
        #[arg(long)]
        country: Option<String>,

        /// OpenWeather API key; defaults to the configured key.
        #[arg(long)]
        api_key: Option<String>,

        /// Reference date (YYYY-MM-DD); if absent, means today.
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        /// Request timeout in seconds; waits indefinitely when unset.
        #[arg(long)]
        timeout: Option<u64>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Check { city, country, api_key, date, timeout } => {
                let cfg = Config::load()?;

                let api_key = match api_key {
                    Some(key) => key,
                    None => cfg.api_key()?.to_string(),
                };
                let city = city.unwrap_or_else(|| cfg.city().to_string());
                let country = country.unwrap_or_else(|| cfg.country().to_string());
                let today = date.unwrap_or_else(|| Local::now().date_naive());
                let timeout = timeout.map(Duration::from_secs).or_else(|| cfg.timeout());

                debug!(%city, %country, %today, ?timeout, "resolved check parameters");

                let source = HttpForecastSource::with_timeout(timeout)?;
                let request = UmbrellaRequest { city, country, api_key, today };

                let days = recommend(&source, cfg.base_url(), &request)
                    .await
                    .with_context(|| format!("Failed to get the forecast for {}", request.city.trim()))?;

                println!("{}", umbrella_message(&days, request.city.trim()));
                Ok(())
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .with_validator(|input: &str| {
            Ok(if input.trim().is_empty() {
                Validation::Invalid("API key must not be empty".into())
            } else {
                Validation::Valid
            })
        })
        .prompt()
        .context("Failed to read API key")?;

    let city = Text::new("Default city:")
        .with_default(cfg.city())
        .with_validator(|input: &str| {
            Ok(match normalize_city(input) {
                Ok(_) => Validation::Valid,
                Err(e) => Validation::Invalid(e.to_string().into()),
            })
        })
        .prompt()
        .context("Failed to read city")?;

    let country = Text::new("Country code (2 letters):")
        .with_default(cfg.country())
        .with_validator(|input: &str| {
            Ok(match normalize_country(input) {
                Ok(_) => Validation::Valid,
                Err(e) => Validation::Invalid(e.to_string().into()),
            })
        })
        .prompt()
        .context("Failed to read country")?;

    cfg.update(api_key.trim().to_string(), city.trim().to_string(), country.to_lowercase());
    cfg.save()?;

    println!("Configuration saved to {}", Config::config_file_path()?.display());
    Ok(())
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got '{value}': {e}"))
}
