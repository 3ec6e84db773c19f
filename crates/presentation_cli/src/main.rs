//! stopfinder CLI
//!
//! Runs the place-name → nearest-stop chain, or either half of it, from the
//! command line. Credentials come from the same configuration sources as the
//! server (`config.toml`, `STOPFINDER_*`, `MAPBOX_TOKEN`, `MBTA_API_KEY`).

#![allow(clippy::print_stdout)]

mod output;

use std::sync::Arc;

use anyhow::Context;
use application::{GeocoderPort, LookupService, StopLocatorPort};
use clap::{Parser, Subcommand};
use domain::Coordinates;
use infrastructure::{AppConfig, GeocodingAdapter, LogFormat, TransitAdapter, init_logging};

use crate::output::{GeocodeOutput, LookupOutput, StopOutput};

/// stopfinder CLI
#[derive(Debug, Parser)]
#[command(name = "stopfinder-cli")]
#[command(author, version, about = "Find the nearest MBTA stop to a place", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Find the nearest stop to a place and report its accessibility
    ///
    /// Example: stopfinder-cli lookup "Boston Common"
    Lookup {
        /// Place name or address
        place: String,
    },

    /// Resolve a place to coordinates only
    Geocode {
        /// Place name or address
        place: String,
    },

    /// Find the nearest stop to a coordinate pair
    ///
    /// Example: stopfinder-cli nearest-stop 42.3551 -71.0656
    NearestStop {
        /// Latitude in decimal degrees
        #[arg(allow_negative_numbers = true)]
        latitude: String,

        /// Longitude in decimal degrees
        #[arg(allow_negative_numbers = true)]
        longitude: String,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(LogFormat::Text, log_filter_from_verbosity(cli.verbose))?;

    let config = AppConfig::load().context("Failed to load configuration")?;

    match cli.command {
        Commands::Lookup { place } => {
            let geocoder = GeocodingAdapter::from_config(
                &config.geocoding.to_geocoding_config(&config.credentials),
            )?;
            let stop_locator = TransitAdapter::from_config(
                &config.transit.to_transit_config(&config.credentials),
            )?;
            let service = LookupService::new(Arc::new(geocoder), Arc::new(stop_locator));

            let place = place.trim();
            let stop = service.find_stop_near(place).await?;
            let result = LookupOutput::new(place, &stop);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", result.to_text());
            }
        },

        Commands::Geocode { place } => {
            let geocoder = GeocodingAdapter::from_config(
                &config.geocoding.to_geocoding_config(&config.credentials),
            )?;

            let place = place.trim();
            let coordinates = geocoder.resolve_place(place).await?;
            let result = GeocodeOutput::new(place, &coordinates);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", result.to_text());
            }
        },

        Commands::NearestStop {
            latitude,
            longitude,
        } => {
            let coordinates = Coordinates::new(latitude, longitude)?;
            let stop_locator = TransitAdapter::from_config(
                &config.transit.to_transit_config(&config.credentials),
            )?;

            let stop = stop_locator.nearest_stop(&coordinates).await?;
            let result = StopOutput::from(&stop);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", result.to_text());
            }
        },
    }

    Ok(())
}
