//! `wxart geocode` and `wxart weather` — direct Open-Meteo lookups.

use clap::Args;

use wxart_meteo::{MeteoClient, MeteoConfig};

/// Arguments for `wxart geocode`.
#[derive(Args, Debug)]
pub struct GeocodeArgs {
    /// City name to resolve, e.g. "Berlin".
    pub city: String,
}

/// Arguments for `wxart weather`.
#[derive(Args, Debug)]
pub struct WeatherArgs {
    /// Latitude of the location.
    pub latitude: f64,
    /// Longitude of the location.
    pub longitude: f64,
}

/// Resolve a city name and print the match as JSON.
pub fn run_geocode(args: &GeocodeArgs) -> anyhow::Result<u8> {
    let client = MeteoClient::new(MeteoConfig::from_env()?)?;
    let runtime = tokio::runtime::Runtime::new()?;
    let city = runtime.block_on(client.geocoding().geocode(&args.city))?;
    println!("{}", serde_json::to_string_pretty(&city)?);
    Ok(0)
}

/// Fetch current conditions and print them as JSON.
pub fn run_weather(args: &WeatherArgs) -> anyhow::Result<u8> {
    let client = MeteoClient::new(MeteoConfig::from_env()?)?;
    let runtime = tokio::runtime::Runtime::new()?;
    let weather = runtime.block_on(client.weather().current(args.latitude, args.longitude))?;
    println!("{}", serde_json::to_string_pretty(&weather)?);
    Ok(0)
}
