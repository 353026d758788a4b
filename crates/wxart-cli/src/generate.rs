//! `wxart generate` — run the scene agent end to end.

use clap::Args;

use wxart_agent::{AgentConfig, SceneAgent};
use wxart_meteo::{MeteoClient, MeteoConfig};

/// Arguments for `wxart generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Location to generate a scene for, e.g. "Berlin".
    pub location: String,

    /// Optional latitude (skips geocoding when paired with --lon).
    #[arg(long)]
    pub lat: Option<f64>,

    /// Optional longitude (skips geocoding when paired with --lat).
    #[arg(long)]
    pub lon: Option<f64>,

    /// Optional artistic style hint, e.g. "watercolor".
    #[arg(long, default_value = "")]
    pub style: String,
}

/// Arguments for `wxart describe`.
#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Location to describe the weather for, e.g. "Berlin".
    pub location: String,
}

/// Generate a validated scene and print it as JSON.
pub fn run_generate(args: &GenerateArgs) -> anyhow::Result<u8> {
    let meteo = MeteoClient::new(MeteoConfig::from_env()?)?;
    let agent = SceneAgent::new(AgentConfig::from_env()?, meteo)?;

    let runtime = tokio::runtime::Runtime::new()?;
    let scene = runtime.block_on(agent.generate_scene(
        &args.location,
        args.lat,
        args.lon,
        &args.style,
    ))?;

    println!("{}", serde_json::to_string_pretty(&scene)?);
    Ok(0)
}

/// Print a natural-language weather description for a location.
pub fn run_describe(args: &DescribeArgs) -> anyhow::Result<u8> {
    let meteo = MeteoClient::new(MeteoConfig::from_env()?)?;
    let agent = SceneAgent::new(AgentConfig::from_env()?, meteo)?;

    let runtime = tokio::runtime::Runtime::new()?;
    let description = runtime.block_on(agent.describe_weather(&format!(
        "Describe the current weather in {}.",
        args.location
    )))?;

    println!("{description}");
    Ok(0)
}
