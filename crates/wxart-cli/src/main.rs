//! # wxart CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use wxart_cli::generate::{run_describe, run_generate, DescribeArgs, GenerateArgs};
use wxart_cli::schema::{run_guide, run_schema};
use wxart_cli::validate::{run_validate, ValidateArgs};
use wxart_cli::weather::{run_geocode, run_weather, GeocodeArgs, WeatherArgs};

/// wxart — weather-driven generative art toolchain.
///
/// Validates scene documents, prints the scene schema and format guide,
/// resolves cities, fetches current weather, and drives the scene agent.
#[derive(Parser, Debug)]
#[command(name = "wxart", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a scene document and print its canonical form.
    Validate(ValidateArgs),

    /// Print the scene JSON Schema.
    Schema,

    /// Print the scene format guide.
    Guide,

    /// Resolve a city name to coordinates.
    Geocode(GeocodeArgs),

    /// Fetch current weather conditions for coordinates.
    Weather(WeatherArgs),

    /// Generate a weather-art scene for a location.
    Generate(GenerateArgs),

    /// Describe the current weather for a location in plain language.
    Describe(DescribeArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args),
        Commands::Schema => run_schema(),
        Commands::Guide => run_guide(),
        Commands::Geocode(args) => run_geocode(&args),
        Commands::Weather(args) => run_weather(&args),
        Commands::Generate(args) => run_generate(&args),
        Commands::Describe(args) => run_describe(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}
