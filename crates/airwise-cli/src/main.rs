mod query;

use airwise_catalog::LocationCatalog;
use airwise_core::{AppConfig, ConfigError};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "airwise-cli")]
#[command(about = "AirWise air-quality dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show current air quality for a location
    Show {
        /// Location name, e.g. "Portland, OR" (defaults to `AIRWISE_DEFAULT_LOCATION`)
        location: Option<String>,

        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// List monitored locations in display order
    Locations,
    /// Classify an AQI value and print its advisory
    Classify {
        #[arg(allow_negative_numbers = true)]
        aqi: i64,
    },
    /// Gauge percentage for a pollutant reading
    Normalize {
        /// Pollutant code: PM2.5, PM10, O3, NO2, SO2 or CO
        pollutant: String,

        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Admin overview: location count, ranking and high-pollution alerts
    Admin {
        /// Print the overview as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = airwise_core::load_app_config_from_env();
    init_tracing(config.as_ref().ok())?;

    let Some(command) = cli.command else {
        println!("airwise-cli: try `show`, `locations`, `classify`, `normalize` or `admin` (see --help)");
        return Ok(());
    };

    run(command, config)
}

/// Install the stderr subscriber. `RUST_LOG` wins over the configured level;
/// without a valid config the level defaults to `info`.
fn init_tracing(config: Option<&AppConfig>) -> anyhow::Result<()> {
    let log_level = config.map_or("info", |c| c.log_level.as_str());
    let ansi = config.map_or(true, |c| c.env.is_development());
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .init();
    Ok(())
}

/// Dispatch a subcommand. Only the catalog-backed commands need a valid config.
fn run(command: Commands, config: Result<AppConfig, ConfigError>) -> anyhow::Result<()> {
    tracing::debug!(?command, "dispatching command");
    match command {
        Commands::Classify { aqi } => {
            warn_if_invalid(&config);
            query::run_classify(aqi)
        }
        Commands::Normalize { pollutant, value } => {
            warn_if_invalid(&config);
            query::run_normalize(&pollutant, value);
            Ok(())
        }
        Commands::Show { location, json } => {
            let config = config?;
            let catalog = load_catalog(&config)?;
            let location = location.unwrap_or_else(|| config.default_location.clone());
            query::run_show(&catalog, &location, json)
        }
        Commands::Locations => {
            let catalog = load_catalog(&config?)?;
            query::run_locations(&catalog);
            Ok(())
        }
        Commands::Admin { json } => {
            let config = config?;
            let catalog = load_catalog(&config)?;
            query::run_admin(&catalog, &config, json)
        }
    }
}

fn warn_if_invalid(config: &Result<AppConfig, ConfigError>) {
    if let Err(error) = config {
        tracing::warn!(%error, "ignoring invalid configuration for a config-free command");
    }
}

fn load_catalog(config: &AppConfig) -> anyhow::Result<LocationCatalog> {
    let repo = airwise_catalog::load_repository(config, chrono::Utc::now())?;
    Ok(LocationCatalog::from_repository(&repo))
}

#[cfg(test)]
mod tests;
