use airwise_catalog::{
    sample_snapshots, seed_repository, AdminOverview, InMemoryRepository, LocationCatalog,
};
use airwise_core::{AqiCategory, CoreError};
use chrono::{TimeZone, Utc};

use super::*;

fn sample_catalog() -> LocationCatalog {
    let at = Utc.with_ymd_and_hms(2024, 4, 2, 15, 45, 0).unwrap();
    let mut repo = InMemoryRepository::new();
    seed_repository(&mut repo, sample_snapshots(at).unwrap()).unwrap();
    LocationCatalog::from_repository(&repo)
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["airwise-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_show_with_location() {
    let cli = Cli::try_parse_from(["airwise-cli", "show", "Portland, OR"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Show { location: Some(ref l), json: false }) if l == "Portland, OR"
    ));
}

#[test]
fn parses_show_without_location_as_default() {
    let cli = Cli::try_parse_from(["airwise-cli", "show", "--json"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Show {
            location: None,
            json: true
        })
    ));
}

#[test]
fn parses_negative_aqi() {
    let cli = Cli::try_parse_from(["airwise-cli", "classify", "-1"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Classify { aqi: -1 })));
}

#[test]
fn rejects_non_numeric_aqi() {
    assert!(Cli::try_parse_from(["airwise-cli", "classify", "bad"]).is_err());
}

#[test]
fn parses_normalize() {
    let cli = Cli::try_parse_from(["airwise-cli", "normalize", "CO", "7.5"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Normalize { ref pollutant, value }) if pollutant == "CO" && (value - 7.5).abs() < f64::EPSILON
    ));
}

#[test]
fn parses_admin_and_locations() {
    let admin = Cli::try_parse_from(["airwise-cli", "admin"]).unwrap();
    assert!(matches!(admin.command, Some(Commands::Admin { json: false })));
    let locations = Cli::try_parse_from(["airwise-cli", "locations"]).unwrap();
    assert!(matches!(locations.command, Some(Commands::Locations)));
}

#[test]
fn classify_command_rejects_negative() {
    let err = query::run_classify(-5).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CoreError>(),
        Some(CoreError::InvalidInput(_))
    ));
}

#[test]
fn show_unknown_location_is_not_found() {
    let catalog = sample_catalog();
    let err = query::run_show(&catalog, "Nowhere, XX", false).unwrap_err();
    assert!(err.to_string().contains("not found"), "got: {err}");
}

#[test]
fn advisory_text_includes_token_and_advice() {
    let text = query::format_advisory(180, AqiCategory::Unhealthy);
    assert!(text.starts_with("AQI 180: Unhealthy [bad]"));
    assert!(text.contains("Avoid prolonged or heavy outdoor exertion."));
}

#[test]
fn snapshot_text_marks_main_pollutant() {
    let catalog = sample_catalog();
    let text = query::format_snapshot(catalog.lookup("Los Angeles, CA").unwrap());
    assert!(text.contains("Last updated: 2024-04-02 15:45 UTC"));
    assert!(text.contains("Unhealthy for Sensitive Groups [unhealthy]"));
    assert!(text.contains("Gauge: 25.0%"));
    let o3_line = text
        .lines()
        .find(|l| l.starts_with("O3"))
        .expect("O3 row present");
    assert!(o3_line.ends_with("Ozone (main)"), "got: {o3_line}");
    let pm_line = text
        .lines()
        .find(|l| l.starts_with("PM2.5"))
        .expect("PM2.5 row present");
    assert!(!pm_line.contains("(main)"));
}

#[test]
fn overview_text_lists_alerts_worst_first() {
    let catalog = sample_catalog();
    let overview = AdminOverview::build(&catalog, 100, 5);
    let text = query::format_overview(&overview, 100);
    assert!(text.contains("Monitoring locations: 10"));
    assert!(text.contains("High pollution alerts (AQI > 100): 2"));
    let portland = text.find("! Portland").unwrap();
    let la = text.find("! Los Angeles").unwrap();
    assert!(portland < la);
}

fn invalid_env() -> Result<AppConfig, ConfigError> {
    Err(ConfigError::InvalidEnvVar {
        var: "AIRWISE_ENV".to_string(),
        reason: "unknown environment 'staging'".to_string(),
    })
}

#[test]
fn config_free_commands_run_with_invalid_config() {
    assert!(run(Commands::Classify { aqi: 42 }, invalid_env()).is_ok());
    let normalize = Commands::Normalize {
        pollutant: "CO".to_string(),
        value: 7.5,
    };
    assert!(run(normalize, invalid_env()).is_ok());
}

#[test]
fn catalog_commands_surface_invalid_config() {
    let err = run(Commands::Locations, invalid_env()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::InvalidEnvVar { ref var, .. }) if var == "AIRWISE_ENV"
    ));
}
