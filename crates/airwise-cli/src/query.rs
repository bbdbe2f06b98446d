//! Read-only command handlers.
//!
//! Each `run_*` prints to stdout; the `format_*` helpers build the text so it
//! can be checked without capturing output.

use std::fmt::Write as _;

use airwise_catalog::{AdminOverview, LocationCatalog};
use airwise_core::{
    aqi_gauge_percent, classify, color_key, health_implications, normalize, recommendations,
    AirQualitySnapshot, AppConfig, AqiCategory,
};

/// Print the snapshot for `location`.
///
/// # Errors
///
/// Returns an error if the location is not in the catalog.
pub(crate) fn run_show(
    catalog: &LocationCatalog,
    location: &str,
    json: bool,
) -> anyhow::Result<()> {
    let snapshot = catalog.lookup(location)?;
    if json {
        println!("{}", serde_json::to_string_pretty(snapshot)?);
    } else {
        print!("{}", format_snapshot(snapshot));
    }
    Ok(())
}

pub(crate) fn run_locations(catalog: &LocationCatalog) {
    if catalog.is_empty() {
        println!("no locations configured");
        return;
    }
    for name in catalog.names() {
        println!("{name}");
    }
}

/// Print the category and advice for a raw AQI value.
///
/// # Errors
///
/// Returns an error if `aqi` is negative.
pub(crate) fn run_classify(aqi: i64) -> anyhow::Result<()> {
    let category = classify(aqi)?;
    print!("{}", format_advisory(aqi, category));
    Ok(())
}

pub(crate) fn run_normalize(pollutant: &str, value: f64) {
    println!("{pollutant} {value}: {:.1}%", normalize(pollutant, value));
}

/// Print the admin overview.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn run_admin(
    catalog: &LocationCatalog,
    config: &AppConfig,
    json: bool,
) -> anyhow::Result<()> {
    let overview = AdminOverview::build(catalog, config.alert_threshold, config.alert_limit);
    if json {
        println!("{}", serde_json::to_string_pretty(&overview)?);
    } else {
        print!("{}", format_overview(&overview, config.alert_threshold));
    }
    Ok(())
}

pub(crate) fn format_advisory(aqi: i64, category: AqiCategory) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "AQI {aqi}: {} [{}]",
        category.label(),
        color_key(category)
    );
    let _ = writeln!(out, "Health: {}", health_implications(category));
    let _ = writeln!(out, "Advice: {}", recommendations(category));
    out
}

pub(crate) fn format_snapshot(snapshot: &AirQualitySnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", snapshot.location());
    let _ = writeln!(
        out,
        "Last updated: {}",
        snapshot.timestamp().format("%Y-%m-%d %H:%M UTC")
    );
    out.push_str(&format_advisory(
        i64::from(snapshot.aqi()),
        snapshot.category(),
    ));
    let _ = writeln!(out, "Gauge: {:.1}%", aqi_gauge_percent(snapshot.aqi()));
    let _ = writeln!(out);
    let _ = writeln!(out, "Main pollutant: {}", snapshot.main_pollutant());
    let _ = writeln!(
        out,
        "{:<8}{:>10}  {:<8}{:<11}{:<8}NAME",
        "CODE", "VALUE", "UNIT", "LEVEL", "GAUGE"
    );
    for reading in snapshot.pollutants() {
        let marker = if snapshot.is_main_pollutant(reading) {
            " (main)"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "{:<8}{:>10}  {:<8}{:<11}{:>6.1}% {}{marker}",
            reading.name().code(),
            reading.value(),
            reading.unit(),
            reading.level().to_string(),
            reading.gauge_percent(),
            reading.name().full_name(),
        );
    }
    out
}

pub(crate) fn format_overview(overview: &AdminOverview, alert_threshold: u32) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Monitoring locations: {}", overview.location_count);
    let _ = writeln!(
        out,
        "High pollution alerts (AQI > {alert_threshold}): {}",
        overview.alerts.len()
    );
    for alert in &overview.alerts {
        let _ = writeln!(out, "  ! {} ({}, {})", alert.city, alert.aqi, alert.category.label());
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{:<16}{:>5}  {:<22}COLOR", "CITY", "AQI", "CATEGORY");
    for entry in &overview.ranking {
        let _ = writeln!(
            out,
            "{:<16}{:>5}  {:<22}{}",
            entry.city, entry.aqi, entry.category, entry.chart_color
        );
    }
    out
}
