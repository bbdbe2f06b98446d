//! Admin overview: location count, worst-first ranking and pollution alerts.

use airwise_core::{AirQualitySnapshot, AqiCategory};
use serde::Serialize;

use crate::catalog::LocationCatalog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedLocation {
    pub location: String,
    /// Chart label: the location text before its first comma.
    pub city: String,
    pub aqi: u32,
    pub category: AqiCategory,
    pub chart_color: &'static str,
}

impl From<&AirQualitySnapshot> for RankedLocation {
    fn from(snapshot: &AirQualitySnapshot) -> Self {
        Self {
            location: snapshot.location().to_string(),
            city: snapshot.city().to_string(),
            aqi: snapshot.aqi(),
            category: snapshot.category(),
            chart_color: snapshot.category().chart_hex(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminOverview {
    pub location_count: usize,
    /// Every location, highest AQI first. Ties keep catalog order.
    pub ranking: Vec<RankedLocation>,
    /// Ranked locations with AQI above the alert threshold, at most `alert_limit`.
    pub alerts: Vec<RankedLocation>,
}

impl AdminOverview {
    #[must_use]
    pub fn build(catalog: &LocationCatalog, alert_threshold: u32, alert_limit: usize) -> Self {
        let mut ranking: Vec<RankedLocation> =
            catalog.snapshots().iter().map(RankedLocation::from).collect();
        ranking.sort_by(|a, b| b.aqi.cmp(&a.aqi));

        let alerts = ranking
            .iter()
            .filter(|r| r.aqi > alert_threshold)
            .take(alert_limit)
            .cloned()
            .collect();

        Self {
            location_count: catalog.len(),
            ranking,
            alerts,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::repository::{InMemoryRepository, SnapshotRepository};
    use crate::seed::sample_snapshots;

    fn catalog_of(entries: &[(&str, u32)]) -> LocationCatalog {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut repo = InMemoryRepository::new();
        for (name, aqi) in entries {
            repo.insert(AirQualitySnapshot::new(*name, *aqi, at, "PM2.5", vec![]).unwrap())
                .unwrap();
        }
        LocationCatalog::from_repository(&repo)
    }

    #[test]
    fn sample_overview_matches_dashboard() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut repo = InMemoryRepository::new();
        for snapshot in sample_snapshots(at).unwrap() {
            repo.insert(snapshot).unwrap();
        }
        let overview = AdminOverview::build(&LocationCatalog::from_repository(&repo), 100, 5);

        assert_eq!(overview.location_count, 10);
        assert_eq!(overview.ranking[0].city, "Portland");
        assert_eq!(overview.ranking[0].chart_color, "#EF4444");
        assert_eq!(overview.ranking[9].city, "Seattle");
        let alerts: Vec<&str> = overview.alerts.iter().map(|a| a.city.as_str()).collect();
        assert_eq!(alerts, vec!["Portland", "Los Angeles"]);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let catalog = catalog_of(&[("A, XX", 120), ("B, XX", 150), ("C, XX", 120)]);
        let overview = AdminOverview::build(&catalog, 100, 5);
        let order: Vec<&str> = overview.ranking.iter().map(|r| r.city.as_str()).collect();
        assert_eq!(order, vec!["B", "A", "C"]);
    }

    #[test]
    fn threshold_is_exclusive() {
        let catalog = catalog_of(&[("Edge, XX", 100), ("Over, XX", 101)]);
        let overview = AdminOverview::build(&catalog, 100, 5);
        assert_eq!(overview.alerts.len(), 1);
        assert_eq!(overview.alerts[0].aqi, 101);
    }

    #[test]
    fn alerts_truncate_to_limit_worst_first() {
        let catalog = catalog_of(&[
            ("A, XX", 110),
            ("B, XX", 350),
            ("C, XX", 220),
            ("D, XX", 160),
        ]);
        let overview = AdminOverview::build(&catalog, 100, 2);
        let aqis: Vec<u32> = overview.alerts.iter().map(|a| a.aqi).collect();
        assert_eq!(aqis, vec![350, 220]);
        assert_eq!(overview.ranking.len(), 4);
    }

    #[test]
    fn empty_catalog_has_no_alerts() {
        let overview = AdminOverview::build(&LocationCatalog::default(), 100, 5);
        assert_eq!(overview.location_count, 0);
        assert!(overview.ranking.is_empty());
        assert!(overview.alerts.is_empty());
    }

    #[test]
    fn serializes_category_slug() {
        let catalog = catalog_of(&[("Delhi, IN", 320)]);
        let overview = AdminOverview::build(&catalog, 100, 5);
        let value = serde_json::to_value(&overview).unwrap();
        assert_eq!(value["alerts"][0]["category"], "hazardous");
        assert_eq!(value["location_count"], 1);
    }
}
