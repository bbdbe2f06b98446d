//! Seed data for the location repository.
//!
//! The built-in sample covers ten US cities. A YAML file named by
//! `AIRWISE_CATALOG_PATH` replaces it wholesale.

use airwise_core::{
    load_locations, AirQualitySnapshot, AppConfig, CoreError, LocationsFile, Pollutant,
    PollutantLevel, PollutantReading,
};
use chrono::{DateTime, Utc};

use crate::repository::{InMemoryRepository, SnapshotRepository};
use crate::CatalogError;

type SeedReading = (Pollutant, f64, &'static str, PollutantLevel);

struct SeedLocation {
    name: &'static str,
    aqi: u32,
    main_pollutant: &'static str,
    pollutants: &'static [SeedReading],
}

const MICROGRAMS: &str = "μg/m³";

const CLEAN_AIR: &[SeedReading] = &[
    (Pollutant::Pm25, 11.2, MICROGRAMS, PollutantLevel::Low),
    (Pollutant::Pm10, 20.1, MICROGRAMS, PollutantLevel::Low),
    (Pollutant::O3, 38.0, "ppb", PollutantLevel::Low),
    (Pollutant::No2, 12.0, "ppb", PollutantLevel::Low),
    (Pollutant::So2, 2.0, "ppb", PollutantLevel::Low),
    (Pollutant::Co, 0.2, "ppm", PollutantLevel::Low),
];

const NEW_YORK: &[SeedReading] = &[
    (Pollutant::Pm25, 28.4, MICROGRAMS, PollutantLevel::Moderate),
    (Pollutant::Pm10, 45.7, MICROGRAMS, PollutantLevel::Moderate),
    (Pollutant::O3, 62.0, "ppb", PollutantLevel::Moderate),
    (Pollutant::No2, 38.0, "ppb", PollutantLevel::Moderate),
    (Pollutant::So2, 5.0, "ppb", PollutantLevel::Low),
    (Pollutant::Co, 0.5, "ppm", PollutantLevel::Low),
];

const LOS_ANGELES: &[SeedReading] = &[
    (Pollutant::Pm25, 35.9, MICROGRAMS, PollutantLevel::Moderate),
    (Pollutant::Pm10, 68.3, MICROGRAMS, PollutantLevel::Moderate),
    (Pollutant::O3, 98.0, "ppb", PollutantLevel::High),
    (Pollutant::No2, 42.0, "ppb", PollutantLevel::Moderate),
    (Pollutant::So2, 7.0, "ppb", PollutantLevel::Low),
    (Pollutant::Co, 1.2, "ppm", PollutantLevel::Moderate),
];

const PORTLAND: &[SeedReading] = &[
    (Pollutant::Pm25, 88.2, MICROGRAMS, PollutantLevel::High),
    (Pollutant::Pm10, 120.5, MICROGRAMS, PollutantLevel::High),
    (Pollutant::O3, 71.0, "ppb", PollutantLevel::Moderate),
    (Pollutant::No2, 38.0, "ppb", PollutantLevel::Moderate),
    (Pollutant::So2, 12.0, "ppb", PollutantLevel::Moderate),
    (Pollutant::Co, 1.8, "ppm", PollutantLevel::Moderate),
];

const SAMPLE_LOCATIONS: &[SeedLocation] = &[
    SeedLocation {
        name: "San Francisco, CA",
        aqi: 48,
        main_pollutant: "PM2.5",
        pollutants: CLEAN_AIR,
    },
    SeedLocation {
        name: "New York, NY",
        aqi: 89,
        main_pollutant: "PM2.5",
        pollutants: NEW_YORK,
    },
    SeedLocation {
        name: "Los Angeles, CA",
        aqi: 125,
        main_pollutant: "O3",
        pollutants: LOS_ANGELES,
    },
    SeedLocation {
        name: "Chicago, IL",
        aqi: 73,
        main_pollutant: "PM10",
        pollutants: CLEAN_AIR,
    },
    SeedLocation {
        name: "Miami, FL",
        aqi: 42,
        main_pollutant: "PM2.5",
        pollutants: CLEAN_AIR,
    },
    SeedLocation {
        name: "Seattle, WA",
        aqi: 38,
        main_pollutant: "PM2.5",
        pollutants: CLEAN_AIR,
    },
    SeedLocation {
        name: "Denver, CO",
        aqi: 58,
        main_pollutant: "PM2.5",
        pollutants: CLEAN_AIR,
    },
    SeedLocation {
        name: "Austin, TX",
        aqi: 45,
        main_pollutant: "PM2.5",
        pollutants: CLEAN_AIR,
    },
    SeedLocation {
        name: "Boston, MA",
        aqi: 51,
        main_pollutant: "O3",
        pollutants: CLEAN_AIR,
    },
    SeedLocation {
        name: "Portland, OR",
        aqi: 180,
        main_pollutant: "PM2.5",
        pollutants: PORTLAND,
    },
];

/// Build snapshots for the built-in sample locations, all stamped `observed_at`.
///
/// # Errors
///
/// Returns [`CoreError::InvalidInput`] if a sample reading is malformed.
pub fn sample_snapshots(
    observed_at: DateTime<Utc>,
) -> Result<Vec<AirQualitySnapshot>, CoreError> {
    SAMPLE_LOCATIONS
        .iter()
        .map(|seed| {
            let pollutants = seed
                .pollutants
                .iter()
                .map(|&(name, value, unit, level)| PollutantReading::new(name, value, unit, level))
                .collect::<Result<Vec<_>, _>>()?;
            AirQualitySnapshot::new(
                seed.name,
                seed.aqi,
                observed_at,
                seed.main_pollutant,
                pollutants,
            )
        })
        .collect()
}

/// Build snapshots from a parsed locations file, preserving file order.
///
/// # Errors
///
/// Returns [`CatalogError::Core`] if an entry cannot form a valid snapshot.
pub fn snapshots_from_file(
    file: &LocationsFile,
    observed_at: DateTime<Utc>,
) -> Result<Vec<AirQualitySnapshot>, CatalogError> {
    let mut snapshots = Vec::with_capacity(file.locations.len());
    for location in &file.locations {
        let pollutants = location
            .pollutants
            .iter()
            .map(|p| PollutantReading::new(p.name, p.value, p.unit.clone(), p.level))
            .collect::<Result<Vec<_>, _>>()?;
        snapshots.push(AirQualitySnapshot::new(
            location.name.clone(),
            location.aqi,
            observed_at,
            location.main_pollutant.clone(),
            pollutants,
        )?);
    }
    Ok(snapshots)
}

/// Insert `snapshots` into `repo` in order.
///
/// Returns the number inserted. Stops at the first failure; earlier inserts
/// are kept.
///
/// # Errors
///
/// Returns [`CatalogError::DuplicateLocation`] if a name already exists.
pub fn seed_repository<R>(
    repo: &mut R,
    snapshots: Vec<AirQualitySnapshot>,
) -> Result<usize, CatalogError>
where
    R: SnapshotRepository + ?Sized,
{
    let mut count = 0usize;
    for snapshot in snapshots {
        repo.insert(snapshot)?;
        count += 1;
    }
    Ok(count)
}

/// Build the repository described by `config`: the YAML seed when
/// `catalog_path` is set, otherwise the built-in sample.
///
/// # Errors
///
/// Returns [`CatalogError`] if the seed file cannot be loaded or a snapshot
/// cannot be inserted.
pub fn load_repository(
    config: &AppConfig,
    observed_at: DateTime<Utc>,
) -> Result<InMemoryRepository, CatalogError> {
    let snapshots = match &config.catalog_path {
        Some(path) => {
            let file = load_locations(path)?;
            snapshots_from_file(&file, observed_at)?
        }
        None => sample_snapshots(observed_at)?,
    };

    let mut repo = InMemoryRepository::new();
    let count = seed_repository(&mut repo, snapshots)?;
    let source = config
        .catalog_path
        .as_deref()
        .map_or_else(|| "built-in".to_string(), |p| p.display().to_string());
    tracing::info!(count, %source, "seeded location repository");
    Ok(repo)
}
