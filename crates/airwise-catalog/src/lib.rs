pub mod admin;
pub mod catalog;
pub mod repository;
pub mod seed;

pub use admin::{AdminOverview, RankedLocation};
pub use catalog::LocationCatalog;
pub use repository::{InMemoryRepository, SnapshotRepository};
pub use seed::{load_repository, sample_snapshots, seed_repository, snapshots_from_file};

use airwise_core::{AirQualitySnapshot, ConfigError, CoreError};
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("location already exists: {0}")]
    DuplicateLocation(String),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Replace the snapshot for `location` with a copy observed at `observed_at`.
///
/// Returns the new snapshot.
///
/// # Errors
///
/// Returns [`CoreError::UnknownLocation`] (wrapped) if `location` is not in
/// the repository.
pub fn refresh<R>(
    repo: &mut R,
    location: &str,
    observed_at: DateTime<Utc>,
) -> Result<AirQualitySnapshot, CatalogError>
where
    R: SnapshotRepository + ?Sized,
{
    let fresh = repo
        .get(location)
        .ok_or_else(|| CoreError::UnknownLocation(location.to_string()))?
        .restamped(observed_at);
    repo.replace(fresh.clone())?;
    tracing::debug!(location, %observed_at, "refreshed snapshot");
    Ok(fresh)
}
