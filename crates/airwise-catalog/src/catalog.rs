use airwise_core::{AirQualitySnapshot, CoreError};

use crate::repository::{InMemoryRepository, SnapshotRepository};

/// Read-only view of the locations known at construction time.
///
/// Built from a copy of a repository's contents; later changes to that
/// repository are not observed.
#[derive(Debug, Clone, Default)]
pub struct LocationCatalog {
    entries: InMemoryRepository,
}

impl LocationCatalog {
    pub fn from_repository<R>(repo: &R) -> Self
    where
        R: SnapshotRepository + ?Sized,
    {
        let mut entries = InMemoryRepository::new();
        for snapshot in repo.list() {
            if entries.insert(snapshot.clone()).is_err() {
                tracing::warn!(
                    location = snapshot.location(),
                    "repository listed a location twice; keeping the first"
                );
            }
        }
        Self { entries }
    }

    /// The snapshot for `location`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownLocation`] if the catalog has no such entry.
    pub fn lookup(&self, location: &str) -> Result<&AirQualitySnapshot, CoreError> {
        self.entries.get(location).ok_or_else(|| {
            tracing::warn!(location, "lookup for unknown location");
            CoreError::UnknownLocation(location.to_string())
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.list().iter().map(AirQualitySnapshot::location)
    }

    #[must_use]
    pub fn snapshots(&self) -> &[AirQualitySnapshot] {
        self.entries.list()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
