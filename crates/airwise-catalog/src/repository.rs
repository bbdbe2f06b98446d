//! Storage seam for location snapshots.

use std::collections::HashMap;

use airwise_core::{AirQualitySnapshot, CoreError};

use crate::CatalogError;

/// Ordered, name-unique store of snapshots.
///
/// `list` returns snapshots in insertion order, which is display order.
pub trait SnapshotRepository {
    fn get(&self, location: &str) -> Option<&AirQualitySnapshot>;

    fn list(&self) -> &[AirQualitySnapshot];

    /// Add a snapshot for a location not yet present.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateLocation`] if the name is taken.
    fn insert(&mut self, snapshot: AirQualitySnapshot) -> Result<(), CatalogError>;

    /// Swap in a new snapshot for an existing location, keeping its position.
    /// Returns the snapshot that was replaced.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownLocation`] (wrapped) if the location is absent.
    fn replace(&mut self, snapshot: AirQualitySnapshot)
        -> Result<AirQualitySnapshot, CatalogError>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    snapshots: Vec<AirQualitySnapshot>,
    index: HashMap<String, usize>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl SnapshotRepository for InMemoryRepository {
    fn get(&self, location: &str) -> Option<&AirQualitySnapshot> {
        self.index.get(location).map(|&i| &self.snapshots[i])
    }

    fn list(&self) -> &[AirQualitySnapshot] {
        &self.snapshots
    }

    fn insert(&mut self, snapshot: AirQualitySnapshot) -> Result<(), CatalogError> {
        let name = snapshot.location().to_string();
        if self.index.contains_key(&name) {
            return Err(CatalogError::DuplicateLocation(name));
        }
        tracing::debug!(location = %name, aqi = snapshot.aqi(), "inserted snapshot");
        self.index.insert(name, self.snapshots.len());
        self.snapshots.push(snapshot);
        Ok(())
    }

    fn replace(
        &mut self,
        snapshot: AirQualitySnapshot,
    ) -> Result<AirQualitySnapshot, CatalogError> {
        let Some(&i) = self.index.get(snapshot.location()) else {
            return Err(CoreError::UnknownLocation(snapshot.location().to_string()).into());
        };
        tracing::debug!(location = snapshot.location(), aqi = snapshot.aqi(), "replaced snapshot");
        Ok(std::mem::replace(&mut self.snapshots[i], snapshot))
    }
}
