//! The collection of finalized line features.

use bevy::math::DVec2;
use bevy::prelude::*;

use super::feature::{FeatureId, LineFeature};

/// Message fired when a feature is committed to the registry.
#[derive(Message)]
pub struct FeatureAdded {
    pub id: FeatureId,
}

/// Message fired when a feature is removed from the registry.
#[derive(Message)]
pub struct FeatureRemoved {
    pub id: FeatureId,
}

/// A registry-side change, buffered until the publishing system turns it
/// into a message. Buffering keeps the registry free of ECS writer handles
/// so the transition function stays testable in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryChange {
    Added(FeatureId),
    Removed(FeatureId),
}

/// Ordered store of finalized line features.
///
/// Invariant: every stored line has at least two coordinates. Mutation paths
/// that would leave fewer must remove the feature instead (the state machine
/// enforces this through `deleteLastVertex`).
#[derive(Resource, Default)]
pub struct FeatureRegistry {
    features: Vec<LineFeature>,
    next_id: u64,
    changes: Vec<RegistryChange>,
}

impl FeatureRegistry {
    /// Commit a finalized line. Lines with fewer than two points are refused.
    pub fn add(&mut self, points: Vec<DVec2>) -> Option<FeatureId> {
        if points.len() < 2 {
            return None;
        }
        let id = FeatureId(self.next_id);
        self.next_id += 1;
        self.features.push(LineFeature { id, points });
        self.changes.push(RegistryChange::Added(id));
        Some(id)
    }

    /// Remove a feature. Returns true when it was present.
    pub fn remove(&mut self, id: FeatureId) -> bool {
        let before = self.features.len();
        self.features.retain(|f| f.id != id);
        let removed = self.features.len() != before;
        if removed {
            self.changes.push(RegistryChange::Removed(id));
        }
        removed
    }

    pub fn count(&self) -> usize {
        self.features.len()
    }

    pub fn get(&self, id: FeatureId) -> Option<&LineFeature> {
        self.features.iter().find(|f| f.id == id)
    }

    pub fn get_mut(&mut self, id: FeatureId) -> Option<&mut LineFeature> {
        self.features.iter_mut().find(|f| f.id == id)
    }

    /// Features in insertion order (the hover probe scans in this order).
    pub fn iter(&self) -> impl Iterator<Item = &LineFeature> {
        self.features.iter()
    }

    /// Take the buffered changes for publication.
    pub fn drain_changes(&mut self) -> Vec<RegistryChange> {
        std::mem::take(&mut self.changes)
    }
}

/// Publish buffered registry changes as messages.
pub fn publish_registry_changes(
    mut registry: ResMut<FeatureRegistry>,
    mut added: MessageWriter<FeatureAdded>,
    mut removed: MessageWriter<FeatureRemoved>,
) {
    for change in registry.drain_changes() {
        match change {
            RegistryChange::Added(id) => {
                debug!("feature {:?} added, {} total", id, registry.count());
                added.write(FeatureAdded { id });
            }
            RegistryChange::Removed(id) => {
                debug!("feature {:?} removed, {} total", id, registry.count());
                removed.write(FeatureRemoved { id });
            }
        }
    }
}
