//! Line feature types.

use bevy::math::DVec2;

/// Opaque identity for a finalized line feature.
///
/// Used for equality comparisons only (selection, style lookup); the value
/// carries no meaning beyond uniqueness within a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureId(pub(crate) u64);

impl std::fmt::Display for FeatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A finalized open polyline on the mercator plane.
///
/// Owned exclusively by the [`FeatureRegistry`](super::FeatureRegistry) once
/// finalized; always holds at least two coordinates.
#[derive(Debug, Clone)]
pub struct LineFeature {
    pub id: FeatureId,
    pub points: Vec<DVec2>,
}

impl LineFeature {
    /// The coordinate an append session starts from.
    pub fn last_point(&self) -> Option<DVec2> {
        self.points.last().copied()
    }
}
