//! Finalized feature storage.
//!
//! - [`feature`] - Line feature types and identity
//! - [`registry`] - The ordered feature collection and its change messages

mod feature;
mod registry;

pub use feature::{FeatureId, LineFeature};
pub use registry::{
    publish_registry_changes, FeatureAdded, FeatureRegistry, FeatureRemoved, RegistryChange,
};

use bevy::prelude::*;

pub struct MapPlugin;

impl Plugin for MapPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FeatureRegistry>()
            .add_message::<FeatureAdded>()
            .add_message::<FeatureRemoved>()
            .add_systems(Update, publish_registry_changes);
    }
}
