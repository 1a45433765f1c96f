//! The in-progress coordinate sequence owned by an active draw or append
//! session.

use bevy::math::DVec2;
use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct Sketch {
    pub points: Vec<DVec2>,
    /// True when the first sketch point was placed programmatically from the
    /// append target's last coordinate rather than by a user click.
    pub seeded: bool,
}

impl Sketch {
    pub fn clear(&mut self) {
        self.points.clear();
        self.seeded = false;
    }

    /// Start an append sketch at the target line's endpoint. This replaces
    /// the synthetic press/release the original injected into its draw
    /// interaction: the seed is just data here, so it cannot miss.
    pub fn seed(&mut self, start: DVec2) {
        self.points.clear();
        self.points.push(start);
        self.seeded = true;
    }

    /// Points added by the user during an append session (the seed point
    /// duplicates the target's endpoint and is not a net addition).
    pub fn appended_points(&self) -> &[DVec2] {
        if self.seeded && !self.points.is_empty() {
            &self.points[1..]
        } else {
            &self.points
        }
    }
}
