//! Score counter resource.

use bevy_ecs::prelude::Resource;

/// Points collected since the last reset.
///
/// Only [`Score::add`] changes the value during play; [`Score::reset`] is
/// reserved for the reset operation.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    value: u32,
}

impl Score {
    pub fn get(&self) -> u32 {
        self.value
    }

    pub fn add(&mut self, points: u32) {
        self.value = self.value.saturating_add(points);
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }

    /// Text shown on the HUD.
    pub fn label(&self) -> String {
        format!("Score: {}", self.value)
    }
}
