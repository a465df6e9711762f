//! Screen-space position component.
//!
//! The [`ScreenPosition`] component stores an entity's position relative to
//! the GUI camera. The GUI camera keeps its origin pinned at the bottom-left
//! corner of the viewport, so `y` grows upwards from the bottom edge.
//!
//! For world-space entities, see
//! [`MapPosition`](super::mapposition::MapPosition).

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Screen-space position for HUD elements.
///
/// Used for UI elements that should remain fixed on screen regardless of
/// camera movement. The render system draws these after the world pass.
#[derive(Component, Clone, Copy, Debug)]
pub struct ScreenPosition {
    /// Distance in pixels from the bottom-left corner of the viewport.
    pub pos: Vector2,
}

impl Default for ScreenPosition {
    fn default() -> Self {
        Self {
            pos: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}

impl ScreenPosition {
    /// Create a ScreenPosition from x and y.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}
