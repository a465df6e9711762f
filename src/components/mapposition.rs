//! World-space position component.
//!
//! The [`MapPosition`] component stores the pivot of an entity in world
//! (map) coordinates. The sprite camera maps these to the screen; for
//! camera-independent UI elements see
//! [`ScreenPosition`](super::screenposition::ScreenPosition).

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// World-space position (pivot) for an entity.
#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    /// 2D coordinates in world pixels, y grows downwards.
    pub pos: Vector2,
}

impl Default for MapPosition {
    fn default() -> Self {
        Self {
            pos: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}

impl MapPosition {
    /// Create a MapPosition from x and y.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }

    /// Create a MapPosition from an existing Vector2.
    pub fn from_vec(pos: Vector2) -> Self {
        Self { pos }
    }

    /// Set the entire position.
    pub fn set_pos(&mut self, pos: Vector2) {
        self.pos = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_new_creates_correct_position() {
        let pos = MapPosition::new(10.0, 20.0);
        assert!(approx_eq(pos.pos.x, 10.0));
        assert!(approx_eq(pos.pos.y, 20.0));
    }

    #[test]
    fn test_set_pos_replaces() {
        let mut pos = MapPosition::default();
        pos.set_pos(Vector2 { x: 300.0, y: 300.0 });
        assert!(approx_eq(pos.pos.x, 300.0));
        assert!(approx_eq(pos.pos.y, 300.0));
    }
}
