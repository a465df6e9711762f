//! Kinematic body component.
//!
//! The [`RigidBody`] stores the per-step velocity of an entity that the
//! [`PlatformerPhysics`](crate::resources::physics::PlatformerPhysics)
//! collaborator integrates. Velocities are expressed in pixels per physics
//! step, one step per frame.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Kinematic body storing the velocity the physics step applies.
///
/// The horizontal component is written by the player controller, the
/// vertical one by gravity and jumps.
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    /// Current velocity in pixels per step. Positive `y` points down.
    pub velocity: Vector2,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody with zero velocity.
    pub fn new() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
        }
    }

    /// Stop all movement.
    pub fn stop(&mut self) {
        self.velocity = Vector2::zero();
    }
}
