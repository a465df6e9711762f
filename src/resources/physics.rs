//! Platformer physics collaborator.
//!
//! [`PlatformerPhysics`] moves one dynamic body against static geometry:
//! gravity is added to the vertical velocity, then the body is moved one
//! axis at a time and pushed out of any solid box it ends up overlapping.
//! There is no broad phase; the caller passes the solid boxes of the scene.
//!
//! Velocities are in pixels per step and one step runs per frame, so the
//! step itself ignores frame time.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

use crate::components::boxcollider::BoxCollider;
use crate::components::rigidbody::RigidBody;

/// World-space axis-aligned box as `(min, max)`.
pub type Aabb = (Vector2, Vector2);

/// Contacts found during one [`PlatformerPhysics::step`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepContacts {
    /// Landed on top of solid geometry.
    pub floor: bool,
    /// Bumped into geometry from below.
    pub ceiling: bool,
    /// Pushed back horizontally.
    pub wall: bool,
}

fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    a.0.x < b.1.x && a.1.x > b.0.x && a.0.y < b.1.y && a.1.y > b.0.y
}

#[derive(Resource, Debug, Clone, Copy)]
pub struct PlatformerPhysics {
    /// Added to the vertical velocity every step (positive is down).
    pub gravity: f32,
}

impl PlatformerPhysics {
    pub fn new(gravity: f32) -> Self {
        Self { gravity }
    }

    /// Apply gravity and move the body by its velocity, resolving overlaps
    /// with `walls`.
    ///
    /// Vertical movement is resolved first; hitting a floor or ceiling zeroes
    /// the vertical velocity. Horizontal velocity is kept after a wall hit,
    /// it belongs to the controller.
    pub fn step(
        &self,
        position: &mut Vector2,
        body: &mut RigidBody,
        collider: &BoxCollider,
        walls: &[Aabb],
    ) -> StepContacts {
        let mut contacts = StepContacts::default();
        body.velocity.y += self.gravity;

        let vy = body.velocity.y;
        position.y += vy;
        if vy != 0.0 {
            for wall in walls {
                let (min, max) = collider.aabb(*position);
                if !overlaps(&(min, max), wall) {
                    continue;
                }
                if vy > 0.0 {
                    position.y -= max.y - wall.0.y;
                    contacts.floor = true;
                } else {
                    position.y += wall.1.y - min.y;
                    contacts.ceiling = true;
                }
            }
            if contacts.floor || contacts.ceiling {
                body.velocity.y = 0.0;
            }
        }

        let vx = body.velocity.x;
        position.x += vx;
        if vx != 0.0 {
            for wall in walls {
                let (min, max) = collider.aabb(*position);
                if !overlaps(&(min, max), wall) {
                    continue;
                }
                if vx > 0.0 {
                    position.x -= max.x - wall.0.x;
                } else {
                    position.x += wall.1.x - min.x;
                }
                contacts.wall = true;
            }
        }

        contacts
    }

    /// Whether the body rests on solid geometry: moving it one pixel down
    /// would overlap a wall.
    pub fn can_jump(&self, position: Vector2, collider: &BoxCollider, walls: &[Aabb]) -> bool {
        let below = collider.aabb(Vector2 {
            x: position.x,
            y: position.y + 1.0,
        });
        walls.iter().any(|wall| overlaps(&below, wall))
    }
}
