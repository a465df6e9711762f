//! Physics step for the player.
//!
//! Collects the boxes of every [`Solid`] entity and lets the
//! [`PlatformerPhysics`] collaborator move the player against them. Solid
//! geometry never moves, so it is read only.
use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::layer::Solid;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::resources::physics::{Aabb, PlatformerPhysics};

/// Query over the static geometry of the scene.
pub type SolidQuery<'w, 's> =
    Query<'w, 's, (&'static MapPosition, &'static BoxCollider), (With<Solid>, Without<Player>)>;

/// World-space boxes of all solid entities.
pub fn solid_boxes(solids: &SolidQuery) -> Vec<Aabb> {
    solids
        .iter()
        .map(|(position, collider)| collider.aabb(position.pos))
        .collect()
}

/// Run one physics step for every player.
pub fn physics_step(
    physics: Res<PlatformerPhysics>,
    mut players: Query<(&mut MapPosition, &mut RigidBody, &BoxCollider), With<Player>>,
    solids: SolidQuery,
) {
    let walls = solid_boxes(&solids);
    for (mut position, mut body, collider) in players.iter_mut() {
        let contacts = physics.step(&mut position.pos, &mut body, collider, &walls);
        if contacts.ceiling {
            log::trace!("player bumped a ceiling at {:?}", position.pos);
        }
    }
}
