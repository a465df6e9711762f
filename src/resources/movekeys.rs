//! Horizontal movement keys currently held.

use bevy_ecs::prelude::Resource;

/// Held state of the left/right movement keys.
///
/// Written by the player input observer on key down/up; the player's
/// horizontal velocity is a pure function of these two flags, see
/// [`move_intent`](crate::systems::playercontroller::move_intent).
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveKeys {
    pub left: bool,
    pub right: bool,
}
