//! Keyboard-driven player controller.
//!
//! The controller does not poll the keyboard. It observes [`InputEvent`]s:
//! left/right update the held [`MoveKeys`] and re-derive the player's
//! horizontal motion through [`move_intent`], jump asks the physics
//! collaborator whether the player stands on something, and reset runs the
//! registered reset system.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::animation::AnimationName;
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::events::input::{InputAction, InputEvent};
use crate::resources::gameconfig::GameConfig;
use crate::resources::movekeys::MoveKeys;
use crate::resources::physics::PlatformerPhysics;
use crate::resources::systemsstore::{RESET_SYSTEM, SystemsStore};
use crate::systems::physics::{SolidQuery, solid_boxes};

/// Horizontal motion derived from the held movement keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveIntent {
    Left,
    Right,
    /// Both or neither key held.
    Stand,
}

impl MoveIntent {
    /// Horizontal velocity for a player walking at `speed`.
    pub fn velocity(self, speed: f32) -> f32 {
        match self {
            MoveIntent::Left => -speed,
            MoveIntent::Right => speed,
            MoveIntent::Stand => 0.0,
        }
    }

    /// Whether the sprite should be mirrored; `None` keeps the current facing.
    pub fn flip_h(self) -> Option<bool> {
        match self {
            MoveIntent::Left => Some(true),
            MoveIntent::Right => Some(false),
            MoveIntent::Stand => None,
        }
    }

    pub fn animation(self) -> AnimationName {
        match self {
            MoveIntent::Stand => AnimationName::Idle,
            _ => AnimationName::Walk,
        }
    }
}

/// Motion for the given held keys.
pub fn move_intent(left: bool, right: bool) -> MoveIntent {
    match (left, right) {
        (true, false) => MoveIntent::Left,
        (false, true) => MoveIntent::Right,
        _ => MoveIntent::Stand,
    }
}

/// Apply `intent` to a player's body, sprite and animation.
pub fn apply_move_intent(
    intent: MoveIntent,
    speed: f32,
    player: &mut Player,
    body: &mut RigidBody,
    sprite: &mut Sprite,
) {
    body.velocity.x = intent.velocity(speed);
    if let Some(flip) = intent.flip_h() {
        sprite.flip_h = flip;
    }
    player.set_current_animation(intent.animation());
}

/// Observer turning input events into player motion.
pub fn player_input_observer(
    trigger: On<InputEvent>,
    mut commands: Commands,
    mut move_keys: ResMut<MoveKeys>,
    config: Res<GameConfig>,
    physics: Res<PlatformerPhysics>,
    systems_store: Res<SystemsStore>,
    mut players: Query<(
        &mut Player,
        &mut RigidBody,
        &mut Sprite,
        &MapPosition,
        &BoxCollider,
    )>,
    solids: SolidQuery,
) {
    let event = trigger.event();
    match event.action {
        InputAction::Left | InputAction::Right => {
            if event.action == InputAction::Left {
                move_keys.left = event.pressed;
            } else {
                move_keys.right = event.pressed;
            }
            let intent = move_intent(move_keys.left, move_keys.right);
            for (mut player, mut body, mut sprite, _, _) in players.iter_mut() {
                apply_move_intent(
                    intent,
                    config.player_speed,
                    &mut player,
                    &mut body,
                    &mut sprite,
                );
            }
        }
        InputAction::Jump if event.pressed => {
            let walls = solid_boxes(&solids);
            for (_, mut body, _, position, collider) in players.iter_mut() {
                if physics.can_jump(position.pos, collider, &walls) {
                    body.velocity.y = -config.jump_speed;
                } else {
                    debug!("jump ignored, player is airborne");
                }
            }
        }
        InputAction::Reset if event.pressed => {
            systems_store.queue(&mut commands, RESET_SYSTEM);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::player::PlayerTextures;

    #[test]
    fn test_move_intent_truth_table() {
        assert_eq!(move_intent(false, false), MoveIntent::Stand);
        assert_eq!(move_intent(true, false), MoveIntent::Left);
        assert_eq!(move_intent(false, true), MoveIntent::Right);
        assert_eq!(move_intent(true, true), MoveIntent::Stand);
    }

    #[test]
    fn test_intent_outputs() {
        assert_eq!(MoveIntent::Left.velocity(8.0), -8.0);
        assert_eq!(MoveIntent::Right.velocity(8.0), 8.0);
        assert_eq!(MoveIntent::Stand.velocity(8.0), 0.0);
        assert_eq!(MoveIntent::Left.flip_h(), Some(true));
        assert_eq!(MoveIntent::Right.flip_h(), Some(false));
        assert_eq!(MoveIntent::Stand.flip_h(), None);
        assert_eq!(MoveIntent::Left.animation(), AnimationName::Walk);
        assert_eq!(MoveIntent::Stand.animation(), AnimationName::Idle);
    }

    #[test]
    fn test_standing_keeps_facing() {
        let mut player = Player::new(&PlayerTextures::default(), 5.0).unwrap();
        let mut body = RigidBody::new();
        let mut sprite = Sprite::centered("steve_idle", 32.0, 64.0);

        apply_move_intent(MoveIntent::Left, 8.0, &mut player, &mut body, &mut sprite);
        assert!(sprite.flip_h);
        assert_eq!(player.current_animation(), AnimationName::Walk);

        apply_move_intent(MoveIntent::Stand, 8.0, &mut player, &mut body, &mut sprite);
        assert!(sprite.flip_h);
        assert_eq!(body.velocity.x, 0.0);
        assert_eq!(player.current_animation(), AnimationName::Idle);
    }
}
