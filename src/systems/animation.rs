//! Animation system.
//!
//! [`player_animation`] advances the current [`Animator`](crate::components::animation::Animator)
//! of every [`Player`] by the frame delta and shows the selected texture on
//! the player's [`Sprite`].
use bevy_ecs::prelude::*;

use crate::components::player::Player;
use crate::components::sprite::Sprite;
use crate::resources::worldtime::WorldTime;

/// Advance player animations and update the sprite texture.
pub fn player_animation(mut query: Query<(&mut Player, &mut Sprite)>, time: Res<WorldTime>) {
    for (mut player, mut sprite) in query.iter_mut() {
        let key = player.update(time.delta);
        if sprite.tex_key != key {
            sprite.tex_key = key.to_string();
        }
    }
}
