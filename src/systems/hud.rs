//! HUD text updates.
use bevy_ecs::prelude::*;

use crate::components::dynamictext::{DynamicText, ScoreText};
use crate::resources::score::Score;

/// Mirror the [`Score`] into the score text whenever either changes.
pub fn score_text_system(score: Res<Score>, mut texts: Query<(Ref<ScoreText>, &mut DynamicText)>) {
    for (marker, mut text) in texts.iter_mut() {
        if score.is_changed() || marker.is_added() {
            text.set_content(score.label());
        }
    }
}
