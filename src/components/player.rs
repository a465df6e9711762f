//! Player component.
//!
//! The [`Player`] owns one [`Animator`] per [`AnimationName`] and tracks
//! which of them is current. Position and velocity live in the usual
//! [`MapPosition`](super::mapposition::MapPosition) and
//! [`RigidBody`](super::rigidbody::RigidBody) components; the player never
//! integrates its own movement.

use bevy_ecs::prelude::Component;

use crate::components::animation::{AnimationName, Animator, UnknownAnimation};

/// Texture keys for each of the player's animations.
#[derive(Debug, Clone)]
pub struct PlayerTextures {
    pub idle: Vec<String>,
    pub walk: Vec<String>,
    pub pickaxe: Vec<String>,
}

impl PlayerTextures {
    pub fn get(&self, name: AnimationName) -> &[String] {
        match name {
            AnimationName::Idle => &self.idle,
            AnimationName::Walk => &self.walk,
            AnimationName::Pickaxe => &self.pickaxe,
        }
    }
}

impl Default for PlayerTextures {
    fn default() -> Self {
        Self {
            idle: vec!["steve_idle".into()],
            walk: vec!["steve_walk01".into(), "steve_walk02".into()],
            pickaxe: vec!["steve_pickaxe01".into(), "steve_pickaxe02".into()],
        }
    }
}

/// The controllable character.
#[derive(Component, Debug, Clone)]
pub struct Player {
    animations: [Animator; 3],
    current: AnimationName,
}

impl Player {
    /// Build the animation table from texture keys, all animations playing at `fps`.
    ///
    /// Returns `None` if any animation has no textures or `fps` is invalid.
    pub fn new(textures: &PlayerTextures, fps: f32) -> Option<Self> {
        let build = |name| Animator::new(textures.get(name).iter().cloned(), fps);
        Some(Self {
            animations: [
                build(AnimationName::Idle)?,
                build(AnimationName::Walk)?,
                build(AnimationName::Pickaxe)?,
            ],
            current: AnimationName::Idle,
        })
    }

    pub fn current_animation(&self) -> AnimationName {
        self.current
    }

    /// Switch the active animation. The newly selected animator keeps its
    /// own clock and frame.
    pub fn set_current_animation(&mut self, name: AnimationName) {
        self.current = name;
    }

    /// Switch by name (`"idle"`, `"walk"` or `"pickaxe"`). Any other name
    /// is rejected and the current animation is kept.
    pub fn set_current_animation_named(&mut self, name: &str) -> Result<(), UnknownAnimation> {
        self.current = name.parse()?;
        Ok(())
    }

    pub fn animator(&self, name: AnimationName) -> &Animator {
        &self.animations[name.index()]
    }

    /// Advance only the current animator; returns the texture to display.
    pub fn update(&mut self, delta: f32) -> &str {
        self.animations[self.current.index()].update(delta)
    }

    /// Back to `Idle` with every animator on its first frame.
    pub fn restart(&mut self) {
        self.current = AnimationName::Idle;
        for animator in self.animations.iter_mut() {
            animator.restart();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new(&PlayerTextures::default(), 5.0).unwrap()
    }

    #[test]
    fn test_starts_idle() {
        let p = player();
        assert_eq!(p.current_animation(), AnimationName::Idle);
    }

    #[test]
    fn test_update_only_touches_current_animator() {
        let mut p = player();
        p.set_current_animation(AnimationName::Walk);
        p.update(0.1);
        p.update(0.05);
        assert!(p.animator(AnimationName::Walk).elapsed() > 0.0);
        assert_eq!(p.animator(AnimationName::Idle).elapsed(), 0.0);
        assert_eq!(p.animator(AnimationName::Pickaxe).elapsed(), 0.0);
        assert_eq!(p.animator(AnimationName::Pickaxe).index(), 0);
    }

    #[test]
    fn test_update_returns_current_animation_texture() {
        let mut p = player();
        assert_eq!(p.update(0.0), "steve_idle");
        p.set_current_animation(AnimationName::Pickaxe);
        assert_eq!(p.update(0.2), "steve_pickaxe01");
        assert_eq!(p.update(0.0), "steve_pickaxe02");
    }

    #[test]
    fn test_set_current_animation_named() {
        let mut p = player();
        p.set_current_animation_named("pickaxe").unwrap();
        assert_eq!(p.current_animation(), AnimationName::Pickaxe);
        let err = p.set_current_animation_named("jump").unwrap_err();
        assert_eq!(err, UnknownAnimation("jump".into()));
        assert_eq!(p.current_animation(), AnimationName::Pickaxe);
    }

    #[test]
    fn test_rejects_empty_animation() {
        let textures = PlayerTextures {
            walk: Vec::new(),
            ..PlayerTextures::default()
        };
        assert!(Player::new(&textures, 5.0).is_none());
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut p = player();
        p.set_current_animation(AnimationName::Walk);
        p.update(0.2);
        p.restart();
        assert_eq!(p.current_animation(), AnimationName::Idle);
        assert_eq!(p.animator(AnimationName::Walk).index(), 0);
    }
}
