//! Scene layer membership.
//!
//! The scene is an ordered list of named sprite layers. An entity joins a
//! layer through the [`Layer`] component; the gameplay role of the layer is
//! mirrored by marker components so systems can query it directly:
//!
//! - [`Solid`] – static geometry the physics step collides with
//! - [`Collectible`] – removed on first overlap with the player
//! - [`MapTile`] – spawned from the tile map and rebuilt on reset

use bevy_ecs::prelude::Component;

/// Name of the scene layer an entity belongs to.
#[derive(Component, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Layer(pub String);

impl Layer {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Static geometry.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Solid;

/// Pick-up item worth one point.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Collectible;

/// Entity spawned from the tile map.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct MapTile;
