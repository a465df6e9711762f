//! Scene description resource.
//!
//! The scene itself is made of entities; [`SceneInfo`] records what the
//! current build of it was derived from: the layer order and the map extent
//! in world pixels. It is rebuilt on every reset.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Color;

use crate::resources::tilemap::Tilemap;

#[derive(Resource, Debug, Clone)]
pub struct SceneInfo {
    /// Layer names, back to front.
    pub layers: Vec<String>,
    /// Map width in world pixels.
    pub width: f32,
    /// Map height in world pixels.
    pub height: f32,
    /// Clear color requested by the map, if any.
    pub background_color: Option<Color>,
}

impl SceneInfo {
    /// Describe the scene built from `tilemap` at `scaling`, making sure
    /// `player_layer` exists; it is appended on top when the map lacks it.
    pub fn from_tilemap(tilemap: &Tilemap, scaling: f32, player_layer: &str) -> Self {
        let mut layers: Vec<String> = tilemap.layers.iter().map(|l| l.name.clone()).collect();
        if !layers.iter().any(|l| l == player_layer) {
            layers.push(player_layer.to_string());
        }
        let (width, height) = tilemap.pixel_size(scaling);
        Self {
            layers,
            width,
            height,
            background_color: tilemap.background_color(),
        }
    }

    /// Draw order of a layer; unknown layers go on top.
    pub fn z_of(&self, layer: &str) -> i32 {
        self.layers
            .iter()
            .position(|l| l == layer)
            .unwrap_or(self.layers.len()) as i32
    }
}
