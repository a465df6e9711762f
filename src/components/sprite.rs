use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Sprite is identified by a texture key, its size in texture pixels and an offset if the texture is a tileset.
/// The offset is used to select the correct tile from the tileset.
/// The origin selects the pivot point (in texture pixels) relative to the frame's top-left
/// used for placement and scaling when rendering.
/// `flip_h` mirrors the frame horizontally; the player uses it to face left.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub offset: Vector2,
    pub origin: Vector2,
    pub flip_h: bool,
}

impl Sprite {
    /// Whole-texture sprite with its pivot at the center.
    pub fn centered(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            offset: Vector2::zero(),
            origin: Vector2 {
                x: width * 0.5,
                y: height * 0.5,
            },
            flip_h: false,
        }
    }
}
