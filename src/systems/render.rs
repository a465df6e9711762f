//! Render system.
//!
//! Draws one frame: the clear colour and the stretched background, the scene
//! sprites through the [`SpriteCamera`] ordered by [`ZIndex`], then HUD text
//! through the [`GuiCamera`]. With [`DebugMode`] present collider outlines
//! and a diagnostics line are added.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::dynamictext::DynamicText;
use crate::components::mapposition::MapPosition;
use crate::components::scale::Scale;
use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::camera::{GuiCamera, SpriteCamera};
use crate::resources::debugmode::DebugMode;
use crate::resources::scene::SceneInfo;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;

/// Texture key of the full-screen background image.
pub const BACKGROUND_TEX_KEY: &str = "background";

/// Source and destination rectangles and pivot for drawing `sprite` at
/// `position` with `scale`. A horizontally flipped sprite gets a negative
/// source width.
pub fn sprite_rects(
    sprite: &Sprite,
    position: Vector2,
    scale: Vector2,
) -> (Rectangle, Rectangle, Vector2) {
    let src = Rectangle {
        x: sprite.offset.x,
        y: sprite.offset.y,
        width: if sprite.flip_h {
            -sprite.width
        } else {
            sprite.width
        },
        height: sprite.height,
    };
    let dest = Rectangle {
        x: position.x,
        y: position.y,
        width: sprite.width * scale.x,
        height: sprite.height * scale.y,
    };
    let origin = Vector2 {
        x: sprite.origin.x * scale.x,
        y: sprite.origin.y * scale.y,
    };
    (src, dest, origin)
}

/// Diagnostics line shown in debug mode.
pub fn debug_line(fps: u32, time: &WorldTime, camera: Vector2, sprites: usize) -> String {
    format!(
        "DEBUG (F11) | FPS: {} | Time: {:.1}s | Frame: {} | Camera: ({:.1}, {:.1}) | Sprites: {}",
        fps, time.elapsed, time.frame_count, camera.x, camera.y, sprites
    )
}

#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    textures: Res<TextureStore>,
    sprite_camera: Res<SpriteCamera>,
    gui_camera: Res<GuiCamera>,
    scene: Option<Res<SceneInfo>>,
    debug: Option<Res<DebugMode>>,
    time: Res<WorldTime>,
    sprites: Query<(&Sprite, &MapPosition, &ZIndex, Option<&Scale>)>,
    texts: Query<(&DynamicText, &ScreenPosition)>,
    colliders: Query<(&BoxCollider, &MapPosition)>,
) {
    let screen_w = rl.get_screen_width();
    let screen_h = rl.get_screen_height();
    let clear = scene
        .as_ref()
        .and_then(|s| s.background_color)
        .unwrap_or(Color::BLACK);

    let mut to_draw: Vec<_> = sprites.iter().collect();
    to_draw.sort_by_key(|(_, _, z, _)| z.0);

    let mut d = rl.begin_drawing(&th);
    d.clear_background(clear);

    if let Some(bg) = textures.get(BACKGROUND_TEX_KEY) {
        let src = Rectangle::new(0.0, 0.0, bg.width as f32, bg.height as f32);
        let dest = Rectangle::new(0.0, 0.0, screen_w as f32, screen_h as f32);
        d.draw_texture_pro(bg, src, dest, Vector2::zero(), 0.0, Color::WHITE);
    }

    {
        let mut d2 = d.begin_mode2D(sprite_camera.camera);
        for (sprite, position, _z, scale) in to_draw.iter() {
            let Some(tex) = textures.get(&sprite.tex_key) else {
                continue;
            };
            let scale = scale.map_or(Vector2 { x: 1.0, y: 1.0 }, |s| s.scale);
            let (src, dest, origin) = sprite_rects(sprite, position.pos, scale);
            d2.draw_texture_pro(tex, src, dest, origin, 0.0, Color::WHITE);
        }

        if debug.is_some() {
            for (collider, position) in colliders.iter() {
                let (x, y, w, h) = collider.get_aabb(position.pos);
                d2.draw_rectangle_lines(x as i32, y as i32, w as i32, h as i32, Color::RED);
            }
        }
    }

    {
        let mut d2 = d.begin_mode2D(gui_camera.camera);
        for (text, position) in texts.iter() {
            let p = gui_camera.hud_point(position.pos, text.font_size);
            d2.draw_text(
                &text.content,
                p.x as i32,
                p.y as i32,
                text.font_size as i32,
                text.color,
            );
        }
    }

    if debug.is_some() {
        let line = debug_line(d.get_fps(), &time, sprite_camera.position(), to_draw.len());
        d.draw_text(&line, 10, 10, 10, Color::BLACK);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_line_reports_clock() {
        let time = WorldTime {
            elapsed: 12.5,
            frame_count: 735,
            ..WorldTime::default()
        };
        let line = debug_line(60, &time, Vector2::new(640.0, 300.0), 34);
        assert_eq!(
            line,
            "DEBUG (F11) | FPS: 60 | Time: 12.5s | Frame: 735 | Camera: (640.0, 300.0) | Sprites: 34"
        );
    }

    #[test]
    fn test_sprite_rects_scale_pivot_and_size() {
        let sprite = Sprite::centered("tilemap", 16.0, 16.0);
        let (src, dest, origin) = sprite_rects(&sprite, Vector2::new(72.0, 24.0), Vector2::new(3.0, 3.0));
        assert_eq!(src.width, 16.0);
        assert_eq!((dest.x, dest.y, dest.width, dest.height), (72.0, 24.0, 48.0, 48.0));
        assert_eq!(origin, Vector2::new(24.0, 24.0));
    }

    #[test]
    fn test_flipped_sprite_has_negative_source_width() {
        let mut sprite = Sprite::centered("steve_walk01", 32.0, 64.0);
        sprite.flip_h = true;
        let (src, dest, _) = sprite_rects(&sprite, Vector2::zero(), Vector2::new(1.0, 1.0));
        assert_eq!(src.width, -32.0);
        assert_eq!(dest.width, 32.0);
    }
}
