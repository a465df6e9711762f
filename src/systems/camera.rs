//! Camera systems.
//!
//! - [`camera_follow`] eases the sprite camera towards the player and keeps
//!   it inside its bounds.
//! - [`window_resize_system`] re-fits both cameras when the window size
//!   changes.
use bevy_ecs::prelude::*;
use log::debug;
use raylib::RaylibHandle;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::resources::camera::{CameraBounds, GuiCamera, SpriteCamera};
use crate::resources::gameconfig::GameConfig;
use crate::resources::scene::SceneInfo;
use crate::resources::windowsize::WindowSize;
use crate::resources::worldtime::WorldTime;

/// Fit both cameras to a `width` x `height` viewport and derive the sprite
/// camera bounds from the scene extent. Without a scene the viewport itself
/// is the world.
pub fn fit_cameras(
    width: f32,
    height: f32,
    scene: Option<&SceneInfo>,
    sprite_camera: &mut SpriteCamera,
    gui_camera: &mut GuiCamera,
) {
    let (map_w, map_h) = scene.map_or((width, height), |s| (s.width, s.height));
    sprite_camera.fit_viewport(width, height);
    sprite_camera.bounds = CameraBounds::from_map(map_w, map_h, width, height);
    let constrained = sprite_camera.bounds.constrain(sprite_camera.position());
    sprite_camera.set_position(constrained);
    gui_camera.fit_viewport(height);
}

/// Smoothly follow the player with the sprite camera.
pub fn camera_follow(
    time: Res<WorldTime>,
    config: Res<GameConfig>,
    mut camera: ResMut<SpriteCamera>,
    players: Query<&MapPosition, With<Player>>,
) {
    let Ok(player) = players.single() else {
        return;
    };
    camera.follow(player.pos, time.delta, config.follow_decay);
}

/// Compare the window against [`WindowSize`] and re-fit the cameras on change.
pub fn window_resize_system(
    rl: NonSend<RaylibHandle>,
    mut window: ResMut<WindowSize>,
    scene: Option<Res<SceneInfo>>,
    mut sprite_camera: ResMut<SpriteCamera>,
    mut gui_camera: ResMut<GuiCamera>,
) {
    let current = WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    };
    if *window == current {
        return;
    }
    debug!("window resized to {}x{}", current.w, current.h);
    *window = current;
    let (w, h) = current.extent();
    fit_cameras(
        w,
        h,
        scene.as_deref(),
        &mut sprite_camera,
        &mut gui_camera,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use raylib::prelude::Vector2;

    fn scene(width: f32, height: f32) -> SceneInfo {
        SceneInfo {
            layers: vec!["Platforms".into(), "Player".into()],
            width,
            height,
            background_color: None,
        }
    }

    #[test]
    fn test_fit_cameras_rederives_bounds() {
        let mut sprite = SpriteCamera::new(1280.0, 720.0);
        let mut gui = GuiCamera::new(720.0);
        sprite.set_position(Vector2::new(5000.0, 5000.0));

        fit_cameras(800.0, 600.0, Some(&scene(4800.0, 720.0)), &mut sprite, &mut gui);

        assert_eq!(sprite.bounds, CameraBounds::from_map(4800.0, 720.0, 800.0, 600.0));
        assert_eq!(sprite.camera.offset, Vector2::new(400.0, 300.0));
        assert!(sprite.bounds.contains(sprite.position()));
        assert_eq!(gui.camera.offset, Vector2::new(0.0, 600.0));
    }

    #[test]
    fn test_fit_cameras_without_scene_uses_viewport() {
        let mut sprite = SpriteCamera::new(1280.0, 720.0);
        let mut gui = GuiCamera::new(720.0);
        fit_cameras(1024.0, 768.0, None, &mut sprite, &mut gui);
        assert_eq!(sprite.position().x, 512.0);
        assert!(sprite.bounds.contains(sprite.position()));
    }
}
