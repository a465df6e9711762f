//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! title = 2D Minecraft
//! width = 1280
//! height = 720
//! target_fps = 60
//! vsync = true
//!
//! [assets]
//! tilemap = ./assets/tilemaps/meine_map
//! background = ./assets/textures/hintergrund.png
//! player_textures = ./assets/textures/steve
//!
//! [gameplay]
//! tile_scaling = 3
//! character_scaling = 1
//! player_speed = 8
//! gravity = 1
//! jump_speed = 20
//! follow_decay = 0.3
//! animation_fps = 5
//! spawn_x = 300
//! spawn_y = 300
//! solid_layer = Platforms
//! collectible_layer = Sammelbares
//! player_layer = Player
//! ```
//!
//! Movement values are pixels per physics step; the game runs one physics
//! step per frame.

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use raylib::prelude::Vector2;
use std::path::PathBuf;

use crate::components::animation::DEFAULT_ANIMATION_FPS;

/// Default safe values for startup
const DEFAULT_WINDOW_TITLE: &str = "2D Minecraft";
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_TILEMAP: &str = "./assets/tilemaps/meine_map";
const DEFAULT_BACKGROUND: &str = "./assets/textures/hintergrund.png";
const DEFAULT_PLAYER_TEXTURES: &str = "./assets/textures/steve";
const DEFAULT_TILE_SCALING: f32 = 3.0;
const DEFAULT_CHARACTER_SCALING: f32 = 1.0;
const DEFAULT_PLAYER_SPEED: f32 = 8.0;
const DEFAULT_GRAVITY: f32 = 1.0;
const DEFAULT_JUMP_SPEED: f32 = 20.0;
/// Half-life of the camera follow in seconds: within 1% of the target after 2 s.
const DEFAULT_FOLLOW_DECAY: f32 = 0.3;
const DEFAULT_SPAWN: (f32, f32) = (300.0, 300.0);
const DEFAULT_SOLID_LAYER: &str = "Platforms";
const DEFAULT_COLLECTIBLE_LAYER: &str = "Sammelbares";
const DEFAULT_PLAYER_LAYER: &str = "Player";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window title.
    pub window_title: String,
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Tile map directory; holds `<name>.txt` (JSON) and `<name>.png`.
    pub tilemap_path: PathBuf,
    /// Image stretched over the viewport behind the scene.
    pub background_path: PathBuf,
    /// Directory holding the player's `<texture key>.png` files.
    pub player_textures_dir: PathBuf,
    /// Factor applied to tile size when building the scene.
    pub tile_scaling: f32,
    /// Factor applied to the player sprite.
    pub character_scaling: f32,
    /// Horizontal player speed in pixels per step.
    pub player_speed: f32,
    /// Downward acceleration in pixels per step squared.
    pub gravity: f32,
    /// Upward velocity set by a jump, in pixels per step.
    pub jump_speed: f32,
    /// Camera follow half-life in seconds.
    pub follow_decay: f32,
    /// Player animation frame rate.
    pub animation_fps: f32,
    /// Where the player appears after a reset.
    pub spawn: Vector2,
    /// Layer the physics step collides with.
    pub solid_layer: String,
    /// Layer whose sprites are picked up for points.
    pub collectible_layer: String,
    /// Layer the player sprite is drawn on.
    pub player_layer: String,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            tilemap_path: PathBuf::from(DEFAULT_TILEMAP),
            background_path: PathBuf::from(DEFAULT_BACKGROUND),
            player_textures_dir: PathBuf::from(DEFAULT_PLAYER_TEXTURES),
            tile_scaling: DEFAULT_TILE_SCALING,
            character_scaling: DEFAULT_CHARACTER_SCALING,
            player_speed: DEFAULT_PLAYER_SPEED,
            gravity: DEFAULT_GRAVITY,
            jump_speed: DEFAULT_JUMP_SPEED,
            follow_decay: DEFAULT_FOLLOW_DECAY,
            animation_fps: DEFAULT_ANIMATION_FPS,
            spawn: Vector2 {
                x: DEFAULT_SPAWN.0,
                y: DEFAULT_SPAWN.1,
            },
            solid_layer: DEFAULT_SOLID_LAYER.to_string(),
            collectible_layer: DEFAULT_COLLECTIBLE_LAYER.to_string(),
            player_layer: DEFAULT_PLAYER_LAYER.to_string(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);
        info!(
            "Loaded config from {:?}: {}x{} window, fps={}, map={:?}",
            self.config_path,
            self.window_width,
            self.window_height,
            self.target_fps,
            self.tilemap_path
        );
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [window] section
        if let Some(title) = config.get("window", "title") {
            self.window_title = title;
        }
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [assets] section
        if let Some(path) = config.get("assets", "tilemap") {
            self.tilemap_path = PathBuf::from(path);
        }
        if let Some(path) = config.get("assets", "background") {
            self.background_path = PathBuf::from(path);
        }
        if let Some(path) = config.get("assets", "player_textures") {
            self.player_textures_dir = PathBuf::from(path);
        }

        // [gameplay] section
        let positive = |key: &str, current: f32| -> f32 {
            match config.getfloat("gameplay", key) {
                Ok(Some(v)) if v.is_finite() && v > 0.0 => v as f32,
                Ok(Some(v)) => {
                    warn!("Ignoring gameplay.{} = {}: must be positive", key, v);
                    current
                }
                Ok(None) => current,
                Err(e) => {
                    warn!("Ignoring gameplay.{}: {}", key, e);
                    current
                }
            }
        };
        self.tile_scaling = positive("tile_scaling", self.tile_scaling);
        self.character_scaling = positive("character_scaling", self.character_scaling);
        self.player_speed = positive("player_speed", self.player_speed);
        self.gravity = positive("gravity", self.gravity);
        self.jump_speed = positive("jump_speed", self.jump_speed);
        self.follow_decay = positive("follow_decay", self.follow_decay);
        self.animation_fps = positive("animation_fps", self.animation_fps);
        if let Some(x) = config.getfloat("gameplay", "spawn_x").ok().flatten() {
            self.spawn.x = x as f32;
        }
        if let Some(y) = config.getfloat("gameplay", "spawn_y").ok().flatten() {
            self.spawn.y = y as f32;
        }
        if let Some(layer) = config.get("gameplay", "solid_layer") {
            self.solid_layer = layer;
        }
        if let Some(layer) = config.get("gameplay", "collectible_layer") {
            self.collectible_layer = layer;
        }
        if let Some(layer) = config.get("gameplay", "player_layer") {
            self.player_layer = layer;
        }
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = GameConfig::new();
        assert_eq!(c.window_title, "2D Minecraft");
        assert_eq!(c.window_size(), (1280, 720));
        assert_eq!(c.player_speed, 8.0);
        assert_eq!(c.gravity, 1.0);
        assert_eq!(c.jump_speed, 20.0);
        assert_eq!(c.follow_decay, 0.3);
        assert_eq!(c.tile_scaling, 3.0);
        assert_eq!(c.animation_fps, 5.0);
        assert_eq!(c.spawn, Vector2 { x: 300.0, y: 300.0 });
        assert_eq!(c.solid_layer, "Platforms");
        assert_eq!(c.collectible_layer, "Sammelbares");
    }

    #[test]
    fn test_load_from_str_overrides_present_keys_only() {
        let mut c = GameConfig::new();
        c.load_from_str(
            "[window]\nwidth = 800\ntitle = Test Run\n\n[gameplay]\njump_speed = 12.5\nsolid_layer = Boden\n",
        )
        .unwrap();
        assert_eq!(c.window_width, 800);
        assert_eq!(c.window_height, 720);
        assert_eq!(c.window_title, "Test Run");
        assert_eq!(c.jump_speed, 12.5);
        assert_eq!(c.solid_layer, "Boden");
        assert_eq!(c.gravity, 1.0);
    }

    #[test]
    fn test_non_positive_gameplay_values_are_ignored() {
        let mut c = GameConfig::new();
        c.load_from_str("[gameplay]\nanimation_fps = 0\ngravity = -2\nplayer_speed = fast\n")
            .unwrap();
        assert_eq!(c.animation_fps, 5.0);
        assert_eq!(c.gravity, 1.0);
        assert_eq!(c.player_speed, 8.0);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut c = GameConfig::with_path("./definitely/not/here.ini");
        assert!(c.load_from_file().is_err());
        assert_eq!(c.window_width, 1280);
    }
}
