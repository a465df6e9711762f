//! Scene setup and reset.
//!
//! Startup loads every texture and the tile map once ([`load_assets`]),
//! spawns the player and the HUD, then runs [`reset`]. Reset rebuilds the
//! map tiles from the loaded [`Tilemap`], so collected items come back,
//! and puts the player at its spawn point.

use anyhow::{Context, anyhow};
use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::*;

use crate::components::animation::AnimationName;
use crate::components::boxcollider::BoxCollider;
use crate::components::dynamictext::{DynamicText, ScoreText};
use crate::components::layer::{Collectible, Layer, MapTile, Solid};
use crate::components::mapposition::MapPosition;
use crate::components::player::{Player, PlayerTextures};
use crate::components::rigidbody::RigidBody;
use crate::components::scale::Scale;
use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::camera::{GuiCamera, SpriteCamera};
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::movekeys::MoveKeys;
use crate::resources::physics::PlatformerPhysics;
use crate::resources::scene::SceneInfo;
use crate::resources::score::Score;
use crate::resources::systemsstore::{RESET_SYSTEM, SystemsStore};
use crate::resources::texturestore::TextureStore;
use crate::resources::tilemap::{Tilemap, TilemapFiles, Tileset};
use crate::resources::windowsize::WindowSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::player_animation;
use crate::systems::camera::{camera_follow, fit_cameras};
use crate::systems::collision::collect_collectibles;
use crate::systems::hud::score_text_system;
use crate::systems::physics::physics_step;
use crate::systems::playercontroller::{apply_move_intent, move_intent, player_input_observer};
use crate::systems::render::BACKGROUND_TEX_KEY;

/// Texture key of the tileset image.
pub const TILESET_TEX_KEY: &str = "tilemap";

/// HUD score position, from the bottom-left corner.
const SCORE_POSITION: (f32, f32) = (10.0, 10.0);
const SCORE_FONT_SIZE: f32 = 18.0;

/// Everything read from disk at startup.
pub struct LoadedAssets {
    pub textures: TextureStore,
    pub tilemap: Tilemap,
    pub tileset: Tileset,
    /// Size of the player's idle texture in pixels.
    pub player_size: Vector2,
}

fn load_texture(
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    path: &std::path::Path,
) -> anyhow::Result<Texture2D> {
    let path_str = path
        .to_str()
        .with_context(|| format!("non UTF-8 texture path {}", path.display()))?;
    rl.load_texture(th, path_str)
        .map_err(|e| anyhow!("failed to load texture {}: {}", path.display(), e))
}

/// Configured solid and collectible layers the map does not define.
fn missing_layers<'a>(tilemap: &Tilemap, config: &'a GameConfig) -> Vec<&'a str> {
    [config.solid_layer.as_str(), config.collectible_layer.as_str()]
        .into_iter()
        .filter(|name| tilemap.layer(name).is_none())
        .collect()
}

/// Load the background, the tileset, the tile map and every player texture.
pub fn load_assets(
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    config: &GameConfig,
) -> anyhow::Result<LoadedAssets> {
    let mut textures = TextureStore::new();

    let background = load_texture(rl, th, &config.background_path)?;
    textures.insert(BACKGROUND_TEX_KEY, background);

    let files = TilemapFiles::for_dir(&config.tilemap_path)?;
    let tilemap = Tilemap::load(&files.json)?;
    let tileset_tex = load_texture(rl, th, &files.png).context("loading the tileset")?;
    let tileset = Tileset::new(TILESET_TEX_KEY, tileset_tex.width, tilemap.tile_size);
    textures.insert(TILESET_TEX_KEY, tileset_tex);

    let player_textures = PlayerTextures::default();
    let mut player_size = Vector2::zero();
    for name in AnimationName::ALL {
        for key in player_textures.get(name) {
            if textures.contains(key) {
                continue;
            }
            let path = config.player_textures_dir.join(format!("{key}.png"));
            let tex = load_texture(rl, th, &path)
                .with_context(|| format!("loading the '{name}' animation"))?;
            if player_size == Vector2::zero() {
                player_size = Vector2::new(tex.width as f32, tex.height as f32);
            }
            textures.insert(key.clone(), tex);
        }
    }

    for name in missing_layers(&tilemap, config) {
        warn!("Tile map has no '{}' layer", name);
    }
    info!(
        "Loaded {}x{} tile map with {} layers from {}",
        tilemap.map_width,
        tilemap.map_height,
        tilemap.layers.len(),
        files.json.display()
    );
    Ok(LoadedAssets {
        textures,
        tilemap,
        tileset,
        player_size,
    })
}

/// Insert the gameplay resources and observers into `world` and register
/// the [`reset`] system. Needs no window; assets are added separately.
pub fn init_world(world: &mut World, config: GameConfig, window: WindowSize) {
    let (w, h) = window.extent();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(InputState::default());
    world.insert_resource(MoveKeys::default());
    world.insert_resource(Score::default());
    world.insert_resource(PlatformerPhysics::new(config.gravity));
    world.insert_resource(SpriteCamera::new(w, h));
    world.insert_resource(GuiCamera::new(h));
    world.insert_resource(window);
    world.insert_resource(config);

    world.add_observer(switch_debug_observer);
    world.add_observer(player_input_observer);

    let mut systems_store = SystemsStore::new();
    systems_store.register(world, RESET_SYSTEM, reset);
    world.insert_resource(systems_store);
    world.flush();
}

/// Add the per-frame gameplay systems, in order, to `schedule`.
pub fn add_gameplay_systems(schedule: &mut Schedule) {
    schedule.add_systems(
        (
            physics_step,
            collect_collectibles,
            player_animation,
            camera_follow,
            score_text_system,
        )
            .chain(),
    );
}

/// Components of the player entity for a texture of `size` pixels.
pub fn player_bundle(config: &GameConfig, size: Vector2) -> anyhow::Result<impl Bundle> {
    let textures = PlayerTextures::default();
    let player = Player::new(&textures, config.animation_fps)
        .context("player animations need at least one texture each")?;
    let scaled = Vector2 {
        x: size.x * config.character_scaling,
        y: size.y * config.character_scaling,
    };
    let first = textures.idle.first().cloned().unwrap_or_default();
    Ok((
        player,
        Sprite::centered(first, size.x, size.y),
        Scale::uniform(config.character_scaling),
        BoxCollider::centered(scaled.x, scaled.y),
        RigidBody::new(),
        MapPosition::from_vec(config.spawn),
        Layer::new(config.player_layer.clone()),
        ZIndex(0),
    ))
}

/// Components of the HUD entity showing the score.
pub fn score_text_bundle() -> impl Bundle {
    (
        ScoreText,
        DynamicText::new(Score::default().label(), SCORE_FONT_SIZE, Color::WHITE),
        ScreenPosition::new(SCORE_POSITION.0, SCORE_POSITION.1),
    )
}

/// Spawn one entity per tile of `tilemap`.
///
/// Tiles are pivoted at their center, `tile_size * scaling` pixels apart.
/// Each layer keeps its map index as [`ZIndex`]; tiles on the solid and
/// collectible layers get the matching marker.
pub fn spawn_tiles(
    commands: &mut Commands,
    tilemap: &Tilemap,
    tileset: &Tileset,
    scaling: f32,
    solid_layer: &str,
    collectible_layer: &str,
) -> usize {
    let tile_size = tilemap.tile_size as f32;
    let grid = tile_size * scaling;
    let mut spawned = 0;

    for (layer_index, layer) in tilemap.layers.iter().enumerate() {
        for pos in layer.positions.iter() {
            let (offset_x, offset_y) = tileset.source_offset(pos.id, tilemap.tile_size);
            let mut tile = commands.spawn((
                MapTile,
                Layer::new(layer.name.clone()),
                MapPosition::new((pos.x as f32 + 0.5) * grid, (pos.y as f32 + 0.5) * grid),
                ZIndex(layer_index as i32),
                Sprite {
                    offset: Vector2 {
                        x: offset_x,
                        y: offset_y,
                    },
                    ..Sprite::centered(tileset.tex_key.clone(), tile_size, tile_size)
                },
                Scale::uniform(scaling),
                BoxCollider::centered(grid, grid),
            ));
            if layer.name == solid_layer {
                tile.insert(Solid);
            } else if layer.name == collectible_layer {
                tile.insert(Collectible);
            }
            spawned += 1;
        }
    }
    spawned
}

/// Restore the initial game state.
///
/// Score back to zero, map tiles rebuilt, camera bounds re-derived, player
/// at the spawn point on its layer. Vertical motion stops; horizontal
/// motion and animation follow the movement keys still held. Running it
/// twice in a row gives the same state as running it once.
#[allow(clippy::too_many_arguments)]
pub fn reset(
    mut commands: Commands,
    config: Res<GameConfig>,
    tilemap: Res<Tilemap>,
    tileset: Res<Tileset>,
    window: Res<WindowSize>,
    move_keys: Res<MoveKeys>,
    mut score: ResMut<Score>,
    mut sprite_camera: ResMut<SpriteCamera>,
    mut gui_camera: ResMut<GuiCamera>,
    tiles: Query<Entity, With<MapTile>>,
    mut players: Query<(
        &mut Player,
        &mut MapPosition,
        &mut RigidBody,
        &mut Sprite,
        &mut ZIndex,
        &mut Layer,
    )>,
) {
    score.reset();

    for entity in tiles.iter() {
        commands.entity(entity).despawn();
    }
    let count = spawn_tiles(
        &mut commands,
        &tilemap,
        &tileset,
        config.tile_scaling,
        &config.solid_layer,
        &config.collectible_layer,
    );

    let scene = SceneInfo::from_tilemap(&tilemap, config.tile_scaling, &config.player_layer);
    let (view_w, view_h) = window.extent();
    sprite_camera.set_position(config.spawn);
    fit_cameras(
        view_w,
        view_h,
        Some(&scene),
        &mut sprite_camera,
        &mut gui_camera,
    );

    for (mut player, mut position, mut body, mut sprite, mut z, mut layer) in players.iter_mut() {
        player.restart();
        position.set_pos(config.spawn);
        body.stop();
        sprite.flip_h = false;
        *z = ZIndex(scene.z_of(&config.player_layer));
        *layer = Layer::new(config.player_layer.clone());
        if let Some(first) = PlayerTextures::default().idle.first() {
            sprite.tex_key = first.clone();
        }
        apply_move_intent(
            move_intent(move_keys.left, move_keys.right),
            config.player_speed,
            &mut player,
            &mut body,
            &mut sprite,
        );
    }

    info!("Scene reset: {} tiles, map {}x{} px", count, scene.width, scene.height);
    commands.insert_resource(scene);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::system::RunSystemOnce;

    const MAP: &str = r#"{
        "tile_size": 16,
        "map_width": 10,
        "map_height": 4,
        "layers": [
            { "name": "Platforms", "positions": [ {"x": 0, "y": 3, "id": 0}, {"x": 1, "y": 3, "id": 1} ] },
            { "name": "Sammelbares", "positions": [ {"x": 4, "y": 2, "id": 5} ] },
            { "name": "Deko", "positions": [ {"x": 7, "y": 1, "id": 9} ] }
        ]
    }"#;

    fn spawn_from_map(world: &mut World) {
        let tilemap = Tilemap::from_json_str(MAP).unwrap();
        let tileset = Tileset::new(TILESET_TEX_KEY, 64, 16);
        world
            .run_system_once(move |mut commands: Commands| {
                spawn_tiles(&mut commands, &tilemap, &tileset, 3.0, "Platforms", "Sammelbares");
            })
            .unwrap();
    }

    #[test]
    fn test_spawn_tiles_positions_and_markers() {
        let mut world = World::new();
        spawn_from_map(&mut world);

        let mut solids = world.query_filtered::<&MapPosition, With<Solid>>();
        let mut xs: Vec<f32> = solids.iter(&world).map(|p| p.pos.x).collect();
        xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(xs, vec![24.0, 72.0]);

        let mut coins = world.query_filtered::<(&MapPosition, &ZIndex), With<Collectible>>();
        let (coin, z) = coins.single(&world).unwrap();
        assert_eq!(coin.pos, Vector2::new(216.0, 120.0));
        assert_eq!(*z, ZIndex(1));

        let mut tiles = world.query_filtered::<Entity, With<MapTile>>();
        assert_eq!(tiles.iter(&world).count(), 4);
    }

    #[test]
    fn test_spawn_tiles_selects_tileset_frame() {
        let mut world = World::new();
        spawn_from_map(&mut world);
        let mut deko = world.query::<(&Layer, &Sprite, &BoxCollider)>();
        let (_, sprite, collider) = deko
            .iter(&world)
            .find(|(layer, _, _)| layer.name() == "Deko")
            .unwrap();
        assert_eq!(sprite.offset, Vector2::new(16.0, 32.0));
        assert_eq!(collider.size, Vector2::new(48.0, 48.0));
    }

    #[test]
    fn test_missing_layers() {
        let tilemap = Tilemap::from_json_str(MAP).unwrap();
        let mut config = GameConfig::new();
        assert!(missing_layers(&tilemap, &config).is_empty());

        config.collectible_layer = "Coins".to_string();
        assert_eq!(missing_layers(&tilemap, &config), vec!["Coins"]);
    }

    #[test]
    fn test_player_bundle_spawns_at_spawn_point() {
        let mut world = World::new();
        let config = GameConfig::new();
        let bundle = player_bundle(&config, Vector2::new(32.0, 64.0)).unwrap();
        let e = world.spawn(bundle).id();
        let pos = world.get::<MapPosition>(e).unwrap();
        assert_eq!(pos.pos, Vector2::new(300.0, 300.0));
        assert_eq!(world.get::<Sprite>(e).unwrap().tex_key, "steve_idle");
    }
}
