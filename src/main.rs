//! Blockhopper main entry point.
//!
//! A small 2D block platformer written in Rust using:
//! - **raylib** for windowing, textures and drawing
//! - **bevy_ecs** for the entity-component-system structure
//!
//! The player runs and jumps across a tile map, picks up collectibles for
//! points and is followed by a scrolling camera.
//!
//! # Main Loop
//!
//! 1. Read `config.ini` and open the raylib window
//! 2. Load textures and the tile map; abort with an error chain on failure
//! 3. Insert resources, register observers and the reset system
//! 4. Spawn the player and the HUD, then run the reset once
//! 5. Every frame: input, physics, pickups, animation, camera, HUD, render
//!
//! # Controls
//!
//! A/D or arrows to walk, W or Up to jump, R to restart, F11 for debug info.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use anyhow::{Context, anyhow};
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};

use blockhopper::game;
use blockhopper::resources::debugmode::DebugMode;
use blockhopper::resources::gameconfig::GameConfig;
use blockhopper::resources::systemsstore::{RESET_SYSTEM, SystemsStore};
use blockhopper::resources::windowsize::WindowSize;
use blockhopper::systems::camera::window_resize_system;
use blockhopper::systems::hud::score_text_system;
use blockhopper::systems::input::update_input_state;
use blockhopper::systems::physics::physics_step;
use blockhopper::systems::render::render_system;
use blockhopper::systems::time::update_world_time;

/// 2D block platformer
#[derive(Parser)]
#[command(version, about = "Run, jump and collect across a tile map.")]
struct Cli {
    /// Path of the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Start with the debug overlay enabled.
    #[arg(long)]
    debug: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }

    // --------------- Raylib window & assets ---------------
    let (width, height) = config.window_size();
    let mut builder = raylib::init();
    builder
        .size(width as i32, height as i32)
        .resizable()
        .title(&config.window_title);
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);

    let assets = game::load_assets(&mut rl, &thread, &config).context("failed to load assets")?;
    let player = game::player_bundle(&config, assets.player_size)?;
    let window = WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    };

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    game::init_world(&mut world, config, window);
    if cli.debug {
        world.insert_resource(DebugMode {});
    }
    world.insert_resource(assets.textures);
    world.insert_resource(assets.tilemap);
    world.insert_resource(assets.tileset);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(player);
    world.spawn(game::score_text_bundle());

    let reset_id = world
        .resource::<SystemsStore>()
        .get(RESET_SYSTEM)
        .context("reset system not registered")?;
    world
        .run_system(reset_id)
        .map_err(|e| anyhow!("initial reset failed: {e}"))?;

    let mut update = Schedule::default();
    update.add_systems(update_input_state.before(physics_step));
    game::add_gameplay_systems(&mut update);
    update.add_systems((window_resize_system, render_system).chain().after(score_text_system));
    update
        .initialize(&mut world)
        .map_err(|e| anyhow!("failed to initialize schedule: {e}"))?;

    // --------------- Main loop ---------------
    info!("Starting main loop");
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame
    }
    info!("Window closed");
    Ok(())
}
