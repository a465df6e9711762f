//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, cameras, the
//! physics collaborator, asset stores, and the score. Systems receive them
//! as parameters; nothing is reached through globals.
//!
//! Overview
//! - `camera` – scrolling sprite camera with bounds, and the HUD camera
//! - `debugmode` – presence toggles optional debug overlays
//! - `gameconfig` – INI-backed settings
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `movekeys` – held left/right movement keys
//! - `physics` – platformer physics step and grounded test
//! - `scene` – layer order and map extent of the current scene
//! - `score` – points collected since the last reset
//! - `systemsstore` – registry of dynamically-lookup-able systems by name
//! - `texturestore` – loaded textures keyed by string IDs
//! - `tilemap` – tile map data loaded at startup
//! - `windowsize` – last seen window dimensions
//! - `worldtime` – simulation time and delta
pub mod camera;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod movekeys;
pub mod physics;
pub mod scene;
pub mod score;
pub mod systemsstore;
pub mod texturestore;
pub mod tilemap;
pub mod windowsize;
pub mod worldtime;
