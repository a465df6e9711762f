//! Game systems.
//!
//! This module groups all ECS systems and observers that advance the
//! simulation, read input and render.
//!
//! Submodules overview
//! - [`animation`] – advance the player's current animator and show its texture
//! - [`camera`] – smooth camera follow and viewport fitting on resize
//! - [`collision`] – overlap queries and collectible pickup
//! - [`hud`] – keep the score text in sync with the score
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`physics`] – gravity and collision against solid tiles
//! - [`playercontroller`] – turn input events into player motion and resets
//! - [`render`] – draw background, scene, HUD and debug overlays using Raylib
//! - [`time`] – update simulation time and delta
pub mod animation;
pub mod camera;
pub mod collision;
pub mod hud;
pub mod input;
pub mod physics;
pub mod playercontroller;
pub mod render;
pub mod time;
