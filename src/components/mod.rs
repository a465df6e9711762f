//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world.
//!
//! Submodules overview:
//! - [`animation`] – texture-cycling [`Animator`](animation::Animator) and animation names
//! - [`boxcollider`] – axis-aligned rectangular collider for physics and pick-ups
//! - [`dynamictext`] – text component for rendering variable strings
//! - [`layer`] – scene layer membership and gameplay markers
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`player`] – the controllable character and its animation table
//! - [`rigidbody`] – kinematic body storing velocity
//! - [`scale`] – 2D scale factor for sprites
//! - [`screenposition`] – screen-space position for HUD elements
//! - [`sprite`] – 2D sprite rendering component
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animation;
pub mod boxcollider;
pub mod dynamictext;
pub mod layer;
pub mod mapposition;
pub mod player;
pub mod rigidbody;
pub mod scale;
pub mod screenposition;
pub mod sprite;
pub mod zindex;
