//! Event types and observers used by the game.
//!
//! Events provide a decoupled way for systems to communicate: the input
//! system only reports what happened, observers decide what it means.
//!
//! Submodules:
//! - [`input`] – logical key press/release notifications
//! - [`switchdebug`] – toggle debug rendering and diagnostics on/off
pub mod input;
pub mod switchdebug;
