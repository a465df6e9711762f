//! Input action events.
//!
//! This module defines [`InputEvent`] which is triggered when gameplay-relevant
//! input actions occur (press or release). The [`InputAction`] enum lists all
//! recognized actions.
//!
//! The player controller observes these events; it never polls the keyboard
//! itself.

use bevy_ecs::prelude::*;

/// Enumeration of logical input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Move left (default: A or Left arrow).
    Left,
    /// Move right (default: D or Right arrow).
    Right,
    /// Jump (default: W or Up arrow).
    Jump,
    /// Down (default: S or Down arrow). Reported but unused by the controller.
    Down,
    /// Restart the level (default: R).
    Reset,
}

impl InputAction {
    pub const ALL: [InputAction; 5] = [
        InputAction::Left,
        InputAction::Right,
        InputAction::Jump,
        InputAction::Down,
        InputAction::Reset,
    ];
}

/// Event emitted when an input action is pressed or released.
///
/// The `action` field identifies which logical action occurred, and `pressed`
/// indicates whether it was a press (true) or release (false).
#[derive(Event, Debug, Clone, Copy)]
pub struct InputEvent {
    /// The input action that triggered this event.
    pub action: InputAction,
    /// Whether the action was pressed (true) or released (false).
    pub pressed: bool,
}
