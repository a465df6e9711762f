//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from Raylib each frame and
//!   writes the results into [`crate::resources::input::InputState`].
//! - Input events are emitted for key presses/releases: an
//!   [`InputEvent`] per gameplay action and a
//!   [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent) for
//!   the debug key.
use bevy_ecs::prelude::*;
use raylib::RaylibHandle;

use crate::events::input::{InputAction, InputEvent};
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{BoolState, InputState};

/// Refresh one action from the keyboard.
///
/// The action counts as held while any of its keys is down; press and
/// release edges are taken on that combined state so holding both keys of
/// an action and letting go of one does not release it.
fn poll(state: &mut BoolState, rl: &RaylibHandle) {
    let was_active = state.active;
    let active = state.bindings().any(|key| rl.is_key_down(key));
    state.active = active;
    state.just_pressed = active && !was_active;
    state.just_released = !active && was_active;
}

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<RaylibHandle>,
    mut commands: Commands,
) {
    for action in InputAction::ALL {
        let state = input.action_mut(action);
        poll(state, &rl);
        if state.just_pressed {
            commands.trigger(InputEvent {
                action,
                pressed: true,
            });
        }
        if state.just_released {
            commands.trigger(InputEvent {
                action,
                pressed: false,
            });
        }
    }

    poll(&mut input.mode_debug, &rl);
    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}
