//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the game cares about and exposes it
//! to systems via the [`InputState`] resource. Every action accepts a WASD
//! key and an arrow key; reset and the debug overlay have a single key.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::events::input::InputAction;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with its keyboard bindings.
pub struct BoolState {
    /// Whether any bound key is currently held.
    pub active: bool,
    /// Whether a bound key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether a bound key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
    /// Optional second key bound to the same action.
    pub alt_binding: Option<KeyboardKey>,
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: KeyboardKey::KEY_NULL,
            alt_binding: None,
        }
    }
}

impl BoolState {
    fn bound(key_binding: KeyboardKey, alt_binding: Option<KeyboardKey>) -> Self {
        Self {
            key_binding,
            alt_binding,
            ..Self::default()
        }
    }

    /// Bound keys, primary first.
    pub fn bindings(&self) -> impl Iterator<Item = KeyboardKey> {
        std::iter::once(self.key_binding).chain(self.alt_binding)
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub left: BoolState,
    pub right: BoolState,
    pub jump: BoolState,
    pub down: BoolState,
    pub reset: BoolState,
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            left: BoolState::bound(KeyboardKey::KEY_A, Some(KeyboardKey::KEY_LEFT)),
            right: BoolState::bound(KeyboardKey::KEY_D, Some(KeyboardKey::KEY_RIGHT)),
            jump: BoolState::bound(KeyboardKey::KEY_W, Some(KeyboardKey::KEY_UP)),
            down: BoolState::bound(KeyboardKey::KEY_S, Some(KeyboardKey::KEY_DOWN)),
            reset: BoolState::bound(KeyboardKey::KEY_R, None),
            mode_debug: BoolState::bound(KeyboardKey::KEY_F11, None),
        }
    }
}

impl InputState {
    /// State slot for a gameplay action.
    pub fn action_mut(&mut self, action: InputAction) -> &mut BoolState {
        match action {
            InputAction::Left => &mut self.left,
            InputAction::Right => &mut self.right,
            InputAction::Jump => &mut self.jump,
            InputAction::Down => &mut self.down,
            InputAction::Reset => &mut self.reset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert!(!bs.just_released);
        assert_eq!(bs.key_binding, KeyboardKey::KEY_NULL);
        assert_eq!(bs.alt_binding, None);
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.left.key_binding, KeyboardKey::KEY_A);
        assert_eq!(input.left.alt_binding, Some(KeyboardKey::KEY_LEFT));
        assert_eq!(input.right.key_binding, KeyboardKey::KEY_D);
        assert_eq!(input.right.alt_binding, Some(KeyboardKey::KEY_RIGHT));
        assert_eq!(input.jump.key_binding, KeyboardKey::KEY_W);
        assert_eq!(input.jump.alt_binding, Some(KeyboardKey::KEY_UP));
        assert_eq!(input.down.key_binding, KeyboardKey::KEY_S);
        assert_eq!(input.reset.key_binding, KeyboardKey::KEY_R);
        assert_eq!(input.mode_debug.key_binding, KeyboardKey::KEY_F11);
    }

    #[test]
    fn test_bindings_lists_both_keys() {
        let input = InputState::default();
        let keys: Vec<_> = input.jump.bindings().collect();
        assert_eq!(keys, vec![KeyboardKey::KEY_W, KeyboardKey::KEY_UP]);
        assert_eq!(input.reset.bindings().count(), 1);
    }

    #[test]
    fn test_action_mut_maps_to_field() {
        let mut input = InputState::default();
        input.action_mut(InputAction::Right).active = true;
        assert!(input.right.active);
        assert!(!input.left.active);
    }
}
