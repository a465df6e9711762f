//! Last seen window size.
//!
//! The resize system compares it with the live window every frame and only
//! re-fits the cameras when the two differ.

use bevy_ecs::prelude::Resource;

/// Window size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSize {
    pub w: i32,
    pub h: i32,
}

impl WindowSize {
    /// Width and height as floats, for camera math.
    pub fn extent(&self) -> (f32, f32) {
        (self.w as f32, self.h as f32)
    }
}
