//! Camera resources.
//!
//! Two cameras wrap raylib's [`Camera2D`]:
//!
//! - [`SpriteCamera`] scrolls with the player. Its position is the world
//!   point shown at the center of the viewport and is clamped into a
//!   [`CameraBounds`] rectangle derived from the map size.
//! - [`GuiCamera`] never scrolls; its origin is pinned at the bottom-left
//!   corner of the viewport so HUD elements keep their distance to that
//!   corner on resize.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera2D, Vector2};

/// Rectangle the sprite camera's position is clamped to.
///
/// World coordinates, `y` grows downwards, so `top <= bottom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl CameraBounds {
    /// Bounds for a map of `map_width` x `map_height` pixels seen through a
    /// `view_width` x `view_height` viewport.
    ///
    /// Horizontally the camera stays half a viewport away from both map
    /// edges. Vertically it never shows anything below the map floor, but
    /// may rise until the map's top edge is at the screen center so the sky
    /// above a shallow map stays reachable. When the map is smaller than the
    /// viewport on an axis the range collapses onto the map center.
    pub fn from_map(map_width: f32, map_height: f32, view_width: f32, view_height: f32) -> Self {
        let half_w = view_width * 0.5;
        let half_h = view_height * 0.5;

        let (left, right) = if map_width >= view_width {
            (half_w, map_width - half_w)
        } else {
            (map_width * 0.5, map_width * 0.5)
        };
        let (top, bottom) = if map_height >= half_h {
            (0.0, map_height - half_h)
        } else {
            (map_height * 0.5, map_height * 0.5)
        };
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Clamp `pos` into the rectangle.
    pub fn constrain(&self, pos: Vector2) -> Vector2 {
        Vector2 {
            x: pos.x.clamp(self.left, self.right),
            y: pos.y.clamp(self.top, self.bottom),
        }
    }

    pub fn contains(&self, pos: Vector2) -> bool {
        pos.x >= self.left && pos.x <= self.right && pos.y >= self.top && pos.y <= self.bottom
    }
}

/// Frame-rate independent exponential approach of `from` towards `to`.
///
/// `half_life` is the time in seconds after which half of the remaining
/// distance has been covered.
pub fn smerp(from: Vector2, to: Vector2, delta: f32, half_life: f32) -> Vector2 {
    let t = 1.0 - (-delta / half_life).exp2();
    Vector2 {
        x: from.x + (to.x - from.x) * t,
        y: from.y + (to.y - from.y) * t,
    }
}

fn camera_at(target: Vector2, offset: Vector2) -> Camera2D {
    Camera2D {
        target,
        offset,
        rotation: 0.0,
        zoom: 1.0,
    }
}

/// Scrolling camera used to draw the scene.
#[derive(Resource, Clone, Copy)]
pub struct SpriteCamera {
    pub camera: Camera2D,
    pub bounds: CameraBounds,
}

impl SpriteCamera {
    /// Camera for a viewport of the given size, looking at its own center.
    pub fn new(view_width: f32, view_height: f32) -> Self {
        let center = Vector2 {
            x: view_width * 0.5,
            y: view_height * 0.5,
        };
        Self {
            camera: camera_at(center, center),
            bounds: CameraBounds::from_map(view_width, view_height, view_width, view_height),
        }
    }

    /// World point shown at the viewport center.
    pub fn position(&self) -> Vector2 {
        self.camera.target
    }

    pub fn set_position(&mut self, pos: Vector2) {
        self.camera.target = pos;
    }

    /// Move towards `target` and clamp into the bounds.
    pub fn follow(&mut self, target: Vector2, delta: f32, half_life: f32) {
        let next = smerp(self.camera.target, target, delta, half_life);
        self.camera.target = self.bounds.constrain(next);
    }

    /// Re-fit to a new viewport size: the camera position stays at the
    /// viewport center.
    pub fn fit_viewport(&mut self, view_width: f32, view_height: f32) {
        self.camera.offset = Vector2 {
            x: view_width * 0.5,
            y: view_height * 0.5,
        };
    }
}

/// Non-scrolling camera for HUD elements.
///
/// World `(0, 0)` maps to the bottom-left corner of the viewport; positive
/// `y` in HUD space points up, so a HUD item at `(x, y)` is drawn at screen
/// `(x, height - y)`.
#[derive(Resource, Clone, Copy)]
pub struct GuiCamera {
    pub camera: Camera2D,
}

impl GuiCamera {
    pub fn new(view_height: f32) -> Self {
        let mut gui = Self {
            camera: camera_at(Vector2::zero(), Vector2::zero()),
        };
        gui.fit_viewport(view_height);
        gui
    }

    /// Keep the origin pinned at the bottom-left corner.
    pub fn fit_viewport(&mut self, view_height: f32) {
        self.camera.target = Vector2::zero();
        self.camera.offset = Vector2 {
            x: 0.0,
            y: view_height,
        };
    }

    /// Camera-space point for a HUD position measured from the bottom-left
    /// corner, for an item `height` pixels tall.
    pub fn hud_point(&self, pos: Vector2, height: f32) -> Vector2 {
        Vector2 {
            x: pos.x,
            y: -(pos.y + height),
        }
    }
}
