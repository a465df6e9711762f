//! Z-index component for render ordering.
//!
//! Each scene layer gets the index it has in the tile map, so layers are
//! drawn back to front in map order.

use bevy_ecs::prelude::Component;

/// Rendering order hint for 2D drawing.
///
/// Higher values are drawn later (on top). The renderer sorts by `ZIndex`
/// to achieve a painter's algorithm.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);
