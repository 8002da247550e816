use bevy::prelude::{Vec2, Vec3};

use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Canvas pixel coordinates (origin top-left, Y-down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PxPos {
    pub x: f32,
    pub y: f32,
}

impl PxPos {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Vec2> for PxPos {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

/// Convert canvas pixel coordinates (Y-down) to Bevy world coordinates (Y-up).
pub fn px_to_world(px: PxPos, z: f32) -> Vec3 {
    let wx = px.x - CANVAS_WIDTH * 0.5;
    let wy = (CANVAS_HEIGHT - px.y) - CANVAS_HEIGHT * 0.5;
    Vec3::new(wx, wy, z)
}

pub fn px_to_world2(px: PxPos) -> Vec2 {
    px_to_world(px, 0.0).truncate()
}

/// Convert Bevy world coordinates (Y-up) to canvas pixel coordinates (Y-down).
pub fn world_to_px(world_xy: Vec2) -> PxPos {
    PxPos {
        x: world_xy.x + CANVAS_WIDTH * 0.5,
        y: CANVAS_HEIGHT * 0.5 - world_xy.y,
    }
}
