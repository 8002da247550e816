use bevy::prelude::Vec2;
use plinko_shared::config::BoardConfig;
use plinko_shared::prize::PrizeSlot;

#[derive(Clone, Copy, Debug)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
}

#[derive(Clone, Copy, Debug)]
pub struct CircleDef {
    pub center: Vec2,
    pub radius: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct RectDef {
    pub center: Vec2,
    pub size: Vec2,
}

#[derive(Clone, Copy, Debug)]
pub struct SlotDef {
    pub slot: PrizeSlot,
    pub rect: RectDef,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

pub const BORDER_COLLIDER_THICKNESS: f32 = 2.0;

/// Staggered pin grid; odd rows shift right by half a column and pins past
/// the right edge margin are dropped.
pub fn pins(cfg: &BoardConfig) -> Vec<CircleDef> {
    let mut out = Vec::with_capacity((cfg.pin_rows * cfg.pin_cols) as usize);
    let max_x = cfg.width - cfg.pin_start_x;

    for row in 0..cfg.pin_rows {
        for col in 0..cfg.pin_cols {
            let mut x = cfg.pin_start_x + col as f32 * cfg.pin_spacing_x;
            if row % 2 == 1 {
                x += cfg.pin_spacing_x * 0.5;
            }
            if x > max_x {
                continue;
            }
            let y = cfg.pin_start_y + row as f32 * cfg.pin_spacing_y;
            out.push(CircleDef {
                center: Vec2::new(x, y),
                radius: cfg.pin_radius,
            });
        }
    }
    out
}

/// Outline of one saw-tooth side wall: edge point, inset point, edge point ...
pub fn side_border(cfg: &BoardConfig, side: Side) -> Vec<Vec2> {
    let (edge, inset) = match side {
        Side::Left => (0.0, cfg.border_tooth_depth),
        Side::Right => (cfg.width, cfg.width - cfg.border_tooth_depth),
    };
    let h = cfg.border_tooth_height;

    let mut vertices = Vec::with_capacity(cfg.border_teeth as usize * 2 + 1);
    for i in 0..cfg.border_teeth {
        let y = cfg.border_start_y + i as f32 * h;
        vertices.push(Vec2::new(edge, y));
        vertices.push(Vec2::new(inset, y + h * 0.5));
    }
    vertices.push(Vec2::new(
        edge,
        cfg.border_start_y + cfg.border_teeth as f32 * h,
    ));
    vertices
}

/// Closed edge loop of a polygon, last vertex joined back to the first.
pub fn polygon_edges(vertices: &[Vec2]) -> Vec<Segment> {
    if vertices.len() < 2 {
        return Vec::new();
    }
    vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(from, to)| Segment {
            from: *from,
            to: *to,
        })
        .collect()
}

pub fn slot_width(cfg: &BoardConfig) -> f32 {
    cfg.width / cfg.slot_count as f32
}

/// Solid walls between neighbouring prize slots.
pub fn dividers(cfg: &BoardConfig) -> Vec<RectDef> {
    let sw = slot_width(cfg);
    let y = cfg.height - cfg.divider_height * 0.5 - cfg.divider_bottom_gap;
    (1..cfg.slot_count)
        .map(|i| RectDef {
            center: Vec2::new(i as f32 * sw, y),
            size: Vec2::new(cfg.divider_width, cfg.divider_height),
        })
        .collect()
}

/// Sensor regions along the bottom edge, one per prize.
pub fn prize_slots(cfg: &BoardConfig) -> Vec<SlotDef> {
    let sw = slot_width(cfg);
    let y = cfg.height - cfg.slot_center_from_bottom;
    PrizeSlot::all()
        .take(cfg.slot_count as usize)
        .map(|slot| SlotDef {
            slot,
            rect: RectDef {
                center: Vec2::new(sw * 0.5 + slot.index() as f32 * sw, y),
                size: Vec2::new(sw, cfg.slot_height),
            },
        })
        .collect()
}
