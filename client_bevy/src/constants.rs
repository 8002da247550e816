pub const CANVAS_WIDTH: f32 = 1080.0;
pub const CANVAS_HEIGHT: f32 = 1920.0;

/// Rapier pixels_per_meter scaling factor. Rapier divides internally by this
/// so we can work in pixel coordinates everywhere.
pub const PPM: f32 = 100.0;

/// Simulation tick; round timers count these.
pub const PHYSICS_DT: f32 = 1.0 / 60.0;
pub const PHYSICS_SUBSTEPS: usize = 4;
pub const PHYSICS_MAX_STEPS_PER_FRAME: u32 = 4;
pub const PHYSICS_MAX_CATCHUP_SECS: f64 = PHYSICS_DT as f64 * PHYSICS_MAX_STEPS_PER_FRAME as f64;

pub const PIN_SHADING_RINGS: usize = 10;
pub const PIN_GLOW_RADIUS: f32 = 20.0;

pub const BANNER_HEIGHT: f32 = 300.0;
pub const BANNER_FONT_SIZE: f32 = 100.0;

/// Upper bound on confetti squares drawn at once.
pub const CONFETTI_POOL: usize = 300;

#[derive(Clone, Copy)]
pub struct Colors;

impl Colors {
    pub const BACKGROUND: u32 = 0x101820;
    pub const PIN_DARK: u32 = 0x787878;
    pub const PIN_LIGHT: u32 = 0xdcdcdc;
    pub const PIN_GLOW: u32 = 0xadff2f;
    pub const BORDER: u32 = 0x228b22;
    pub const BALL: u32 = 0xc8c8dc;
    pub const BANNER_TEXT: u32 = 0xffffff;
}

pub const BORDER_ALPHA: f32 = 180.0 / 255.0;
pub const BANNER_ALPHA: f32 = 180.0 / 255.0;

pub fn color_from_hex(rgb: u32) -> bevy::prelude::Color {
    let r = ((rgb >> 16) & 0xff) as f32 / 255.0;
    let g = ((rgb >> 8) & 0xff) as f32 / 255.0;
    let b = (rgb & 0xff) as f32 / 255.0;
    bevy::prelude::Color::srgb(r, g, b)
}

pub fn color_from_rgb8(rgb: [u8; 3]) -> bevy::prelude::Color {
    bevy::prelude::Color::srgb_u8(rgb[0], rgb[1], rgb[2])
}

/// Linear blend of two hex colours in sRGB space, `t = 0` gives `from`.
pub fn mix_hex(from: u32, to: u32, t: f32) -> bevy::prelude::Color {
    let a = color_from_hex(from).to_srgba();
    let b = color_from_hex(to).to_srgba();
    let t = t.clamp(0.0, 1.0);
    bevy::prelude::Color::srgb(
        a.red + (b.red - a.red) * t,
        a.green + (b.green - a.green) * t,
        a.blue + (b.blue - a.blue) * t,
    )
}
