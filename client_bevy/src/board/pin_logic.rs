use plinko_shared::glow::Glow;

/// Peak alpha of the glow halo behind a freshly hit pin.
pub const GLOW_HALO_MAX_ALPHA: f32 = 0.85;

/// Radius and light-to-dark blend of every shading ring, outermost first.
///
/// Ring `i` (counting down from `rings` to 1) has radius `pin_radius * i / rings`
/// and blend `i / rings`, so the outer ring is darkest and the centre lightest.
pub fn shading_rings(pin_radius: f32, rings: usize) -> Vec<(f32, f32)> {
    (1..=rings)
        .rev()
        .map(|i| {
            let t = i as f32 / rings as f32;
            (pin_radius * t, t)
        })
        .collect()
}

pub fn glow_halo_alpha(glow: Glow) -> f32 {
    GLOW_HALO_MAX_ALPHA * glow.fraction()
}
