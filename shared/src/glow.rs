/// Visual-only hit intensity of a pin, 0..=255.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Glow(u8);

impl Glow {
    pub const MAX: u8 = 255;

    pub fn hit(&mut self) {
        self.0 = Self::MAX;
    }

    pub fn decay(&mut self, step: u8) {
        self.0 = self.0.saturating_sub(step);
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_active(self) -> bool {
        self.0 > 0
    }

    /// Intensity as 0.0..=1.0
    pub fn fraction(self) -> f32 {
        self.0 as f32 / Self::MAX as f32
    }
}
