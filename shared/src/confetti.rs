use rand::Rng;

const START_ALPHA: f32 = 255.0;
const ALPHA_DECAY: f32 = 2.0;
const GRAVITY: f32 = 0.1;

/// One confetti square, in canvas pixels per tick (Y down).
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiParticle {
    pub pos: [f32; 2],
    pub vel: [f32; 2],
    pub acc: [f32; 2],
    pub size: f32,
    pub color: [u8; 3],
    pub alpha: f32,
}

impl ConfettiParticle {
    pub fn random<R: Rng>(rng: &mut R, width: f32) -> Self {
        Self {
            pos: [rng.gen_range(0.0..width), rng.gen_range(-50.0..0.0)],
            vel: [rng.gen_range(-3.0..3.0), rng.gen_range(5.0..10.0)],
            acc: [0.0, GRAVITY],
            size: rng.gen_range(10.0..20.0),
            color: [rng.gen(), rng.gen(), rng.gen()],
            alpha: START_ALPHA,
        }
    }

    pub fn update(&mut self) {
        self.vel[0] += self.acc[0];
        self.vel[1] += self.acc[1];
        self.pos[0] += self.vel[0];
        self.pos[1] += self.vel[1];
        self.alpha -= ALPHA_DECAY;
    }

    pub fn is_finished(&self) -> bool {
        self.alpha < 0.0
    }

    /// Opacity as 0.0..=1.0 for drawing
    pub fn opacity(&self) -> f32 {
        (self.alpha / START_ALPHA).clamp(0.0, 1.0)
    }
}

/// The live confetti set.
#[derive(Debug, Clone, Default)]
pub struct Confetti {
    particles: Vec<ConfettiParticle>,
}

impl Confetti {
    pub fn burst<R: Rng>(&mut self, rng: &mut R, count: usize, width: f32) {
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(ConfettiParticle::random(rng, width));
        }
    }

    /// Advance every particle one tick and drop the fully transparent ones.
    pub fn tick(&mut self) {
        for p in &mut self.particles {
            p.update();
        }
        self.particles.retain(|p| !p.is_finished());
    }

    pub fn particles(&self) -> &[ConfettiParticle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn burst_adds_exactly_count() {
        let mut confetti = Confetti::default();
        confetti.burst(&mut rng(), 100, 1080.0);
        assert_eq!(confetti.len(), 100);
        confetti.burst(&mut rng(), 100, 1080.0);
        assert_eq!(confetti.len(), 200);
    }

    #[test]
    fn spawned_particles_are_within_ranges() {
        let mut confetti = Confetti::default();
        confetti.burst(&mut rng(), 500, 1080.0);
        for p in confetti.particles() {
            assert!((0.0..1080.0).contains(&p.pos[0]));
            assert!((-50.0..0.0).contains(&p.pos[1]));
            assert!((-3.0..3.0).contains(&p.vel[0]));
            assert!((5.0..10.0).contains(&p.vel[1]));
            assert!((10.0..20.0).contains(&p.size));
            assert_eq!(p.alpha, 255.0);
            assert_eq!(p.acc, [0.0, 0.1]);
        }
    }

    #[test]
    fn update_applies_acceleration_before_velocity() {
        let mut p = ConfettiParticle {
            pos: [0.0, 0.0],
            vel: [1.0, 5.0],
            acc: [0.0, 0.1],
            size: 10.0,
            color: [0, 0, 0],
            alpha: 255.0,
        };
        p.update();
        assert!((p.vel[1] - 5.1).abs() < 1e-6);
        assert!((p.pos[1] - 5.1).abs() < 1e-6);
        assert_eq!(p.pos[0], 1.0);
        assert_eq!(p.alpha, 253.0);
    }

    #[test]
    fn opacity_is_non_increasing_and_removed_when_negative() {
        let mut confetti = Confetti::default();
        confetti.burst(&mut rng(), 10, 1080.0);

        let mut last_alpha = 255.0;
        let mut ticks = 0;
        while !confetti.is_empty() {
            confetti.tick();
            ticks += 1;
            for p in confetti.particles() {
                assert!(p.alpha <= last_alpha);
                assert!(p.alpha >= 0.0);
                last_alpha = p.alpha;
            }
        }
        // 255 - 2 * 127 = 1 still visible, tick 128 goes negative
        assert_eq!(ticks, 128);
    }
}
