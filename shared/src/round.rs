//! Round lifecycle: one ball drops, lands in a prize slot, the result is shown
//! for a fixed number of ticks, then the board is ready again.
//!
//! The controller owns no physics. It decides and the caller carries out the
//! returned [`RoundEffect`]s (spawn/despawn bodies, play sounds, spawn confetti).

use rand::Rng;
use tracing::debug;

use crate::config::{BoardConfig, RoundConfig};
use crate::prize::{Prize, PrizeSlot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    Idle,
    BallInFlight,
    ResultDisplaying,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundEffect<B> {
    /// First press of the session; background music begins looping.
    StartMusic,
    /// Create a ball at canvas position (x, y) and register it with `track`.
    /// Background music resumes if it was paused.
    SpawnBall { x: f32, y: f32 },
    /// A prize was awarded. Music pauses and the outcome cue plays.
    ShowResult {
        slot: PrizeSlot,
        prize: &'static Prize,
    },
    DespawnBall(B),
    ClearResult,
}

#[derive(Debug, Clone, Copy)]
struct PendingRemoval<B> {
    ball: B,
    ticks_left: u32,
}

#[derive(Debug, Clone)]
pub struct RoundController<B> {
    config: RoundConfig,
    width: f32,
    height: f32,
    music_started: bool,
    ball_in_flight: bool,
    balls: Vec<B>,
    message: Option<&'static str>,
    message_timer: u32,
    pending_removals: Vec<PendingRemoval<B>>,
}

impl<B: Copy + PartialEq + std::fmt::Debug> RoundController<B> {
    pub fn new(config: RoundConfig, board: &BoardConfig) -> Self {
        Self {
            config,
            width: board.width,
            height: board.height,
            music_started: false,
            ball_in_flight: false,
            balls: Vec::new(),
            message: None,
            message_timer: 0,
            pending_removals: Vec::new(),
        }
    }

    pub fn phase(&self) -> RoundPhase {
        if self.message_timer > 0 {
            RoundPhase::ResultDisplaying
        } else if self.ball_in_flight {
            RoundPhase::BallInFlight
        } else {
            RoundPhase::Idle
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        self.message
    }

    pub fn message_timer(&self) -> u32 {
        self.message_timer
    }

    pub fn is_ball_in_flight(&self) -> bool {
        self.ball_in_flight
    }

    pub fn live_balls(&self) -> &[B] {
        &self.balls
    }

    /// Pointer press at canvas position (x, y).
    pub fn press<R: Rng>(&mut self, x: f32, y: f32, rng: &mut R) -> Vec<RoundEffect<B>> {
        let mut effects = Vec::new();

        if !self.music_started {
            self.music_started = true;
            effects.push(RoundEffect::StartMusic);
        }

        let inside = x > 0.0 && x < self.width && y > 0.0 && y < self.height;
        if !inside {
            return effects;
        }
        if self.config.single_ball && self.ball_in_flight {
            debug!("press ignored, ball already in flight");
            return effects;
        }

        self.ball_in_flight = true;
        let margin = self.config.spawn_margin;
        let spawn_x = rng.gen_range(margin..=self.width - margin);
        effects.push(RoundEffect::SpawnBall {
            x: spawn_x,
            y: self.config.spawn_y,
        });
        debug!(spawn_x, "ball dropped");
        effects
    }

    /// Register the body created for a `SpawnBall` effect.
    pub fn track(&mut self, ball: B) {
        self.balls.push(ball);
    }

    /// A ball started overlapping a prize sensor.
    pub fn prize_contact(&mut self, ball: B, slot: PrizeSlot) -> Option<RoundEffect<B>> {
        if self.message_timer > 0 {
            return None;
        }
        let idx = self.balls.iter().position(|b| *b == ball)?;
        self.balls.swap_remove(idx);

        let prize = slot.prize();
        self.message = Some(prize.text);
        self.message_timer = self.config.message_duration_ticks;
        self.pending_removals.push(PendingRemoval {
            ball,
            ticks_left: self.config.removal_delay_ticks,
        });
        debug!(slot = slot.index(), outcome = ?prize.outcome, "prize awarded");

        Some(RoundEffect::ShowResult { slot, prize })
    }

    /// A ball left the board through the bottom edge without scoring.
    pub fn ball_lost(&mut self, ball: B) -> Option<RoundEffect<B>> {
        let tracked = match self.balls.iter().position(|b| *b == ball) {
            Some(idx) => {
                self.balls.swap_remove(idx);
                true
            }
            None => false,
        };
        let before = self.pending_removals.len();
        self.pending_removals.retain(|p| p.ball != ball);
        let cancelled = self.pending_removals.len() != before;

        if !tracked && !cancelled {
            return None;
        }
        self.ball_in_flight = false;
        debug!(?ball, "ball left the board");
        Some(RoundEffect::DespawnBall(ball))
    }

    /// Whether a ball at canvas y has fallen past the bottom safety margin.
    pub fn is_off_board(&self, y: f32) -> bool {
        y > self.height + self.config.off_board_margin
    }

    /// Advance one simulation tick.
    pub fn tick(&mut self) -> Vec<RoundEffect<B>> {
        let mut effects = Vec::new();

        for pending in &mut self.pending_removals {
            pending.ticks_left = pending.ticks_left.saturating_sub(1);
        }
        self.pending_removals.retain(|p| {
            if p.ticks_left == 0 {
                effects.push(RoundEffect::DespawnBall(p.ball));
                false
            } else {
                true
            }
        });

        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
                self.ball_in_flight = false;
                debug!("result cleared");
                effects.push(RoundEffect::ClearResult);
            }
        }
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::prize::Outcome;

    fn controller() -> RoundController<u32> {
        RoundController::new(RoundConfig::default(), &BoardConfig::default())
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn drop_ball(round: &mut RoundController<u32>, rng: &mut ChaCha8Rng, id: u32) -> (f32, f32) {
        let effects = round.press(540.0, 960.0, rng);
        let spawn = effects.iter().find_map(|e| match e {
            RoundEffect::SpawnBall { x, y } => Some((*x, *y)),
            _ => None,
        });
        let spawn = spawn.expect("press while idle spawns a ball");
        round.track(id);
        spawn
    }

    fn slot(index: usize) -> PrizeSlot {
        PrizeSlot::new(index).unwrap()
    }

    mod press {
        use super::*;

        #[test]
        fn first_press_starts_music_once() {
            let mut round = controller();
            let mut rng = rng();
            let first = round.press(-10.0, 5.0, &mut rng);
            assert_eq!(first, vec![RoundEffect::StartMusic]);
            let second = round.press(-10.0, 5.0, &mut rng);
            assert!(second.is_empty());
        }

        #[test]
        fn spawns_inside_safe_margin_at_drop_height() {
            let mut rng = rng();
            for id in 0..200 {
                let mut round = controller();
                let (x, y) = drop_ball(&mut round, &mut rng, id);
                assert!((150.0..=930.0).contains(&x), "x = {x}");
                assert_eq!(y, 180.0);
                assert_eq!(round.phase(), RoundPhase::BallInFlight);
            }
        }

        #[test]
        fn presses_on_or_outside_the_edge_are_ignored() {
            let mut round = controller();
            let mut rng = rng();
            for (x, y) in [(0.0, 500.0), (1080.0, 500.0), (500.0, 0.0), (500.0, 1920.0)] {
                let effects = round.press(x, y, &mut rng);
                assert!(!effects
                    .iter()
                    .any(|e| matches!(e, RoundEffect::SpawnBall { .. })));
            }
            assert_eq!(round.phase(), RoundPhase::Idle);
        }

        #[test]
        fn live_ball_count_never_exceeds_one() {
            let mut round = controller();
            let mut rng = rng();
            let mut next_id = 0;
            for _ in 0..50 {
                for e in round.press(540.0, 960.0, &mut rng) {
                    if matches!(e, RoundEffect::SpawnBall { .. }) {
                        round.track(next_id);
                        next_id += 1;
                    }
                }
                assert!(round.live_balls().len() <= 1);
            }
            assert_eq!(next_id, 1);
        }

        #[test]
        fn looser_variant_allows_many_balls() {
            let config = RoundConfig {
                single_ball: false,
                ..RoundConfig::default()
            };
            let mut round = RoundController::<u32>::new(config, &BoardConfig::default());
            let mut rng = rng();
            for id in 0..3 {
                drop_ball(&mut round, &mut rng, id);
            }
            assert_eq!(round.live_balls().len(), 3);
        }

        #[test]
        fn press_during_result_is_ignored() {
            let mut round = controller();
            let mut rng = rng();
            drop_ball(&mut round, &mut rng, 1);
            round.prize_contact(1, slot(0)).unwrap();
            let effects = round.press(540.0, 960.0, &mut rng);
            assert!(effects.is_empty());
        }
    }

    mod prize_hit {
        use super::*;

        #[test]
        fn shows_prize_text_for_slot() {
            let mut round = controller();
            let mut rng = rng();
            drop_ball(&mut round, &mut rng, 1);

            let effect = round.prize_contact(1, slot(2));
            match effect {
                Some(RoundEffect::ShowResult { slot: s, prize }) => {
                    assert_eq!(s.index(), 2);
                    assert_eq!(prize.outcome, Outcome::Lose);
                }
                other => panic!("unexpected effect {other:?}"),
            }
            assert_eq!(round.message(), Some("NÃO FOI\nDESSA VEZ"));
            assert_eq!(round.message_timer(), 180);
            assert_eq!(round.phase(), RoundPhase::ResultDisplaying);
            assert!(round.live_balls().is_empty());
        }

        #[test]
        fn second_hit_while_message_active_is_noop() {
            let mut round = controller();
            let mut rng = rng();
            drop_ball(&mut round, &mut rng, 1);
            assert!(round.prize_contact(1, slot(1)).is_some());
            round.tick();
            assert!(round.prize_contact(1, slot(4)).is_none());
            assert_eq!(round.message(), Some("VOCÊ\nGANHOU"));
            assert_eq!(round.message_timer(), 179);
        }

        #[test]
        fn untracked_ball_is_ignored() {
            let mut round = controller();
            assert!(round.prize_contact(99, slot(1)).is_none());
            assert_eq!(round.phase(), RoundPhase::Idle);
        }

        #[test]
        fn ball_is_removed_after_delay() {
            let mut round = controller();
            let mut rng = rng();
            drop_ball(&mut round, &mut rng, 1);
            round.prize_contact(1, slot(3)).unwrap();

            for _ in 0..5 {
                assert!(round.tick().is_empty());
            }
            assert_eq!(round.tick(), vec![RoundEffect::DespawnBall(1)]);
            for _ in 0..10 {
                assert!(!round.tick().contains(&RoundEffect::DespawnBall(1)));
            }
        }
    }

    mod countdown {
        use super::*;

        #[test]
        fn clears_exactly_after_duration() {
            let mut round = controller();
            let mut rng = rng();
            drop_ball(&mut round, &mut rng, 1);
            round.prize_contact(1, slot(0)).unwrap();

            for tick in 1..180 {
                let effects = round.tick();
                assert!(!effects.contains(&RoundEffect::ClearResult), "tick {tick}");
                assert!(round.message().is_some());
                assert!(round.is_ball_in_flight());
            }
            let effects = round.tick();
            assert!(effects.contains(&RoundEffect::ClearResult));
            assert_eq!(round.message_timer(), 0);
            assert_eq!(round.message(), None);
            assert!(!round.is_ball_in_flight());
            assert_eq!(round.phase(), RoundPhase::Idle);
        }

        #[test]
        fn next_ball_allowed_after_clear() {
            let mut round = controller();
            let mut rng = rng();
            drop_ball(&mut round, &mut rng, 1);
            round.prize_contact(1, slot(5)).unwrap();
            for _ in 0..180 {
                round.tick();
            }
            drop_ball(&mut round, &mut rng, 2);
            assert_eq!(round.live_balls(), &[2]);
        }

        #[test]
        fn idle_tick_does_nothing() {
            let mut round = controller();
            assert!(round.tick().is_empty());
            assert_eq!(round.phase(), RoundPhase::Idle);
        }
    }

    mod lost_ball {
        use super::*;

        #[test]
        fn off_board_threshold() {
            let round = controller();
            assert!(!round.is_off_board(2020.0));
            assert!(round.is_off_board(2020.5));
        }

        #[test]
        fn clears_in_flight_flag() {
            let mut round = controller();
            let mut rng = rng();
            drop_ball(&mut round, &mut rng, 1);
            assert_eq!(round.ball_lost(1), Some(RoundEffect::DespawnBall(1)));
            assert!(round.live_balls().is_empty());
            assert_eq!(round.phase(), RoundPhase::Idle);
            assert_eq!(round.ball_lost(1), None);
        }

        #[test]
        fn cancels_pending_removal() {
            let mut round = controller();
            let mut rng = rng();
            drop_ball(&mut round, &mut rng, 1);
            round.prize_contact(1, slot(6)).unwrap();

            assert_eq!(round.ball_lost(1), Some(RoundEffect::DespawnBall(1)));
            for _ in 0..20 {
                assert!(!round.tick().contains(&RoundEffect::DespawnBall(1)));
            }
        }
    }
}
