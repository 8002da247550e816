use bevy::prelude::*;
use plinko_shared::config::GameConfig;
use plinko_shared::prize::Outcome;
use plinko_shared::round::{RoundController, RoundEffect};

use crate::config::GameSettings;
use crate::coord::PxPos;

use super::audio::SoundCue;
use super::ball::spawn_ball;
use super::confetti::ConfettiField;
use super::core::GameRng;
use super::input::PointerPressed;
use super::{FixedSet, UpdateSet};

pub struct RoundPlugin;

/// Round lifecycle state shared by simulation (writer) and visuals (reader).
#[derive(Resource)]
pub(crate) struct RoundState {
    pub(crate) controller: RoundController<Entity>,
}

impl RoundState {
    pub(crate) fn new(config: &GameConfig) -> Self {
        Self {
            controller: RoundController::new(config.round.clone(), &config.board),
        }
    }
}

impl Plugin for RoundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, press_system.in_set(UpdateSet::Round))
            .add_systems(FixedUpdate, tick_round_system.in_set(FixedSet::Simulate));
    }
}

fn press_system(
    mut commands: Commands,
    mut presses: MessageReader<PointerPressed>,
    mut round: ResMut<RoundState>,
    mut rng: ResMut<GameRng>,
    settings: Res<GameSettings>,
    mut cues: MessageWriter<SoundCue>,
) {
    for press in presses.read() {
        let effects = round.controller.press(press.pos.x, press.pos.y, &mut rng.0);
        for effect in effects {
            match effect {
                RoundEffect::StartMusic => {
                    cues.write(SoundCue::StartMusic);
                }
                RoundEffect::SpawnBall { x, y } => {
                    let ball = spawn_ball(&mut commands, &settings.0, PxPos::new(x, y));
                    round.controller.track(ball);
                    cues.write(SoundCue::ResumeMusic);
                }
                _ => {}
            }
        }
    }
}

fn tick_round_system(mut commands: Commands, mut round: ResMut<RoundState>) {
    for effect in round.controller.tick() {
        match effect {
            RoundEffect::DespawnBall(ball) => {
                commands.entity(ball).despawn();
            }
            RoundEffect::ClearResult => {
                debug!("result banner cleared");
            }
            _ => {}
        }
    }
}

/// Carry out a prize award: pause music, play the outcome cue and throw
/// confetti on a win.
pub(crate) fn award_prize(
    effect: RoundEffect<Entity>,
    config: &GameConfig,
    confetti: &mut ConfettiField,
    rng: &mut GameRng,
    cues: &mut MessageWriter<SoundCue>,
) {
    let RoundEffect::ShowResult { slot, prize } = effect else {
        return;
    };
    info!("ball landed in slot {} ({:?})", slot.index(), prize.outcome);

    cues.write(SoundCue::PauseMusic);
    match prize.outcome {
        Outcome::Win => {
            cues.write(SoundCue::Win);
            confetti.confetti.burst(
                &mut rng.0,
                config.round.confetti_count,
                config.board.width,
            );
        }
        Outcome::Lose => {
            cues.write(SoundCue::Lose);
        }
        Outcome::Retry => {}
    }
}
