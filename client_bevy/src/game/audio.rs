use bevy::audio::{AudioSinkPlayback, Volume};
use bevy::prelude::*;
use plinko_shared::config::AudioConfig;
use rand::Rng;

use crate::config::GameSettings;

use super::core::GameRng;
use super::UpdateSet;

pub struct SoundPlugin;

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SoundCue {
    /// First press of the session: start the looping track.
    StartMusic,
    ResumeMusic,
    PauseMusic,
    PinHit,
    Win,
    Lose,
}

#[derive(Resource)]
struct SoundAssets {
    music: Handle<AudioSource>,
    pin: Handle<AudioSource>,
    win: Handle<AudioSource>,
    lose: Handle<AudioSource>,
}

#[derive(Component)]
struct BackgroundMusic;

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_sound_assets)
            .add_systems(Update, play_sound_cues.in_set(UpdateSet::Audio));
    }
}

fn load_sound_assets(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(SoundAssets {
        music: asset_server.load("sounds/music.mp3"),
        pin: asset_server.load("sounds/pin.mp3"),
        win: asset_server.load("sounds/win.mp3"),
        lose: asset_server.load("sounds/lose.mp3"),
    });
}

/// Random playback rate for a pin hit, inclusive of both bounds.
fn pin_hit_speed<R: Rng>(rng: &mut R, audio: &AudioConfig) -> f32 {
    if audio.pin_rate_max <= audio.pin_rate_min {
        return audio.pin_rate_min;
    }
    rng.gen_range(audio.pin_rate_min..=audio.pin_rate_max)
}

fn pin_hit_playback<R: Rng>(rng: &mut R, audio: &AudioConfig) -> PlaybackSettings {
    PlaybackSettings::DESPAWN
        .with_volume(Volume::Linear(audio.pin_volume))
        .with_speed(pin_hit_speed(rng, audio))
}

fn play_sound_cues(
    mut commands: Commands,
    mut cues: MessageReader<SoundCue>,
    sounds: Option<Res<SoundAssets>>,
    settings: Res<GameSettings>,
    mut rng: ResMut<GameRng>,
    q_music: Query<&AudioSink, With<BackgroundMusic>>,
    q_music_entity: Query<(), With<BackgroundMusic>>,
) {
    let Some(sounds) = sounds else {
        cues.clear();
        return;
    };
    let audio = &settings.0.audio;

    for cue in cues.read() {
        match cue {
            SoundCue::StartMusic => {
                if !q_music_entity.is_empty() {
                    continue;
                }
                debug!("starting background music");
                commands.spawn((
                    AudioPlayer::new(sounds.music.clone()),
                    PlaybackSettings::LOOP.with_volume(Volume::Linear(audio.music_volume)),
                    BackgroundMusic,
                ));
            }
            SoundCue::ResumeMusic => {
                for sink in &q_music {
                    if sink.is_paused() {
                        sink.play();
                    }
                }
            }
            SoundCue::PauseMusic => {
                for sink in &q_music {
                    sink.pause();
                }
            }
            SoundCue::PinHit => {
                commands.spawn((
                    AudioPlayer::new(sounds.pin.clone()),
                    pin_hit_playback(&mut rng.0, audio),
                ));
            }
            SoundCue::Win => {
                commands.spawn((AudioPlayer::new(sounds.win.clone()), PlaybackSettings::DESPAWN));
            }
            SoundCue::Lose => {
                commands.spawn((AudioPlayer::new(sounds.lose.clone()), PlaybackSettings::DESPAWN));
            }
        }
    }
}
