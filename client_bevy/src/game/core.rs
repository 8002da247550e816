use bevy::prelude::*;
use bevy::time::Virtual;
use bevy::window::PrimaryWindow;
use bevy_rapier2d::prelude::{PhysicsSet, RapierConfiguration, TimestepMode};
use plinko_shared::config::GameConfig;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

use crate::config::GameSettings;
use crate::constants::{
    color_from_hex, Colors, CANVAS_HEIGHT, CANVAS_WIDTH, PHYSICS_DT, PHYSICS_MAX_CATCHUP_SECS,
    PHYSICS_SUBSTEPS,
};

use super::audio::SoundCue;
use super::confetti::ConfettiField;
use super::input::PointerPressed;
use super::round::RoundState;

#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub(crate) enum UpdateSet {
    Input,
    Round,
    Audio,
    Visuals,
}

#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub(crate) enum FixedSet {
    Simulate,
    PostPhysics,
}

#[derive(Resource)]
pub(crate) struct GameRng(pub(crate) ChaCha8Rng);

impl GameRng {
    pub(crate) fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(ChaCha8Rng::seed_from_u64(seed)),
            None => Self(ChaCha8Rng::from_entropy()),
        }
    }
}

/// Messages produced while resolving the config, logged once logging is up.
#[derive(Resource, Default)]
struct ConfigNotes(Vec<String>);

pub struct CorePlugin {
    pub config: GameConfig,
    pub notes: Vec<String>,
}

#[derive(Component)]
pub(crate) struct MainCamera;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(GameSettings(self.config.clone()))
            .insert_resource(ConfigNotes(self.notes.clone()))
            .insert_resource(GameRng::from_seed(self.config.rng_seed))
            .insert_resource(RoundState::new(&self.config))
            .init_resource::<ConfettiField>()
            .add_message::<PointerPressed>()
            .add_message::<SoundCue>()
            .insert_resource(ClearColor(color_from_hex(Colors::BACKGROUND)))
            .insert_resource(Time::<Fixed>::from_seconds(PHYSICS_DT as f64))
            .insert_resource(TimestepMode::Fixed {
                dt: PHYSICS_DT,
                substeps: PHYSICS_SUBSTEPS,
            })
            .configure_sets(
                Update,
                (
                    UpdateSet::Input,
                    UpdateSet::Round,
                    UpdateSet::Audio,
                    UpdateSet::Visuals,
                )
                    .chain(),
            )
            .configure_sets(
                FixedUpdate,
                (FixedSet::Simulate, FixedSet::PostPhysics).chain(),
            )
            .configure_sets(
                FixedUpdate,
                FixedSet::Simulate.before(PhysicsSet::SyncBackend),
            )
            .configure_sets(
                FixedUpdate,
                FixedSet::PostPhysics.after(PhysicsSet::Writeback),
            )
            .add_systems(
                Startup,
                (
                    log_config,
                    setup_camera,
                    configure_virtual_time_catchup_cap,
                    configure_rapier_gravity,
                )
                    .chain(),
            )
            .add_systems(Update, fit_camera_to_canvas);
    }
}

fn log_config(settings: Res<GameSettings>, notes: Res<ConfigNotes>) {
    for note in &notes.0 {
        warn!("config: {note}");
    }
    let cfg = &settings.0;
    info!(
        "plinko board {}x{}, {} slots, single ball: {}, seed: {:?}",
        cfg.board.width, cfg.board.height, cfg.board.slot_count, cfg.round.single_ball, cfg.rng_seed
    );
}

fn setup_camera(mut commands: Commands) {
    // WebGL2 MSAA is expensive (often CPU fallback); lyon already provides AA via tessellation.
    #[cfg(target_arch = "wasm32")]
    let msaa = Msaa::Off;
    #[cfg(not(target_arch = "wasm32"))]
    let msaa = Msaa::Sample4;

    commands.spawn((Camera2d, msaa, MainCamera));
}

fn configure_rapier_gravity(
    settings: Res<GameSettings>,
    mut q_config: Query<&mut RapierConfiguration>,
) {
    for mut cfg in &mut q_config {
        // Canvas gravity points down (Y-down); Bevy world is Y-up.
        cfg.gravity = Vec2::new(0.0, -settings.0.physics.gravity);
    }
}

fn configure_virtual_time_catchup_cap(mut virtual_time: ResMut<Time<Virtual>>) {
    // A stalled tab must not replay seconds of physics in one frame.
    virtual_time.set_max_delta(Duration::from_secs_f64(PHYSICS_MAX_CATCHUP_SECS));
}

fn fit_camera_to_canvas(
    q_window: Query<&Window, With<PrimaryWindow>>,
    mut q_projection: Query<&mut Projection, With<MainCamera>>,
) {
    let Ok(window) = q_window.single() else {
        return;
    };

    if window.width() <= 0.0 || window.height() <= 0.0 {
        return;
    }

    let scale_x = CANVAS_WIDTH / window.width();
    let scale_y = CANVAS_HEIGHT / window.height();
    let target_scale = scale_x.max(scale_y).max(0.0001);

    for mut projection in &mut q_projection {
        if let Projection::Orthographic(ortho) = &mut *projection {
            ortho.scale = target_scale;
        }
    }
}
