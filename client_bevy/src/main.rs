mod board;
mod config;
mod constants;
mod coord;
mod game;

use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};
use bevy_prototype_lyon::prelude::ShapePlugin;
use bevy_rapier2d::prelude::*;
use bevy_transform_interpolation::prelude::TransformInterpolationPlugin;

use constants::PPM;
use game::{
    BackdropPlugin, BallPlugin, ConfettiPlugin, CorePlugin, HudPlugin, InputPlugin, PinsPlugin,
    RoundPlugin, SoundPlugin, WallsPlugin,
};

fn main() {
    let loaded = config::load_config();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Plinko".to_string(),
                resolution: WindowResolution::new(540, 960),
                present_mode: PresentMode::AutoVsync,
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(PPM).in_fixed_schedule())
        .add_plugins(ShapePlugin)
        .add_plugins(TransformInterpolationPlugin::default())
        .add_plugins(CorePlugin {
            config: loaded.config,
            notes: loaded.notes,
        })
        .add_plugins(BackdropPlugin)
        .add_plugins(WallsPlugin)
        .add_plugins(PinsPlugin)
        .add_plugins(BallPlugin)
        .add_plugins(RoundPlugin)
        .add_plugins(ConfettiPlugin)
        .add_plugins(SoundPlugin)
        .add_plugins(InputPlugin)
        .add_plugins(HudPlugin)
        .run();
}
