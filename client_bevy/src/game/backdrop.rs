use bevy::prelude::*;

use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};

pub struct BackdropPlugin;

const BACKGROUND_Z: f32 = 0.0;
/// Drawn over pins, borders and balls, under confetti and the banner.
const FOREGROUND_Z: f32 = 10.0;

impl Plugin for BackdropPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_backdrop);
    }
}

fn canvas_image(image: Handle<Image>) -> Sprite {
    let mut sprite = Sprite::from_image(image);
    sprite.custom_size = Some(Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT));
    sprite
}

fn spawn_backdrop(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.spawn((
        canvas_image(asset_server.load("images/background.jpg")),
        Transform::from_xyz(0.0, 0.0, BACKGROUND_Z),
    ));
    commands.spawn((
        canvas_image(asset_server.load("images/foreground.png")),
        Transform::from_xyz(0.0, 0.0, FOREGROUND_Z),
    ));
}
