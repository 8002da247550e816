use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::coord::{world_to_px, PxPos};

use super::core::MainCamera;
use super::UpdateSet;

pub struct InputPlugin;

/// A click or touch, already mapped to canvas pixels.
#[derive(Message, Clone, Copy, Debug)]
pub(crate) struct PointerPressed {
    pub(crate) pos: PxPos,
}

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, input_system.in_set(UpdateSet::Input));
    }
}

fn input_system(
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    q_window: Query<&Window, With<PrimaryWindow>>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut presses: MessageWriter<PointerPressed>,
) {
    let Ok((camera, camera_transform)) = q_camera.single() else {
        return;
    };

    let mut screen_points: Vec<Vec2> = touches
        .iter_just_pressed()
        .map(|touch| touch.position())
        .collect();
    if mouse.just_pressed(MouseButton::Left) {
        if let Some(cursor) = q_window.single().ok().and_then(|w| w.cursor_position()) {
            screen_points.push(cursor);
        }
    }

    for screen in screen_points {
        match camera.viewport_to_world_2d(camera_transform, screen) {
            Ok(world) => {
                presses.write(PointerPressed {
                    pos: world_to_px(world),
                });
            }
            Err(err) => debug!("press at {screen:?} outside viewport: {err:?}"),
        }
    }
}
