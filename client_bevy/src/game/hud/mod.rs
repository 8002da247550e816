mod spawn;
mod systems;
mod types;

use bevy::prelude::*;

use super::UpdateSet;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn::spawn_result_banner)
            .add_systems(
                Update,
                systems::update_result_banner.in_set(UpdateSet::Visuals),
            );
    }
}
