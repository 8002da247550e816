use bevy::prelude::*;
use bevy_prototype_lyon::prelude::*;
use bevy_rapier2d::prelude::*;
use plinko_shared::contact::BodyTag;
use plinko_shared::glow::Glow;

use crate::board::geometry::pins;
use crate::board::pin_logic::{glow_halo_alpha, shading_rings};
use crate::config::GameSettings;
use crate::constants::{color_from_hex, mix_hex, Colors, PIN_GLOW_RADIUS, PIN_SHADING_RINGS};
use crate::coord::{px_to_world, PxPos};

use super::ball::{bounce, grip, BodyKind};
use super::{FixedSet, UpdateSet};

pub struct PinsPlugin;

#[derive(Component)]
pub(crate) struct Pin {
    pub(crate) halo: Entity,
}

#[derive(Component, Default)]
pub(crate) struct PinGlow {
    pub(crate) glow: Glow,
    /// Value used for the last visual update, to skip idle pins.
    last_drawn: u8,
}

#[derive(Component)]
struct PinHalo;

impl Plugin for PinsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_pins)
            .add_systems(FixedUpdate, decay_pin_glow.in_set(FixedSet::Simulate))
            .add_systems(Update, update_pin_visuals.in_set(UpdateSet::Visuals));
    }
}

fn spawn_pins(mut commands: Commands, settings: Res<GameSettings>) {
    let board = &settings.0.board;
    let physics = &settings.0.physics;
    let rings = shading_rings(board.pin_radius, PIN_SHADING_RINGS);

    for def in pins(board) {
        let world = px_to_world(PxPos::from(def.center), 0.0);

        let halo = commands
            .spawn((
                ShapeBuilder::with(&shapes::Circle {
                    radius: def.radius + PIN_GLOW_RADIUS * 0.5,
                    center: Vec2::ZERO,
                })
                .fill(color_from_hex(Colors::PIN_GLOW).with_alpha(0.0))
                .build(),
                Transform::from_xyz(world.x, world.y, 2.0),
                PinHalo,
            ))
            .id();

        // Pin: physics on the parent, shading rings as children
        commands
            .spawn((
                RigidBody::Fixed,
                Collider::ball(def.radius),
                bounce(physics.pin_restitution),
                grip(physics.pin_friction),
                Transform::from_xyz(world.x, world.y, 2.1),
                Visibility::default(),
                BodyKind(BodyTag::Pin),
                Pin { halo },
                PinGlow::default(),
            ))
            .with_children(|parent| {
                for (i, (radius, t)) in rings.iter().enumerate() {
                    parent.spawn((
                        ShapeBuilder::with(&shapes::Circle {
                            radius: *radius,
                            center: Vec2::ZERO,
                        })
                        .fill(mix_hex(Colors::PIN_LIGHT, Colors::PIN_DARK, *t))
                        .build(),
                        Transform::from_xyz(0.0, 0.0, 0.01 * (i + 1) as f32),
                    ));
                }
            });
    }
}

fn decay_pin_glow(settings: Res<GameSettings>, mut q_pins: Query<&mut PinGlow>) {
    let step = settings.0.round.glow_decay;
    for mut pin in &mut q_pins {
        if pin.glow.is_active() {
            pin.glow.decay(step);
        }
    }
}

fn update_pin_visuals(
    mut q_pins: Query<(&mut PinGlow, &Pin)>,
    mut q_halos: Query<&mut Shape, With<PinHalo>>,
) {
    for (mut pin, link) in &mut q_pins {
        let value = pin.glow.value();
        if value == pin.last_drawn {
            continue;
        }
        pin.last_drawn = value;

        if let Ok(mut halo) = q_halos.get_mut(link.halo) {
            if let Some(fill) = halo.fill.as_mut() {
                fill.color = color_from_hex(Colors::PIN_GLOW).with_alpha(glow_halo_alpha(pin.glow));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plinko_shared::config::GameConfig;

    #[test]
    fn pins_use_max_bounce_and_min_friction() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(GameSettings(GameConfig::default()));
        app.add_systems(Startup, spawn_pins);
        app.update();

        let mut q = app.world_mut().query_filtered::<(&Restitution, &Friction), With<Pin>>();
        let mut count = 0;
        for (restitution, friction) in q.iter(app.world()) {
            assert_eq!(restitution.combine_rule, CoefficientCombineRule::Max);
            assert_eq!(friction.coefficient, 0.5);
            assert_eq!(friction.combine_rule, CoefficientCombineRule::Min);
            count += 1;
        }
        assert_eq!(count, 12 * 9);
    }

    #[test]
    fn glow_decays_five_per_tick_to_zero() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(GameSettings(GameConfig::default()));
        app.add_systems(Update, decay_pin_glow);

        let mut glow = PinGlow::default();
        glow.glow.hit();
        let pin = app.world_mut().spawn(glow).id();

        let mut expected = 255u8;
        for _ in 0..60 {
            app.update();
            expected = expected.saturating_sub(5);
            let glow = app.world().get::<PinGlow>(pin).unwrap();
            assert_eq!(glow.glow.value(), expected);
        }
        assert_eq!(expected, 0);
    }
}
