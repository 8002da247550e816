use bevy::prelude::*;
use bevy_prototype_lyon::prelude::*;
use bevy_rapier2d::prelude::*;
use bevy_transform_interpolation::prelude::TransformInterpolation;
use plinko_shared::config::GameConfig;
use plinko_shared::contact::{classify, BodyTag, Contact};
use plinko_shared::round::RoundEffect;

use crate::config::GameSettings;
use crate::constants::{color_from_hex, Colors};
use crate::coord::{px_to_world, world_to_px, PxPos};

use super::audio::SoundCue;
use super::confetti::ConfettiField;
use super::core::GameRng;
use super::pins::PinGlow;
use super::round::{award_prize, RoundState};
use super::FixedSet;

pub struct BallPlugin;

const BALL_Z: f32 = 4.0;

/// Role of a collider, attached next to every collider the board spawns.
#[derive(Component, Clone, Copy, Debug)]
pub(crate) struct BodyKind(pub(crate) BodyTag);

#[derive(Component)]
pub(crate) struct Ball;

impl Plugin for BallPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (collision_system, off_board_system)
                .chain()
                .in_set(FixedSet::PostPhysics),
        );
    }
}

/// Bounce combines with the other body by taking the larger coefficient.
pub(crate) fn bounce(coefficient: f32) -> Restitution {
    Restitution {
        coefficient,
        combine_rule: CoefficientCombineRule::Max,
    }
}

/// Friction combines with the other body by taking the smaller coefficient.
pub(crate) fn grip(coefficient: f32) -> Friction {
    Friction {
        coefficient,
        combine_rule: CoefficientCombineRule::Min,
    }
}

pub(crate) fn spawn_ball(commands: &mut Commands, config: &GameConfig, pos: PxPos) -> Entity {
    let world = px_to_world(pos, BALL_Z);
    let radius = config.round.ball_radius;

    commands
        .spawn((
            // Physics
            RigidBody::Dynamic,
            Collider::ball(radius),
            bounce(config.physics.ball_restitution),
            grip(config.physics.ball_friction),
            Damping {
                linear_damping: config.physics.ball_linear_damping,
                angular_damping: 0.0,
            },
            ActiveEvents::COLLISION_EVENTS,
            Ccd::enabled(),
            Velocity::zero(),
            // Transform (shared by physics + visual)
            Transform::from_translation(world),
            TransformInterpolation,
            // Visual
            ShapeBuilder::with(&shapes::Circle {
                radius,
                center: Vec2::ZERO,
            })
            .fill(color_from_hex(Colors::BALL))
            .build(),
            // Game state
            Ball,
            BodyKind(BodyTag::Ball),
        ))
        .id()
}

#[allow(clippy::too_many_arguments)]
fn collision_system(
    mut collision_events: MessageReader<CollisionEvent>,
    q_kind: Query<&BodyKind>,
    mut q_glow: Query<&mut PinGlow>,
    mut round: ResMut<RoundState>,
    mut confetti: ResMut<ConfettiField>,
    mut rng: ResMut<GameRng>,
    settings: Res<GameSettings>,
    mut cues: MessageWriter<SoundCue>,
) {
    for event in collision_events.read() {
        let CollisionEvent::Started(a, b, _) = event else {
            continue;
        };
        let (Ok(kind_a), Ok(kind_b)) = (q_kind.get(*a), q_kind.get(*b)) else {
            continue;
        };

        match classify((*a, kind_a.0), (*b, kind_b.0)) {
            Some(Contact::BallPin { pin, .. }) => {
                if let Ok(mut glow) = q_glow.get_mut(pin) {
                    glow.glow.hit();
                }
                cues.write(SoundCue::PinHit);
            }
            Some(Contact::BallPrize { ball, slot }) => {
                if let Some(effect) = round.controller.prize_contact(ball, slot) {
                    award_prize(effect, &settings.0, &mut confetti, &mut rng, &mut cues);
                }
            }
            None => {}
        }
    }
}

fn off_board_system(
    mut commands: Commands,
    mut round: ResMut<RoundState>,
    q_ball: Query<(Entity, &Transform), With<Ball>>,
) {
    for (entity, transform) in &q_ball {
        let px = world_to_px(transform.translation.truncate());
        if !round.controller.is_off_board(px.y) {
            continue;
        }
        if let Some(RoundEffect::DespawnBall(ball)) = round.controller.ball_lost(entity) {
            debug!("ball {ball:?} fell off the board");
            commands.entity(ball).despawn();
        }
    }
}
