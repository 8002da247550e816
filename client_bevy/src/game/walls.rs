use bevy::prelude::*;
use bevy_prototype_lyon::prelude::*;
use bevy_rapier2d::prelude::*;
use plinko_shared::contact::BodyTag;

use crate::board::geometry::{
    dividers, polygon_edges, prize_slots, side_border, Segment, Side,
    BORDER_COLLIDER_THICKNESS,
};
use crate::config::GameSettings;
use crate::constants::{color_from_hex, Colors, BORDER_ALPHA};
use crate::coord::{px_to_world, px_to_world2, PxPos};

use super::ball::{bounce, BodyKind};

pub struct WallsPlugin;

impl Plugin for WallsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_side_borders, spawn_dividers, spawn_prize_slots));
    }
}

fn spawn_side_borders(mut commands: Commands, settings: Res<GameSettings>) {
    let board = &settings.0.board;
    let restitution = settings.0.physics.border_restitution;
    let border_color = color_from_hex(Colors::BORDER).with_alpha(BORDER_ALPHA);

    let body = commands
        .spawn((
            RigidBody::Fixed,
            Transform::default(),
            GlobalTransform::default(),
        ))
        .id();

    for side in [Side::Left, Side::Right] {
        let vertices = side_border(board, side);
        for seg in polygon_edges(&vertices) {
            spawn_segment_collider(&mut commands, body, seg, restitution);
        }

        let points: Vec<Vec2> = vertices
            .iter()
            .map(|v| px_to_world2(PxPos::from(*v)))
            .collect();
        commands.spawn((
            ShapeBuilder::with(&shapes::Polygon {
                points,
                closed: true,
            })
            .fill(border_color)
            .build(),
            Transform::from_xyz(0.0, 0.0, 1.0),
        ));
    }
}

fn spawn_segment_collider(commands: &mut Commands, parent: Entity, seg: Segment, restitution: f32) {
    let from = px_to_world2(PxPos::from(seg.from));
    let to = px_to_world2(PxPos::from(seg.to));
    let mid = (from + to) * 0.5;
    let d = to - from;
    let len = d.length();
    let angle = d.y.atan2(d.x);

    let child = commands
        .spawn((
            Collider::cuboid(len * 0.5, BORDER_COLLIDER_THICKNESS),
            bounce(restitution),
            Transform::from_xyz(mid.x, mid.y, 0.0).with_rotation(Quat::from_rotation_z(angle)),
            GlobalTransform::default(),
            BodyKind(BodyTag::Border),
        ))
        .id();

    commands.entity(parent).add_child(child);
}

/// Dividers are physics only; the foreground image draws them.
fn spawn_dividers(mut commands: Commands, settings: Res<GameSettings>) {
    for rect in dividers(&settings.0.board) {
        let world = px_to_world(PxPos::from(rect.center), 0.0);
        commands.spawn((
            RigidBody::Fixed,
            Collider::cuboid(rect.size.x * 0.5, rect.size.y * 0.5),
            Transform::from_translation(world),
            BodyKind(BodyTag::Divider),
        ));
    }
}

fn spawn_prize_slots(mut commands: Commands, settings: Res<GameSettings>) {
    for def in prize_slots(&settings.0.board) {
        let world = px_to_world(PxPos::from(def.rect.center), 0.0);
        commands.spawn((
            RigidBody::Fixed,
            Collider::cuboid(def.rect.size.x * 0.5, def.rect.size.y * 0.5),
            Sensor,
            ActiveEvents::COLLISION_EVENTS,
            Transform::from_translation(world),
            BodyKind(BodyTag::Prize(def.slot)),
        ));
    }
}
