use bevy::prelude::*;
use plinko_shared::confetti::Confetti;

use crate::constants::{color_from_rgb8, CONFETTI_POOL};
use crate::coord::{px_to_world, PxPos};

use super::{FixedSet, UpdateSet};

pub struct ConfettiPlugin;

const CONFETTI_Z: f32 = 12.0;

/// Live particles, advanced once per simulation tick.
#[derive(Resource, Default)]
pub(crate) struct ConfettiField {
    pub(crate) confetti: Confetti,
}

/// A reusable square; shows particle `index` when one exists.
#[derive(Component)]
struct ConfettiSprite {
    index: usize,
}

impl Plugin for ConfettiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_confetti_pool)
            .add_systems(FixedUpdate, tick_confetti.in_set(FixedSet::Simulate))
            .add_systems(Update, render_confetti.in_set(UpdateSet::Visuals));
    }
}

fn spawn_confetti_pool(mut commands: Commands) {
    for index in 0..CONFETTI_POOL {
        commands.spawn((
            Sprite::from_color(Color::WHITE, Vec2::ONE),
            Transform::from_xyz(0.0, 0.0, CONFETTI_Z),
            Visibility::Hidden,
            ConfettiSprite { index },
        ));
    }
}

/// Particle positions are the square's top-left corner; sprites anchor at the centre.
fn square_center(pos: [f32; 2], size: f32) -> PxPos {
    PxPos::new(pos[0] + size * 0.5, pos[1] + size * 0.5)
}

fn tick_confetti(mut field: ResMut<ConfettiField>) {
    if !field.confetti.is_empty() {
        field.confetti.tick();
    }
}

fn render_confetti(
    field: Res<ConfettiField>,
    mut q_sprites: Query<(&ConfettiSprite, &mut Sprite, &mut Transform, &mut Visibility)>,
) {
    let particles = field.confetti.particles();

    for (slot, mut sprite, mut transform, mut visibility) in &mut q_sprites {
        let Some(p) = particles.get(slot.index) else {
            if *visibility != Visibility::Hidden {
                *visibility = Visibility::Hidden;
            }
            continue;
        };

        transform.translation = px_to_world(square_center(p.pos, p.size), CONFETTI_Z);
        sprite.color = color_from_rgb8(p.color).with_alpha(p.opacity());
        sprite.custom_size = Some(Vec2::splat(p.size));
        *visibility = Visibility::Inherited;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn make_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.init_resource::<ConfettiField>();
        app
    }

    fn burst(app: &mut App, count: usize) {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        app.world_mut()
            .resource_mut::<ConfettiField>()
            .confetti
            .burst(&mut rng, count, 1080.0);
    }

    #[test]
    fn confetti_burns_out_after_128_ticks() {
        let mut app = make_test_app();
        app.add_systems(Update, tick_confetti);
        burst(&mut app, 100);

        for _ in 0..127 {
            app.update();
        }
        assert_eq!(app.world().resource::<ConfettiField>().confetti.len(), 100);

        app.update();
        assert!(app.world().resource::<ConfettiField>().confetti.is_empty());
    }

    #[test]
    fn pool_shows_one_sprite_per_particle() {
        let mut app = make_test_app();
        app.add_systems(Startup, spawn_confetti_pool);
        app.add_systems(Update, render_confetti);
        burst(&mut app, 3);
        app.update();

        let field = app.world().resource::<ConfettiField>();
        let first = field.confetti.particles()[0].clone();

        let mut q = app
            .world_mut()
            .query::<(&ConfettiSprite, &Sprite, &Transform, &Visibility)>();
        let mut shown = 0;
        for (slot, sprite, transform, visibility) in q.iter(app.world()) {
            if slot.index < 3 {
                assert_eq!(*visibility, Visibility::Inherited);
                shown += 1;
            } else {
                assert_eq!(*visibility, Visibility::Hidden);
            }
            if slot.index == 0 {
                let expected = px_to_world(square_center(first.pos, first.size), CONFETTI_Z);
                assert!((transform.translation - expected).length() < 1e-4);
                assert_eq!(sprite.custom_size, Some(Vec2::splat(first.size)));
            }
        }
        assert_eq!(shown, 3);
    }
}
