use bevy::prelude::*;

use crate::game::round::RoundState;

use super::types::{banner_visibility, HudBanner, HudBannerText};

pub(super) fn update_result_banner(
    round: Res<RoundState>,
    mut q_bar: Query<&mut Visibility, (With<HudBanner>, Without<HudBannerText>)>,
    mut q_text: Query<(&mut Text2d, &mut Visibility), (With<HudBannerText>, Without<HudBanner>)>,
) {
    let message = round.controller.message();
    let visibility = banner_visibility(message.is_some());

    for mut bar in &mut q_bar {
        if *bar != visibility {
            *bar = visibility;
        }
    }

    for (mut text, mut text_visibility) in &mut q_text {
        let wanted = message.unwrap_or("");
        if text.0 != wanted {
            text.0 = wanted.to_string();
        }
        if *text_visibility != visibility {
            *text_visibility = visibility;
        }
    }
}

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use plinko_shared::config::GameConfig;
    use plinko_shared::prize::PrizeSlot;

    use super::*;

    fn make_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(RoundState::new(&GameConfig::default()));
        app.add_systems(Update, update_result_banner);
        app
    }

    fn spawn_banner(app: &mut App) -> (Entity, Entity) {
        let bar = app
            .world_mut()
            .spawn((HudBanner, Visibility::Hidden))
            .id();
        let text = app
            .world_mut()
            .spawn((HudBannerText, Text2d::new(""), Visibility::Hidden))
            .id();
        (bar, text)
    }

    #[test]
    fn banner_hidden_without_message() {
        let mut app = make_test_app();
        let (bar, text) = spawn_banner(&mut app);

        app.update();

        assert_eq!(*app.world().get::<Visibility>(bar).unwrap(), Visibility::Hidden);
        assert_eq!(*app.world().get::<Visibility>(text).unwrap(), Visibility::Hidden);
    }

    #[test]
    fn banner_shows_prize_text_verbatim() {
        let mut app = make_test_app();
        let (bar, text) = spawn_banner(&mut app);
        let ball = app.world_mut().spawn_empty().id();
        {
            let mut round = app.world_mut().resource_mut::<RoundState>();
            round.controller.track(ball);
            round.controller.prize_contact(ball, PrizeSlot::new(7).unwrap());
        }

        app.update();

        assert_eq!(*app.world().get::<Visibility>(bar).unwrap(), Visibility::Inherited);
        assert_eq!(
            *app.world().get::<Visibility>(text).unwrap(),
            Visibility::Inherited
        );
        assert_eq!(app.world().get::<Text2d>(text).unwrap().0, "TENTE\nNOVAMENTE");
    }
}
