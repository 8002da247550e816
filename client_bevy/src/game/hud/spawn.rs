use bevy::prelude::*;
use bevy::text::Justify;

use crate::config::GameSettings;
use crate::constants::{color_from_hex, Colors, BANNER_ALPHA, BANNER_HEIGHT, CANVAS_WIDTH};
use crate::coord::{px_to_world, PxPos};

use super::types::{
    banner_font, HudBanner, HudBannerText, BANNER_FONT_PATH, BANNER_TEXT_Z, BANNER_Z,
};

pub(super) fn spawn_result_banner(
    mut commands: Commands,
    settings: Res<GameSettings>,
    asset_server: Res<AssetServer>,
) {
    let board = &settings.0.board;
    let center = PxPos::new(board.width * 0.5, board.height * 0.5);

    commands.spawn((
        Sprite::from_color(
            Color::BLACK.with_alpha(BANNER_ALPHA),
            Vec2::new(CANVAS_WIDTH, BANNER_HEIGHT),
        ),
        Transform::from_translation(px_to_world(center, BANNER_Z)),
        Visibility::Hidden,
        HudBanner,
    ));

    commands.spawn((
        Text2d::new(""),
        banner_font(asset_server.load(BANNER_FONT_PATH)),
        TextColor(color_from_hex(Colors::BANNER_TEXT)),
        TextLayout::new_with_justify(Justify::Center),
        Transform::from_translation(px_to_world(center, BANNER_TEXT_Z)),
        Visibility::Hidden,
        HudBannerText,
    ));
}
