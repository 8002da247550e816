use bevy::prelude::*;

use crate::constants::BANNER_FONT_SIZE;

pub(super) const BANNER_Z: f32 = 20.0;
pub(super) const BANNER_TEXT_Z: f32 = 21.0;
pub(super) const BANNER_FONT_PATH: &str = "fonts/banner-bold.ttf";

/// Full-width bar behind the result text.
#[derive(Component)]
pub(super) struct HudBanner;

#[derive(Component)]
pub(super) struct HudBannerText;

pub(super) fn banner_visibility(shown: bool) -> Visibility {
    if shown {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    }
}

/// Result text is set in the bold face at banner size.
pub(super) fn banner_font(font: Handle<Font>) -> TextFont {
    TextFont {
        font,
        font_size: BANNER_FONT_SIZE,
        ..default()
    }
}
