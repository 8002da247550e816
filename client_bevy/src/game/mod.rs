mod audio;
mod backdrop;
mod ball;
mod confetti;
mod core;
mod hud;
mod input;
mod pins;
mod round;
mod walls;

pub use audio::SoundPlugin;
pub use backdrop::BackdropPlugin;
pub use ball::BallPlugin;
pub use confetti::ConfettiPlugin;
pub use core::CorePlugin;
pub(crate) use core::{FixedSet, UpdateSet};
pub use hud::HudPlugin;
pub use input::InputPlugin;
pub use pins::PinsPlugin;
pub use round::RoundPlugin;
pub use walls::WallsPlugin;
