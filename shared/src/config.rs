use serde::{Deserialize, Serialize};

/// Board geometry, in canvas pixels (origin top-left, Y down).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    pub width: f32,
    pub height: f32,
    pub pin_rows: u32,
    pub pin_cols: u32,
    pub pin_spacing_x: f32,
    pub pin_spacing_y: f32,
    pub pin_start_x: f32,
    pub pin_start_y: f32,
    pub pin_radius: f32,
    pub border_teeth: u32,
    /// Vertical extent of one saw tooth
    pub border_tooth_height: f32,
    /// How far a tooth reaches into the board
    pub border_tooth_depth: f32,
    pub border_start_y: f32,
    pub slot_count: u32,
    pub slot_height: f32,
    /// Distance from the bottom edge to the slot sensor centre
    pub slot_center_from_bottom: f32,
    pub divider_width: f32,
    pub divider_height: f32,
    pub divider_bottom_gap: f32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 1080.0,
            height: 1920.0,
            pin_rows: 12,
            pin_cols: 9,
            pin_spacing_x: 100.0,
            pin_spacing_y: 112.0,
            pin_start_x: 90.0,
            pin_start_y: 320.0,
            pin_radius: 10.0,
            border_teeth: 13,
            border_tooth_height: 110.0,
            border_tooth_depth: 40.0,
            border_start_y: 270.0,
            slot_count: 8,
            slot_height: 100.0,
            slot_center_from_bottom: 50.0,
            divider_width: 15.0,
            divider_height: 250.0,
            divider_bottom_gap: 40.0,
        }
    }
}

/// Round lifecycle tuning. Durations are in simulation ticks (60 per second).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoundConfig {
    /// Only one ball may be in flight at a time
    pub single_ball: bool,
    pub message_duration_ticks: u32,
    /// Delay between a prize hit and removal of the scoring ball
    pub removal_delay_ticks: u32,
    pub confetti_count: usize,
    pub spawn_margin: f32,
    pub spawn_y: f32,
    pub ball_radius: f32,
    /// A ball this far below the bottom edge counts as lost
    pub off_board_margin: f32,
    pub glow_decay: u8,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            single_ball: true,
            message_duration_ticks: 180,
            removal_delay_ticks: 6,
            confetti_count: 100,
            spawn_margin: 150.0,
            spawn_y: 180.0,
            ball_radius: 25.0,
            off_board_margin: 100.0,
            glow_decay: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhysicsConfig {
    /// Downward acceleration in pixels/s²
    pub gravity: f32,
    pub ball_restitution: f32,
    pub ball_friction: f32,
    pub pin_restitution: f32,
    pub pin_friction: f32,
    pub border_restitution: f32,
    /// Linear damping on the ball, standing in for air drag.
    pub ball_linear_damping: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 2400.0,
            ball_restitution: 0.5,
            ball_friction: 0.01,
            pin_restitution: 0.5,
            pin_friction: 0.5,
            border_restitution: 1.5,
            ball_linear_damping: 0.6,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AudioConfig {
    pub music_volume: f32,
    pub pin_volume: f32,
    pub pin_rate_min: f32,
    pub pin_rate_max: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            music_volume: 0.15,
            pin_volume: 0.5,
            pin_rate_min: 0.8,
            pin_rate_max: 1.2,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    pub board: BoardConfig,
    pub round: RoundConfig,
    pub physics: PhysicsConfig,
    pub audio: AudioConfig,
    /// Fixed RNG seed; `None` seeds from OS entropy
    pub rng_seed: Option<u64>,
}

impl GameConfig {
    /// Parse a (possibly partial) JSON document; missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, String> {
        let config: GameConfig =
            serde_json::from_str(text).map_err(|e| format!("invalid config json: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        let b = &self.board;
        if !(b.width.is_finite() && b.width > 0.0 && b.height.is_finite() && b.height > 0.0) {
            return Err("board width and height must be finite and > 0".to_string());
        }
        if b.slot_count as usize != crate::prize::PRIZES.len() {
            return Err(format!(
                "slot_count must be {} to match the prize table",
                crate::prize::PRIZES.len()
            ));
        }
        if b.pin_radius <= 0.0 || b.pin_spacing_x <= 0.0 || b.pin_spacing_y <= 0.0 {
            return Err("pin radius and spacing must be > 0".to_string());
        }
        if b.border_tooth_depth * 2.0 >= b.width {
            return Err("border_tooth_depth must leave room for the playfield".to_string());
        }

        let r = &self.round;
        if r.message_duration_ticks == 0 {
            return Err("message_duration_ticks must be >= 1".to_string());
        }
        if r.spawn_margin < 0.0 || r.spawn_margin * 2.0 > b.width {
            return Err("spawn_margin must be >= 0 and fit twice into the board width".to_string());
        }
        if r.spawn_y <= 0.0 || r.spawn_y >= b.height {
            return Err("spawn_y must lie inside the board".to_string());
        }
        if r.ball_radius <= 0.0 {
            return Err("ball_radius must be > 0".to_string());
        }

        let p = &self.physics;
        if !p.gravity.is_finite() || p.gravity <= 0.0 {
            return Err("gravity must be finite and > 0".to_string());
        }
        if !p.ball_linear_damping.is_finite() || p.ball_linear_damping < 0.0 {
            return Err("ball_linear_damping must be finite and >= 0".to_string());
        }

        let a = &self.audio;
        if !(0.0..=1.0).contains(&a.music_volume) || !(0.0..=1.0).contains(&a.pin_volume) {
            return Err("volumes must be within 0..=1".to_string());
        }
        if a.pin_rate_min <= 0.0 || a.pin_rate_max < a.pin_rate_min {
            return Err("pin_rate_max must be >= pin_rate_min > 0".to_string());
        }
        Ok(())
    }
}
