use bevy::prelude::Resource;
use plinko_shared::config::GameConfig;

use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH, CONFETTI_POOL};

#[derive(Resource, Clone, Debug)]
pub struct GameSettings(pub GameConfig);

/// Config resolved before the app starts, with anything worth logging once
/// the log plugin is up.
pub struct LoadedConfig {
    pub config: GameConfig,
    pub notes: Vec<String>,
}

pub fn load_config() -> LoadedConfig {
    let mut notes = Vec::new();
    let mut config = match read_config_source() {
        Some(Ok(text)) => match parse_for_canvas(&text) {
            Ok(config) => config,
            Err(e) => {
                notes.push(format!("{e}; using defaults"));
                GameConfig::default()
            }
        },
        Some(Err(e)) => {
            notes.push(format!("could not read config: {e}; using defaults"));
            GameConfig::default()
        }
        None => GameConfig::default(),
    };

    if let Some(seed) = seed_override() {
        config.rng_seed = Some(seed);
    }
    LoadedConfig { config, notes }
}

/// Parse a JSON config and make sure it fits the fixed canvas and sprite pools.
pub fn parse_for_canvas(text: &str) -> Result<GameConfig, String> {
    let config = GameConfig::from_json(text)?;
    if config.board.width != CANVAS_WIDTH || config.board.height != CANVAS_HEIGHT {
        return Err(format!(
            "board must be {CANVAS_WIDTH}x{CANVAS_HEIGHT}, got {}x{}",
            config.board.width, config.board.height
        ));
    }
    if config.round.confetti_count > CONFETTI_POOL {
        return Err(format!(
            "confetti_count must be <= {CONFETTI_POOL}, got {}",
            config.round.confetti_count
        ));
    }
    Ok(config)
}

/// Extract `seed=N` from a URL query string such as `?level=2&seed=42`.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))] // only the web build reads the URL
pub fn parse_seed_query(search: &str) -> Option<u64> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "seed")
        .and_then(|(_, value)| value.parse().ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config_source() -> Option<Result<String, String>> {
    let path = std::env::var("PLINKO_CONFIG").ok()?;
    Some(std::fs::read_to_string(&path).map_err(|e| format!("{path}: {e}")))
}

#[cfg(target_arch = "wasm32")]
fn read_config_source() -> Option<Result<String, String>> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn seed_override() -> Option<u64> {
    std::env::var("PLINKO_SEED").ok()?.parse().ok()
}

#[cfg(target_arch = "wasm32")]
fn seed_override() -> Option<u64> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    parse_seed_query(&search)
}
