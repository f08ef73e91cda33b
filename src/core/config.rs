//! Immutable game configuration.
//!
//! Every physical constant the session needs lives here, so tests can run
//! the game at other screen sizes or frame rates.

use super::constants::*;
use super::error::ConfigError;
use super::timing::ms_to_frames;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Target ticks per second.
    pub fps: u32,
    /// Pixels every pipe moves left per tick.
    pub frame_animation_width: f64,
    pub screen_width: u32,
    pub screen_height: u32,

    /// Fixed horizontal position of the bird's left edge.
    pub bird_x: f64,
    pub bird_width: u32,
    pub bird_height: u32,
    /// Pixels the bird falls per tick when not jumping.
    pub frame_drop_height: f64,
    /// Average pixels the bird rises per tick during a jump.
    pub frame_jump_height: f64,
    /// Ticks in one complete jump.
    pub jump_steps: u32,
    /// Jump steps the bird starts with, a small hop at the start of a game.
    pub initial_jump_steps: u32,

    pub pipe_width: u32,
    pub pipe_piece_height: u32,
    /// Wall-clock interval between pipe spawns.
    pub pipe_add_interval_ms: u64,

    /// Full wing up/down animation cycle.
    pub wing_flap_period_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fps: FPS,
            frame_animation_width: FRAME_ANIMATION_WIDTH,
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            bird_x: BIRD_X,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            frame_drop_height: FRAME_DROP_HEIGHT,
            frame_jump_height: FRAME_JUMP_HEIGHT,
            jump_steps: JUMP_STEPS,
            initial_jump_steps: INITIAL_JUMP_STEPS,
            pipe_width: PIPE_WIDTH,
            pipe_piece_height: PIPE_PIECE_HEIGHT,
            pipe_add_interval_ms: PIPE_ADD_INTERVAL_MS,
            wing_flap_period_ms: WING_FLAP_PERIOD_MS,
        }
    }
}

impl GameConfig {
    /// Load a config from a JSON file. Missing fields fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load `path` if given, otherwise `default_path` if it exists, otherwise
    /// the built-in defaults.
    pub fn load(path: Option<&Path>, default_path: Option<&Path>) -> Result<Self, ConfigError> {
        match (path, default_path) {
            (Some(p), _) => Self::from_file(p),
            (None, Some(p)) if p.exists() => Self::from_file(p),
            _ => Ok(Self::default()),
        }
    }

    /// Reject configurations that could produce an impassable or
    /// malformed pipe, or a bird that starts off screen.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fps == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        let dimensions = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("pipe_width", self.pipe_width),
            ("pipe_piece_height", self.pipe_piece_height),
        ];
        if let Some((name, _)) = dimensions.iter().find(|(_, v)| *v == 0) {
            return Err(ConfigError::ZeroDimension(*name));
        }
        if self.jump_steps == 0 {
            return Err(ConfigError::ZeroJumpSteps);
        }
        if self.bird_x < 0.0
            || self.bird_x + self.bird_width as f64 > self.screen_width as f64
            || self.bird_height >= self.screen_height
        {
            return Err(ConfigError::BirdOffScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        let total = self.total_pipe_pieces();
        if total < MIN_TOTAL_PIPE_PIECES {
            return Err(ConfigError::PipeBudgetTooSmall { total });
        }
        Ok(())
    }

    /// Body pieces shared by the top and bottom pipe of one pair.
    ///
    /// Reserves room for the bird to pass plus two end caps and one body
    /// piece, wherever the gap lands.
    pub fn total_pipe_pieces(&self) -> i64 {
        let free = self.screen_height as i64
            - (GAP_BIRD_HEIGHTS * self.bird_height) as i64
            - (RESERVED_PIPE_PIECES * self.pipe_piece_height) as i64;
        free.div_euclid(self.pipe_piece_height.max(1) as i64)
    }

    /// Spawn interval converted to ticks. Never zero.
    pub fn pipe_add_interval_ticks(&self) -> u64 {
        (ms_to_frames(self.pipe_add_interval_ms, self.fps).round() as u64).max(1)
    }

    /// Bird starts vertically centred, truncated to a whole pixel.
    pub fn bird_start_y(&self) -> f64 {
        (self.screen_height as f64 / 2.0 - self.bird_height as f64 / 2.0).trunc()
    }

    /// Lowest y the bird may occupy without touching the floor.
    pub fn bird_max_y(&self) -> f64 {
        self.screen_height as f64 - self.bird_height as f64
    }
}

/// Read the config, mapping a missing home directory to the built-in
/// defaults rather than an error.
pub fn load_config(path: Option<&Path>) -> Result<GameConfig, ConfigError> {
    let default_path = crate::utils::persistence::data_path(CONFIG_FILE).ok();
    GameConfig::load(path, default_path.as_deref())
}
