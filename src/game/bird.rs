//! The player-controlled bird.

use super::types::Bounds;
use crate::core::config::GameConfig;
use std::f64::consts::PI;

/// The bird flies at a fixed x. It jumps when told to and otherwise drops
/// at a constant rate. Staying on screen is the session's job.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    x: f64,
    /// Top edge in screen pixels. Grows downward.
    pub y: f64,
    /// Ticks left in the current jump arc. Zero when falling.
    pub steps_to_jump: u32,
}

impl Bird {
    pub fn new(x: f64, y: f64, steps_to_jump: u32) -> Self {
        Self {
            x,
            y,
            steps_to_jump,
        }
    }

    /// Bird centred vertically at the configured x, with the configured
    /// starting hop.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.bird_x,
            config.bird_start_y(),
            config.initial_jump_steps.min(config.jump_steps),
        )
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn is_jumping(&self) -> bool {
        self.steps_to_jump > 0
    }

    /// Restart the jump arc from the beginning. Jumps never stack.
    pub fn jump(&mut self, config: &GameConfig) {
        self.steps_to_jump = config.jump_steps;
    }

    /// Advance one tick.
    ///
    /// While jumping, the rise per tick follows `1 - cos(frac * PI)`, so the
    /// bird starts its jump gently and rises fastest at the end. Each tick is
    /// sampled at the middle of its slice of the arc, which makes a full
    /// jump rise exactly `frame_jump_height * jump_steps` pixels.
    pub fn update(&mut self, config: &GameConfig) {
        if self.steps_to_jump > 0 {
            let steps = config.jump_steps as f64;
            let done = steps - self.steps_to_jump.min(config.jump_steps) as f64;
            let frac_jump_done = (done + 0.5) / steps;
            self.y -= config.frame_jump_height * (1.0 - (frac_jump_done * PI).cos());
            self.steps_to_jump -= 1;
        } else {
            self.y += config.frame_drop_height;
        }
    }

    /// Collision rectangle anchored at the bird's top-left corner.
    pub fn bounds(&self, config: &GameConfig) -> Bounds {
        Bounds::new(
            self.x,
            self.y,
            config.bird_width as f64,
            config.bird_height as f64,
        )
    }
}
