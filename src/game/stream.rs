//! The scrolling stream of pipe pairs.

use super::pipe::PipePair;
use super::types::Bounds;
use crate::core::config::GameConfig;
use rand::Rng;
use std::collections::VecDeque;

/// Active pipe pairs, oldest (leftmost) first.
#[derive(Debug, Clone, Default)]
pub struct PipeStream {
    pipes: VecDeque<PipePair>,
}

impl PipeStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// True on ticks where a new pair is due.
    ///
    /// Driven by the session's tick counter rather than a wall-clock timer,
    /// so a paused game does not build up spawns.
    pub fn spawn_due(tick: u64, config: &GameConfig) -> bool {
        tick % config.pipe_add_interval_ticks() == 0
    }

    pub fn spawn<R: Rng>(&mut self, config: &GameConfig, rng: &mut R) -> &PipePair {
        self.push(PipePair::new(config, rng))
    }

    /// Append an already built pair at the back of the stream.
    pub fn push(&mut self, pipe: PipePair) -> &PipePair {
        self.pipes.push_back(pipe);
        &self.pipes[self.pipes.len() - 1]
    }

    /// Scroll every pair left by one tick's distance, then drop pairs that
    /// have left the screen from the front.
    pub fn advance(&mut self, config: &GameConfig) {
        for pipe in &mut self.pipes {
            pipe.x -= config.frame_animation_width;
        }
        while self
            .pipes
            .front()
            .is_some_and(|p| p.is_off_screen(config))
        {
            self.pipes.pop_front();
        }
    }

    pub fn collides_with(&self, bounds: &Bounds, config: &GameConfig) -> bool {
        self.pipes.iter().any(|p| p.collides_with(bounds, config))
    }

    /// Mark every pair whose right edge has passed `bird_x` as scored.
    /// Returns how many were newly scored. A pair is only ever counted once.
    pub fn score_passed(&mut self, bird_x: f64, config: &GameConfig) -> u32 {
        let mut scored = 0;
        for pipe in &mut self.pipes {
            if !pipe.score_counted && pipe.right_edge(config) < bird_x {
                pipe.score_counted = true;
                scored += 1;
            }
        }
        scored
    }

    pub fn iter(&self) -> impl Iterator<Item = &PipePair> {
        self.pipes.iter()
    }

    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }
}
