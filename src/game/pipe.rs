//! Pipe pair obstacles.

use super::types::Bounds;
use crate::core::config::GameConfig;
use rand::Rng;

/// A top and a bottom pipe with a gap between them.
///
/// Piece counts include the end cap on each pipe. A pipe is one piece wide,
/// so a pair occupies `pipe_width` columns from `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct PipePair {
    /// Left edge in screen pixels.
    pub x: f64,
    pub top_pieces: u32,
    pub bottom_pieces: u32,
    /// Set once the bird has passed this pair and it has been scored.
    pub score_counted: bool,
}

impl PipePair {
    /// A new pair at the right edge of the screen with a random gap.
    ///
    /// The body pieces are split at random between top and bottom, with at
    /// least one body piece below the gap. The config must have passed
    /// `validate`.
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let total = config.total_pipe_pieces().max(1) as u32;
        let bottom_body = rng.gen_range(1..=total);
        Self::with_body_pieces(config, total - bottom_body, bottom_body)
    }

    /// A pair with the given body piece counts. One end cap is added to
    /// each pipe.
    pub fn with_body_pieces(config: &GameConfig, top_body: u32, bottom_body: u32) -> Self {
        Self {
            x: config.screen_width as f64,
            top_pieces: top_body + 1,
            bottom_pieces: bottom_body + 1,
            score_counted: false,
        }
    }

    pub fn top_height_px(&self, config: &GameConfig) -> f64 {
        (self.top_pieces * config.pipe_piece_height) as f64
    }

    pub fn bottom_height_px(&self, config: &GameConfig) -> f64 {
        (self.bottom_pieces * config.pipe_piece_height) as f64
    }

    /// Vertical space left between the two pipes.
    pub fn gap_height_px(&self, config: &GameConfig) -> f64 {
        config.screen_height as f64 - self.top_height_px(config) - self.bottom_height_px(config)
    }

    pub fn right_edge(&self, config: &GameConfig) -> f64 {
        self.x + config.pipe_width as f64
    }

    pub fn top_bounds(&self, config: &GameConfig) -> Bounds {
        Bounds::new(
            self.x,
            0.0,
            config.pipe_width as f64,
            self.top_height_px(config),
        )
    }

    pub fn bottom_bounds(&self, config: &GameConfig) -> Bounds {
        let height = self.bottom_height_px(config);
        Bounds::new(
            self.x,
            config.screen_height as f64 - height,
            config.pipe_width as f64,
            height,
        )
    }

    /// True if `bounds` overlaps either pipe.
    pub fn collides_with(&self, bounds: &Bounds, config: &GameConfig) -> bool {
        bounds.intersects(&self.top_bounds(config)) || bounds.intersects(&self.bottom_bounds(config))
    }

    /// True once the whole pair has scrolled past the left edge.
    pub fn is_off_screen(&self, config: &GameConfig) -> bool {
        self.x <= -(config.pipe_width as f64)
    }

    /// Which piece, if any, covers screen row `y`. Used by the renderer to
    /// draw the pipe from its piece counts.
    pub fn piece_at(&self, y: f64, config: &GameConfig) -> Option<PipePiece> {
        let piece = config.pipe_piece_height as f64;
        let top = self.top_height_px(config);
        let bottom_start = config.screen_height as f64 - self.bottom_height_px(config);
        if (0.0..top).contains(&y) {
            if y >= top - piece {
                Some(PipePiece::EndCap)
            } else {
                Some(PipePiece::Body)
            }
        } else if y >= bottom_start && y < config.screen_height as f64 {
            if y < bottom_start + piece {
                Some(PipePiece::EndCap)
            } else {
                Some(PipePiece::Body)
            }
        } else {
            None
        }
    }
}

/// The two kinds of piece a pipe is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipePiece {
    Body,
    EndCap,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_spawns_at_right_edge() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let pipe = PipePair::new(&config, &mut rng);
        assert!((pipe.x - 568.0).abs() < f64::EPSILON);
        assert!(!pipe.score_counted);
    }

    #[test]
    fn test_piece_budget_and_gap_hold_for_many_seeds() {
        let config = GameConfig::default();
        let total = config.total_pipe_pieces() as u32;
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..1000 {
            let pipe = PipePair::new(&config, &mut rng);
            assert_eq!(pipe.top_pieces + pipe.bottom_pieces - 2, total);
            assert!(pipe.top_pieces >= 1);
            assert!(pipe.bottom_pieces >= 2);
            assert!(pipe.gap_height_px(&config) >= 3.0 * config.bird_height as f64);
        }
    }

    #[test]
    fn test_every_split_is_reachable() {
        let config = GameConfig::default();
        let total = config.total_pipe_pieces() as u32;
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut seen = vec![false; total as usize + 1];
        for _ in 0..2000 {
            let pipe = PipePair::new(&config, &mut rng);
            seen[(pipe.bottom_pieces - 1) as usize] = true;
        }
        assert!(!seen[0]);
        assert!(seen[1..].iter().all(|s| *s));
    }

    #[test]
    fn test_heights_after_end_caps() {
        // 568x512 screen, bottom draw of 4 body pieces
        let config = GameConfig::default();
        let pipe = PipePair::with_body_pieces(&config, 6, 4);
        assert_eq!(pipe.top_pieces, 7);
        assert_eq!(pipe.bottom_pieces, 5);
        assert!((pipe.top_height_px(&config) - 224.0).abs() < f64::EPSILON);
        assert!((pipe.bottom_height_px(&config) - 160.0).abs() < f64::EPSILON);
        assert!((pipe.gap_height_px(&config) - 128.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_collides_with_top_pipe() {
        let config = GameConfig::default();
        let mut pipe = PipePair::with_body_pieces(&config, 6, 4);
        pipe.x = 40.0;
        let bird = Bounds::new(50.0, 200.0, 32.0, 32.0);
        assert!(pipe.collides_with(&bird, &config));
    }

    #[test]
    fn test_collides_with_bottom_pipe() {
        let config = GameConfig::default();
        let mut pipe = PipePair::with_body_pieces(&config, 6, 4);
        pipe.x = 40.0;
        // Bottom pipe starts at 512 - 160 = 352
        let bird = Bounds::new(50.0, 330.0, 32.0, 32.0);
        assert!(pipe.collides_with(&bird, &config));
    }

    #[test]
    fn test_no_collision_inside_gap() {
        let config = GameConfig::default();
        let mut pipe = PipePair::with_body_pieces(&config, 6, 4);
        pipe.x = 40.0;
        // Gap spans 224..352
        let bird = Bounds::new(50.0, 224.0, 32.0, 32.0);
        assert!(!pipe.collides_with(&bird, &config));
        let bird = Bounds::new(50.0, 320.0, 32.0, 32.0);
        assert!(!pipe.collides_with(&bird, &config));
    }

    #[test]
    fn test_no_collision_when_horizontally_clear() {
        let config = GameConfig::default();
        let mut pipe = PipePair::with_body_pieces(&config, 6, 4);
        pipe.x = 82.0;
        let bird = Bounds::new(50.0, 0.0, 32.0, 32.0);
        assert!(!pipe.collides_with(&bird, &config));
    }

    #[test]
    fn test_off_screen_threshold() {
        let config = GameConfig::default();
        let mut pipe = PipePair::with_body_pieces(&config, 6, 4);
        pipe.x = -79.0;
        assert!(!pipe.is_off_screen(&config));
        pipe.x = -80.0;
        assert!(pipe.is_off_screen(&config));
    }

    #[test]
    fn test_piece_at_marks_end_caps() {
        let config = GameConfig::default();
        let pipe = PipePair::with_body_pieces(&config, 6, 4);
        assert_eq!(pipe.piece_at(0.0, &config), Some(PipePiece::Body));
        assert_eq!(pipe.piece_at(191.0, &config), Some(PipePiece::Body));
        assert_eq!(pipe.piece_at(192.0, &config), Some(PipePiece::EndCap));
        assert_eq!(pipe.piece_at(223.0, &config), Some(PipePiece::EndCap));
        assert_eq!(pipe.piece_at(224.0, &config), None);
        assert_eq!(pipe.piece_at(351.0, &config), None);
        assert_eq!(pipe.piece_at(352.0, &config), Some(PipePiece::EndCap));
        assert_eq!(pipe.piece_at(384.0, &config), Some(PipePiece::Body));
        assert_eq!(pipe.piece_at(512.0, &config), None);
    }
}
