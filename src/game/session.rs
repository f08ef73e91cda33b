//! One game run: the per-tick state machine tying bird, pipes and score
//! together.

use super::bird::Bird;
use super::stream::PipeStream;
use super::types::{EndReason, GameEvent, SessionState, TickResult};
use crate::core::config::GameConfig;
use log::{debug, info};
use rand::Rng;

#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    pub bird: Bird,
    pub pipes: PipeStream,
    score: u32,
    paused: bool,
    end: Option<EndReason>,
    /// Running ticks elapsed. Does not advance while paused.
    tick_count: u64,
}

impl Session {
    /// Start a session. The config must already have passed `validate`.
    pub fn new(config: GameConfig) -> Self {
        let bird = Bird::from_config(&config);
        Self {
            config,
            bird,
            pipes: PipeStream::new(),
            score: 0,
            paused: false,
            end: None,
            tick_count: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn state(&self) -> SessionState {
        match (self.end, self.paused) {
            (Some(reason), _) => SessionState::Terminated(reason),
            (None, true) => SessionState::Paused,
            (None, false) => SessionState::Running,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_over(&self) -> bool {
        self.end.is_some()
    }

    /// Run one tick with this tick's drained input events, in arrival order.
    ///
    /// Order within a running tick: events (plus a spawn when due), collision
    /// and boundary check, pipe scrolling, bird physics, scoring. Nothing
    /// but the pause flag changes while paused, and nothing at all changes
    /// once the session has ended.
    pub fn tick<R, I>(&mut self, events: I, rng: &mut R) -> TickResult
    where
        R: Rng,
        I: IntoIterator<Item = GameEvent>,
    {
        let mut result = TickResult::default();
        if self.is_over() {
            return result;
        }

        let spawn = (!self.paused && PipeStream::spawn_due(self.tick_count, &self.config))
            .then_some(GameEvent::SpawnPipe);

        for event in events.into_iter().chain(spawn) {
            match event {
                GameEvent::Quit => {
                    self.finish(EndReason::Quit);
                    result.ended = Some(EndReason::Quit);
                    return result;
                }
                GameEvent::TogglePause => {
                    self.paused = !self.paused;
                    result.pause_toggled = true;
                    info!(
                        "{} at tick {}",
                        if self.paused { "Paused" } else { "Resumed" },
                        self.tick_count
                    );
                }
                GameEvent::Jump if !self.paused => self.bird.jump(&self.config),
                GameEvent::SpawnPipe if !self.paused => {
                    let pipe = self.pipes.spawn(&self.config, rng);
                    debug!(
                        "Spawned pipe: {} top / {} bottom pieces",
                        pipe.top_pieces, pipe.bottom_pieces
                    );
                    result.spawned = true;
                }
                GameEvent::Jump | GameEvent::SpawnPipe => {}
            }
        }

        if self.paused {
            return result;
        }

        if let Some(reason) = self.check_end() {
            self.finish(reason);
            result.ended = Some(reason);
            return result;
        }

        self.pipes.advance(&self.config);
        self.bird.update(&self.config);

        let scored = self.pipes.score_passed(self.bird.x(), &self.config);
        if scored > 0 {
            self.score += scored;
            debug!("Scored {} (total {})", scored, self.score);
        }
        result.scored = scored;

        self.tick_count += 1;
        result.render = true;
        result
    }

    /// Collision with any pipe, or the bird touching the top or bottom edge.
    pub fn check_end(&self) -> Option<EndReason> {
        let bounds = self.bird.bounds(&self.config);
        if self.pipes.collides_with(&bounds, &self.config) {
            Some(EndReason::PipeCollision)
        } else if self.bird.y <= 0.0 || self.bird.y >= self.config.bird_max_y() {
            Some(EndReason::OutOfBounds)
        } else {
            None
        }
    }

    fn finish(&mut self, reason: EndReason) {
        self.end = Some(reason);
        info!(
            "Game over ({}) after {} ticks, score {}",
            reason.description(),
            self.tick_count,
            self.score
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::pipe::PipePair;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(0)
    }

    fn idle(session: &mut Session, rng: &mut ChaCha8Rng) -> TickResult {
        session.tick(std::iter::empty::<GameEvent>(), rng)
    }

    #[test]
    fn test_new_session_running() {
        let session = Session::new(GameConfig::default());
        assert_eq!(session.state(), SessionState::Running);
        assert_eq!(session.score(), 0);
        assert_eq!(session.tick_count(), 0);
        assert!(session.pipes.is_empty());
    }

    #[test]
    fn test_first_tick_spawns_pipe() {
        let mut session = Session::new(GameConfig::default());
        let mut rng = rng();
        let result = idle(&mut session, &mut rng);
        assert!(result.spawned);
        assert!(result.render);
        assert_eq!(session.pipes.len(), 1);
        // Spawned at 568 then scrolled once
        assert!((session.pipes.iter().next().unwrap().x - 565.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_quit_terminates_immediately() {
        let mut session = Session::new(GameConfig::default());
        let mut rng = rng();
        let y = session.bird.y;
        let result = session.tick([GameEvent::Quit, GameEvent::Jump], &mut rng);
        assert_eq!(result.ended, Some(EndReason::Quit));
        assert_eq!(session.state(), SessionState::Terminated(EndReason::Quit));
        assert!((session.bird.y - y).abs() < f64::EPSILON);
        assert!(session.pipes.is_empty());
    }

    #[test]
    fn test_terminated_session_ignores_ticks() {
        let mut session = Session::new(GameConfig::default());
        let mut rng = rng();
        session.tick([GameEvent::Quit], &mut rng);
        let result = session.tick([GameEvent::TogglePause], &mut rng);
        assert_eq!(result, TickResult::default());
        assert_eq!(session.state(), SessionState::Terminated(EndReason::Quit));
    }

    #[test]
    fn test_jump_restarts_arc() {
        let mut session = Session::new(GameConfig::default());
        let mut rng = rng();
        session.tick([GameEvent::Jump], &mut rng);
        // Jump applied before physics of the same tick
        assert_eq!(session.bird.steps_to_jump, 19);
    }

    #[test]
    fn test_pause_freezes_everything() {
        let mut session = Session::new(GameConfig::default());
        let mut rng = rng();
        for _ in 0..5 {
            idle(&mut session, &mut rng);
        }
        let result = session.tick([GameEvent::TogglePause], &mut rng);
        assert!(result.pause_toggled);
        assert!(!result.render);
        assert_eq!(session.state(), SessionState::Paused);

        let y = session.bird.y;
        let steps = session.bird.steps_to_jump;
        let xs: Vec<f64> = session.pipes.iter().map(|p| p.x).collect();
        let ticks = session.tick_count();

        for _ in 0..500 {
            let result = session.tick([GameEvent::Jump, GameEvent::SpawnPipe], &mut rng);
            assert!(!result.render);
            assert!(!result.spawned);
        }

        assert!((session.bird.y - y).abs() < f64::EPSILON);
        assert_eq!(session.bird.steps_to_jump, steps);
        assert_eq!(session.pipes.iter().map(|p| p.x).collect::<Vec<_>>(), xs);
        assert_eq!(session.tick_count(), ticks);
        assert_eq!(session.score(), 0);

        let result = session.tick([GameEvent::TogglePause], &mut rng);
        assert!(result.render);
        assert_eq!(session.state(), SessionState::Running);
    }

    #[test]
    fn test_pause_does_not_burst_spawn() {
        let config = GameConfig::default();
        let interval = config.pipe_add_interval_ticks();
        let mut session = Session::new(config);
        let mut rng = rng();
        idle(&mut session, &mut rng);
        session.bird.y = 240.0;
        session.tick([GameEvent::TogglePause], &mut rng);
        for _ in 0..(interval * 3) {
            idle(&mut session, &mut rng);
        }
        let result = session.tick([GameEvent::TogglePause], &mut rng);
        assert!(!result.spawned);
        assert_eq!(session.pipes.len(), 1);
    }

    #[test]
    fn test_pause_and_resume_in_one_tick() {
        let mut session = Session::new(GameConfig::default());
        let mut rng = rng();
        let result = session.tick(
            [GameEvent::TogglePause, GameEvent::TogglePause],
            &mut rng,
        );
        assert!(result.render);
        assert_eq!(session.tick_count(), 1);
    }

    #[test]
    fn test_top_boundary_terminates() {
        let mut session = Session::new(GameConfig::default());
        let mut rng = rng();
        session.bird.y = 0.0;
        let result = idle(&mut session, &mut rng);
        assert_eq!(result.ended, Some(EndReason::OutOfBounds));
    }

    #[test]
    fn test_bottom_boundary_terminates() {
        let mut session = Session::new(GameConfig::default());
        let mut rng = rng();
        session.bird.y = 480.0;
        let result = idle(&mut session, &mut rng);
        assert_eq!(result.ended, Some(EndReason::OutOfBounds));
    }

    #[test]
    fn test_inside_bounds_keeps_running() {
        for y in [0.5, 240.0, 479.5] {
            let mut session = Session::new(GameConfig::default());
            session.bird.y = y;
            assert_eq!(session.check_end(), None, "y = {}", y);
        }
    }

    #[test]
    fn test_pipe_collision_terminates() {
        let config = GameConfig::default();
        let mut session = Session::new(config.clone());
        let mut rng = rng();
        let mut pipe = PipePair::with_body_pieces(&config, 6, 4);
        pipe.x = 40.0;
        session.pipes.push(pipe);
        session.bird.y = 100.0;
        let result = idle(&mut session, &mut rng);
        assert_eq!(result.ended, Some(EndReason::PipeCollision));
        assert!(!result.render);
    }

    #[test]
    fn test_score_once_per_pipe() {
        let config = GameConfig::default();
        let mut session = Session::new(config.clone());
        let mut rng = rng();
        let mut pipe = PipePair::with_body_pieces(&config, 6, 4);
        // Right edge at 52; one tick of scrolling puts it at 49, past the bird
        pipe.x = -28.0;
        session.pipes.push(pipe);
        session.bird.y = 240.0;
        let result = idle(&mut session, &mut rng);
        assert_eq!(result.scored, 1);
        assert_eq!(session.score(), 1);
        session.bird.y = 240.0;
        let result = idle(&mut session, &mut rng);
        assert_eq!(result.scored, 0);
        assert_eq!(session.score(), 1);
    }
}
