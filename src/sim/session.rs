//! Session lifecycle: waiting → playing → game over → waiting

use glam::Vec2;

use super::state::{Ball, GameEvent, GamePhase, GameState};

impl GameState {
    /// Start a session from the start menu
    ///
    /// Resets the score and drops a fresh ball from the spawn point. Ignored
    /// outside `Waiting`.
    pub fn start(&mut self) {
        if self.phase != GamePhase::Waiting {
            log::debug!("start() ignored in phase {:?}", self.phase);
            return;
        }

        self.ball = Ball::spawn(
            &self.bounds,
            &self.tuning,
            Vec2::new(0.0, self.tuning.spawn_velocity_y),
        );
        self.score = 0;
        self.time_ticks = 0;
        self.phase = GamePhase::Playing;
        self.push_event(GameEvent::Started);
        log::info!("Session started");
    }

    /// Return to the start menu after a game over
    ///
    /// Parks the ball but keeps the final score until the next `start()`.
    /// Ignored outside `GameOver`.
    pub fn restart(&mut self) {
        if self.phase != GamePhase::GameOver {
            log::debug!("restart() ignored in phase {:?}", self.phase);
            return;
        }

        self.ball = Ball::spawn(&self.bounds, &self.tuning, Vec2::ZERO);
        self.phase = GamePhase::Waiting;
        log::info!("Back to start menu (last score {})", self.score);
    }

    /// Get a session going from wherever the game is
    ///
    /// Goes through the start menu after a game over. Leaves a running
    /// session alone.
    pub fn start_fresh(&mut self) {
        self.restart();
        self.start();
    }
}
