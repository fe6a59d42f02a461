//! Idle/demo mode - a simple player that kicks the ball when it falls low
//!
//! Seeded so a demo run is reproducible.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::GameState;

/// Height above the ground line where the demo player starts reaching for the ball
pub const KICK_BAND: f32 = 150.0;

/// Seeded demo player
#[derive(Debug, Clone)]
pub struct Autoplay {
    rng: Pcg32,
    /// Chance of going for each falling ball (0-1)
    skill: f32,
    /// Verdict for the current descent (`None` until the ball enters the band)
    descent: Option<bool>,
}

impl Autoplay {
    pub fn new(seed: u64, skill: f32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            skill: skill.clamp(0.0, 1.0),
            descent: None,
        }
    }

    /// Pick a click point for this frame, if the demo player wants to kick
    ///
    /// Aims slightly off-center so the ball drifts back toward the middle
    /// of the field.
    pub fn next_click(&mut self, state: &GameState) -> Option<Vec2> {
        let ball = &state.ball;
        if !state.is_playing() || ball.vel.y <= 0.0 {
            // Rising (or idle): the next descent gets a fresh verdict
            self.descent = None;
            return None;
        }

        if ball.bottom() < state.bounds.ground_y() - KICK_BAND {
            return None;
        }

        let skill = self.skill;
        let rng = &mut self.rng;
        let going = *self.descent.get_or_insert_with(|| rng.random::<f32>() < skill);
        if !going {
            return None;
        }

        // Kicking left of center pushes right, so aim on the side facing the middle
        let toward_middle = (state.bounds.width / 2.0 - ball.pos.x).signum();
        let steer = self.rng.random_range(0.0f32..0.5) * -toward_middle;
        let jitter = self.rng.random_range(-0.15f32..0.15);
        let offset = (steer + jitter) * ball.radius;

        Some(ball.pos + Vec2::new(offset, 0.0))
    }
}
