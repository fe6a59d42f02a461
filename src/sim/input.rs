//! Pointer kicks
//!
//! Maps a click in playfield coordinates to an impulse on the ball.

use glam::Vec2;

use super::state::{Ball, GameState};
use crate::tuning::Tuning;

/// Whether `point` lies inside the forgiving hit region around the ball
#[inline]
pub fn hit_test(ball: &Ball, point: Vec2, tuning: &Tuning) -> bool {
    ball.pos.distance(point) <= ball.radius + tuning.hit_slop
}

/// Horizontal velocity for a kick landing `offset` units right of center
///
/// Kicking the left side sends the ball right and vice versa.
#[inline]
pub fn horizontal_impulse(offset: f32, radius: f32, max_speed: f32) -> f32 {
    let force = -(offset / radius) * max_speed;
    force.clamp(-max_speed, max_speed)
}

/// Apply a click at `point`
///
/// Accepted only while playing, before the ball has reached the ground, and
/// inside the hit region. Returns whether the kick counted.
pub fn kick(state: &mut GameState, point: Vec2) -> bool {
    if !state.is_playing() || state.ball.on_ground(&state.bounds) {
        log::trace!("Kick ignored in phase {:?}", state.phase);
        return false;
    }

    if !hit_test(&state.ball, point, &state.tuning) {
        log::trace!(
            "Kick missed: {:.1} from ball center",
            state.ball.pos.distance(point)
        );
        return false;
    }

    let tuning = state.tuning;
    let ball = &mut state.ball;
    ball.vel.y = tuning.jump_force;
    ball.vel.x = horizontal_impulse(
        point.x - ball.pos.x,
        ball.radius,
        tuning.max_horizontal_velocity,
    );
    state.score += 1;

    log::debug!("Kick #{} -> vel ({:.2}, {:.2})", state.score, ball.vel.x, ball.vel.y);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::GamePhase;
    use crate::sim::tick;
    use proptest::prelude::*;

    fn playing_state() -> GameState {
        let mut state = GameState::default();
        state.start();
        state.drain_events();
        state
    }

    #[test]
    fn test_center_kick() {
        let mut state = playing_state();
        let center = state.ball.pos;
        assert!(kick(&mut state, center));
        assert_eq!(state.ball.vel.y, -12.0);
        assert_eq!(state.ball.vel.x, 0.0);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_kick_sign_inversion() {
        let mut state = playing_state();
        let center = state.ball.pos;

        assert!(kick(&mut state, center - Vec2::new(30.0, 0.0)));
        assert_eq!(state.ball.vel.x, 8.0);

        let center = state.ball.pos;
        assert!(kick(&mut state, center + Vec2::new(30.0, 0.0)));
        assert_eq!(state.ball.vel.x, -8.0);
        assert_eq!(state.score, 2);
    }

    #[test]
    fn test_horizontal_impulse_scaling() {
        assert_eq!(horizontal_impulse(15.0, 30.0, 8.0), -4.0);
        assert_eq!(horizontal_impulse(-7.5, 30.0, 8.0), 2.0);
        // Clamped beyond the visual radius
        assert_eq!(horizontal_impulse(60.0, 30.0, 8.0), -8.0);
        assert_eq!(horizontal_impulse(-69.0, 30.0, 8.0), 8.0);
    }

    #[test]
    fn test_hit_region_boundary() {
        let mut state = playing_state();
        let center = state.ball.pos;

        // Exactly radius + slop below the center: accepted
        assert!(kick(&mut state, center + Vec2::new(0.0, 70.0)));
        assert_eq!(state.score, 1);

        // Just outside: rejected
        let center = state.ball.pos;
        let vel = state.ball.vel;
        assert!(!kick(&mut state, center + Vec2::new(70.01, 0.0)));
        assert_eq!(state.score, 1);
        assert_eq!(state.ball.vel, vel);
    }

    #[test]
    fn test_kick_rejected_on_ground() {
        let mut state = playing_state();
        // Ball resting on the ground line but still marked playing
        state.ball.pos.y = state.bounds.ground_y() - state.ball.radius;
        let center = state.ball.pos;
        assert!(!kick(&mut state, center));
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_kick_after_game_over() {
        let mut state = playing_state();
        state.ball.pos.y = 519.0;
        tick(&mut state);
        assert_eq!(state.phase, GamePhase::GameOver);

        let ball = state.ball;
        assert!(!kick(&mut state, ball.pos));
        assert_eq!(state.ball, ball);
        assert_eq!(state.score, 0);
    }

    proptest! {
        #[test]
        fn prop_kick_ignored_unless_playing(x in -1000.0f32..1000.0, y in -1000.0f32..1000.0) {
            let mut state = GameState::default();
            let ball = state.ball;
            prop_assert!(!kick(&mut state, Vec2::new(x, y)));
            prop_assert_eq!(state.ball, ball);
            prop_assert_eq!(state.score, 0);
        }

        #[test]
        fn prop_kick_velocity_bounded(dx in -70.0f32..70.0) {
            let mut state = playing_state();
            let center = state.ball.pos;
            prop_assert!(kick(&mut state, center + Vec2::new(dx, 0.0)));
            prop_assert!(state.ball.vel.x.abs() <= 8.0);
            prop_assert_eq!(state.ball.vel.y, -12.0);
        }
    }
}
