//! Per-frame simulation tick
//!
//! Advances the ball by one step: gravity, movement, air drag, then ground
//! and wall contact.

use super::state::{GameEvent, GamePhase, GameState};

/// Horizontal velocity after bouncing off a side wall
#[inline]
pub fn reflect_off_wall(vel_x: f32, restitution: f32) -> f32 {
    -vel_x * restitution
}

/// Advance the game state by one tick
///
/// Does nothing unless the session is playing. Ground contact ends the
/// session and takes priority over the wall checks in the same tick.
pub fn tick(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    let tuning = state.tuning;
    let bounds = state.bounds;
    let ball = &mut state.ball;

    ball.vel.y += tuning.gravity;
    ball.pos.y += ball.vel.y;

    // Drag applies after the move, so a fresh kick travels its full speed once
    ball.pos.x += ball.vel.x;
    ball.vel.x *= tuning.horizontal_damping;

    if ball.on_ground(&bounds) {
        ball.pos.y = bounds.ground_y() - ball.radius;
        let score = state.score;
        state.phase = GamePhase::GameOver;
        state.push_event(GameEvent::Ended { score });
        log::info!(
            "Ball hit the ground after {} ticks, final score {}",
            state.time_ticks,
            score
        );
        return;
    }

    if ball.pos.x - ball.radius < 0.0 {
        ball.pos.x = ball.radius;
        ball.vel.x = reflect_off_wall(ball.vel.x, tuning.wall_restitution);
    } else if ball.pos.x + ball.radius > bounds.width {
        ball.pos.x = bounds.width - ball.radius;
        ball.vel.x = reflect_off_wall(ball.vel.x, tuning.wall_restitution);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Bounds;
    use glam::Vec2;
    use proptest::prelude::*;

    fn playing_state() -> GameState {
        let mut state = GameState::default();
        state.start();
        state.drain_events();
        state
    }

    #[test]
    fn test_tick_ignored_while_waiting() {
        let mut state = GameState::default();
        let before = state.ball;
        tick(&mut state);
        assert_eq!(state.ball, before);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_first_tick_after_start() {
        let mut state = playing_state();
        tick(&mut state);
        // vy: 2 + 0.5, y: 100 + 2.5
        assert_eq!(state.ball.vel.y, 2.5);
        assert_eq!(state.ball.pos.y, 102.5);
        assert_eq!(state.ball.pos.x, 400.0);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_damping_after_move() {
        let mut state = playing_state();
        state.ball.vel.x = 5.0;
        tick(&mut state);
        assert_eq!(state.ball.pos.x, 405.0);
        assert!((state.ball.vel.x - 4.9).abs() < 1e-6);

        tick(&mut state);
        assert!((state.ball.pos.x - 409.9).abs() < 1e-4);
    }

    #[test]
    fn test_reflect_off_wall() {
        assert!((reflect_off_wall(10.0, 0.7) - -7.0).abs() < 1e-6);
        assert!((reflect_off_wall(-4.0, 0.7) - 2.8).abs() < 1e-6);
    }

    #[test]
    fn test_left_wall_bounce() {
        let mut state = playing_state();
        state.ball.pos = Vec2::new(32.0, 200.0);
        state.ball.vel = Vec2::new(-5.0, 0.0);
        tick(&mut state);
        // moved to x = 27, damped to -4.9, then reflected
        assert_eq!(state.ball.pos.x, 30.0);
        assert!((state.ball.vel.x - 3.43).abs() < 1e-5);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_right_wall_bounce() {
        let mut state = playing_state();
        state.ball.pos = Vec2::new(765.0, 200.0);
        state.ball.vel = Vec2::new(8.0, 0.0);
        tick(&mut state);
        assert_eq!(state.ball.pos.x, 770.0);
        assert!((state.ball.vel.x - -5.488).abs() < 1e-5);
    }

    #[test]
    fn test_ground_contact_ends_session() {
        let mut state = playing_state();
        state.score = 7;
        state.ball.pos.y = 515.0;
        state.ball.vel.y = 5.0;
        tick(&mut state);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.ball.pos.y, 520.0);
        assert_eq!(state.drain_events(), vec![GameEvent::Ended { score: 7 }]);
    }

    #[test]
    fn test_ground_beats_wall_in_same_tick() {
        let mut state = playing_state();
        state.ball.pos = Vec2::new(31.0, 515.0);
        state.ball.vel = Vec2::new(-6.0, 5.0);
        tick(&mut state);
        assert_eq!(state.phase, GamePhase::GameOver);
        // No wall clamp or reflection
        assert_eq!(state.ball.pos.x, 25.0);
        assert!(state.ball.vel.x < 0.0);
    }

    #[test]
    fn test_ground_is_terminal() {
        let mut state = playing_state();
        state.ball.pos.y = 519.0;
        tick(&mut state);
        assert_eq!(state.phase, GamePhase::GameOver);
        state.drain_events();

        let ball = state.ball;
        let ticks = state.time_ticks;
        for _ in 0..10 {
            tick(&mut state);
        }
        assert_eq!(state.ball, ball);
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.score, 0);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_ground_uses_current_bounds() {
        let mut state = playing_state();
        state.bounds = Bounds::new(800.0, 300.0);
        state.ball.pos.y = 218.0;
        tick(&mut state);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.ball.pos.y, 220.0);
    }

    proptest! {
        #[test]
        fn prop_gravity_adds_exactly(vy in -12.0f32..10.0, x in 100.0f32..700.0, vx in -8.0f32..8.0) {
            let mut state = playing_state();
            state.ball.pos = Vec2::new(x, 150.0);
            state.ball.vel = Vec2::new(vx, vy);
            tick(&mut state);
            prop_assume!(state.phase == GamePhase::Playing);
            prop_assert_eq!(state.ball.vel.y, vy + 0.5);
        }

        #[test]
        fn prop_ball_stays_between_walls(x in 30.0f32..770.0, vx in -30.0f32..30.0) {
            let mut state = playing_state();
            state.ball.pos = Vec2::new(x, 150.0);
            state.ball.vel = Vec2::new(vx, 0.0);
            tick(&mut state);
            prop_assert!(state.ball.pos.x >= state.ball.radius);
            prop_assert!(state.ball.pos.x <= state.bounds.width - state.ball.radius);
        }
    }
}
