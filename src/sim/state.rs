//! Game state and core simulation types
//!
//! One `GameState` holds everything a session needs. It is only mutated through
//! `tick`, `kick`, and the session controls.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GamePhase {
    /// Start menu shown, ball parked
    #[default]
    Waiting,
    /// Active gameplay
    Playing,
    /// Ball touched the ground; final score on display
    GameOver,
}

/// Lifecycle events raised by the simulation, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new session started (score reset to 0)
    Started,
    /// The ball touched the ground
    Ended { score: u32 },
}

/// Playfield dimensions, owned by the host viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Y coordinate of the ground line
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.height - GROUND_MARGIN
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Per-tick displacement
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball at the top-center spawn point with the given velocity
    pub fn spawn(bounds: &Bounds, tuning: &Tuning, vel: Vec2) -> Self {
        Self {
            pos: Vec2::new(bounds.width / 2.0, tuning.spawn_y),
            vel,
            radius: tuning.ball_radius,
        }
    }

    /// Lowest point of the ball
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    /// Whether the ball rests on (or below) the ground line
    #[inline]
    pub fn on_ground(&self, bounds: &Bounds) -> bool {
        self.bottom() >= bounds.ground_y()
    }
}

/// Read-only per-frame view of the simulation for renderers and HUDs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_radius: f32,
    pub velocity_x: f32,
    pub session_state: GamePhase,
    pub score: u32,
    pub bounds_width: f32,
    pub bounds_height: f32,
    pub ground_y: f32,
}

impl Snapshot {
    #[inline]
    pub fn ball_center(&self) -> Vec2 {
        Vec2::new(self.ball_x, self.ball_y)
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Physics constants for this session
    pub tuning: Tuning,
    /// Current playfield
    pub bounds: Bounds,
    pub ball: Ball,
    /// Current phase
    pub phase: GamePhase,
    /// Accepted kicks this session
    pub score: u32,
    /// Ticks simulated this session
    pub time_ticks: u64,
    /// Events not yet seen by the host
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Bounds::default(), Tuning::default())
    }
}

impl GameState {
    /// Create a waiting session with the ball parked at the spawn point
    pub fn new(bounds: Bounds, tuning: Tuning) -> Self {
        Self {
            tuning,
            bounds,
            ball: Ball::spawn(&bounds, &tuning, Vec2::ZERO),
            phase: GamePhase::Waiting,
            score: 0,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Queue an event for the host
    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Adopt a new viewport size, pulling the ball back into view
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Bounds::new(width, height);
        self.ball.pos.x = self.ball.pos.x.min(width - self.ball.radius);
        self.ball.pos.y = self.ball.pos.y.min(height - RESIZE_CEILING_MARGIN);
    }

    /// Current view for rendering
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball_x: self.ball.pos.x,
            ball_y: self.ball.pos.y,
            ball_radius: self.ball.radius,
            velocity_x: self.ball.vel.x,
            session_state: self.phase,
            score: self.score,
            bounds_width: self.bounds.width,
            bounds_height: self.bounds.height,
            ground_y: self.bounds.ground_y(),
        }
    }
}
