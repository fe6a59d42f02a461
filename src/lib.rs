//! Football Juggling - keep the ball in the air
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, kicks, session lifecycle)
//! - `renderer`: Scene projection and Canvas 2D backend
//! - `platform`: Browser/native platform abstraction (frame loop, host glue)
//! - `notify`: Completion messages sent to the embedding page
//! - `tuning`: Data-driven physics constants
//! - `ui`: HUD and overlay text

pub mod notify;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Playfield size used until the host reports the real viewport
    pub const DEFAULT_WIDTH: f32 = 800.0;
    pub const DEFAULT_HEIGHT: f32 = 600.0;
    /// Grass strip height; the ground line sits this far above the bottom edge
    pub const GROUND_MARGIN: f32 = 50.0;
    /// On resize the ball is kept at least this far above the bottom edge
    pub const RESIZE_CEILING_MARGIN: f32 = 100.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 30.0;
    pub const BALL_SPAWN_Y: f32 = 100.0;
    /// Initial downward drift when a session starts
    pub const BALL_SPAWN_VELOCITY_Y: f32 = 2.0;

    /// Downward acceleration (units/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Vertical velocity set by an accepted kick
    pub const JUMP_FORCE: f32 = -12.0;
    /// Horizontal air resistance, applied once per tick
    pub const HORIZONTAL_DAMPING: f32 = 0.98;
    /// Cap on the horizontal velocity a kick can impart
    pub const MAX_HORIZONTAL_VELOCITY: f32 = 8.0;
    /// Extra click tolerance around the visual radius
    pub const HIT_SLOP: f32 = 40.0;
    /// Fraction of horizontal speed kept after a wall bounce
    pub const WALL_RESTITUTION: f32 = 0.7;

    /// Identifier carried by every completion message
    pub const BLOCK_ID: &str = "football-juggling-game";
    pub const GAME_TYPE: &str = "juggling";
}
