//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only (autoplay)
//! - No rendering or platform dependencies

pub mod autoplay;
pub mod input;
pub mod session;
pub mod state;
pub mod tick;

pub use autoplay::Autoplay;
pub use input::{hit_test, horizontal_impulse, kick};
pub use state::{Ball, Bounds, GameEvent, GamePhase, GameState, Snapshot};
pub use tick::{reflect_off_wall, tick};
