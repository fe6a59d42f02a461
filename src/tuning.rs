//! Data-driven physics constants
//!
//! Defaults mirror [`crate::consts`]; a host may override any field through
//! the settings JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a tuning table is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuningError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },
    #[error("ball radius must be positive, got {0}")]
    NonPositiveRadius(f32),
    #[error("{field} must lie in [0, 1], got {value}")]
    OutOfUnitRange { field: &'static str, value: f32 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },
}

/// Physics tuning for one session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub gravity: f32,
    pub jump_force: f32,
    pub horizontal_damping: f32,
    pub max_horizontal_velocity: f32,
    pub hit_slop: f32,
    pub wall_restitution: f32,
    pub ball_radius: f32,
    pub spawn_y: f32,
    pub spawn_velocity_y: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            horizontal_damping: HORIZONTAL_DAMPING,
            max_horizontal_velocity: MAX_HORIZONTAL_VELOCITY,
            hit_slop: HIT_SLOP,
            wall_restitution: WALL_RESTITUTION,
            ball_radius: BALL_RADIUS,
            spawn_y: BALL_SPAWN_Y,
            spawn_velocity_y: BALL_SPAWN_VELOCITY_Y,
        }
    }
}

impl Tuning {
    /// Check the table can drive a simulation
    pub fn validate(&self) -> Result<(), TuningError> {
        let fields = [
            ("gravity", self.gravity),
            ("jump_force", self.jump_force),
            ("horizontal_damping", self.horizontal_damping),
            ("max_horizontal_velocity", self.max_horizontal_velocity),
            ("hit_slop", self.hit_slop),
            ("wall_restitution", self.wall_restitution),
            ("ball_radius", self.ball_radius),
            ("spawn_y", self.spawn_y),
            ("spawn_velocity_y", self.spawn_velocity_y),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(TuningError::NonFinite { field, value });
            }
        }

        if self.ball_radius <= 0.0 {
            return Err(TuningError::NonPositiveRadius(self.ball_radius));
        }

        for (field, value) in [
            ("horizontal_damping", self.horizontal_damping),
            ("wall_restitution", self.wall_restitution),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(TuningError::OutOfUnitRange { field, value });
            }
        }

        for (field, value) in [
            ("max_horizontal_velocity", self.max_horizontal_velocity),
            ("hit_slop", self.hit_slop),
        ] {
            if value < 0.0 {
                return Err(TuningError::Negative { field, value });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(Tuning::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_bad_radius() {
        let tuning = Tuning {
            ball_radius: 0.0,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Err(TuningError::NonPositiveRadius(0.0)));
    }

    #[test]
    fn test_rejects_non_finite() {
        let tuning = Tuning {
            gravity: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NonFinite { field: "gravity", .. })
        ));
    }

    #[test]
    fn test_rejects_damping_above_one() {
        let tuning = Tuning {
            horizontal_damping: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::OutOfUnitRange { field: "horizontal_damping", .. })
        ));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{"gravity": 0.75}"#).unwrap();
        assert_eq!(tuning.gravity, 0.75);
        assert_eq!(tuning.jump_force, JUMP_FORCE);
        assert_eq!(tuning.ball_radius, BALL_RADIUS);
    }
}
