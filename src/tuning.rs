//! Data-driven game balance
//!
//! Compiled defaults live in [`crate::consts`]; hosts may override any
//! subset per session with a JSON snippet.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance parameters consumed by the simulation each tick
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Ball speed at stage 0; stages scale this by their multiplier
    pub ball_base_speed: f32,
    /// AI paddle speed at stage 0
    pub ai_base_speed: f32,
    /// Player paddle speed at full joystick deflection
    pub player_paddle_speed: f32,
    /// Tracking error band below which the AI holds still
    pub ai_dead_zone: f32,
    /// Serve cone half-angle in radians
    pub launch_angle_max: f32,
    /// Fraction of ball speed added per unit of paddle hit offset
    pub deflect_factor: f32,
    /// Post-hit speed cap relative to the stage ball speed
    pub max_speed_factor: f32,
    /// Largest delta-time one update will integrate
    pub max_dt: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ball_base_speed: BALL_BASE_SPEED,
            ai_base_speed: AI_BASE_SPEED,
            player_paddle_speed: PLAYER_PADDLE_SPEED,
            ai_dead_zone: AI_DEAD_ZONE,
            launch_angle_max: LAUNCH_ANGLE_MAX,
            deflect_factor: DEFLECT_FACTOR,
            max_speed_factor: MAX_SPEED_FACTOR,
            max_dt: MAX_DT,
        }
    }
}

impl Tuning {
    /// Parse a host-supplied override; fields left out keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "ball_base_speed": 400.0 }"#).unwrap();
        assert_eq!(tuning.ball_base_speed, 400.0);
        assert_eq!(tuning.ai_base_speed, AI_BASE_SPEED);
        assert_eq!(tuning.max_dt, MAX_DT);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(Tuning::from_json("not json").is_err());
    }
}
