//! Reactive AI paddle controller
//!
//! Purely proportional tracking with a dead zone - no trajectory
//! prediction, so the opponent stays beatable.

use super::state::{Court, Paddle};

/// Target vertical velocity for the AI paddle this tick: zero inside the
/// dead zone, otherwise full speed toward the ball.
pub fn target_velocity(ball_y: f32, paddle_y: f32, ai_speed: f32, dead_zone: f32) -> f32 {
    let diff = ball_y - paddle_y;
    if diff.abs() <= dead_zone {
        0.0
    } else {
        diff.signum() * ai_speed
    }
}

/// Advance the AI paddle one tick, clamped to the playable range
pub fn update_paddle(
    paddle: &mut Paddle,
    ball_y: f32,
    ai_speed: f32,
    dead_zone: f32,
    court: &Court,
    dt: f32,
) {
    let vel = target_velocity(ball_y, paddle.pos.y, ai_speed, dead_zone);
    paddle.move_by(vel * dt, court);
}
