//! Collision detection and response
//!
//! One discriminated outcome per tick, checked in a fixed order: wall,
//! player paddle, AI paddle, goal. A paddle hit consumes the tick's
//! x-crossing, so a ball can never bounce off a paddle and score in the
//! same tick.

use crate::consts::CONTACT_EPSILON;
use crate::tuning::Tuning;

use super::state::{Ball, Court, Paddle, Side};

/// Outcome of a single tick's collision check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    None,
    /// Bounce off the top or bottom wall
    Wall,
    PlayerPaddle,
    AiPaddle,
    /// Ball fully exited past a goal line; the carried side scored
    Goal(Side),
}

/// Resolve the ball against the court walls and both paddles.
///
/// Wall and paddle outcomes mutate the ball's velocity and position in
/// place; a `Goal` leaves the ball untouched for the caller to reset.
pub fn resolve(
    ball: &mut Ball,
    player: &Paddle,
    ai: &Paddle,
    court: &Court,
    ball_speed: f32,
    tuning: &Tuning,
) -> Collision {
    if wall_bounce(ball, court) {
        return Collision::Wall;
    }
    if ball.vel.x < 0.0 && paddle_bounce(ball, player, ball_speed, tuning) {
        return Collision::PlayerPaddle;
    }
    if ball.vel.x > 0.0 && paddle_bounce(ball, ai, ball_speed, tuning) {
        return Collision::AiPaddle;
    }
    // Goal lines sit a full ball width past the court edge so the ball
    // visibly leaves before the score fires
    let exit = ball.diameter();
    if ball.pos.x < -exit {
        return Collision::Goal(Side::Ai);
    }
    if ball.pos.x > court.width + exit {
        return Collision::Goal(Side::Player);
    }
    Collision::None
}

/// Reflect off the top/bottom wall and clamp flush to the boundary.
/// Only fires when the ball is moving into the wall, so a ball resting on
/// the boundary cannot flip twice.
fn wall_bounce(ball: &mut Ball, court: &Court) -> bool {
    if ball.pos.y + ball.radius >= court.height && ball.vel.y > 0.0 {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = court.height - ball.radius;
        return true;
    }
    if ball.pos.y - ball.radius <= 0.0 && ball.vel.y < 0.0 {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = ball.radius;
        return true;
    }
    false
}

/// Overlap test plus bounce response for one paddle.
///
/// The y deflection grows with how far off-center the ball struck, and
/// the resulting vector is clamped so edge hits cannot add unbounded
/// energy. The ball is corrected to sit flush against the paddle face so
/// the same contact cannot re-trigger next tick.
fn paddle_bounce(ball: &mut Ball, paddle: &Paddle, ball_speed: f32, tuning: &Tuning) -> bool {
    if !overlaps(ball, paddle) {
        return false;
    }

    let hit_offset = ((ball.pos.y - paddle.pos.y) / paddle.half_height).clamp(-1.0, 1.0);
    ball.vel.x = -ball.vel.x;
    ball.vel.y += hit_offset * ball_speed * tuning.deflect_factor;
    ball.vel = ball.vel.clamp_length(0.0, ball_speed * tuning.max_speed_factor);

    let standoff = paddle.half_width + ball.radius + CONTACT_EPSILON;
    ball.pos.x = match paddle.side {
        Side::Player => paddle.pos.x + standoff,
        Side::Ai => paddle.pos.x - standoff,
    };
    true
}

fn overlaps(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.x - ball.radius < paddle.pos.x + paddle.half_width
        && ball.pos.x + ball.radius > paddle.pos.x - paddle.half_width
        && ball.pos.y - ball.radius < paddle.pos.y + paddle.half_height
        && ball.pos.y + ball.radius > paddle.pos.y - paddle.half_height
}
