//! Per-tick simulation advance
//!
//! One `tick` call is one frame: paddles move, the ball integrates, at
//! most one collision outcome resolves, goals feed scoring and stage
//! progression.

use glam::Vec2;
use rand::Rng;

use super::ai;
use super::collision::{self, Collision};
use super::stages::STAGES;
use super::state::{BallState, GameEvent, GameState, Side};

/// Input sampled once per tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Joystick vertical value in [-1, 1], 0 when idle
    pub control: f32,
    /// Launch press observed since the previous tick
    pub launch: bool,
}

/// Advance the game state by one tick. No-op until the session starts.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if !state.running {
        return;
    }
    let dt = dt.clamp(0.0, state.tuning.max_dt);
    state.time_ticks += 1;

    // Player paddle from the joystick value
    let control = input.control.clamp(-1.0, 1.0);
    let court = state.court;
    state
        .player_paddle
        .move_by(control * state.tuning.player_paddle_speed * dt, &court);

    // AI paddle tracks the ball (which sits at center while waiting)
    ai::update_paddle(
        &mut state.ai_paddle,
        state.ball.pos.y,
        state.current_ai_speed,
        state.tuning.ai_dead_zone,
        &court,
        dt,
    );

    match state.ball.state {
        BallState::WaitingToLaunch { .. } => {
            if input.launch {
                try_launch(state);
            }
        }
        BallState::Live => {
            state.ball.pos += state.ball.vel * dt;
            let outcome = collision::resolve(
                &mut state.ball,
                &state.player_paddle,
                &state.ai_paddle,
                &court,
                state.current_ball_speed,
                &state.tuning,
            );
            match outcome {
                Collision::None => {}
                Collision::Wall => state.push_event(GameEvent::WallBounce),
                Collision::PlayerPaddle => state.push_event(GameEvent::PaddleHit(Side::Player)),
                Collision::AiPaddle => state.push_event(GameEvent::PaddleHit(Side::Ai)),
                Collision::Goal(side) => score_point(state, side),
            }
        }
    }

    debug_assert!(state.stage_index < STAGES.len());
}

/// Serve the waiting ball: a random angle within the launch cone, toward
/// the stored serve direction, at the stage's ball speed. No-op unless
/// the session is running and a serve is pending.
pub fn try_launch(state: &mut GameState) {
    if !state.running {
        return;
    }
    let BallState::WaitingToLaunch { serve_dir } = state.ball.state else {
        return;
    };
    let max = state.tuning.launch_angle_max;
    let theta = state.rng.random_range(-max..=max);
    launch_at_angle(state, serve_dir, theta);
}

/// Put the waiting ball in motion at exactly `theta` off the horizontal
pub(crate) fn launch_at_angle(state: &mut GameState, serve_dir: f32, theta: f32) {
    state.ball.vel = Vec2::new(
        theta.cos() * state.current_ball_speed * serve_dir,
        theta.sin() * state.current_ball_speed,
    );
    state.ball.state = BallState::Live;
    state.push_event(GameEvent::Launched);
}

/// Award a goal to `side`, advance the stage if a threshold was crossed,
/// then park the ball for the next serve.
pub fn score_point(state: &mut GameState, side: Side) {
    match side {
        Side::Player => state.player_score += 1,
        Side::Ai => state.ai_score += 1,
    }
    state.push_event(GameEvent::Goal(side));
    check_stage_progression(state);

    // The next serve launches toward whichever side just scored
    let serve_dir = match side {
        Side::Ai => 1.0,
        Side::Player => -1.0,
    };
    state.reset_ball(serve_dir);
}

/// Advance one stage when either score reaches the next threshold.
///
/// At most one advance per goal: a score that jumps several thresholds at
/// once picks up the remaining stages on later goals.
pub fn check_stage_progression(state: &mut GameState) {
    let next = state.stage_index + 1;
    let Some(stage) = STAGES.get(next) else {
        return;
    };
    if state.player_score >= stage.score_threshold || state.ai_score >= stage.score_threshold {
        state.stage_index = next;
        apply_stage(state);
        state.push_event(GameEvent::StageUp(next));
    }
}

/// Recompute stage-adjusted speeds from the active stage's multipliers
fn apply_stage(state: &mut GameState) {
    let stage = &STAGES[state.stage_index];
    state.current_ball_speed = state.tuning.ball_base_speed * stage.ball_speed_multiplier;
    state.current_ai_speed = state.tuning.ai_base_speed * stage.ai_speed_multiplier;
}
