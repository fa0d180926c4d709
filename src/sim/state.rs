//! Game state and core simulation types
//!
//! All state that must be persisted for replay/determinism lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;

/// Which side of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Human player, left side
    Player,
    /// Computer opponent, right side
    Ai,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }
}

/// Ball state - live or parked at center until the next serve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BallState {
    /// Ball is in motion
    Live,
    /// Ball is stopped at court center, waiting for the launch signal.
    /// `serve_dir` is the horizontal sign of the coming serve: +1 after
    /// the AI scores, -1 after the player scores.
    WaitingToLaunch { serve_dir: f32 },
}

/// Court geometry, origin at the bottom-left corner
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Court {
    pub width: f32,
    pub height: f32,
}

impl Court {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Standard-width court with height derived from the host viewport
    /// aspect ratio
    pub fn from_aspect(aspect: f32) -> Self {
        Self {
            width: COURT_WIDTH,
            height: COURT_WIDTH / aspect,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for Court {
    fn default() -> Self {
        Self {
            width: COURT_WIDTH,
            height: COURT_HEIGHT,
        }
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub state: BallState,
}

impl Ball {
    /// Ball parked at `center` with zero velocity, waiting to serve
    pub fn waiting(center: Vec2, serve_dir: f32) -> Self {
        Self {
            pos: center,
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
            state: BallState::WaitingToLaunch { serve_dir },
        }
    }

    /// Full width of the ball
    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }

    pub fn is_live(&self) -> bool {
        matches!(self.state, BallState::Live)
    }
}

/// A paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub half_width: f32,
    pub half_height: f32,
    pub side: Side,
}

impl Paddle {
    /// Paddle at its session start position for `side`
    pub fn new(side: Side, court: &Court) -> Self {
        let x = match side {
            Side::Player => PADDLE_INSET,
            Side::Ai => court.width - PADDLE_INSET,
        };
        Self {
            pos: Vec2::new(x, court.height / 2.0),
            half_width: PADDLE_HALF_WIDTH,
            half_height: PADDLE_HALF_HEIGHT,
            side,
        }
    }

    /// Move vertically, clamped to the playable range
    pub fn move_by(&mut self, dy: f32, court: &Court) {
        self.pos.y = (self.pos.y + dy).clamp(self.half_height, court.height - self.half_height);
    }
}

/// Sound-worthy simulation moments, drained by the host after each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    SessionStarted,
    /// Ball served
    Launched,
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball bounced off a paddle
    PaddleHit(Side),
    /// A goal; the carried side scored
    Goal(Side),
    /// Difficulty stage advanced to the carried index
    StageUp(usize),
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Session RNG (serve directions, launch angles)
    pub rng: Pcg32,
    pub court: Court,
    pub tuning: Tuning,
    pub player_score: u32,
    pub ai_score: u32,
    /// Index into [`super::stages::STAGES`]; non-decreasing within a session
    pub stage_index: usize,
    /// Stage-adjusted ball speed, recomputed on stage advance
    pub current_ball_speed: f32,
    /// Stage-adjusted AI paddle speed
    pub current_ai_speed: f32,
    pub ball: Ball,
    pub player_paddle: Paddle,
    pub ai_paddle: Paddle,
    pub running: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events since the last drain (not part of the replay state)
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a stopped session state with the given seed
    pub fn new(court: Court, tuning: Tuning, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let serve_dir = if rng.random::<bool>() { 1.0 } else { -1.0 };
        Self {
            seed,
            rng,
            player_paddle: Paddle::new(Side::Player, &court),
            ai_paddle: Paddle::new(Side::Ai, &court),
            ball: Ball::waiting(court.center(), serve_dir),
            court,
            player_score: 0,
            ai_score: 0,
            stage_index: 0,
            current_ball_speed: tuning.ball_base_speed,
            current_ai_speed: tuning.ai_base_speed,
            tuning,
            running: false,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Reset all mutable state and begin play, serving in a random
    /// direction. Safe at any tick boundary.
    pub fn start(&mut self) {
        self.player_score = 0;
        self.ai_score = 0;
        self.stage_index = 0;
        self.current_ball_speed = self.tuning.ball_base_speed;
        self.current_ai_speed = self.tuning.ai_base_speed;
        self.player_paddle = Paddle::new(Side::Player, &self.court);
        self.ai_paddle = Paddle::new(Side::Ai, &self.court);
        let serve_dir = if self.rng.random::<bool>() { 1.0 } else { -1.0 };
        self.reset_ball(serve_dir);
        self.time_ticks = 0;
        self.running = true;
        self.push_event(GameEvent::SessionStarted);
    }

    /// Park the ball at center, stopped, waiting to serve toward `serve_dir`
    pub fn reset_ball(&mut self, serve_dir: f32) {
        self.ball = Ball::waiting(self.court.center(), serve_dir);
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player_paddle,
            Side::Ai => &self.ai_paddle,
        }
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Hand accumulated events to the host
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_waits_with_zero_velocity() {
        let state = GameState::new(Court::default(), Tuning::default(), 42);
        assert!(!state.running);
        assert!(matches!(
            state.ball.state,
            BallState::WaitingToLaunch { serve_dir } if serve_dir.abs() == 1.0
        ));
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert_eq!(state.ball.pos, state.court.center());
    }

    #[test]
    fn start_resets_scores_and_stage() {
        let mut state = GameState::new(Court::default(), Tuning::default(), 42);
        state.player_score = 5;
        state.ai_score = 2;
        state.stage_index = 2;
        state.current_ball_speed = 999.0;

        state.start();
        assert!(state.running);
        assert_eq!(state.player_score, 0);
        assert_eq!(state.ai_score, 0);
        assert_eq!(state.stage_index, 0);
        assert_eq!(state.current_ball_speed, state.tuning.ball_base_speed);
        assert_eq!(state.drain_events(), vec![GameEvent::SessionStarted]);
    }

    #[test]
    fn paddles_start_inset_and_centered() {
        let court = Court::default();
        let state = GameState::new(court, Tuning::default(), 7);
        assert_eq!(state.player_paddle.pos.x, crate::consts::PADDLE_INSET);
        assert_eq!(state.ai_paddle.pos.x, court.width - crate::consts::PADDLE_INSET);
        assert_eq!(state.player_paddle.pos.y, court.height / 2.0);
    }

    #[test]
    fn paddle_move_clamps_to_court() {
        let court = Court::default();
        let mut paddle = Paddle::new(Side::Player, &court);
        paddle.move_by(-10_000.0, &court);
        assert_eq!(paddle.pos.y, paddle.half_height);
        paddle.move_by(10_000.0, &court);
        assert_eq!(paddle.pos.y, court.height - paddle.half_height);
    }

    #[test]
    fn drain_events_empties_queue() {
        let mut state = GameState::new(Court::default(), Tuning::default(), 1);
        state.push_event(GameEvent::WallBounce);
        state.push_event(GameEvent::Goal(Side::Player));
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::WallBounce, GameEvent::Goal(Side::Player)]
        );
        assert!(state.drain_events().is_empty());
    }
}
