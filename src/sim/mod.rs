//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and
//! deterministic:
//! - Seeded RNG only
//! - All per-tick mutation inside `tick`
//! - No rendering, audio or platform dependencies

pub mod ai;
pub mod collision;
pub mod stages;
pub mod state;
pub mod tick;

pub use collision::Collision;
pub use stages::{STAGES, Stage};
pub use state::{Ball, BallState, Court, GameEvent, GameState, Paddle, Side};
pub use tick::{TickInput, tick, try_launch};
