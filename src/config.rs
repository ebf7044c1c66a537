//! Court dimensions, entity sizes and speeds.
//!
//! Everything here is fixed at compile time. The court is a 320x240 logical
//! surface regardless of how large the terminal is.

pub const SCREEN_WIDTH: f64 = 320.0;
pub const SCREEN_HEIGHT: f64 = 240.0;

pub const PLAYER_WIDTH: f64 = 10.0;
pub const PLAYER_HEIGHT: f64 = 50.0;
pub const PLAYER_SPEED: f64 = 2.0;

pub const BALL_SIZE: f64 = 10.0;
pub const BALL_SPEED: f64 = 1.0;

/// Ticks for which `FollowBall` keeps repeating its last decision.
pub const DECISION_BUFFER: u32 = 15;

/// Fraction of the court width within which the AI can "see" the ball.
pub const VISIBILITY_RATIO: f64 = 0.6;

pub const DEFAULT_TPS: u32 = 60;

/// Below this the loop logs a slow-tick warning.
pub const MIN_HEALTHY_TPS: f64 = 55.0;

pub const WINDOW_TITLE: &str = "tick.pong";
