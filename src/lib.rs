//! Two paddle Pong on a fixed 320x240 court, drawn in the terminal.
//!
//! The left paddle follows the arrow keys, the right one chases the ball
//! with a deliberately slow reaction. See [`game::Game`] for the per tick
//! update and draw entry points.

pub mod ball;
pub mod config;
pub mod controller;
pub mod game;
pub mod game_theme;
pub mod geometry;
pub mod helpers;
pub mod keyboard;
pub mod player;
pub mod terminal;
pub mod tps;
