use crossterm::event::KeyCode;
use tracing::trace;

use crate::config::{DECISION_BUFFER, SCREEN_WIDTH, VISIBILITY_RATIO};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    Down,
    #[default]
    Nothing,
}

/// Source of "is this key held right now" answers.
pub trait KeyState {
    fn is_pressed(&self, key: KeyCode) -> bool;
}

/// What a controller gets to look at on a given tick.
#[derive(Debug, Clone, Copy)]
pub struct Sight {
    pub ball: (f64, f64),
    pub paddle: (f64, f64),
    pub paddle_speed: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ArrowKeys;

impl ArrowKeys {
    pub fn input(&self, keys: &dyn KeyState) -> Direction {
        let up_pressed = keys.is_pressed(KeyCode::Up);
        let down_pressed = keys.is_pressed(KeyCode::Down);
        if up_pressed == down_pressed {
            return Direction::Nothing;
        }
        if up_pressed {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

/// Chases the ball vertically, but only once it is close enough to see and
/// only re-deciding every `DECISION_BUFFER` ticks.
#[derive(Debug, Clone, Copy, Default)]
pub struct FollowBall {
    last_decision: Direction,
    count: u32,
}

impl FollowBall {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticks left before the next decision is made.
    pub fn committed_for(&self) -> u32 {
        self.count
    }

    pub fn input(&mut self, sight: &Sight) -> Direction {
        if self.count > 0 {
            self.count -= 1;
            return self.last_decision;
        }

        let (ball_x, ball_y) = sight.ball;
        let (x, y) = sight.paddle;

        if (ball_x - x).abs() < VISIBILITY_RATIO * SCREEN_WIDTH {
            let decision = if ball_y < y - sight.paddle_speed {
                Direction::Up
            } else if ball_y > y + sight.paddle_speed {
                Direction::Down
            } else {
                return Direction::Nothing;
            };
            trace!(?decision, ball_y, paddle_y = y, "follow ball decided");
            self.count += DECISION_BUFFER;
            self.last_decision = decision;
            return decision;
        }

        Direction::Nothing
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Controller {
    ArrowKeys(ArrowKeys),
    FollowBall(FollowBall),
}

impl Controller {
    pub fn arrow_keys() -> Self {
        Controller::ArrowKeys(ArrowKeys)
    }

    pub fn follow_ball() -> Self {
        Controller::FollowBall(FollowBall::new())
    }

    pub fn input(&mut self, keys: &dyn KeyState, sight: &Sight) -> Direction {
        match self {
            Controller::ArrowKeys(arrows) => arrows.input(keys),
            Controller::FollowBall(ai) => ai.input(sight),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Controller::ArrowKeys(_) => "You",
            Controller::FollowBall(_) => "CPU",
        }
    }
}
