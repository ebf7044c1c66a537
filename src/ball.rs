use rand::random;
use tracing::trace;

use crate::{
    config::{BALL_SIZE, BALL_SPEED, SCREEN_HEIGHT, SCREEN_WIDTH},
    geometry::{span_within, spans_touch, Collider, EntityId, Point},
};

/// What happened to the ball during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounces {
    /// Id of the collider the ball bounced off, if any.
    pub paddle: Option<EntityId>,
    pub edge_x: bool,
    pub edge_y: bool,
}

#[derive(Debug, Clone)]
pub struct Ball {
    id: EntityId,
    pub point: Point,
    pub x_speed: f64,
    pub y_speed: f64,
}

impl Ball {
    pub fn new(id: EntityId, point: Point, x_speed: f64, y_speed: f64) -> Self {
        Self {
            id,
            point,
            x_speed,
            y_speed,
        }
    }

    /// A ball in the middle of the court heading down and right.
    pub fn centered(id: EntityId) -> Self {
        Self::new(
            id,
            Point::new(
                SCREEN_WIDTH / 2.0 - BALL_SIZE / 2.0,
                SCREEN_HEIGHT / 2.0 - BALL_SIZE / 2.0,
            ),
            BALL_SPEED,
            BALL_SPEED,
        )
    }

    /// Same as `centered`, but each velocity component gets a random sign.
    pub fn served_randomly(id: EntityId) -> Self {
        let mut ball = Self::centered(id);
        if random::<bool>() {
            ball.x_speed = -ball.x_speed;
        }
        if random::<bool>() {
            ball.y_speed = -ball.y_speed;
        }
        ball
    }

    fn boxed_in(&self, x: f64, y: f64, other: &dyn Collider) -> bool {
        let (cx, cy) = other.location();
        spans_touch(x, self.width(), cx, other.width())
            && span_within(y, self.height(), cy, other.height())
    }

    /// Bounce off the first collider the ball is about to enter, bounce off
    /// the court edges, then move.
    ///
    /// Bounces are edge triggered: a ball that already overlaps a collider
    /// passes through it instead of rattling back and forth.
    ///
    /// # Panics
    ///
    /// If the ball itself appears in `colliders`.
    pub fn update(&mut self, colliders: &[&dyn Collider]) -> Bounces {
        let mut bounces = Bounces::default();

        for collider in colliders {
            if collider.id() == self.id {
                panic!("ball.update: ball cannot collide with itself");
            }

            let in_paddle = self.boxed_in(self.point.x, self.point.y, *collider);
            let in_paddle_next_tick = self.boxed_in(
                self.point.x + self.x_speed,
                self.point.y + self.y_speed,
                *collider,
            );
            if !in_paddle && in_paddle_next_tick {
                self.x_speed = -self.x_speed;
                bounces.paddle = Some(collider.id());
                trace!(paddle = collider.id().0, x = self.point.x, "ball hit paddle");
                break;
            }
        }

        // No scoring yet, the court edges just bounce
        if self.point.x <= 0.0 || self.point.x + self.width() >= SCREEN_WIDTH {
            self.x_speed = -self.x_speed;
            bounces.edge_x = true;
        }
        if self.point.y <= 0.0 || self.point.y + self.height() >= SCREEN_HEIGHT {
            self.y_speed = -self.y_speed;
            bounces.edge_y = true;
        }
        if bounces.edge_x || bounces.edge_y {
            trace!(?bounces, x = self.point.x, y = self.point.y, "ball hit edge");
        }

        self.point.x += self.x_speed;
        self.point.y += self.y_speed;

        bounces
    }
}

impl Collider for Ball {
    fn id(&self) -> EntityId {
        self.id
    }

    fn width(&self) -> f64 {
        BALL_SIZE
    }

    fn height(&self) -> f64 {
        BALL_SIZE
    }

    fn location(&self) -> (f64, f64) {
        self.point.location()
    }
}
