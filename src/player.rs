use crate::{
    config::{PLAYER_HEIGHT, PLAYER_SPEED, PLAYER_WIDTH, SCREEN_HEIGHT},
    controller::{Controller, Direction, KeyState, Sight},
    geometry::{Collider, EntityId, Point},
};

/// A paddle. Only ever moves vertically.
#[derive(Debug, Clone)]
pub struct Player {
    id: EntityId,
    /// Top left corner of the paddle.
    pub point: Point,
    pub speed: f64,
    pub controller: Controller,
}

impl Player {
    pub fn new(id: EntityId, point: Point, controller: Controller) -> Self {
        Self {
            id,
            point,
            speed: PLAYER_SPEED,
            controller,
        }
    }

    /// Ask the controller once and step by `speed`, keeping a one step margin
    /// beyond the paddle to either edge of the court.
    pub fn update(&mut self, keys: &dyn KeyState, ball: (f64, f64)) -> Direction {
        let sight = Sight {
            ball,
            paddle: self.point.location(),
            paddle_speed: self.speed,
        };
        let dir = self.controller.input(keys, &sight);

        match dir {
            Direction::Up if self.point.y - self.speed * 2.0 >= 0.0 => {
                self.point.y -= self.speed;
            }
            Direction::Down
                if self.point.y + self.height() + self.speed * 2.0 <= SCREEN_HEIGHT =>
            {
                self.point.y += self.speed;
            }
            _ => {}
        }

        dir
    }
}

impl Collider for Player {
    fn id(&self) -> EntityId {
        self.id
    }

    fn width(&self) -> f64 {
        PLAYER_WIDTH
    }

    fn height(&self) -> f64 {
        PLAYER_HEIGHT
    }

    fn location(&self) -> (f64, f64) {
        self.point.location()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    struct Holding(Option<KeyCode>);

    impl KeyState for Holding {
        fn is_pressed(&self, key: KeyCode) -> bool {
            self.0 == Some(key)
        }
    }

    fn human_at(y: f64) -> Player {
        Player::new(EntityId(1), Point::new(0.0, y), Controller::arrow_keys())
    }

    #[test]
    fn moves_one_step_per_tick() {
        let mut player = human_at(100.0);
        player.update(&Holding(Some(KeyCode::Up)), (0.0, 0.0));
        assert_eq!(player.point.y, 98.0);
        player.update(&Holding(Some(KeyCode::Down)), (0.0, 0.0));
        player.update(&Holding(Some(KeyCode::Down)), (0.0, 0.0));
        assert_eq!(player.point.y, 102.0);
        player.update(&Holding(None), (0.0, 0.0));
        assert_eq!(player.point.y, 102.0);
        assert_eq!(player.point.x, 0.0);
    }

    #[test]
    fn never_leaves_the_court() {
        let mut player = human_at(100.0);
        for _ in 0..500 {
            player.update(&Holding(Some(KeyCode::Up)), (0.0, 0.0));
            assert!(player.point.y >= 0.0);
        }
        assert_eq!(player.point.y, PLAYER_SPEED);

        for _ in 0..500 {
            player.update(&Holding(Some(KeyCode::Down)), (0.0, 0.0));
            assert!(player.point.y + PLAYER_HEIGHT <= SCREEN_HEIGHT);
        }
        assert_eq!(player.point.y, SCREEN_HEIGHT - PLAYER_HEIGHT - PLAYER_SPEED);
    }

    #[test]
    fn clamps_for_other_speeds() {
        for speed in [1.0, 3.0, 7.5] {
            for start in [0.0, 37.0, SCREEN_HEIGHT - PLAYER_HEIGHT] {
                let mut player = human_at(start);
                player.speed = speed;
                for _ in 0..200 {
                    player.update(&Holding(Some(KeyCode::Down)), (0.0, 0.0));
                    assert!(player.point.y + PLAYER_HEIGHT <= SCREEN_HEIGHT);
                }
                for _ in 0..200 {
                    player.update(&Holding(Some(KeyCode::Up)), (0.0, 0.0));
                    assert!(player.point.y >= 0.0);
                }
            }
        }
    }
}
