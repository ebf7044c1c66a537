use crossterm::event::KeyCode;
use tick_pong::{
    config::{BALL_SIZE, BALL_SPEED, PLAYER_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH},
    controller::KeyState,
    game::{Game, GameOptions},
    geometry::Collider,
};

struct Holding(Vec<KeyCode>);

impl KeyState for Holding {
    fn is_pressed(&self, key: KeyCode) -> bool {
        self.0.contains(&key)
    }
}

fn assert_on_court(game: &Game) {
    for index in 0..2 {
        let (_, y) = game.player(index).location();
        assert!(y >= 0.0, "paddle {index} above the court: {y}");
        assert!(
            y + PLAYER_HEIGHT <= SCREEN_HEIGHT,
            "paddle {index} below the court: {y}"
        );
    }

    let ball = game.ball();
    let (x, y) = ball.location();
    assert!(x >= -BALL_SPEED && x + BALL_SIZE <= SCREEN_WIDTH + BALL_SPEED);
    assert!(y >= -BALL_SPEED && y + BALL_SIZE <= SCREEN_HEIGHT + BALL_SPEED);
    assert_eq!(ball.x_speed.abs(), BALL_SPEED);
    assert_eq!(ball.y_speed.abs(), BALL_SPEED);
}

#[test]
fn test_watch_mode_rallies() {
    let mut game = Game::new(GameOptions {
        watch: true,
        ..GameOptions::default()
    });
    let keys = Holding(vec![]);
    let left_id = game.player(0).id();
    let right_id = game.player(1).id();

    let mut returns = [0u32; 2];
    for _ in 0..10_000 {
        let bounces = game.update(&keys).unwrap();
        match bounces.paddle {
            Some(id) if id == left_id => returns[0] += 1,
            Some(id) if id == right_id => returns[1] += 1,
            Some(other) => panic!("bounced off unknown collider {other:?}"),
            None => {}
        }
        assert_on_court(&game);
    }

    assert_eq!(game.ticks(), 10_000);
    assert!(returns[0] > 0, "left paddle never returned the ball");
    assert!(returns[1] > 0, "right paddle never returned the ball");
}

#[test]
fn test_held_arrow_moves_human_paddle() {
    let mut game = Game::new(GameOptions::default());

    let down = Holding(vec![KeyCode::Down]);
    for _ in 0..30 {
        game.update(&down).unwrap();
    }
    assert_eq!(game.player(0).location().1, 60.0);

    let both = Holding(vec![KeyCode::Up, KeyCode::Down]);
    for _ in 0..30 {
        game.update(&both).unwrap();
    }
    assert_eq!(game.player(0).location().1, 60.0);

    let up = Holding(vec![KeyCode::Up]);
    for _ in 0..200 {
        game.update(&up).unwrap();
        assert_on_court(&game);
    }
    assert_eq!(game.player(0).location().1, 2.0);
}

#[test]
fn test_random_serve_stays_diagonal() {
    for _ in 0..20 {
        let mut game = Game::new(GameOptions {
            random_serve: true,
            ..GameOptions::default()
        });
        for _ in 0..500 {
            game.update(&Holding(vec![])).unwrap();
            assert_on_court(&game);
        }
    }
}
