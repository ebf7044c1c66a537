use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use tracing::debug;
use tui_big_text::{BigText, PixelSize};

use crate::{
    ball::{Ball, Bounces},
    config::{PLAYER_HEIGHT, PLAYER_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE},
    controller::{Controller, KeyState},
    game_theme::GameTheme,
    geometry::{Collider, EntityId, Point},
    helpers::{centered_rect, Viewport},
    player::Player,
};

const LEFT_PLAYER: EntityId = EntityId(1);
const RIGHT_PLAYER: EntityId = EntityId(2);
const BALL: EntityId = EntityId(3);

/// How a new game is put together.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameOptions {
    /// The computer plays both sides.
    pub watch: bool,
    pub random_serve: bool,
    pub theme: GameTheme,
}

/// Measured loop rates, shown in the title bar.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rates {
    pub tps: f64,
    pub fps: f64,
}

#[derive(Debug)]
pub struct Game {
    players: [Player; 2],
    ball: Ball,
    theme: GameTheme,
    is_paused: bool,
    should_exit: bool,
    ticks: u64,
    rates: Option<Rates>,
}

impl Game {
    pub fn new(options: GameOptions) -> Self {
        let left_controller = if options.watch {
            Controller::follow_ball()
        } else {
            Controller::arrow_keys()
        };
        let left = Player::new(LEFT_PLAYER, Point::default(), left_controller);
        let right = Player::new(
            RIGHT_PLAYER,
            Point::new(SCREEN_WIDTH - PLAYER_WIDTH, SCREEN_HEIGHT - PLAYER_HEIGHT),
            Controller::follow_ball(),
        );

        let ball = if options.random_serve {
            Ball::served_randomly(BALL)
        } else {
            Ball::centered(BALL)
        };

        Self {
            players: [left, right],
            ball,
            theme: options.theme,
            is_paused: false,
            should_exit: false,
            ticks: 0,
            rates: None,
        }
    }

    pub fn player(&self, index: usize) -> &Player {
        &self.players[index]
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn theme(&self) -> GameTheme {
        self.theme
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn set_rates(&mut self, rates: Rates) {
        self.rates = Some(rates);
    }

    /// Advance the court by one tick. Paused games stand still.
    pub fn update(&mut self, keys: &dyn KeyState) -> Result<Bounces> {
        if self.is_paused {
            return Ok(Bounces::default());
        }

        let ball_at = self.ball.location();
        for player in self.players.iter_mut() {
            player.update(keys, ball_at);
        }

        let [left, right] = &self.players;
        let bounces = self.ball.update(&[left, right]);
        self.ticks += 1;

        Ok(bounces)
    }

    /// Logical court size; the terminal size never changes it.
    pub fn layout(&self, _outside_width: u16, _outside_height: u16) -> (u16, u16) {
        (SCREEN_WIDTH as u16, SCREEN_HEIGHT as u16)
    }

    /// Keys that steer the game rather than a paddle.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        if key_event.kind != KeyEventKind::Press {
            return;
        }
        match key_event.code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_exit = true,
            KeyCode::Char('p') => {
                self.is_paused = !self.is_paused;
                debug!(paused = self.is_paused, "pause toggled");
            }
            KeyCode::Char('t') => {
                self.theme = self.theme.next();
                debug!(theme = self.theme.name(), "theme changed");
            }
            _ => {}
        }
    }

    fn paddle_color(&self, player: &Player) -> Color {
        let colors = self.theme.colors();
        match player.controller {
            Controller::ArrowKeys(_) => colors.human_paddle,
            Controller::FollowBall(_) => colors.cpu_paddle,
        }
    }

    fn draw_court(&self, frame: &mut Frame, inner_area: Rect) {
        let colors = self.theme.colors();
        let viewport = Viewport::fit(inner_area);

        // Old paddle and ball cells would otherwise linger between frames
        frame.render_widget(Clear, viewport.area);
        frame.render_widget(
            Block::default().style(Style::default().bg(colors.background)),
            viewport.area,
        );

        for player in &self.players {
            let (x, y) = player.location();
            let paddle_area = viewport.project(x, y, player.width(), player.height());
            let paddle = Block::default().style(Style::default().bg(self.paddle_color(player)));
            frame.render_widget(paddle, paddle_area);
        }

        let (x, y) = self.ball.location();
        let ball_area = viewport.project(x, y, self.ball.width(), self.ball.height());
        let ball = Block::default().style(Style::default().bg(colors.ball));
        frame.render_widget(ball, ball_area);
    }

    fn draw_pause(&self, frame: &mut Frame) {
        let colors = self.theme.colors();
        let area = frame.area();
        let popup_area = centered_rect(44, 10, area.width, area.height);
        frame.render_widget(Clear, popup_area);
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(colors.accent)),
            popup_area,
        );

        let [text_area, hint_area] =
            Layout::vertical([Constraint::Length(4), Constraint::Length(2)])
                .areas(popup_area.inner(Margin::new(1, 2)));

        let big_text = BigText::builder()
            .pixel_size(PixelSize::Quadrant)
            .style(Style::default().fg(colors.accent))
            .lines(vec!["PAUSED".into()])
            .alignment(Alignment::Center)
            .build();
        frame.render_widget(big_text, text_area);

        let hint = Paragraph::new(format!(
            "[P] Resume  [T] Theme: {}  [Esc] Quit",
            self.theme.name()
        ))
        .style(Style::default().fg(colors.text))
        .alignment(Alignment::Center);
        frame.render_widget(hint, hint_area);
    }

    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let colors = self.theme.colors();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Fill(1),   // court
                Constraint::Length(3), // controls
            ])
            .split(area);

        let game_area = layout[0];
        let block = Block::default()
            .title(self.get_block_title(game_area.width))
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .style(Style::default().fg(colors.border).bg(colors.background))
            .title_alignment(Alignment::Center);
        let inner_area = block.inner(game_area);
        frame.render_widget(block, game_area);

        self.draw_court(frame, inner_area);

        let controls_text = if self.is_human_playing() {
            " ↑/↓ = move  |  P = pause  |  T = theme  |  Esc = quit "
        } else {
            " watching  |  P = pause  |  T = theme  |  Esc = quit "
        };
        let controls = Paragraph::new(controls_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .style(Style::default().fg(colors.border)),
            )
            .style(Style::default().fg(colors.text))
            .alignment(Alignment::Center);
        frame.render_widget(controls, layout[1]);

        if self.is_paused {
            self.draw_pause(frame);
        }
    }

    fn is_human_playing(&self) -> bool {
        self.players
            .iter()
            .any(|player| matches!(player.controller, Controller::ArrowKeys(_)))
    }

    fn get_block_title(&self, total_width: u16) -> Line<'static> {
        let left = self.players[0].controller.label();
        let right = self.players[1].controller.label();
        let rates = match self.rates {
            Some(Rates { tps, fps }) => format!(" TPS {tps:.0} FPS {fps:.0} "),
            None => String::new(),
        };

        let used = left.len() + WINDOW_TITLE.len() + right.len() + rates.len() + 8;
        let dashes = (total_width as usize).saturating_sub(used) / 2;

        Line::from(format!(
            " {} {} {}{} {} {} ",
            left,
            "─".repeat(dashes),
            WINDOW_TITLE,
            rates,
            "─".repeat(dashes),
            right,
        ))
    }
}
