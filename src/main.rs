use std::{
    fs::File,
    io,
    path::PathBuf,
    sync::Mutex,
    time::{Duration, Instant},
};

use clap::{ArgAction, Parser};
use color_eyre::{
    eyre::{eyre, WrapErr},
    Result,
};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{supports_keyboard_enhancement, SetTitle},
};
use ratatui::DefaultTerminal;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use tick_pong::{
    config::{DEFAULT_TPS, MIN_HEALTHY_TPS, WINDOW_TITLE},
    game::{Game, GameOptions, Rates},
    game_theme::GameTheme,
    keyboard::Keyboard,
    terminal::ReleaseReporting,
    tps::TickCounter,
};

/// Terminal Pong against a slow-witted computer
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Game ticks per second
    #[arg(long, default_value_t = DEFAULT_TPS, value_parser = clap::value_parser!(u32).range(1..=240))]
    tps: u32,

    /// Colour theme
    #[arg(long, value_enum, default_value_t = GameTheme::Monokai)]
    theme: GameTheme,

    /// Let the computer play both paddles
    #[arg(long)]
    watch: bool,

    /// Serve the ball in a random diagonal direction
    #[arg(long)]
    random_serve: bool,

    /// Where log output goes; the terminal is busy drawing the court
    #[arg(long, default_value = "tick-pong.log")]
    log_file: PathBuf,

    /// Verbosity, repeat for more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(args: &Args) -> Result<()> {
    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    let file = File::create(&args.log_file)
        .wrap_err_with(|| format!("Create log file {:?}", args.log_file))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| eyre!("Tracing init failed: {err}"))?;

    Ok(())
}

struct App {
    game: Game,
    keyboard: Keyboard,
    tick_every: Duration,
    ticks: TickCounter,
    frames: TickCounter,
    last_slow_warning: Option<Instant>,
}

impl App {
    fn new(game: Game, keyboard: Keyboard, tps: u32) -> Self {
        Self {
            game,
            keyboard,
            tick_every: Duration::from_secs(1) / tps,
            ticks: TickCounter::new(),
            frames: TickCounter::new(),
            last_slow_warning: None,
        }
    }

    fn run(&mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let size = terminal.size()?;
        let (court_width, court_height) = self.game.layout(size.width, size.height);
        debug!(
            court_width,
            court_height,
            terminal_width = size.width,
            terminal_height = size.height,
            "court laid out"
        );

        let mut next_tick = Instant::now();

        while !self.game.should_exit() {
            let timeout = next_tick.saturating_duration_since(Instant::now());
            let mut redraw = false;
            if event::poll(timeout)? {
                redraw = self.handle_events()?;
            }

            let now = Instant::now();
            if now >= next_tick {
                self.keyboard.refresh(now);
                self.game.update(&self.keyboard)?;
                self.ticks.record(now);
                self.report_rates(now);

                next_tick += self.tick_every;
                // Don't try to catch up after a long stall
                if now.saturating_duration_since(next_tick) > self.tick_every * 5 {
                    next_tick = now + self.tick_every;
                }
                redraw = true;
            }

            if redraw {
                terminal.draw(|frame| self.game.draw(frame))?;
                self.frames.record(Instant::now());
            }
        }

        Ok(())
    }

    /// Drain pending terminal events. Returns whether the screen needs a redraw.
    fn handle_events(&mut self) -> io::Result<bool> {
        let mut redraw = false;
        loop {
            match event::read()? {
                Event::Key(key_event) => {
                    let was_paused = self.game.is_paused();
                    self.game.handle_key_event(key_event);
                    if was_paused != self.game.is_paused() {
                        self.keyboard.clear();
                    }
                    self.keyboard.handle_key_event(key_event, Instant::now());
                    redraw |= self.game.is_paused();
                }
                Event::Resize(_, _) => redraw = true,
                _ => {}
            }
            if !event::poll(Duration::ZERO)? {
                break;
            }
        }
        Ok(redraw)
    }

    fn report_rates(&mut self, now: Instant) {
        let Some(tps) = self.ticks.per_second(now) else {
            return;
        };
        let fps = self.frames.per_second(now).unwrap_or(0.0);
        self.game.set_rates(Rates { tps, fps });

        if tps < MIN_HEALTHY_TPS {
            let due = self
                .last_slow_warning
                .is_none_or(|last| now.saturating_duration_since(last) >= Duration::from_secs(1));
            if due {
                warn!(tps, fps, "ticks running slow");
                self.last_slow_warning = Some(now);
            }
        }
    }
}

/// Everything that happens between `ratatui::init` and `ratatui::restore`.
/// Errors come back out instead of skipping the restore.
fn run_in_terminal(app: &mut App, terminal: DefaultTerminal) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, SetTitle(WINDOW_TITLE)).wrap_err("Set terminal title")?;

    let _release_reporting = if app.keyboard.reports_releases() {
        Some(ReleaseReporting::enable(io::stdout()).wrap_err("Enable key release events")?)
    } else {
        None
    };

    app.run(terminal)
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    setup_logging(&args)?;
    info!(
        tps = args.tps,
        theme = args.theme.name(),
        watch = args.watch,
        random_serve = args.random_serve,
        "starting"
    );

    let game = Game::new(GameOptions {
        watch: args.watch,
        random_serve: args.random_serve,
        theme: args.theme,
    });

    let reports_releases = matches!(supports_keyboard_enhancement(), Ok(true));
    info!(reports_releases, "keyboard capabilities");

    let mut app = App::new(game, Keyboard::new(reports_releases), args.tps);

    let terminal = ratatui::init();
    let app_result = run_in_terminal(&mut app, terminal);
    ratatui::restore();

    match &app_result {
        Ok(()) => println!(
            "Thanks for playing {}! {} ticks played.",
            WINDOW_TITLE,
            app.game.ticks()
        ),
        Err(err) => warn!(%err, "game ended with error"),
    }

    app_result
}
