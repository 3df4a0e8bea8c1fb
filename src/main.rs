use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use ai_snake::clock::TickClock;
use ai_snake::config::{AiSettings, FRAME_INTERVAL_MS, THEME_ARCADE};
use ai_snake::feedback::Feedback;
use ai_snake::game::{GameEvent, GameState};
use ai_snake::input::{GameInput, InputHandler};
use ai_snake::renderer::FrameInfo;
use ai_snake::score::{data_dir, load_high_score, save_high_score};
use ai_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use ai_snake::ui::hud::HudValueFlash;
use clap::Parser;
use log::{info, warn};
use simplelog::{Config, LevelFilter, WriteLogger};

const LOG_FILE_NAME: &str = "ai-snake.log";

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Place food uniformly at random instead of near the snake.
    #[arg(long = "no-smart-food")]
    no_smart_food: bool,

    /// Start with the ghost opponent enabled.
    #[arg(long)]
    ghost: bool,

    /// Keep the starting speed regardless of performance.
    #[arg(long = "no-adaptive")]
    no_adaptive: bool,

    /// Seed for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,

    /// Log file path (defaults to the local data directory).
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,

    /// Disable the terminal bell.
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn settings(&self) -> AiSettings {
        AiSettings {
            smart_food: !self.no_smart_food,
            ghost: self.ghost,
            adaptive: !self.no_adaptive,
        }
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    // Warnings must reach stderr before raw mode takes the terminal.
    let high_score = match load_high_score() {
        Ok(score) => score,
        Err(error) => {
            eprintln!("Failed to load high score, starting from 0: {error}");
            warn!("failed to load high score: {error}");
            0
        }
    };

    install_panic_hook();

    let mut session = TerminalSession::enter(!cli.quiet)?;
    let result = run(&mut session, &cli, high_score);
    drop(session);

    info!("session ended");
    result
}

fn run(session: &mut TerminalSession, cli: &Cli, high_score: u32) -> io::Result<()> {
    let settings = cli.settings();
    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(settings, high_score, seed),
        None => GameState::new(settings, high_score),
    };
    info!(
        "starting with {settings:?}, seed {:?}, high score {high_score}",
        cli.seed
    );

    let mut input = InputHandler::new();
    let mut clock = TickClock::new(Instant::now(), state.tick_interval());
    let mut value_flash = HudValueFlash::default();
    let mut food_burst = None;
    let frame_interval = Duration::from_millis(FRAME_INTERVAL_MS);

    loop {
        let now = Instant::now();
        value_flash.observe(&state.snapshot(), now);
        let info = FrameInfo {
            theme: &THEME_ARCADE,
            now,
            value_flash,
            food_burst,
        };
        session.draw(&state.snapshot(), &info)?;

        let timeout = clock.remaining(Instant::now()).min(frame_interval);
        if let Some(game_input) = input.poll_input(timeout)? {
            if game_input == GameInput::Quit {
                break;
            }
            state.apply_input(game_input);
        }

        if clock.is_due(Instant::now()) {
            for event in state.tick() {
                session.notify(&event);
                match event {
                    GameEvent::FoodEaten { position, .. } => {
                        food_burst = Some((position, Instant::now()));
                    }
                    GameEvent::GameOver {
                        score,
                        new_high_score: true,
                        ..
                    }
                    | GameEvent::Victory {
                        score,
                        new_high_score: true,
                    } => persist_high_score(score),
                    _ => {}
                }
            }
            clock.schedule_next(Instant::now(), state.tick_interval());
        }
    }

    Ok(())
}

fn persist_high_score(score: u32) {
    match save_high_score(score) {
        Ok(()) => info!("high score {score} saved"),
        Err(error) => warn!("failed to save high score {score}: {error}"),
    }
}

fn init_logging(cli: &Cli) {
    let path = cli
        .log_file
        .clone()
        .unwrap_or_else(|| data_dir().join(LOG_FILE_NAME));
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let file = path
        .parent()
        .map_or(Ok(()), fs::create_dir_all)
        .and_then(|()| File::create(&path));
    match file {
        Ok(file) => {
            if let Err(error) = WriteLogger::init(level, Config::default(), file) {
                eprintln!("Failed to initialize logger: {error}");
            }
        }
        Err(error) => eprintln!("Failed to open log file {}: {error}", path.display()),
    }
}
