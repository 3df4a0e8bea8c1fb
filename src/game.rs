use std::time::Duration;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{AiSettings, POINTS_PER_FOOD, STANDARD_GRID, START_POSITION};
use crate::difficulty::{DifficultyAdapter, LevelUp, PerformanceSample};
use crate::food::{place_food, Placement};
use crate::ghost::{step_ghost, GhostOutcome};
use crate::grid::{Grid, Position};
use crate::input::{Direction, GameInput, InputQueue};
use crate::snake::Snake;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Ready,
    Running,
    GameOver,
    /// The snakes cover every cell; no food can be placed.
    Victory,
}

/// Why the last session ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Overlay message shown while the game is not running.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Banner {
    Ready,
    GameOver { score: u32 },
    NewHighScore { score: u32 },
    Victory { score: u32 },
}

/// Notable things that happened during a tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameEvent {
    FoodEaten {
        position: Position,
        score: u32,
    },
    LevelUp(LevelUp),
    GhostAteFood {
        position: Position,
    },
    GameOver {
        score: u32,
        reason: DeathReason,
        new_high_score: bool,
    },
    Victory {
        score: u32,
        new_high_score: bool,
    },
}

/// Immutable view handed to the renderer once per frame.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub grid: Grid,
    pub player: &'a Snake,
    pub ghost: Option<&'a Snake>,
    pub food: Position,
    pub heading: Option<Direction>,
    pub score: u32,
    pub level: u32,
    pub high_score: u32,
    pub tick_interval_ms: u64,
    pub status: GameStatus,
    pub settings: AiSettings,
    pub banner: Option<Banner>,
}

/// Complete mutable game state for one process lifetime.
///
/// Session data (snakes, food, score, difficulty) is rebuilt wholesale by
/// [`GameState::reset`]; settings, high score and the RNG survive resets.
#[derive(Debug, Clone)]
pub struct GameState {
    pub player: Snake,
    pub ghost: Option<Snake>,
    pub food: Position,
    /// Direction in effect; `None` until the first move.
    pub heading: Option<Direction>,
    pub score: u32,
    pub high_score: u32,
    pub status: GameStatus,
    pub settings: AiSettings,
    pub difficulty: DifficultyAdapter,
    pub tick_count: u64,
    pub death_reason: Option<DeathReason>,
    new_record: bool,
    elapsed_ms: u64,
    grid: Grid,
    inputs: InputQueue,
    rng: StdRng,
}

impl GameState {
    /// Creates a state seeded from OS entropy.
    #[must_use]
    pub fn new(settings: AiSettings, high_score: u32) -> Self {
        Self::with_rng(settings, high_score, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(settings: AiSettings, high_score: u32, seed: u64) -> Self {
        Self::with_rng(settings, high_score, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: AiSettings, high_score: u32, mut rng: StdRng) -> Self {
        let grid = Grid::new(STANDARD_GRID);
        let player = Snake::new(start_position());
        let food = place_food(
            &mut rng,
            grid,
            Placement::from_toggle(settings.smart_food),
            &player,
            None,
        );

        Self {
            player,
            ghost: None,
            food,
            heading: None,
            score: 0,
            high_score,
            status: GameStatus::Ready,
            settings,
            difficulty: DifficultyAdapter::new(),
            tick_count: 0,
            death_reason: None,
            new_record: false,
            elapsed_ms: 0,
            grid,
            inputs: InputQueue::new(),
            rng,
        }
    }

    /// Rebuilds all session data and returns to `Ready`.
    ///
    /// Ignored while a game is running.
    pub fn reset(&mut self) {
        if self.status == GameStatus::Running {
            return;
        }

        self.player = Snake::new(start_position());
        self.ghost = None;
        self.heading = None;
        self.score = 0;
        self.difficulty = DifficultyAdapter::new();
        self.tick_count = 0;
        self.death_reason = None;
        self.new_record = false;
        self.elapsed_ms = 0;
        self.inputs.clear();
        self.food = self.next_food();
        self.status = GameStatus::Ready;

        debug!("session reset, food at {:?}", self.food);
    }

    /// Applies one external input event.
    ///
    /// Directions are queued and take effect on the next tick; the first
    /// direction while `Ready` starts the game.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => match self.status {
                GameStatus::Ready => {
                    self.status = GameStatus::Running;
                    self.inputs.push(direction);
                    info!("game started heading {direction:?}");
                }
                GameStatus::Running => self.inputs.push(direction),
                GameStatus::GameOver | GameStatus::Victory => {}
            },
            GameInput::Reset => self.reset(),
            GameInput::ToggleSmartFood => {
                self.settings.smart_food = !self.settings.smart_food;
                info!("smart food placement: {}", self.settings.smart_food);
            }
            GameInput::ToggleGhost => {
                self.settings.ghost = !self.settings.ghost;
                if !self.settings.ghost {
                    self.ghost = None;
                }
                info!("ghost opponent: {}", self.settings.ghost);
            }
            GameInput::ToggleAdaptive => {
                self.settings.adaptive = !self.settings.adaptive;
                info!("adaptive difficulty: {}", self.settings.adaptive);
            }
            GameInput::Quit => {}
        }
    }

    /// Advances simulation by one gameplay tick.
    ///
    /// Order: direction, player move, collision, food, difficulty, ghost.
    /// Does nothing unless the game is running.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.status != GameStatus::Running {
            return events;
        }

        self.tick_count += 1;
        self.elapsed_ms += self.difficulty.tick_interval_ms();

        if let Some(direction) = self.inputs.drain_latest_valid(self.heading) {
            self.heading = Some(direction);
        }
        let Some(direction) = self.heading else {
            return events;
        };

        let candidate = self.player.next_head(direction);
        match self.grid.is_occupied(candidate, &[&self.player]) {
            Err(error) => {
                debug!("head left the board: {error}");
                events.push(self.game_over(DeathReason::WallCollision));
                return events;
            }
            Ok(true) => {
                events.push(self.game_over(DeathReason::SelfCollision));
                return events;
            }
            Ok(false) => {}
        }

        if candidate == self.food {
            self.player.grow(candidate);
            self.score += POINTS_PER_FOOD;
            debug!("food eaten at {candidate:?}, score {}", self.score);

            if let Some(level_up) = self.update_difficulty() {
                events.push(GameEvent::LevelUp(level_up));
            }
            events.push(GameEvent::FoodEaten {
                position: candidate,
                score: self.score,
            });
            if self.board_is_full() {
                events.push(self.victory());
                return events;
            }
            self.food = self.next_food();
        } else {
            self.player.advance(candidate);
        }

        if self.settings.ghost {
            let outcome = step_ghost(&mut self.rng, self.grid, &mut self.ghost, self.food);
            if outcome == GhostOutcome::AteFood {
                let position = self.food;
                debug!("ghost ate food at {position:?}");
                events.push(GameEvent::GhostAteFood { position });
                if self.board_is_full() {
                    events.push(self.victory());
                    return events;
                }
                self.food = self.next_food();
            }
        }

        events
    }

    /// Returns an immutable view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: self.grid,
            player: &self.player,
            ghost: self.ghost.as_ref(),
            food: self.food,
            heading: self.heading,
            score: self.score,
            level: self.level(),
            high_score: self.high_score,
            tick_interval_ms: self.difficulty.tick_interval_ms(),
            status: self.status,
            settings: self.settings,
            banner: self.banner(),
        }
    }

    /// Overlay to show for the current status, if any.
    #[must_use]
    pub fn banner(&self) -> Option<Banner> {
        match self.status {
            GameStatus::Ready => Some(Banner::Ready),
            GameStatus::Running => None,
            GameStatus::GameOver if self.new_record => Some(Banner::NewHighScore {
                score: self.score,
            }),
            GameStatus::GameOver => Some(Banner::GameOver { score: self.score }),
            GameStatus::Victory => Some(Banner::Victory { score: self.score }),
        }
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.difficulty.level()
    }

    /// Delay before the next tick should run.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.difficulty.tick_interval_ms())
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    fn board_is_full(&self) -> bool {
        let mut occupants = vec![&self.player];
        occupants.extend(self.ghost.as_ref());
        self.grid.is_full(&occupants)
    }

    fn next_food(&mut self) -> Position {
        place_food(
            &mut self.rng,
            self.grid,
            Placement::from_toggle(self.settings.smart_food),
            &self.player,
            self.ghost.as_ref(),
        )
    }

    fn update_difficulty(&mut self) -> Option<LevelUp> {
        if !self.settings.adaptive {
            return None;
        }

        let level_up = self.difficulty.record(PerformanceSample {
            score: self.score,
            snake_length: self.player.len(),
            timestamp_ms: self.elapsed_ms,
        })?;
        info!(
            "level {} reached, tick interval {}ms",
            level_up.level, level_up.tick_interval_ms
        );
        Some(level_up)
    }

    fn game_over(&mut self, reason: DeathReason) -> GameEvent {
        self.status = GameStatus::GameOver;
        self.death_reason = Some(reason);
        self.settle_high_score();

        info!(
            "game over ({reason:?}) with score {}, new high score: {}",
            self.score, self.new_record
        );

        GameEvent::GameOver {
            score: self.score,
            reason,
            new_high_score: self.new_record,
        }
    }

    fn victory(&mut self) -> GameEvent {
        self.status = GameStatus::Victory;
        self.settle_high_score();

        info!(
            "board filled with score {}, new high score: {}",
            self.score, self.new_record
        );

        GameEvent::Victory {
            score: self.score,
            new_high_score: self.new_record,
        }
    }

    fn settle_high_score(&mut self) {
        self.new_record = self.score > self.high_score;
        if self.new_record {
            self.high_score = self.score;
        }
    }
}

fn start_position() -> Position {
    Position::new(START_POSITION.0, START_POSITION.1)
}
