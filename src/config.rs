use ratatui::style::Color;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

/// Side length of the square playfield in cells.
pub const GRID_EXTENT: u16 = 20;

/// The fixed playfield every session runs on.
pub const STANDARD_GRID: GridSize = GridSize {
    width: GRID_EXTENT,
    height: GRID_EXTENT,
};

/// Player spawn cell as `(x, y)`.
pub const START_POSITION: (i32, i32) = (10, 10);

/// Base tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 150;

/// Minimum tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 80;

/// Tick interval reduction applied per difficulty increase.
pub const TICK_INTERVAL_STEP_MS: u64 = 10;

/// Score granted per food eaten by the player.
pub const POINTS_PER_FOOD: u32 = 10;

/// Difficulty is re-evaluated whenever the score is a positive multiple of this.
pub const LEVEL_UP_SCORE_STEP: u32 = 50;

/// Number of performance samples retained by the difficulty adapter.
pub const DIFFICULTY_HISTORY_LEN: usize = 10;

/// Recent-average-to-score ratio above which the game speeds up.
pub const DIFFICULTY_AVERAGE_RATIO: f64 = 0.8;

/// Hard cap on ghost snake length.
pub const GHOST_MAX_LEN: usize = 8;

/// Upper bound (exclusive) of the random jitter added to ghost move scores.
pub const GHOST_JITTER: f64 = 2.0;

/// Inclusive Manhattan distance band preferred by smart food placement.
pub const SMART_FOOD_MIN_DISTANCE: u32 = 3;
pub const SMART_FOOD_MAX_DISTANCE: u32 = 8;

/// Number of nearest qualifying cells smart placement samples from.
pub const SMART_FOOD_SHORTLIST: usize = 5;

/// Upper bound of direction intents buffered between two ticks.
pub const INPUT_QUEUE_CAPACITY: usize = 8;

/// Render refresh interval while waiting for the next tick.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Runtime toggles for the three AI assists.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct AiSettings {
    pub smart_food: bool,
    pub ghost: bool,
    pub adaptive: bool,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            smart_food: true,
            ghost: false,
            adaptive: true,
        }
    }
}

/// Colour set applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub ghost_head: Color,
    pub ghost_body: Color,
    pub food: Color,
    pub food_burst: Color,
    pub guide: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub ui_accent: Color,
    pub ui_bright: Color,
    pub ui_muted: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Neon green on black, the arcade look.
pub const THEME_ARCADE: Theme = Theme {
    snake_head: Color::Rgb(0, 255, 65),
    snake_body: Color::Rgb(0, 170, 45),
    ghost_head: Color::Rgb(255, 0, 255),
    ghost_body: Color::Rgb(140, 30, 140),
    food: Color::Rgb(255, 0, 0),
    food_burst: Color::Rgb(255, 255, 0),
    guide: Color::Rgb(120, 120, 0),
    play_bg: Color::Black,
    border_fg: Color::Rgb(0, 170, 45),
    ui_accent: Color::Rgb(255, 255, 0),
    ui_bright: Color::White,
    ui_muted: Color::DarkGray,
    menu_title: Color::Rgb(0, 255, 65),
    menu_footer: Color::DarkGray,
};

/// Solid glyph used for one half of a two-column cell.
pub const GLYPH_CELL: &str = "██";

/// Smaller glyph used for ghost body segments.
pub const GLYPH_GHOST: &str = "▓▓";

/// Food glyph.
pub const GLYPH_FOOD: &str = "◆◆";

/// Guide path dot.
pub const GLYPH_GUIDE: &str = " ·";

/// Number of terminal columns one logical cell occupies.
pub const CELL_WIDTH: u16 = 2;
