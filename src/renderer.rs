use std::cmp::Ordering;
use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{CELL_WIDTH, GLYPH_CELL, GLYPH_FOOD, GLYPH_GHOST, GLYPH_GUIDE, Theme};
use crate::game::{GameStatus, Snapshot};
use crate::grid::{Grid, Position};
use crate::ui::hud::{HudValueFlash, render_hud};
use crate::ui::menu::render_banner;

/// How long the food burst stays visible after a meal.
pub const FOOD_BURST_DURATION: Duration = Duration::from_millis(200);

/// Per-frame presentation state that is not part of the simulation.
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo<'a> {
    pub theme: &'a Theme,
    /// Wall-clock instant of this frame render.
    pub now: Instant,
    pub value_flash: HudValueFlash,
    /// Cell and time of the last player meal.
    pub food_burst: Option<(Position, Instant)>,
}

/// Renders the full game frame from an immutable snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot<'_>, info: &FrameInfo<'_>) {
    let area = frame.area();
    let play_area = render_hud(frame, area, snapshot, info);

    let theme = info.theme;
    let block = Block::bordered()
        .border_style(Style::new().fg(theme.border_fg))
        .style(Style::new().bg(theme.play_bg));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    if snapshot.settings.smart_food && snapshot.status == GameStatus::Running {
        render_guide(frame, inner, snapshot, theme);
    }
    render_food(frame, inner, snapshot, theme);
    if let Some(ghost) = snapshot.ghost {
        render_ghost(frame, inner, snapshot.grid, ghost.segments(), theme);
    }
    render_player(frame, inner, snapshot, theme);
    render_food_burst(frame, inner, snapshot.grid, info);

    if let Some(banner) = snapshot.banner {
        render_banner(frame, play_area, banner, theme);
    }
}

/// Terminal size needed for the board including its border.
#[must_use]
pub fn board_size(grid: Grid) -> (u16, u16) {
    let size = grid.size();
    (size.width * CELL_WIDTH + 2, size.height + 2)
}

/// Cells of an L-shaped route from `head` to `food`, horizontal leg first,
/// excluding both endpoints.
#[must_use]
pub fn guide_path(head: Position, food: Position) -> Vec<Position> {
    let mut path = Vec::new();
    let mut cursor = head;

    while cursor.x != food.x {
        cursor.x += step_toward(cursor.x, food.x);
        path.push(cursor);
    }
    while cursor.y != food.y {
        cursor.y += step_toward(cursor.y, food.y);
        path.push(cursor);
    }

    path.pop();
    path
}

fn step_toward(from: i32, to: i32) -> i32 {
    match from.cmp(&to) {
        Ordering::Less => 1,
        Ordering::Greater => -1,
        Ordering::Equal => 0,
    }
}

fn render_guide(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot<'_>, theme: &Theme) {
    let buffer = frame.buffer_mut();
    for cell in guide_path(snapshot.player.head(), snapshot.food) {
        let Some((x, y)) = logical_to_terminal(inner, snapshot.grid, cell) else {
            continue;
        };
        buffer.set_string(x, y, GLYPH_GUIDE, Style::new().fg(theme.guide));
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot<'_>, theme: &Theme) {
    let Some((x, y)) = logical_to_terminal(inner, snapshot.grid, snapshot.food) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(
        x,
        y,
        GLYPH_FOOD,
        Style::new().fg(theme.food).add_modifier(Modifier::BOLD),
    );
}

fn render_ghost<'a>(
    frame: &mut Frame<'_>,
    inner: Rect,
    grid: Grid,
    segments: impl Iterator<Item = &'a Position>,
    theme: &Theme,
) {
    let buffer = frame.buffer_mut();
    for (index, segment) in segments.enumerate() {
        let Some((x, y)) = logical_to_terminal(inner, grid, *segment) else {
            continue;
        };

        let color = if index == 0 {
            theme.ghost_head
        } else {
            theme.ghost_body
        };
        buffer.set_string(x, y, GLYPH_GHOST, Style::new().fg(color));
    }
}

fn render_player(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot<'_>, theme: &Theme) {
    let buffer = frame.buffer_mut();
    for (index, segment) in snapshot.player.segments().enumerate() {
        let Some((x, y)) = logical_to_terminal(inner, snapshot.grid, *segment) else {
            continue;
        };

        let style = if index == 0 {
            Style::new()
                .fg(theme.snake_head)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(theme.snake_body)
        };
        buffer.set_string(x, y, GLYPH_CELL, style);
    }
}

fn render_food_burst(frame: &mut Frame<'_>, inner: Rect, grid: Grid, info: &FrameInfo<'_>) {
    let Some((center, eaten_at)) = info.food_burst else {
        return;
    };
    if info.now.saturating_duration_since(eaten_at) >= FOOD_BURST_DURATION {
        return;
    }

    let style = Style::new().bg(info.theme.food_burst);
    let buffer = frame.buffer_mut();
    let ring = [
        Position::new(center.x - 1, center.y),
        Position::new(center.x + 1, center.y),
        Position::new(center.x, center.y - 1),
        Position::new(center.x, center.y + 1),
    ];
    for cell in ring {
        let Some((x, y)) = logical_to_terminal(inner, grid, cell) else {
            continue;
        };
        buffer.set_style(Rect::new(x, y, CELL_WIDTH, 1), style);
    }
}

fn logical_to_terminal(inner: Rect, grid: Grid, position: Position) -> Option<(u16, u16)> {
    if !grid.in_bounds(position) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
