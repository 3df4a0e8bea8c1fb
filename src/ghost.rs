use rand::Rng;

use crate::config::{GHOST_JITTER, GHOST_MAX_LEN};
use crate::grid::{Grid, Position};
use crate::input::Direction;
use crate::snake::Snake;

/// What the ghost did during one controller step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GhostOutcome {
    /// Moved one cell without eating.
    Moved,
    /// Moved onto the food cell; the caller must place new food.
    AteFood,
    /// Every neighbour was a wall or its own body.
    Stuck,
}

/// Spawns a one-cell ghost anywhere on the grid.
///
/// Overlap with the player or the food is allowed.
#[must_use]
pub fn spawn_ghost<R: Rng + ?Sized>(rng: &mut R, grid: Grid) -> Snake {
    Snake::new(grid.random_cell(rng))
}

/// Greedy one-step lookahead toward `food`.
///
/// Each in-bounds neighbour not on the ghost's own body scores
/// `-distance_to_food + U[0, 2)`; the strictly highest score wins. The
/// player snake is not considered.
#[must_use]
pub fn choose_move<R: Rng + ?Sized>(
    rng: &mut R,
    grid: Grid,
    ghost: &Snake,
    food: Position,
) -> Option<Position> {
    let mut best: Option<(f64, Position)> = None;

    for direction in Direction::ALL {
        let candidate = ghost.next_head(direction);
        if !grid.in_bounds(candidate) || ghost.occupies(candidate) {
            continue;
        }

        let score = -f64::from(candidate.manhattan(food)) + rng.gen_range(0.0..GHOST_JITTER);
        if best.is_none_or(|(best_score, _)| score > best_score) {
            best = Some((score, candidate));
        }
    }

    best.map(|(_, candidate)| candidate)
}

/// Runs one ghost controller step, spawning the ghost first if needed.
pub fn step_ghost<R: Rng + ?Sized>(
    rng: &mut R,
    grid: Grid,
    ghost: &mut Option<Snake>,
    food: Position,
) -> GhostOutcome {
    let ghost = ghost.get_or_insert_with(|| spawn_ghost(rng, grid));

    let Some(new_head) = choose_move(rng, grid, ghost, food) else {
        return GhostOutcome::Stuck;
    };

    let outcome = if new_head == food {
        ghost.grow(new_head);
        GhostOutcome::AteFood
    } else {
        ghost.advance(new_head);
        GhostOutcome::Moved
    };

    if ghost.len() > GHOST_MAX_LEN {
        ghost.drop_tail();
    }

    outcome
}
