use rand::Rng;
use thiserror::Error;

use crate::config::GridSize;
use crate::input::Direction;
use crate::snake::Snake;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring position one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns `|dx| + |dy|` between two cells.
    #[must_use]
    pub fn manhattan(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Contract violations detected by the grid model.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum GridError {
    #[error("cell ({x}, {y}) lies outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u16,
        height: u16,
    },
}

/// Fixed-size discrete coordinate space.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    size: GridSize,
}

impl Grid {
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        debug_assert!(size.width > 0 && size.height > 0);
        Self { size }
    }

    #[must_use]
    pub fn size(self) -> GridSize {
        self.size
    }

    /// Returns true when `0 <= x < width` and `0 <= y < height`.
    #[must_use]
    pub fn in_bounds(self, cell: Position) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && cell.x < i32::from(self.size.width)
            && cell.y < i32::from(self.size.height)
    }

    /// Returns `cell` unchanged if it lies on the grid.
    pub fn checked(self, cell: Position) -> Result<Position, GridError> {
        if self.in_bounds(cell) {
            Ok(cell)
        } else {
            Err(GridError::OutOfBounds {
                x: cell.x,
                y: cell.y,
                width: self.size.width,
                height: self.size.height,
            })
        }
    }

    /// Returns true iff `cell` is part of any of the given snake bodies.
    ///
    /// Passing a cell outside the grid is a caller bug and is reported
    /// rather than answered.
    pub fn is_occupied(self, cell: Position, snakes: &[&Snake]) -> Result<bool, GridError> {
        let cell = self.checked(cell)?;
        Ok(occupied_by(cell, snakes))
    }

    /// Iterates every cell, column by column (x outer, y inner).
    pub fn cells(self) -> impl Iterator<Item = Position> {
        let width = i32::from(self.size.width);
        let height = i32::from(self.size.height);
        (0..width).flat_map(move |x| (0..height).map(move |y| Position { x, y }))
    }

    /// Draws one cell uniformly from the whole grid.
    #[must_use]
    pub fn random_cell<R: Rng + ?Sized>(self, rng: &mut R) -> Position {
        Position {
            x: rng.gen_range(0..i32::from(self.size.width)),
            y: rng.gen_range(0..i32::from(self.size.height)),
        }
    }

    /// Returns true when no snake leaves a cell free.
    #[must_use]
    pub fn is_full(self, snakes: &[&Snake]) -> bool {
        self.cells().all(|cell| occupied_by(cell, snakes))
    }
}

/// Membership test for cells already known to be on the grid.
fn occupied_by(cell: Position, snakes: &[&Snake]) -> bool {
    snakes.iter().any(|snake| snake.occupies(cell))
}
