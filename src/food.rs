use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::{SMART_FOOD_MAX_DISTANCE, SMART_FOOD_MIN_DISTANCE, SMART_FOOD_SHORTLIST};
use crate::grid::{Grid, Position};
use crate::snake::Snake;

/// How the next food cell is chosen.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Placement {
    /// Uniform over every free cell.
    Random,
    /// Near the player head, within the preferred distance band.
    Smart,
}

impl Placement {
    #[must_use]
    pub fn from_toggle(smart_food: bool) -> Self {
        if smart_food {
            Self::Smart
        } else {
            Self::Random
        }
    }
}

/// Picks a free cell for the next food.
///
/// The result never lies on `player` or `ghost`. Smart placement falls back
/// to random placement when no cell qualifies.
#[must_use]
pub fn place_food<R: Rng + ?Sized>(
    rng: &mut R,
    grid: Grid,
    placement: Placement,
    player: &Snake,
    ghost: Option<&Snake>,
) -> Position {
    let mut occupants = vec![player];
    occupants.extend(ghost);

    if placement == Placement::Smart {
        if let Some(position) = smart_position(rng, grid, player.head(), &occupants) {
            return position;
        }
    }

    random_position(rng, grid, &occupants)
}

/// Draws uniformly from the grid, resampling while the draw is occupied.
///
/// # Panics
///
/// Panics when `occupants` cover the whole grid.
#[must_use]
pub fn random_position<R: Rng + ?Sized>(
    rng: &mut R,
    grid: Grid,
    occupants: &[&Snake],
) -> Position {
    assert!(
        !grid.is_full(occupants),
        "random_position: no free cells left on the {}x{} board for food",
        grid.size().width,
        grid.size().height,
    );

    loop {
        let candidate = grid.random_cell(rng);
        if grid.is_occupied(candidate, occupants) == Ok(false) {
            return candidate;
        }
    }
}

/// Chooses among the nearest free cells whose distance from `head` lies in
/// the preferred band, or `None` when no cell qualifies.
#[must_use]
pub fn smart_position<R: Rng + ?Sized>(
    rng: &mut R,
    grid: Grid,
    head: Position,
    occupants: &[&Snake],
) -> Option<Position> {
    let mut candidates: Vec<(u32, Position)> = grid
        .cells()
        .filter(|cell| grid.is_occupied(*cell, occupants) == Ok(false))
        .map(|cell| (head.manhattan(cell), cell))
        .filter(|(distance, _)| {
            (SMART_FOOD_MIN_DISTANCE..=SMART_FOOD_MAX_DISTANCE).contains(distance)
        })
        .collect();

    // Stable sort: equal distances keep enumeration order.
    candidates.sort_by_key(|(distance, _)| *distance);
    candidates.truncate(SMART_FOOD_SHORTLIST);

    candidates.choose(rng).map(|(_, cell)| *cell)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::{GridSize, STANDARD_GRID};
    use crate::grid::{Grid, Position};
    use crate::snake::Snake;

    use super::{place_food, random_position, smart_position, Placement};

    fn standard() -> Grid {
        Grid::new(STANDARD_GRID)
    }

    #[test]
    fn random_food_never_overlaps_snakes() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::new(GridSize {
            width: 8,
            height: 6,
        });
        let player = Snake::from_segments(vec![
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(2, 0),
        ]);
        let ghost = Snake::from_segments(vec![Position::new(4, 4), Position::new(4, 5)]);

        for _ in 0..200 {
            let food = place_food(&mut rng, grid, Placement::Random, &player, Some(&ghost));
            assert!(!player.occupies(food));
            assert!(!ghost.occupies(food));
        }
    }

    #[test]
    fn random_food_finds_the_last_free_cell() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = Grid::new(GridSize {
            width: 2,
            height: 2,
        });
        let player = Snake::from_segments(vec![
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(1, 1),
        ]);

        assert_eq!(
            random_position(&mut rng, grid, &[&player]),
            Position::new(0, 1)
        );
    }

    #[test]
    #[should_panic(expected = "no free cells")]
    fn random_food_on_full_grid_panics() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = Grid::new(GridSize {
            width: 1,
            height: 2,
        });
        let player = Snake::from_segments(vec![Position::new(0, 0), Position::new(0, 1)]);

        let _ = random_position(&mut rng, grid, &[&player]);
    }

    #[test]
    fn smart_food_stays_within_distance_band() {
        let mut rng = StdRng::seed_from_u64(21);
        let player = Snake::from_segments(vec![Position::new(10, 10), Position::new(9, 10)]);

        for _ in 0..200 {
            let food = place_food(&mut rng, standard(), Placement::Smart, &player, None);
            let distance = player.head().manhattan(food);
            assert!((3..=8).contains(&distance), "distance {distance}");
            assert!(!player.occupies(food));
        }
    }

    #[test]
    fn smart_food_samples_from_nearest_shortlist() {
        let mut rng = StdRng::seed_from_u64(5);
        let head = Position::new(10, 10);
        let player = Snake::new(head);

        // With a free grid every cell at distance 3 outranks the rest, so the
        // five-cell shortlist only ever holds distance-3 cells.
        for _ in 0..100 {
            let food = smart_position(&mut rng, standard(), head, &[&player])
                .expect("open grid has qualifying cells");
            assert_eq!(head.manhattan(food), 3);
            assert!(food.x <= 9, "shortlist holds the first columns only");
        }
    }

    #[test]
    fn smart_food_skips_occupied_cells() {
        let mut rng = StdRng::seed_from_u64(9);
        let head = Position::new(10, 10);
        let player = Snake::new(head);
        // Ghost covers the first cells the band would otherwise offer.
        let ghost = Snake::from_segments(vec![
            Position::new(7, 10),
            Position::new(8, 9),
            Position::new(8, 11),
        ]);

        for _ in 0..100 {
            let food = smart_position(&mut rng, standard(), head, &[&player, &ghost])
                .expect("open grid has qualifying cells");
            assert!(!ghost.occupies(food));
        }
    }

    #[test]
    fn smart_food_without_candidates_returns_none() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = Grid::new(GridSize {
            width: 3,
            height: 1,
        });
        let player = Snake::new(Position::new(0, 0));

        assert_eq!(smart_position(&mut rng, grid, Position::new(0, 0), &[&player]), None);
    }

    #[test]
    fn smart_food_falls_back_to_random() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = Grid::new(GridSize {
            width: 3,
            height: 1,
        });
        let player = Snake::new(Position::new(0, 0));

        for _ in 0..50 {
            let food = place_food(&mut rng, grid, Placement::Smart, &player, None);
            assert!(food == Position::new(1, 0) || food == Position::new(2, 0));
        }
    }
}
