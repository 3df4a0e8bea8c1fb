use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::INPUT_QUEUE_CAPACITY;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four cardinal directions in evaluation order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the unit vector `(dx, dy)` with y growing downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Reset,
    ToggleSmartFood,
    ToggleGhost,
    ToggleAdaptive,
    Quit,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
///
/// A snake that has not moved yet (`None`) accepts any direction.
#[must_use]
pub fn direction_change_is_valid(current: Option<Direction>, next: Direction) -> bool {
    match current {
        Some(current) => next != current.opposite(),
        None => true,
    }
}

/// Direction intents collected between two ticks.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: VecDeque<Direction>,
}

impl InputQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffers a direction intent, dropping the oldest one when full.
    pub fn push(&mut self, direction: Direction) {
        if self.pending.len() == INPUT_QUEUE_CAPACITY {
            let _ = self.pending.pop_front();
        }
        self.pending.push_back(direction);
    }

    /// Drains the queue and returns the latest intent that is valid against
    /// `current`, the heading in effect when the tick started.
    pub fn drain_latest_valid(&mut self, current: Option<Direction>) -> Option<Direction> {
        self.pending
            .drain(..)
            .filter(|direction| direction_change_is_valid(current, *direction))
            .last()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.pending.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Translates terminal key events into [`GameInput`]s.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `timeout` for a key press and maps it.
    pub fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<GameInput>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(key)),
            _ => Ok(None),
        }
    }
}

/// Maps a single key event; unknown keys yield `None`.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    let input = match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => GameInput::Direction(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S') => GameInput::Direction(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A') => GameInput::Direction(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D') => GameInput::Direction(Direction::Right),
        KeyCode::Char(' ') => GameInput::Reset,
        KeyCode::Char('1') => GameInput::ToggleSmartFood,
        KeyCode::Char('2') => GameInput::ToggleGhost,
        KeyCode::Char('3') => GameInput::ToggleAdaptive,
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => GameInput::Quit,
        _ => return None,
    };

    Some(input)
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::{direction_change_is_valid, map_key, Direction, GameInput, InputQueue};

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn direction_change_rejects_only_the_reverse() {
        for current in Direction::ALL {
            for next in Direction::ALL {
                assert_eq!(
                    direction_change_is_valid(Some(current), next),
                    next != current.opposite(),
                    "{current:?} -> {next:?}"
                );
            }
        }
    }

    #[test]
    fn idle_snake_accepts_any_direction() {
        for next in Direction::ALL {
            assert!(direction_change_is_valid(None, next));
        }
    }

    #[test]
    fn queue_keeps_latest_valid_direction() {
        let mut queue = InputQueue::new();
        queue.push(Direction::Up);
        queue.push(Direction::Left);

        // Moving right: Up is valid, Left is the reverse and is dropped.
        assert_eq!(
            queue.drain_latest_valid(Some(Direction::Right)),
            Some(Direction::Up)
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn queue_validates_against_heading_at_tick_start() {
        let mut queue = InputQueue::new();
        // Down reverses Up, but both are checked against Right.
        queue.push(Direction::Up);
        queue.push(Direction::Down);

        assert_eq!(
            queue.drain_latest_valid(Some(Direction::Right)),
            Some(Direction::Down)
        );
    }

    #[test]
    fn queue_with_only_reversals_yields_nothing() {
        let mut queue = InputQueue::new();
        queue.push(Direction::Down);

        assert_eq!(queue.drain_latest_valid(Some(Direction::Up)), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn queue_drops_oldest_when_full() {
        let mut queue = InputQueue::new();
        for _ in 0..20 {
            queue.push(Direction::Left);
        }
        assert_eq!(queue.len(), crate::config::INPUT_QUEUE_CAPACITY);
    }

    #[test]
    fn arrow_and_wasd_keys_map_to_directions() {
        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        let a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        let d_upper = KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT);

        assert_eq!(map_key(up), Some(GameInput::Direction(Direction::Up)));
        assert_eq!(map_key(a), Some(GameInput::Direction(Direction::Left)));
        assert_eq!(
            map_key(d_upper),
            Some(GameInput::Direction(Direction::Right))
        );
    }

    #[test]
    fn control_keys_map_to_commands() {
        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        let ghost = KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE);
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let unknown = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);

        assert_eq!(map_key(space), Some(GameInput::Reset));
        assert_eq!(map_key(ghost), Some(GameInput::ToggleGhost));
        assert_eq!(map_key(esc), Some(GameInput::Quit));
        assert_eq!(map_key(ctrl_c), Some(GameInput::Quit));
        assert_eq!(map_key(unknown), None);
    }
}
