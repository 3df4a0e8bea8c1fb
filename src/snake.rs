use std::collections::VecDeque;

use crate::grid::Position;
use crate::input::Direction;

/// Ordered snake body, head first.
///
/// The body always holds at least one segment. Collision checks are the
/// caller's job: a candidate head is computed with [`Snake::next_head`],
/// validated, and only then committed with [`Snake::grow`] or
/// [`Snake::advance`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Position) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        assert!(
            !segments.is_empty(),
            "snake body must always contain at least one segment"
        );

        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Returns the head position after one step in `direction`.
    #[must_use]
    pub fn next_head(&self, direction: Direction) -> Position {
        self.head().step(direction)
    }

    /// Prepends `new_head`, keeping the tail (food-eaten tick).
    pub fn grow(&mut self, new_head: Position) {
        self.body.push_front(new_head);
    }

    /// Prepends `new_head` and drops the tail (normal tick).
    pub fn advance(&mut self, new_head: Position) {
        self.body.push_front(new_head);
        self.drop_tail();
    }

    /// Removes the tail segment unless it is the only one left.
    pub fn drop_tail(&mut self) {
        if self.body.len() > 1 {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count, never zero.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::Position;
    use crate::input::Direction;

    use super::Snake;

    #[test]
    fn next_head_does_not_mutate() {
        let snake = Snake::new(Position::new(5, 5));

        let head = snake.next_head(Direction::Right);

        assert_eq!(head, Position::new(6, 5));
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn advance_keeps_length() {
        let mut snake = Snake::from_segments(vec![Position::new(5, 5), Position::new(4, 5)]);

        let head = snake.next_head(Direction::Right);
        snake.advance(head);

        let segments: Vec<_> = snake.segments().copied().collect();
        assert_eq!(segments, vec![Position::new(6, 5), Position::new(5, 5)]);
    }

    #[test]
    fn grow_keeps_previous_tail() {
        let mut snake = Snake::new(Position::new(10, 10));

        snake.grow(Position::new(11, 10));

        let segments: Vec<_> = snake.segments().copied().collect();
        assert_eq!(segments, vec![Position::new(11, 10), Position::new(10, 10)]);
    }

    #[test]
    fn drop_tail_never_empties_the_body() {
        let mut snake = Snake::new(Position::new(1, 1));

        snake.drop_tail();

        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::new(1, 1));
    }

    #[test]
    #[should_panic(expected = "at least one segment")]
    fn empty_body_is_rejected() {
        let _ = Snake::from_segments(Vec::new());
    }
}
