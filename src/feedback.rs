use std::io::{self, Write};

use crate::game::GameEvent;

/// Receives discrete gameplay notifications (sound, haptics, ...).
pub trait Feedback {
    fn notify(&mut self, event: &GameEvent);
}

/// Writes a terminal bell to `out` for food and end-of-game events.
///
/// Returns whether the event rang.
pub fn ring_bell<W: Write + ?Sized>(out: &mut W, event: &GameEvent) -> io::Result<bool> {
    if !rings_bell(event) {
        return Ok(false);
    }

    out.write_all(b"\x07")?;
    out.flush()?;
    Ok(true)
}

fn rings_bell(event: &GameEvent) -> bool {
    matches!(
        event,
        GameEvent::FoodEaten { .. } | GameEvent::GameOver { .. } | GameEvent::Victory { .. }
    )
}

#[cfg(test)]
mod tests {
    use crate::game::{DeathReason, GameEvent};
    use crate::grid::Position;

    use super::ring_bell;

    #[test]
    fn bell_rings_for_food_and_end_of_game_only() {
        let mut out = Vec::new();
        let events = [
            GameEvent::FoodEaten {
                position: Position::new(1, 1),
                score: 10,
            },
            GameEvent::GhostAteFood {
                position: Position::new(2, 2),
            },
            GameEvent::GameOver {
                score: 10,
                reason: DeathReason::SelfCollision,
                new_high_score: false,
            },
            GameEvent::Victory {
                score: 3_990,
                new_high_score: true,
            },
        ];

        let rang: Vec<_> = events
            .iter()
            .map(|event| ring_bell(&mut out, event).expect("vec writes succeed"))
            .collect();

        assert_eq!(rang, vec![true, false, true, true]);
        assert_eq!(out, b"\x07\x07\x07".to_vec());
    }
}
