use ai_snake::config::{AiSettings, GHOST_MAX_LEN};
use ai_snake::game::{Banner, DeathReason, GameEvent, GameState, GameStatus};
use ai_snake::grid::Position;
use ai_snake::input::{Direction, GameInput};

fn settings(ghost: bool) -> AiSettings {
    AiSettings {
        smart_food: true,
        ghost,
        adaptive: true,
    }
}

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let mut state = GameState::new_with_seed(settings(false), 0, 42);
    state.food = Position::new(11, 10);

    state.apply_input(GameInput::Direction(Direction::Right));
    assert_eq!(state.status, GameStatus::Running);

    let events = state.tick();
    assert_eq!(state.score, 10);
    assert_eq!(state.player.len(), 2);
    assert_eq!(state.player.head(), Position::new(11, 10));
    assert!(matches!(events[..], [GameEvent::FoodEaten { .. }]));

    // Smart placement keeps the next meal within reach.
    let distance = state.player.head().manhattan(state.food);
    assert!((3..=8).contains(&distance));

    state.food = Position::new(0, 0);
    state.apply_input(GameInput::Direction(Direction::Up));
    for expected_y in (0..10).rev() {
        let _ = state.tick();
        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.player.head(), Position::new(11, expected_y));
    }

    let events = state.tick();
    assert_eq!(state.status, GameStatus::GameOver);
    assert_eq!(
        events,
        vec![GameEvent::GameOver {
            score: 10,
            reason: DeathReason::WallCollision,
            new_high_score: true,
        }]
    );
    assert_eq!(state.banner(), Some(Banner::NewHighScore { score: 10 }));

    state.apply_input(GameInput::Reset);
    assert_eq!(state.status, GameStatus::Ready);
    assert_eq!(state.high_score, 10);
    assert_eq!(state.score, 0);
}

#[test]
fn same_seed_replays_identically() {
    let run = |seed| {
        let mut state = GameState::new_with_seed(settings(true), 0, seed);
        let mut trace = Vec::new();
        state.apply_input(GameInput::Direction(Direction::Left));
        for step in 0..30 {
            if step % 6 == 0 {
                let turn = if step % 12 == 0 {
                    Direction::Down
                } else {
                    Direction::Up
                };
                state.apply_input(GameInput::Direction(turn));
            }
            let _ = state.tick();
            trace.push((
                state.player.head(),
                state.food,
                state.ghost.as_ref().map(|ghost| ghost.head()),
                state.status,
            ));
        }
        trace
    };

    assert_eq!(run(99), run(99));
}

#[test]
fn ghost_session_keeps_invariants() {
    let mut state = GameState::new_with_seed(settings(true), 0, 7);
    state.apply_input(GameInput::Direction(Direction::Right));

    // Sweep left and right across two rows near the top.
    let mut ticks = 0;
    while state.status == GameStatus::Running && ticks < 200 {
        let head = state.player.head();
        if head.x == 18 && state.heading == Some(Direction::Right) {
            state.apply_input(GameInput::Direction(Direction::Down));
        } else if head.x == 18 && state.heading == Some(Direction::Down) {
            state.apply_input(GameInput::Direction(Direction::Left));
        } else if head.x == 1 && state.heading == Some(Direction::Left) {
            state.apply_input(GameInput::Direction(Direction::Up));
        } else if head.x == 1 && state.heading == Some(Direction::Up) {
            state.apply_input(GameInput::Direction(Direction::Right));
        }

        let length_before = state.player.len();
        let events = state.tick();
        ticks += 1;

        if state.status == GameStatus::Running {
            let ate = events
                .iter()
                .any(|event| matches!(event, GameEvent::FoodEaten { .. }));
            let expected = if ate { length_before + 1 } else { length_before };
            assert_eq!(state.player.len(), expected);
            assert!(!state.player.occupies(state.food));
        }

        let ghost = state.ghost.as_ref().expect("ghost spawns on the first tick");
        assert!(ghost.len() <= GHOST_MAX_LEN);
    }
}
