//! Integration tests for the game loop, driven through the public API only

use blockfall::core::{GameSnapshot, GameState, Tetromino};
use blockfall::types::{Command, GameEvent, Phase, BASE_DROP_MS, BOARD_HEIGHT, BOARD_WIDTH};

fn board_ids_in_range(state: &GameState) -> bool {
    (0..BOARD_HEIGHT as i8)
        .all(|y| (0..BOARD_WIDTH as i8).all(|x| state.board().cell_at(x, y) <= 7))
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(12345);
    assert_eq!(state.phase(), Phase::Idle);
    assert!(state.active().is_none());

    state.start();
    assert_eq!(state.phase(), Phase::Running);
    assert!(state.active().is_some());
    assert!(state.next_piece().is_some());
    assert_eq!(state.take_events(), vec![GameEvent::Started]);

    assert!(state.toggle_pause());
    assert!(state.paused());
    assert!(state.toggle_pause());
    assert!(!state.paused());
    assert_eq!(state.take_events(), vec![GameEvent::Paused, GameEvent::Resumed]);
}

#[test]
fn test_large_ticks_lock_pieces_and_keep_board_valid() {
    let mut state = GameState::new(7);
    state.start();

    let mut locks = 0;
    for _ in 0..200 {
        state.tick(BASE_DROP_MS + 1);
        assert!(board_ids_in_range(&state));
        locks += state
            .take_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::Locked { .. }))
            .count();
        if state.game_over() {
            break;
        }
    }

    assert!(locks >= 3, "expected several locks, got {}", locks);
    assert!(state.board().cells().iter().any(|c| c.is_some()));
}

#[test]
fn test_hard_drop_lands_on_something() {
    let mut state = GameState::new(99);
    state.start();

    for _ in 0..5 {
        let active = state.active().unwrap();
        let ghost_y = state.ghost_y().unwrap();
        let before = state.board().clone();
        let landed = Tetromino { y: ghost_y, ..active };

        assert!(!landed.collides(&before));
        assert!(landed.is_grounded(&before));

        let distance = state.hard_drop();
        assert_eq!(distance, (ghost_y - active.y) as u32);

        if state.last_clear().map_or(0, |r| r.lines_cleared) == 0 {
            for (x, y) in landed.cells() {
                assert_eq!(state.board().cell_at(x, y), active.kind.color_id());
            }
        }
        if state.game_over() {
            break;
        }
    }
}

#[test]
fn test_stacking_at_spawn_ends_game_exactly_once() {
    let mut state = GameState::new(3);
    state.start();
    state.take_events();

    let mut drops = 0;
    while !state.game_over() && drops < 200 {
        state.apply_command(Command::HardDrop);
        drops += 1;
    }
    assert!(state.game_over());
    assert!(state.active().is_none());

    let events = state.take_events();
    let game_overs: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, GameEvent::GameOver { .. }))
        .collect();
    assert_eq!(game_overs, vec![&GameEvent::GameOver { final_score: 0 }]);

    // Nothing moves once the game is over.
    assert!(!state.apply_command(Command::MoveLeft));
    assert!(!state.apply_command(Command::HardDrop));
    assert!(!state.tick(10_000));
    assert!(!state.toggle_pause());
    assert!(state.take_events().is_empty());

    // Start clears everything.
    assert!(state.apply_command(Command::Start));
    assert_eq!(state.phase(), Phase::Running);
    assert_eq!(state.score(), 0);
    assert!(state.board().cells().iter().all(|c| c.is_none()));
}

#[test]
fn test_paused_game_ignores_movement_and_gravity() {
    let mut state = GameState::new(5);
    state.start();
    let before = state.active().unwrap();

    state.apply_command(Command::Pause);
    assert!(!state.apply_command(Command::MoveLeft));
    assert!(!state.apply_command(Command::Rotate));
    assert!(!state.tick(5_000));
    assert_eq!(state.active().unwrap(), before);

    state.apply_command(Command::Pause);
    assert!(state.apply_command(Command::MoveRight));
    assert_eq!(state.active().unwrap().x, before.x + 1);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = GameState::new(2024);
    let mut b = GameState::new(2024);
    a.start();
    b.start();

    for step in 0..60 {
        let cmd = match step % 4 {
            0 => Command::MoveLeft,
            1 => Command::Rotate,
            2 => Command::MoveRight,
            _ => Command::HardDrop,
        };
        a.apply_command(cmd);
        b.apply_command(cmd);
        a.tick(400);
        b.tick(400);
    }

    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_snapshot_into_matches_snapshot() {
    let mut state = GameState::new(11);
    state.start();
    state.apply_command(Command::HardDrop);

    let mut snap = GameSnapshot::default();
    state.snapshot_into(&mut snap);
    assert_eq!(snap, state.snapshot());
    assert_eq!(snap.phase, Phase::Running);
    assert_eq!(snap.ghost_y, state.ghost_y());
    assert_eq!(snap.next, state.next_piece());
    assert_eq!(snap.drop_interval_ms, state.drop_interval_ms());
    assert!(snap.board.iter().flatten().any(|&id| id != 0));
}
