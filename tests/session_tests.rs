//! Session integration tests: full games through the public API

use cross_clear::core::{
    find_playable_move, has_any_playable_move, Board, GameConfig, GameError, GameSession, Phase,
    RandomSource, SimpleRng, TapOutcome,
};
use cross_clear::types::{BoardShape, Color, EndReason, GameMode};

fn grid(rows: &[&str]) -> Board {
    let rows: Vec<Vec<Option<Color>>> = rows
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| match c {
                    'r' => Some(Color::Red),
                    'b' => Some(Color::Blue),
                    'g' => Some(Color::Green),
                    'y' => Some(Color::Yellow),
                    _ => None,
                })
                .collect()
        })
        .collect();
    Board::from_rows(&rows).unwrap()
}

fn timed(start_time_secs: u32, board: Board) -> GameSession {
    let config = GameConfig {
        start_time_secs,
        ..GameConfig::default()
    };
    GameSession::from_board(config, SimpleRng::new(1), GameMode::Timed, board).unwrap()
}

#[test]
fn test_single_color_cross_clears_all_neighbours() {
    let config = GameConfig {
        palette_size: 1,
        ..GameConfig::default()
    };
    let board = grid(&[
        "rrr",
        "r.r",
        "rrr",
    ]);
    let mut game = GameSession::from_board(config, SimpleRng::new(1), GameMode::Free, board).unwrap();

    let r = game.tap(1, 1).unwrap();
    assert_eq!(r.outcome, TapOutcome::Hit);
    assert_eq!(r.removed_count, 4);
    assert_eq!(r.score_after, 4);
    assert_eq!(r.remaining_tiles, 4);
    // Corners remain and the edge midpoints are now playable.
    assert!(!r.ended);
    assert!(has_any_playable_move(game.board()));
}

#[test]
fn test_plus_shape_ends_board_cleared() {
    let board = grid(&[
        ".r.",
        "r.r",
        ".r.",
    ]);
    let mut game = timed(120, board);
    let r = game.tap(1, 1).unwrap();
    assert_eq!(r.score_after, 4);
    assert!(r.ended);
    assert_eq!(r.end_reason, Some(EndReason::BoardCleared));
    assert_eq!(game.phase(), Phase::Ended(EndReason::BoardCleared));
    assert!(!game.timer_running());
}

#[test]
fn test_two_misses_exhaust_twelve_seconds() {
    let board = grid(&["r.r.bg.g"]);
    let mut game = timed(12, board);

    // First hit starts the clock.
    let r = game.tap(1, 0).unwrap();
    assert!(r.timer_started);
    assert_eq!(r.time_left_after, Some(12));

    let r = game.tap(3, 0).unwrap();
    assert_eq!(r.outcome, TapOutcome::Miss);
    assert_eq!(r.penalty_secs, 10);
    assert_eq!(r.time_left_after, Some(2));
    assert!(!r.ended);

    let r = game.tap(3, 0).unwrap();
    assert_eq!(r.outcome, TapOutcome::Miss);
    assert_eq!(r.penalty_secs, 2);
    assert_eq!(r.time_left_after, Some(0));
    assert!(r.ended);
    assert_eq!(r.end_reason, Some(EndReason::TimeExpired));
}

#[test]
fn test_tick_ends_exactly_at_zero() {
    let board = grid(&["r.r.bg.g"]);
    let mut game = timed(3, board);
    game.tap(1, 0).unwrap();

    let t = game.tick();
    assert!(t.applied);
    assert_eq!(t.time_left_after, 2);
    assert!(!t.ended);

    let t = game.tick();
    assert_eq!(t.time_left_after, 1);
    assert!(!t.ended);

    let t = game.tick();
    assert_eq!(t.time_left_after, 0);
    assert!(t.ended);
    assert_eq!(t.end_reason, Some(EndReason::TimeExpired));

    // Terminal: further ticks are ignored.
    let t = game.tick();
    assert!(!t.applied);
    assert_eq!(t.time_left_after, 0);
}

#[test]
fn test_ticks_before_first_hit_are_ignored() {
    let mut game = timed(5, grid(&["r.r.bg.g"]));
    assert!(!game.tick().applied);
    assert_eq!(game.time_left(), Some(5));
}

#[test]
fn test_free_mode_miss_has_no_penalty() {
    let board = grid(&["r.r.bg.g"]);
    let mut game =
        GameSession::from_board(GameConfig::default(), SimpleRng::new(1), GameMode::Free, board)
            .unwrap();
    game.tap(1, 0).unwrap();
    let r = game.tap(3, 0).unwrap();
    assert_eq!(r.outcome, TapOutcome::Miss);
    assert_eq!(r.penalty_secs, 0);
    assert_eq!(r.time_left_after, None);
    assert!(!game.timer_running());
}

#[test]
fn test_repeated_miss_is_stable() {
    let board = grid(&["r.r.bg.g"]);
    let mut game = timed(120, board);
    let first = game.tap(3, 0).unwrap();
    let second = game.tap(3, 0).unwrap();
    assert_eq!(first.outcome, TapOutcome::Miss);
    assert_eq!(first.removed, second.removed);
    assert_eq!(game.board(), &grid(&["r.r.bg.g"]));
}

#[test]
fn test_dead_board_ends_no_moves_left() {
    let board = grid(&["r.r.b.g"]);
    let mut game = timed(120, board);
    let r = game.tap(1, 0).unwrap();
    assert_eq!(r.end_reason, Some(EndReason::NoMovesLeft));
    assert_eq!(r.remaining_tiles, 2);
}

#[test]
fn test_invalid_coordinate_leaves_state() {
    let mut game = GameSession::seeded(5);
    game.reset(GameMode::Timed, BoardShape::Portrait).unwrap();
    let before = game.snapshot();

    for (x, y) in [(-1, 0), (0, -1), (15, 0), (0, 25), (i16::MAX, i16::MIN)] {
        let err = game.tap(x, y).unwrap_err();
        assert!(matches!(err, GameError::InvalidCoordinate { .. }));
    }
    assert_eq!(game.snapshot(), before);
}

/// Landscape fills whose center opening faces four different colors.
///
/// The cross around (12, 7) sits at draws 162, 186, 188 and 212, which land on
/// distinct script entries. A 25x15 board takes 375 draws, a whole number of
/// cycles, so every attempt produces the same dead board.
struct DeadCenter {
    pos: usize,
}

impl RandomSource for DeadCenter {
    fn next_u32(&mut self) -> u32 {
        const SCRIPT: [u32; 15] = [0, 0, 1, 0, 0, 0, 2, 0, 3, 0, 0, 0, 4, 0, 0];
        let color = SCRIPT[self.pos % SCRIPT.len()];
        self.pos += 1;
        color * (u32::MAX / 5 + 1)
    }
}

#[test]
fn test_generation_failure_keeps_previous_game() {
    let config = GameConfig {
        max_generation_attempts: 3,
        ..GameConfig::default()
    };
    let board = grid(&["r.r.bg.g"]);
    let mut game =
        GameSession::from_board(config, DeadCenter { pos: 0 }, GameMode::Timed, board).unwrap();
    game.tap(1, 0).unwrap();
    assert!(game.timer_running());
    let before = game.snapshot();

    match game.reset(GameMode::Free, BoardShape::Landscape) {
        Err(GameError::Generation(err)) => {
            assert_eq!((err.cols, err.rows, err.attempts), (25, 15, 3));
        }
        other => panic!("expected generation failure, got {other:?}"),
    }
    assert_eq!(game.snapshot(), before);
    assert!(game.timer_running());
    assert_eq!(game.mode(), GameMode::Timed);

    // The old game is still playable.
    let r = game.tap(6, 0).unwrap();
    assert_eq!(r.outcome, TapOutcome::Hit);
    assert_eq!(r.score_after, before.score + 2);
}

#[test]
fn test_prepared_board_restarts_with_matching_preset() {
    let mut game = timed(120, grid(&["r.r"]));
    assert_eq!(game.shape(), BoardShape::Landscape);
    assert_eq!(game.snapshot().shape, BoardShape::Landscape);

    let snap = game.restart().unwrap();
    assert_eq!((snap.cols, snap.rows), (25, 15));

    let tall = timed(120, grid(&["r", ".", "r"]));
    assert_eq!(tall.shape(), BoardShape::Portrait);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = GameConfig {
        palette_size: 9,
        ..GameConfig::default()
    };
    assert!(GameSession::new(config, SimpleRng::new(1)).is_err());
}

#[test]
fn test_greedy_playthrough_scores_monotonically() {
    for seed in 1..=10 {
        let mut game = GameSession::seeded(seed);
        game.reset(GameMode::Free, BoardShape::Landscape).unwrap();

        let mut score = 0;
        let mut taps = 0;
        while let Some((x, y)) = find_playable_move(game.board()) {
            if game.is_ended() {
                break;
            }
            let r = game.tap(x, y).unwrap();
            assert_eq!(r.outcome, TapOutcome::Hit);
            assert_eq!(r.score_after, score + r.removed_count as u32);
            score = r.score_after;
            taps += 1;
        }

        assert!(taps >= 1);
        assert!(game.is_ended(), "seed {seed} did not end");
        let remaining = game.board().remaining_tiles();
        match game.end_reason() {
            Some(EndReason::BoardCleared) => assert_eq!(remaining, 0),
            Some(EndReason::NoMovesLeft) => {
                assert!(remaining > 0);
                assert!(!has_any_playable_move(game.board()));
            }
            other => panic!("unexpected end reason {other:?}"),
        }
        assert_eq!(score as usize + remaining, 25 * 15 - 1);
    }
}

#[test]
fn test_snapshot_reflects_session() {
    let mut game = GameSession::seeded(12);
    let snap = game.reset(GameMode::Timed, BoardShape::Landscape).unwrap();
    assert_eq!(snap.board.len(), 15);
    assert!(snap.board.iter().all(|row| row.len() == 25));
    assert_eq!(snap.cell(12, 7), Some(None));
    assert!(snap.playable());

    game.tap(12, 7).unwrap();
    let snap = game.snapshot();
    assert_eq!(snap.score, game.score());
    assert_eq!(snap.remaining_tiles, game.board().remaining_tiles());
    assert!(snap.timer_started);
}
