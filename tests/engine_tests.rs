//! Match engine tests

use cross_clear::core::{
    apply_removal, find_playable_move, has_any_playable_move, pick_removable, scan_cross,
    scan_nearest, Board, RandomSource, SimpleRng, Tile,
};
use cross_clear::types::{Color, Direction, PALETTE};

fn grid(rows: &[&str]) -> Board {
    // r/b/y/g/p = colors, '.' = empty
    let rows: Vec<Vec<Option<Color>>> = rows
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| match c {
                    'r' => Some(Color::Red),
                    'b' => Some(Color::Blue),
                    'y' => Some(Color::Yellow),
                    'g' => Some(Color::Green),
                    'p' => Some(Color::Purple),
                    _ => None,
                })
                .collect()
        })
        .collect();
    Board::from_rows(&rows).unwrap()
}

/// Random board with roughly a third of the cells empty.
fn random_board(rng: &mut SimpleRng, cols: u8, rows: u8) -> Board {
    Board::from_fn(cols, rows, |_, _| {
        if rng.next_range(3) == 0 {
            None
        } else {
            Some(PALETTE[rng.next_range(5) as usize])
        }
    })
}

#[test]
fn test_scan_finds_nearest_in_each_direction() {
    let board = grid(&[
        "..r..",
        ".....",
        "b...g",
        ".....",
        "..y..",
    ]);
    let t = |dir| scan_nearest(&board, 2, 2, dir).map(|t: Tile| t.color);
    assert_eq!(t(Direction::Up), Some(Color::Red));
    assert_eq!(t(Direction::Left), Some(Color::Blue));
    assert_eq!(t(Direction::Right), Some(Color::Green));
    assert_eq!(t(Direction::Down), Some(Color::Yellow));
}

#[test]
fn test_scan_from_border_cell() {
    let board = grid(&[
        ".r",
        "..",
    ]);
    assert_eq!(scan_cross(&board, 0, 0).len(), 1);
    assert_eq!(scan_cross(&board, 0, 1).len(), 0);
}

#[test]
fn test_three_of_a_color_all_removed() {
    let board = grid(&[
        ".r.",
        "r.r",
        ".b.",
    ]);
    let picked = pick_removable(&board, 1, 1);
    assert_eq!(picked.len(), 3);
    assert!(picked.iter().all(|t| t.color == Color::Red));
}

#[test]
fn test_pair_with_strangers() {
    let board = grid(&[
        ".p.",
        "g.y",
        ".p.",
    ]);
    let picked = pick_removable(&board, 1, 1);
    assert_eq!(picked.len(), 2);
    assert!(picked.iter().all(|t| t.color == Color::Purple));
}

#[test]
fn test_removal_sets_cells_empty() {
    let mut board = grid(&[
        ".r.",
        "r.r",
        ".r.",
    ]);
    let picked = pick_removable(&board, 1, 1);
    assert_eq!(apply_removal(&mut board, &picked), 4);
    assert!(board.is_cleared());
}

#[test]
fn test_no_chain_beyond_scanned_tiles() {
    // The second red in each arm is shielded by the first.
    let mut board = grid(&["rr.rr"]);
    let picked = pick_removable(&board, 2, 0);
    assert_eq!(apply_removal(&mut board, &picked), 2);
    assert_eq!(board.remaining_tiles(), 2);
    assert_eq!(board.get(0, 0), Some(Some(Color::Red)));
    assert_eq!(board.get(4, 0), Some(Some(Color::Red)));
}

#[test]
fn test_removable_is_subset_with_valid_size() {
    let mut rng = SimpleRng::new(2024);
    for _ in 0..200 {
        let board = random_board(&mut rng, 9, 7);
        for (x, y) in board.empty_cells() {
            let scanned = scan_cross(&board, x, y);
            let picked = pick_removable(&board, x, y);

            assert!(matches!(picked.len(), 0 | 2 | 3 | 4), "size {}", picked.len());
            for tile in &picked {
                assert!(scanned.contains(tile));
                let same = scanned.iter().filter(|t| t.color == tile.color).count();
                assert!(same >= 2);
            }
            for tile in &scanned {
                let same = scanned.iter().filter(|t| t.color == tile.color).count();
                assert_eq!(picked.contains(tile), same >= 2);
            }
        }
    }
}

#[test]
fn test_miss_is_idempotent() {
    let board = grid(&[
        ".r.",
        "b.g",
        ".y.",
    ]);
    let first = pick_removable(&board, 1, 1);
    let second = pick_removable(&board, 1, 1);
    assert!(first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_playable_search_matches_brute_force() {
    let mut rng = SimpleRng::new(77);
    for _ in 0..200 {
        let board = random_board(&mut rng, 6, 6);
        let brute = board
            .empty_cells()
            .any(|(x, y)| !pick_removable(&board, x, y).is_empty());
        assert_eq!(has_any_playable_move(&board), brute);
        if let Some((x, y)) = find_playable_move(&board) {
            assert!(board.is_empty_at(x, y));
            assert!(!pick_removable(&board, x, y).is_empty());
        }
    }
}

#[test]
fn test_full_board_has_no_moves() {
    let board = Board::from_fn(4, 4, |_, _| Some(Color::Red));
    assert!(!has_any_playable_move(&board));
}
