//! Board tests: grid access, collision queries and row clearing

use blockfall::core::Board;
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn full_rows(board: &Board) -> usize {
    (0..BOARD_HEIGHT as usize).filter(|&y| board.is_row_full(y)).count()
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None), "cell ({}, {}) should be empty", x, y);
            assert_eq!(board.cell_at(x, y), 0);
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_cell_at() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
    assert_eq!(board.cell_at(5, 10), 3);

    assert!(board.set(0, 0, Some(PieceKind::I)));
    assert_eq!(board.cell_at(0, 0), 1);

    assert!(board.set(5, 10, None));
    assert_eq!(board.cell_at(5, 10), 0);
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new();

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, -1, Some(PieceKind::T)));
    assert!(!board.set(BOARD_WIDTH as i8, 0, Some(PieceKind::T)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(PieceKind::T)));
}

#[test]
#[should_panic]
fn test_cell_at_out_of_bounds_panics() {
    let board = Board::new();
    board.cell_at(0, BOARD_HEIGHT as i8);
}

#[test]
fn test_blocks_walls_floor_but_not_sky() {
    let mut board = Board::new();

    assert!(board.blocks(-1, 5));
    assert!(board.blocks(BOARD_WIDTH as i8, 5));
    assert!(board.blocks(4, BOARD_HEIGHT as i8));
    assert!(!board.blocks(4, -2));
    assert!(!board.blocks(4, 5));

    board.set(4, 5, Some(PieceKind::S));
    assert!(board.blocks(4, 5));
}

#[test]
fn test_clear_row_removes_one_full_row() {
    let mut board = Board::new();
    board.fill_row(19, PieceKind::I);
    board.fill_row(18, PieceKind::O);
    board.set(3, 17, Some(PieceKind::T));
    assert_eq!(full_rows(&board), 2);

    assert_eq!(board.clear_row(19), 1);

    assert_eq!(full_rows(&board), 1);
    assert!(board.cells()[..BOARD_WIDTH as usize].iter().all(|c| c.is_none()));
    // Rows above shifted down by one.
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::O)));
    assert_eq!(board.get(3, 18), Some(Some(PieceKind::T)));
}

#[test]
fn test_clear_full_rows_handles_stacked_and_split_rows() {
    let mut board = Board::new();
    board.fill_row(19, PieceKind::I);
    board.fill_row(18, PieceKind::I);
    board.set(0, 17, Some(PieceKind::Z));
    board.fill_row(16, PieceKind::I);
    board.set(7, 15, Some(PieceKind::L));

    assert_eq!(board.clear_full_rows(), 3);

    assert_eq!(full_rows(&board), 0);
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::Z)));
    assert_eq!(board.get(7, 18), Some(Some(PieceKind::L)));
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 2);
}

#[test]
fn test_lock_cells_drops_cells_above_board() {
    let mut board = Board::new();

    board.lock_cells(&[(4, -1), (4, 0)], PieceKind::J);
    assert_eq!(board.get(4, 0), Some(Some(PieceKind::J)));
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 1);
}

#[test]
fn test_write_u8_grid_uses_color_ids() {
    let mut board = Board::new();
    for (x, kind) in PieceKind::ALL.iter().enumerate() {
        board.set(x as i8, 19, Some(*kind));
    }

    let mut grid = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
    board.write_u8_grid(&mut grid);

    assert_eq!(&grid[19][..7], &[1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(&grid[19][7..], &[0, 0, 0]);
    assert!(grid[..19].iter().flatten().all(|&id| id == 0));
}
