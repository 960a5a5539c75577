//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or filled with a piece kind.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use crate::types::{cell_color_id, Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if Self::is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Color id (0-7) of the cell at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the board. Callers bounds-check through
    /// [`Board::blocks`] first.
    pub fn cell_at(&self, x: i8, y: i8) -> u8 {
        match Self::index(x, y) {
            Some(idx) => cell_color_id(self.cells[idx]),
            None => panic!("cell ({x}, {y}) is outside the {BOARD_WIDTH}x{BOARD_HEIGHT} board"),
        }
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    pub fn is_out_of_bounds(x: i8, y: i8) -> bool {
        x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8
    }

    /// Whether a piece cell at (x, y) would collide.
    ///
    /// Side walls and the floor block; the space above row 0 is open so a
    /// piece may be tested while partly above the board.
    pub fn blocks(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return true;
        }
        y >= 0 && self.is_occupied(x, y)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove row `y` and insert an empty row at the top.
    ///
    /// Rows above `y` shift down by one; rows below are untouched.
    /// Returns the number of rows removed (1, or 0 if `y` is out of range).
    pub fn clear_row(&mut self, y: usize) -> usize {
        if y >= BOARD_HEIGHT as usize {
            return 0;
        }

        let width = BOARD_WIDTH as usize;

        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..y * width, width);
        self.cells[..width].fill(None);

        1
    }

    /// Clear every full row, scanning bottom to top.
    ///
    /// After a clear the same index is checked again, since the row that was
    /// above it has just shifted into place. Returns the number of rows cleared.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut y = BOARD_HEIGHT as usize;

        while y > 0 {
            if self.is_row_full(y - 1) {
                cleared += self.clear_row(y - 1) as u32;
            } else {
                y -= 1;
            }
        }

        cleared
    }

    /// Merge piece cells into the board.
    ///
    /// Cells above row 0 have nowhere to go and are dropped.
    pub fn lock_cells(&mut self, cells: &[(i8, i8)], kind: PieceKind) {
        for &(x, y) in cells {
            debug_assert!(!self.is_occupied(x, y), "locking over occupied cell ({x}, {y})");
            if y >= 0 {
                self.set(x, y, Some(kind));
            }
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Write the board as color ids (0 = empty) into a fixed grid
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            for (d, s) in dst.iter_mut().zip(src) {
                *d = cell_color_id(*s);
            }
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Fill a whole row with one kind
    pub fn fill_row(&mut self, y: i8, kind: PieceKind) {
        for x in 0..BOARD_WIDTH as i8 {
            self.set(x, y, Some(kind));
        }
    }

    /// Create from a 2D vector for testing (converts to flat array)
    #[cfg(test)]
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        assert_eq!(cells_2d.len(), BOARD_HEIGHT as usize);
        assert!(cells_2d.iter().all(|row| row.len() == BOARD_WIDTH as usize));

        let mut flat = [None; BOARD_SIZE];
        for (y, row) in cells_2d.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                flat[y * BOARD_WIDTH as usize + x] = *cell;
            }
        }
        Self { cells: flat }
    }

    /// Convert to 2D vector for testing/display
    #[cfg(test)]
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_board_from_cells_roundtrip() {
        let mut cells_2d = vec![vec![None; 10]; 20];
        cells_2d[5][3] = Some(PieceKind::O);
        cells_2d[10][7] = Some(PieceKind::L);

        let board = Board::from_cells(cells_2d.clone());

        assert_eq!(cells_2d, board.to_cells());
    }

    #[test]
    fn test_blocks_open_above_top() {
        let board = Board::new();
        assert!(!board.blocks(4, -1));
        assert!(!board.blocks(4, -3));
        assert!(board.blocks(-1, -1));
        assert!(board.blocks(10, -1));
        assert!(board.blocks(4, 20));
    }

    #[test]
    fn test_clear_row_keeps_rows_below() {
        let mut board = Board::new();
        board.set(0, 5, Some(PieceKind::T));
        board.fill_row(10, PieceKind::I);
        board.set(3, 15, Some(PieceKind::Z));

        assert_eq!(board.clear_row(10), 1);

        assert_eq!(board.get(0, 6), Some(Some(PieceKind::T)));
        assert_eq!(board.get(0, 5), Some(None));
        assert_eq!(board.get(3, 15), Some(Some(PieceKind::Z)));
        assert!(!board.is_row_full(10));
    }

    #[test]
    fn test_clear_full_rows_rechecks_same_index() {
        let mut board = Board::new();
        board.fill_row(19, PieceKind::I);
        board.fill_row(18, PieceKind::O);
        board.set(2, 17, Some(PieceKind::S));

        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(board.get(2, 19), Some(Some(PieceKind::S)));
        assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 1);
    }

    #[test]
    fn test_write_u8_grid_uses_color_ids() {
        let mut board = Board::new();
        board.set(0, 0, Some(PieceKind::I));
        board.set(9, 19, Some(PieceKind::L));

        let mut grid = [[0u8; 10]; 20];
        board.write_u8_grid(&mut grid);

        assert_eq!(grid[0][0], 1);
        assert_eq!(grid[19][9], 7);
        assert_eq!(grid[10][5], 0);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_cell_at_out_of_bounds_panics() {
        Board::new().cell_at(10, 0);
    }
}
