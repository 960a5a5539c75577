//! Pieces module - tetromino shape catalog and matrix rotation
//!
//! Every kind is described by a small color-id matrix. Rotation turns the
//! matrix itself (so a 1x4 bar becomes a 4x1 bar); there is no kick table.

use arrayvec::ArrayVec;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::types::{PieceKind, Rotation, BOARD_WIDTH};

/// Largest side of any shape matrix
pub const MATRIX_MAX: usize = 4;

/// Offset of a single mino relative to the piece origin, as (dx, dy)
pub type MinoOffset = (i8, i8);

/// The four occupied offsets of a tetromino matrix
pub type Minos = ArrayVec<MinoOffset, 4>;

/// A shape in one rotation: `rows x cols` cells of color ids (0 = empty)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ShapeMatrix {
    rows: u8,
    cols: u8,
    cells: [[u8; MATRIX_MAX]; MATRIX_MAX],
}

impl ShapeMatrix {
    const fn new(rows: u8, cols: u8, cells: [[u8; MATRIX_MAX]; MATRIX_MAX]) -> Self {
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Color id at (row, col); 0 outside the matrix
    pub fn get(&self, row: usize, col: usize) -> u8 {
        if row >= self.rows as usize || col >= self.cols as usize {
            return 0;
        }
        self.cells[row][col]
    }

    /// Rotate 90° clockwise.
    ///
    /// Columns become rows and each new row is reversed, so
    /// `new[i][j] = old[rows - 1 - j][i]`.
    pub fn rotated_cw(&self) -> Self {
        let mut cells = [[0u8; MATRIX_MAX]; MATRIX_MAX];
        let rows = self.rows as usize;
        for (i, row) in cells.iter_mut().enumerate().take(self.cols as usize) {
            for (j, cell) in row.iter_mut().enumerate().take(rows) {
                *cell = self.cells[rows - 1 - j][i];
            }
        }
        Self::new(self.cols, self.rows, cells)
    }

    /// Occupied offsets in row-major order
    pub fn minos(&self) -> Minos {
        let mut out = Minos::new();
        for row in 0..self.rows as usize {
            for col in 0..self.cols as usize {
                if self.cells[row][col] != 0 {
                    out.push((col as i8, row as i8));
                }
            }
        }
        out
    }

    /// Rows of the matrix as slices, top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[u8]> {
        let cols = self.cols as usize;
        self.cells
            .iter()
            .take(self.rows as usize)
            .map(move |r| &r[..cols])
    }
}

const I_SHAPE: ShapeMatrix = ShapeMatrix::new(1, 4, [[1, 1, 1, 1], [0; 4], [0; 4], [0; 4]]);

const O_SHAPE: ShapeMatrix = ShapeMatrix::new(2, 2, [[2, 2, 0, 0], [2, 2, 0, 0], [0; 4], [0; 4]]);

const T_SHAPE: ShapeMatrix = ShapeMatrix::new(2, 3, [[0, 3, 0, 0], [3, 3, 3, 0], [0; 4], [0; 4]]);

const S_SHAPE: ShapeMatrix = ShapeMatrix::new(2, 3, [[0, 4, 4, 0], [4, 4, 0, 0], [0; 4], [0; 4]]);

const Z_SHAPE: ShapeMatrix = ShapeMatrix::new(2, 3, [[5, 5, 0, 0], [0, 5, 5, 0], [0; 4], [0; 4]]);

const J_SHAPE: ShapeMatrix = ShapeMatrix::new(2, 3, [[6, 0, 0, 0], [6, 6, 6, 0], [0; 4], [0; 4]]);

const L_SHAPE: ShapeMatrix = ShapeMatrix::new(2, 3, [[0, 0, 7, 0], [7, 7, 7, 0], [0; 4], [0; 4]]);

/// Spawn matrix of a piece kind
pub fn get_shape(kind: PieceKind) -> ShapeMatrix {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
    }
}

/// Matrix of a piece kind after the given number of clockwise turns
pub fn get_rotated_shape(kind: PieceKind, rotation: Rotation) -> ShapeMatrix {
    (0..rotation.quarter_turns()).fold(get_shape(kind), |m, _| m.rotated_cw())
}

/// Spawn column: the matrix is centered, rounding toward the left
pub fn spawn_x(matrix: &ShapeMatrix) -> i8 {
    (BOARD_WIDTH / 2) as i8 - (matrix.cols() / 2) as i8
}

/// Spawn row for every piece
pub const SPAWN_Y: i8 = 0;
