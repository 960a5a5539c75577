//! Read-only view of a game for renderers and observers.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::pieces::ShapeMatrix;
use crate::types::{
    Phase, PieceKind, Rotation, BASE_DROP_MS, BOARD_HEIGHT, BOARD_WIDTH, START_LEVEL,
};
use crate::Tetromino;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub matrix: ShapeMatrix,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    /// Occupied board coordinates at row offset `y`
    pub fn cells_at(&self, y: i8) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.matrix
            .minos()
            .into_iter()
            .map(move |(dx, dy)| (self.x + dx, y + dy))
    }
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            matrix: value.matrix,
            x: value.x,
            y: value.y,
        }
    }
}

/// Board as color ids (0 = empty), indexed `[y][x]`
pub type BoardGrid = [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "camelCase"))]
pub struct GameSnapshot {
    pub board: BoardGrid,
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i8>,
    pub next: Option<PieceKind>,
    pub phase: Phase,
    pub seed: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    pub fn running(&self) -> bool {
        matches!(self.phase, Phase::Running | Phase::Paused)
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            next: None,
            phase: Phase::Idle,
            seed: 0,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            drop_interval_ms: BASE_DROP_MS,
        }
    }
}
