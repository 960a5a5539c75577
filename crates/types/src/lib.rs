//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, making them usable in any context
//! (core logic, terminal rendering, session logging).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: horizontally centered on the piece matrix, row 0
//!
//! # Drop Interval by Level
//!
//! Gravity speeds up by 100ms per level, starting at 1000ms on level 1 and
//! bottoming out at 100ms:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 900ms |
//! | 5 | 600ms |
//! | 10+ | 100ms |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{cell_color_id, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(piece.color_id(), 3);
//! assert_eq!(PieceKind::from_color_id(3), Some(piece));
//! assert_eq!(cell_color_id(None), 0);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

#[cfg(feature = "serde")]
use serde::Serialize;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity speed-up per level
pub const DROP_INTERVAL_STEP_MS: u32 = 100;

/// Fastest gravity interval
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per cleared line, multiplied by the level
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Level of a fresh game
pub const START_LEVEL: u32 = 1;


/// The seven tetromino piece kinds
///
/// Each kind carries a fixed color id (1-7) used by the board grid:
/// - **I**: 1, oak wood, horizontal bar
/// - **O**: 2, slime, 2x2 square
/// - **T**: 3, dirt, T-shaped
/// - **S**: 4, stone, S-shaped
/// - **Z**: 5, redstone, Z-shaped (mirror of S)
/// - **J**: 6, lapis, J-shaped
/// - **L**: 7, gold, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "lowercase"))]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, ordered by color id
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Color id stored in the board grid (1-7)
    pub const fn color_id(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Inverse of [`PieceKind::color_id`]; `0` and anything above 7 map to `None`
    pub fn from_color_id(id: u8) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[(id - 1) as usize]),
            _ => None,
        }
    }
}

/// Quarter turns applied to a piece since it spawned
///
/// The cycle goes: North → East → South → West → North.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "lowercase"))]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Number of clockwise quarter turns from North
    pub fn quarter_turns(&self) -> u8 {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }
}

/// Commands a front end can issue to the engine
///
/// Movement commands are silently ignored unless the game is running and not
/// paused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "camelCase"))]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down; locks it if it cannot move
    SoftDrop,
    /// Instantly drop piece to lowest valid position and lock it
    HardDrop,
    /// Rotate piece 90° clockwise (no wall kicks)
    Rotate,
    /// Toggle pause state
    Pause,
    /// Start a new game (also restarts a running or finished one)
    Start,
}

/// Lifecycle phase of a game session
///
/// `Idle` is the state before the first start. `GameOver` holds until an
/// explicit start re-enters `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "camelCase"))]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Paused,
    GameOver,
}

/// Event queued by the engine for the front end and the session log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize),
    serde(tag = "type", rename_all = "camelCase")
)]
pub enum GameEvent {
    /// A new game began
    Started,
    Paused,
    Resumed,
    /// A piece merged into the board
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    Locked { kind: PieceKind, lines_cleared: u32, points: u32 },
    LevelUp { level: u32 },
    /// Queued exactly once per game-over transition
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    GameOver { final_score: u32 },
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled with the specified piece kind
pub type Cell = Option<PieceKind>;

/// Color id of a cell (0 for empty)
pub fn cell_color_id(cell: Cell) -> u8 {
    cell.map(PieceKind::color_id).unwrap_or(0)
}
