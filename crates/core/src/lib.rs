//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, timers or I/O, making it:
//!
//! - **Deterministic**: Same seed produces the same piece sequence
//! - **Testable**: Every rule can be driven step by step from a test
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 game board with collision queries and line clearing
//! - [`game_state`]: The engine: lifecycle, active piece, scoring, gravity timing
//! - [`pieces`]: Tetromino shape catalog and matrix rotation
//! - [`rng`]: Uniform random piece generation
//! - [`scoring`]: Line-clear points, level progression, drop interval curve
//! - [`snapshot`]: Read-only view for renderers
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every kind is equally likely on every draw
//! - **Matrix rotation**: clockwise only, no wall kicks; a blocked turn is discarded
//! - **Immediate lock**: a piece locks as soon as gravity or a soft drop cannot move it
//! - **Scoring**: `lines * 100 * level`, one level per 10 lines
//! - **Gravity**: 1000ms on level 1, 100ms faster per level, never below 100ms
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::{Command, Phase};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_command(Command::MoveRight);
//! game.apply_command(Command::Rotate);
//! game.apply_command(Command::HardDrop);
//!
//! assert_eq!(game.phase(), Phase::Running);
//! assert!(game.board().cells().iter().any(|c| c.is_some()));
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed milliseconds. The engine assumes no particular scheduler.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, Tetromino};
pub use pieces::{get_rotated_shape, get_shape, ShapeMatrix};
pub use rng::{Randomizer, SimpleRng};
pub use scoring::{calculate_score, get_drop_interval_ms, level_for_lines, ScoreResult};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
