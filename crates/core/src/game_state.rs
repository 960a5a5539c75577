//! Game state module - the engine that owns a whole session
//!
//! This module ties together the board, pieces, randomizer and scoring. It
//! runs the lifecycle `Idle → Running ⇄ Paused → GameOver → Running` and the
//! per-piece cycle spawn → move/rotate → lock → clear → score → spawn.
//!
//! The engine never reads a clock. Front ends call [`GameState::tick`] with the
//! elapsed time, and every other command completes synchronously.

use crate::pieces::{get_shape, spawn_x, Minos, ShapeMatrix, SPAWN_Y};
use crate::scoring::{calculate_score, get_drop_interval_ms, ScoreResult};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;
use crate::{Board, Randomizer};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub matrix: ShapeMatrix,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at its spawn position
    pub fn new(kind: PieceKind) -> Self {
        let matrix = get_shape(kind);
        Self {
            kind,
            rotation: Rotation::North,
            matrix,
            x: spawn_x(&matrix),
            y: SPAWN_Y,
        }
    }

    /// Occupied board coordinates of this piece
    pub fn cells(&self) -> Minos {
        self.matrix
            .minos()
            .into_iter()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }

    /// Whether any mino hits a wall, the floor or a filled cell.
    ///
    /// Minos above row 0 never collide.
    pub fn collides(&self, board: &Board) -> bool {
        self.cells().iter().any(|&(x, y)| board.blocks(x, y))
    }

    /// Piece moved by (dx, dy), or None if the move cannot land in a legal spot.
    ///
    /// Origins past the right wall or below the floor collide for every mino,
    /// so they are rejected up front along with arithmetic overflow.
    pub fn try_shifted(&self, dx: i8, dy: i8) -> Option<Self> {
        let x = self.x.checked_add(dx)?;
        let y = self.y.checked_add(dy)?;
        if x > BOARD_WIDTH as i8 || y > BOARD_HEIGHT as i8 {
            return None;
        }
        Some(Self { x, y, ..*self })
    }

    /// One row lower; only called while the piece is not grounded
    fn dropped(&self) -> Self {
        Self {
            y: self.y + 1,
            ..*self
        }
    }

    /// Rotate clockwise in place, without any kick offsets.
    ///
    /// Returns None when the turned matrix would collide at the current origin.
    pub fn try_rotated(&self, board: &Board) -> Option<Self> {
        let turned = Self {
            rotation: self.rotation.rotate_cw(),
            matrix: self.matrix.rotated_cw(),
            ..*self
        };
        (!turned.collides(board)).then_some(turned)
    }

    /// Rotated piece, or this piece unchanged if the rotation is blocked
    pub fn rotated(&self, board: &Board) -> Self {
        self.try_rotated(board).unwrap_or(*self)
    }

    /// Check if the piece is resting on something
    pub fn is_grounded(&self, board: &Board) -> bool {
        self.try_shifted(0, 1).map_or(true, |p| p.collides(board))
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Tetromino>,
    next: Option<PieceKind>,
    randomizer: Randomizer,
    phase: Phase,
    score: u32,
    level: u32,
    lines: u32,
    drop_interval_ms: u32,
    /// Time since the last gravity step
    drop_timer_ms: u32,
    /// Outcome of the most recent lock
    last_clear: Option<ScoreResult>,
    /// Events not yet drained by the front end
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create an idle game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            next: None,
            randomizer: Randomizer::new(seed),
            phase: Phase::Idle,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            drop_interval_ms: BASE_DROP_MS,
            drop_timer_ms: 0,
            last_clear: None,
            events: Vec::new(),
        }
    }

    /// Start a fresh game.
    ///
    /// Valid from any phase: it also serves as restart. The randomizer keeps
    /// its sequence across restarts.
    pub fn start(&mut self) {
        self.board.clear();
        self.active = None;
        self.next = None;
        self.score = 0;
        self.level = START_LEVEL;
        self.lines = 0;
        self.drop_interval_ms = get_drop_interval_ms(START_LEVEL);
        self.drop_timer_ms = 0;
        self.last_clear = None;
        self.phase = Phase::Running;
        self.events.push(GameEvent::Started);

        self.spawn_piece();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while a game is in progress, paused or not
    pub fn running(&self) -> bool {
        matches!(self.phase, Phase::Running | Phase::Paused)
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn next_piece(&self) -> Option<PieceKind> {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn seed(&self) -> u32 {
        self.randomizer.seed()
    }

    pub fn last_clear(&self) -> Option<ScoreResult> {
        self.last_clear
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Events queued since the last drain, oldest first
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take and clear the queued events.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);

        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.next = self.next;
        out.phase = self.phase;
        out.seed = self.randomizer.seed();
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.drop_interval_ms = self.drop_interval_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Promote the next piece to active and draw a new next piece.
    ///
    /// If the new piece collides where it spawns the game is over and the
    /// function returns false.
    pub fn spawn_piece(&mut self) -> bool {
        let kind = match self.next.take() {
            Some(kind) => kind,
            None => self.randomizer.next(),
        };
        self.next = Some(self.randomizer.next());

        let piece = Tetromino::new(kind);
        if piece.collides(&self.board) {
            self.active = None;
            self.end_game();
            return false;
        }

        self.active = Some(piece);
        true
    }

    fn end_game(&mut self) {
        if self.phase == Phase::GameOver {
            return;
        }
        self.phase = Phase::GameOver;
        self.events.push(GameEvent::GameOver {
            final_score: self.score,
        });
    }

    /// Flip between running and paused; no-op before start or after game over
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            Phase::Running => {
                self.phase = Phase::Paused;
                self.events.push(GameEvent::Paused);
                true
            }
            Phase::Paused => {
                self.phase = Phase::Running;
                // Time spent paused must not count towards gravity.
                self.drop_timer_ms = 0;
                self.events.push(GameEvent::Resumed);
                true
            }
            Phase::Idle | Phase::GameOver => false,
        }
    }

    /// The active piece, if commands may currently move it
    fn playable_piece(&self) -> Option<Tetromino> {
        if self.phase != Phase::Running {
            return None;
        }
        self.active
    }

    /// Try to move the active piece.
    ///
    /// A rejected downward move means the piece has landed: it locks, rows
    /// clear and the next piece spawns. A rejected sideways move does nothing.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.playable_piece() else {
            return false;
        };

        if let Some(moved) = active.try_shifted(dx, dy).filter(|m| !m.collides(&self.board)) {
            self.active = Some(moved);
            return true;
        }

        if dy > 0 {
            self.lock_and_advance();
        }
        false
    }

    /// Rotate the active piece clockwise; a blocked rotation is discarded
    pub fn rotate(&mut self) -> bool {
        let Some(active) = self.playable_piece() else {
            return false;
        };

        match active.try_rotated(&self.board) {
            Some(turned) => {
                self.active = Some(turned);
                true
            }
            None => false,
        }
    }

    /// Move down one row by hand and restart the gravity timer
    pub fn soft_drop(&mut self) -> bool {
        if self.playable_piece().is_none() {
            return false;
        }
        let moved = self.try_move(0, 1);
        self.drop_timer_ms = 0;
        moved
    }

    /// Drop the active piece to the bottom and lock it.
    /// Returns the number of rows fallen.
    pub fn hard_drop(&mut self) -> u32 {
        let Some(mut active) = self.playable_piece() else {
            return 0;
        };

        let mut drop_distance: u32 = 0;
        while !active.is_grounded(&self.board) {
            active = active.dropped();
            drop_distance += 1;
        }

        self.active = Some(active);
        self.lock_and_advance();
        self.drop_timer_ms = 0;

        drop_distance
    }

    /// Merge the active piece, clear rows, score them and spawn the next piece
    fn lock_and_advance(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.lock_cells(&active.cells(), active.kind);

        let cleared = self.board.clear_full_rows();
        let result = calculate_score(cleared, self.level, self.lines);

        if cleared > 0 {
            self.lines += cleared;
            self.score = self.score.saturating_add(result.points);
            self.level = result.level_after;
            self.drop_interval_ms = get_drop_interval_ms(self.level);
        }

        self.events.push(GameEvent::Locked {
            kind: active.kind,
            lines_cleared: cleared,
            points: result.points,
        });
        if result.leveled_up() {
            self.events.push(GameEvent::LevelUp { level: self.level });
        }
        self.last_clear = Some(result);

        self.spawn_piece();
    }

    /// Row the active piece would land on if hard dropped
    pub fn ghost_y(&self) -> Option<i8> {
        let mut ghost = self.active?;
        while !ghost.is_grounded(&self.board) {
            ghost = ghost.dropped();
        }
        Some(ghost.y)
    }

    /// Advance gravity by `elapsed_ms`.
    ///
    /// Once the accumulated time exceeds the drop interval the piece moves down
    /// one row (locking if it cannot) and the timer restarts. Returns true when
    /// a gravity step happened.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.playable_piece().is_none() {
            return false;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms <= self.drop_interval_ms {
            return false;
        }

        self.drop_timer_ms = 0;
        self.try_move(0, 1);
        true
    }

    /// Apply a front-end command
    pub fn apply_command(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.try_move(-1, 0),
            Command::MoveRight => self.try_move(1, 0),
            Command::SoftDrop => self.soft_drop(),
            Command::HardDrop => {
                let was_playable = self.playable_piece().is_some();
                self.hard_drop();
                was_playable
            }
            Command::Rotate => self.rotate(),
            Command::Pause => self.toggle_pause(),
            Command::Start => {
                self.start();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
