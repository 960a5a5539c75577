//! Scoring module - line-clear points, level progression and gravity speed
//!
//! Clears are not differentiated by size beyond the line count: `n` lines
//! award `n * 100 * level`, using the level in effect before the clear.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_INTERVAL_STEP_MS, LINES_PER_LEVEL, LINE_CLEAR_POINTS,
    START_LEVEL,
};

/// Outcome of one lock's line clears
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    pub lines_cleared: u32,
    pub points: u32,
    pub level_before: u32,
    pub level_after: u32,
}

impl ScoreResult {
    pub fn leveled_up(&self) -> bool {
        self.level_after > self.level_before
    }
}

/// Points for clearing `lines` rows at `level`
pub fn calculate_line_score(lines: u32, level: u32) -> u32 {
    lines
        .saturating_mul(LINE_CLEAR_POINTS)
        .saturating_mul(level)
}

/// Level reached after `total_lines` cleared lines
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + START_LEVEL
}

/// Gravity interval for a level, in milliseconds
pub fn get_drop_interval_ms(level: u32) -> u32 {
    let speedup = level
        .saturating_sub(START_LEVEL)
        .saturating_mul(DROP_INTERVAL_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}

/// Score a lock that cleared `lines_cleared` rows.
///
/// `total_lines` is the running total before this clear.
pub fn calculate_score(lines_cleared: u32, level: u32, total_lines: u32) -> ScoreResult {
    let level_after = if lines_cleared > 0 {
        level_for_lines(total_lines + lines_cleared)
    } else {
        level
    };

    ScoreResult {
        lines_cleared,
        points: calculate_line_score(lines_cleared, level),
        level_before: level,
        level_after,
    }
}
