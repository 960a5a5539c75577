//! Run configuration for the terminal front end.
//!
//! Every flag can also come from the environment, so scripted runs can set
//! `BLOCKFALL_SEED=42 BLOCKFALL_LOG_PATH=run.jsonl blockfall`.

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clap::Parser;

pub const DEFAULT_FPS: u32 = 60;
pub const MAX_FPS: u32 = 240;

/// Terminal falling-block puzzle game.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about, long_about = None)]
pub struct RunConfig {
    /// Seed for the piece randomizer (default: taken from the clock).
    #[arg(long, env = "BLOCKFALL_SEED")]
    pub seed: Option<u32>,

    /// Frames per second of the render loop.
    #[arg(long, env = "BLOCKFALL_FPS", default_value_t = DEFAULT_FPS)]
    pub fps: u32,

    /// Append game events as JSON lines to this file.
    #[arg(long, env = "BLOCKFALL_LOG_PATH")]
    pub log_path: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            fps: DEFAULT_FPS,
            log_path: None,
        }
    }
}

impl RunConfig {
    /// Parse from the process arguments and environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Configured seed, or one derived from the wall clock
    pub fn resolved_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }

    /// Frame interval, with the fps clamped to 1..=240
    pub fn frame_interval(&self) -> Duration {
        let fps = self.fps.clamp(1, MAX_FPS);
        Duration::from_micros(1_000_000 / fps as u64)
    }

    /// Log path, ignoring blank values
    pub fn log_path(&self) -> Option<&PathBuf> {
        self.log_path
            .as_ref()
            .filter(|p| !p.as_os_str().to_string_lossy().trim().is_empty())
    }
}
