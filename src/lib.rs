//! blockfall (workspace facade crate).
//!
//! Re-exports the engine, input, and terminal crates under one name and adds
//! the pieces only the binary needs: run configuration and the session log.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub mod config;
pub mod session_log;

pub use config::RunConfig;
pub use session_log::SessionLog;
