//! JSON-lines log of game events.
//!
//! One object per line: `{"tMs":1234,"event":{"type":"locked",...}}`.
//! The log never interrupts play: after the first failed write it goes quiet.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::types::GameEvent;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LogRecord<'a> {
    t_ms: u64,
    event: &'a GameEvent,
}

pub struct SessionLog {
    out: Option<BufWriter<File>>,
    started: Instant,
    buf: Vec<u8>,
}

impl SessionLog {
    /// A log that drops everything.
    pub fn disabled() -> Self {
        Self {
            out: None,
            started: Instant::now(),
            buf: Vec::new(),
        }
    }

    /// Open `path` for appending; `None` gives a disabled log.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::disabled());
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open session log {}", path.display()))?;

        Ok(Self {
            out: Some(BufWriter::new(file)),
            started: Instant::now(),
            buf: Vec::with_capacity(256),
        })
    }

    pub fn enabled(&self) -> bool {
        self.out.is_some()
    }

    /// Append one event stamped with the time since the log was opened.
    pub fn record(&mut self, event: &GameEvent) {
        let t_ms = self.started.elapsed().as_millis() as u64;
        self.record_at(t_ms, event);
    }

    pub fn record_at(&mut self, t_ms: u64, event: &GameEvent) {
        let Some(out) = self.out.as_mut() else {
            return;
        };

        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, &LogRecord { t_ms, event }).is_err() {
            return;
        }
        self.buf.push(b'\n');

        if out.write_all(&self.buf).is_err() {
            self.out = None;
        }
    }

    pub fn record_all(&mut self, events: &[GameEvent]) {
        for event in events {
            self.record(event);
        }
    }

    pub fn flush(&mut self) {
        if let Some(out) = self.out.as_mut() {
            if out.flush().is_err() {
                self.out = None;
            }
        }
    }
}

impl Drop for SessionLog {
    fn drop(&mut self) {
        self.flush();
    }
}
