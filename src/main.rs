//! Terminal runner (default binary).
//!
//! crossterm for input and a framebuffer-based renderer; the engine is driven
//! by wall-clock time through `GameState::tick`.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{GameSnapshot, GameState};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::{RunConfig, SessionLog};

fn main() -> Result<()> {
    let config = RunConfig::from_args();
    // Opened before raw mode so a bad path is reported on a normal terminal.
    let mut log = SessionLog::open(config.log_path().map(|p| p.as_path()))?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &mut log);

    // Always try to restore terminal state.
    let _ = term.exit();
    log.flush();
    result
}

fn run(term: &mut TerminalRenderer, config: &RunConfig, log: &mut SessionLog) -> Result<()> {
    let mut game = GameState::new(config.resolved_seed());
    let view = GameView::default();
    let frame_interval = config.frame_interval();

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next frame.
        let timeout = frame_interval
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        game.apply_command(command);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick with whole elapsed milliseconds; the remainder carries over.
        let elapsed_ms = last_tick.elapsed().as_millis() as u32;
        if elapsed_ms > 0 {
            last_tick += Duration::from_millis(elapsed_ms as u64);
            game.tick(elapsed_ms);
        }

        log.record_all(&game.take_events());
    }
}
