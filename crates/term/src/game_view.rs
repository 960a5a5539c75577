//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{get_shape, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Block color per piece kind: oak, slime, dirt, stone, redstone, lapis, gold.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::hex(0x8B4513),
        PieceKind::O => Rgb::hex(0x7CFC00),
        PieceKind::T => Rgb::hex(0xA0522D),
        PieceKind::S => Rgb::hex(0x808080),
        PieceKind::Z => Rgb::hex(0xFF0000),
        PieceKind::J => Rgb::hex(0x4169E1),
        PieceKind::L => Rgb::hex(0xFFD700),
    }
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

/// Where the board frame landed in the viewport
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        };

        self.draw_border(fb, frame);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, &id) in row.iter().enumerate() {
                match PieceKind::from_color_id(id) {
                    Some(kind) => self.draw_block(fb, frame, x as i8, y as i8, kind),
                    None => self.fill_cell(
                        fb,
                        frame,
                        x as i8,
                        y as i8,
                        '·',
                        CellStyle::fg_on(Rgb::new(90, 90, 100), WELL_BG).dim(),
                    ),
                }
            }
        }

        if let Some(active) = snap.active {
            if let Some(ghost_y) = snap.ghost_y.filter(|&g| g != active.y) {
                let ghost = CellStyle::fg_on(Rgb::new(140, 140, 140), WELL_BG).dim();
                for (x, y) in active.cells_at(ghost_y) {
                    self.fill_cell(fb, frame, x, y, '░', ghost);
                }
            }
            for (x, y) in active.cells_at(active.y) {
                self.draw_block(fb, frame, x, y, active.kind);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        match snap.phase {
            Phase::Idle => self.draw_overlay(fb, frame, &["PRESS ENTER"], None),
            Phase::Paused => self.draw_overlay(fb, frame, &["PAUSED", "P TO RESUME"], None),
            Phase::GameOver => self.draw_overlay(
                fb,
                frame,
                &["GAME OVER", "SCORE", "ENTER TO RETRY"],
                Some(snap.score),
            ),
            Phase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, f: Frame) {
        let style = CellStyle::fg_on(Rgb::new(200, 200, 200), SCREEN_BG);
        let (right, bottom) = (f.x + f.w - 1, f.y + f.h - 1);

        fb.put_char(f.x, f.y, '┌', style);
        fb.put_char(right, f.y, '┐', style);
        fb.put_char(f.x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
        for x in f.x + 1..right {
            fb.put_char(x, f.y, '─', style);
            fb.put_char(x, bottom, '─', style);
        }
        for y in f.y + 1..bottom {
            fb.put_char(f.x, y, '│', style);
            fb.put_char(right, y, '│', style);
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, f: Frame, x: i8, y: i8, kind: PieceKind) {
        let style = CellStyle::fg_on(piece_color(kind), WELL_BG).bold();
        self.fill_cell(fb, f, x, y, '█', style);
    }

    /// Fill one board cell; cells outside the well (e.g. above row 0) are skipped.
    fn fill_cell(&self, fb: &mut FrameBuffer, f: Frame, x: i8, y: i8, ch: char, style: CellStyle) {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let px = f.x + 1 + (x as u16) * self.cell_w;
        let py = f.y + 1 + (y as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        f: Frame,
    ) {
        let panel_x = f.x.saturating_add(f.w).saturating_add(2);
        if panel_x.saturating_add(12) > viewport.width {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::fg_on(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = f.y;
        for (name, v) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, v, value);
            y += 3;
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        if let Some(next) = snap.next {
            let shape = get_shape(next);
            let style = CellStyle::fg_on(piece_color(next), SCREEN_BG).bold();
            for (row, cells) in shape.iter_rows().enumerate() {
                for (col, &id) in cells.iter().enumerate() {
                    if id != 0 {
                        let px = panel_x + (col as u16) * self.cell_w;
                        fb.fill_rect(px, y + row as u16, self.cell_w, 1, '█', style);
                    }
                }
            }
        }
        y += 3;

        let help = CellStyle::fg_on(Rgb::new(120, 120, 130), SCREEN_BG);
        for line in ["←→ move  ↑ rotate", "↓ drop  SPACE slam", "P pause  Q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y += 1;
        }
    }

    /// Centered lines over the well; `score` is printed under the second line.
    fn draw_overlay(&self, fb: &mut FrameBuffer, f: Frame, lines: &[&str], score: Option<u32>) {
        let style = CellStyle::fg_on(Rgb::new(255, 255, 255), SCREEN_BG).bold();
        let mut y = (f.y + f.h / 2).saturating_sub(lines.len() as u16);

        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            fb.put_str(f.x + f.w.saturating_sub(text_w) / 2, y, text, style);
            y += 1;
            if let (1, Some(score)) = (i, score) {
                let digits = score.checked_ilog10().unwrap_or(0) as u16 + 1;
                fb.put_u32(f.x + f.w.saturating_sub(digits) / 2, y, score, style);
                y += 1;
            }
        }
    }
}
