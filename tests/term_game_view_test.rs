use blockfall::core::{GameSnapshot, GameState};
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::{Phase, PieceKind};

fn row_text(fb: &FrameBuffer, y: u16) -> String {
    fb.row(y).unwrap().iter().map(|c| c.ch).collect()
}

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height()).map(|y| row_text(fb, y)).collect::<Vec<_>>().join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameState::new(1).snapshot();
    snap.board[19][0] = PieceKind::I.color_id();

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    assert_eq!(fb.get(1, 20).unwrap().ch, '█');
    assert_eq!(fb.get(2, 20).unwrap().ch, '█');
    assert_eq!(fb.get(3, 20).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_piece_and_ghost() {
    let mut gs = GameState::new(1);
    gs.start();
    let snap = gs.snapshot();
    let active = snap.active.unwrap();
    let ghost_y = snap.ghost_y.unwrap();
    assert!(ghost_y > active.y);

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    for (x, y) in active.cells_at(active.y) {
        let (px, py) = (1 + x as u16 * 2, 1 + y as u16);
        assert_eq!(fb.get(px, py).unwrap().ch, '█');
    }
    for (x, y) in active.cells_at(ghost_y) {
        let (px, py) = (1 + x as u16 * 2, 1 + y as u16);
        assert_eq!(fb.get(px + 1, py).unwrap().ch, '░');
    }
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut gs = GameState::new(1);
    gs.start();
    let mut snap = gs.snapshot();
    snap.score = 1234;
    snap.level = 2;
    snap.lines = 10;
    snap.next = Some(PieceKind::O);

    // frame x = (60-22)/2 = 19, y = 1; panel starts two columns right of it.
    let fb = GameView::default().render(&snap, Viewport::new(60, 24));
    let panel_x = 19 + 22 + 2;

    assert!(row_text(&fb, 1)[..].contains("SCORE"));
    assert_eq!(fb.get(panel_x, 2).unwrap().ch, '1');
    assert_eq!(fb.get(panel_x + 3, 2).unwrap().ch, '4');
    assert_eq!(fb.get(panel_x, 4).unwrap().ch, 'L');
    assert_eq!(fb.get(panel_x, 5).unwrap().ch, '2');
    assert!(row_text(&fb, 10).contains("NEXT"));
    // O preview: 2x2 cells, each 2 columns wide.
    for (dx, dy) in [(0, 0), (3, 0), (0, 1), (3, 1)] {
        assert_eq!(fb.get(panel_x + dx, 11 + dy).unwrap().ch, '█');
    }
}

#[test]
fn term_view_skips_side_panel_when_narrow() {
    let mut gs = GameState::new(1);
    gs.start();
    let fb = GameView::default().render(&gs.snapshot(), Viewport::new(30, 22));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_overlays_follow_phase() {
    let view = GameView::default();
    let vp = Viewport::new(22, 22);
    let mut snap = GameSnapshot::default();

    let idle = screen_text(&view.render(&snap, vp));
    assert!(idle.contains("PRESS ENTER"));

    snap.phase = Phase::Paused;
    let paused = screen_text(&view.render(&snap, vp));
    assert!(paused.contains("PAUSED"));
    assert!(!paused.contains("PRESS ENTER"));

    snap.phase = Phase::GameOver;
    snap.score = 4200;
    let over = screen_text(&view.render(&snap, vp));
    assert!(over.contains("GAME OVER"));
    assert!(over.contains("4200"));
    assert!(over.contains("ENTER TO RETRY"));

    snap.phase = Phase::Running;
    let running = screen_text(&view.render(&snap, vp));
    assert!(!running.contains("GAME OVER"));
    assert!(!running.contains("PAUSED"));
}
