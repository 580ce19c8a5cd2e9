use tetramino::core::{GameConfig, GameSession, GameSnapshot, SessionState};
use tetramino::term::{AnchorY, FrameBuffer, GameView, RecordsView, Rgb, Viewport};
use tetramino::types::ShapeKind;

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    all
}

fn running_snapshot() -> GameSnapshot {
    let mut session = GameSession::new(GameConfig::with_seed(1));
    session.start();
    session.snapshot()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameSnapshot::default();
    let view = GameView::default();

    // 10x20 cells at 2x1 plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = running_snapshot();
    snap.field[19][0] = Some(ShapeKind::I);
    snap.active = None;

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    let (x0, y0) = (1, 1 + 19);
    assert_eq!(fb.get(x0, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0, y0).unwrap().style.fg, Rgb::from_hex(0x1abc9c));
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_piece() {
    let snap = running_snapshot();
    let active = snap.active.unwrap();
    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(22, 22));

    for pos in active.cells {
        let cell = fb.get(1 + pos.x as u16 * 2, 1 + pos.y as u16).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, Rgb::from_hex(active.shape.color()));
    }
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = running_snapshot();
    snap.score = 1234;
    snap.level = 2;
    snap.lines = 10;

    let records = RecordsView {
        best_score: 9876,
        games_played: 3,
    };
    let fb = GameView::default().render_with_records(&snap, Some(&records), Viewport::new(60, 26));
    let all = screen_text(&fb);

    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("LINES"));
    assert!(all.contains("NEXT"));
    assert!(all.contains("BEST"));
    assert!(all.contains("9876"));
}

#[test]
fn term_view_overlays_follow_session_state() {
    let view = GameView::default();
    let vp = Viewport::new(40, 24);

    let mut snap = running_snapshot();
    assert!(!screen_text(&view.render(&snap, vp)).contains("PAUSED"));

    snap.state = SessionState::Paused;
    assert!(screen_text(&view.render(&snap, vp)).contains("PAUSED"));

    snap.state = SessionState::GameOver;
    assert!(screen_text(&view.render(&snap, vp)).contains("GAME OVER"));

    snap.state = SessionState::NotStarted;
    assert!(screen_text(&view.render(&snap, vp)).contains("ENTER TO START"));
}

#[test]
fn term_view_centers_field_on_tall_viewports() {
    let snap = GameSnapshot::default();
    let fb = GameView::default().render(&snap, Viewport::new(22, 30));

    // start_y = (30 - 22) / 2 = 4
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_render_into_reuses_buffer_across_sizes() {
    let snap = running_snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(1, 1);

    view.render_into(&snap, Viewport::new(30, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (30, 24));

    view.render_into(&snap, Viewport::new(10, 5), &mut fb);
    assert_eq!((fb.width(), fb.height()), (10, 5));
}

#[test]
fn term_view_shows_fast_drop_only_while_running() {
    let view = GameView::default();
    let vp = Viewport::new(60, 30);
    let mut snap = running_snapshot();
    snap.fast_drop = true;
    assert!(screen_text(&view.render(&snap, vp)).contains("FAST"));

    snap.state = SessionState::Paused;
    assert!(!screen_text(&view.render(&snap, vp)).contains("FAST"));
}
