//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::shapes::spawn_offsets;
use crate::core::{GameSnapshot, SessionState};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{ShapeKind, GRID_COLS, GRID_ROWS};

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

/// Persistent records shown in the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordsView {
    pub best_score: u32,
    pub games_played: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const FIELD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Renders the playing field, the preview/score panel and overlays.
pub struct GameView {
    /// Field cell width in terminal columns.
    cell_w: u16,
    /// Field cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_records(snap, None, viewport, fb);
    }

    pub fn render_into_with_records(
        &self,
        snap: &GameSnapshot,
        records: Option<&RecordsView>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let field_w = (GRID_COLS as u16) * self.cell_w;
        let field_h = (GRID_ROWS as u16) * self.cell_h;
        let frame_w = field_w + 2;
        let frame_h = field_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let bg = CellStyle::new(Rgb::new(80, 80, 90), FIELD_BG);
        fb.fill_rect(start_x + 1, start_y + 1, field_w, field_h, ' ', bg);
        fb.draw_box(
            start_x,
            start_y,
            frame_w,
            frame_h,
            CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG),
        );

        let origin = (start_x + 1, start_y + 1);

        for (y, row) in snap.field.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(shape) => self.draw_block(fb, origin, x as u16, y as u16, *shape),
                    None => self.draw_empty(fb, origin, x as u16, y as u16),
                }
            }
        }

        if let Some(active) = snap.active {
            for pos in active.cells {
                if pos.in_bounds() {
                    self.draw_block(fb, origin, pos.x as u16, pos.y as u16, active.shape);
                }
            }
        }

        self.draw_side_panel(fb, snap, records, viewport, start_x + frame_w + 2, start_y);

        match snap.state {
            SessionState::NotStarted => self.draw_overlay(
                fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                &["TETRAMINO", "", "ENTER TO START"],
            ),
            SessionState::Paused => {
                self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, &["PAUSED"])
            }
            SessionState::GameOver => self.draw_overlay(
                fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                &["GAME OVER", "", "R TO RESTART"],
            ),
            SessionState::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    pub fn render_with_records(
        &self,
        snap: &GameSnapshot,
        records: Option<&RecordsView>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_records(snap, records, viewport, &mut fb);
        fb
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, origin: (u16, u16), x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), FIELD_BG).dim();
        self.fill_cell(fb, origin, x, y, '·', style);
    }

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        origin: (u16, u16),
        x: u16,
        y: u16,
        shape: ShapeKind,
    ) {
        let style = CellStyle::new(Rgb::from_hex(shape.color()), FIELD_BG).bold();
        self.fill_cell(fb, origin, x, y, '█', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        (ox, oy): (u16, u16),
        x: u16,
        y: u16,
        ch: char,
        style: CellStyle,
    ) {
        fb.fill_rect(
            ox + x * self.cell_w,
            oy + y * self.cell_h,
            self.cell_w,
            self.cell_h,
            ch,
            style,
        );
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        records: Option<&RecordsView>,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = start_y;
        for (name, v) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), v, value);
            y = y.saturating_add(3);
        }

        if let Some(records) = records {
            fb.put_str(panel_x, y, "BEST", label);
            fb.put_u32(panel_x, y.saturating_add(1), records.best_score, value);
            fb.put_str(panel_x, y.saturating_add(2), "games", value.dim());
            fb.put_u32(panel_x + 6, y.saturating_add(2), records.games_played, value.dim());
            y = y.saturating_add(4);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        for shape in snap.next {
            if y >= viewport.height {
                break;
            }
            self.draw_preview(fb, panel_x, y, shape);
            y = y.saturating_add(3);
        }

        if snap.fast_drop && snap.playable() && y < viewport.height {
            fb.put_str(panel_x, y, "FAST", value.dim());
        }
    }

    /// Draw a shape in its spawn orientation inside a 4x2 cell box.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, shape: ShapeKind) {
        let style = CellStyle::new(Rgb::from_hex(shape.color()), PANEL_BG);
        for (dx, dy) in spawn_offsets(shape) {
            // Offsets span x in -1..=2 and y in 0..=1.
            let cx = x + ((dx + 1) as u16) * 2;
            let cy = y + dy as u16;
            fb.put_str(cx, cy, "██", style);
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        lines: &[&str],
    ) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let top = (start_y + frame_h / 2).saturating_sub(lines.len() as u16 / 2);
        for (i, text) in lines.iter().enumerate() {
            if text.is_empty() {
                continue;
            }
            let text_w = text.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            fb.put_str(x, top + i as u16, text, style);
        }
    }
}
