//! GameView: maps a [`GameSnapshot`] and the history log into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested. The same layout
//! math backs rendering and [`GameView::hit_test`], so a click always lands
//! on the cell that was drawn under it.

use tracing::warn;

use crate::core::{Board, GameSnapshot, HistoryLog};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{BoardSize, CellMark};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Left margin of every block.
const MARGIN_X: u16 = 2;
/// Row of the grid frame's top border.
const GRID_TOP: u16 = 5;
/// Gap between the grid frame and a side-by-side history panel.
const PANEL_GAP: u16 = 3;
/// Narrowest history panel that still fits all four columns.
const HISTORY_MIN_W: u16 = 42;

const DATE_COL: u16 = 0;
const ALPHABET_COL: u16 = 19;
const SIZE_COL: u16 = 30;
const TIME_COL: u16 = 36;

const HELP: &str =
    "s start  g new table  x stop  a alphabet  3-7 size  m colors  c clear history  q quit";

/// Screen rectangle of the grid frame (border included).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub x: u16,
    pub y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

/// A lightweight terminal renderer for the Schulte table screen.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 4x1 keeps a 7x7 table inside a 24-row terminal.
        Self {
            cell_w: 4,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    pub fn grid_layout(&self, size: BoardSize) -> GridLayout {
        let side = size.side() as u16;
        GridLayout {
            x: MARGIN_X,
            y: GRID_TOP,
            frame_w: side * self.cell_w + 2,
            frame_h: side * self.cell_h + 2,
        }
    }

    /// Cell index under terminal position `(column, row)`, if any.
    pub fn hit_test(&self, size: BoardSize, column: u16, row: u16) -> Option<usize> {
        let grid = self.grid_layout(size);
        let inner_x = column.checked_sub(grid.x + 1)?;
        let inner_y = row.checked_sub(grid.y + 1)?;
        let col = inner_x / self.cell_w;
        let cell_row = inner_y / self.cell_h;
        let side = size.side() as u16;
        if col >= side || cell_row >= side {
            return None;
        }
        Some(Board::index_of(size, cell_row as u8, col as u8))
    }

    /// Render the screen into an existing framebuffer.
    ///
    /// `cursor` is the keyboard selection, drawn as brackets around a cell.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        history: &HistoryLog,
        cursor: Option<usize>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        self.draw_header(fb, snap, history);

        let grid = self.grid_layout(snap.size);
        if snap.letters.is_empty() {
            warn!(board_id = snap.board_id, "no letters to render, skipping grid");
        } else {
            self.draw_grid(fb, snap, cursor, grid);
        }

        let panel_x = grid.x + grid.frame_w + PANEL_GAP;
        if viewport.width >= panel_x + HISTORY_MIN_W {
            self.draw_history(fb, history, panel_x, grid.y, viewport.height);
        } else {
            let below = grid.y + grid.frame_h + 1;
            self.draw_history(fb, history, MARGIN_X, below, viewport.height);
        }

        if viewport.height > 0 {
            let help = CellStyle::new(Rgb::new(150, 150, 160), Rgb::new(0, 0, 0)).dim();
            fb.put_str(MARGIN_X, viewport.height - 1, HELP, help);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        history: &HistoryLog,
        cursor: Option<usize>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, history, cursor, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, history: &HistoryLog) {
        let title = CellStyle::new(Rgb::new(120, 170, 240), Rgb::new(0, 0, 0)).bold();
        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::default();
        let dim = value.dim();

        fb.put_str(MARGIN_X, 0, "SCHULTE TABLE", title);

        // Settings line.
        let mut x = fb.put_str(MARGIN_X, 1, "SIZE ", label);
        x = fb.put_str(x, 1, &snap.size.to_string(), value);
        x = fb.put_str(x + 3, 1, "ALPHABET ", label);
        x = fb.put_str(x, 1, snap.settings.alphabet.display_name(), value);
        x = fb.put_str(x + 3, 1, "COLORS ", label);
        x = fb.put_str(x, 1, if snap.settings.color_mode { "on" } else { "off" }, value);
        if snap.settings_locked() {
            fb.put_str(x + 3, 1, "(locked)", dim);
        }

        // Status line.
        let y = 3;
        if snap.running() {
            let target = CellStyle::new(Rgb::new(255, 230, 120), Rgb::new(0, 0, 0)).bold();
            let mut x = fb.put_str(MARGIN_X, y, "FIND ", label);
            if let Some(t) = snap.target {
                fb.put_char(x, y, t, target);
                x += 1;
            }
            x = fb.put_str(x + 4, y, "TIME ", label);
            x = fb.put_str(x, y, &snap.time.to_string(), value);
            x = fb.put_str(x + 4, y, "FOUND ", label);
            fb.put_str(x, y, &format!("{}/{}", snap.found, snap.distinct), value);
        } else {
            let mut x = fb.put_str(MARGIN_X, y, "TIME ", label);
            x = fb.put_str(x, y, &snap.time.to_string(), value);
            let done = CellStyle::new(Rgb::new(120, 220, 140), Rgb::new(0, 0, 0)).bold();
            match snap.last_result {
                Some(t) => {
                    x = fb.put_str(x + 4, y, &format!("Done in {}!", t), done);
                    fb.put_str(x + 1, y, "Press s to play again", dim);
                }
                None => {
                    fb.put_str(x + 4, y, "Press s to start", dim);
                }
            }
        }

        if let Some(best) = history.best_time(snap.settings.alphabet, snap.size) {
            let x = fb.width().saturating_sub(12);
            let after = fb.put_str(x, 0, "BEST ", label);
            fb.put_str(after, 0, &best.to_string(), value);
        }
    }

    fn draw_grid(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        cursor: Option<usize>,
        grid: GridLayout,
    ) {
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        draw_border(fb, grid.x, grid.y, grid.frame_w, grid.frame_h, border);

        let total = snap.letters.len();
        for index in 0..total {
            let Some((ch, mark)) = snap.cell(index) else {
                continue;
            };
            let (row, col) = Board::position_of(snap.size, index);
            let style = cell_style(index, total, row, col, mark, snap.settings.color_mode);

            let px = grid.x + 1 + col as u16 * self.cell_w;
            let py = grid.y + 1 + row as u16 * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

            let lx = px + self.cell_w / 2;
            let ly = py + self.cell_h / 2;
            fb.put_char(lx, ly, ch, style);

            if cursor == Some(index) && self.cell_w >= 3 {
                let bracket = CellStyle { bold: true, ..style };
                fb.put_char(lx - 1, ly, '[', bracket);
                fb.put_char(lx + 1, ly, ']', bracket);
            }
        }
    }

    fn draw_history(
        &self,
        fb: &mut FrameBuffer,
        history: &HistoryLog,
        x: u16,
        y: u16,
        viewport_h: u16,
    ) {
        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::default();

        // Rows above the help line.
        let last_row = viewport_h.saturating_sub(2);
        if y > last_row {
            return;
        }

        fb.put_str(x, y, "HISTORY", label);
        if history.is_empty() {
            if y < last_row {
                fb.put_str(x, y + 1, "No games played yet", value.dim());
            }
            return;
        }

        let header_y = y + 1;
        if header_y > last_row {
            return;
        }
        fb.put_str(x + DATE_COL, header_y, "DATE", label);
        fb.put_str(x + ALPHABET_COL, header_y, "ALPHABET", label);
        fb.put_str(x + SIZE_COL, header_y, "SIZE", label);
        fb.put_str(x + TIME_COL, header_y, "TIME", label);

        // Keep the newest entries visible, in insertion order.
        let capacity = (last_row - header_y) as usize;
        let skip = history.len().saturating_sub(capacity);
        for (i, entry) in history.iter().skip(skip).enumerate() {
            let row = header_y + 1 + i as u16;
            fb.put_str_max(x + DATE_COL, row, &entry.date_label(), ALPHABET_COL - 2, value);
            fb.put_str_max(
                x + ALPHABET_COL,
                row,
                entry.alphabet().display_name(),
                SIZE_COL - ALPHABET_COL - 1,
                value,
            );
            fb.put_str(x + SIZE_COL, row, &entry.dimensions_label(), value);
            fb.put_str(x + TIME_COL, row, &entry.time_label(), value);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// Style of one board cell.
///
/// Feedback marks win over color mode. In color mode the hue walks the
/// color wheel by cell index; otherwise cells alternate in a checkerboard.
fn cell_style(index: usize, total: usize, row: u8, col: u8, mark: CellMark, color_mode: bool) -> CellStyle {
    let white = Rgb::new(255, 255, 255);
    match mark {
        CellMark::Correct => CellStyle::new(white, Rgb::new(60, 160, 80)).bold(),
        CellMark::Wrong => CellStyle::new(white, Rgb::new(200, 60, 60)).bold(),
        CellMark::Plain if color_mode => {
            let hue = (index as f32 / total.max(1) as f32) * 360.0;
            CellStyle::new(Rgb::from_hsl(hue, 80.0, 30.0), Rgb::from_hsl(hue, 80.0, 90.0)).bold()
        }
        CellMark::Plain => {
            let bg = if (row + col) % 2 == 0 {
                Rgb::new(45, 45, 60)
            } else {
                Rgb::new(35, 35, 48)
            };
            CellStyle::new(Rgb::new(235, 235, 235), bg).bold()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_test_matches_cell_rectangles() {
        let view = GameView::default();
        let size = BoardSize::from_side(3).unwrap();
        let grid = view.grid_layout(size);

        // First cell starts just inside the border.
        assert_eq!(view.hit_test(size, grid.x + 1, grid.y + 1), Some(0));
        assert_eq!(view.hit_test(size, grid.x + 4, grid.y + 1), Some(0));
        assert_eq!(view.hit_test(size, grid.x + 5, grid.y + 1), Some(1));
        assert_eq!(view.hit_test(size, grid.x + 1, grid.y + 3), Some(6));

        // Border and outside.
        assert_eq!(view.hit_test(size, grid.x, grid.y + 1), None);
        assert_eq!(view.hit_test(size, grid.x + 1, grid.y), None);
        assert_eq!(view.hit_test(size, grid.x + grid.frame_w - 1, grid.y + 1), None);
        assert_eq!(view.hit_test(size, grid.x + 1, grid.y + grid.frame_h - 1), None);
    }

    #[test]
    fn marks_override_color_mode() {
        let correct = cell_style(0, 9, 0, 0, CellMark::Correct, true);
        let wrong = cell_style(0, 9, 0, 0, CellMark::Wrong, true);
        let plain = cell_style(0, 9, 0, 0, CellMark::Plain, true);
        assert_ne!(correct.bg, plain.bg);
        assert_ne!(wrong.bg, plain.bg);
        assert_ne!(correct.bg, wrong.bg);
    }

    #[test]
    fn color_mode_walks_the_hue_wheel() {
        let first = cell_style(0, 25, 0, 0, CellMark::Plain, true);
        let middle = cell_style(12, 25, 2, 2, CellMark::Plain, true);
        assert_eq!(first.bg, Rgb::from_hsl(0.0, 80.0, 90.0));
        assert_ne!(first.bg, middle.bg);
    }
}
