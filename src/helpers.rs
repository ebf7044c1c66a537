use ratatui::layout::Rect;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 2.0;

pub fn centered_rect(width: u16, height: u16, cols: u16, rows: u16) -> Rect {
    // Never hand out a rect larger than available space
    let actual_width = width.min(cols);
    let actual_height = height.min(rows);

    let x = (cols - actual_width) / 2;
    let y = (rows - actual_height) / 2;

    Rect::new(x, y, actual_width, actual_height)
}

/// The part of the terminal the court is drawn into, letterboxed so the
/// court keeps its proportions, plus the logical to cell mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub area: Rect,
}

impl Viewport {
    pub fn fit(outer: Rect) -> Self {
        let court_cells_wide = SCREEN_WIDTH * CELL_ASPECT;

        let by_height = (outer.height as f64 * court_cells_wide / SCREEN_HEIGHT).floor() as u16;
        let (width, height) = if by_height <= outer.width {
            (by_height, outer.height)
        } else {
            let by_width = (outer.width as f64 * SCREEN_HEIGHT / court_cells_wide).floor() as u16;
            (outer.width, by_width)
        };

        let mut area = centered_rect(width, height, outer.width, outer.height);
        area.x += outer.x;
        area.y += outer.y;
        Self { area }
    }

    /// Cells covered by the logical box at `(x, y)` of size `w` x `h`.
    ///
    /// Anything on the court maps to at least one cell inside `area`.
    pub fn project(&self, x: f64, y: f64, w: f64, h: f64) -> Rect {
        let (col, width) = Self::project_span(x, w, SCREEN_WIDTH, self.area.width);
        let (row, height) = Self::project_span(y, h, SCREEN_HEIGHT, self.area.height);
        Rect::new(self.area.x + col, self.area.y + row, width, height)
    }

    fn project_span(start: f64, len: f64, logical: f64, cells: u16) -> (u16, u16) {
        if cells == 0 {
            return (0, 0);
        }
        let scale = cells as f64 / logical;
        let first = ((start * scale).floor().max(0.0) as u16).min(cells - 1);
        let last = (((start + len) * scale).ceil().max(0.0) as u16).min(cells);
        (first, last.saturating_sub(first).max(1))
    }
}
