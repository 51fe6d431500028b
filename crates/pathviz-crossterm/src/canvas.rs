//! An off-screen character buffer and frame diffing.
//!
//! The host draws each frame into a [`Canvas`]; [`diff`] then yields only
//! the glyphs that changed since the previous frame so the driver writes as
//! little as possible to the terminal.

use pathviz_core::{Grid, Pos};

use crate::palette::state_style;
use crate::style::Style;

/// Terminal columns used to draw one grid cell, so cells look square.
pub const CELL_COLUMNS: u16 = 2;

/// A styled character.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Glyph {
    #[inline]
    pub const fn new(ch: char, style: Style) -> Self {
        Self { ch, style }
    }
}

impl Default for Glyph {
    #[inline]
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::default(),
        }
    }
}

/// A fixed-size row-major buffer of glyphs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    glyphs: Vec<Glyph>,
    width: u16,
    height: u16,
}

impl Canvas {
    /// A blank canvas of `width` columns and `height` lines.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            glyphs: vec![Glyph::default(); width as usize * height as usize],
            width,
            height,
        }
    }

    /// Canvas large enough for `grid` plus `status_lines` lines of text at
    /// least `min_width` columns wide.
    pub fn for_grid(grid: &Grid, status_lines: u16, min_width: u16) -> Self {
        let n = u16::try_from(grid.size()).unwrap_or(u16::MAX);
        let width = n.saturating_mul(CELL_COLUMNS).max(min_width);
        Self::new(width, n.saturating_add(status_lines))
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    /// The glyph at `(x, y)`, or `None` outside the canvas.
    pub fn at(&self, x: u16, y: u16) -> Option<Glyph> {
        self.index(x, y).map(|i| self.glyphs[i])
    }

    /// Set the glyph at `(x, y)`. No-op outside the canvas.
    pub fn set(&mut self, x: u16, y: u16, glyph: Glyph) {
        if let Some(i) = self.index(x, y) {
            self.glyphs[i] = glyph;
        }
    }

    pub fn fill(&mut self, glyph: Glyph) {
        self.glyphs.fill(glyph);
    }

    /// Write `text` starting at `(x, y)`, clipped at the right edge.
    pub fn print(&mut self, x: u16, y: u16, text: &str, style: Style) {
        for (i, ch) in text.chars().enumerate() {
            let Some(cx) = u16::try_from(i).ok().and_then(|i| x.checked_add(i)) else {
                break;
            };
            if cx >= self.width {
                break;
            }
            self.set(cx, y, Glyph::new(ch, style));
        }
    }

    /// Paint every grid cell as [`CELL_COLUMNS`] blank glyphs coloured by
    /// its state, with row 0 on the first line.
    pub fn draw_grid(&mut self, grid: &Grid) {
        for cell in grid {
            let p = cell.pos();
            let (Ok(line), Ok(col)) = (u16::try_from(p.row), u16::try_from(p.col)) else {
                continue;
            };
            let glyph = Glyph::new(' ', state_style(cell.state));
            for dx in 0..CELL_COLUMNS {
                self.set(col * CELL_COLUMNS + dx, line, glyph);
            }
        }
    }
}

/// Map a terminal position to the grid cell drawn there by
/// [`Canvas::draw_grid`], or `None` if it falls outside an `n×n` grid.
pub fn cell_at(column: u16, line: u16, n: i32) -> Option<Pos> {
    let p = Pos::new(i32::from(line), i32::from(column / CELL_COLUMNS));
    p.in_square(n).then_some(p)
}

/// A single glyph that changed between frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameCell {
    pub x: u16,
    pub y: u16,
    pub glyph: Glyph,
}

/// Glyphs of `curr` that differ from `prev`. When the sizes differ (or
/// there is no previous frame) every glyph is returned.
pub fn diff(prev: Option<&Canvas>, curr: &Canvas) -> Vec<FrameCell> {
    let same_size = prev.is_some_and(|p| p.width == curr.width && p.height == curr.height);
    let mut cells = Vec::new();
    for y in 0..curr.height {
        for x in 0..curr.width {
            let Some(glyph) = curr.at(x, y) else {
                continue;
            };
            let changed = !same_size || prev.and_then(|p| p.at(x, y)) != Some(glyph);
            if changed {
                cells.push(FrameCell { x, y, glyph });
            }
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{BLACK, ORANGE, WHITE};
    use pathviz_core::CellState;

    #[test]
    fn set_and_at() {
        let mut c = Canvas::new(4, 3);
        let g = Glyph::new('X', Style::default());
        c.set(2, 1, g);
        assert_eq!(c.at(2, 1), Some(g));
        assert_eq!(c.at(4, 0), None);
        c.set(9, 9, g);
    }

    #[test]
    fn print_clips() {
        let mut c = Canvas::new(5, 1);
        c.print(2, 0, "hello", Style::default());
        assert_eq!(c.at(2, 0).unwrap().ch, 'h');
        assert_eq!(c.at(4, 0).unwrap().ch, 'l');
    }

    #[test]
    fn grid_cells_span_two_columns() {
        let mut grid = Grid::bordered(4, 40).unwrap();
        grid.set_state(Pos::new(1, 2), CellState::Start).unwrap();
        let mut c = Canvas::for_grid(&grid, 2, 0);
        assert_eq!((c.width(), c.height()), (8, 6));
        c.draw_grid(&grid);
        assert_eq!(c.at(0, 0).unwrap().style.bg, BLACK);
        assert_eq!(c.at(2, 1).unwrap().style.bg, WHITE);
        assert_eq!(c.at(4, 1).unwrap().style.bg, ORANGE);
        assert_eq!(c.at(5, 1).unwrap().style.bg, ORANGE);
    }

    #[test]
    fn min_width_widens_canvas() {
        let grid = Grid::new(3, 30).unwrap();
        assert_eq!(Canvas::for_grid(&grid, 1, 40).width(), 40);
    }

    #[test]
    fn cell_mapping() {
        assert_eq!(cell_at(5, 3, 10), Some(Pos::new(3, 2)));
        assert_eq!(cell_at(0, 0, 10), Some(Pos::new(0, 0)));
        assert_eq!(cell_at(20, 0, 10), None);
        assert_eq!(cell_at(0, 10, 10), None);
    }

    #[test]
    fn diff_reports_changes_only() {
        let a = Canvas::new(3, 2);
        let mut b = a.clone();
        b.set(1, 0, Glyph::new('A', Style::default()));
        let frame = diff(Some(&a), &b);
        assert_eq!(frame.len(), 1);
        assert_eq!((frame[0].x, frame[0].y, frame[0].glyph.ch), (1, 0, 'A'));
        assert!(diff(Some(&b), &b).is_empty());
    }

    #[test]
    fn diff_without_previous_is_full() {
        let c = Canvas::new(3, 2);
        assert_eq!(diff(None, &c).len(), 6);
        assert_eq!(diff(Some(&Canvas::new(2, 2)), &c).len(), 6);
    }
}
