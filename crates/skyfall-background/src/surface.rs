//! Pixel drawing surfaces.
//!
//! Animations address the surface in pixels, the way a 2D canvas would. The
//! terminal implementation, [`CellSurface`], maps pixels onto character cells
//! and remembers how bright each cell still is so that translucent overlays
//! fade earlier drawings instead of wiping them.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};
use skyfall_core::{CellMetrics, Dimensions};

use crate::chars::STAR_CHARS;
use crate::color::Rgb;

/// Cells dimmer than this after a fade are dropped.
const FADE_CUTOFF: f32 = 0.04;

/// Fill settings for a single draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Rgb,
    /// Opacity, 0.0 to 1.0.
    pub alpha: f32,
    /// Glow radius in pixels; zero draws without glow.
    pub glow: f32,
}

/// A pixel-addressed drawing target.
pub trait Surface {
    /// Pixel extents of the surface.
    fn dimensions(&self) -> Dimensions;

    /// Erase everything.
    fn clear(&mut self);

    /// Paint a translucent black layer over everything drawn so far.
    fn fade(&mut self, alpha: f32);

    /// Fill a circle centred on `(x, y)`.
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, paint: Paint);

    /// Draw a glyph whose left edge is at `x` and whose baseline is at `y`.
    fn fill_glyph(&mut self, x: f32, y: f32, glyph: char, paint: Paint);
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Ink {
    symbol: char,
    color: Rgb,
    intensity: f32,
    glow: bool,
}

impl Ink {
    fn style(&self) -> Style {
        let style = Style::new()
            .fg(self.color.scale(self.intensity).into())
            .bg(Color::Black);
        if self.glow {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}

/// A [`Surface`] backed by a grid of terminal cells.
#[derive(Debug, Clone)]
pub struct CellSurface {
    metrics: CellMetrics,
    cols: u16,
    rows: u16,
    cells: Vec<Option<Ink>>,
}

impl CellSurface {
    pub fn new(cols: u16, rows: u16, metrics: CellMetrics) -> Self {
        Self {
            metrics,
            cols,
            rows,
            cells: vec![None; usize::from(cols) * usize::from(rows)],
        }
    }

    /// Resize the grid. Like a canvas, resizing discards the contents.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.cells = vec![None; usize::from(cols) * usize::from(rows)];
    }

    /// Grid size in cells.
    pub fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    /// Symbol and current color of a cell, if anything is drawn there.
    pub fn cell(&self, col: u16, row: u16) -> Option<(char, Rgb)> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells[self.index(col, row)].map(|ink| (ink.symbol, ink.color.scale(ink.intensity)))
    }

    /// Number of cells with something drawn in them.
    pub fn lit_cells(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    fn index(&self, col: u16, row: u16) -> usize {
        usize::from(row) * usize::from(self.cols) + usize::from(col)
    }

    /// Cell containing pixel row `row` and column `col`, if on the grid.
    fn locate(&self, col: f32, row: f32) -> Option<usize> {
        if !(col >= 0.0 && row >= 0.0) {
            return None;
        }
        let (col, row) = (col as u64, row as u64);
        if col >= u64::from(self.cols) || row >= u64::from(self.rows) {
            return None;
        }
        Some(self.index(col as u16, row as u16))
    }

    fn stamp(&mut self, index: usize, symbol: char, paint: Paint) {
        self.cells[index] = Some(Ink {
            symbol,
            color: paint.color,
            intensity: paint.alpha.clamp(0.0, 1.0),
            glow: paint.glow > 0.0,
        });
    }
}

impl Surface for CellSurface {
    fn dimensions(&self) -> Dimensions {
        Dimensions::from_cells(self.cols, self.rows, self.metrics)
    }

    fn clear(&mut self) {
        self.cells.fill(None);
    }

    fn fade(&mut self, alpha: f32) {
        let keep = 1.0 - alpha.clamp(0.0, 1.0);
        for cell in &mut self.cells {
            *cell = cell
                .map(|ink| Ink {
                    intensity: ink.intensity * keep,
                    ..ink
                })
                .filter(|ink| ink.intensity >= FADE_CUTOFF);
        }
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, paint: Paint) {
        let col = x / f32::from(self.metrics.width);
        let row = y / f32::from(self.metrics.height);
        let Some(index) = self.locate(col, row) else {
            return;
        };
        let symbol = match radius {
            r if r < 0.9 => STAR_CHARS[0],
            r if r < 1.3 => STAR_CHARS[1],
            _ => STAR_CHARS[2],
        };
        self.stamp(index, symbol, paint);
    }

    fn fill_glyph(&mut self, x: f32, y: f32, glyph: char, paint: Paint) {
        let col = x / f32::from(self.metrics.width);
        // The glyph box spans one cell height above the baseline.
        let row = (y / f32::from(self.metrics.height)).round() - 1.0;
        if let Some(index) = self.locate(col, row) {
            self.stamp(index, glyph, paint);
        }
    }
}

impl Widget for &CellSurface {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::new().bg(Color::Black));

        let cols = self.cols.min(area.width);
        let rows = self.rows.min(area.height);
        let mut symbol = [0u8; 4];
        for row in 0..rows {
            let mut col = 0;
            while col < cols {
                let Some(ink) = self.cells[self.index(col, row)] else {
                    col += 1;
                    continue;
                };
                let text = ink.symbol.encode_utf8(&mut symbol);
                let (next_x, _) = buf.set_stringn(
                    area.x + col,
                    area.y + row,
                    &*text,
                    usize::from(area.width - col),
                    ink.style(),
                );
                // Wide glyphs cover the following cell as well.
                col = (next_x - area.x).max(col + 1);
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    const GREEN: Paint = Paint {
        color: Rgb::MATRIX_GREEN,
        alpha: 1.0,
        glow: 8.0,
    };

    fn surface() -> CellSurface {
        // 90 x 72 pixels
        CellSurface::new(10, 4, CellMetrics::default())
    }

    #[test]
    fn test_dimensions_in_pixels() {
        assert_eq!(surface().dimensions(), Dimensions::new(90, 72));
    }

    #[test]
    fn test_glyph_baseline_maps_to_row_above() {
        let mut s = surface();
        s.fill_glyph(18.0, 18.0, 'A', GREEN);
        assert_eq!(s.cell(2, 0), Some(('A', Rgb::MATRIX_GREEN)));

        s.fill_glyph(36.0, 54.0, 'B', GREEN);
        assert_eq!(s.cell(4, 2), Some(('B', Rgb::MATRIX_GREEN)));
    }

    #[test]
    fn test_off_canvas_draws_are_ignored() {
        let mut s = surface();
        s.fill_glyph(0.0, 0.0, 'A', GREEN);
        s.fill_glyph(0.0, 10_000.0, 'A', GREEN);
        s.fill_glyph(90.0, 18.0, 'A', GREEN);
        s.fill_circle(-1.0, 5.0, 1.0, GREEN);
        s.fill_circle(5.0, 72.0, 1.0, GREEN);
        assert_eq!(s.lit_cells(), 0);
    }

    #[test]
    fn test_circle_symbol_follows_radius() {
        let mut s = surface();
        s.fill_circle(1.0, 1.0, 0.5, GREEN);
        s.fill_circle(10.0, 1.0, 1.0, GREEN);
        s.fill_circle(19.0, 1.0, 1.6, GREEN);
        assert_eq!(s.cell(0, 0).map(|c| c.0), Some('·'));
        assert_eq!(s.cell(1, 0).map(|c| c.0), Some('•'));
        assert_eq!(s.cell(2, 0).map(|c| c.0), Some('✦'));
    }

    #[test]
    fn test_fade_dims_then_drops() {
        let mut s = surface();
        s.fill_glyph(0.0, 18.0, 'A', GREEN);
        s.fade(0.5);
        assert_eq!(s.cell(0, 0), Some(('A', Rgb(0, 128, 33))));

        for _ in 0..5 {
            s.fade(0.5);
        }
        assert_eq!(s.cell(0, 0), None);
    }

    #[test]
    fn test_fade_is_not_a_clear() {
        let mut s = surface();
        s.fill_glyph(0.0, 18.0, 'A', GREEN);
        s.fade(0.15);
        assert_eq!(s.lit_cells(), 1);
        s.clear();
        assert_eq!(s.lit_cells(), 0);
    }

    #[test]
    fn test_resize_discards_contents() {
        let mut s = surface();
        s.fill_glyph(0.0, 18.0, 'A', GREEN);
        s.resize(20, 8);
        assert_eq!(s.size(), (20, 8));
        assert_eq!(s.lit_cells(), 0);
        assert_eq!(s.dimensions(), Dimensions::new(180, 144));
    }

    #[test]
    fn test_render_into_buffer() {
        let mut s = surface();
        s.fill_glyph(18.0, 36.0, 'ア', GREEN);
        s.fill_glyph(0.0, 18.0, 'Z', GREEN);

        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);
        (&s).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "Z");
        assert_eq!(buf[(0, 0)].fg, Color::Rgb(0x00, 0xFF, 0x41));
        assert!(buf[(0, 0)].modifier.contains(Modifier::BOLD));
        assert_eq!(buf[(2, 1)].symbol(), "ア");
        assert_eq!(buf[(5, 3)].symbol(), " ");
        assert_eq!(buf[(5, 3)].bg, Color::Black);
    }
}
