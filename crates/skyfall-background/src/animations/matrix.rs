//! Matrix rain animation (stateful).

use rand::{Rng, rngs::StdRng};
use skyfall_core::{Dimensions, Speed};

use crate::chars::MATRIX_GLYPHS;
use crate::color::Rgb;
use crate::surface::{Paint, Surface};

/// Glyph size in pixels; also the column pitch and the row pitch.
pub const FONT_SIZE: u32 = 18;

/// Opacity of the black layer painted over the previous frame.
pub const FADE_ALPHA: f32 = 0.15;

/// A column below the bottom edge restarts when a uniform draw exceeds this,
/// i.e. with a 2.5% chance per frame.
pub const RESET_THRESHOLD: f32 = 0.975;

/// Rows advanced per frame at speed 1.0.
const ROWS_PER_FRAME: f32 = 0.5;

const RAIN_PAINT: Paint = Paint {
    color: Rgb::MATRIX_GREEN,
    alpha: 1.0,
    glow: 8.0,
};

/// Number of glyph columns that fit in `width` pixels.
pub fn column_count(width: u32) -> usize {
    (width / FONT_SIZE) as usize
}

/// Falling columns of glyphs.
#[derive(Debug)]
pub struct MatrixRain {
    /// Row position of each column, in glyph rows.
    columns: Vec<f32>,
    dimensions: Dimensions,
    glyphs: Vec<char>,
    rng: StdRng,
}

impl MatrixRain {
    /// An empty rain; columns appear on the first [`MatrixRain::regenerate`].
    pub fn new(rng: StdRng) -> Self {
        Self {
            columns: Vec::new(),
            dimensions: Dimensions::default(),
            glyphs: MATRIX_GLYPHS.chars().collect(),
            rng,
        }
    }

    /// Recompute the column count and give every column a random offset in
    /// `[0, height)`.
    pub fn regenerate(&mut self, dimensions: Dimensions) {
        self.dimensions = dimensions;
        let height = dimensions.height as f32;
        self.columns = (0..column_count(dimensions.width))
            .map(|_| {
                if height > 0.0 {
                    self.rng.random_range(0.0..height)
                } else {
                    0.0
                }
            })
            .collect();
    }

    pub fn columns(&self) -> &[f32] {
        &self.columns
    }

    /// Fade the previous frame, stamp one random glyph per column and move
    /// each column down.
    ///
    /// Columns below the bottom edge keep drawing off-canvas until the random
    /// reset fires, which gives the streaks their uneven lengths.
    pub fn draw_frame(&mut self, surface: &mut dyn Surface, speed: Speed) {
        surface.fade(FADE_ALPHA);

        let font_size = FONT_SIZE as f32;
        let height = self.dimensions.height as f32;
        for (i, row) in self.columns.iter_mut().enumerate() {
            let glyph = self.glyphs[self.rng.random_range(0..self.glyphs.len())];
            let x = i as f32 * font_size;
            let y = *row * font_size;
            surface.fill_glyph(x, y, glyph, RAIN_PAINT);

            if y > height && self.rng.random::<f32>() > RESET_THRESHOLD {
                *row = 0.0;
            } else {
                *row += speed.value() * ROWS_PER_FRAME;
            }
        }
    }
}
