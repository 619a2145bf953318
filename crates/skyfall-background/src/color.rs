//! Color utility functions for background animations.

use ratatui::style::Color;

/// An opaque 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    /// Phosphor green used by the matrix rain (`#00FF41`).
    pub const MATRIX_GREEN: Rgb = Rgb(0x00, 0xFF, 0x41);

    /// Darken towards black; `factor` 1.0 keeps the color, 0.0 gives black.
    pub fn scale(self, factor: f32) -> Rgb {
        let factor = factor.clamp(0.0, 1.0);
        let channel = |c: u8| (f32::from(c) * factor).round() as u8;
        Rgb(channel(self.0), channel(self.1), channel(self.2))
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}
