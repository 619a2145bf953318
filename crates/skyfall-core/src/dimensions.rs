//! Drawing-area size in pixels and the pixel/cell mapping.

use serde::{Deserialize, Serialize};

/// Pixel extents of the drawing area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Pixel size of a terminal grid of `cols` x `rows` cells.
    pub fn from_cells(cols: u16, rows: u16, metrics: CellMetrics) -> Self {
        Self {
            width: u32::from(cols) * u32::from(metrics.width),
            height: u32::from(rows) * u32::from(metrics.height),
        }
    }

    /// True when the area cannot hold a single pixel.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// How many pixels one terminal cell covers.
///
/// A monospace cell is about half as wide as it is tall, so the defaults map
/// an 18px font onto one row and a double-width glyph onto two columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellMetrics {
    pub width: u16,
    pub height: u16,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            width: 9,
            height: 18,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cells_default_metrics() {
        let dims = Dimensions::from_cells(120, 40, CellMetrics::default());
        assert_eq!(dims, Dimensions::new(1080, 720));
    }

    #[test]
    fn test_from_cells_custom_metrics() {
        let metrics = CellMetrics {
            width: 10,
            height: 20,
        };
        assert_eq!(Dimensions::from_cells(3, 2, metrics), Dimensions::new(30, 40));
    }

    #[test]
    fn test_is_empty() {
        assert!(Dimensions::default().is_empty());
        assert!(Dimensions::new(100, 0).is_empty());
        assert!(!Dimensions::new(1, 1).is_empty());
    }
}
