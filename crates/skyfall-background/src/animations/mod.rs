//! Background animations.

pub mod matrix;
pub mod starfall;

use rand::rngs::StdRng;
use skyfall_core::{BackgroundKind, Dimensions, Speed};

pub use matrix::MatrixRain;
pub use starfall::{Star, Starfall};

use crate::surface::Surface;

/// The entity state of whichever background is mounted.
#[derive(Debug)]
pub enum Effect {
    Starfall(Starfall),
    Matrix(MatrixRain),
}

impl Effect {
    /// Empty entity state for `kind`, drawing randomness from `rng`.
    pub fn new(kind: BackgroundKind, rng: StdRng) -> Self {
        match kind {
            BackgroundKind::Starfall => Effect::Starfall(Starfall::new(rng)),
            BackgroundKind::Matrix => Effect::Matrix(MatrixRain::new(rng)),
        }
    }

    pub fn kind(&self) -> BackgroundKind {
        match self {
            Effect::Starfall(_) => BackgroundKind::Starfall,
            Effect::Matrix(_) => BackgroundKind::Matrix,
        }
    }

    /// Replace all entities to fit a surface of the given size.
    pub fn regenerate(&mut self, dimensions: Dimensions) {
        match self {
            Effect::Starfall(starfall) => starfall.regenerate(dimensions),
            Effect::Matrix(rain) => rain.regenerate(dimensions),
        }
    }

    /// Draw one frame and advance every entity.
    pub fn draw_frame(&mut self, surface: &mut dyn Surface, speed: Speed) {
        match self {
            Effect::Starfall(starfall) => starfall.draw_frame(surface, speed),
            Effect::Matrix(rain) => rain.draw_frame(surface, speed),
        }
    }

    /// Number of stars or columns.
    pub fn entity_count(&self) -> usize {
        match self {
            Effect::Starfall(starfall) => starfall.stars().len(),
            Effect::Matrix(rain) => rain.columns().len(),
        }
    }
}
