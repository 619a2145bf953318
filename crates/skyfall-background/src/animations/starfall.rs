//! Starfall animation (stateful).

use std::ops::Range;

use rand::{Rng, rngs::StdRng};
use skyfall_core::{Dimensions, Speed};

use crate::color::Rgb;
use crate::surface::{Paint, Surface};

/// Number of stars on screen, independent of the surface size.
pub const STAR_COUNT: usize = 120;

/// Radius of a star in pixels.
pub const RADIUS_RANGE: Range<f32> = 0.5..1.7;

/// Pixels a star falls per frame at speed 1.0.
pub const FALL_SPEED_RANGE: Range<f32> = 0.3..1.0;

const STAR_PAINT: Paint = Paint {
    color: Rgb::WHITE,
    alpha: 1.0,
    glow: 8.0,
};

/// A single falling star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub vertical_speed: f32,
}

impl Star {
    /// A star anywhere on a surface of the given size.
    fn scattered(rng: &mut StdRng, dimensions: Dimensions) -> Self {
        Self {
            x: sample_extent(rng, dimensions.width),
            y: sample_extent(rng, dimensions.height),
            radius: rng.random_range(RADIUS_RANGE),
            vertical_speed: rng.random_range(FALL_SPEED_RANGE),
        }
    }

    /// Re-enter at the top with a completely new identity.
    fn respawn(&mut self, rng: &mut StdRng, width: u32) {
        self.x = sample_extent(rng, width);
        self.y = 0.0;
        self.radius = rng.random_range(RADIUS_RANGE);
        self.vertical_speed = rng.random_range(FALL_SPEED_RANGE);
    }
}

/// Uniform position in `[0, extent)`; zero when the extent is empty.
fn sample_extent(rng: &mut StdRng, extent: u32) -> f32 {
    if extent == 0 {
        0.0
    } else {
        rng.random_range(0.0..extent as f32)
    }
}

/// Falling stars.
#[derive(Debug)]
pub struct Starfall {
    stars: Vec<Star>,
    dimensions: Dimensions,
    rng: StdRng,
}

impl Starfall {
    /// An empty starfall; stars appear on the first [`Starfall::regenerate`].
    pub fn new(rng: StdRng) -> Self {
        Self {
            stars: Vec::new(),
            dimensions: Dimensions::default(),
            rng,
        }
    }

    /// Replace every star with a freshly scattered one.
    pub fn regenerate(&mut self, dimensions: Dimensions) {
        self.dimensions = dimensions;
        self.stars = (0..STAR_COUNT)
            .map(|_| Star::scattered(&mut self.rng, dimensions))
            .collect();
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Clear the surface, draw every star and move it down.
    pub fn draw_frame(&mut self, surface: &mut dyn Surface, speed: Speed) {
        surface.clear();

        let height = self.dimensions.height as f32;
        let width = self.dimensions.width;
        for star in &mut self.stars {
            surface.fill_circle(star.x, star.y, star.radius, STAR_PAINT);

            star.y += star.vertical_speed * speed.value();
            if star.y > height {
                star.respawn(&mut self.rng, width);
            }
        }
    }
}
