//! Animated backgrounds for skyfall.
//!
//! Two effects are available: a starfall, where small white stars drift down
//! and respawn at the top with a fresh identity, and a matrix rain, where one
//! random glyph per column is stamped onto a slowly fading surface every
//! frame. Both draw into a pixel-addressed [`Surface`]; [`CellSurface`] is the
//! terminal implementation that ratatui renders.
//!
//! A [`Stage`] holds the speed and background selection and keeps exactly
//! one [`Backdrop`] mounted. Each backdrop owns its entities, its surface and
//! its [`FrameDriver`]; dropping it cancels any pending frame.

mod animations;
mod backdrop;
mod chars;
mod color;
mod driver;
mod stage;
mod surface;

pub use animations::{Effect, MatrixRain, Star, Starfall, matrix, starfall};
pub use backdrop::{Backdrop, SurfaceManager};
pub use color::Rgb;
pub use driver::{FrameClock, FrameDriver, FrameHandle, FrameStatus};
pub use stage::Stage;
pub use surface::{CellSurface, Paint, Surface};
