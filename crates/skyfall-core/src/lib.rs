//! Core types shared by the skyfall crates.
//!
//! Everything here is plain data: the pixel size of the drawing area, how
//! pixels map onto terminal cells, the animation speed and the selected
//! background effect.

mod background;
mod dimensions;
mod speed;

pub use background::BackgroundKind;
pub use dimensions::{CellMetrics, Dimensions};
pub use speed::Speed;
