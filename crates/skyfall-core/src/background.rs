//! Background effect selector.

use serde::{Deserialize, Serialize};

/// Which animated background is mounted behind the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    /// Falling white stars.
    #[default]
    Starfall,
    /// Falling columns of katakana, latin letters and digits.
    Matrix,
}

impl BackgroundKind {
    /// Flip to the other background.
    pub fn toggle(self) -> Self {
        match self {
            BackgroundKind::Starfall => BackgroundKind::Matrix,
            BackgroundKind::Matrix => BackgroundKind::Starfall,
        }
    }

    /// Short name shown next to the toggle switch.
    pub fn label(self) -> &'static str {
        match self {
            BackgroundKind::Starfall => "Starfall",
            BackgroundKind::Matrix => "Matrix",
        }
    }

    /// Caption of the speed slider while this background is active.
    pub fn speed_caption(self) -> &'static str {
        match self {
            BackgroundKind::Starfall => "Starfall Speed",
            BackgroundKind::Matrix => "Matrix Code Speed",
        }
    }
}
