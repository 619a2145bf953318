//! Animation speed multiplier.

use std::fmt;

/// Speed multiplier applied to every entity's per-frame motion.
///
/// Stored as whole tenths so stepping the slider never accumulates float
/// drift. Always within `[MIN, MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Speed {
    tenths: u8,
}

impl Speed {
    /// Slowest selectable speed.
    pub const MIN: Speed = Speed { tenths: 2 };
    /// Fastest selectable speed.
    pub const MAX: Speed = Speed { tenths: 40 };
    /// Slider step.
    pub const STEP: f32 = 0.1;

    /// Create a speed, clamping into range and snapping to the nearest step.
    pub fn new(value: f32) -> Self {
        if !value.is_finite() {
            return Self::default();
        }
        let tenths = (value * 10.0)
            .round()
            .clamp(f32::from(Self::MIN.tenths), f32::from(Self::MAX.tenths));
        Self {
            tenths: tenths as u8,
        }
    }

    /// Whether `value` lies inside the selectable range (before snapping).
    pub fn in_range(value: f32) -> bool {
        (Self::MIN.value()..=Self::MAX.value()).contains(&value)
    }

    /// The multiplier as a float.
    pub fn value(self) -> f32 {
        f32::from(self.tenths) / 10.0
    }

    /// One step faster, saturating at [`Speed::MAX`].
    pub fn faster(self) -> Self {
        Self {
            tenths: (self.tenths + 1).min(Self::MAX.tenths),
        }
    }

    /// One step slower, saturating at [`Speed::MIN`].
    pub fn slower(self) -> Self {
        Self {
            tenths: self.tenths.saturating_sub(1).max(Self::MIN.tenths),
        }
    }

    /// Position of this speed within the range, from 0.0 to 1.0.
    pub fn ratio(self) -> f64 {
        f64::from(self.tenths - Self::MIN.tenths)
            / f64::from(Self::MAX.tenths - Self::MIN.tenths)
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self { tenths: 10 }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}x", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_one() {
        assert_eq!(Speed::default().value(), 1.0);
        assert_eq!(Speed::default().to_string(), "1.0x");
    }

    #[test]
    fn test_new_clamps_and_snaps() {
        assert_eq!(Speed::new(0.0), Speed::MIN);
        assert_eq!(Speed::new(9.0), Speed::MAX);
        assert_eq!(Speed::new(1.26).to_string(), "1.3x");
        assert_eq!(Speed::new(f32::NAN), Speed::default());
    }

    #[test]
    fn test_step_saturates() {
        assert_eq!(Speed::MAX.faster(), Speed::MAX);
        assert_eq!(Speed::MIN.slower(), Speed::MIN);
        assert_eq!(Speed::default().faster().to_string(), "1.1x");
        assert_eq!(Speed::default().slower().to_string(), "0.9x");
    }

    #[test]
    fn test_many_steps_do_not_drift() {
        let mut speed = Speed::MIN;
        for _ in 0..38 {
            speed = speed.faster();
        }
        assert_eq!(speed, Speed::MAX);
        assert_eq!(speed.value(), 4.0);
    }

    #[test]
    fn test_ratio_bounds() {
        assert_eq!(Speed::MIN.ratio(), 0.0);
        assert_eq!(Speed::MAX.ratio(), 1.0);
    }

    #[test]
    fn test_in_range() {
        assert!(Speed::in_range(0.2));
        assert!(Speed::in_range(4.0));
        assert!(!Speed::in_range(0.1));
        assert!(!Speed::in_range(4.5));
    }
}
