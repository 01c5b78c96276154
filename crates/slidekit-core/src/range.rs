//! Mapping between track offsets and domain values.
//!
//! Track offsets are normalized ratios: `0.0` is the start of the track and
//! `1.0` its end. A [`Domain`] converts them to values in `[min, max]`,
//! flipping the direction when `reverse` is set.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// The numeric range a slider represents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    min: f64,
    max: f64,
    reverse: bool,
}

impl Domain {
    /// Create a domain, rejecting `min >= max` and non-finite bounds.
    pub fn new(min: f64, max: f64) -> Result<Self, ConfigError> {
        if !min.is_finite() {
            return Err(ConfigError::NonFiniteBound { bound: "min" });
        }
        if !max.is_finite() {
            return Err(ConfigError::NonFiniteBound { bound: "max" });
        }
        if min >= max {
            return Err(ConfigError::InvalidDomain { min, max });
        }
        Ok(Self {
            min,
            max,
            reverse: false,
        })
    }

    /// Flip the track direction.
    #[must_use]
    pub const fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Domain minimum.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Domain maximum.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Whether the track runs from max to min.
    #[must_use]
    pub const fn is_reversed(&self) -> bool {
        self.reverse
    }

    /// Width of the domain. Always positive.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Clamp a value into `[min, max]`. NaN becomes `min`.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }

    /// Whether `value` lies inside `[min, max]`.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Convert a track offset ratio into a domain value.
    ///
    /// Ratios outside `[0, 1]` are clamped; a pointer dragged past the end of
    /// the track is normal input, not an error.
    #[must_use]
    pub fn to_value(&self, offset_ratio: f64) -> f64 {
        let ratio = clamp_ratio(offset_ratio);
        let ratio = if self.reverse { 1.0 - ratio } else { ratio };
        self.clamp(ratio.mul_add(self.span(), self.min))
    }

    /// Convert a domain value into a track offset ratio in `[0, 1]`.
    #[must_use]
    pub fn to_offset_ratio(&self, value: f64) -> f64 {
        let ratio = (self.clamp(value) - self.min) / self.span();
        if self.reverse {
            1.0 - ratio
        } else {
            ratio
        }
    }
}

/// Clamp a ratio to `[0, 1]`, mapping NaN to `0`.
#[must_use]
pub fn clamp_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() {
        tracing::debug!("NaN track ratio replaced with 0");
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    }
}

/// Track orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// Track runs left to right
    #[default]
    Horizontal,
    /// Track runs bottom to top
    Vertical,
}

impl Orientation {
    /// Orientation from the `vertical` configuration flag.
    #[must_use]
    pub const fn from_vertical(vertical: bool) -> Self {
        if vertical {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }

    /// Convert a pixel offset from the track's leading edge (left, or top)
    /// into an offset ratio. Vertical tracks put `max` at the top, so the
    /// ratio is inverted.
    #[must_use]
    pub fn ratio_from_track(self, offset: f64, length: f64) -> f64 {
        if length <= 0.0 || !length.is_finite() {
            return 0.0;
        }
        let ratio = clamp_ratio(offset / length);
        match self {
            Self::Horizontal => ratio,
            Self::Vertical => 1.0 - ratio,
        }
    }
}
