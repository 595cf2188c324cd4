use crate::error::{RasterError, Result};

use super::INK;

/// How a path is drawn into a [`PathRaster`](super::PathRaster): line width
/// in pixels and the intensity written under the line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    width: f64,
    ink: u8,
}

impl StrokeStyle {
    /// Full-intensity stroke of the given pixel width.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not positive and finite.
    pub fn new(width: f64) -> Result<Self> {
        if !(width.is_finite() && width > 0.0) {
            return Err(RasterError::InvalidStroke(format!(
                "line width {width} is not a positive pixel count"
            ))
            .into());
        }
        Ok(Self { width, ink: INK })
    }

    /// Same width, different intensity. Values below the distance field's
    /// occupancy threshold draw lines that do not count as features.
    #[must_use]
    pub fn with_ink(self, ink: u8) -> Self {
        Self { ink, ..self }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn ink(&self) -> u8 {
        self.ink
    }

    /// Distance from the centre line, in pixels, that still gets inked.
    #[must_use]
    pub fn reach(&self) -> f64 {
        self.width * 0.5
    }
}

impl Default for StrokeStyle {
    /// The ten-pixel line aurora paths are drawn with.
    fn default() -> Self {
        Self {
            width: 10.0,
            ink: INK,
        }
    }
}
