//! Euclidean distance fields over occupancy rasters.
//!
//! Every cell of a padded grid tracks the offset to its nearest feature
//! pixel. Two raster passes (down, then up) spread those offsets: each
//! visits a row with a four-neighbour batched sweep followed by a
//! single-neighbour sweep in the opposite direction.

mod grid;
mod sweep;

pub use grid::Offset;

use tracing::debug;

use crate::error::{DistanceFieldError, Result};

/// Pixels at or above this intensity are features.
pub const OCCUPIED_THRESHOLD: u8 = 128;

/// Largest supported image side. Unreached cells drift from the
/// [`Offset::OUTSIDE`] sentinel by at most this much per axis.
pub const MAX_DIMENSION: usize = 16384;

/// Reusable generator for distance fields of one image size.
#[derive(Debug, Clone)]
pub struct DistanceField {
    grid: grid::Grid,
}

impl DistanceField {
    /// Allocates a generator for `width` x `height` images.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds
    /// [`MAX_DIMENSION`].
    pub fn new(width: usize, height: usize) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self {
            grid: grid::Grid::new(width, height),
        })
    }

    /// Image width this generator accepts.
    #[must_use]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Image height this generator accepts.
    #[must_use]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Reallocates the grid for a new image size. Same-sized calls keep the
    /// existing allocation.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds
    /// [`MAX_DIMENSION`].
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        check_dimensions(width, height)?;
        if (width, height) != (self.width(), self.height()) {
            self.grid = grid::Grid::new(width, height);
        }
        Ok(())
    }

    /// Replaces each byte of the row-major `image` with
    /// `255 - min(255, round(distance to nearest feature))`.
    ///
    /// Feature pixels become 255; pixels 255 or more away become 0.
    ///
    /// # Errors
    ///
    /// Returns an error if `image` does not hold exactly `width * height`
    /// bytes. The image is left untouched in that case.
    pub fn generate(&mut self, image: &mut [u8]) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        let expected = width * height;
        if image.len() != expected {
            return Err(DistanceFieldError::SizeMismatch {
                expected,
                actual: image.len(),
                width,
                height,
            }
            .into());
        }

        self.grid.seed(image, OCCUPIED_THRESHOLD);
        sweep::propagate(&mut self.grid);
        self.write_back(image);
        debug!(width, height, "distance field generated");
        Ok(())
    }

    /// Offset from pixel `(x, y)` to its nearest feature after the last
    /// [`generate`](Self::generate), or `None` outside the image.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn nearest_offset(&self, x: usize, y: usize) -> Option<Offset> {
        (x < self.width() && y < self.height()).then(|| self.grid.get(x as isize, y as isize))
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    fn write_back(&self, image: &mut [u8]) {
        for (y, row) in image.chunks_exact_mut(self.width()).enumerate() {
            for (x, pixel) in row.iter_mut().enumerate() {
                let dist = (self.grid.get(x as isize, y as isize).dist_sq() as f64)
                    .sqrt()
                    .round()
                    .clamp(0.0, 255.0);
                *pixel = 255 - dist as u8;
            }
        }
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(DistanceFieldError::EmptyGrid { width, height }.into());
    }
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(DistanceFieldError::TooLarge {
            width,
            height,
            max: MAX_DIMENSION,
        }
        .into());
    }
    Ok(())
}
