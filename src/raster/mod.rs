//! CPU stroking of projected curve polylines into occupancy rasters, the
//! input expected by [`DistanceField`](crate::DistanceField).

mod stroke_style;

pub use stroke_style::StrokeStyle;

use tracing::debug;

use crate::error::{RasterError, Result};
use crate::math::distance_2d::point_to_segment_dist;
use crate::math::{project_to_ndc, Matrix4, Point2, Vector3};

/// Default value written for covered pixels.
pub const INK: u8 = 255;

/// A single-channel, row-major raster that polylines are stroked into.
#[derive(Debug, Clone)]
pub struct PathRaster {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl PathRaster {
    /// Creates a blank raster.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RasterError::EmptyRaster { width, height }.into());
        }
        Ok(Self {
            width,
            height,
            pixels: vec![0; width * height],
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Mutable access, e.g. to run a distance field over the raster in place.
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    #[must_use]
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Resets every pixel to background.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Strokes the polyline through `points` after projecting each one with
    /// `object_to_ndc`.
    ///
    /// NDC `[-1, 1]` spans the raster with +Y pointing up. A pixel takes the
    /// style's ink when its centre lies within half the stroke width of a
    /// segment.
    /// Points that project behind the eye split the polyline.
    pub fn stroke_polyline(&mut self, points: &[Vector3], object_to_ndc: &Matrix4, style: &StrokeStyle) {
        let mut previous: Option<Point2> = None;
        let mut segments = 0_usize;
        for point in points {
            let Some(ndc) = project_to_ndc(object_to_ndc, point) else {
                previous = None;
                continue;
            };
            let current = self.ndc_to_pixel(&ndc);
            let start = previous.unwrap_or(current);
            self.stroke_segment(&start, &current, style);
            segments += 1;
            previous = Some(current);
        }
        debug!(points = points.len(), segments, "stroked polyline");
    }

    /// Continuous pixel position of an NDC point; pixel `(x, y)` covers
    /// `[x, x + 1) x [y, y + 1)`.
    #[allow(clippy::cast_precision_loss)]
    fn ndc_to_pixel(&self, ndc: &Point2) -> Point2 {
        Point2::new(
            (ndc.x + 1.0) * 0.5 * self.width as f64,
            (1.0 - ndc.y) * 0.5 * self.height as f64,
        )
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    fn stroke_segment(&mut self, a: &Point2, b: &Point2, style: &StrokeStyle) {
        let half_width = style.reach();
        let clamp_x = |v: f64| v.clamp(0.0, self.width as f64) as usize;
        let clamp_y = |v: f64| v.clamp(0.0, self.height as f64) as usize;
        let x_min = clamp_x((a.x.min(b.x) - half_width).floor());
        let x_max = clamp_x((a.x.max(b.x) + half_width).ceil());
        let y_min = clamp_y((a.y.min(b.y) - half_width).floor());
        let y_max = clamp_y((a.y.max(b.y) + half_width).ceil());

        for y in y_min..y_max {
            let row = &mut self.pixels[y * self.width..(y + 1) * self.width];
            for (x, pixel) in row.iter_mut().enumerate().take(x_max).skip(x_min) {
                let centre = Point2::new(x as f64 + 0.5, y as f64 + 0.5);
                if point_to_segment_dist(&centre, a, b) <= half_width {
                    *pixel = style.ink();
                }
            }
        }
    }
}

/// Strokes one polyline into a fresh `width` x `height` raster and returns
/// its pixels.
///
/// # Errors
///
/// Returns an error if either dimension is zero.
pub fn rasterize_path(
    points: &[Vector3],
    object_to_ndc: &Matrix4,
    width: usize,
    height: usize,
    style: &StrokeStyle,
) -> Result<Vec<u8>> {
    let mut raster = PathRaster::new(width, height)?;
    raster.stroke_polyline(points, object_to_ndc, style);
    Ok(raster.into_pixels())
}
