//! Closed Catmull-Rom splines constrained to a sphere.
//!
//! Control points are stored pre-scaled to the working radius
//! ([`SplineParams::height`]); every curve point is emitted as a unit
//! direction multiplied by that radius. The curve is rebuilt from scratch
//! whenever a control point changes.

mod edit;
mod tessellate;

pub use edit::{Click, ClickButton, EditOutcome, Selection};
pub use tessellate::{MAX_DEPTH, MIN_CHORD_LENGTH};

use tracing::debug;

use crate::error::{GeometryError, Result, SplineError};
use crate::math::{point_on_sphere, Vector3, TOLERANCE};

/// Fewest control points a spline may have.
pub const MIN_CONTROL_POINTS: usize = 3;

/// Most control points a spline may have.
pub const MAX_CONTROL_POINTS: usize = 100;

/// Parameters controlling spline placement and tessellation quality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineParams {
    height: f64,
    angle_epsilon: f64,
}

impl SplineParams {
    /// Creates spline parameters.
    ///
    /// # Arguments
    ///
    /// * `height` - Radius of the sphere the spline lives on
    /// * `angle_epsilon` - Chord angle (radians) below which a patch is flat enough
    ///
    /// # Errors
    ///
    /// Returns an error if either value is non-positive or not finite.
    pub fn new(height: f64, angle_epsilon: f64) -> Result<Self> {
        check_positive("height", height)?;
        check_positive("angle_epsilon", angle_epsilon)?;
        Ok(Self {
            height,
            angle_epsilon,
        })
    }

    /// Returns the working radius.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the smoothness threshold in radians.
    #[must_use]
    pub fn angle_epsilon(&self) -> f64 {
        self.angle_epsilon
    }
}

impl Default for SplineParams {
    fn default() -> Self {
        Self {
            height: 1.0,
            angle_epsilon: 1e-2,
        }
    }
}

fn check_positive(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::NonPositive { parameter, value }.into())
    }
}

/// An editable closed spline on a sphere.
#[derive(Debug, Clone)]
pub struct Spline {
    control_points: Vec<Vector3>,
    curve_points: Vec<Vector3>,
    selection: Selection,
    params: SplineParams,
}

impl Spline {
    /// Creates a spline from control point directions and builds its curve.
    ///
    /// Each input is normalized and scaled to the working radius once; the
    /// input length carries no meaning.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than [`MIN_CONTROL_POINTS`] or more than
    /// [`MAX_CONTROL_POINTS`] points are given, or if any point is zero-length.
    pub fn new(control_points: &[Vector3], params: SplineParams) -> Result<Self> {
        let count = control_points.len();
        if count < MIN_CONTROL_POINTS {
            return Err(SplineError::TooFewControlPoints {
                count,
                min: MIN_CONTROL_POINTS,
            }
            .into());
        }
        if count > MAX_CONTROL_POINTS {
            return Err(SplineError::TooManyControlPoints {
                count,
                max: MAX_CONTROL_POINTS,
            }
            .into());
        }

        let control_points = control_points
            .iter()
            .enumerate()
            .map(|(index, p)| {
                p.try_normalize(TOLERANCE)
                    .map(|dir| dir * params.height)
                    .ok_or(SplineError::DegenerateControlPoint { index })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut spline = Self {
            control_points,
            curve_points: Vec::new(),
            selection: Selection::Idle,
            params,
        };
        spline.rebuild();
        Ok(spline)
    }

    /// Creates a spline of `count` points evenly spaced in longitude at
    /// `latitude` (radians), starting at longitude zero.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is outside the allowed control point range.
    pub fn latitude_ring(latitude: f64, count: usize, params: SplineParams) -> Result<Self> {
        #[allow(clippy::cast_precision_loss)]
        let step = std::f64::consts::TAU / count.max(1) as f64;
        #[allow(clippy::cast_precision_loss)]
        let points: Vec<Vector3> = (0..count)
            .map(|i| point_on_sphere(latitude, step * i as f64))
            .collect();
        Self::new(&points, params)
    }

    /// Returns the control points, scaled to the working radius.
    #[must_use]
    pub fn control_points(&self) -> &[Vector3] {
        &self.control_points
    }

    /// Returns the tessellated curve. The last point repeats the first.
    #[must_use]
    pub fn curve_points(&self) -> &[Vector3] {
        &self.curve_points
    }

    /// Returns the control points as `f32` triples, ready for vertex upload.
    #[must_use]
    pub fn control_vertices(&self) -> Vec<[f32; 3]> {
        to_vertices(&self.control_points)
    }

    /// Returns the curve points as `f32` triples, ready for vertex upload.
    #[must_use]
    pub fn curve_vertices(&self) -> Vec<[f32; 3]> {
        to_vertices(&self.curve_points)
    }

    /// Returns the spline parameters.
    #[must_use]
    pub fn params(&self) -> &SplineParams {
        &self.params
    }

    /// Returns the current selection state.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Returns the selected control point index, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        match self.selection {
            Selection::Idle => None,
            Selection::PointSelected(index) => Some(index),
        }
    }

    /// Returns whether a control point is selected.
    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.selected().is_some()
    }

    /// Drops the current selection. Nothing else changes.
    pub fn deselect(&mut self) {
        self.selection = Selection::Idle;
    }

    /// Regenerates the curve points from the current control points.
    ///
    /// The curve buffer is cleared and refilled, keeping its allocation.
    pub fn rebuild(&mut self) {
        self.curve_points.clear();
        tessellate::build_curve(&self.control_points, &self.params, &mut self.curve_points);
        debug!(
            control_points = self.control_points.len(),
            curve_points = self.curve_points.len(),
            "spline rebuilt"
        );
    }
}

#[allow(clippy::cast_possible_truncation)]
fn to_vertices(points: &[Vector3]) -> Vec<[f32; 3]> {
    points
        .iter()
        .map(|p| [p.x as f32, p.y as f32, p.z as f32])
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_3;

    #[allow(clippy::cast_precision_loss)]
    fn ring_points(latitude: f64, count: usize) -> Vec<Vector3> {
        (0..count)
            .map(|i| point_on_sphere(latitude, std::f64::consts::TAU * i as f64 / count as f64))
            .collect()
    }

    #[test]
    fn too_few_control_points_fails() {
        let err = Spline::new(&ring_points(0.5, 2), SplineParams::default()).unwrap_err();
        assert!(matches!(
            err,
            crate::AuroraError::Spline(SplineError::TooFewControlPoints { count: 2, min: 3 })
        ));
    }

    #[test]
    fn too_many_control_points_fails() {
        let result = Spline::new(&ring_points(0.5, MAX_CONTROL_POINTS + 1), SplineParams::default());
        assert!(result.is_err());
    }

    #[test]
    fn zero_length_control_point_fails() {
        let mut points = ring_points(0.5, 4);
        points[2] = Vector3::zeros();
        let err = Spline::new(&points, SplineParams::default()).unwrap_err();
        assert!(matches!(
            err,
            crate::AuroraError::Spline(SplineError::DegenerateControlPoint { index: 2 })
        ));
    }

    #[test]
    fn invalid_params_fail() {
        assert!(SplineParams::new(0.0, 1e-2).is_err());
        assert!(SplineParams::new(1.0, -1.0).is_err());
        assert!(SplineParams::new(f64::NAN, 1e-2).is_err());
        assert!(SplineParams::new(1.02, 1e-3).is_ok());
    }

    #[test]
    fn every_valid_count_builds_a_closed_curve() {
        for count in MIN_CONTROL_POINTS..=MAX_CONTROL_POINTS {
            let spline = Spline::latitude_ring(1.1, count, SplineParams::default()).unwrap();
            let curve = spline.curve_points();
            assert!(curve.len() > count, "count={count}");
            assert_eq!(curve.first(), curve.last(), "count={count}");
        }
    }

    #[test]
    fn control_points_scaled_to_height_once() {
        let params = SplineParams::new(2.5, 1e-2).unwrap();
        let points: Vec<Vector3> = ring_points(FRAC_PI_3, 5).iter().map(|p| p * 7.0).collect();
        let spline = Spline::new(&points, params).unwrap();
        for p in spline.control_points() {
            assert_relative_eq!(p.norm(), 2.5, epsilon = 1e-12);
        }
        for p in spline.curve_points() {
            assert_relative_eq!(p.norm(), 2.5, epsilon = 1e-9);
        }
    }

    #[test]
    fn curve_passes_through_control_points() {
        let spline = Spline::latitude_ring(FRAC_PI_3, 8, SplineParams::default()).unwrap();
        for cp in spline.control_points() {
            let closest = spline
                .curve_points()
                .iter()
                .map(|q| (q - cp).norm())
                .fold(f64::INFINITY, f64::min);
            assert!(closest < 1e-12, "closest={closest}");
        }
    }

    #[test]
    fn rebuild_is_idempotent() {
        let mut spline = Spline::latitude_ring(1.2, 11, SplineParams::default()).unwrap();
        let before = spline.curve_points().to_vec();
        spline.rebuild();
        assert_eq!(spline.curve_points(), before.as_slice());
        spline.rebuild();
        assert_eq!(spline.curve_points(), before.as_slice());
    }

    #[test]
    fn latitude_ring_stays_on_its_circle() {
        let spline = Spline::latitude_ring(FRAC_PI_3, 8, SplineParams::default()).unwrap();
        for p in spline.curve_points() {
            assert_relative_eq!(p.norm(), 1.0, epsilon = 1e-9);
            let latitude = p.y.asin().to_degrees();
            // Great-circle blends between ring points dip off the latitude
            // circle by about 0.21 degrees at most.
            assert!((latitude - 60.0).abs() < 0.25, "latitude={latitude}");
        }
    }

    #[test]
    fn lower_angle_epsilon_yields_more_points() {
        let coarse =
            Spline::latitude_ring(FRAC_PI_3, 8, SplineParams::new(1.0, 1e-1).unwrap()).unwrap();
        let fine =
            Spline::latitude_ring(FRAC_PI_3, 8, SplineParams::new(1.0, 1e-3).unwrap()).unwrap();
        assert!(fine.curve_points().len() > coarse.curve_points().len());
    }

    #[test]
    fn vertices_mirror_points() {
        let spline = Spline::latitude_ring(0.9, 6, SplineParams::default()).unwrap();
        let vertices = spline.curve_vertices();
        assert_eq!(vertices.len(), spline.curve_points().len());
        assert_eq!(spline.control_vertices().len(), 6);
        #[allow(clippy::cast_possible_truncation)]
        let first = spline.curve_points()[0].map(|c| c as f32);
        assert_eq!(vertices[0], [first.x, first.y, first.z]);
    }

    #[test]
    fn deselect_resets_selection() {
        let mut spline = Spline::latitude_ring(0.9, 6, SplineParams::default()).unwrap();
        spline.selection = Selection::PointSelected(3);
        assert!(spline.has_selection());
        let before = spline.control_points().to_vec();
        spline.deselect();
        assert_eq!(spline.selection(), Selection::Idle);
        assert_eq!(spline.control_points(), before.as_slice());
    }
}
