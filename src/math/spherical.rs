use super::{Vector3, TOLERANCE};

/// Returns the point halfway (in angle) along the great-circle arc between
/// `a` and `b`.
///
/// With `alpha` the angle between the two directions the result is
/// `(a + b) * sin(alpha / 2) / sin(alpha)`, which has unit length for unit
/// inputs. The result is not re-normalized: inputs of other lengths keep
/// their blended magnitude, and callers normalize where a unit vector is
/// required.
///
/// Coincident and antipodal directions have no well-defined arc; both fall
/// back to the linear average.
#[must_use]
pub fn spherical_midpoint(a: &Vector3, b: &Vector3) -> Vector3 {
    let sum = a + b;
    let (Some(na), Some(nb)) = (a.try_normalize(TOLERANCE), b.try_normalize(TOLERANCE)) else {
        return sum * 0.5;
    };

    let alpha = na.dot(&nb).clamp(-1.0, 1.0).acos();
    let sin_alpha = alpha.sin();
    if sin_alpha.abs() < TOLERANCE {
        return sum * 0.5;
    }
    sum * ((0.5 * alpha).sin() / sin_alpha)
}

/// Unit direction at `latitude` / `longitude` (radians) with the north pole
/// on +Y and longitude zero on +X.
#[must_use]
pub fn point_on_sphere(latitude: f64, longitude: f64) -> Vector3 {
    let (sin_lat, cos_lat) = latitude.sin_cos();
    let (sin_lon, cos_lon) = longitude.sin_cos();
    Vector3::new(cos_lon * cos_lat, sin_lat, sin_lon * cos_lat)
}

/// Angle between two vectors in radians, `0` if either is degenerate.
#[must_use]
pub fn angle_between(a: &Vector3, b: &Vector3) -> f64 {
    match (a.try_normalize(TOLERANCE), b.try_normalize(TOLERANCE)) {
        (Some(na), Some(nb)) => na.dot(&nb).clamp(-1.0, 1.0).acos(),
        _ => 0.0,
    }
}
