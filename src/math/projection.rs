use nalgebra::Vector4;

use super::{Matrix4, Point2, Vector3};

/// Projects an object-space point to normalized device coordinates with
/// `object_to_ndc`, including the perspective divide.
///
/// Returns `None` when the clip-space `w` is not positive (the point is at or
/// behind the eye plane).
#[must_use]
pub fn project_to_ndc(object_to_ndc: &Matrix4, point: &Vector3) -> Option<Point2> {
    let clip = object_to_ndc * Vector4::new(point.x, point.y, point.z, 1.0);
    if clip.w <= 0.0 {
        return None;
    }
    Some(Point2::new(clip.x / clip.w, clip.y / clip.w))
}
