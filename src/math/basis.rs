use std::sync::LazyLock;

use nalgebra::Matrix3x4;

use super::{Matrix4, Vector3};

/// Cubic Bezier basis: maps control points `[b0, b1, b2, b3]` to the power
/// basis coefficients `[t^3, t^2, t, 1]`.
#[must_use]
pub fn bezier_basis() -> Matrix4 {
    Matrix4::new(
        -1.0, 3.0, -3.0, 1.0, //
        3.0, -6.0, 3.0, 0.0, //
        -3.0, 3.0, 0.0, 0.0, //
        1.0, 0.0, 0.0, 0.0,
    )
}

/// Closed-form inverse of [`bezier_basis`]: power basis coefficients back to
/// Bezier control points.
#[must_use]
pub fn bezier_basis_inverse() -> Matrix4 {
    let third = 1.0 / 3.0;
    Matrix4::new(
        0.0, 0.0, 0.0, 1.0, //
        0.0, 0.0, third, 1.0, //
        0.0, third, 2.0 * third, 1.0, //
        1.0, 1.0, 1.0, 1.0,
    )
}

/// Uniform Catmull-Rom basis (tension 0.5).
#[must_use]
pub fn catmull_rom_basis() -> Matrix4 {
    Matrix4::new(
        -0.5, 1.5, -1.5, 0.5, //
        1.0, -2.5, 2.0, -0.5, //
        -0.5, 0.0, 0.5, 0.0, //
        0.0, 1.0, 0.0, 0.0,
    )
}

/// Change of basis from four Catmull-Rom points to the four Bezier points
/// describing the same cubic segment, computed once.
///
/// Row `k` holds the weights of `p0..p3` in Bezier point `k`.
pub static CATMULL_ROM_TO_BEZIER: LazyLock<Matrix4> =
    LazyLock::new(|| bezier_basis_inverse() * catmull_rom_basis());

/// Converts a Catmull-Rom window `(p0, p1, p2, p3)` to Bezier control points.
///
/// Only the spatial coordinates take part; points are directions from the
/// sphere center, so no homogeneous translation is introduced.
#[must_use]
pub fn catmull_rom_to_bezier(window: [Vector3; 4]) -> [Vector3; 4] {
    let points = Matrix3x4::from_columns(&window);
    let bezier = points * CATMULL_ROM_TO_BEZIER.transpose();
    [
        bezier.column(0).into_owned(),
        bezier.column(1).into_owned(),
        bezier.column(2).into_owned(),
        bezier.column(3).into_owned(),
    ]
}
