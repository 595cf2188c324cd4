use tracing::trace;

use crate::math::{angle_between, catmull_rom_to_bezier, spherical_midpoint, Vector3, TOLERANCE};

use super::SplineParams;

/// Recursion depth at which a patch is emitted regardless of its shape.
/// Bounds each Catmull-Rom window to `2^(MAX_DEPTH - 1)` curve points.
pub const MAX_DEPTH: usize = 10;

/// Patches whose end points are closer than this are emitted as-is.
pub const MIN_CHORD_LENGTH: f64 = 1e-2;

/// Appends the tessellated closed curve for `control_points` to `out`.
///
/// Every window of four consecutive points (wrapping past the end so the
/// last windows reach back to point 0) becomes one Bezier patch, starting at
/// the window's second point. A copy of the first curve point closes the
/// polyline.
pub(super) fn build_curve(control_points: &[Vector3], params: &SplineParams, out: &mut Vec<Vector3>) {
    let directions: Vec<Vector3> = control_points
        .iter()
        .map(|p| p.try_normalize(TOLERANCE).unwrap_or(*p))
        .collect();
    let n = directions.len();
    if n == 0 {
        return;
    }

    let tessellator = Tessellator {
        height: params.height(),
        angle_epsilon: params.angle_epsilon(),
    };
    for i in 0..n {
        let window = [
            directions[i],
            directions[(i + 1) % n],
            directions[(i + 2) % n],
            directions[(i + 3) % n],
        ];
        let start = out.len();
        tessellator.tessellate(catmull_rom_to_bezier(window), 0, out);
        trace!(window = i, points = out.len() - start, "tessellated window");
    }

    if let Some(&first) = out.first() {
        out.push(first);
    }
}

/// Immutable settings shared by one recursive tessellation.
struct Tessellator {
    height: f64,
    angle_epsilon: f64,
}

impl Tessellator {
    /// Subdivides the patch along great circles until it is flat, short, or
    /// deep enough, emitting the first point of every leaf in curve order.
    fn tessellate(&self, [p0, p1, p2, p3]: [Vector3; 4], depth: usize, out: &mut Vec<Vector3>) {
        let depth = depth + 1;
        if depth == MAX_DEPTH
            || (p0 - p3).norm() < MIN_CHORD_LENGTH
            || self.is_smooth(&p0, &p1, &p2, &p3)
        {
            out.push(p0.try_normalize(TOLERANCE).unwrap_or(p0) * self.height);
            return;
        }

        // de Casteljau at t = 1/2 with spherical blends in place of lerps.
        let p10 = spherical_midpoint(&p0, &p1);
        let p11 = spherical_midpoint(&p1, &p2);
        let p12 = spherical_midpoint(&p2, &p3);
        let p20 = spherical_midpoint(&p10, &p11);
        let p21 = spherical_midpoint(&p11, &p12);
        let p30 = spherical_midpoint(&p20, &p21);

        self.tessellate([p0, p10, p20, p30], depth, out);
        self.tessellate([p30, p21, p12, p3], depth, out);
    }

    /// Both turns of the control polygon are below the angle threshold.
    /// A repeated control point has no chord direction and never counts as smooth.
    fn is_smooth(&self, p0: &Vector3, p1: &Vector3, p2: &Vector3, p3: &Vector3) -> bool {
        let chords = [p0 - p1, p1 - p2, p2 - p3];
        if chords.iter().any(|c| c.norm() <= TOLERANCE) {
            return false;
        }
        angle_between(&chords[0], &chords[1]) < self.angle_epsilon
            && angle_between(&chords[1], &chords[2]) < self.angle_epsilon
    }
}
