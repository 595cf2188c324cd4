use super::Point2;

/// Returns the perpendicular distance from `p` to the line through `a` and
/// `b`, or `None` when the foot of the perpendicular falls outside the
/// segment `a`–`b`.
///
/// A point exactly above an endpoint still counts as between the two ends.
/// A zero-length segment yields the distance to `a`.
#[must_use]
pub fn point_to_segment_perpendicular(p: &Point2, a: &Point2, b: &Point2) -> Option<f64> {
    let ab = b - a;
    if (p - a).dot(&ab) < 0.0 || (p - b).dot(&(a - b)) < 0.0 {
        return None;
    }

    let len = ab.norm();
    if len < 1e-20 {
        // Degenerate segment (zero length).
        return Some((p - a).norm());
    }

    // |cross(ab, ap)| / |ab|
    let ap = p - a;
    Some((ab.x * ap.y - ab.y * ap.x).abs() / len)
}

/// Returns the minimum distance from `p` to the segment `a`–`b`, clamping to
/// the endpoints.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();

    if len_sq < 1e-20 {
        return (p - a).norm();
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    // ── point_to_segment_perpendicular tests ──

    #[test]
    fn perpendicular_inside_segment() {
        let d = point_to_segment_perpendicular(&p(1.0, 1.0), &p(0.0, 0.0), &p(2.0, 0.0)).unwrap();
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn perpendicular_beyond_end_is_none() {
        assert!(point_to_segment_perpendicular(&p(3.0, 1.0), &p(0.0, 0.0), &p(2.0, 0.0)).is_none());
        assert!(point_to_segment_perpendicular(&p(-0.5, 1.0), &p(0.0, 0.0), &p(2.0, 0.0)).is_none());
    }

    #[test]
    fn perpendicular_above_endpoint_counts() {
        let d = point_to_segment_perpendicular(&p(2.0, -3.0), &p(0.0, 0.0), &p(2.0, 0.0)).unwrap();
        assert!((d - 3.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn perpendicular_diagonal_segment() {
        // Distance from origin to the line x + y = 2 is sqrt(2).
        let d = point_to_segment_perpendicular(&p(0.0, 0.0), &p(2.0, 0.0), &p(0.0, 2.0)).unwrap();
        assert!((d - 2.0_f64.sqrt()).abs() < TOL, "d={d}");
    }

    #[test]
    fn perpendicular_degenerate_segment() {
        let d = point_to_segment_perpendicular(&p(3.0, 4.0), &p(0.0, 0.0), &p(0.0, 0.0)).unwrap();
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }

    // ── point_to_segment_dist tests ──

    #[test]
    fn segment_dist_endpoint_closest() {
        let d = point_to_segment_dist(&p(-1.0, 0.0), &p(0.0, 0.0), &p(2.0, 0.0));
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_dist_on_segment() {
        let d = point_to_segment_dist(&p(1.0, 0.0), &p(0.0, 0.0), &p(2.0, 0.0));
        assert!(d.abs() < TOL, "d={d}");
    }
}
