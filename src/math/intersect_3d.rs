use super::{Vector3, TOLERANCE};

/// Intersects the ray `origin + t * direction` (`t >= 0`) with a sphere of
/// `radius` centred at the origin.
///
/// Returns the nearest intersection in front of the ray origin, or `None`
/// when the ray misses the sphere or `direction` is zero-length. A ray
/// starting inside the sphere hits the far side.
#[must_use]
pub fn ray_sphere_intersect(origin: &Vector3, direction: &Vector3, radius: f64) -> Option<Vector3> {
    let dir = direction.try_normalize(TOLERANCE)?;

    // |o + t d|^2 = r^2  =>  t^2 + 2 (o.d) t + (o.o - r^2) = 0
    let half_b = origin.dot(&dir);
    let c = origin.norm_squared() - radius * radius;
    let discriminant = half_b * half_b - c;
    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let near = -half_b - root;
    let far = -half_b + root;
    let t = if near >= 0.0 {
        near
    } else if far >= 0.0 {
        far
    } else {
        return None;
    };
    Some(origin + dir * t)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    #[test]
    fn ray_hits_front_of_sphere() {
        let hit = ray_sphere_intersect(&v(0.0, 0.0, 30.0), &v(0.0, 0.0, -1.0), 10.0).unwrap();
        assert_relative_eq!(hit, v(0.0, 0.0, 10.0), epsilon = 1e-12);
    }

    #[test]
    fn unnormalized_direction_is_accepted() {
        let hit = ray_sphere_intersect(&v(0.0, 0.0, 30.0), &v(0.0, 0.0, -7.0), 10.0).unwrap();
        assert_relative_eq!(hit, v(0.0, 0.0, 10.0), epsilon = 1e-12);
    }

    #[test]
    fn ray_misses_sphere() {
        assert!(ray_sphere_intersect(&v(0.0, 20.0, 30.0), &v(0.0, 0.0, -1.0), 10.0).is_none());
    }

    #[test]
    fn ray_pointing_away_misses() {
        assert!(ray_sphere_intersect(&v(0.0, 0.0, 30.0), &v(0.0, 0.0, 1.0), 10.0).is_none());
    }

    #[test]
    fn ray_from_inside_hits_far_side() {
        let hit = ray_sphere_intersect(&Vector3::zeros(), &v(1.0, 0.0, 0.0), 2.0).unwrap();
        assert_relative_eq!(hit, v(2.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn hit_lies_on_sphere() {
        let hit = ray_sphere_intersect(&v(3.0, 4.0, 30.0), &v(-0.1, -0.1, -1.0), 10.0).unwrap();
        assert_relative_eq!(hit.norm(), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_direction_is_none() {
        assert!(ray_sphere_intersect(&v(0.0, 0.0, 30.0), &Vector3::zeros(), 10.0).is_none());
    }
}
