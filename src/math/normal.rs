use crate::error::GeometryError;

use super::{Point3, Vector3, TOLERANCE};

/// Unit normal of the plane through `v0`, `v1`, `v2`.
///
/// Computed as `normalize((v1 - v0) × (v2 - v0))`, so the sign follows the
/// winding of the three points.
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`] if the points are collinear.
pub fn face_normal(v0: &Point3, v1: &Point3, v2: &Point3) -> Result<Vector3, GeometryError> {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let normal = edge1.cross(&edge2);

    let len = normal.norm();
    if len < TOLERANCE {
        return Err(GeometryError::Degenerate(
            "face starts with collinear vertices".into(),
        ));
    }
    Ok(normal / len)
}

/// Arithmetic mean of a set of points, or `None` for an empty set.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn centroid<'a, I>(points: I) -> Option<Point3>
where
    I: IntoIterator<Item = &'a Point3>,
{
    let mut sum = Vector3::zeros();
    let mut count = 0usize;
    for p in points {
        sum += p.coords;
        count += 1;
    }
    if count == 0 {
        return None;
    }
    Some(Point3::from(sum / count as f64))
}

/// Signed distance from `point` to the plane through `origin` with unit `normal`.
#[must_use]
pub fn distance_to_plane(point: &Point3, origin: &Point3, normal: &Vector3) -> f64 {
    (point - origin).dot(normal)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    // ── face_normal ──

    #[test]
    fn counter_clockwise_triangle_faces_up() {
        let n = face_normal(&p(0.0, 0.0, 0.0), &p(1.0, 0.0, 0.0), &p(0.0, 1.0, 0.0)).unwrap();
        assert_relative_eq!(n, Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn reversed_winding_flips_sign() {
        let n = face_normal(&p(0.0, 0.0, 0.0), &p(0.0, 1.0, 0.0), &p(1.0, 0.0, 0.0)).unwrap();
        assert_relative_eq!(n, -Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn tetrahedron_first_face() {
        // edge1 = (-2, -2, 0), edge2 = (0, -2, 2), cross = (-4, 4, 4)
        let n = face_normal(&p(1.0, 1.0, -1.0), &p(-1.0, -1.0, -1.0), &p(1.0, -1.0, 1.0)).unwrap();
        let s = 1.0 / 3f64.sqrt();
        assert_relative_eq!(n, Vector3::new(-s, s, s), epsilon = 1e-12);
    }

    #[test]
    fn normal_is_unit_length() {
        let n = face_normal(&p(0.0, 0.0, 0.0), &p(10.0, 0.0, 3.0), &p(-4.0, 7.0, 1.0)).unwrap();
        assert!((n.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn collinear_points_fail() {
        let result = face_normal(&p(0.0, 0.0, 0.0), &p(1.0, 1.0, 1.0), &p(2.0, 2.0, 2.0));
        assert!(matches!(result, Err(GeometryError::Degenerate(_))));
    }

    #[test]
    fn coincident_points_fail() {
        let a = p(1.0, 2.0, 3.0);
        assert!(face_normal(&a, &a, &p(0.0, 0.0, 0.0)).is_err());
    }

    // ── centroid ──

    #[test]
    fn centroid_of_square() {
        let pts = [
            p(0.0, 0.0, 0.0),
            p(2.0, 0.0, 0.0),
            p(2.0, 2.0, 0.0),
            p(0.0, 2.0, 0.0),
        ];
        let c = centroid(&pts).unwrap();
        assert_relative_eq!(c, p(1.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn centroid_of_nothing() {
        assert!(centroid(std::iter::empty::<&Point3>()).is_none());
    }

    // ── distance_to_plane ──

    #[test]
    fn signed_distance() {
        let origin = p(0.0, 0.0, 1.0);
        assert!((distance_to_plane(&p(5.0, 5.0, 3.0), &origin, &Vector3::z()) - 2.0).abs() < 1e-12);
        assert!((distance_to_plane(&p(0.0, 0.0, 0.0), &origin, &Vector3::z()) + 1.0).abs() < 1e-12);
    }
}
