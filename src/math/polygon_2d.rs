use super::{Point3, Vector3, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Computes the signed area of a polygon in the XY plane (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. Callers can use
/// the sign to decide which fixed offset direction points away from a
/// polygon's interior for a given winding.
#[must_use]
pub fn signed_area_2d(points: &[Point3]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Computes the normalized XY-plane direction from point `a` to point `b`.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if `a` and `b` coincide in the plane.
pub fn segment_direction(a: &Point3, b: &Point3) -> Result<Vector3> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len = dx.hypot(dy);
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(Vector3::new(dx / len, dy / len, 0.0))
}

/// Returns the left-pointing normal of a direction vector in the XY plane.
///
/// For direction `(dx, dy)` this is `(-dy, dx)`: a 90° counter-clockwise
/// rotation.
#[must_use]
pub fn left_normal(dir: &Vector3) -> Vector3 {
    Vector3::new(-dir.y, dir.x, 0.0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn signed_area_ccw_square() {
        let pts = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(10.0, 10.0, 0.0),
            Point3::new(0.0, 10.0, 0.0),
        ];
        assert!((signed_area_2d(&pts) - 100.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_triangle() {
        let pts = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ];
        assert!((signed_area_2d(&pts) + 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate_is_zero() {
        assert!(signed_area_2d(&[]).abs() < TOLERANCE);
        let two = [Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 0.0)];
        assert!(signed_area_2d(&two).abs() < TOLERANCE);
    }

    #[test]
    fn direction_is_unit_length() {
        let a = Point3::new(1.0, 1.0, 0.0);
        let b = Point3::new(4.0, 5.0, 0.0);
        let d = segment_direction(&a, &b).unwrap();
        assert!((d.norm() - 1.0).abs() < TOLERANCE);
        assert!((d.x - 0.6).abs() < TOLERANCE);
        assert!((d.y - 0.8).abs() < TOLERANCE);
    }

    #[test]
    fn direction_ignores_z() {
        // Points differing only in z have no direction in the plane.
        let a = Point3::new(2.0, 3.0, 0.0);
        let b = Point3::new(2.0, 3.0, 5.0);
        assert!(segment_direction(&a, &b).is_err());
    }

    #[test]
    fn left_normal_rotates_ccw() {
        let east = Vector3::new(1.0, 0.0, 0.0);
        let n = left_normal(&east);
        assert!((n.x).abs() < TOLERANCE);
        assert!((n.y - 1.0).abs() < TOLERANCE);
    }
}
