use super::{Point3, TOLERANCE};

/// Intersection of two infinite lines in the XY plane, each given by two
/// points on it.
///
/// Uses the endpoint determinant (cross-product) form: with `a1 = (x1, y1)`,
/// `a2 = (x2, y2)`, `b1 = (x3, y3)`, `b2 = (x4, y4)`,
///
/// ```text
/// denom = (x1 - x2)(y3 - y4) - (y1 - y2)(x3 - x4)
/// ```
///
/// Returns `None` when `|denom| < TOLERANCE` (parallel or coincident lines).
/// The z coordinates of the inputs do not participate.
#[must_use]
pub fn line_line_intersect_2d(
    a1: &Point3,
    a2: &Point3,
    b1: &Point3,
    b2: &Point3,
) -> Option<(f64, f64)> {
    let (x1, y1) = (a1.x, a1.y);
    let (x2, y2) = (a2.x, a2.y);
    let (x3, y3) = (b1.x, b1.y);
    let (x4, y4) = (b2.x, b2.y);

    let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denom.abs() < TOLERANCE {
        return None;
    }

    let det_a = x1 * y2 - y1 * x2;
    let det_b = x3 * y4 - y3 * x4;
    let px = (det_a * (x3 - x4) - (x1 - x2) * det_b) / denom;
    let py = (det_a * (y3 - y4) - (y1 - y2) * det_b) / denom;
    Some((px, py))
}
