/// Returns the perpendicular distance from point `(px, py)` to the infinite
/// line through `(ax, ay)` and `(bx, by)`.
///
/// Falls back to the point-to-point distance when the two line points
/// coincide (zero-length carrier segment).
#[must_use]
pub fn point_to_line_dist(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let dx = bx - ax;
    let dy = by - ay;
    let len_sq = dx * dx + dy * dy;

    if len_sq < 1e-20 {
        return ((px - ax).powi(2) + (py - ay).powi(2)).sqrt();
    }

    // |cross((b - a), (p - a))| / |b - a|
    let cross = dx * (py - ay) - dy * (px - ax);
    cross.abs() / len_sq.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn point_above_horizontal_line() {
        let d = point_to_line_dist(3.0, 2.0, 0.0, 0.0, 10.0, 0.0);
        assert!((d - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn point_on_line_is_zero() {
        let d = point_to_line_dist(7.0, 7.0, 0.0, 0.0, 1.0, 1.0);
        assert!(d < TOLERANCE);
    }

    #[test]
    fn line_is_infinite_not_a_segment() {
        // Projection lands outside the defining segment; distance is still
        // the perpendicular distance to the carrier line.
        let d = point_to_line_dist(20.0, 5.0, 0.0, 0.0, 1.0, 0.0);
        assert!((d - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn degenerate_carrier_segment() {
        let d = point_to_line_dist(3.0, 4.0, 0.0, 0.0, 0.0, 0.0);
        assert!((d - 5.0).abs() < TOLERANCE);
    }
}
