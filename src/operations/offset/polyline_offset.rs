use crate::error::{OperationError, Result};
use crate::geometry::Polyline;
use crate::math::intersect_2d::line_line_intersect_2d;
use crate::math::polygon_2d::{left_normal, segment_direction};
use crate::math::{Point3, TOLERANCE};

/// Fixed perpendicular translation direction for edge offsets.
///
/// Both variants are defined against the left-hand normal `(-dy, dx)` of
/// each edge's direction: `Outward` translates along the negated left
/// normal, `Inward` along the left normal itself. The convention is purely
/// geometric and independent of polygon winding: on a counter-clockwise
/// polygon `Outward` moves edges away from the interior, on a clockwise one
/// it moves them toward it. Callers orient against winding themselves
/// (e.g. via [`crate::math::polygon_2d::signed_area_2d`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetDirection {
    Outward,
    Inward,
}

/// Offsets a 2D polyline by translating every segment along its
/// perpendicular and rejoining neighbours at miter corners.
///
/// # Algorithm
///
/// 1. **Offset**: translate each segment along its left normal by the
///    signed distance.
/// 2. **Rejoin**: each output vertex is the infinite-line intersection of
///    the two offset segments meeting at the corresponding input vertex.
///    Parallel neighbours (collinear input segments) fall back to the
///    second segment's offset start point, a cut corner rather than a
///    spike or a failure. No miter limit is applied, so near-parallel
///    reversals can produce long miters.
/// 3. Open polylines have no wrap-around segment: the first and last
///    output vertices are the raw endpoints of the first and last offset
///    segments, and only interior vertices are mitered.
///
/// The result has the same vertex count and `closed` flag as the input;
/// the input is never mutated. The z coordinate of each vertex is carried
/// through from the matching input vertex and takes no part in the math.
#[derive(Debug)]
pub struct PolylineOffset {
    polyline: Polyline,
    distance: f64,
    direction: OffsetDirection,
}

impl PolylineOffset {
    /// Creates a new polyline offset operation.
    ///
    /// `distance` must be non-negative and in the same linear unit as the
    /// polyline's coordinates; the side is selected solely by `direction`.
    #[must_use]
    pub fn new(polyline: Polyline, distance: f64, direction: OffsetDirection) -> Self {
        Self {
            polyline,
            distance,
            direction,
        }
    }

    /// Executes the offset operation.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if fewer than 2 points are provided
    ///   or the distance is negative
    /// - `GeometryError::ZeroVector` if two consecutive vertices coincide
    ///   in the XY plane
    pub fn execute(&self) -> Result<Polyline> {
        let n = self.polyline.points.len();
        if n < 2 {
            return Err(OperationError::InvalidInput(
                "at least 2 points are required for polyline offset".to_owned(),
            )
            .into());
        }
        if self.distance < 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "offset distance must be non-negative, got {}",
                self.distance
            ))
            .into());
        }

        if self.distance < TOLERANCE {
            return Ok(self.polyline.clone());
        }

        let signed = match self.direction {
            OffsetDirection::Outward => -self.distance,
            OffsetDirection::Inward => self.distance,
        };

        let mut offset_segments = Vec::with_capacity(self.polyline.segment_count());
        for (a, b) in self.polyline.segments() {
            offset_segments.push(offset_segment(&a, &b, signed)?);
        }

        let mut points = Vec::with_capacity(n);
        if self.polyline.closed {
            // One joint per vertex; vertex i joins segments i-1 and i.
            let m = offset_segments.len();
            for i in 0..n {
                let prev = &offset_segments[(i + m - 1) % m];
                let cur = &offset_segments[i];
                points.push(joint_vertex(prev, cur));
            }
        } else {
            points.push(offset_segments[0].0);
            for i in 1..n - 1 {
                points.push(joint_vertex(&offset_segments[i - 1], &offset_segments[i]));
            }
            points.push(offset_segments[n - 2].1);
        }

        Ok(Polyline::new(points, self.polyline.closed))
    }
}

/// Translates the segment `a → b` perpendicular to its own direction.
///
/// Positive `signed_distance` moves along the left normal, negative against
/// it. The z coordinates of the endpoints pass through unchanged.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if the segment has zero length in
/// the XY plane.
pub fn offset_segment(a: &Point3, b: &Point3, signed_distance: f64) -> Result<(Point3, Point3)> {
    let dir = segment_direction(a, b)?;
    let shift = left_normal(&dir) * signed_distance;
    Ok((
        Point3::new(a.x + shift.x, a.y + shift.y, a.z),
        Point3::new(b.x + shift.x, b.y + shift.y, b.z),
    ))
}

/// Computes the joint between two consecutive offset segments.
///
/// Miter join: intersection of the carrier lines. Parallel or coincident
/// segments have no miter; the joint falls back to the second segment's
/// start point, which already carries the shared vertex's z.
fn joint_vertex(prev: &(Point3, Point3), cur: &(Point3, Point3)) -> Point3 {
    match line_line_intersect_2d(&prev.0, &prev.1, &cur.0, &cur.1) {
        Some((x, y)) => Point3::new(x, y, cur.0.z),
        None => cur.0,
    }
}
