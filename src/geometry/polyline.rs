use crate::math::Point3;

/// An ordered sequence of vertices joined by straight segments, optionally
/// closed into a loop.
///
/// When `closed` is true, an implicit segment connects the last vertex back
/// to the first. Coordinates are planar in XY; the z coordinate is carried
/// alongside but takes no part in 2D computations.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point3>,
    pub closed: bool,
}

impl Polyline {
    /// Creates a polyline from vertices and a closed flag.
    #[must_use]
    pub fn new(points: Vec<Point3>, closed: bool) -> Self {
        Self { points, closed }
    }

    /// Creates a polyline from planar `(x, y)` coordinates with z = 0.
    #[must_use]
    pub fn from_xy(coords: &[(f64, f64)], closed: bool) -> Self {
        let points = coords
            .iter()
            .map(|&(x, y)| Point3::new(x, y, 0.0))
            .collect();
        Self { points, closed }
    }

    /// Returns the number of segments in this polyline.
    ///
    /// A closed polyline with `n` vertices has `n` segments (including the
    /// wrap-around), an open one has `n - 1`. Fewer than 2 vertices means
    /// no segments at all.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        let n = self.points.len();
        if n < 2 {
            return 0;
        }
        if self.closed {
            n
        } else {
            n - 1
        }
    }

    /// Returns the endpoints of segment `i`, wrapping around for the closing
    /// segment of a closed polyline.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.segment_count()`.
    #[must_use]
    pub fn segment(&self, i: usize) -> (Point3, Point3) {
        assert!(i < self.segment_count(), "segment index out of range");
        let n = self.points.len();
        (self.points[i], self.points[(i + 1) % n])
    }

    /// Iterates over all segments as endpoint pairs, in vertex order.
    pub fn segments(&self) -> impl Iterator<Item = (Point3, Point3)> + '_ {
        (0..self.segment_count()).map(|i| self.segment(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_count_open_and_closed() {
        let coords = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)];
        assert_eq!(Polyline::from_xy(&coords, false).segment_count(), 2);
        assert_eq!(Polyline::from_xy(&coords, true).segment_count(), 3);
    }

    #[test]
    fn segment_count_degenerate() {
        assert_eq!(Polyline::from_xy(&[], true).segment_count(), 0);
        assert_eq!(Polyline::from_xy(&[(1.0, 2.0)], true).segment_count(), 0);
    }

    #[test]
    fn closed_polyline_wraps_around() {
        let pl = Polyline::from_xy(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0)], true);
        let (a, b) = pl.segment(2);
        assert_eq!((a.x, a.y), (4.0, 3.0));
        assert_eq!((b.x, b.y), (0.0, 0.0));
    }

    #[test]
    fn segments_iterator_matches_indexing() {
        let pl = Polyline::from_xy(&[(0.0, 0.0), (1.0, 0.0), (2.0, 1.0)], false);
        let collected: Vec<_> = pl.segments().collect();
        assert_eq!(collected.len(), 2);
        assert_eq!(collected[1], pl.segment(1));
    }
}
