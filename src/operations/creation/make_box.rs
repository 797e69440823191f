use crate::error::{OperationError, Result};
use crate::math::Point3;

/// An axis-aligned box as 8 vertices and 6 quad faces.
///
/// Faces index into `vertices` and wind counter-clockwise when viewed from
/// outside the box.
#[derive(Debug, Clone)]
pub struct BoxMesh {
    pub vertices: Vec<Point3>,
    pub faces: [[usize; 4]; 6],
}

/// Creates an axis-aligned box mesh from two corner points.
#[derive(Debug)]
pub struct MakeBox {
    min_corner: Point3,
    max_corner: Point3,
}

impl MakeBox {
    /// Creates a new `MakeBox` operation from opposite corners.
    #[must_use]
    pub fn new(min_corner: Point3, max_corner: Point3) -> Self {
        Self {
            min_corner,
            max_corner,
        }
    }

    /// Creates a cube of uniform `size` centered at the origin.
    #[must_use]
    pub fn with_size(size: f64) -> Self {
        let h = size / 2.0;
        Self {
            min_corner: Point3::new(-h, -h, -h),
            max_corner: Point3::new(h, h, h),
        }
    }

    /// Executes the operation, producing the box mesh.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if any extent is non-positive
    /// (the corners must differ along every axis, min strictly below max).
    pub fn execute(&self) -> Result<BoxMesh> {
        let (lo, hi) = (&self.min_corner, &self.max_corner);
        if lo.x >= hi.x || lo.y >= hi.y || lo.z >= hi.z {
            return Err(OperationError::InvalidInput(format!(
                "box extents must be positive: min ({}, {}, {}), max ({}, {}, {})",
                lo.x, lo.y, lo.z, hi.x, hi.y, hi.z
            ))
            .into());
        }

        let vertices = vec![
            Point3::new(lo.x, lo.y, lo.z),
            Point3::new(hi.x, lo.y, lo.z),
            Point3::new(hi.x, hi.y, lo.z),
            Point3::new(lo.x, hi.y, lo.z),
            Point3::new(lo.x, lo.y, hi.z),
            Point3::new(hi.x, lo.y, hi.z),
            Point3::new(hi.x, hi.y, hi.z),
            Point3::new(lo.x, hi.y, hi.z),
        ];

        let faces = [
            [0, 3, 2, 1], // bottom (-z)
            [4, 5, 6, 7], // top (+z)
            [0, 1, 5, 4], // front (-y)
            [1, 2, 6, 5], // right (+x)
            [2, 3, 7, 6], // back (+y)
            [3, 0, 4, 7], // left (-x)
        ];

        Ok(BoxMesh { vertices, faces })
    }
}
