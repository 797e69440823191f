//! Linear-unit conversions between UI-facing millimeters, plan-image pixels,
//! and the meter-based model space.
//!
//! Geometry operations in this crate are unit-agnostic; callers convert at
//! the boundary, before constructing an operation.

/// Millimeters per meter.
pub const MM_PER_M: f64 = 1000.0;

/// Plan images are imported at a fixed scale of 1 pixel = 1 millimeter.
pub const MM_PER_PX: f64 = 1.0;

/// Converts millimeters to meters.
#[must_use]
pub fn mm_to_m(mm: f64) -> f64 {
    mm / MM_PER_M
}

/// Converts meters to millimeters.
#[must_use]
pub fn m_to_mm(m: f64) -> f64 {
    m * MM_PER_M
}

/// Converts a plan-image pixel count to meters at the fixed import scale.
#[must_use]
pub fn px_to_m(px: f64) -> f64 {
    px * MM_PER_PX / MM_PER_M
}
