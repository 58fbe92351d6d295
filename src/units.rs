//! Unit conversion helpers.
//!
//! RTF expresses distances in twips (twentieths of a point).

/// Number of twips in one point.
pub const TWIPS_PER_POINT: f64 = 20.0;

/// Convert a twip distance to points.
pub fn twips_to_points(twips: i32) -> f64 {
    f64::from(twips) / TWIPS_PER_POINT
}
