//! Angle helpers shared by the mapper and the solver.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize an angle to [-180, 180) degrees.
///
/// This is the signed shortest-path difference when applied to `a - b`.
pub fn normalize_to_pm180(deg: f64) -> f64 {
    normalize_360(deg + 180.0) - 180.0
}
