//! Degree helpers shared by the lunar argument computations.
//!
//! Perturbation arguments grow by hundreds of degrees per lunation, so every
//! one of them is reduced into `[0, 360)` before it is handed to `sin`/`cos`.

use core::f64::consts::PI;

/// Reduce an angle in degrees into `[0, 360)`.
///
/// ```
/// use moon_phase_lib::angle::normalize_degrees;
///
/// assert_eq!(normalize_degrees(370.0), 10.0);
/// assert_eq!(normalize_degrees(-90.0), 270.0);
/// ```
pub fn normalize_degrees(degrees: f64) -> f64 {
    let reduced = degrees % 360.0;
    if reduced < 0.0 {
        reduced + 360.0
    } else {
        reduced
    }
}

/// Degrees to radians.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Reduce into `[0, 360)` then convert to radians.
pub(crate) fn reduced_radians(degrees: f64) -> f64 {
    degrees_to_radians(normalize_degrees(degrees))
}
