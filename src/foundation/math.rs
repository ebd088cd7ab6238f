use std::f64::consts::TAU;

/// Wraps an angle into `[0, 2π)`.
pub(crate) fn wrap_angle(rad: f64) -> f64 {
    let r = rad.rem_euclid(TAU);
    if r >= TAU { 0.0 } else { r }
}
