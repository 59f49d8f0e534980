//! Tolerant floating point comparison.

/// Tolerance used by [`approx_eq`].
pub const DEFAULT_EPSILON: f64 = 1e12 * f64::EPSILON;

pub fn approx_eq(a: f64, b: f64) -> bool {
    approx_eq_with(a, b, DEFAULT_EPSILON)
}

/// `true` when `a` and `b` differ by at most `epsilon` in absolute terms, or by less than
/// `epsilon` relative to the larger magnitude.
pub fn approx_eq_with(a: f64, b: f64, epsilon: f64) -> bool {
    let diff = (a - b).abs();
    diff <= epsilon || diff < a.abs().max(b.abs()) * epsilon
}
