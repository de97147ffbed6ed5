//! Study-hour arithmetic helpers.
//!
//! Hours are `f64` throughout (the upstream generator emits fractional
//! values like 1.5).  Two small helpers keep the arithmetic honest:
//!
//! - [`round_tenths`] — display/emission rounding to one decimal place.
//! - [`hours_gt`] — epsilon comparison so repeated subtraction of
//!   allocation chunks never leaves a phantom residue that schedules a
//!   zero-hour session.

/// Tolerance for comparing accumulated hour values.
///
/// Far below the 0.1 h emission granularity; only absorbs f64 residue.
pub const HOURS_EPSILON: f64 = 1e-9;

/// Round to one decimal place (the granularity of an emitted allocation).
#[inline]
pub fn round_tenths(hours: f64) -> f64 {
    (hours * 10.0).round() / 10.0
}

/// `true` if `a` exceeds `b` by more than [`HOURS_EPSILON`].
#[inline]
pub fn hours_gt(a: f64, b: f64) -> bool {
    a - b > HOURS_EPSILON
}
