//! acot(x) implementation.
//!
//! Inverse cotangent via the identity acot(x) = atan(1/x). The reciprocal is a
//! single IEEE-754 division, so every special input maps through the division
//! and atan special-value rules without explicit branches:
//! 1/±0 = ±inf, 1/±inf = ±0, 1/NaN = NaN.

use libm::atan;

/// Computes the inverse cotangent of a double-precision floating-point number.
///
/// The result is in radians on the principal branch `(-pi/2, pi/2)`:
/// `acot(+0.0)` is `pi/2`, `acot(-0.0)` is `-pi/2`, `acot(+inf)` is `+0.0`,
/// `acot(-inf)` is `-0.0` and `acot(NaN)` is NaN. Total over the f64 domain;
/// never panics.
#[inline(always)]
pub fn acot(x: f64) -> f64 {
    atan(1.0 / x)
}
