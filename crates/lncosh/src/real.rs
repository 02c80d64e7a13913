//! Real-valued `ln(cosh(x))` and its relatives.
//!
//! Past [`ASYMPTOTIC_THRESHOLD`] the hyperbolic functions are replaced by
//! their leading exponential term, `cosh(a) ≈ sinh(a) ≈ e^a / 2`, so the
//! logarithm collapses to `a - ln 2`. At `a = 12` the dropped `e^-2a` term is
//! already below `4e-11`, and the direct route would overflow a double once
//! `a` passes ~710.

use core::f64::consts::LN_2;

/// Natural logarithm of two.
pub const LOG2: f64 = LN_2;

/// Magnitude above which the asymptotic branch is taken.
///
/// Existing callers depend on this exact value; changing it alters results
/// in the last few bits around the boundary.
pub const ASYMPTOTIC_THRESHOLD: f64 = 12.0;

/// Compute `ln(cosh(x))` without overflowing for large `|x|`.
///
/// The function is even and total: `NaN` propagates through the direct
/// branch and `±inf` maps to `+inf`.
#[inline]
pub fn ln_cosh(x: f64) -> f64 {
    let a = x.abs();
    if a > ASYMPTOTIC_THRESHOLD {
        a - LOG2
    } else {
        a.cosh().ln()
    }
}

/// Compute `ln(2·cosh(x))`, which tends to `|x|` for large arguments.
#[inline]
pub fn ln_two_cosh(x: f64) -> f64 {
    ln_cosh(x) + LOG2
}

/// Compute `ln(sinh(x))` without overflowing for large positive `x`.
///
/// `sinh` is negative left of the origin, so negative arguments produce
/// `NaN` and zero produces `-inf`, matching [`f64::ln`]. Use
/// [`crate::complex::ln_sinh`] when the principal complex value is wanted.
#[inline]
pub fn ln_sinh(x: f64) -> f64 {
    if x > ASYMPTOTIC_THRESHOLD {
        x - LOG2
    } else {
        x.sinh().ln()
    }
}

/// Compute `ln(2·sinh(x))`.
#[inline]
pub fn ln_two_sinh(x: f64) -> f64 {
    ln_sinh(x) + LOG2
}
