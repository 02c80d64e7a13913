//! Complex-valued `ln(cosh(z))` built on the real routine.
//!
//! Writing `z = x + iy`,
//!
//! ```text
//! cosh(z) = cosh(x) * (cos(y) + i tanh(x) sin(y))
//! sinh(z) = cosh(x) * (tanh(x) cos(y) + i sin(y))
//! ```
//!
//! `cosh(x)` is real and positive, so the principal logarithm splits into
//! [`real::ln_cosh`] plus the logarithm of a factor whose modulus never
//! exceeds one. `tanh` saturates instead of overflowing, which keeps the
//! result finite for any finite `z`.

use num_complex::Complex64;

use crate::real::{self, LOG2};

/// Compute the principal value of `ln(cosh(z))`.
///
/// The imaginary part lies in `(-π, π]`, except on signed-zero branch cuts
/// where `-π` follows IEEE `atan2`: `ln_cosh(0 - iπ)` has imaginary part `-π`.
/// Non-finite components propagate through ordinary complex arithmetic.
pub fn ln_cosh(z: Complex64) -> Complex64 {
    cosh_factor(z).ln() + real::ln_cosh(z.re)
}

/// `cosh(z) / cosh(Re z)`, whose modulus never exceeds one.
pub(crate) fn cosh_factor(z: Complex64) -> Complex64 {
    let (sin_y, cos_y) = z.im.sin_cos();
    Complex64::new(cos_y, z.re.tanh() * sin_y)
}

/// Compute the principal value of `ln(2·cosh(z))`.
pub fn ln_two_cosh(z: Complex64) -> Complex64 {
    ln_cosh(z) + LOG2
}

/// Compute the principal value of `ln(sinh(z))`.
///
/// Unlike [`real::ln_sinh`] this is defined left of the origin:
/// `ln_sinh(-x)` is `ln_sinh(x) + iπ` for real `x > 0`. The origin is a pole
/// and yields a real part of `-inf`.
pub fn ln_sinh(z: Complex64) -> Complex64 {
    sinh_factor(z).ln() + real::ln_cosh(z.re)
}

/// `sinh(z) / cosh(Re z)`.
pub(crate) fn sinh_factor(z: Complex64) -> Complex64 {
    let (sin_y, cos_y) = z.im.sin_cos();
    Complex64::new(z.re.tanh() * cos_y, sin_y)
}

/// Compute the principal value of `ln(2·sinh(z))`.
pub fn ln_two_sinh(z: Complex64) -> Complex64 {
    ln_sinh(z) + LOG2
}
