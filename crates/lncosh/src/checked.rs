//! Fallible wrappers that reject arguments the total functions would silently
//! turn into `NaN` or infinities.
//!
//! On success the returned value is bit-identical to the corresponding
//! unchecked routine.

use num_complex::Complex64;
use thiserror::Error;
use tracing::debug;

use crate::{complex, real};

/// Reasons a checked evaluation can be refused.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LnCoshError {
    /// The argument has a `NaN` or infinite component.
    #[error("argument {re} + {im}i is not finite")]
    NonFinite {
        /// Real part of the rejected argument.
        re: f64,
        /// Imaginary part of the rejected argument.
        im: f64,
    },
    /// The logarithm's argument vanishes at this point.
    #[error("logarithmic pole at {re} + {im}i")]
    Pole {
        /// Real part of the rejected argument.
        re: f64,
        /// Imaginary part of the rejected argument.
        im: f64,
    },
    /// No real-valued result exists.
    #[error("ln(sinh({x})) has no real value")]
    Domain {
        /// The rejected argument.
        x: f64,
    },
}

impl LnCoshError {
    fn non_finite(re: f64, im: f64) -> Self {
        debug!(target: "lncosh", re, im, "rejecting non-finite argument");
        LnCoshError::NonFinite { re, im }
    }

    fn pole(re: f64, im: f64) -> Self {
        debug!(target: "lncosh", re, im, "rejecting argument at logarithmic pole");
        LnCoshError::Pole { re, im }
    }

    fn domain(x: f64) -> Self {
        debug!(target: "lncosh", x, "rejecting argument outside real domain");
        LnCoshError::Domain { x }
    }
}

fn ensure_finite(z: Complex64) -> Result<(), LnCoshError> {
    if z.is_finite() {
        Ok(())
    } else {
        Err(LnCoshError::non_finite(z.re, z.im))
    }
}

/// Modulus, per unit of `max(1, |Im z|)`, at or below which the bounded
/// factor left after splitting off `cosh(Re z)` counts as zero.
///
/// Multiples of `π/2` are not representable, so `cos` or `sin` at the nearest
/// double is off by about one ulp of `Im z` rather than exactly zero.
pub const POLE_TOLERANCE: f64 = f64::EPSILON;

fn ensure_clear_of_pole(z: Complex64, factor: Complex64) -> Result<(), LnCoshError> {
    if factor.norm() <= POLE_TOLERANCE * z.im.abs().max(1.0) {
        Err(LnCoshError::pole(z.re, z.im))
    } else {
        Ok(())
    }
}

/// Checked [`real::ln_cosh`]. Fails only for non-finite input.
pub fn try_ln_cosh(x: f64) -> Result<f64, LnCoshError> {
    ensure_finite(Complex64::new(x, 0.0))?;
    Ok(real::ln_cosh(x))
}

/// Checked [`complex::ln_cosh`].
///
/// Besides non-finite input, rejects arguments within [`POLE_TOLERANCE`] of
/// the zeros of `cosh` at `i·(π/2 + kπ)`.
pub fn try_ln_cosh_complex(z: Complex64) -> Result<Complex64, LnCoshError> {
    ensure_finite(z)?;
    ensure_clear_of_pole(z, complex::cosh_factor(z))?;
    Ok(complex::ln_cosh(z))
}

/// Checked [`real::ln_sinh`]. Negative input is a domain error and zero is a
/// pole.
pub fn try_ln_sinh(x: f64) -> Result<f64, LnCoshError> {
    ensure_finite(Complex64::new(x, 0.0))?;
    if x < 0.0 {
        return Err(LnCoshError::domain(x));
    }
    if x == 0.0 {
        return Err(LnCoshError::pole(x, 0.0));
    }
    Ok(real::ln_sinh(x))
}

/// Checked [`complex::ln_sinh`]. Rejects arguments within
/// [`POLE_TOLERANCE`] of the zeros of `sinh` at `i·kπ`.
pub fn try_ln_sinh_complex(z: Complex64) -> Result<Complex64, LnCoshError> {
    ensure_finite(z)?;
    ensure_clear_of_pole(z, complex::sinh_factor(z))?;
    Ok(complex::ln_sinh(z))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_matches_unchecked() {
        assert_eq!(try_ln_cosh(3.5), Ok(real::ln_cosh(3.5)));
        let z = Complex64::new(1.0, 2.0);
        assert_eq!(try_ln_cosh_complex(z), Ok(complex::ln_cosh(z)));
        assert_eq!(try_ln_sinh(0.5), Ok(real::ln_sinh(0.5)));
        assert_eq!(try_ln_sinh_complex(-z), Ok(complex::ln_sinh(-z)));
    }

    #[test]
    fn rejects_non_finite() {
        assert!(matches!(
            try_ln_cosh(f64::NAN),
            Err(LnCoshError::NonFinite { .. })
        ));
        assert_eq!(
            try_ln_cosh(f64::INFINITY),
            Err(LnCoshError::NonFinite {
                re: f64::INFINITY,
                im: 0.0
            })
        );
        assert!(matches!(
            try_ln_cosh_complex(Complex64::new(0.0, f64::NEG_INFINITY)),
            Err(LnCoshError::NonFinite { .. })
        ));
    }

    #[test]
    fn sinh_domain_and_pole() {
        assert_eq!(try_ln_sinh(-1.0), Err(LnCoshError::Domain { x: -1.0 }));
        assert_eq!(try_ln_sinh(0.0), Err(LnCoshError::Pole { re: 0.0, im: 0.0 }));
        assert_eq!(
            try_ln_sinh_complex(Complex64::new(0.0, 0.0)),
            Err(LnCoshError::Pole { re: 0.0, im: 0.0 })
        );
        assert!(try_ln_sinh_complex(Complex64::new(-1.0, 0.0)).is_ok());
    }

    #[test]
    fn rejects_zeros_of_cosh() {
        use core::f64::consts::{FRAC_PI_2, PI};

        for k in [0.0, 1.0, -1.0, 7.0, 1e6] {
            let z = Complex64::new(0.0, FRAC_PI_2 + k * PI);
            assert_eq!(
                try_ln_cosh_complex(z),
                Err(LnCoshError::Pole { re: 0.0, im: z.im }),
                "k = {k}"
            );
        }
        assert!(try_ln_cosh_complex(Complex64::new(0.5, FRAC_PI_2)).is_ok());
        assert!(try_ln_cosh_complex(Complex64::new(0.0, FRAC_PI_2 - 1e-6)).is_ok());
    }

    #[test]
    fn rejects_zeros_of_sinh_off_origin() {
        use core::f64::consts::PI;

        for k in [1.0, -1.0, 3.0] {
            let z = Complex64::new(0.0, k * PI);
            assert!(matches!(
                try_ln_sinh_complex(z),
                Err(LnCoshError::Pole { .. })
            ));
        }
        assert!(try_ln_sinh_complex(Complex64::new(0.0, PI / 2.0)).is_ok());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            LnCoshError::Domain { x: -2.0 }.to_string(),
            "ln(sinh(-2)) has no real value"
        );
        assert_eq!(
            LnCoshError::NonFinite {
                re: f64::NAN,
                im: 1.0
            }
            .to_string(),
            "argument NaN + 1i is not finite"
        );
    }
}
