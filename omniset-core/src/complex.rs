//! Exact Complex Values.
//!
//! A set piece may describe a rectangular region of the complex plane, so
//! evaluated edges are points with independent exact real and imaginary
//! parts. The four infinite corners bound the universal set and the
//! quadrant pieces produced by piece inversion.

use crate::real::Real;
use std::fmt;

/// An exact point of the (extended) complex plane.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Complex {
    /// Real part.
    pub re: Real,
    /// Imaginary part.
    pub im: Real,
}

impl Complex {
    /// Builds a complex value from both parts.
    pub fn new(re: Real, im: Real) -> Self {
        Self { re, im }
    }

    /// Builds a purely real value.
    pub fn real(re: Real) -> Self {
        Self {
            re,
            im: Real::zero(),
        }
    }

    /// The corner `-oo - oo*i`.
    pub fn neg_neg_infinity() -> Self {
        Self::new(Real::NegInfinity, Real::NegInfinity)
    }

    /// The corner `-oo + oo*i`.
    pub fn neg_pos_infinity() -> Self {
        Self::new(Real::NegInfinity, Real::PosInfinity)
    }

    /// The corner `+oo - oo*i`.
    pub fn pos_neg_infinity() -> Self {
        Self::new(Real::PosInfinity, Real::NegInfinity)
    }

    /// The corner `+oo + oo*i`.
    pub fn pos_pos_infinity() -> Self {
        Self::new(Real::PosInfinity, Real::PosInfinity)
    }

    /// Whether the imaginary part is exactly zero.
    pub fn is_real(&self) -> bool {
        self.im.is_zero()
    }

    /// Whether both parts are finite rationals.
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

impl From<i64> for Complex {
    fn from(n: i64) -> Self {
        Complex::real(Real::from(n))
    }
}

impl From<Real> for Complex {
    fn from(re: Real) -> Self {
        Complex::real(re)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_real() {
            write!(f, "{}", self.re)
        } else {
            write!(f, "{} + {}*i", self.re, self.im)
        }
    }
}
