//! Exact Extended Reals.
//!
//! Interval edges must compare exactly, so the edge value type is a
//! `BigRational` extended with signed infinities rather than a float.
//! The ordering is total: `-oo < q < +oo` for every finite `q`.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;

/// An exact real value: a rational number or a signed infinity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Real {
    /// Negative infinity, below every finite value.
    NegInfinity,
    /// A finite rational value.
    Finite(BigRational),
    /// Positive infinity, above every finite value.
    PosInfinity,
}

impl Real {
    /// The finite value zero.
    pub fn zero() -> Self {
        Real::Finite(BigRational::zero())
    }

    /// The finite value one.
    pub fn one() -> Self {
        Real::Finite(BigRational::one())
    }

    /// Builds a finite rational from a numerator/denominator pair.
    ///
    /// # Panics
    /// Panics if `den` is zero (a `BigRational` invariant).
    pub fn ratio(num: i64, den: i64) -> Self {
        Real::Finite(BigRational::new(BigInt::from(num), BigInt::from(den)))
    }

    /// Whether this is a finite rational.
    pub fn is_finite(&self) -> bool {
        matches!(self, Real::Finite(_))
    }

    /// Whether this is exactly zero.
    pub fn is_zero(&self) -> bool {
        matches!(self, Real::Finite(q) if q.is_zero())
    }

    /// The finite rational value, if any.
    pub fn as_rational(&self) -> Option<&BigRational> {
        match self {
            Real::Finite(q) => Some(q),
            _ => None,
        }
    }
}

impl PartialOrd for Real {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Real {
    fn cmp(&self, other: &Self) -> Ordering {
        use Real::*;
        match (self, other) {
            (NegInfinity, NegInfinity) | (PosInfinity, PosInfinity) => Ordering::Equal,
            (NegInfinity, _) | (_, PosInfinity) => Ordering::Less,
            (_, NegInfinity) | (PosInfinity, _) => Ordering::Greater,
            (Finite(a), Finite(b)) => a.cmp(b),
        }
    }
}

impl From<i64> for Real {
    fn from(n: i64) -> Self {
        Real::Finite(BigRational::from_integer(BigInt::from(n)))
    }
}

impl From<BigRational> for Real {
    fn from(q: BigRational) -> Self {
        Real::Finite(q)
    }
}

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Real::NegInfinity => write!(f, "-oo"),
            Real::PosInfinity => write!(f, "+oo"),
            Real::Finite(q) => {
                if q.is_integer() {
                    write!(f, "{}", q.numer())
                } else if q.is_negative() {
                    write!(f, "-{}/{}", q.numer().abs(), q.denom())
                } else {
                    write!(f, "{}/{}", q.numer(), q.denom())
                }
            }
        }
    }
}
