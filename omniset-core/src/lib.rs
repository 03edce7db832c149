//! Omniset Core - Exact Numbers and Boundary Entities
//!
//! This crate provides the foundational value types for the omniset
//! set-algebra engine:
//! - [`Real`]: exact rationals extended with signed infinities
//! - [`Complex`]: exact points of the complex plane
//! - [`Entity`]: boundary expressions that may be numeric or symbolic,
//!   plus the boolean predicate language used by conditional sets
//!
//! Everything here is exact: comparisons are decided on `BigRational`
//! values, never on floating-point approximations.
//!
//! # Examples
//!
//! ```
//! use omniset_core::{Complex, Entity, Real};
//!
//! let three = Entity::from(3);
//! assert_eq!(three.evaled(), Some(Complex::real(Real::from(3))));
//!
//! let x = Entity::var("x");
//! assert!(!x.is_evaluable());
//! assert_eq!(x.substitute("x", &three), three);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod complex;
pub mod entity;
pub mod real;

pub use complex::Complex;
pub use entity::{CmpOp, Entity};
pub use real::Real;
