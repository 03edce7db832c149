//! Omniset Sets - Exact Set Algebra over the Complex Plane
//!
//! This crate implements the set-algebra engine of omniset:
//! - [`Edge`]: one endpoint of an interval, with independent open/closed
//!   flags for the real and imaginary axes
//! - [`SetPiece`]: a single contiguous chunk of a set (one element or one
//!   rectangular region of the complex plane)
//! - [`Set`]: a disjoint piece-list container with a
//!   disjointness-preserving insertion discipline
//! - [`SetNode`]: the lazy tree of set operators (union, intersection,
//!   complement, inversion), normalized by [`Evaluator`]
//! - [`ConditionalSet`]: symbolic sets of the form `{x : P(x)}`
//!
//! All geometry is exact: edges evaluate to `BigRational`-backed values and
//! boundary ties are decided by open/closed flags, never by epsilons.
//! Queries that cannot be decided for symbolic bounds return
//! [`Ternary::Unknown`] instead of guessing.
//!
//! # Examples
//!
//! ```
//! use omniset_sets::SetNode;
//!
//! let a = SetNode::interval(0, 10).unwrap();
//! let b = SetNode::interval(5, 15).unwrap();
//! let c = a.intersect(b).eval().unwrap();
//! assert!(c.contains(&7.into()));
//! assert!(!c.contains(&3.into()));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod conditional;
pub mod edge;
pub mod error;
pub mod eval;
pub mod node;
pub mod ops;
pub mod piece;
pub mod set;
pub mod ternary;

pub use conditional::ConditionalSet;
pub use edge::Edge;
pub use error::{Result, SetError};
pub use eval::{EvalConfig, EvalStats, Evaluator};
pub use node::SetNode;
pub use piece::{Interval, SetPiece};
pub use set::Set;
pub use ternary::Ternary;
