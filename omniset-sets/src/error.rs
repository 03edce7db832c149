//! Error Types for the Set Engine.
//!
//! Geometric algorithms that merely cannot decide (symbolic bounds) do not
//! error; they return the unevaluated operator form instead. Hard errors
//! are reserved for construction violations, unsupported projections,
//! evaluator resource limits, and internal invariant breaks.

use thiserror::Error;

/// Errors produced by set construction, projection, and evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetError {
    /// An interval was constructed with equal left and right bounds; a
    /// one-element piece must be used instead.
    #[error("interval bounds are equal ({0}); construct a single-element piece instead")]
    DegenerateInterval(String),

    /// `as_finite_set` was requested on a set containing an interval.
    #[error("the set is not finite")]
    NonFinite,

    /// A containment query could not be decided for symbolic bounds and
    /// the caller asked for a hard answer.
    #[error("containment is ambiguous for symbolic bounds")]
    Ambiguous,

    /// Evaluation was cancelled through the cooperative cancellation flag.
    #[error("evaluation cancelled")]
    Cancelled,

    /// The operator tree exceeded the configured recursion depth.
    #[error("evaluation exceeded maximum depth {0}")]
    DepthExceeded(usize),

    /// Internal consistency fault, such as a set that reports itself
    /// finite yet fails its element projection. Indicates a bug in the
    /// engine itself.
    #[error("internal invariant violated: {0}")]
    Bug(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SetError>;
