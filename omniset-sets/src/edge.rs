//! Interval Edges.
//!
//! An edge is one endpoint of an interval: a boundary entity plus two
//! independent open/closed flags, one per axis, because a set piece may
//! describe a rectangular region of the complex plane rather than a 1-D
//! real interval. The boundary entity may be symbolic; closedness flags
//! are always concrete.

use omniset_core::{Complex, Entity};
use std::fmt;

/// One endpoint of an interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// The boundary value; may contain free symbols.
    pub bound: Entity,
    /// Whether the edge is closed along the real axis.
    pub re_closed: bool,
    /// Whether the edge is closed along the imaginary axis.
    pub im_closed: bool,
}

impl Edge {
    /// Builds an edge with explicit per-axis flags.
    pub fn new(bound: impl Into<Entity>, re_closed: bool, im_closed: bool) -> Self {
        Self {
            bound: bound.into(),
            re_closed,
            im_closed,
        }
    }

    /// Builds an edge closed on both axes.
    pub fn closed(bound: impl Into<Entity>) -> Self {
        Self::new(bound, true, true)
    }

    /// Builds an edge open on both axes.
    pub fn open(bound: impl Into<Entity>) -> Self {
        Self::new(bound, false, false)
    }

    /// Attempts numeric evaluation of the boundary entity.
    pub fn evaled(&self) -> Option<Complex> {
        self.bound.evaled()
    }

    /// Whether the boundary entity is numerically evaluable.
    pub fn is_evaluable(&self) -> bool {
        self.bound.is_evaluable()
    }

    /// Edge equality in the evaluated sense: flags must match, and bounds
    /// compare numerically when both are evaluable, structurally otherwise.
    pub fn same_as(&self, other: &Edge) -> bool {
        if self.re_closed != other.re_closed || self.im_closed != other.im_closed {
            return false;
        }
        match (self.evaled(), other.evaled()) {
            (Some(a), Some(b)) => a == b,
            _ => self.bound == other.bound,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bound)
    }
}
