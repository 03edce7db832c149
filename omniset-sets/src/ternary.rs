//! Three-Valued Query Results.
//!
//! Containment, finiteness, and emptiness queries against sets with
//! symbolic bounds are frequently undecidable without solving the
//! underlying expressions. Collapsing "cannot tell" into `false` silently
//! propagates wrong answers into callers, so such queries answer with an
//! explicit third state and Kleene connectives.

use std::fmt;
use std::ops;

/// A Kleene three-valued truth value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ternary {
    /// Definitely true.
    True,
    /// Definitely false.
    False,
    /// Could not be decided.
    Unknown,
}

impl Ternary {
    /// Lifts a decided boolean.
    pub fn from_bool(b: bool) -> Self {
        if b {
            Ternary::True
        } else {
            Ternary::False
        }
    }

    /// Whether this is `True`.
    pub fn is_true(self) -> bool {
        self == Ternary::True
    }

    /// Whether this is `False`.
    pub fn is_false(self) -> bool {
        self == Ternary::False
    }

    /// Collapses to a boolean, treating `Unknown` conservatively as `false`.
    pub fn unwrap_or_false(self) -> bool {
        self == Ternary::True
    }

    /// The decided value, if any.
    pub fn decided(self) -> Option<bool> {
        match self {
            Ternary::True => Some(true),
            Ternary::False => Some(false),
            Ternary::Unknown => None,
        }
    }
}

impl From<bool> for Ternary {
    fn from(b: bool) -> Self {
        Ternary::from_bool(b)
    }
}

impl From<Option<bool>> for Ternary {
    fn from(v: Option<bool>) -> Self {
        match v {
            Some(b) => Ternary::from_bool(b),
            None => Ternary::Unknown,
        }
    }
}

impl ops::BitAnd for Ternary {
    type Output = Ternary;
    fn bitand(self, rhs: Ternary) -> Ternary {
        use Ternary::*;
        match (self, rhs) {
            (False, _) | (_, False) => False,
            (True, True) => True,
            _ => Unknown,
        }
    }
}

impl ops::BitOr for Ternary {
    type Output = Ternary;
    fn bitor(self, rhs: Ternary) -> Ternary {
        use Ternary::*;
        match (self, rhs) {
            (True, _) | (_, True) => True,
            (False, False) => False,
            _ => Unknown,
        }
    }
}

impl ops::Not for Ternary {
    type Output = Ternary;
    fn not(self) -> Ternary {
        match self {
            Ternary::True => Ternary::False,
            Ternary::False => Ternary::True,
            Ternary::Unknown => Ternary::Unknown,
        }
    }
}

impl fmt::Display for Ternary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ternary::True => write!(f, "true"),
            Ternary::False => write!(f, "false"),
            Ternary::Unknown => write!(f, "unknown"),
        }
    }
}
