//! Set Operator Trees.
//!
//! A [`SetNode`] is either a leaf (a concrete piece-list set or a
//! conditional set) or a lazy binary operator over two subtrees. The
//! algebra operators (`&`, `|`, `-`, `!` and their named forms) only ever
//! build nodes and cannot fail; all actual set computation happens in
//! [`crate::eval::Evaluator`], reached through [`SetNode::eval`].
//!
//! Tri-state queries walk the tree structurally with Kleene connectives,
//! so they work on unevaluated trees too.

use crate::conditional::ConditionalSet;
use crate::edge::Edge;
use crate::error::{Result, SetError};
use crate::eval::Evaluator;
use crate::piece::{Interval, SetPiece};
use crate::set::Set;
use crate::ternary::Ternary;
use omniset_core::Entity;
use std::fmt;
use std::ops;

/// A node of the set expression tree.
#[derive(Debug, Clone)]
pub enum SetNode {
    /// A concrete disjoint piece list.
    Concrete(Set),
    /// A set-builder form over one bound variable.
    Conditional(ConditionalSet),
    /// Lazy union of two subtrees.
    Union(Box<SetNode>, Box<SetNode>),
    /// Lazy intersection of two subtrees.
    Intersection(Box<SetNode>, Box<SetNode>),
    /// Lazy set difference: left minus right.
    Complement(Box<SetNode>, Box<SetNode>),
    /// Lazy complement against the whole complex plane.
    Inversion(Box<SetNode>),
}

impl SetNode {
    /// The empty set.
    pub fn empty() -> Self {
        SetNode::Concrete(Set::empty())
    }

    /// A finite set of elements.
    pub fn finite<I, T>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Entity>,
    {
        SetNode::Concrete(Set::finite(elements))
    }

    /// A closed real interval `[left; right]`.
    ///
    /// # Errors
    /// [`SetError::DegenerateInterval`] when the bounds coincide; use a
    /// finite set for single points.
    pub fn interval(left: impl Into<Entity>, right: impl Into<Entity>) -> Result<Self> {
        Self::interval_with(left, right, true, true)
    }

    /// A real interval with explicit endpoint closedness.
    ///
    /// # Errors
    /// [`SetError::DegenerateInterval`] when the bounds coincide.
    pub fn interval_with(
        left: impl Into<Entity>,
        right: impl Into<Entity>,
        left_closed: bool,
        right_closed: bool,
    ) -> Result<Self> {
        let piece = SetPiece::Interval(Interval::real(left, right, left_closed, right_closed)?);
        Ok(SetNode::Concrete(Set::from_pieces([piece])))
    }

    /// An interval between two arbitrary edges of the complex plane.
    ///
    /// # Errors
    /// [`SetError::DegenerateInterval`] when the bounds coincide.
    pub fn interval_edges(left: Edge, right: Edge) -> Result<Self> {
        let piece = SetPiece::Interval(Interval::new(left, right)?);
        Ok(SetNode::Concrete(Set::from_pieces([piece])))
    }

    /// The real line.
    pub fn reals() -> Self {
        SetNode::Concrete(Set::reals())
    }

    /// The whole complex plane.
    pub fn complexes() -> Self {
        SetNode::Concrete(Set::complexes())
    }

    /// The set-builder form `{ var : predicate }`.
    pub fn conditional(var: impl Into<String>, predicate: Entity) -> Self {
        SetNode::Conditional(ConditionalSet::new(var, predicate))
    }

    /// Builds the lazy intersection of two trees.
    pub fn intersect(self, other: SetNode) -> SetNode {
        SetNode::Intersection(Box::new(self), Box::new(other))
    }

    /// Builds the lazy union of two trees.
    pub fn unite(self, other: SetNode) -> SetNode {
        SetNode::Union(Box::new(self), Box::new(other))
    }

    /// Builds the lazy difference `self \ other`.
    pub fn set_subtract(self, other: SetNode) -> SetNode {
        SetNode::Complement(Box::new(self), Box::new(other))
    }

    /// Builds the lazy complement against the complex plane.
    pub fn invert(self) -> SetNode {
        SetNode::Inversion(Box::new(self))
    }

    /// Evaluates the tree with a default-configured [`Evaluator`].
    ///
    /// # Errors
    /// [`SetError::DepthExceeded`] on trees deeper than the default
    /// limit.
    pub fn eval(&self) -> Result<SetNode> {
        Evaluator::default().eval(self)
    }

    /// Tri-state membership of a single entity, without evaluating.
    pub fn try_contains(&self, entity: &Entity) -> Ternary {
        self.try_contains_piece(&SetPiece::element(entity.clone()))
    }

    /// Tri-state containment of a whole piece: Kleene logic over the
    /// operator structure, leaf queries at concrete and conditional sets.
    pub fn try_contains_piece(&self, piece: &SetPiece) -> Ternary {
        match self {
            SetNode::Concrete(set) => set.try_contains_piece(piece),
            SetNode::Conditional(cond) => match piece {
                SetPiece::Element(e) => cond.try_contains(e),
                SetPiece::Interval(_) => Ternary::Unknown,
            },
            SetNode::Union(a, b) => a.try_contains_piece(piece) | b.try_contains_piece(piece),
            SetNode::Intersection(a, b) => {
                a.try_contains_piece(piece) & b.try_contains_piece(piece)
            }
            SetNode::Complement(a, b) => a.try_contains_piece(piece) & !b.try_contains_piece(piece),
            SetNode::Inversion(a) => !a.try_contains_piece(piece),
        }
    }

    /// Two-valued membership; `Unknown` collapses to `false`.
    pub fn contains(&self, entity: &Entity) -> bool {
        self.try_contains(entity).is_true()
    }

    /// Membership that refuses to guess.
    ///
    /// # Errors
    /// [`SetError::Ambiguous`] when membership cannot be decided.
    pub fn contains_decided(&self, entity: &Entity) -> Result<bool> {
        match self.try_contains(entity) {
            Ternary::True => Ok(true),
            Ternary::False => Ok(false),
            Ternary::Unknown => Err(SetError::Ambiguous),
        }
    }

    /// Whether the tree denotes a finite set. Operator nodes answer with
    /// what the structure alone guarantees: a union is finite only if
    /// both sides are (and infinite as soon as one side is infinite),
    /// an intersection is finite if either side is.
    pub fn is_finite(&self) -> Ternary {
        match self {
            SetNode::Concrete(set) => Ternary::from_bool(set.is_finite()),
            SetNode::Conditional(_) => Ternary::Unknown,
            SetNode::Union(a, b) => a.is_finite() & b.is_finite(),
            SetNode::Intersection(a, b) => match (a.is_finite(), b.is_finite()) {
                (Ternary::True, _) | (_, Ternary::True) => Ternary::True,
                _ => Ternary::Unknown,
            },
            SetNode::Complement(a, _) => match a.is_finite() {
                Ternary::True => Ternary::True,
                _ => Ternary::Unknown,
            },
            SetNode::Inversion(_) => Ternary::Unknown,
        }
    }

    /// Whether the tree denotes the empty set, as far as the structure
    /// shows without evaluation.
    pub fn is_empty(&self) -> Ternary {
        match self {
            SetNode::Concrete(set) => Ternary::from_bool(set.is_empty()),
            SetNode::Conditional(cond) => cond.is_empty(),
            SetNode::Union(a, b) => a.is_empty() & b.is_empty(),
            SetNode::Intersection(a, b) => {
                if a.is_empty().is_true() || b.is_empty().is_true() {
                    Ternary::True
                } else {
                    Ternary::Unknown
                }
            }
            SetNode::Complement(a, _) => {
                if a.is_empty().is_true() {
                    Ternary::True
                } else {
                    Ternary::Unknown
                }
            }
            SetNode::Inversion(_) => Ternary::Unknown,
        }
    }

    /// The element count, when the node is a concrete finite set.
    pub fn count(&self) -> Option<usize> {
        match self {
            SetNode::Concrete(set) => set.count(),
            _ => None,
        }
    }

    /// Projects a concrete finite node to its elements.
    ///
    /// # Errors
    /// [`SetError::NonFinite`] for interval-bearing or unevaluated
    /// operator nodes.
    pub fn as_finite_set(&self) -> Result<Vec<Entity>> {
        match self {
            SetNode::Concrete(set) => set.as_finite_set(),
            _ => Err(SetError::NonFinite),
        }
    }

    /// Borrows the concrete set when the node is a leaf.
    pub fn as_set(&self) -> Option<&Set> {
        match self {
            SetNode::Concrete(set) => Some(set),
            _ => None,
        }
    }
}

impl From<Set> for SetNode {
    fn from(set: Set) -> Self {
        SetNode::Concrete(set)
    }
}

impl From<ConditionalSet> for SetNode {
    fn from(cond: ConditionalSet) -> Self {
        SetNode::Conditional(cond)
    }
}

impl ops::BitAnd for SetNode {
    type Output = SetNode;
    fn bitand(self, rhs: SetNode) -> SetNode {
        self.intersect(rhs)
    }
}

impl ops::BitOr for SetNode {
    type Output = SetNode;
    fn bitor(self, rhs: SetNode) -> SetNode {
        self.unite(rhs)
    }
}

impl ops::Sub for SetNode {
    type Output = SetNode;
    fn sub(self, rhs: SetNode) -> SetNode {
        self.set_subtract(rhs)
    }
}

impl ops::Not for SetNode {
    type Output = SetNode;
    fn not(self) -> SetNode {
        self.invert()
    }
}

impl fmt::Display for SetNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetNode::Concrete(set) => write!(f, "{set}"),
            SetNode::Conditional(cond) => write!(f, "{cond}"),
            SetNode::Union(a, b) => write!(f, "({a}) \\/ ({b})"),
            SetNode::Intersection(a, b) => write!(f, "({a}) /\\ ({b})"),
            SetNode::Complement(a, b) => write!(f, "({a}) \\ ({b})"),
            SetNode::Inversion(a) => write!(f, "!({a})"),
        }
    }
}
