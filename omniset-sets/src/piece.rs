//! Set Pieces.
//!
//! A piece is a single contiguous chunk of a set: either one element or
//! one interval. An interval's two edges may describe a rectangular
//! region of the complex plane (independent real/imaginary closedness per
//! edge); the ordinary 1-D real interval is the degenerate rectangle whose
//! imaginary range is `[0; 0]`.
//!
//! No ordering invariant is enforced between the left and right edge
//! values; algorithms that need ordering sort the evaluated edges lazily.
//! Display always shows left edge then right edge as given.

use crate::edge::Edge;
use crate::error::{Result, SetError};
use omniset_core::{Complex, Entity, Real};
use std::fmt;

/// An interval between two edges.
///
/// Invariant: the two boundary entities differ; an interval collapsing to
/// a single point must be a [`SetPiece::Element`] instead.
#[derive(Debug, Clone)]
pub struct Interval {
    left: Edge,
    right: Edge,
}

impl Interval {
    /// Builds an interval from two edges.
    ///
    /// # Errors
    /// Returns [`SetError::DegenerateInterval`] if the boundary entities
    /// are equal.
    pub fn new(left: Edge, right: Edge) -> Result<Self> {
        if bounds_equal(&left, &right) {
            return Err(SetError::DegenerateInterval(left.bound.to_string()));
        }
        Ok(Self { left, right })
    }

    /// Builds a real-axis closed interval `[left; right]`.
    pub fn closed(left: impl Into<Entity>, right: impl Into<Entity>) -> Result<Self> {
        Self::new(Edge::closed(left), Edge::closed(right))
    }

    /// Builds a real-axis interval with explicit real closedness flags
    /// (imaginary axis closed, as for any 1-D real interval).
    pub fn real(
        left: impl Into<Entity>,
        right: impl Into<Entity>,
        left_closed: bool,
        right_closed: bool,
    ) -> Result<Self> {
        Self::new(
            Edge::new(left, left_closed, true),
            Edge::new(right, right_closed, true),
        )
    }

    /// The left edge as given at construction.
    pub fn left(&self) -> &Edge {
        &self.left
    }

    /// The right edge as given at construction.
    pub fn right(&self) -> &Edge {
        &self.right
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}; {}{}",
            if self.left.re_closed { "[" } else { "(" },
            self.left,
            self.right,
            if self.right.re_closed { "]" } else { ")" },
        )
    }
}

/// A single contiguous chunk of a set.
#[derive(Debug, Clone)]
pub enum SetPiece {
    /// A single point.
    Element(Entity),
    /// A contiguous region between two edges.
    Interval(Interval),
}

impl SetPiece {
    /// Builds a one-element piece.
    pub fn element(entity: impl Into<Entity>) -> Self {
        SetPiece::Element(entity.into())
    }

    /// Chooses between an element and an interval depending on whether the
    /// two edge bounds coincide.
    pub fn element_or_interval(left: Edge, right: Edge) -> SetPiece {
        if bounds_equal(&left, &right) {
            SetPiece::Element(left.bound)
        } else {
            SetPiece::Interval(Interval { left, right })
        }
    }

    /// The lower bound edge. For an element both bounds are the entity
    /// itself, closed on both axes.
    pub fn lower_bound(&self) -> Edge {
        match self {
            SetPiece::Element(e) => Edge::closed(e.clone()),
            SetPiece::Interval(i) => i.left.clone(),
        }
    }

    /// The upper bound edge.
    pub fn upper_bound(&self) -> Edge {
        match self {
            SetPiece::Element(e) => Edge::closed(e.clone()),
            SetPiece::Interval(i) => i.right.clone(),
        }
    }

    /// Whether both bound entities are numerically evaluable.
    pub fn is_evaluable(&self) -> bool {
        match self {
            SetPiece::Element(e) => e.is_evaluable(),
            SetPiece::Interval(i) => i.left.is_evaluable() && i.right.is_evaluable(),
        }
    }

    /// Whether `piece`, treated as the full range between its two bounds,
    /// lies entirely within `self`.
    ///
    /// Requires all four bound entities to be evaluable; returns `false`
    /// otherwise ("cannot prove membership" is treated as "not contained"
    /// at this level; see [`crate::Set::try_contains`] for the tri-state
    /// entry point).
    pub fn contains(&self, piece: &SetPiece) -> bool {
        let (Some(lo), Some(up)) = (self.lower_bound().evaled(), self.upper_bound().evaled())
        else {
            return false;
        };
        let (Some(p_lo), Some(p_up)) = (piece.lower_bound().evaled(), piece.upper_bound().evaled())
        else {
            return false;
        };
        let lo_edge = self.lower_bound();
        let up_edge = self.upper_bound();
        let p_lo_edge = piece.lower_bound();
        let p_up_edge = piece.upper_bound();

        let admits = |num: &Complex, num_re_closed: bool, num_im_closed: bool| {
            in_between(
                &lo.re,
                &up.re,
                lo_edge.re_closed,
                up_edge.re_closed,
                &num.re,
                num_re_closed,
            ) && in_between(
                &lo.im,
                &up.im,
                lo_edge.im_closed,
                up_edge.im_closed,
                &num.im,
                num_im_closed,
            )
        };
        admits(&p_lo, p_lo_edge.re_closed, p_lo_edge.im_closed)
            && admits(&p_up, p_up_edge.re_closed, p_up_edge.im_closed)
    }
}

/// Whether `num` lies between `a` and `b` (swapped if `a > b`), honoring
/// the asymmetric open/closed admission rule: a boundary value counts as
/// inside only if the boundary is closed or the query point is itself
/// open at that value.
fn in_between(a: &Real, b: &Real, closed_a: bool, closed_b: bool, num: &Real, closed_num: bool) -> bool {
    if num == a && (closed_a || !closed_num) {
        return true;
    }
    if num == b && (closed_b || !closed_num) {
        return true;
    }
    let (lo, hi) = if a > b { (b, a) } else { (a, b) };
    num > lo && num < hi
}

fn bounds_equal(a: &Edge, b: &Edge) -> bool {
    match (a.evaled(), b.evaled()) {
        (Some(x), Some(y)) => x == y,
        _ => a.bound == b.bound,
    }
}

impl PartialEq for SetPiece {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SetPiece::Element(a), SetPiece::Element(b)) => match (a.evaled(), b.evaled()) {
                (Some(x), Some(y)) => x == y,
                _ => a == b,
            },
            (SetPiece::Interval(a), SetPiece::Interval(b)) => {
                a.left.same_as(&b.left) && a.right.same_as(&b.right)
            }
            _ => false,
        }
    }
}

impl Eq for SetPiece {}

impl fmt::Display for SetPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetPiece::Element(e) => write!(f, "{{{e}}}"),
            SetPiece::Interval(i) => write!(f, "{i}"),
        }
    }
}

impl<T: Into<Entity>> From<T> for SetPiece {
    fn from(value: T) -> Self {
        SetPiece::Element(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(l: i64, r: i64, lc: bool, rc: bool) -> SetPiece {
        SetPiece::Interval(Interval::real(l, r, lc, rc).unwrap())
    }

    #[test]
    fn test_degenerate_interval_rejected() {
        assert!(matches!(
            Interval::closed(1, 1),
            Err(SetError::DegenerateInterval(_))
        ));
        // the element form succeeds
        let p = SetPiece::element(1);
        assert_eq!(p.lower_bound().bound, Entity::from(1));
    }

    #[test]
    fn test_element_bounds_closed() {
        let p = SetPiece::element(5);
        let lo = p.lower_bound();
        let up = p.upper_bound();
        assert!(lo.re_closed && lo.im_closed);
        assert!(lo.same_as(&up));
    }

    #[test]
    fn test_element_or_interval_collapses() {
        let p = SetPiece::element_or_interval(Edge::closed(4), Edge::closed(4));
        assert!(matches!(p, SetPiece::Element(_)));
        let q = SetPiece::element_or_interval(Edge::closed(4), Edge::closed(5));
        assert!(matches!(q, SetPiece::Interval(_)));
    }

    #[test]
    fn test_closed_interval_contains_endpoints() {
        let p = interval(0, 10, true, true);
        assert!(p.contains(&SetPiece::element(0)));
        assert!(p.contains(&SetPiece::element(10)));
        assert!(p.contains(&SetPiece::element(5)));
        assert!(!p.contains(&SetPiece::element(11)));
    }

    #[test]
    fn test_open_interval_excludes_endpoints() {
        let p = interval(0, 10, false, false);
        assert!(!p.contains(&SetPiece::element(0)));
        assert!(!p.contains(&SetPiece::element(10)));
        assert!(p.contains(&SetPiece::element(5)));
    }

    #[test]
    fn test_open_endpoint_admits_open_enclosed_piece() {
        // (2; 3) is inside (2; 5): the open query edge at 2 is admitted by
        // the open boundary at 2
        let outer = interval(2, 5, false, false);
        let inner = interval(2, 3, false, false);
        assert!(outer.contains(&inner));
        // but the closed endpoint sitting exactly on the open boundary is not
        let closed_inner = interval(2, 3, true, false);
        assert!(!outer.contains(&closed_inner));
    }

    #[test]
    fn test_symbolic_contains_is_conservative() {
        let sym = SetPiece::Interval(
            Interval::new(Edge::closed(Entity::var("x")), Edge::closed(10)).unwrap(),
        );
        assert!(!sym.contains(&SetPiece::element(5)));
        let num = interval(0, 10, true, true);
        assert!(!num.contains(&SetPiece::element(Entity::var("y"))));
    }

    #[test]
    fn test_piece_equality_is_evaluated() {
        use num_rational::BigRational;
        let two = SetPiece::element(2);
        let four_halves =
            SetPiece::element(Entity::from(Real::from(BigRational::new(4.into(), 2.into()))));
        assert_eq!(two, four_halves);
        assert_ne!(interval(0, 1, true, true), interval(0, 1, true, false));
        assert_ne!(two, interval(0, 1, true, true));
    }

    #[test]
    fn test_display() {
        assert_eq!(interval(0, 10, true, false).to_string(), "[0; 10)");
        assert_eq!(interval(0, 10, false, false).to_string(), "(0; 10)");
        assert_eq!(SetPiece::element(3).to_string(), "{3}");
    }
}
