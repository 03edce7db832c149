//! Piece-Pair and Finite-Set Operators.
//!
//! The geometric core of the engine: binary operators combining two
//! pieces (or a finite set with another set) into a piece list. All piece
//! geometry runs on evaluated, per-axis-sorted edges; operators detecting
//! a symbolic bound defer to the caller instead of guessing.

mod finite;
mod intersect;
mod invert;
mod subtract;
mod unite;

pub use finite::{
    intersect_finite_and_set, subtract_finite_and_set, subtract_set_and_finite,
    unite_finite_and_set,
};
pub use intersect::intersect_pieces;
pub use invert::invert_piece;
pub use subtract::subtract_pieces;
pub use unite::unite_pieces;

use crate::edge::Edge;
use crate::piece::SetPiece;
use omniset_core::{Complex, Entity, Real};

/// An evaluated edge: a concrete point plus the two closedness flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EvEdge {
    pub z: Complex,
    pub re_closed: bool,
    pub im_closed: bool,
}

impl EvEdge {
    pub(crate) fn new(z: Complex, re_closed: bool, im_closed: bool) -> Self {
        Self {
            z,
            re_closed,
            im_closed,
        }
    }
}

/// Evaluates both bounds of a piece and sorts them per axis, swapping the
/// per-axis closedness flags along with the values. Returns `None` if
/// either bound is symbolic.
pub(crate) fn sorted_bounds(piece: &SetPiece) -> Option<(EvEdge, EvEdge)> {
    let lo_edge = piece.lower_bound();
    let up_edge = piece.upper_bound();
    let lo = lo_edge.evaled()?;
    let up = up_edge.evaled()?;

    let (mut lo_re, mut up_re) = (lo.re, up.re);
    let (mut lo_re_c, mut up_re_c) = (lo_edge.re_closed, up_edge.re_closed);
    if lo_re > up_re {
        std::mem::swap(&mut lo_re, &mut up_re);
        std::mem::swap(&mut lo_re_c, &mut up_re_c);
    }

    let (mut lo_im, mut up_im) = (lo.im, up.im);
    let (mut lo_im_c, mut up_im_c) = (lo_edge.im_closed, up_edge.im_closed);
    if lo_im > up_im {
        std::mem::swap(&mut lo_im, &mut up_im);
        std::mem::swap(&mut lo_im_c, &mut up_im_c);
    }

    Some((
        EvEdge::new(Complex::new(lo_re, lo_im), lo_re_c, lo_im_c),
        EvEdge::new(Complex::new(up_re, up_im), up_re_c, up_im_c),
    ))
}

/// Whether a pair of evaluated edges describes a non-empty region. An
/// axis collapsed to a single value must be closed on both sides, and a
/// region degenerated onto an infinite coordinate is empty (there is no
/// point at infinity).
pub(crate) fn edges_form_region(lo: &EvEdge, up: &EvEdge) -> bool {
    axis_ok(&lo.z.re, lo.re_closed, &up.z.re, up.re_closed)
        && axis_ok(&lo.z.im, lo.im_closed, &up.z.im, up.im_closed)
}

fn axis_ok(lo: &Real, lo_closed: bool, up: &Real, up_closed: bool) -> bool {
    if lo == up {
        lo.is_finite() && lo_closed && up_closed
    } else {
        true
    }
}

/// Builds a piece from evaluated edges, filtering empty regions.
pub(crate) fn piece_from_edges(lo: EvEdge, up: EvEdge) -> Option<SetPiece> {
    if !edges_form_region(&lo, &up) {
        return None;
    }
    Some(SetPiece::element_or_interval(
        Edge::new(Entity::Number(lo.z), lo.re_closed, lo.im_closed),
        Edge::new(Entity::Number(up.z), up.re_closed, up.im_closed),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Interval;

    #[test]
    fn test_sorted_bounds_swaps_per_axis() {
        // bounds given in reverse order on the real axis
        let p = SetPiece::Interval(Interval::real(10, 0, false, true).unwrap());
        let (lo, up) = sorted_bounds(&p).unwrap();
        assert_eq!(lo.z, Complex::from(0));
        assert_eq!(up.z, Complex::from(10));
        // flags travel with the values
        assert!(lo.re_closed);
        assert!(!up.re_closed);
    }

    #[test]
    fn test_sorted_bounds_symbolic() {
        let p = SetPiece::Interval(
            Interval::new(
                crate::edge::Edge::closed(Entity::var("x")),
                crate::edge::Edge::closed(3),
            )
            .unwrap(),
        );
        assert!(sorted_bounds(&p).is_none());
    }

    #[test]
    fn test_degenerate_open_axis_is_empty() {
        let lo = EvEdge::new(Complex::from(3), true, true);
        let up = EvEdge::new(Complex::from(3), false, true);
        assert!(piece_from_edges(lo, up).is_none());
    }

    #[test]
    fn test_degenerate_infinite_axis_is_empty() {
        let lo = EvEdge::new(Complex::new(Real::NegInfinity, Real::zero()), true, true);
        let up = EvEdge::new(Complex::new(Real::NegInfinity, Real::from(5)), true, true);
        assert!(piece_from_edges(lo, up).is_none());
    }

    #[test]
    fn test_point_region_becomes_element() {
        let lo = EvEdge::new(Complex::from(4), true, true);
        let up = EvEdge::new(Complex::from(4), true, true);
        let piece = piece_from_edges(lo, up).unwrap();
        assert!(matches!(piece, SetPiece::Element(_)));
    }
}
