//! Piece Inversion.
//!
//! ## Algorithm
//!
//! The complement of a rectangular region within the whole complex plane
//! is covered by four half-open quadrant pieces arranged pinwheel-style
//! around the rectangle: below (`re <= hi.re`, `im < lo.im`), left
//! (`re < lo.re`, `im >= lo.im`), above (`re >= lo.re`, `im > hi.im`) and
//! right (`re > hi.re`, `im <= hi.im`). Each quadrant closes exactly one
//! rectangle-facing side, so the four never intersect and never touch the
//! rectangle's boundary. Every open side of the rectangle then yields one
//! boundary line piece; horizontal lines give up an end wherever a
//! vertical line already owns the corner, keeping the whole output
//! disjoint.

use super::{piece_from_edges, sorted_bounds, EvEdge};
use crate::piece::SetPiece;
use omniset_core::Complex;

/// Inverts a piece against the whole complex plane, producing a disjoint
/// list of pieces covering everything outside it. Returns `None` when the
/// piece has a symbolic bound.
pub fn invert_piece(piece: &SetPiece) -> Option<Vec<SetPiece>> {
    let (lo, up) = sorted_bounds(piece)?;
    let left_down = Complex::new(lo.z.re.clone(), lo.z.im.clone());
    let left_up = Complex::new(lo.z.re.clone(), up.z.im.clone());
    let right_down = Complex::new(up.z.re.clone(), lo.z.im.clone());
    let right_up = Complex::new(up.z.re.clone(), up.z.im.clone());

    let mut out = Vec::with_capacity(8);
    let mut push = |l: EvEdge, u: EvEdge| {
        if let Some(p) = piece_from_edges(l, u) {
            out.push(p);
        }
    };

    push(
        EvEdge::new(right_down.clone(), true, false),
        EvEdge::new(Complex::neg_neg_infinity(), false, false),
    );
    push(
        EvEdge::new(left_down.clone(), false, true),
        EvEdge::new(Complex::neg_pos_infinity(), false, false),
    );
    push(
        EvEdge::new(left_up.clone(), true, false),
        EvEdge::new(Complex::pos_pos_infinity(), false, false),
    );
    push(
        EvEdge::new(right_up.clone(), false, true),
        EvEdge::new(Complex::pos_neg_infinity(), false, false),
    );

    if !lo.re_closed {
        push(
            EvEdge::new(left_down.clone(), true, true),
            EvEdge::new(left_up.clone(), true, true),
        );
    }
    if !up.re_closed {
        push(
            EvEdge::new(right_down.clone(), true, true),
            EvEdge::new(right_up.clone(), true, true),
        );
    }
    if !lo.im_closed {
        push(
            EvEdge::new(left_down, lo.re_closed, true),
            EvEdge::new(right_down, up.re_closed, true),
        );
    }
    if !up.im_closed {
        push(
            EvEdge::new(left_up, lo.re_closed, true),
            EvEdge::new(right_up, up.re_closed, true),
        );
    }

    Some(out)
}
