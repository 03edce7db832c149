//! Piece Union.
//!
//! ## Algorithm
//!
//! Two pieces merge into one only in the 1-D case: both must be segments
//! of the same horizontal line (degenerate, closed imaginary range at the
//! same height) with concrete bounds, and their real ranges must overlap
//! or touch at a covered point. The merged range runs from the lesser low
//! to the greater high; when lows or highs tie, the merged edge is closed
//! if either tying edge is closed.

use super::{sorted_bounds, EvEdge};
use crate::piece::SetPiece;
use omniset_core::{Complex, Real};

/// Attempts to merge two pieces into a single one. Returns `None` when
/// they cannot be represented as one piece (disjoint with a gap, genuinely
/// 2-D, or symbolic).
pub fn unite_pieces(a: &SetPiece, b: &SetPiece) -> Option<SetPiece> {
    let (a_lo, a_lo_c, a_hi, a_hi_c, a_im) = real_range(a)?;
    let (b_lo, b_lo_c, b_hi, b_hi_c, b_im) = real_range(b)?;
    if a_im != b_im {
        return None;
    }

    let touch_lo = if a_lo > b_lo { &a_lo } else { &b_lo };
    let touch_hi = if a_hi < b_hi { &a_hi } else { &b_hi };
    if touch_lo > touch_hi {
        return None;
    }
    if touch_lo == touch_hi {
        let t = touch_lo;
        let covered = |lo: &Real, lo_c: bool, hi: &Real, hi_c: bool| {
            (lo == t && lo_c) || (hi == t && hi_c) || (lo < t && t < hi)
        };
        if !covered(&a_lo, a_lo_c, &a_hi, a_hi_c) && !covered(&b_lo, b_lo_c, &b_hi, b_hi_c) {
            return None;
        }
    }

    let (lo, lo_c) = wider_lower((&a_lo, a_lo_c), (&b_lo, b_lo_c));
    let (hi, hi_c) = wider_upper((&a_hi, a_hi_c), (&b_hi, b_hi_c));
    let left = EvEdge::new(Complex::new(lo, a_im.clone()), lo_c, true);
    let right = EvEdge::new(Complex::new(hi, a_im), hi_c, true);
    super::piece_from_edges(left, right)
}

/// Projects a piece onto (real low, low closed, real high, high closed,
/// imaginary height); `None` unless the piece is a concrete horizontal
/// segment or point.
fn real_range(piece: &SetPiece) -> Option<(Real, bool, Real, bool, Real)> {
    let (lo, up) = sorted_bounds(piece)?;
    if lo.z.im != up.z.im || !lo.im_closed || !up.im_closed {
        return None;
    }
    Some((lo.z.re, lo.re_closed, up.z.re, up.re_closed, lo.z.im))
}

fn wider_lower((v1, c1): (&Real, bool), (v2, c2): (&Real, bool)) -> (Real, bool) {
    if v1 == v2 {
        (v1.clone(), c1 || c2)
    } else if v1 < v2 {
        (v1.clone(), c1)
    } else {
        (v2.clone(), c2)
    }
}

fn wider_upper((v1, c1): (&Real, bool), (v2, c2): (&Real, bool)) -> (Real, bool) {
    if v1 == v2 {
        (v1.clone(), c1 || c2)
    } else if v1 > v2 {
        (v1.clone(), c1)
    } else {
        (v2.clone(), c2)
    }
}
