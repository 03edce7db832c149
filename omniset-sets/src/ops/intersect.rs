//! Piece Intersection.
//!
//! ## Algorithm
//!
//! Intersection of two rectangular regions is computed axis by axis: the
//! result's lower bound is the greater of the two lower bounds, the upper
//! bound the lesser of the two upper bounds. When bounds tie, the
//! resulting edge is closed only if both tying edges are closed. A
//! cheap disjointness pre-check on each axis rejects non-overlapping
//! pairs before any edge is built.

use super::{piece_from_edges, sorted_bounds, EvEdge};
use crate::piece::SetPiece;
use omniset_core::{Complex, Real};

/// Intersects two pieces. Returns `None` when the intersection is empty
/// or when either piece has a symbolic bound.
pub fn intersect_pieces(a: &SetPiece, b: &SetPiece) -> Option<SetPiece> {
    if a == b {
        return Some(a.clone());
    }
    let (lo1, up1) = sorted_bounds(a)?;
    let (lo2, up2) = sorted_bounds(b)?;

    if axis_disjoint(
        (&lo1.z.re, lo1.re_closed),
        (&up1.z.re, up1.re_closed),
        (&lo2.z.re, lo2.re_closed),
        (&up2.z.re, up2.re_closed),
    ) || axis_disjoint(
        (&lo1.z.im, lo1.im_closed),
        (&up1.z.im, up1.im_closed),
        (&lo2.z.im, lo2.im_closed),
        (&up2.z.im, up2.im_closed),
    ) {
        return None;
    }

    let (re_lo, re_lo_c) = tighter_lower((&lo1.z.re, lo1.re_closed), (&lo2.z.re, lo2.re_closed));
    let (re_up, re_up_c) = tighter_upper((&up1.z.re, up1.re_closed), (&up2.z.re, up2.re_closed));
    let (im_lo, im_lo_c) = tighter_lower((&lo1.z.im, lo1.im_closed), (&lo2.z.im, lo2.im_closed));
    let (im_up, im_up_c) = tighter_upper((&up1.z.im, up1.im_closed), (&up2.z.im, up2.im_closed));

    piece_from_edges(
        EvEdge::new(Complex::new(re_lo, im_lo), re_lo_c, im_lo_c),
        EvEdge::new(Complex::new(re_up, im_up), re_up_c, im_up_c),
    )
}

/// Whether two 1-D ranges cannot overlap: one starts strictly after the
/// other ends, or they touch at a single value not covered by both sides.
fn axis_disjoint(
    lo1: (&Real, bool),
    up1: (&Real, bool),
    lo2: (&Real, bool),
    up2: (&Real, bool),
) -> bool {
    beyond(lo1, up2) || beyond(lo2, up1)
}

fn beyond(lo: (&Real, bool), up: (&Real, bool)) -> bool {
    lo.0 > up.0 || (lo.0 == up.0 && !(lo.1 && up.1))
}

fn tighter_lower((v1, c1): (&Real, bool), (v2, c2): (&Real, bool)) -> (Real, bool) {
    if v1 == v2 {
        (v1.clone(), c1 && c2)
    } else if v1 > v2 {
        (v1.clone(), c1)
    } else {
        (v2.clone(), c2)
    }
}

fn tighter_upper((v1, c1): (&Real, bool), (v2, c2): (&Real, bool)) -> (Real, bool) {
    if v1 == v2 {
        (v1.clone(), c1 && c2)
    } else if v1 < v2 {
        (v1.clone(), c1)
    } else {
        (v2.clone(), c2)
    }
}
