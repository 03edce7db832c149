//! Piece Subtraction.
//!
//! ## Algorithm
//!
//! `A \ B` is `A` intersected with each piece of the inversion of `B`;
//! since the inversion is a disjoint cover of everything outside `B`, the
//! surviving intersections are exactly `A` minus `B`, already disjoint.

use super::{intersect_pieces, invert_piece};
use crate::piece::SetPiece;
use smallvec::{smallvec, SmallVec};

/// Subtracts `b` from `a`, returning the remaining pieces. Equal pieces
/// cancel exactly; a symbolic bound on either side leaves `a` untouched
/// (the caller is responsible for deferring the subtraction).
pub fn subtract_pieces(a: &SetPiece, b: &SetPiece) -> SmallVec<[SetPiece; 4]> {
    if a == b {
        return smallvec![];
    }
    let Some(inverted) = invert_piece(b) else {
        return smallvec![a.clone()];
    };
    if !a.is_evaluable() {
        return smallvec![a.clone()];
    }
    inverted
        .iter()
        .filter_map(|p| intersect_pieces(a, p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Interval;
    use omniset_core::Entity;

    fn interval(l: i64, r: i64, lc: bool, rc: bool) -> SetPiece {
        SetPiece::Interval(Interval::real(l, r, lc, rc).unwrap())
    }

    #[test]
    fn test_carve_middle() {
        let rem = subtract_pieces(&interval(0, 10, true, true), &interval(3, 7, true, true));
        let shown: Vec<String> = rem.iter().map(|p| p.to_string()).collect();
        assert_eq!(shown, vec!["[0; 3)", "(7; 10]"]);
    }

    #[test]
    fn test_exact_cancel() {
        assert!(subtract_pieces(&interval(0, 10, true, false), &interval(0, 10, true, false))
            .is_empty());
    }

    #[test]
    fn test_subtract_half_open_leaves_endpoint() {
        // [3; 4] minus [3; 4) is the point {4}
        let rem = subtract_pieces(&interval(3, 4, true, true), &interval(3, 4, true, false));
        assert_eq!(rem.len(), 1);
        assert_eq!(rem[0], SetPiece::element(4));
    }

    #[test]
    fn test_subtract_element() {
        let rem = subtract_pieces(&interval(0, 10, true, true), &SetPiece::element(5));
        let shown: Vec<String> = rem.iter().map(|p| p.to_string()).collect();
        assert_eq!(shown, vec!["[0; 5)", "(5; 10]"]);
    }

    #[test]
    fn test_disjoint_leaves_input() {
        let a = interval(0, 2, true, true);
        let rem = subtract_pieces(&a, &interval(5, 9, true, true));
        assert_eq!(rem.len(), 1);
        assert_eq!(rem[0], a);
    }

    #[test]
    fn test_symbolic_left_untouched() {
        let a = interval(0, 10, true, true);
        let sym = SetPiece::element(Entity::var("x"));
        let rem = subtract_pieces(&a, &sym);
        assert_eq!(rem.len(), 1);
        assert_eq!(rem[0], a);
        let rem = subtract_pieces(&sym, &a);
        assert_eq!(rem.len(), 1);
        assert_eq!(rem[0], sym);
    }
}
