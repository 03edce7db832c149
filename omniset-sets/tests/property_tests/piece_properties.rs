//! Property-based tests for the piece-pair operators.

use omniset_core::{Complex, Entity, Real};
use omniset_sets::ops::{intersect_pieces, invert_piece, subtract_pieces, unite_pieces};
use omniset_sets::{Interval, SetPiece};
use proptest::prelude::*;

/// Strategy for a real interval with distinct integer bounds and random
/// endpoint closedness.
fn interval_strategy() -> impl Strategy<Value = SetPiece> {
    (-50i64..50, 1i64..30, any::<bool>(), any::<bool>()).prop_map(|(lo, len, lc, rc)| {
        SetPiece::Interval(Interval::real(lo, lo + len, lc, rc).expect("distinct bounds"))
    })
}

/// Strategy for either an interval or a single integer point.
fn piece_strategy() -> impl Strategy<Value = SetPiece> {
    prop_oneof![
        interval_strategy(),
        (-50i64..50).prop_map(SetPiece::element),
    ]
}

fn point(re: i64) -> SetPiece {
    SetPiece::element(Entity::Number(Complex::new(Real::from(re), Real::zero())))
}

proptest! {
    /// Intersection does not depend on operand order.
    #[test]
    fn intersection_commutes(a in piece_strategy(), b in piece_strategy()) {
        prop_assert_eq!(intersect_pieces(&a, &b), intersect_pieces(&b, &a));
    }

    /// The intersection lies inside both operands.
    #[test]
    fn intersection_is_inside_both(a in piece_strategy(), b in piece_strategy()) {
        if let Some(meet) = intersect_pieces(&a, &b) {
            prop_assert!(a.contains(&meet), "{} not inside {}", meet, a);
            prop_assert!(b.contains(&meet), "{} not inside {}", meet, b);
        }
    }

    /// Point membership of the intersection agrees with membership of
    /// both operands.
    #[test]
    fn intersection_membership(a in piece_strategy(), b in piece_strategy(), p in -60i64..60) {
        let q = point(p);
        let in_meet = intersect_pieces(&a, &b)
            .map(|m| m.contains(&q))
            .unwrap_or(false);
        prop_assert_eq!(in_meet, a.contains(&q) && b.contains(&q));
    }

    /// Subtracting a piece from itself leaves nothing.
    #[test]
    fn subtraction_of_self_is_empty(a in piece_strategy()) {
        prop_assert!(subtract_pieces(&a, &a).is_empty());
    }

    /// Point membership of the difference is membership in the left
    /// operand and not the right.
    #[test]
    fn subtraction_membership(a in piece_strategy(), b in piece_strategy(), p in -60i64..60) {
        let q = point(p);
        let in_diff = subtract_pieces(&a, &b).iter().any(|r| r.contains(&q));
        prop_assert_eq!(in_diff, a.contains(&q) && !b.contains(&q));
    }

    /// Every real point is either in a piece or in its inversion, never
    /// both.
    #[test]
    fn inversion_partitions_the_plane(a in piece_strategy(), p in -60i64..60) {
        let q = point(p);
        let inverted = invert_piece(&a).expect("concrete piece");
        let outside = inverted.iter().any(|piece| piece.contains(&q));
        prop_assert_ne!(a.contains(&q), outside);
    }

    /// Inversion output is pairwise disjoint.
    #[test]
    fn inversion_is_disjoint(a in piece_strategy()) {
        let inverted = invert_piece(&a).expect("concrete piece");
        for (i, x) in inverted.iter().enumerate() {
            for y in inverted.iter().skip(i + 1) {
                prop_assert!(intersect_pieces(x, y).is_none(), "{} overlaps {}", x, y);
            }
        }
    }

    /// When two pieces merge into one, the merge covers both and adds no
    /// integer point outside their union.
    #[test]
    fn union_merge_is_exact(a in piece_strategy(), b in piece_strategy(), p in -60i64..60) {
        if let Some(merged) = unite_pieces(&a, &b) {
            prop_assert!(merged.contains(&a), "{} lost {}", merged, a);
            prop_assert!(merged.contains(&b), "{} lost {}", merged, b);
            let q = point(p);
            if merged.contains(&q) {
                // no integer point appears from nowhere; points in the gap
                // between touching pieces are covered by one of the two
                prop_assert!(a.contains(&q) || b.contains(&q));
            }
        }
    }
}
