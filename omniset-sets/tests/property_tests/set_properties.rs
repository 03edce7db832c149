//! Property-based tests for the piece-list container and operator trees.

use omniset_sets::ops::intersect_pieces;
use omniset_sets::{Interval, Set, SetNode, SetPiece, Ternary};
use proptest::prelude::*;

fn piece_strategy() -> impl Strategy<Value = SetPiece> {
    prop_oneof![
        (-30i64..30, 1i64..20, any::<bool>(), any::<bool>()).prop_map(|(lo, len, lc, rc)| {
            SetPiece::Interval(Interval::real(lo, lo + len, lc, rc).expect("distinct bounds"))
        }),
        (-30i64..30).prop_map(SetPiece::element),
    ]
}

fn pieces_strategy() -> impl Strategy<Value = Vec<SetPiece>> {
    proptest::collection::vec(piece_strategy(), 1..6)
}

proptest! {
    /// Whatever sequence of pieces is added, the stored pieces never
    /// overlap.
    #[test]
    fn adding_preserves_disjointness(pieces in pieces_strategy()) {
        let set = Set::from_pieces(pieces);
        for (i, a) in set.pieces().iter().enumerate() {
            for b in set.pieces().iter().skip(i + 1) {
                prop_assert!(intersect_pieces(a, b).is_none(), "{} overlaps {}", a, b);
            }
        }
    }

    /// The adding discipline reshapes pieces but never changes
    /// membership.
    #[test]
    fn adding_preserves_membership(pieces in pieces_strategy(), p in -40i64..40) {
        let q = SetPiece::element(p);
        let in_sources = pieces.iter().any(|piece| piece.contains(&q));
        let set = Set::from_pieces(pieces);
        prop_assert_eq!(set.try_contains(&p.into()).decided(), Some(in_sources));
    }

    /// Normalization merges pieces without changing membership.
    #[test]
    fn normalization_preserves_membership(pieces in pieces_strategy(), p in -40i64..40) {
        let set = Set::from_pieces(pieces);
        let norm = set.normalized();
        prop_assert!(norm.pieces().len() <= set.pieces().len());
        prop_assert_eq!(
            set.try_contains(&p.into()),
            norm.try_contains(&p.into())
        );
    }

    /// Evaluated intersection answers membership exactly like the two
    /// operands queried separately.
    #[test]
    fn evaluated_intersection_membership(
        xs in pieces_strategy(),
        ys in pieces_strategy(),
        p in -40i64..40,
    ) {
        let a = SetNode::Concrete(Set::from_pieces(xs));
        let b = SetNode::Concrete(Set::from_pieces(ys));
        let expected = a.try_contains(&p.into()) & b.try_contains(&p.into());
        let result = (a & b).eval().expect("no symbols involved");
        prop_assert_eq!(result.try_contains(&p.into()), expected);
    }

    /// Evaluated subtraction answers membership exactly like the
    /// operands queried separately.
    #[test]
    fn evaluated_subtraction_membership(
        xs in pieces_strategy(),
        ys in pieces_strategy(),
        p in -40i64..40,
    ) {
        let a = SetNode::Concrete(Set::from_pieces(xs));
        let b = SetNode::Concrete(Set::from_pieces(ys));
        let expected = a.try_contains(&p.into()) & !b.try_contains(&p.into());
        let result = (a - b).eval().expect("no symbols involved");
        prop_assert_eq!(result.try_contains(&p.into()), expected);
    }

    /// Union with the empty set changes nothing.
    #[test]
    fn union_with_empty_is_identity(xs in pieces_strategy()) {
        let a = Set::from_pieces(xs);
        let result = (SetNode::Concrete(a.clone()) | SetNode::empty())
            .eval()
            .expect("no symbols involved");
        prop_assert!(result.as_set().expect("concrete").equivalent(&a));
    }

    /// Double inversion evaluates back to an equivalent set.
    #[test]
    fn double_inversion_round_trips(xs in pieces_strategy()) {
        let a = Set::from_pieces(xs);
        let node = SetNode::Concrete(a.clone());
        let twice = (!(!node)).eval().expect("no symbols involved");
        prop_assert!(twice.as_set().expect("concrete").equivalent(&a));
    }

    /// Membership in an unevaluated tree and in its evaluation agree
    /// whenever both are decided.
    #[test]
    fn eval_agrees_with_structural_membership(
        xs in pieces_strategy(),
        ys in pieces_strategy(),
        p in -40i64..40,
    ) {
        let tree = SetNode::Concrete(Set::from_pieces(xs)) | SetNode::Concrete(Set::from_pieces(ys));
        let before = tree.try_contains(&p.into());
        let after = tree.eval().expect("no symbols involved").try_contains(&p.into());
        prop_assert_ne!(before, Ternary::Unknown);
        prop_assert_eq!(before, after);
    }
}
