//! Property-based tests for predicate entities.

use omniset_core::{CmpOp, Entity};
use proptest::prelude::*;

fn var_name_strategy() -> impl Strategy<Value = String> {
    "[a-z][0-9]?".prop_map(|s| s.to_string())
}

fn cmp_op_strategy() -> impl Strategy<Value = CmpOp> {
    prop_oneof![
        Just(CmpOp::Eq),
        Just(CmpOp::Neq),
        Just(CmpOp::Less),
        Just(CmpOp::Leq),
        Just(CmpOp::Greater),
        Just(CmpOp::Geq),
    ]
}

proptest! {
    /// Substituting a number for the only free variable makes a
    /// comparison decidable.
    #[test]
    fn substitution_grounds_comparisons(
        name in var_name_strategy(),
        op in cmp_op_strategy(),
        bound in -100i64..100,
        value in -100i64..100,
    ) {
        let p = Entity::cmp(op, Entity::var(name.clone()), bound.into());
        prop_assert_eq!(p.eval_bool(), None);
        let grounded = p.substitute(&name, &value.into());
        prop_assert!(grounded.eval_bool().is_some());
        prop_assert!(grounded.free_vars().is_empty());
    }

    /// Substituting a different variable changes nothing.
    #[test]
    fn substitution_misses_other_variables(
        name in var_name_strategy(),
        value in -100i64..100,
    ) {
        let p = Entity::cmp(CmpOp::Less, Entity::var(name.clone()), 0.into());
        let other = format!("{name}_");
        prop_assert_eq!(p.substitute(&other, &value.into()), p);
    }

    /// Simplification never changes a decided truth value.
    #[test]
    fn simplification_preserves_truth(
        op in cmp_op_strategy(),
        a in -50i64..50,
        b in -50i64..50,
        negate in any::<bool>(),
    ) {
        let cmp = Entity::cmp(op, a.into(), b.into());
        let p = if negate { !cmp } else { cmp };
        let folded = p.simplified();
        prop_assert_eq!(folded.eval_bool(), p.eval_bool());
        // decided comparisons fold all the way to a literal
        prop_assert!(matches!(folded, Entity::Bool(_)));
    }

    /// Kleene connectives are monotone: a decided conjunction stays
    /// decided after simplification.
    #[test]
    fn connective_folding(
        a in any::<bool>(),
        b in any::<bool>(),
    ) {
        let p = Entity::Bool(a) & Entity::Bool(b);
        prop_assert_eq!(p.simplified(), Entity::Bool(a && b));
        let q = Entity::Bool(a) | Entity::Bool(b);
        prop_assert_eq!(q.simplified(), Entity::Bool(a || b));
    }
}
