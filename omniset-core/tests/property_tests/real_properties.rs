//! Property-based tests for the extended-real number type.

use num_rational::BigRational;
use omniset_core::Real;
use proptest::prelude::*;

fn rational_strategy() -> impl Strategy<Value = Real> {
    (-1000i64..1000, 1i64..100)
        .prop_map(|(n, d)| Real::from(BigRational::new(n.into(), d.into())))
}

fn real_strategy() -> impl Strategy<Value = Real> {
    prop_oneof![
        8 => rational_strategy(),
        1 => Just(Real::NegInfinity),
        1 => Just(Real::PosInfinity),
    ]
}

proptest! {
    /// The ordering on finite values matches the rational ordering.
    #[test]
    fn finite_order_matches_rationals(a in -1000i64..1000, b in -1000i64..1000) {
        prop_assert_eq!(Real::from(a) < Real::from(b), a < b);
        prop_assert_eq!(Real::from(a) == Real::from(b), a == b);
    }

    /// The infinities bound everything.
    #[test]
    fn infinities_are_extreme(x in rational_strategy()) {
        prop_assert!(Real::NegInfinity < x);
        prop_assert!(x < Real::PosInfinity);
        prop_assert!(!x.is_zero() || x.is_finite());
    }

    /// Ordering is total and antisymmetric across the whole type.
    #[test]
    fn order_is_total(a in real_strategy(), b in real_strategy()) {
        let lt = a < b;
        let gt = a > b;
        let eq = a == b;
        prop_assert_eq!([lt, gt, eq].iter().filter(|v| **v).count(), 1);
    }

    /// Ordering is transitive.
    #[test]
    fn order_is_transitive(a in real_strategy(), b in real_strategy(), c in real_strategy()) {
        if a <= b && b <= c {
            prop_assert!(a <= c);
        }
    }

    /// Non-reduced rationals compare equal to their reduced forms.
    #[test]
    fn equality_is_value_based(n in -100i64..100, k in 1i64..10) {
        let plain = Real::from(BigRational::new(n.into(), 1.into()));
        let scaled = Real::from(BigRational::new((n * k).into(), k.into()));
        prop_assert_eq!(plain, scaled);
    }
}
