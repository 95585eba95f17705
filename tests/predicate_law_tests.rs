// Copyright (c) 2025 - Cowboy AI, LLC.

use cim_predicate::{
    always_false, always_true, predicate, OperationsConfig, PredicateCache, PredicateOperations,
    SharedPredicate, XorSemantics,
};
use proptest::prelude::*;
use std::sync::Arc;
use test_case::test_case;

fn constant(value: bool) -> SharedPredicate<()> {
    if value {
        always_true()
    } else {
        always_false()
    }
}

#[test_case(false, false => false ; "neither")]
#[test_case(true, false => true ; "first only")]
#[test_case(false, true => true ; "second only")]
#[test_case(true, true => false ; "both")]
fn exclusive_xor(first: bool, second: bool) -> bool {
    let ops = PredicateOperations::<()>::default();
    ops.xor(constant(first), constant(second)).unwrap().apply(&())
}

#[test_case(false, false => false ; "neither")]
#[test_case(true, false => true ; "first only")]
#[test_case(false, true => true ; "second only")]
#[test_case(true, true => true ; "both")]
fn legacy_xor_matches_or(first: bool, second: bool) -> bool {
    let ops = PredicateOperations::with_config(
        Arc::new(PredicateCache::new()),
        OperationsConfig::default().with_xor_semantics(XorSemantics::InclusiveLegacy),
    );
    ops.xor(constant(first), constant(second)).unwrap().apply(&())
}

#[test_case(false, false => true ; "neither")]
#[test_case(true, false => true ; "first only")]
#[test_case(false, true => true ; "second only")]
#[test_case(true, true => false ; "both")]
fn nand(first: bool, second: bool) -> bool {
    let ops = PredicateOperations::<()>::default();
    ops.nand(constant(first), constant(second)).unwrap().apply(&())
}

#[test_case(false, false => true ; "neither")]
#[test_case(true, false => false ; "first only")]
#[test_case(false, true => false ; "second only")]
#[test_case(true, true => false ; "both")]
fn nor(first: bool, second: bool) -> bool {
    let ops = PredicateOperations::<()>::default();
    ops.nor(constant(first), constant(second)).unwrap().apply(&())
}

fn threshold_pair(low: i64, high: i64) -> (SharedPredicate<i64>, SharedPredicate<i64>) {
    (
        predicate("above low", move |x: &i64| *x > low),
        predicate("below high", move |x: &i64| *x < high),
    )
}

proptest! {
    #[test]
    fn operators_agree_with_boolean_logic(low in -100i64..100, high in -100i64..100, x in -200i64..200) {
        let ops = PredicateOperations::<i64>::default();
        let (a, b) = threshold_pair(low, high);
        let (pa, pb) = (a.apply(&x), b.apply(&x));

        prop_assert_eq!(ops.and(&a, &b).unwrap().apply(&x), pa && pb);
        prop_assert_eq!(ops.or(&a, &b).unwrap().apply(&x), pa || pb);
        prop_assert_eq!(ops.xor(&a, &b).unwrap().apply(&x), pa != pb);
        prop_assert_eq!(ops.not(&a).unwrap().apply(&x), !pa);
        prop_assert_eq!(ops.nand(&a, &b).unwrap().apply(&x), !(pa && pb));
        prop_assert_eq!(ops.nor(&a, &b).unwrap().apply(&x), !(pa || pb));
    }

    #[test]
    fn de_morgan_holds(low in -100i64..100, high in -100i64..100, x in -200i64..200) {
        let ops = PredicateOperations::<i64>::default();
        let (a, b) = threshold_pair(low, high);

        let nand = ops.nand(&a, &b).unwrap();
        let or_of_negations = ops.or(ops.not(&a).unwrap(), ops.not(&b).unwrap()).unwrap();
        prop_assert_eq!(nand.apply(&x), or_of_negations.apply(&x));
    }

    #[test]
    fn cache_size_counts_distinct_requests(repeats in 1usize..16) {
        let ops = PredicateOperations::<i64>::default();
        let (a, b) = threshold_pair(0, 10);

        for _ in 0..repeats {
            ops.and(&a, &b).unwrap();
            ops.or(&a, &b).unwrap();
            ops.not(&a).unwrap();
        }

        let stats = ops.cache().stats();
        prop_assert_eq!(stats.entries, 2);
        prop_assert_eq!(stats.misses, 2);
        prop_assert_eq!(stats.hits, 2 * (repeats as u64 - 1));
    }
}
