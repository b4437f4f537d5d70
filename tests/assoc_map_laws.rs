//! Property-based tests for `AssocMap` laws.
//!
//! Verifies, over generated maps:
//!
//! - Insert/lookup law: looking up a just-inserted key yields the value
//! - Delete/insert law: deleting an inserted key equals deleting from the
//!   original
//! - The derived map equivalence is reflexive and symmetric, and ignores
//!   entry order
//! - Sorted enumeration is ordered and size-preserving
//! - The derived monoid has its identity and is associative

use combinars::persistent::AssocMap;
use combinars::typeclass::{Equivalence, Order, Semigroup};
use proptest::prelude::*;

fn int_eq() -> Equivalence<i32> {
    Equivalence::standard()
}

fn build_map(pairs: &[(i32, i32)]) -> AssocMap<i32, i32> {
    let eq = int_eq();
    pairs.iter().fold(AssocMap::new(), |map, (key, value)| {
        map.insert_at(&eq, *key, *value)
    })
}

fn pairs_strategy() -> impl Strategy<Value = Vec<(i32, i32)>> {
    prop::collection::vec((0i32..16, -100i32..100), 0..8)
}

proptest! {
    /// lookup(E)(k, insert_at(E)(k, v)(m)) == Some(v)
    #[test]
    fn prop_lookup_after_insert_returns_value(
        pairs in pairs_strategy(),
        key in 0i32..16,
        value in -100i32..100,
    ) {
        let eq = int_eq();
        let map = build_map(&pairs).insert_at(&eq, key, value);
        prop_assert_eq!(map.lookup(&eq, &key), Some(&value));
    }

    /// delete_at(k)(insert_at(k, v)(m)) is equal (mutual submap) to
    /// delete_at(k)(m)
    #[test]
    fn prop_delete_after_insert_equals_delete(
        pairs in pairs_strategy(),
        key in 0i32..16,
        value in -100i32..100,
    ) {
        let eq = int_eq();
        let map_eq = AssocMap::equivalence(int_eq(), int_eq());
        let map = build_map(&pairs);
        let left = map.insert_at(&eq, key, value).delete_at(&eq, &key);
        let right = map.delete_at(&eq, &key);
        prop_assert!(map_eq.equals(&left, &right));
    }

    /// The derived equivalence is reflexive and symmetric, and does not
    /// depend on insertion order.
    #[test]
    fn prop_map_equivalence_is_an_equivalence(pairs in pairs_strategy()) {
        let map_eq = AssocMap::equivalence(int_eq(), int_eq());
        let forward = build_map(&pairs);
        let mut reversed_pairs = pairs.clone();
        reversed_pairs.reverse();
        // Reversing changes which duplicate wins, so replay the original
        // pairs on top to restore last-wins values in a different layout.
        let backward = pairs.iter().fold(build_map(&reversed_pairs), |map, (key, value)| {
            map.insert_at(&int_eq(), *key, *value)
        });

        prop_assert!(map_eq.equals(&forward, &forward));
        prop_assert_eq!(
            map_eq.equals(&forward, &backward),
            map_eq.equals(&backward, &forward)
        );
        prop_assert!(map_eq.equals(&forward, &backward));
    }

    /// Keys are sorted under the supplied order and size is preserved.
    #[test]
    fn prop_keys_sorted_and_size_preserving(pairs in pairs_strategy()) {
        let ord: Order<i32> = Order::standard();
        let map = build_map(&pairs);
        let keys = map.keys(&ord);
        prop_assert_eq!(keys.len(), map.len());
        for window in keys.windows(2) {
            prop_assert!(window[0] < window[1]);
        }
    }

    /// Values are sorted under the supplied value order and size is
    /// preserved.
    #[test]
    fn prop_values_sorted_and_size_preserving(pairs in pairs_strategy()) {
        let ord: Order<i32> = Order::standard();
        let map = build_map(&pairs);
        let values = map.values(&ord);
        prop_assert_eq!(values.len(), map.len());
        for window in values.windows(2) {
            prop_assert!(window[0] <= window[1]);
        }
    }

    /// concat(empty, m) == m and concat(m, empty) == m, by handle identity.
    #[test]
    fn prop_monoid_identity_shares_storage(pairs in pairs_strategy()) {
        let monoid = AssocMap::monoid(int_eq(), Semigroup::new(|x: i32, y: i32| x + y));
        let map = build_map(&pairs);
        prop_assert!(map.ptr_eq(&monoid.combine(monoid.empty(), map.clone())));
        prop_assert!(map.ptr_eq(&monoid.combine(map.clone(), monoid.empty())));
    }

    /// The derived monoid is associative up to map equivalence.
    #[test]
    fn prop_monoid_associative(
        first_pairs in pairs_strategy(),
        second_pairs in pairs_strategy(),
        third_pairs in pairs_strategy(),
    ) {
        let monoid = AssocMap::monoid(int_eq(), Semigroup::new(|x: i32, y: i32| x + y));
        let map_eq = AssocMap::equivalence(int_eq(), int_eq());
        let first = build_map(&first_pairs);
        let second = build_map(&second_pairs);
        let third = build_map(&third_pairs);

        let left = monoid.combine(monoid.combine(first.clone(), second.clone()), third.clone());
        let right = monoid.combine(first, monoid.combine(second, third));
        prop_assert!(map_eq.equals(&left, &right));
    }
}
