//! Persistent (immutable) association map keyed by a caller-supplied equivalence.
//!
//! This module provides [`AssocMap`], an immutable map whose lookups are
//! decided by an [`Equivalence`] supplied per call rather than by `Hash` or
//! `Ord` bounds on the key type.
//!
//! # Overview
//!
//! `AssocMap` stores its entries as a flat, reference-counted block. Every
//! combinator returns a new map; operations that would not change the map
//! (deleting an absent key, inserting an identical value) return a handle to
//! the *same* entry block, which callers can observe cheaply through
//! [`AssocMap::ptr_eq`].
//!
//! - O(n) lookup, insert, remove (linear scan under the supplied equivalence)
//! - O(1) `len` and `is_empty`
//! - O(n·m) submap test (and therefore structural equality)
//!
//! The linear scan is the point, not an accident: it is what allows keys to
//! be compared structurally, case-insensitively, or through any other
//! equivalence the caller supplies, without demanding hashable or ordered
//! keys. Enumeration order is unspecified; operations that need a
//! deterministic order ([`AssocMap::keys`], the folds, the traversals) take
//! an [`Order`] and produce sorted output.
//!
//! # Examples
//!
//! ```rust
//! use combinars::persistent::AssocMap;
//! use combinars::typeclass::Equivalence;
//!
//! let eq: Equivalence<String> = Equivalence::standard();
//! let map = AssocMap::new()
//!     .insert_at(&eq, "one".to_string(), 1)
//!     .insert_at(&eq, "two".to_string(), 2);
//!
//! assert_eq!(map.lookup(&eq, &"one".to_string()), Some(&1));
//!
//! // Structural sharing: the original map is preserved
//! let updated = map.insert_at(&eq, "one".to_string(), 100);
//! assert_eq!(map.lookup(&eq, &"one".to_string()), Some(&1));
//! assert_eq!(updated.lookup(&eq, &"one".to_string()), Some(&100));
//! ```
//!
//! # Design Note
//!
//! The traversal methods come in one concrete variant per effect
//! (`traverse_option`, `traverse_result`, `traverse_vec`, ...). Rust has no
//! higher-kinded types, so a single `traverse` generic over the effect cannot
//! be written; the per-effect naming convention keeps each variant simple and
//! is used consistently across this library.

use std::rc::Rc;

use crate::control::Either;
use crate::typeclass::{Equivalence, Monoid, Order, Semigroup};

// =============================================================================
// Separated
// =============================================================================

/// The result of partitioning a container into two containers.
///
/// By convention `left` collects the failures (or rejected entries) and
/// `right` collects the successes (or accepted entries).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Separated<L, R> {
    /// The container of left/rejected entries.
    pub left: L,
    /// The container of right/accepted entries.
    pub right: R,
}

// =============================================================================
// AssocMap Definition
// =============================================================================

/// A persistent (immutable) association map keyed by a caller-supplied
/// equivalence.
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `new`          | O(1)       |
/// | `lookup`       | O(n)       |
/// | `insert_at`    | O(n)       |
/// | `delete_at`    | O(n)       |
/// | `is_submap_of` | O(n·m)     |
/// | `len`          | O(1)       |
/// | `is_empty`     | O(1)       |
///
/// # Examples
///
/// ```rust
/// use combinars::persistent::AssocMap;
/// use combinars::typeclass::Equivalence;
///
/// let eq = Equivalence::standard();
/// let map = AssocMap::singleton("key", 42);
/// assert_eq!(map.lookup(&eq, &"key"), Some(&42));
/// ```
pub struct AssocMap<K, V> {
    /// Flat entry storage, shared between handles.
    entries: Rc<Vec<(K, V)>>,
}

impl<K, V> Clone for AssocMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<K, V> Default for AssocMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: std::fmt::Debug, V: std::fmt::Debug> std::fmt::Debug for AssocMap<K, V> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_map()
            .entries(self.entries.iter().map(|(key, value)| (key, value)))
            .finish()
    }
}

// =============================================================================
// Construction and Queries
// =============================================================================

impl<K, V> AssocMap<K, V> {
    /// Creates a new empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::persistent::AssocMap;
    ///
    /// let map: AssocMap<String, i32> = AssocMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Rc::new(Vec::new()),
        }
    }

    /// Creates a map containing a single key/value pair.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::persistent::AssocMap;
    ///
    /// let map = AssocMap::singleton("key", 42);
    /// assert_eq!(map.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(key: K, value: V) -> Self {
        Self {
            entries: Rc::new(vec![(key, value)]),
        }
    }

    /// Wraps a native association as a map.
    ///
    /// The caller guarantees that the keys are distinct under whatever
    /// equivalence the map will later be queried with; duplicates are not
    /// detected here. For input with possible duplicates use
    /// [`AssocMap::from_pairs_with`].
    #[inline]
    #[must_use]
    pub fn from_entries(entries: Vec<(K, V)>) -> Self {
        Self {
            entries: Rc::new(entries),
        }
    }

    /// Returns the number of entries in the map.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if both handles share the same entry block.
    ///
    /// No-op combinators (deleting an absent key, inserting an identical
    /// value) return a handle for which this holds against their input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::persistent::AssocMap;
    /// use combinars::typeclass::Equivalence;
    ///
    /// let eq = Equivalence::standard();
    /// let map = AssocMap::singleton("a", 1);
    /// let unchanged = map.delete_at(&eq, &"b");
    /// assert!(map.ptr_eq(&unchanged));
    /// ```
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.entries, &other.entries)
    }

    /// Iterates over the entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// Looks up a key, returning the *stored* key alongside the value.
    ///
    /// The stored key matters when the equivalence is coarser than identity:
    /// it may differ in representation from the query key while being equal
    /// to it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::persistent::AssocMap;
    /// use combinars::typeclass::Equivalence;
    ///
    /// let case_insensitive: Equivalence<&str> =
    ///     Equivalence::new(|x: &&str, y: &&str| x.eq_ignore_ascii_case(y));
    /// let map = AssocMap::singleton("Key", 1);
    /// assert_eq!(
    ///     map.lookup_with_key(&case_insensitive, &"KEY"),
    ///     Some((&"Key", &1))
    /// );
    /// ```
    pub fn lookup_with_key(&self, key_eq: &Equivalence<K>, key: &K) -> Option<(&K, &V)> {
        self.entries
            .iter()
            .find(|(stored, _)| key_eq.equals(stored, key))
            .map(|(stored, value)| (stored, value))
    }

    /// Looks up the value for a key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::persistent::AssocMap;
    /// use combinars::typeclass::Equivalence;
    ///
    /// let eq = Equivalence::standard();
    /// let map = AssocMap::singleton("a", 1);
    /// assert_eq!(map.lookup(&eq, &"a"), Some(&1));
    /// assert_eq!(map.lookup(&eq, &"b"), None);
    /// ```
    pub fn lookup(&self, key_eq: &Equivalence<K>, key: &K) -> Option<&V> {
        self.lookup_with_key(key_eq, key).map(|(_, value)| value)
    }

    /// Tests whether a key exists in the map.
    pub fn member(&self, key_eq: &Equivalence<K>, key: &K) -> bool {
        self.lookup_with_key(key_eq, key).is_some()
    }

    /// Tests whether a value is present in the map.
    pub fn elem(&self, value_eq: &Equivalence<V>, value: &V) -> bool {
        self.entries
            .iter()
            .any(|(_, stored)| value_eq.equals(stored, value))
    }

    /// Index of the entry whose stored key is equal to `key`, if any.
    fn position(&self, key_eq: &Equivalence<K>, key: &K) -> Option<usize> {
        self.entries
            .iter()
            .position(|(stored, _)| key_eq.equals(stored, key))
    }
}

// =============================================================================
// Combinators
// =============================================================================

impl<K: Clone, V: Clone> AssocMap<K, V> {
    /// Inserts or replaces a key/value pair.
    ///
    /// If an equal key already exists, only the value is replaced; the
    /// *stored* key is preserved. If the existing value is already equal to
    /// the new one, the map is returned unchanged (same entry block, see
    /// [`AssocMap::ptr_eq`]).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::persistent::AssocMap;
    /// use combinars::typeclass::Equivalence;
    ///
    /// let eq = Equivalence::standard();
    /// let map = AssocMap::new().insert_at(&eq, "a", 1);
    /// let unchanged = map.insert_at(&eq, "a", 1);
    /// assert!(map.ptr_eq(&unchanged));
    ///
    /// let replaced = map.insert_at(&eq, "a", 2);
    /// assert_eq!(replaced.lookup(&eq, &"a"), Some(&2));
    /// ```
    #[must_use]
    pub fn insert_at(&self, key_eq: &Equivalence<K>, key: K, value: V) -> Self
    where
        V: PartialEq,
    {
        match self.position(key_eq, &key) {
            None => {
                let mut entries = (*self.entries).clone();
                entries.push((key, value));
                Self::from_entries(entries)
            }
            Some(index) => {
                if self.entries[index].1 == value {
                    return self.clone();
                }
                let mut entries = (*self.entries).clone();
                entries[index].1 = value;
                Self::from_entries(entries)
            }
        }
    }

    /// Deletes a key and its value.
    ///
    /// Absence is a no-op: the map is returned unchanged (same entry block).
    #[must_use]
    pub fn delete_at(&self, key_eq: &Equivalence<K>, key: &K) -> Self {
        self.position(key_eq, key).map_or_else(
            || self.clone(),
            |index| {
                let mut entries = (*self.entries).clone();
                entries.remove(index);
                Self::from_entries(entries)
            },
        )
    }

    /// Replaces the value stored under a key.
    ///
    /// Returns `None` if the key is absent. The stored key is preserved.
    #[must_use]
    pub fn update_at(&self, key_eq: &Equivalence<K>, key: &K, value: V) -> Option<Self> {
        self.modify_at(key_eq, key, move |_| value)
    }

    /// Applies a function to the value stored under a key.
    ///
    /// Returns `None` if the key is absent. The stored key is preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::persistent::AssocMap;
    /// use combinars::typeclass::Equivalence;
    ///
    /// let eq = Equivalence::standard();
    /// let map = AssocMap::singleton("a", 20);
    /// let doubled = map.modify_at(&eq, &"a", |n| n * 2).unwrap();
    /// assert_eq!(doubled.lookup(&eq, &"a"), Some(&40));
    /// assert!(map.modify_at(&eq, &"missing", |n| n * 2).is_none());
    /// ```
    #[must_use]
    pub fn modify_at<F>(&self, key_eq: &Equivalence<K>, key: &K, function: F) -> Option<Self>
    where
        F: FnOnce(&V) -> V,
    {
        self.position(key_eq, key).map(|index| {
            let mut entries = (*self.entries).clone();
            entries[index].1 = function(&self.entries[index].1);
            Self::from_entries(entries)
        })
    }

    /// Deletes a key, returning the removed value alongside the new map.
    ///
    /// Returns `None` if the key is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::persistent::AssocMap;
    /// use combinars::typeclass::Equivalence;
    ///
    /// let eq = Equivalence::standard();
    /// let map = AssocMap::singleton("a", 1);
    /// let (value, rest) = map.pop_at(&eq, &"a").unwrap();
    /// assert_eq!(value, 1);
    /// assert!(rest.is_empty());
    /// ```
    #[must_use]
    pub fn pop_at(&self, key_eq: &Equivalence<K>, key: &K) -> Option<(V, Self)> {
        self.lookup(key_eq, key)
            .cloned()
            .map(|value| (value, self.delete_at(key_eq, key)))
    }

    /// Builds a map from a sequence of pairs, combining the values of
    /// duplicate keys with the supplied operation (existing value first).
    ///
    /// The first occurrence of a key is the one stored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::persistent::AssocMap;
    /// use combinars::typeclass::Equivalence;
    ///
    /// let eq = Equivalence::standard();
    /// let map = AssocMap::from_pairs_with(
    ///     &eq,
    ///     |existing, incoming| existing + incoming,
    ///     vec![("a", 1), ("b", 2), ("a", 10)],
    /// );
    /// assert_eq!(map.lookup(&eq, &"a"), Some(&11));
    /// assert_eq!(map.len(), 2);
    /// ```
    #[must_use]
    pub fn from_pairs_with<I, F>(key_eq: &Equivalence<K>, combine: F, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        F: Fn(V, V) -> V,
    {
        let mut entries: Vec<(K, V)> = Vec::new();
        for (key, value) in pairs {
            match entries
                .iter()
                .position(|(stored, _)| key_eq.equals(stored, &key))
            {
                Some(index) => {
                    let existing = entries[index].1.clone();
                    entries[index].1 = combine(existing, value);
                }
                None => entries.push((key, value)),
            }
        }
        Self::from_entries(entries)
    }
}

// =============================================================================
// Submap, Equivalence, Monoid
// =============================================================================

impl<K, V> AssocMap<K, V> {
    /// Tests whether every key/value pair of this map has an equal
    /// counterpart in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::persistent::AssocMap;
    /// use combinars::typeclass::Equivalence;
    ///
    /// let key_eq = Equivalence::standard();
    /// let value_eq = Equivalence::standard();
    /// let small = AssocMap::singleton("a", 1);
    /// let large = small.insert_at(&key_eq, "b", 2);
    /// assert!(small.is_submap_of(&key_eq, &value_eq, &large));
    /// assert!(!large.is_submap_of(&key_eq, &value_eq, &small));
    /// ```
    pub fn is_submap_of(
        &self,
        key_eq: &Equivalence<K>,
        value_eq: &Equivalence<V>,
        other: &Self,
    ) -> bool {
        self.entries.iter().all(|(key, value)| {
            other
                .lookup_with_key(key_eq, key)
                .is_some_and(|(stored_key, stored_value)| {
                    key_eq.equals(key, stored_key) && value_eq.equals(value, stored_value)
                })
        })
    }
}

impl<K: 'static, V: 'static> AssocMap<K, V> {
    /// The structural equivalence over maps: two maps are equal iff each is
    /// a submap of the other. O(n·m).
    #[must_use]
    pub fn equivalence(key_eq: Equivalence<K>, value_eq: Equivalence<V>) -> Equivalence<Self> {
        Equivalence::new(move |first: &Self, second: &Self| {
            first.is_submap_of(&key_eq, &value_eq, second)
                && second.is_submap_of(&key_eq, &value_eq, first)
        })
    }
}

impl<K: Clone + 'static, V: Clone + 'static> AssocMap<K, V> {
    /// The monoid over maps whose combine merges entries, combining the
    /// values of keys present in both operands with the supplied semigroup.
    ///
    /// The left operand's stored key wins for shared keys. When either
    /// operand is empty the other is returned unchanged (same entry block).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::persistent::AssocMap;
    /// use combinars::typeclass::{Equivalence, Semigroup};
    ///
    /// let eq: Equivalence<&str> = Equivalence::standard();
    /// let sum: Semigroup<i32> = Semigroup::new(|x, y| x + y);
    /// let monoid = AssocMap::monoid(eq.clone(), sum);
    ///
    /// let first = AssocMap::singleton("a", 1).insert_at(&eq, "b", 2);
    /// let second = AssocMap::singleton("b", 10).insert_at(&eq, "c", 3);
    /// let merged = monoid.combine(first, second);
    /// assert_eq!(merged.lookup(&eq, &"b"), Some(&12));
    /// assert_eq!(merged.len(), 3);
    /// ```
    #[must_use]
    pub fn monoid(key_eq: Equivalence<K>, value_semigroup: Semigroup<V>) -> Monoid<Self> {
        Monoid::new(
            Semigroup::new(move |first: Self, second: Self| {
                if first.is_empty() {
                    return second;
                }
                if second.is_empty() {
                    return first;
                }
                let mut entries = (*first.entries).clone();
                for (key, value) in second.entries.iter() {
                    // Index into `entries` is stable: new keys only append.
                    match first.position(&key_eq, key) {
                        Some(index) => {
                            let existing = entries[index].1.clone();
                            entries[index].1 = value_semigroup.combine(existing, value.clone());
                        }
                        None => entries.push((key.clone(), value.clone())),
                    }
                }
                Self::from_entries(entries)
            }),
            Self::new,
        )
    }
}

// =============================================================================
// Sorted Enumeration
// =============================================================================

impl<K, V> AssocMap<K, V> {
    /// The keys of the map, sorted by the supplied order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::persistent::AssocMap;
    /// use combinars::typeclass::{Equivalence, Order};
    ///
    /// let eq = Equivalence::standard();
    /// let map = AssocMap::singleton("b", 2).insert_at(&eq, "a", 1);
    /// assert_eq!(map.keys(&Order::standard()), vec!["a", "b"]);
    /// ```
    #[must_use]
    pub fn keys(&self, key_order: &Order<K>) -> Vec<K>
    where
        K: Clone,
    {
        let mut keys: Vec<K> = self.entries.iter().map(|(key, _)| key.clone()).collect();
        keys.sort_by(|first, second| key_order.compare(first, second));
        keys
    }

    /// The values of the map, sorted by the supplied order *over values*.
    #[must_use]
    pub fn values(&self, value_order: &Order<V>) -> Vec<V>
    where
        V: Clone,
    {
        let mut values: Vec<V> = self
            .entries
            .iter()
            .map(|(_, value)| value.clone())
            .collect();
        values.sort_by(|first, second| value_order.compare(first, second));
        values
    }

    /// Applies a function to every entry in sorted-key order, collecting the
    /// results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::persistent::AssocMap;
    /// use combinars::typeclass::{Equivalence, Order};
    ///
    /// let eq = Equivalence::standard();
    /// let map = AssocMap::singleton("b", 2).insert_at(&eq, "a", 1);
    /// let rendered = map.collect(&Order::standard(), |k, v| format!("{k}={v}"));
    /// assert_eq!(rendered, vec!["a=1", "b=2"]);
    /// ```
    pub fn collect<B, F>(&self, key_order: &Order<K>, function: F) -> Vec<B>
    where
        F: Fn(&K, &V) -> B,
    {
        self.sorted_entries(key_order)
            .into_iter()
            .map(|(key, value)| function(key, value))
            .collect()
    }

    /// The key/value pairs of the map, sorted by key.
    #[must_use]
    pub fn to_sorted_entries(&self, key_order: &Order<K>) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.collect(key_order, |key, value| (key.clone(), value.clone()))
    }

    /// Entry references in sorted-key order.
    fn sorted_entries(&self, key_order: &Order<K>) -> Vec<(&K, &V)> {
        let mut entries: Vec<(&K, &V)> = self.iter().collect();
        entries.sort_by(|(first, _), (second, _)| key_order.compare(first, second));
        entries
    }
}

// =============================================================================
// Functor / Filterable
// =============================================================================

impl<K: Clone, V> AssocMap<K, V> {
    /// Transforms every value, preserving keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::persistent::AssocMap;
    /// use combinars::typeclass::Equivalence;
    ///
    /// let eq = Equivalence::standard();
    /// let map = AssocMap::singleton("a", 21);
    /// assert_eq!(map.fmap(|v| v * 2).lookup(&eq, &"a"), Some(&42));
    /// ```
    pub fn fmap<B, F>(&self, function: F) -> AssocMap<K, B>
    where
        F: Fn(&V) -> B,
    {
        self.fmap_with_key(|_, value| function(value))
    }

    /// Transforms every value with access to its key, preserving keys.
    pub fn fmap_with_key<B, F>(&self, function: F) -> AssocMap<K, B>
    where
        F: Fn(&K, &V) -> B,
    {
        AssocMap::from_entries(
            self.entries
                .iter()
                .map(|(key, value)| (key.clone(), function(key, value)))
                .collect(),
        )
    }

    /// Keeps the entries whose value satisfies the predicate.
    pub fn filter<F>(&self, predicate: F) -> Self
    where
        F: Fn(&V) -> bool,
        V: Clone,
    {
        self.filter_with_key(|_, value| predicate(value))
    }

    /// Keeps the entries satisfying a predicate over key and value.
    pub fn filter_with_key<F>(&self, predicate: F) -> Self
    where
        F: Fn(&K, &V) -> bool,
        V: Clone,
    {
        Self::from_entries(
            self.entries
                .iter()
                .filter(|(key, value)| predicate(key, value))
                .cloned()
                .collect(),
        )
    }

    /// Transforms values, dropping the entries mapped to `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::persistent::AssocMap;
    /// use combinars::typeclass::Equivalence;
    ///
    /// let eq = Equivalence::standard();
    /// let map = AssocMap::singleton("a", "1").insert_at(&eq, "b", "x");
    /// let parsed = map.filter_map(|v| v.parse::<i32>().ok());
    /// assert_eq!(parsed.lookup(&eq, &"a"), Some(&1));
    /// assert_eq!(parsed.len(), 1);
    /// ```
    pub fn filter_map<B, F>(&self, function: F) -> AssocMap<K, B>
    where
        F: Fn(&V) -> Option<B>,
    {
        self.filter_map_with_key(|_, value| function(value))
    }

    /// Transforms entries, dropping the ones mapped to `None`.
    pub fn filter_map_with_key<B, F>(&self, function: F) -> AssocMap<K, B>
    where
        F: Fn(&K, &V) -> Option<B>,
    {
        AssocMap::from_entries(
            self.entries
                .iter()
                .filter_map(|(key, value)| {
                    function(key, value).map(|mapped| (key.clone(), mapped))
                })
                .collect(),
        )
    }

    /// Splits the map by a predicate over values; rejected entries go left,
    /// accepted entries go right.
    pub fn partition<F>(&self, predicate: F) -> Separated<Self, Self>
    where
        F: Fn(&V) -> bool,
        V: Clone,
    {
        self.partition_with_key(|_, value| predicate(value))
    }

    /// Splits the map by a predicate over keys and values.
    pub fn partition_with_key<F>(&self, predicate: F) -> Separated<Self, Self>
    where
        F: Fn(&K, &V) -> bool,
        V: Clone,
    {
        let mut left = Vec::new();
        let mut right = Vec::new();
        for (key, value) in self.entries.iter() {
            if predicate(key, value) {
                right.push((key.clone(), value.clone()));
            } else {
                left.push((key.clone(), value.clone()));
            }
        }
        Separated {
            left: Self::from_entries(left),
            right: Self::from_entries(right),
        }
    }

    /// Transforms every value into an [`Either`], splitting the map by
    /// variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::control::Either;
    /// use combinars::persistent::AssocMap;
    /// use combinars::typeclass::Equivalence;
    ///
    /// let eq = Equivalence::standard();
    /// let map = AssocMap::singleton("a", 1).insert_at(&eq, "b", -2);
    /// let split = map.partition_map(|v| {
    ///     if *v >= 0 { Either::Right(*v) } else { Either::Left(-v) }
    /// });
    /// assert_eq!(split.right.lookup(&eq, &"a"), Some(&1));
    /// assert_eq!(split.left.lookup(&eq, &"b"), Some(&2));
    /// ```
    pub fn partition_map<B, C, F>(&self, function: F) -> Separated<AssocMap<K, B>, AssocMap<K, C>>
    where
        F: Fn(&V) -> Either<B, C>,
    {
        self.partition_map_with_key(|_, value| function(value))
    }

    /// Transforms every entry into an [`Either`], splitting the map by
    /// variant.
    pub fn partition_map_with_key<B, C, F>(
        &self,
        function: F,
    ) -> Separated<AssocMap<K, B>, AssocMap<K, C>>
    where
        F: Fn(&K, &V) -> Either<B, C>,
    {
        let mut left = Vec::new();
        let mut right = Vec::new();
        for (key, value) in self.entries.iter() {
            match function(key, value) {
                Either::Left(mapped) => left.push((key.clone(), mapped)),
                Either::Right(mapped) => right.push((key.clone(), mapped)),
            }
        }
        Separated {
            left: AssocMap::from_entries(left),
            right: AssocMap::from_entries(right),
        }
    }
}

impl<K: Clone, V: Clone> AssocMap<K, Option<V>> {
    /// Drops the entries holding `None`, unwrapping the rest.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::persistent::AssocMap;
    /// use combinars::typeclass::Equivalence;
    ///
    /// let eq = Equivalence::standard();
    /// let map = AssocMap::singleton("a", Some(1)).insert_at(&eq, "b", None);
    /// let compacted = map.compact();
    /// assert_eq!(compacted.lookup(&eq, &"a"), Some(&1));
    /// assert_eq!(compacted.len(), 1);
    /// ```
    #[must_use]
    pub fn compact(&self) -> AssocMap<K, V> {
        self.filter_map(Clone::clone)
    }
}

impl<K: Clone, B: Clone, C: Clone> AssocMap<K, Either<B, C>> {
    /// Splits a map of [`Either`] values into a map of lefts and a map of
    /// rights.
    #[must_use]
    pub fn separate(&self) -> Separated<AssocMap<K, B>, AssocMap<K, C>> {
        self.partition_map(|either| either.as_ref().bimap(Clone::clone, Clone::clone))
    }
}

// =============================================================================
// Foldable (sorted-key sequencing)
// =============================================================================

impl<K, V> AssocMap<K, V> {
    /// Folds the values left-to-right in sorted-key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::persistent::AssocMap;
    /// use combinars::typeclass::{Equivalence, Order};
    ///
    /// let eq = Equivalence::standard();
    /// let map = AssocMap::singleton("b", "2").insert_at(&eq, "a", "1");
    /// let joined = map.reduce(&Order::standard(), String::new(), |acc, v| acc + v);
    /// assert_eq!(joined, "12");
    /// ```
    pub fn reduce<B, F>(&self, key_order: &Order<K>, initial: B, function: F) -> B
    where
        F: Fn(B, &V) -> B,
    {
        self.reduce_with_key(key_order, initial, |_, accumulator, value| {
            function(accumulator, value)
        })
    }

    /// Folds the entries left-to-right in sorted-key order.
    pub fn reduce_with_key<B, F>(&self, key_order: &Order<K>, initial: B, function: F) -> B
    where
        F: Fn(&K, B, &V) -> B,
    {
        self.sorted_entries(key_order)
            .into_iter()
            .fold(initial, |accumulator, (key, value)| {
                function(key, accumulator, value)
            })
    }

    /// Folds the values right-to-left in sorted-key order.
    pub fn reduce_right<B, F>(&self, key_order: &Order<K>, initial: B, function: F) -> B
    where
        F: Fn(&V, B) -> B,
    {
        self.reduce_right_with_key(key_order, initial, |_, value, accumulator| {
            function(value, accumulator)
        })
    }

    /// Folds the entries right-to-left in sorted-key order.
    pub fn reduce_right_with_key<B, F>(&self, key_order: &Order<K>, initial: B, function: F) -> B
    where
        F: Fn(&K, &V, B) -> B,
    {
        self.sorted_entries(key_order)
            .into_iter()
            .rev()
            .fold(initial, |accumulator, (key, value)| {
                function(key, value, accumulator)
            })
    }

    /// Maps every value into a monoid and combines the results in
    /// sorted-key order.
    pub fn fold_map<M, F>(&self, key_order: &Order<K>, monoid: &Monoid<M>, function: F) -> M
    where
        F: Fn(&V) -> M,
    {
        self.fold_map_with_key(key_order, monoid, |_, value| function(value))
    }

    /// Maps every entry into a monoid and combines the results in
    /// sorted-key order.
    pub fn fold_map_with_key<M, F>(&self, key_order: &Order<K>, monoid: &Monoid<M>, function: F) -> M
    where
        F: Fn(&K, &V) -> M,
    {
        self.reduce_with_key(key_order, monoid.empty(), |key, accumulator, value| {
            monoid.combine(accumulator, function(key, value))
        })
    }
}

// =============================================================================
// Traversable / Witherable (sorted-key sequencing, one method per effect)
// =============================================================================

impl<K: Clone, V> AssocMap<K, V> {
    /// Traverses the map with an `Option`-producing function in sorted-key
    /// order, short-circuiting on the first `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::persistent::AssocMap;
    /// use combinars::typeclass::{Equivalence, Order};
    ///
    /// let eq = Equivalence::standard();
    /// let ord = Order::standard();
    /// let map = AssocMap::singleton("a", "1").insert_at(&eq, "b", "2");
    /// let parsed = map.traverse_option(&ord, |v| v.parse::<i32>().ok());
    /// assert!(parsed.is_some());
    ///
    /// let broken = map.insert_at(&eq, "c", "x");
    /// assert!(broken.traverse_option(&ord, |v| v.parse::<i32>().ok()).is_none());
    /// ```
    pub fn traverse_option<B, F>(&self, key_order: &Order<K>, function: F) -> Option<AssocMap<K, B>>
    where
        F: Fn(&V) -> Option<B>,
    {
        self.traverse_with_key_option(key_order, |_, value| function(value))
    }

    /// Traverses the entries with an `Option`-producing function in
    /// sorted-key order.
    pub fn traverse_with_key_option<B, F>(
        &self,
        key_order: &Order<K>,
        function: F,
    ) -> Option<AssocMap<K, B>>
    where
        F: Fn(&K, &V) -> Option<B>,
    {
        let mut entries = Vec::with_capacity(self.len());
        for (key, value) in self.sorted_entries(key_order) {
            entries.push((key.clone(), function(key, value)?));
        }
        Some(AssocMap::from_entries(entries))
    }

    /// Traverses the map with a `Result`-producing function in sorted-key
    /// order, short-circuiting on the first `Err`.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `function`.
    pub fn traverse_result<B, E, F>(
        &self,
        key_order: &Order<K>,
        function: F,
    ) -> Result<AssocMap<K, B>, E>
    where
        F: Fn(&V) -> Result<B, E>,
    {
        self.traverse_with_key_result(key_order, |_, value| function(value))
    }

    /// Traverses the entries with a `Result`-producing function in
    /// sorted-key order.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `function`.
    pub fn traverse_with_key_result<B, E, F>(
        &self,
        key_order: &Order<K>,
        function: F,
    ) -> Result<AssocMap<K, B>, E>
    where
        F: Fn(&K, &V) -> Result<B, E>,
    {
        let mut entries = Vec::with_capacity(self.len());
        for (key, value) in self.sorted_entries(key_order) {
            entries.push((key.clone(), function(key, value)?));
        }
        Ok(AssocMap::from_entries(entries))
    }

    /// Traverses the map with a `Vec`-producing function in sorted-key
    /// order, producing every combination of choices (Cartesian-product
    /// semantics).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::persistent::AssocMap;
    /// use combinars::typeclass::{Equivalence, Order};
    ///
    /// let eq = Equivalence::standard();
    /// let map = AssocMap::singleton("a", 1).insert_at(&eq, "b", 2);
    /// let choices = map.traverse_vec(&Order::standard(), |v| vec![*v, -v]);
    /// assert_eq!(choices.len(), 4);
    /// ```
    pub fn traverse_vec<B, F>(&self, key_order: &Order<K>, function: F) -> Vec<AssocMap<K, B>>
    where
        F: Fn(&V) -> Vec<B>,
        B: Clone,
    {
        let mut results: Vec<Vec<(K, B)>> = vec![Vec::with_capacity(self.len())];
        for (key, value) in self.sorted_entries(key_order) {
            let choices = function(value);
            results = results
                .into_iter()
                .flat_map(|partial| {
                    choices.iter().map(move |choice| {
                        let mut extended = partial.clone();
                        extended.push((key.clone(), choice.clone()));
                        extended
                    })
                })
                .collect();
        }
        results.into_iter().map(AssocMap::from_entries).collect()
    }

    /// Traversal combined with compaction: entries mapped to `Some(None)`
    /// are dropped, a `None` from the effect short-circuits.
    pub fn wither_option<B, F>(&self, key_order: &Order<K>, function: F) -> Option<AssocMap<K, B>>
    where
        F: Fn(&V) -> Option<Option<B>>,
        B: Clone,
    {
        self.traverse_option(key_order, function)
            .map(|traversed| traversed.compact())
    }

    /// Traversal combined with compaction under a `Result` effect.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `function`.
    pub fn wither_result<B, E, F>(
        &self,
        key_order: &Order<K>,
        function: F,
    ) -> Result<AssocMap<K, B>, E>
    where
        F: Fn(&V) -> Result<Option<B>, E>,
        B: Clone,
    {
        self.traverse_result(key_order, function)
            .map(|traversed| traversed.compact())
    }

    /// Traversal combined with partitioning: each entry is mapped to a
    /// variant choice, a `None` from the effect short-circuits.
    pub fn wilt_option<B, C, F>(
        &self,
        key_order: &Order<K>,
        function: F,
    ) -> Option<Separated<AssocMap<K, B>, AssocMap<K, C>>>
    where
        F: Fn(&V) -> Option<Either<B, C>>,
        B: Clone,
        C: Clone,
    {
        self.traverse_option(key_order, function)
            .map(|traversed| traversed.separate())
    }

    /// Traversal combined with partitioning under a `Result` effect.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `function`.
    pub fn wilt_result<B, C, E, F>(
        &self,
        key_order: &Order<K>,
        function: F,
    ) -> Result<Separated<AssocMap<K, B>, AssocMap<K, C>>, E>
    where
        F: Fn(&V) -> Result<Either<B, C>, E>,
        B: Clone,
        C: Clone,
    {
        self.traverse_result(key_order, function)
            .map(|traversed| traversed.separate())
    }
}

impl<K: Clone, V: Clone> AssocMap<K, Option<V>> {
    /// Turns a map of `Option` values inside out, short-circuiting on the
    /// first `None`.
    #[must_use]
    pub fn sequence_option(&self, key_order: &Order<K>) -> Option<AssocMap<K, V>> {
        self.traverse_option(key_order, Clone::clone)
    }
}

impl<K: Clone, V: Clone, E> AssocMap<K, Result<V, E>> {
    /// Turns a map of `Result` values inside out, short-circuiting on the
    /// first `Err`.
    ///
    /// # Errors
    ///
    /// Returns the first `Err` value found in sorted-key order.
    pub fn sequence_result(&self, key_order: &Order<K>) -> Result<AssocMap<K, V>, E>
    where
        E: Clone,
    {
        self.traverse_result(key_order, Clone::clone)
    }
}
