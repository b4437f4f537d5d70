//! Persistent (immutable) data structures.
//!
//! This module provides immutable data structures that share structure
//! between versions instead of copying:
//!
//! - [`AssocMap`]: Persistent association map keyed by a caller-supplied
//!   equivalence (no `Hash` or `Ord` bounds on keys)
//! - [`Separated`]: The two-container result of partitioning operations
//!
//! # Structural Sharing
//!
//! Every combinator returns a new map handle. Operations that change nothing
//! (deleting an absent key, inserting an already-present value) return a
//! handle to the same entry block, which callers can detect with
//! [`AssocMap::ptr_eq`] instead of a deep comparison.
//!
//! # Examples
//!
//! ```rust
//! use combinars::persistent::AssocMap;
//! use combinars::typeclass::Equivalence;
//!
//! let eq = Equivalence::standard();
//! let map = AssocMap::new()
//!     .insert_at(&eq, "one", 1)
//!     .insert_at(&eq, "two", 2);
//! assert_eq!(map.lookup(&eq, &"one"), Some(&1));
//!
//! // The original map is preserved
//! let smaller = map.delete_at(&eq, &"one");
//! assert_eq!(map.len(), 2);
//! assert_eq!(smaller.len(), 1);
//! ```

mod assoc_map;

pub use assoc_map::{AssocMap, Separated};
