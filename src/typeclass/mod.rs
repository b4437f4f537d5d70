//! Value-level type class instances.
//!
//! This module provides the algebraic structures the rest of the library is
//! parameterized by, as *first-class instance values* rather than traits:
//!
//! - [`Equivalence`]: an equivalence relation, supplied per call
//! - [`Order`]: a total order, supplied wherever deterministic enumeration
//!   is required
//! - [`Semigroup`]: an associative combining operation
//! - [`Monoid`]: a semigroup with an identity element
//!
//! # Why instance values instead of traits?
//!
//! Trait impls attach one instance to one type. The persistent containers in
//! this library are keyed by *caller-supplied* relations — two different key
//! equivalences over the same key type routinely coexist (say, structural
//! and case-insensitive equality over `String`) — so instances must be plain
//! values that callers construct and pass around. Each instance wraps its
//! operation in an `Rc`, making instances cheap to clone and share.
//!
//! # Examples
//!
//! ```rust
//! use combinars::typeclass::{Equivalence, Order, Semigroup};
//!
//! let eq: Equivalence<i32> = Equivalence::standard();
//! assert!(eq.equals(&1, &1));
//!
//! let ord: Order<i32> = Order::standard();
//! assert_eq!(ord.max(1, 2), 2);
//!
//! let sum: Semigroup<i32> = Semigroup::new(|x, y| x + y);
//! assert_eq!(sum.combine(20, 22), 42);
//! ```

mod equivalence;
mod monoid;
mod order;
mod semigroup;

pub use equivalence::Equivalence;
pub use monoid::Monoid;
pub use order::Order;
pub use semigroup::Semigroup;
