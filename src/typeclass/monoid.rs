//! `Monoid` - a semigroup with an identity element.
//!
//! A [`Monoid`] is a [`Semigroup`] instance value paired with a thunk
//! producing the identity element.
//!
//! # Laws
//!
//! - Associativity: inherited from the semigroup
//! - Left identity: `combine(empty(), a) == a`
//! - Right identity: `combine(a, empty()) == a`
//!
//! # Examples
//!
//! ```rust
//! use combinars::typeclass::{Monoid, Semigroup};
//!
//! let sum = Monoid::new(Semigroup::new(|x, y| x + y), || 0);
//! assert_eq!(sum.combine(1, 2), 3);
//! assert_eq!(sum.empty(), 0);
//! assert_eq!(sum.combine_all(vec![1, 2, 3]), 6);
//! ```

#![forbid(unsafe_code)]

use std::rc::Rc;

use super::Semigroup;

/// A first-class monoid over values of type `A`.
pub struct Monoid<A> {
    semigroup: Semigroup<A>,
    identity: Rc<dyn Fn() -> A>,
}

impl<A> Monoid<A> {
    /// Creates a monoid from a semigroup and an identity thunk.
    ///
    /// The identity produced by the thunk must be a two-sided identity for
    /// the semigroup's operation.
    pub fn new<F>(semigroup: Semigroup<A>, identity: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self {
            semigroup,
            identity: Rc::new(identity),
        }
    }

    /// Combines two values into one.
    pub fn combine(&self, first: A, second: A) -> A {
        self.semigroup.combine(first, second)
    }

    /// Returns the identity element.
    pub fn empty(&self) -> A {
        (self.identity)()
    }

    /// The underlying semigroup.
    #[must_use]
    pub fn to_semigroup(&self) -> Semigroup<A> {
        self.semigroup.clone()
    }
}

impl<A: 'static> Monoid<A> {
    /// Combines all elements in an iterator, starting from the identity.
    ///
    /// Unlike [`Semigroup::reduce_all`], this always returns a value (the
    /// identity element for empty iterators).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::typeclass::{Monoid, Semigroup};
    ///
    /// let concat = Monoid::new(
    ///     Semigroup::new(|x: String, y: String| x + &y),
    ///     String::new,
    /// );
    /// assert_eq!(concat.combine_all(Vec::<String>::new()), "");
    /// ```
    pub fn combine_all<I>(&self, iterator: I) -> A
    where
        I: IntoIterator<Item = A>,
    {
        iterator
            .into_iter()
            .fold(self.empty(), |accumulator, element| {
                self.combine(accumulator, element)
            })
    }
}

impl<A> Clone for Monoid<A> {
    fn clone(&self) -> Self {
        Self {
            semigroup: self.semigroup.clone(),
            identity: self.identity.clone(),
        }
    }
}

impl<A> std::fmt::Display for Monoid<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<Monoid>")
    }
}
