//! `Equivalence` - a first-class equivalence relation.
//!
//! An [`Equivalence`] is an instance value wrapping a binary predicate that
//! decides whether two values of a type are equal. Unlike the `PartialEq`
//! trait, an `Equivalence` is supplied per call, so several different
//! equivalences over the same type can coexist (structural equality,
//! case-insensitive equality, equality on a projection, and so on).
//!
//! # Laws
//!
//! The wrapped relation must be an equivalence relation:
//!
//! - Reflexivity: `eq.equals(&a, &a)` is `true`
//! - Symmetry: `eq.equals(&a, &b) == eq.equals(&b, &a)`
//! - Transitivity: if `eq.equals(&a, &b)` and `eq.equals(&b, &c)` then
//!   `eq.equals(&a, &c)`
//!
//! Relations that violate these laws are not defended against; operations
//! keyed by such a relation produce unspecified results.
//!
//! # Examples
//!
//! ```rust
//! use combinars::typeclass::Equivalence;
//!
//! let standard: Equivalence<i32> = Equivalence::standard();
//! assert!(standard.equals(&1, &1));
//!
//! let case_insensitive: Equivalence<String> =
//!     Equivalence::new(|x: &String, y: &String| x.eq_ignore_ascii_case(y));
//! assert!(case_insensitive.equals(&"Hello".to_string(), &"HELLO".to_string()));
//! ```

#![forbid(unsafe_code)]

use std::rc::Rc;

/// A first-class equivalence relation over values of type `A`.
///
/// # Examples
///
/// ```rust
/// use combinars::typeclass::Equivalence;
///
/// let by_length: Equivalence<&str> = Equivalence::new(|x: &&str, y: &&str| x.len() == y.len());
/// assert!(by_length.equals(&"abc", &"xyz"));
/// assert!(!by_length.equals(&"ab", &"abc"));
/// ```
pub struct Equivalence<A> {
    relation: Rc<dyn Fn(&A, &A) -> bool>,
}

impl<A> Equivalence<A> {
    /// Creates an equivalence from a binary predicate.
    ///
    /// The predicate must satisfy the equivalence laws (see module docs).
    pub fn new<F>(relation: F) -> Self
    where
        F: Fn(&A, &A) -> bool + 'static,
    {
        Self {
            relation: Rc::new(relation),
        }
    }

    /// Tests whether two values are equal under this equivalence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::typeclass::Equivalence;
    ///
    /// let eq = Equivalence::standard();
    /// assert!(eq.equals(&"a", &"a"));
    /// assert!(!eq.equals(&"a", &"b"));
    /// ```
    pub fn equals(&self, first: &A, second: &A) -> bool {
        (self.relation)(first, second)
    }
}

impl<A: PartialEq + 'static> Equivalence<A> {
    /// The equivalence that delegates to the type's own `PartialEq`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::typeclass::Equivalence;
    ///
    /// let eq: Equivalence<Vec<i32>> = Equivalence::standard();
    /// assert!(eq.equals(&vec![1, 2], &vec![1, 2]));
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        Self::new(|first, second| first == second)
    }
}

impl<A: 'static> Equivalence<A> {
    /// Derives an equivalence over `B` by projecting each `B` to an `A`
    /// before comparing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::typeclass::Equivalence;
    ///
    /// let by_abs: Equivalence<i32> =
    ///     Equivalence::<i32>::standard().contramap(|n: &i32| n.abs());
    /// assert!(by_abs.equals(&-3, &3));
    /// ```
    pub fn contramap<B, F>(self, projection: F) -> Equivalence<B>
    where
        F: Fn(&B) -> A + 'static,
        B: 'static,
    {
        let relation = self.relation;
        Equivalence::new(move |first: &B, second: &B| {
            (relation)(&projection(first), &projection(second))
        })
    }
}

impl<A> Clone for Equivalence<A> {
    fn clone(&self) -> Self {
        Self {
            relation: self.relation.clone(),
        }
    }
}

impl<A> std::fmt::Display for Equivalence<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<Equivalence>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equivalence_standard_matches_partial_eq() {
        let eq: Equivalence<i32> = Equivalence::standard();
        assert!(eq.equals(&42, &42));
        assert!(!eq.equals(&42, &43));
    }

    #[test]
    fn equivalence_contramap_compares_projections() {
        let by_first_char: Equivalence<String> =
            Equivalence::<Option<char>>::standard().contramap(|s: &String| s.chars().next());
        assert!(by_first_char.equals(&"apple".to_string(), &"avocado".to_string()));
        assert!(!by_first_char.equals(&"apple".to_string(), &"banana".to_string()));
    }

    #[test]
    fn equivalence_clone_shares_relation() {
        let eq: Equivalence<i32> = Equivalence::new(|x, y| x % 10 == y % 10);
        let cloned = eq.clone();
        assert!(eq.equals(&12, &22));
        assert!(cloned.equals(&12, &22));
    }
}
