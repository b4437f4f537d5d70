//! `Semigroup` - a first-class associative combining operation.
//!
//! A [`Semigroup`] is an instance value wrapping an associative binary
//! operation. It is supplied per call, so several combining strategies for
//! the same type can coexist (sum or product over numbers, first-wins or
//! last-wins over arbitrary values, concatenation over collections).
//!
//! # Laws
//!
//! The wrapped operation must be associative:
//!
//! `combine(combine(a, b), c) == combine(a, combine(b, c))`
//!
//! Non-associative operations are not defended against.
//!
//! # Examples
//!
//! ```rust
//! use combinars::typeclass::Semigroup;
//!
//! let sum: Semigroup<i32> = Semigroup::new(|x, y| x + y);
//! assert_eq!(sum.combine(1, 2), 3);
//!
//! let first: Semigroup<&str> = Semigroup::first();
//! assert_eq!(first.combine("a", "b"), "a");
//! ```

#![forbid(unsafe_code)]

use std::rc::Rc;

/// A first-class associative combining operation over values of type `A`.
///
/// # Examples
///
/// ```rust
/// use combinars::typeclass::Semigroup;
///
/// let concat: Semigroup<String> = Semigroup::new(|x: String, y: String| x + &y);
/// assert_eq!(
///     concat.combine("Hello, ".to_string(), "World!".to_string()),
///     "Hello, World!"
/// );
/// ```
pub struct Semigroup<A> {
    operation: Rc<dyn Fn(A, A) -> A>,
}

impl<A> Semigroup<A> {
    /// Creates a semigroup from an associative binary operation.
    pub fn new<F>(operation: F) -> Self
    where
        F: Fn(A, A) -> A + 'static,
    {
        Self {
            operation: Rc::new(operation),
        }
    }

    /// Combines two values into one.
    pub fn combine(&self, first: A, second: A) -> A {
        (self.operation)(first, second)
    }
}

impl<A: 'static> Semigroup<A> {
    /// The semigroup that always keeps the first operand.
    #[must_use]
    pub fn first() -> Self {
        Self::new(|first, _| first)
    }

    /// The semigroup that always keeps the second operand.
    #[must_use]
    pub fn last() -> Self {
        Self::new(|_, second| second)
    }

    /// The semigroup with the operand order swapped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::typeclass::Semigroup;
    ///
    /// let concat: Semigroup<String> = Semigroup::new(|x: String, y: String| x + &y);
    /// let reversed = concat.reverse();
    /// assert_eq!(reversed.combine("a".to_string(), "b".to_string()), "ba");
    /// ```
    #[must_use]
    pub fn reverse(self) -> Self {
        let operation = self.operation;
        Self::new(move |first, second| (operation)(second, first))
    }

    /// Reduces all elements in an iterator using the combining operation.
    ///
    /// Returns `None` if the iterator is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::typeclass::Semigroup;
    ///
    /// let sum: Semigroup<i32> = Semigroup::new(|x, y| x + y);
    /// assert_eq!(sum.reduce_all(vec![1, 2, 3]), Some(6));
    /// assert_eq!(sum.reduce_all(Vec::<i32>::new()), None);
    /// ```
    pub fn reduce_all<I>(&self, iterator: I) -> Option<A>
    where
        I: IntoIterator<Item = A>,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| self.combine(accumulator, element))
    }
}

impl<A> Clone for Semigroup<A> {
    fn clone(&self) -> Self {
        Self {
            operation: self.operation.clone(),
        }
    }
}

impl<A> std::fmt::Display for Semigroup<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<Semigroup>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semigroup_combine_applies_operation() {
        let product: Semigroup<i32> = Semigroup::new(|x, y| x * y);
        assert_eq!(product.combine(6, 7), 42);
    }

    #[test]
    fn semigroup_first_and_last() {
        assert_eq!(Semigroup::<i32>::first().combine(1, 2), 1);
        assert_eq!(Semigroup::<i32>::last().combine(1, 2), 2);
    }

    #[test]
    fn semigroup_reduce_all_folds_left_to_right() {
        let concat: Semigroup<String> = Semigroup::new(|x: String, y: String| x + &y);
        let parts = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(concat.reduce_all(parts), Some("abc".to_string()));
    }
}
