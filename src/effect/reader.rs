//! Reader Monad - computations that read from an environment.
//!
//! The [`Reader`] type represents a computation that depends on a read-only
//! environment. Composing readers threads the environment through all of
//! them implicitly.
//!
//! # Examples
//!
//! ```rust
//! use combinars::effect::Reader;
//!
//! #[derive(Clone)]
//! struct Config {
//!     multiplier: i32,
//! }
//!
//! let computation: Reader<Config, i32> =
//!     Reader::asks(|config: &Config| config.multiplier).fmap(|m| m * 10);
//! assert_eq!(computation.run(Config { multiplier: 4 }), 40);
//! ```

#![forbid(unsafe_code)]

use std::rc::Rc;

/// A computation that reads from an environment of type `R` to produce an
/// `A`.
///
/// # Examples
///
/// ```rust
/// use combinars::effect::Reader;
///
/// let reader: Reader<i32, i32> = Reader::new(|environment| environment + 1);
/// assert_eq!(reader.run(41), 42);
/// ```
pub struct Reader<R, A> {
    run_function: Rc<dyn Fn(R) -> A>,
}

impl<R: 'static, A: 'static> Reader<R, A> {
    /// Creates a reader from a function of the environment.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the reader with the given environment.
    pub fn run(&self, environment: R) -> A {
        (self.run_function)(environment)
    }

    /// Creates a reader that ignores the environment and returns a constant.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Maps a function over the result.
    pub fn fmap<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original = self.run_function;
        Reader::new(move |environment| function((original)(environment)))
    }

    /// Chains this reader with a function producing the next reader.
    ///
    /// Both readers receive the same environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|env: i32| env + 1)
    ///     .flat_map(|x| Reader::new(move |env: i32| x * env));
    /// assert_eq!(reader.run(10), 110);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> Reader<R, B> + 'static,
        B: 'static,
        R: Clone,
    {
        let original = self.run_function;
        Reader::new(move |environment: R| {
            let value = (original)(environment.clone());
            function(value).run(environment)
        })
    }

    /// Alias for `flat_map`.
    pub fn and_then<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> Reader<R, B> + 'static,
        B: 'static,
        R: Clone,
    {
        self.flat_map(function)
    }

    /// Sequences two readers, discarding the first result.
    #[must_use]
    pub fn then<B>(self, next: Reader<R, B>) -> Reader<R, B>
    where
        B: 'static,
        R: Clone,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Combines two readers using a binary function.
    pub fn map2<B, C, F>(self, other: Reader<R, B>, function: F) -> Reader<R, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
        R: Clone,
    {
        let first = self.run_function;
        let second = other.run_function;
        Reader::new(move |environment: R| {
            function((first)(environment.clone()), (second)(environment))
        })
    }

    /// Combines two readers into a tuple.
    #[must_use]
    pub fn product<B>(self, other: Reader<R, B>) -> Reader<R, (A, B)>
    where
        B: 'static,
        R: Clone,
    {
        self.map2(other, |first, second| (first, second))
    }

    /// Creates a reader that projects a value out of the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::effect::Reader;
    ///
    /// let length: Reader<String, usize> = Reader::asks(|s: &String| s.len());
    /// assert_eq!(length.run("hello".to_string()), 5);
    /// ```
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(&R) -> A + 'static,
    {
        Self::new(move |environment| projection(&environment))
    }

    /// Runs a reader against a locally modified environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::effect::Reader;
    ///
    /// let doubled_env: Reader<i32, i32> =
    ///     Reader::local(|env: i32| env * 2, Reader::new(|env: i32| env + 1));
    /// assert_eq!(doubled_env.run(10), 21);
    /// ```
    pub fn local<F>(modifier: F, computation: Self) -> Self
    where
        F: Fn(R) -> R + 'static,
    {
        Self::new(move |environment| computation.run(modifier(environment)))
    }
}

impl<Env: Clone + 'static> Reader<Env, Env> {
    /// The reader that returns the environment itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::effect::Reader;
    ///
    /// let ask: Reader<i32, i32> = Reader::ask();
    /// assert_eq!(ask.run(42), 42);
    /// ```
    #[must_use]
    pub fn ask() -> Self {
        Self::new(|environment| environment)
    }
}

impl<R, A> Clone for Reader<R, A> {
    fn clone(&self) -> Self {
        Self {
            run_function: self.run_function.clone(),
        }
    }
}

impl<R, A> std::fmt::Display for Reader<R, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<Reader>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reader_threads_environment_through_flat_map() {
        let reader: Reader<i32, i32> =
            Reader::ask().flat_map(|env| Reader::new(move |e: i32| env + e));
        assert_eq!(reader.run(21), 42);
    }

    #[test]
    fn reader_local_modifies_environment_for_inner_computation() {
        let inner: Reader<i32, i32> = Reader::ask();
        let outer = Reader::local(|env: i32| env + 1, inner);
        assert_eq!(outer.run(41), 42);
    }
}
