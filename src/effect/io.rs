//! IO Monad - deferred synchronous computations.
//!
//! The [`IO`] type represents a computation that may perform side effects.
//! Side effects are deferred until [`IO::run`] is called, maintaining
//! referential transparency in pure code.
//!
//! # Design Note
//!
//! An `IO` wraps `Rc<dyn Fn() -> A>`: the action is *re-invocable*, and each
//! call to `run` performs it again. This matters for the layered effect
//! computations in this module, whose lifting constructors must be able to
//! re-run a lifted action on every invocation of the composed computation.
//!
//! # Examples
//!
//! ```rust
//! use combinars::effect::IO;
//!
//! let io = IO::pure(10)
//!     .fmap(|x| x * 2)
//!     .flat_map(|x| IO::pure(x + 1));
//!
//! // Nothing runs until `run` is called
//! assert_eq!(io.run(), 21);
//! ```

#![forbid(unsafe_code)]

use std::rc::Rc;

/// A deferred synchronous computation producing a value of type `A`.
///
/// # Monad Laws
///
/// `IO` satisfies the monad laws:
///
/// 1. **Left Identity**: `IO::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(IO::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct IO<A> {
    /// The wrapped action. Uses `Rc` so composed computations can re-run it.
    run_function: Rc<dyn Fn() -> A>,
}

impl<A: 'static> IO<A> {
    /// Creates a new IO action from a closure.
    ///
    /// The closure is not executed until [`IO::run`] is called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::effect::IO;
    ///
    /// let io = IO::new(|| 42);
    /// assert_eq!(io.run(), 42);
    /// ```
    pub fn new<F>(action: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self {
            run_function: Rc::new(action),
        }
    }

    /// Wraps a pure value in an IO action.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move || value.clone())
    }

    /// Runs the action, performing its side effects.
    ///
    /// Each call performs the action again.
    pub fn run(&self) -> A {
        (self.run_function)()
    }

    /// Maps a function over the produced value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::effect::IO;
    ///
    /// let io = IO::pure(21).fmap(|x| x * 2);
    /// assert_eq!(io.run(), 42);
    /// ```
    pub fn fmap<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original = self.run_function;
        IO::new(move || function((original)()))
    }

    /// Chains this action with a function producing the next action.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::effect::IO;
    ///
    /// let io = IO::pure(20).flat_map(|x| IO::new(move || x + 22));
    /// assert_eq!(io.run(), 42);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> IO<B> + 'static,
        B: 'static,
    {
        let original = self.run_function;
        IO::new(move || function((original)()).run())
    }

    /// Alias for `flat_map`.
    pub fn and_then<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> IO<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two actions, discarding the first result.
    #[must_use]
    pub fn then<B>(self, next: IO<B>) -> IO<B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Combines two actions using a binary function.
    pub fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let first = self.run_function;
        let second = other.run_function;
        IO::new(move || function((first)(), (second)()))
    }

    /// Combines two actions into a tuple.
    #[must_use]
    pub fn product<B>(self, other: IO<B>) -> IO<(A, B)>
    where
        B: 'static,
    {
        self.map2(other, |first, second| (first, second))
    }
}

impl<A> Clone for IO<A> {
    fn clone(&self) -> Self {
        Self {
            run_function: self.run_function.clone(),
        }
    }
}

impl<A> std::fmt::Display for IO<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<IO>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn io_defers_side_effects_until_run() {
        let counter = Rc::new(Cell::new(0));
        let observed = counter.clone();
        let io = IO::new(move || {
            observed.set(observed.get() + 1);
            observed.get()
        });
        assert_eq!(counter.get(), 0);
        assert_eq!(io.run(), 1);
        assert_eq!(io.run(), 2);
    }

    #[test]
    fn io_flat_map_sequences_actions() {
        let io = IO::pure(1).flat_map(|x| IO::pure(x + 1)).fmap(|x| x * 10);
        assert_eq!(io.run(), 20);
    }
}
