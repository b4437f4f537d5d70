//! State Monad - computations threading a state value.
//!
//! The [`State`] type represents a computation that receives a state and
//! produces a result together with the next state. Composing states threads
//! the state through the computations strictly in sequence.
//!
//! # Examples
//!
//! ```rust
//! use combinars::effect::State;
//!
//! let counter: State<i32, i32> = State::get()
//!     .flat_map(|current| State::put(current + 1).then(State::pure(current)));
//!
//! let (result, final_state) = counter.run(5);
//! assert_eq!(result, 5);
//! assert_eq!(final_state, 6);
//! ```

#![forbid(unsafe_code)]

use std::rc::Rc;

/// A computation that transforms a state of type `S` while producing an `A`.
///
/// # Examples
///
/// ```rust
/// use combinars::effect::State;
///
/// let state: State<i32, i32> = State::new(|s| (s * 2, s + 1));
/// assert_eq!(state.run(10), (20, 11));
/// ```
pub struct State<S, A> {
    run_function: Rc<dyn Fn(S) -> (A, S)>,
}

impl<S: 'static, A: 'static> State<S, A> {
    /// Creates a state computation from a transition function.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation, returning the result and the final state.
    pub fn run(&self, initial_state: S) -> (A, S) {
        (self.run_function)(initial_state)
    }

    /// Runs the computation and returns only the result.
    pub fn eval(&self, initial_state: S) -> A {
        self.run(initial_state).0
    }

    /// Runs the computation and returns only the final state.
    pub fn exec(&self, initial_state: S) -> S {
        self.run(initial_state).1
    }

    /// Creates a computation that returns a constant without touching the
    /// state.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Maps a function over the result.
    pub fn fmap<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original = self.run_function;
        State::new(move |state| {
            let (value, next_state) = (original)(state);
            (function(value), next_state)
        })
    }

    /// Chains this computation with a function producing the next one.
    ///
    /// The next computation receives the state produced by this one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s| (s, s + 1))
    ///     .flat_map(|v| State::new(move |s| (v + s, s * 2)));
    /// assert_eq!(state.run(10), (21, 22));
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        let original = self.run_function;
        State::new(move |state| {
            let (value, intermediate_state) = (original)(state);
            function(value).run(intermediate_state)
        })
    }

    /// Alias for `flat_map`.
    pub fn and_then<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first result.
    #[must_use]
    pub fn then<B>(self, next: State<S, B>) -> State<S, B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Combines two computations using a binary function, threading the
    /// state left to right.
    pub fn map2<B, C, F>(self, other: State<S, B>, function: F) -> State<S, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let first = self.run_function;
        let second = other.run_function;
        State::new(move |state| {
            let (first_value, intermediate_state) = (first)(state);
            let (second_value, final_state) = (second)(intermediate_state);
            (function(first_value, second_value), final_state)
        })
    }

    /// Combines two computations into a tuple.
    #[must_use]
    pub fn product<B>(self, other: State<S, B>) -> State<S, (A, B)>
    where
        B: 'static,
    {
        self.map2(other, |first, second| (first, second))
    }

    /// Creates a computation that projects a value from the state without
    /// modifying it.
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(move |state| (projection(&state), state))
    }
}

impl<St: Clone + 'static> State<St, St> {
    /// The computation that returns the current state as its result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::effect::State;
    ///
    /// let state: State<i32, i32> = State::get();
    /// assert_eq!(state.run(42), (42, 42));
    /// ```
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: St| (state.clone(), state))
    }
}

impl<S: Clone + 'static> State<S, ()> {
    /// The computation that replaces the state.
    pub fn put(new_state: S) -> Self {
        Self::new(move |_| ((), new_state.clone()))
    }

    /// The computation that transforms the state with a function.
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| ((), modifier(state)))
    }
}

impl<S, A> Clone for State<S, A> {
    fn clone(&self) -> Self {
        Self {
            run_function: self.run_function.clone(),
        }
    }
}

impl<S, A> std::fmt::Display for State<S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<State>")
    }
}
