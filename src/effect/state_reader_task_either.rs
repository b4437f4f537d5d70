//! `StateReaderTaskEither` - the four-layer effect computation.
//!
//! A [`StateReaderTaskEither<S, R, E, A>`] describes a deferred,
//! environment-parameterized, failure-aware, state-transforming computation:
//! a function from a state `S` to an environment-dependent asynchronous
//! computation yielding either a typed failure `E` or a result `A` paired
//! with the next state.
//!
//! # Overview
//!
//! The type composes four effects with fixed rules:
//!
//! - **State**: threading is strictly sequential; each step receives the
//!   state produced by the previous step.
//! - **Reader**: every step receives the same read-only environment;
//!   [`StateReaderTaskEither::local`] adapts a computation to a richer
//!   environment.
//! - **Task**: nothing runs until an executor is called; each executor
//!   invocation starts a fresh unit of work.
//! - **Either**: failures are values; once one occurs, all remaining steps
//!   are skipped and the failure propagates unchanged until intercepted by
//!   [`StateReaderTaskEither::or_else`], [`StateReaderTaskEither::bimap`],
//!   or [`StateReaderTaskEither::map_left`].
//!
//! # Laws
//!
//! `StateReaderTaskEither` satisfies the Functor, Applicative, and Monad
//! laws, plus the `MonadState` laws:
//!
//! - Left Identity: `pure(a).flat_map(f) == f(a)`
//! - Right Identity: `m.flat_map(pure) == m`
//! - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//! - Get Put Law: `get().flat_map(|s| put(s)) == pure(())`
//! - Put Put Law: `put(s1).then(put(s2)) == put(s2)`
//!
//! # Examples
//!
//! ```rust
//! use combinars::effect::StateReaderTaskEither;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let computation: StateReaderTaskEither<i32, (), String, ()> =
//!     StateReaderTaskEither::get().flat_map(|n| StateReaderTaskEither::put(n + 1));
//!
//! let result = computation.run(5, ()).run().await;
//! assert_eq!(result, Ok(((), 6)));
//! # });
//! ```

#![forbid(unsafe_code)]

use std::rc::Rc;

use super::io::IO;
use super::reader::Reader;
use super::state::State;
use super::task::Task;
use super::task_either::TaskEither;

/// A deferred, environment-parameterized, failure-aware, state-transforming
/// computation.
///
/// # Type Parameters
///
/// - `S`: The threaded state type
/// - `R`: The read-only environment type
/// - `E`: The failure type
/// - `A`: The result type
///
/// # Examples
///
/// ```rust
/// use combinars::effect::StateReaderTaskEither;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let computation: StateReaderTaskEither<u32, i32, String, i32> =
///     StateReaderTaskEither::ask().fmap(|environment| environment * 2);
/// assert_eq!(computation.evaluate(0, 21).run().await, Ok(42));
/// # });
/// ```
pub struct StateReaderTaskEither<S, R, E, A>
where
    S: 'static,
    R: 'static,
    E: 'static,
    A: 'static,
{
    /// The wrapped transition function. Uses `Rc` to allow cloning for
    /// composition.
    run_function: Rc<dyn Fn(S, R) -> Task<Result<(A, S), E>>>,
}

// =============================================================================
// Construction and Executors
// =============================================================================

impl<S, R, E, A> StateReaderTaskEither<S, R, E, A>
where
    S: 'static,
    R: 'static,
    E: 'static,
    A: 'static,
{
    /// Creates a computation from a transition function.
    pub fn new<F>(transition: F) -> Self
    where
        F: Fn(S, R) -> Task<Result<(A, S), E>> + 'static,
    {
        Self {
            run_function: Rc::new(transition),
        }
    }

    /// Runs the computation: supplies the initial state and the environment
    /// and returns the deferred result-with-state.
    ///
    /// This is one of the only operations that produce an executable task;
    /// everything else merely composes descriptions.
    pub fn run(&self, initial_state: S, environment: R) -> Task<Result<(A, S), E>> {
        (self.run_function)(initial_state, environment)
    }

    /// Runs the computation, discarding the final state.
    pub fn evaluate(&self, initial_state: S, environment: R) -> Task<Result<A, E>> {
        self.run(initial_state, environment)
            .fmap(|outcome| outcome.map(|(value, _)| value))
    }

    /// Runs the computation, discarding the result.
    pub fn execute(&self, initial_state: S, environment: R) -> Task<Result<S, E>> {
        self.run(initial_state, environment)
            .fmap(|outcome| outcome.map(|(_, final_state)| final_state))
    }

    /// A computation that succeeds immediately with the given value, leaving
    /// the state untouched.
    pub fn right(value: A) -> Self
    where
        A: Clone,
        S: Clone,
    {
        Self::new(move |state: S, _| {
            let value = value.clone();
            Task::new(move || {
                let outcome = Ok((value.clone(), state.clone()));
                async move { outcome }
            })
        })
    }

    /// Alias for [`StateReaderTaskEither::right`].
    pub fn pure(value: A) -> Self
    where
        A: Clone,
        S: Clone,
    {
        Self::right(value)
    }

    /// A computation that fails immediately with the given error,
    /// independent of state and environment.
    pub fn left(error: E) -> Self
    where
        E: Clone,
    {
        Self::new(move |_, _| {
            let error = error.clone();
            Task::new(move || {
                let outcome = Err(error.clone());
                async move { outcome }
            })
        })
    }

    /// Alias for [`StateReaderTaskEither::left`].
    pub fn throw_error(error: E) -> Self
    where
        E: Clone,
    {
        Self::left(error)
    }

    /// A computation that projects a value from the current state without
    /// modifying it.
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
        S: Clone,
    {
        let projection = Rc::new(projection);
        Self::new(move |state: S, _| {
            let projection = projection.clone();
            Task::new(move || {
                let outcome = Ok((projection(&state), state.clone()));
                async move { outcome }
            })
        })
    }

    // =========================================================================
    // Lifting Constructors
    // =========================================================================

    /// Lifts a state computation into the success channel, applying its
    /// transition without the asynchronous or environment layers.
    pub fn right_state(computation: State<S, A>) -> Self
    where
        S: Clone,
    {
        Self::new(move |state: S, _| {
            let computation = computation.clone();
            Task::new(move || {
                let outcome = Ok(computation.run(state.clone()));
                async move { outcome }
            })
        })
    }

    /// Lifts a state computation into the failure channel: its result
    /// becomes the error and the state transition is discarded.
    pub fn left_state(computation: State<S, E>) -> Self
    where
        S: Clone,
    {
        Self::new(move |state: S, _| {
            let computation = computation.clone();
            Task::new(move || {
                let (error, _) = computation.run(state.clone());
                async move { Err(error) }
            })
        })
    }

    /// Lifts a reader into the success channel, holding the state unchanged.
    pub fn right_reader(computation: Reader<R, A>) -> Self
    where
        S: Clone,
        R: Clone,
    {
        Self::new(move |state: S, environment: R| {
            let computation = computation.clone();
            Task::new(move || {
                let outcome = Ok((computation.run(environment.clone()), state.clone()));
                async move { outcome }
            })
        })
    }

    /// Lifts a reader into the failure channel.
    pub fn left_reader(computation: Reader<R, E>) -> Self
    where
        R: Clone,
    {
        Self::new(move |_, environment: R| {
            let computation = computation.clone();
            Task::new(move || {
                let error = computation.run(environment.clone());
                async move { Err(error) }
            })
        })
    }

    /// Lifts a task into the success channel, holding the state unchanged.
    pub fn right_task(task: Task<A>) -> Self
    where
        S: Clone,
    {
        Self::new(move |state: S, _| {
            task.clone().fmap(move |value| Ok((value, state.clone())))
        })
    }

    /// Lifts a task into the failure channel.
    pub fn left_task(task: Task<E>) -> Self {
        Self::new(move |_, _| task.clone().fmap(|error| Err(error)))
    }

    /// Lifts a failure-aware task, holding the state unchanged.
    pub fn from_task_either(computation: TaskEither<E, A>) -> Self
    where
        S: Clone,
    {
        Self::new(move |state: S, _| {
            computation
                .clone()
                .to_task()
                .fmap(move |outcome| outcome.map(|value| (value, state.clone())))
        })
    }

    /// Lifts a synchronous action into the success channel, holding the
    /// state unchanged. The action is re-run on every invocation.
    pub fn right_io(io: IO<A>) -> Self
    where
        S: Clone,
    {
        Self::new(move |state: S, _| {
            let io = io.clone();
            Task::new(move || {
                let outcome = Ok((io.run(), state.clone()));
                async move { outcome }
            })
        })
    }

    /// Lifts a synchronous action into the failure channel.
    pub fn left_io(io: IO<E>) -> Self {
        Self::new(move |_, _| {
            let io = io.clone();
            Task::new(move || {
                let error = io.run();
                async move { Err(error) }
            })
        })
    }

    /// Lifts a synchronous action that already produces a `Result`.
    pub fn from_io_either(io: IO<Result<A, E>>) -> Self
    where
        S: Clone,
    {
        Self::new(move |state: S, _| {
            let io = io.clone();
            Task::new(move || {
                let outcome = io.run().map(|value| (value, state.clone()));
                async move { outcome }
            })
        })
    }

    /// Lifts an already-evaluated `Result`.
    pub fn from_result(result: Result<A, E>) -> Self
    where
        A: Clone,
        E: Clone,
        S: Clone,
    {
        match result {
            Ok(value) => Self::right(value),
            Err(error) => Self::left(error),
        }
    }

    /// Lifts an `Option`, failing with the supplied error when absent.
    pub fn from_option<F>(option: Option<A>, on_none: F) -> Self
    where
        F: FnOnce() -> E,
        A: Clone,
        E: Clone,
        S: Clone,
    {
        option.map_or_else(|| Self::left(on_none()), Self::right)
    }

    /// Lifts a value, failing when it does not satisfy the predicate.
    pub fn from_predicate<P, F>(value: A, predicate: P, on_false: F) -> Self
    where
        P: FnOnce(&A) -> bool,
        F: FnOnce(A) -> E,
        A: Clone,
        E: Clone,
        S: Clone,
    {
        if predicate(&value) {
            Self::right(value)
        } else {
            Self::left(on_false(value))
        }
    }

    // =========================================================================
    // Functor / Bifunctor
    // =========================================================================

    /// Maps a function over the result, leaving state threading and the
    /// failure and environment behavior untouched.
    pub fn fmap<B, F>(self, function: F) -> StateReaderTaskEither<S, R, E, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original = self.run_function;
        let function = Rc::new(function);
        StateReaderTaskEither::new(move |state, environment| {
            let function = function.clone();
            (original)(state, environment)
                .fmap(move |outcome| outcome.map(|(value, next_state)| (function(value), next_state)))
        })
    }

    /// Maps a pair of functions over the failure and success channels
    /// independently, without affecting state threading.
    pub fn bimap<G, B, F, H>(
        self,
        left_function: F,
        right_function: H,
    ) -> StateReaderTaskEither<S, R, G, B>
    where
        F: Fn(E) -> G + 'static,
        H: Fn(A) -> B + 'static,
        G: 'static,
        B: 'static,
    {
        let original = self.run_function;
        let left_function = Rc::new(left_function);
        let right_function = Rc::new(right_function);
        StateReaderTaskEither::new(move |state, environment| {
            let left_function = left_function.clone();
            let right_function = right_function.clone();
            (original)(state, environment).fmap(move |outcome| {
                outcome
                    .map(|(value, next_state)| (right_function(value), next_state))
                    .map_err(|error| left_function(error))
            })
        })
    }

    /// Maps a function over the failure channel.
    pub fn map_left<G, F>(self, function: F) -> StateReaderTaskEither<S, R, G, A>
    where
        F: Fn(E) -> G + 'static,
        G: 'static,
    {
        let original = self.run_function;
        let function = Rc::new(function);
        StateReaderTaskEither::new(move |state, environment| {
            let function = function.clone();
            (original)(state, environment)
                .fmap(move |outcome| outcome.map_err(|error| function(error)))
        })
    }

    /// Converts the failure type via `From`.
    ///
    /// Where the original pairs every combinator with a "less strict"
    /// widened variant, a `From` conversion on the failure channel expresses
    /// the same union directly.
    #[must_use]
    pub fn widen_error<G>(self) -> StateReaderTaskEither<S, R, G, A>
    where
        G: From<E> + 'static,
    {
        self.map_left(G::from)
    }

    /// Adapts the computation to a richer environment by projecting the
    /// required one out of it.
    ///
    /// This is the environment counterpart of [`widen_error`]: a computation
    /// requiring `R` becomes one requiring any `R2` from which an `R` can be
    /// projected, so two computations with different requirements compose at
    /// the intersection of their capabilities.
    ///
    /// [`widen_error`]: StateReaderTaskEither::widen_error
    pub fn local<R2, F>(self, projection: F) -> StateReaderTaskEither<S, R2, E, A>
    where
        F: Fn(R2) -> R + 'static,
        R2: 'static,
    {
        let original = self.run_function;
        StateReaderTaskEither::new(move |state, environment: R2| {
            (original)(state, projection(environment))
        })
    }

    // =========================================================================
    // Monad
    // =========================================================================

    /// Composes computations in sequence: runs this computation, feeds its
    /// result to `function`, and runs the produced computation against the
    /// state this one left behind.
    ///
    /// On failure, `function` is never invoked and the failure propagates
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::effect::StateReaderTaskEither;
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// let computation: StateReaderTaskEither<i32, (), String, i32> =
    ///     StateReaderTaskEither::right(2)
    ///         .flat_map(|x| StateReaderTaskEither::right(x * 21));
    /// assert_eq!(computation.evaluate(0, ()).run().await, Ok(42));
    /// # });
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> StateReaderTaskEither<S, R, E, B>
    where
        F: Fn(A) -> StateReaderTaskEither<S, R, E, B> + 'static,
        B: 'static,
        R: Clone,
    {
        let original = self.run_function;
        let function = Rc::new(function);
        StateReaderTaskEither::new(move |state, environment: R| {
            let first = (original)(state, environment.clone());
            let function = function.clone();
            let environment = environment.clone();
            Task::new(move || {
                let future = first.run();
                let function = function.clone();
                let environment = environment.clone();
                async move {
                    match future.await {
                        Ok((value, next_state)) => {
                            function(value).run(next_state, environment).run().await
                        }
                        Err(error) => Err(error),
                    }
                }
            })
        })
    }

    /// Alias for `flat_map`.
    pub fn and_then<B, F>(self, function: F) -> StateReaderTaskEither<S, R, E, B>
    where
        F: Fn(A) -> StateReaderTaskEither<S, R, E, B> + 'static,
        B: 'static,
        R: Clone,
    {
        self.flat_map(function)
    }

    /// Composes computations in sequence, keeping only the result of the
    /// first. State changes and failures of the second still apply.
    pub fn flat_map_first<B, F>(self, function: F) -> Self
    where
        F: Fn(A) -> StateReaderTaskEither<S, R, E, B> + 'static,
        B: 'static,
        A: Clone,
        R: Clone,
    {
        self.flat_map(move |value: A| {
            let keep = value.clone();
            function(value).fmap(move |_| keep.clone())
        })
    }

    /// Sequences two computations, discarding the first result.
    #[must_use]
    pub fn then<B>(self, next: StateReaderTaskEither<S, R, E, B>) -> StateReaderTaskEither<S, R, E, B>
    where
        B: 'static,
        R: Clone,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Chains a `Result`-producing function into the computation.
    pub fn flat_map_result<B, F>(self, function: F) -> StateReaderTaskEither<S, R, E, B>
    where
        F: Fn(A) -> Result<B, E> + 'static,
        B: Clone + 'static,
        E: Clone,
        S: Clone,
        R: Clone,
    {
        self.flat_map(move |value| StateReaderTaskEither::from_result(function(value)))
    }

    /// Chains a function producing a synchronous failure-aware action.
    pub fn flat_map_io_either<B, F>(self, function: F) -> StateReaderTaskEither<S, R, E, B>
    where
        F: Fn(A) -> IO<Result<B, E>> + 'static,
        B: 'static,
        S: Clone,
        R: Clone,
    {
        self.flat_map(move |value| StateReaderTaskEither::from_io_either(function(value)))
    }

    /// Chains a function producing a failure-aware task.
    pub fn flat_map_task_either<B, F>(self, function: F) -> StateReaderTaskEither<S, R, E, B>
    where
        F: Fn(A) -> TaskEither<E, B> + 'static,
        B: 'static,
        S: Clone,
        R: Clone,
    {
        self.flat_map(move |value| StateReaderTaskEither::from_task_either(function(value)))
    }

    /// Fails with the supplied error when the result does not satisfy the
    /// predicate.
    pub fn filter_or_else<P, F>(self, predicate: P, on_false: F) -> Self
    where
        P: Fn(&A) -> bool + 'static,
        F: Fn(&A) -> E + 'static,
        A: Clone,
        E: Clone,
        S: Clone,
        R: Clone,
    {
        self.flat_map(move |value| {
            if predicate(&value) {
                Self::right(value)
            } else {
                Self::left(on_false(&value))
            }
        })
    }

    // =========================================================================
    // Applicative
    // =========================================================================

    /// Applies a computation yielding a function to a computation yielding
    /// its argument. The function computation runs first and its resulting
    /// state feeds the argument computation.
    pub fn apply<B, C>(
        self,
        argument: StateReaderTaskEither<S, R, E, B>,
    ) -> StateReaderTaskEither<S, R, E, C>
    where
        A: Fn(B) -> C + 'static,
        B: 'static,
        C: 'static,
        R: Clone,
    {
        self.flat_map(move |function: A| {
            argument.clone().fmap(move |value| function(value))
        })
    }

    /// Combines two computations using a binary function, threading the
    /// state left to right.
    pub fn map2<B, C, F>(
        self,
        other: StateReaderTaskEither<S, R, E, B>,
        function: F,
    ) -> StateReaderTaskEither<S, R, E, C>
    where
        F: Fn(A, B) -> C + 'static,
        A: Clone,
        B: 'static,
        C: 'static,
        R: Clone,
    {
        let function = Rc::new(function);
        self.flat_map(move |first| {
            let function = function.clone();
            other
                .clone()
                .fmap(move |second| function(first.clone(), second))
        })
    }

    /// Combines two computations into a tuple.
    #[must_use]
    pub fn product<B>(
        self,
        other: StateReaderTaskEither<S, R, E, B>,
    ) -> StateReaderTaskEither<S, R, E, (A, B)>
    where
        A: Clone,
        B: 'static,
        R: Clone,
    {
        self.map2(other, |first, second| (first, second))
    }

    // =========================================================================
    // Alternative
    // =========================================================================

    /// On failure, discards the error and runs the alternative against the
    /// *original* state: state changes from the failed attempt are not
    /// retained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::effect::StateReaderTaskEither;
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// let attempt: StateReaderTaskEither<i32, (), String, i32> =
    ///     StateReaderTaskEither::put(99)
    ///         .then(StateReaderTaskEither::left("boom".to_string()));
    /// let recovered = attempt.or_else(|| StateReaderTaskEither::get());
    ///
    /// // The alternative sees the pre-attempt state, not 99.
    /// assert_eq!(recovered.run(5, ()).run().await, Ok((5, 5)));
    /// # });
    /// ```
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: Fn() -> Self + 'static,
        S: Clone,
        R: Clone,
    {
        let original = self.run_function;
        let alternative = Rc::new(alternative);
        Self::new(move |state: S, environment: R| {
            let first = (original)(state.clone(), environment.clone());
            let alternative = alternative.clone();
            let state = state.clone();
            let environment = environment.clone();
            Task::new(move || {
                let future = first.run();
                let alternative = alternative.clone();
                let state = state.clone();
                let environment = environment.clone();
                async move {
                    match future.await {
                        Ok(success) => Ok(success),
                        Err(_) => alternative().run(state, environment).run().await,
                    }
                }
            })
        })
    }
}

// =============================================================================
// State Access
// =============================================================================

impl<S, R, E> StateReaderTaskEither<S, R, E, S>
where
    S: Clone + 'static,
    R: 'static,
    E: 'static,
{
    /// The computation that succeeds with the current state as both result
    /// and unchanged state.
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: S, _| {
            Task::new(move || {
                let outcome = Ok((state.clone(), state.clone()));
                async move { outcome }
            })
        })
    }
}

impl<S, R, E> StateReaderTaskEither<S, R, E, ()>
where
    S: Clone + 'static,
    R: 'static,
    E: 'static,
{
    /// The computation that replaces the state with the given value.
    pub fn put(new_state: S) -> Self {
        Self::new(move |_, _| {
            let new_state = new_state.clone();
            Task::new(move || {
                let outcome = Ok(((), new_state.clone()));
                async move { outcome }
            })
        })
    }

    /// The computation that transforms the state with a function.
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        let modifier = Rc::new(modifier);
        Self::new(move |state: S, _| {
            let modifier = modifier.clone();
            Task::new(move || {
                let outcome = Ok(((), modifier(state.clone())));
                async move { outcome }
            })
        })
    }
}

// =============================================================================
// Environment Access
// =============================================================================

impl<S, R, E> StateReaderTaskEither<S, R, E, R>
where
    S: Clone + 'static,
    R: Clone + 'static,
    E: 'static,
{
    /// The computation that succeeds with the environment itself.
    #[must_use]
    pub fn ask() -> Self {
        Self::right_reader(Reader::ask())
    }
}

impl<S, R, E, A> StateReaderTaskEither<S, R, E, A>
where
    S: Clone + 'static,
    R: Clone + 'static,
    E: 'static,
    A: 'static,
{
    /// The computation that projects a value out of the environment.
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(&R) -> A + 'static,
    {
        Self::right_reader(Reader::asks(projection))
    }
}

// =============================================================================
// Flatten
// =============================================================================

impl<S, R, E, A> StateReaderTaskEither<S, R, E, StateReaderTaskEither<S, R, E, A>>
where
    S: 'static,
    R: Clone + 'static,
    E: 'static,
    A: 'static,
{
    /// Collapses a nested computation into a single layer.
    #[must_use]
    pub fn flatten(self) -> StateReaderTaskEither<S, R, E, A> {
        self.flat_map(|inner| inner)
    }
}

impl<S, R, E, A> Clone for StateReaderTaskEither<S, R, E, A>
where
    S: 'static,
    R: 'static,
    E: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: self.run_function.clone(),
        }
    }
}

impl<S, R, E, A> std::fmt::Display for StateReaderTaskEither<S, R, E, A>
where
    S: 'static,
    R: 'static,
    E: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<StateReaderTaskEither>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;

    fn block_on<T>(future: impl Future<Output = T>) -> T {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime")
            .block_on(future)
    }

    type Computation<A> = StateReaderTaskEither<i32, (), String, A>;

    #[test]
    fn state_reader_task_either_threads_state_through_flat_map() {
        let computation: Computation<()> =
            StateReaderTaskEither::get().flat_map(|n| StateReaderTaskEither::put(n + 1));
        assert_eq!(block_on(computation.run(5, ()).run()), Ok(((), 6)));
    }

    #[test]
    fn state_reader_task_either_left_ignores_state_and_environment() {
        let computation: Computation<i32> = StateReaderTaskEither::left("boom".to_string());
        assert_eq!(
            block_on(computation.run(0, ()).run()),
            Err("boom".to_string())
        );
    }

    #[test]
    fn state_reader_task_either_local_projects_environment() {
        let inner: StateReaderTaskEither<i32, i32, String, i32> = StateReaderTaskEither::ask();
        let outer: StateReaderTaskEither<i32, (i32, &str), String, i32> =
            inner.local(|(number, _)| number);
        assert_eq!(block_on(outer.evaluate(0, (42, "extra")).run()), Ok(42));
    }
}
