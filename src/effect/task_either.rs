//! `TaskEither` - deferred asynchronous computations with a typed failure
//! channel.
//!
//! A [`TaskEither<E, A>`] is a [`Task`] whose result is `Result<A, E>`.
//! Failures are values, never raised: once a computation produces an `Err`,
//! subsequent `flat_map`/`fmap` steps are skipped and the error propagates
//! unchanged until intercepted by [`TaskEither::or_else`],
//! [`TaskEither::bimap`], or [`TaskEither::map_left`].
//!
//! # Examples
//!
//! ```rust
//! use combinars::effect::TaskEither;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let task: TaskEither<String, i32> = TaskEither::right(20)
//!     .fmap(|x| x * 2)
//!     .flat_map(|x| TaskEither::right(x + 2));
//! assert_eq!(task.run().await, Ok(42));
//!
//! let failed: TaskEither<String, i32> = TaskEither::left("boom".to_string())
//!     .fmap(|x: i32| x * 2);
//! assert_eq!(failed.run().await, Err("boom".to_string()));
//! # });
//! ```

#![forbid(unsafe_code)]

use std::rc::Rc;

use futures::future::LocalBoxFuture;

use super::io::IO;
use super::task::Task;

/// A deferred asynchronous computation that either fails with an `E` or
/// succeeds with an `A`.
pub struct TaskEither<E, A> {
    task: Task<Result<A, E>>,
}

impl<E: 'static, A: 'static> TaskEither<E, A> {
    /// Wraps a task already producing a `Result`.
    #[must_use]
    pub const fn new(task: Task<Result<A, E>>) -> Self {
        Self { task }
    }

    /// A computation that succeeds immediately with the given value.
    pub fn right(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(Task::new(move || {
            let value = value.clone();
            async move { Ok(value) }
        }))
    }

    /// A computation that fails immediately with the given error.
    pub fn left(error: E) -> Self
    where
        E: Clone,
    {
        Self::new(Task::new(move || {
            let error = error.clone();
            async move { Err(error) }
        }))
    }

    /// Lifts an already-evaluated `Result`.
    pub fn from_result(result: Result<A, E>) -> Self
    where
        A: Clone,
        E: Clone,
    {
        match result {
            Ok(value) => Self::right(value),
            Err(error) => Self::left(error),
        }
    }

    /// Lifts a task that cannot fail into the success channel.
    #[must_use]
    pub fn right_task(task: Task<A>) -> Self {
        Self::new(task.fmap(Ok))
    }

    /// Lifts a task producing an error into the failure channel.
    #[must_use]
    pub fn left_task(task: Task<E>) -> Self {
        Self::new(task.fmap(Err))
    }

    /// Lifts a synchronous action into the success channel.
    ///
    /// The action is re-run on every invocation of the computation.
    #[must_use]
    pub fn from_io(io: IO<A>) -> Self {
        Self::new(Task::new(move || {
            let value = io.run();
            async move { Ok(value) }
        }))
    }

    /// Lifts a synchronous action that already produces a `Result`.
    #[must_use]
    pub fn from_io_either(io: IO<Result<A, E>>) -> Self {
        Self::new(Task::new(move || {
            let result = io.run();
            async move { result }
        }))
    }

    /// Starts a fresh unit of work and returns its future.
    pub fn run(&self) -> LocalBoxFuture<'static, Result<A, E>> {
        self.task.run()
    }

    /// Unwraps the underlying task.
    #[must_use]
    pub fn to_task(self) -> Task<Result<A, E>> {
        self.task
    }

    /// Maps a function over the success channel.
    pub fn fmap<B, F>(self, function: F) -> TaskEither<E, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        TaskEither::new(self.task.fmap(move |result| result.map(|value| function(value))))
    }

    /// Maps a function over the failure channel.
    pub fn map_left<G, F>(self, function: F) -> TaskEither<G, A>
    where
        F: Fn(E) -> G + 'static,
        G: 'static,
    {
        TaskEither::new(
            self.task
                .fmap(move |result| result.map_err(|error| function(error))),
        )
    }

    /// Maps a pair of functions over the two channels.
    pub fn bimap<G, B, F, H>(self, left_function: F, right_function: H) -> TaskEither<G, B>
    where
        F: Fn(E) -> G + 'static,
        H: Fn(A) -> B + 'static,
        G: 'static,
        B: 'static,
    {
        TaskEither::new(self.task.fmap(move |result| {
            result
                .map(|value| right_function(value))
                .map_err(|error| left_function(error))
        }))
    }

    /// Chains this computation with a function producing the next one.
    ///
    /// A failure skips the function entirely and propagates unchanged.
    pub fn flat_map<B, F>(self, function: F) -> TaskEither<E, B>
    where
        F: Fn(A) -> TaskEither<E, B> + 'static,
        B: 'static,
    {
        let task = self.task;
        let function = Rc::new(function);
        TaskEither::new(Task::new(move || {
            let future = task.run();
            let function = function.clone();
            async move {
                match future.await {
                    Ok(value) => function(value).run().await,
                    Err(error) => Err(error),
                }
            }
        }))
    }

    /// Alias for `flat_map`.
    pub fn and_then<B, F>(self, function: F) -> TaskEither<E, B>
    where
        F: Fn(A) -> TaskEither<E, B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// On failure, discards the error and runs the alternative instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::effect::TaskEither;
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// let recovered: TaskEither<String, i32> =
    ///     TaskEither::left("boom".to_string()).or_else(|| TaskEither::right(42));
    /// assert_eq!(recovered.run().await, Ok(42));
    /// # });
    /// ```
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: Fn() -> Self + 'static,
    {
        let task = self.task;
        let alternative = Rc::new(alternative);
        Self::new(Task::new(move || {
            let future = task.run();
            let alternative = alternative.clone();
            async move {
                match future.await {
                    Ok(value) => Ok(value),
                    Err(_) => alternative().run().await,
                }
            }
        }))
    }

    /// Collapses both channels into a single task.
    pub fn fold<B, F, H>(self, on_left: F, on_right: H) -> Task<B>
    where
        F: Fn(E) -> B + 'static,
        H: Fn(A) -> B + 'static,
        B: 'static,
    {
        self.task.fmap(move |result| match result {
            Ok(value) => on_right(value),
            Err(error) => on_left(error),
        })
    }

    /// Swaps the channels: failures become successes and vice versa.
    #[must_use]
    pub fn swap(self) -> TaskEither<A, E> {
        TaskEither::new(self.task.fmap(|result| match result {
            Ok(value) => Err(value),
            Err(error) => Ok(error),
        }))
    }
}

impl<E, A> Clone for TaskEither<E, A> {
    fn clone(&self) -> Self {
        Self {
            task: self.task.clone(),
        }
    }
}

impl<E, A> std::fmt::Display for TaskEither<E, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<TaskEither>")
    }
}
