//! Task - deferred asynchronous computations.
//!
//! A [`Task`] is a description of a unit of asynchronous work. Nothing runs
//! when the task is built; calling [`Task::run`] starts a *fresh* unit of
//! work and returns its future, so a task can be run any number of times and
//! each invocation executes exactly once.
//!
//! # Design Note
//!
//! All computations in this library are single-threaded and cooperative:
//! composition never runs two steps concurrently, and each step's work is
//! only initiated after the previous step's result is available. The wrapped
//! futures are therefore `LocalBoxFuture`s with no `Send` bounds, intended
//! to be awaited on a current-thread runtime. Cancellation is not modeled:
//! once a unit of work is initiated there is no hook to abort it.
//!
//! # Examples
//!
//! ```rust
//! use combinars::effect::Task;
//!
//! # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
//! let task = Task::pure(20).fmap(|x| x * 2).flat_map(|x| Task::pure(x + 2));
//! assert_eq!(task.run().await, 42);
//! # });
//! ```

#![forbid(unsafe_code)]

use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use futures::FutureExt;
use futures::future::LocalBoxFuture;

/// A deferred asynchronous computation producing a value of type `A`.
///
/// # Monad Laws
///
/// `Task` satisfies the monad laws:
///
/// 1. **Left Identity**: `Task::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(Task::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct Task<A> {
    /// The wrapped thunk. Each invocation returns a fresh future.
    run_function: Rc<dyn Fn() -> LocalBoxFuture<'static, A>>,
}

impl<A: 'static> Task<A> {
    /// Creates a task from a thunk producing a future.
    ///
    /// The thunk is invoked once per [`Task::run`] call.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::effect::Task;
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// let task = Task::new(|| async { 42 });
    /// assert_eq!(task.run().await, 42);
    /// # });
    /// ```
    pub fn new<F, Fut>(thunk: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = A> + 'static,
    {
        Self {
            run_function: Rc::new(move || thunk().boxed_local()),
        }
    }

    /// Wraps a pure value in a task.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move || {
            let value = value.clone();
            async move { value }
        })
    }

    /// Starts a fresh unit of work and returns its future.
    pub fn run(&self) -> LocalBoxFuture<'static, A> {
        (self.run_function)()
    }

    /// Maps a function over the produced value.
    pub fn fmap<B, F>(self, function: F) -> Task<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original = self.run_function;
        let function = Rc::new(function);
        Task::new(move || {
            let future = (original)();
            let function = function.clone();
            async move { function(future.await) }
        })
    }

    /// Chains this task with a function producing the next task.
    ///
    /// The next task's work is only initiated after this task's result is
    /// available; nothing runs concurrently.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::effect::Task;
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// let task = Task::pure(2).flat_map(|x| Task::new(move || async move { x * 21 }));
    /// assert_eq!(task.run().await, 42);
    /// # });
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Task<B>
    where
        F: Fn(A) -> Task<B> + 'static,
        B: 'static,
    {
        let original = self.run_function;
        let function = Rc::new(function);
        Task::new(move || {
            let future = (original)();
            let function = function.clone();
            async move {
                let value = future.await;
                function(value).run().await
            }
        })
    }

    /// Alias for `flat_map`.
    pub fn and_then<B, F>(self, function: F) -> Task<B>
    where
        F: Fn(A) -> Task<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two tasks, discarding the first result.
    #[must_use]
    pub fn then<B>(self, next: Task<B>) -> Task<B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Combines two tasks using a binary function, running them strictly in
    /// sequence.
    pub fn map2<B, C, F>(self, other: Task<B>, function: F) -> Task<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let first = self.run_function;
        let second = other.run_function;
        let function = Rc::new(function);
        Task::new(move || {
            let first_future = (first)();
            let second_thunk = second.clone();
            let function = function.clone();
            async move {
                let first_value = first_future.await;
                let second_value = (second_thunk)().await;
                function(first_value, second_value)
            }
        })
    }

    /// Combines two tasks into a tuple.
    #[must_use]
    pub fn product<B>(self, other: Task<B>) -> Task<(A, B)>
    where
        B: 'static,
    {
        self.map2(other, |first, second| (first, second))
    }
}

impl Task<()> {
    /// A task that completes after the given duration.
    #[must_use]
    pub fn delay(duration: Duration) -> Self {
        Self::new(move || tokio::time::sleep(duration))
    }
}

impl<A> Clone for Task<A> {
    fn clone(&self) -> Self {
        Self {
            run_function: self.run_function.clone(),
        }
    }
}

impl<A> std::fmt::Display for Task<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<Task>")
    }
}
