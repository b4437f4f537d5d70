//! The `stack!` macro for do-notation over effect computations.
//!
//! This module provides the [`stack!`] macro, which expands
//! `pattern <= computation;` sequences into nested `flat_map` calls. It
//! works with any of the effect types in this library (and anything else
//! with a compatible `flat_map`), and stands in for the record-building
//! `bind`/`bindTo` helpers found in dictionary-passing FP libraries:
//! sequential bindings accumulate as ordinary variables in scope instead of
//! as fields of an anonymous record.

/// Chains effect computations with do-notation syntax.
///
/// # Syntax
///
/// - `pattern <= computation;` binds the computation's result
/// - `let pattern = expression;` introduces a pure binding
/// - the final expression is the resulting computation
///
/// # Examples
///
/// ```rust
/// use combinars::effect::StateReaderTaskEither;
/// use combinars::stack;
///
/// type Computation<A> = StateReaderTaskEither<i32, (), String, A>;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let computation: Computation<i32> = stack! {
///     current <= Computation::get();
///     let doubled = current * 2;
///     _ <= Computation::put(doubled);
///     Computation::right(doubled)
/// };
/// assert_eq!(computation.run(21, ()).run().await, Ok((42, 42)));
/// # });
/// ```
///
/// The same syntax sequences the simpler effect types:
///
/// ```rust
/// use combinars::effect::IO;
/// use combinars::stack;
///
/// let io = stack! {
///     x <= IO::pure(20);
///     y <= IO::pure(22);
///     IO::pure(x + y)
/// };
/// assert_eq!(io.run(), 42);
/// ```
#[macro_export]
macro_rules! stack {
    // Terminal case: a single expression is the resulting computation.
    ($result:expr) => {
        $result
    };

    // Bind with identifier pattern.
    ($pattern:ident <= $computation:expr ; $($rest:tt)+) => {
        $computation.flat_map(move |$pattern| {
            $crate::stack!($($rest)+)
        })
    };

    // Bind with tuple pattern.
    (($($pattern:tt)*) <= $computation:expr ; $($rest:tt)+) => {
        $computation.flat_map(move |($($pattern)*)| {
            $crate::stack!($($rest)+)
        })
    };

    // Bind with wildcard pattern.
    (_ <= $computation:expr ; $($rest:tt)+) => {
        $computation.flat_map(move |_| {
            $crate::stack!($($rest)+)
        })
    };

    // Pure let binding.
    (let $pattern:pat = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::stack!($($rest)+)
        }
    };
}
