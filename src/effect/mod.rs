//! Effect system for composing deferred, failure-aware computations.
//!
//! This module provides effect values that describe computations without
//! running them. Side effects are deferred until an explicit executor is
//! called, keeping composition referentially transparent.
//!
//! # Base Effects
//!
//! - [`IO`]: Deferred synchronous computations
//! - [`Reader`]: Computations that read from an environment
//! - [`State`]: Computations threading a state value
//!
//! # Asynchronous Effects (feature `async`)
//!
//! - [`Task`]: Deferred asynchronous computations
//! - [`TaskEither`]: Deferred asynchronous computations with a typed
//!   failure channel
//! - [`StateReaderTaskEither`]: The four-layer computation combining state
//!   threading, environment access, deferred execution, and typed failure
//!
//! # Design Note
//!
//! Every effect type wraps its behavior in an `Rc`-shared function and
//! provides `fmap`/`flat_map`/`map2` style methods directly on the type.
//! Rust has no higher-kinded types, so there is no single `Monad` trait tying
//! them together; the shared vocabulary is a convention, which also lets the
//! [`stack!`](crate::stack) macro sequence any of them.
//!
//! # Do-Notation with the stack! Macro
//!
//! ```rust
//! use combinars::effect::IO;
//! use combinars::stack;
//!
//! let io = stack! {
//!     x <= IO::pure(5);
//!     y <= IO::pure(10);
//!     let z = x + y;
//!     IO::pure(z * 2)
//! };
//! assert_eq!(io.run(), 30);
//! ```

mod io;
mod reader;
mod stack_macro;
mod state;

#[cfg(feature = "async")]
mod state_reader_task_either;
#[cfg(feature = "async")]
mod task;
#[cfg(feature = "async")]
mod task_either;

pub use io::IO;
pub use reader::Reader;
pub use state::State;

#[cfg(feature = "async")]
pub use state_reader_task_either::StateReaderTaskEither;
#[cfg(feature = "async")]
pub use task::Task;
#[cfg(feature = "async")]
pub use task_either::TaskEither;
