//! # combinars
//!
//! A functional programming library for Rust providing value-level type
//! classes, equality-keyed persistent maps, and layered effect computations.
//!
//! ## Overview
//!
//! This library brings a small set of functional programming abstractions to
//! Rust that are not provided by the standard library:
//!
//! - **Value-Level Type Classes**: `Equivalence`, `Order`, `Semigroup`,
//!   `Monoid` as first-class instance values, supplied per call
//! - **Control Structures**: `Either` for two-variant results
//! - **Persistent Data Structures**: `AssocMap`, an immutable map keyed by a
//!   caller-supplied equivalence rather than `Hash`/`Ord`
//! - **Effect System**: `IO`, `Reader`, `State`, `Task`, `TaskEither`, and
//!   the four-layer `StateReaderTaskEither` computation
//!
//! ## Feature Flags
//!
//! - `typeclass`: Instance values (`Equivalence`, `Order`, etc.)
//! - `control`: Control structures (`Either`)
//! - `persistent`: Persistent data structures (`AssocMap`)
//! - `effect`: Synchronous effect values (`IO`, `Reader`, `State`)
//! - `async`: Deferred asynchronous effects (`Task`, `TaskEither`,
//!   `StateReaderTaskEither`); pulls in `tokio` and `futures`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use combinars::persistent::AssocMap;
//! use combinars::typeclass::Equivalence;
//!
//! let eq = Equivalence::standard();
//! let map = AssocMap::singleton("a", 1).insert_at(&eq, "b", 2);
//! assert_eq!(map.lookup(&eq, &"b"), Some(&2));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use combinars::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "effect")]
pub mod effect;
