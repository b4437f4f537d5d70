//! Control structures for functional programming.
//!
//! This module provides control structures that enable functional
//! programming patterns:
//!
//! - [`Either`]: A value that can be one of two types, used as the
//!   two-variant result contract throughout the library
//!
//! # Examples
//!
//! ```rust
//! use combinars::control::Either;
//!
//! let parsed: Either<String, i32> = "42"
//!     .parse::<i32>()
//!     .map_err(|e| e.to_string())
//!     .into();
//! assert_eq!(parsed, Either::Right(42));
//! ```

mod either;

pub use either::Either;
