//! Control values: disjoint unions, comparisons and consumer combinators.
//!
//! - [`Either`]: a value that is exactly one of two types
//! - [`Comparison`]: a three-way comparison outcome
//! - [`consumers`]: combinators over side-effecting sinks
//!
//! # Examples
//!
//! ```rust
//! use fasaha::control::{Comparison, Either};
//!
//! let parsed: Either<String, i32> = "17"
//!     .parse::<i32>()
//!     .map_err(|error| error.to_string())
//!     .into();
//! assert_eq!(parsed.get_right(), Ok(&17));
//!
//! let ordering = parsed.fold(|_| Comparison::Lesser, |value| Comparison::compare(&value, &10));
//! assert_eq!(ordering, Comparison::Greater);
//! ```

mod comparison;
pub mod consumers;
mod either;

pub use comparison::Comparison;
pub use either::Either;
