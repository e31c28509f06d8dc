//! Error types for contract violations.
//!
//! Every fallible operation in this crate reports one of two kinds of
//! failure:
//!
//! - [`InvalidArgumentError`]: a value violated the contract of the call
//!   (a missing value where one is required, both or neither side of an
//!   [`Either`](crate::control::Either) supplied, a zero expiration window).
//! - [`UnsupportedOperationError`]: the call is not meaningful for the
//!   receiver, such as asking a `Right` for its left value.
//!
//! [`Error`] unifies both so callers can propagate either with `?`.
//!
//! Failures raised by user-supplied functions are never wrapped here; they
//! propagate to the caller unchanged.

use std::fmt;

/// Identifies one side of an [`Either`](crate::control::Either).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The left side.
    Left,
    /// The right side.
    Right,
}

impl Side {
    /// Returns the opposite side.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => formatter.write_str("Left"),
            Self::Right => formatter.write_str("Right"),
        }
    }
}

/// A value passed to (or produced for) an operation violated its contract.
///
/// # Examples
///
/// ```rust
/// use fasaha::error::InvalidArgumentError;
///
/// let error = InvalidArgumentError::NullValue { operation: "convert_non_null" };
/// assert_eq!(
///     error.to_string(),
///     "convert_non_null: a value was required but none was present"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgumentError {
    /// A value was required but `None` was supplied or produced.
    NullValue {
        /// The operation whose non-null contract was violated.
        operation: &'static str,
    },
    /// Neither candidate of `Either::create` was present.
    BothAbsent,
    /// Both candidates of `Either::create` were present.
    BothPresent,
    /// An expiration window of zero length was requested.
    NonPositiveDuration,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullValue { operation } => write!(
                formatter,
                "{operation}: a value was required but none was present"
            ),
            Self::BothAbsent => formatter.write_str("Both arguments were absent."),
            Self::BothPresent => formatter.write_str("Both arguments were present."),
            Self::NonPositiveDuration => {
                formatter.write_str("expiration duration must be strictly positive")
            }
        }
    }
}

impl std::error::Error for InvalidArgumentError {}

/// An operation was invoked on a receiver that does not support it.
///
/// # Examples
///
/// ```rust
/// use fasaha::error::{Side, UnsupportedOperationError};
///
/// let error = UnsupportedOperationError {
///     operation: "Either::get_right",
///     side: Side::Left,
/// };
/// assert_eq!(
///     error.to_string(),
///     "called `Either::get_right()` on a `Left` value"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedOperationError {
    /// The operation that was invoked.
    pub operation: &'static str,
    /// The side the receiver actually holds.
    pub side: Side,
}

impl fmt::Display for UnsupportedOperationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "called `{}()` on a `{}` value",
            self.operation, self.side
        )
    }
}

impl std::error::Error for UnsupportedOperationError {}

/// Unified error type for this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// See [`InvalidArgumentError`].
    InvalidArgument(InvalidArgumentError),
    /// See [`UnsupportedOperationError`].
    UnsupportedOperation(UnsupportedOperationError),
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(error) => write!(formatter, "invalid argument: {error}"),
            Self::UnsupportedOperation(error) => {
                write!(formatter, "unsupported operation: {error}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidArgument(error) => Some(error),
            Self::UnsupportedOperation(error) => Some(error),
        }
    }
}

impl From<InvalidArgumentError> for Error {
    fn from(error: InvalidArgumentError) -> Self {
        Self::InvalidArgument(error)
    }
}

impl From<UnsupportedOperationError> for Error {
    fn from(error: UnsupportedOperationError) -> Self {
        Self::UnsupportedOperation(error)
    }
}
