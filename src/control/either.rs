//! Either type - a value that is exactly one of two types.
//!
//! `Either<L, R>` is a disjoint union: a value is either a `Left(L)` or a
//! `Right(R)`, never both and never neither. By convention `Left` carries a
//! failure and `Right` a success, so a function that may fail can return
//! `Either<Failure, Output>` instead of a pair of optional values.
//!
//! # Examples
//!
//! ```rust
//! use fasaha::control::Either;
//!
//! fn divide(numerator: f64, divisor: f64) -> Either<String, f64> {
//!     if divisor == 0.0 && numerator != 0.0 {
//!         Either::create_left(format!("could not divide {numerator} by zero"))
//!     } else {
//!         Either::create_right(numerator / divisor)
//!     }
//! }
//!
//! let message = divide(1.0, 0.0).fold(
//!     |failure| failure,
//!     |quotient| format!("quotient: {quotient}"),
//! );
//! assert_eq!(message, "could not divide 1 by zero");
//! ```

use std::fmt;
use std::hash::Hash;

use crate::error::{InvalidArgumentError, Side, UnsupportedOperationError};

/// A value that is exactly one of two types.
///
/// Equality, ordering and hashing are side-aware: a `Left` holding `x` is
/// never equal to a `Right` holding `x`.
///
/// # Examples
///
/// ```rust
/// use fasaha::control::Either;
///
/// let success: Either<String, i32> = Either::create_right(42);
/// assert_eq!(success.map_right(|x| x * 2), Either::Right(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally representing failure.
    Left(L),
    /// The right variant, conventionally representing success.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Builds an `Either` from two candidates of which exactly one must be
    /// present.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError::BothAbsent`] when both candidates are
    /// `None`, and [`InvalidArgumentError::BothPresent`] when both are `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fasaha::control::Either;
    /// use fasaha::error::InvalidArgumentError;
    ///
    /// let either: Either<i32, String> = Either::create(None, Some("x".to_string())).unwrap();
    /// assert!(either.is_right());
    ///
    /// let neither = Either::<i32, String>::create(None, None);
    /// assert_eq!(neither, Err(InvalidArgumentError::BothAbsent));
    /// ```
    pub fn create(left: Option<L>, right: Option<R>) -> Result<Self, InvalidArgumentError> {
        match (left, right) {
            (Some(value), None) => Ok(Self::Left(value)),
            (None, Some(value)) => Ok(Self::Right(value)),
            (None, None) => Err(InvalidArgumentError::BothAbsent),
            (Some(_), Some(_)) => Err(InvalidArgumentError::BothPresent),
        }
    }

    /// Creates a `Left` holding `value`.
    #[inline]
    pub const fn create_left(value: L) -> Self {
        Self::Left(value)
    }

    /// Creates a `Right` holding `value`.
    #[inline]
    pub const fn create_right(value: R) -> Self {
        Self::Right(value)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    ///
    /// Always the negation of [`is_left`](Self::is_left).
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns the side this value occupies.
    #[inline]
    pub const fn side(&self) -> Side {
        match self {
            Self::Left(_) => Side::Left,
            Self::Right(_) => Side::Right,
        }
    }

    // =========================================================================
    // Checked Access
    // =========================================================================

    /// Returns a reference to the left value.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedOperationError`] if this is a `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fasaha::control::Either;
    ///
    /// let either: Either<&str, i32> = Either::create_right(5);
    /// assert!(either.get_left().is_err());
    /// assert_eq!(either.get_right(), Ok(&5));
    /// ```
    #[inline]
    pub const fn get_left(&self) -> Result<&L, UnsupportedOperationError> {
        match self {
            Self::Left(value) => Ok(value),
            Self::Right(_) => Err(UnsupportedOperationError {
                operation: "Either::get_left",
                side: Side::Right,
            }),
        }
    }

    /// Returns a reference to the right value.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedOperationError`] if this is a `Left`.
    #[inline]
    pub const fn get_right(&self) -> Result<&R, UnsupportedOperationError> {
        match self {
            Self::Left(_) => Err(UnsupportedOperationError {
                operation: "Either::get_right",
                side: Side::Left,
            }),
            Self::Right(value) => Ok(value),
        }
    }

    /// Returns the left value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right` value.
    #[inline]
    pub fn unwrap_left(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Returns the right value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left` value.
    #[inline]
    pub fn unwrap_right(self) -> R {
        match self {
            Self::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Optional Views
    // =========================================================================

    /// Converts into `Some(l)` for a `Left`, `None` otherwise.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into `Some(r)` for a `Right`, `None` otherwise.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows the payload, producing an `Either<&L, &R>`.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Converts into a pair of `Option`s, exactly one of which is `Some`.
    #[inline]
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        match self {
            Self::Left(value) => (Some(value), None),
            Self::Right(value) => (None, Some(value)),
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the `Either` by applying exactly one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fasaha::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Passes the payload to exactly one of two consumers.
    #[inline]
    pub fn accept<F, G>(&self, left_consumer: F, right_consumer: G)
    where
        F: FnOnce(&L),
        G: FnOnce(&R),
    {
        match self {
            Self::Left(value) => left_consumer(value),
            Self::Right(value) => right_consumer(value),
        }
    }

    /// Calls `consumer` with the left value if this is a `Left`.
    #[inline]
    pub fn if_left<F>(&self, consumer: F)
    where
        F: FnOnce(&L),
    {
        if let Self::Left(value) = self {
            consumer(value);
        }
    }

    /// Calls `consumer` with the right value if this is a `Right`.
    #[inline]
    pub fn if_right<F>(&self, consumer: F)
    where
        F: FnOnce(&R),
    {
        if let Self::Right(value) = self {
            consumer(value);
        }
    }

    /// Notifies both consumers, every time.
    ///
    /// The consumer for the occupied side receives the real payload; the
    /// other consumer receives the caller-supplied default. Unlike
    /// [`accept`](Self::accept) and [`fold`](Self::fold), which invoke exactly
    /// one branch, this always invokes both, left first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fasaha::control::Either;
    ///
    /// let either: Either<i32, &str> = Either::create_right("ok");
    /// let mut seen = Vec::new();
    /// either.accept_both(
    ///     |left| seen.push(format!("left={left}")),
    ///     |right| println!("right={right}"),
    ///     &-1,
    ///     &"unused",
    /// );
    /// assert_eq!(seen, vec!["left=-1".to_string()]);
    /// ```
    pub fn accept_both<F, G>(
        &self,
        left_consumer: F,
        right_consumer: G,
        default_left: &L,
        default_right: &R,
    ) where
        F: FnOnce(&L),
        G: FnOnce(&R),
    {
        left_consumer(self.left_ref().unwrap_or(default_left));
        right_consumer(self.right_ref().unwrap_or(default_right));
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the left value if present; a `Right` passes
    /// through unchanged.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right value if present; a `Left` passes
    /// through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fasaha::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map_right(|s: String| s.len()), Either::Left(42));
    /// ```
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Maps whichever side is present.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Swaps the sides: `Left(l)` becomes `Right(l)` and vice versa.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<L: Default, R> Either<L, R> {
    /// Returns the left value, or `L::default()` for a `Right`.
    #[inline]
    pub fn left_or_default(self) -> L {
        self.left().unwrap_or_default()
    }
}

impl<L, R: Default> Either<L, R> {
    /// Returns the right value, or `R::default()` for a `Left`.
    #[inline]
    pub fn right_or_default(self) -> R {
        self.right().unwrap_or_default()
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left[{value}]"),
            Self::Right(value) => write!(formatter, "Right[{value}]"),
        }
    }
}

// =============================================================================
// Result Interop
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}
