//! Converters that tolerate absent values on both sides.
//!
//! A [`NullableConverter`] maps `Option<A>` to `Option<B>` and back. It
//! follows the same composition laws as [`Converter`], but does not promise
//! anything about `None`: the functions decide how absence is handled.
//!
//! The two families meet in two bridges:
//!
//! - [`Converter::nullable`] lifts a total converter, mapping `None` to `None`.
//! - [`NullableConverter::non_null`] narrows a nullable converter to a
//!   [`Converter`] that rejects `None` results as an
//!   [`InvalidArgumentError`].

use std::any::type_name;
use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use super::Converter;
use crate::error::InvalidArgumentError;

/// A bidirectional mapping between optional `A` and optional `B`.
///
/// # Examples
///
/// ```rust
/// use fasaha::convert::{self, NullableConverter};
///
/// let parse = convert::nullable_from(
///     |text: Option<String>| text.and_then(|text| text.parse::<i32>().ok()),
///     |number: Option<i32>| number.map(|number| number.to_string()),
///     "parse",
/// );
///
/// assert_eq!(parse.convert(Some("12".to_string())), Some(12));
/// assert_eq!(parse.convert(Some("twelve".to_string())), None);
/// assert_eq!(parse.revert(None), None);
/// ```
pub trait NullableConverter<A, B> {
    /// Converts from `A` to `B`.
    fn convert(&self, value: Option<A>) -> Option<B>;

    /// Converts from `B` back to `A`.
    fn revert(&self, value: Option<B>) -> Option<A>;

    /// Chains `next` after this converter.
    fn and_then<C, N>(self, next: N) -> NullableComposition<Self, N, B>
    where
        Self: Sized,
        N: NullableConverter<B, C>,
    {
        NullableComposition::new(self, next)
    }

    /// Swaps the two directions. Reversing a concrete
    /// [`ReverseNullableConverter`] returns the original.
    fn reverse(self) -> ReverseNullableConverter<Self>
    where
        Self: Sized,
    {
        ReverseNullableConverter::new(self)
    }

    /// Narrows this converter to a [`Converter`] whose results must be
    /// present.
    fn non_null(self) -> NonNullConverter<Self>
    where
        Self: Sized,
    {
        NonNullConverter::new(self)
    }
}

impl<A, B, C> NullableConverter<A, B> for &C
where
    C: NullableConverter<A, B> + ?Sized,
{
    #[inline]
    fn convert(&self, value: Option<A>) -> Option<B> {
        (**self).convert(value)
    }

    #[inline]
    fn revert(&self, value: Option<B>) -> Option<A> {
        (**self).revert(value)
    }
}

// =============================================================================
// FunctionNullableConverter
// =============================================================================

/// A nullable converter backed by two functions over optional values.
pub struct FunctionNullableConverter<A, B, F, G> {
    forward: F,
    backward: G,
    name: Cow<'static, str>,
    _marker: PhantomData<fn(A) -> B>,
}

impl<A, B, F, G> FunctionNullableConverter<A, B, F, G>
where
    F: Fn(Option<A>) -> Option<B>,
    G: Fn(Option<B>) -> Option<A>,
{
    /// Creates a nullable converter from its two directions and a name.
    pub fn new(forward: F, backward: G, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            forward,
            backward,
            name: name.into(),
            _marker: PhantomData,
        }
    }
}

impl<A, B, F, G> FunctionNullableConverter<A, B, F, G> {
    /// The diagnostic name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Creates a [`FunctionNullableConverter`] with a display name.
#[inline]
pub fn nullable_from<A, B, F, G>(
    forward: F,
    backward: G,
    name: impl Into<Cow<'static, str>>,
) -> FunctionNullableConverter<A, B, F, G>
where
    F: Fn(Option<A>) -> Option<B>,
    G: Fn(Option<B>) -> Option<A>,
{
    FunctionNullableConverter::new(forward, backward, name)
}

/// Creates a [`FunctionNullableConverter`] named after the type of its
/// forward function.
#[inline]
pub fn nullable_from_unnamed<A, B, F, G>(
    forward: F,
    backward: G,
) -> FunctionNullableConverter<A, B, F, G>
where
    F: Fn(Option<A>) -> Option<B>,
    G: Fn(Option<B>) -> Option<A>,
{
    FunctionNullableConverter::new(forward, backward, type_name::<F>())
}

impl<A, B, F, G> NullableConverter<A, B> for FunctionNullableConverter<A, B, F, G>
where
    F: Fn(Option<A>) -> Option<B>,
    G: Fn(Option<B>) -> Option<A>,
{
    #[inline]
    fn convert(&self, value: Option<A>) -> Option<B> {
        (self.forward)(value)
    }

    #[inline]
    fn revert(&self, value: Option<B>) -> Option<A> {
        (self.backward)(value)
    }
}

impl<A, B, F: Clone, G: Clone> Clone for FunctionNullableConverter<A, B, F, G> {
    fn clone(&self) -> Self {
        Self {
            forward: self.forward.clone(),
            backward: self.backward.clone(),
            name: self.name.clone(),
            _marker: PhantomData,
        }
    }
}

impl<A, B, F, G> fmt::Display for FunctionNullableConverter<A, B, F, G> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.name)
    }
}

impl<A, B, F, G> fmt::Debug for FunctionNullableConverter<A, B, F, G> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FunctionNullableConverter")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Composition and Reversal
// =============================================================================

/// Two nullable converters chained through an intermediate type `B`.
pub struct NullableComposition<First, Second, B> {
    first: First,
    second: Second,
    _intermediate: PhantomData<fn(B) -> B>,
}

impl<First, Second, B> NullableComposition<First, Second, B> {
    /// Chains `first` and `second`.
    #[must_use]
    pub const fn new(first: First, second: Second) -> Self {
        Self {
            first,
            second,
            _intermediate: PhantomData,
        }
    }
}

impl<A, B, C, First, Second> NullableConverter<A, C> for NullableComposition<First, Second, B>
where
    First: NullableConverter<A, B>,
    Second: NullableConverter<B, C>,
{
    #[inline]
    fn convert(&self, value: Option<A>) -> Option<C> {
        self.second.convert(self.first.convert(value))
    }

    #[inline]
    fn revert(&self, value: Option<C>) -> Option<A> {
        self.first.revert(self.second.revert(value))
    }
}

impl<First: Clone, Second: Clone, B> Clone for NullableComposition<First, Second, B> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<First: fmt::Display, Second: fmt::Display, B> fmt::Display
    for NullableComposition<First, Second, B>
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} and_then {}", self.first, self.second)
    }
}

impl<First: fmt::Debug, Second: fmt::Debug, B> fmt::Debug
    for NullableComposition<First, Second, B>
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("NullableComposition")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// A nullable converter with its directions swapped.
#[derive(Debug, Clone)]
pub struct ReverseNullableConverter<C> {
    original: C,
}

impl<C> ReverseNullableConverter<C> {
    /// Wraps `original` with its directions swapped.
    #[must_use]
    pub const fn new(original: C) -> Self {
        Self { original }
    }

    /// Returns the converter this one reverses.
    #[must_use]
    pub fn reverse(self) -> C {
        self.original
    }
}

impl<A, B, C> NullableConverter<B, A> for ReverseNullableConverter<C>
where
    C: NullableConverter<A, B>,
{
    #[inline]
    fn convert(&self, value: Option<B>) -> Option<A> {
        self.original.revert(value)
    }

    #[inline]
    fn revert(&self, value: Option<A>) -> Option<B> {
        self.original.convert(value)
    }
}

impl<C: fmt::Display> fmt::Display for ReverseNullableConverter<C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}.reverse()", self.original)
    }
}

// =============================================================================
// Bridges
// =============================================================================

/// A total [`Converter`] lifted over optional values.
///
/// Produced by [`Converter::nullable`]. `None` maps to `None`; a present
/// value goes through the wrapped converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiftedConverter<C> {
    inner: C,
}

impl<C> LiftedConverter<C> {
    /// Lifts `inner`.
    #[must_use]
    pub const fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Returns the wrapped total converter.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<A, B, C> NullableConverter<A, B> for LiftedConverter<C>
where
    C: Converter<A, B>,
{
    #[inline]
    fn convert(&self, value: Option<A>) -> Option<B> {
        value.map(|value| self.inner.convert_non_null(value))
    }

    #[inline]
    fn revert(&self, value: Option<B>) -> Option<A> {
        value.map(|value| self.inner.revert_non_null(value))
    }
}

impl<C: fmt::Display> fmt::Display for LiftedConverter<C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}.nullable()", self.inner)
    }
}

/// A nullable converter narrowed to a [`Converter`].
///
/// Produced by [`NullableConverter::non_null`]. The fallible
/// [`try_convert`](Self::try_convert) and [`try_revert`](Self::try_revert)
/// report an absent result as [`InvalidArgumentError::NullValue`]. The
/// [`Converter`] methods treat an absent result as a broken contract and
/// panic with the same message at the call that produced it.
///
/// # Examples
///
/// ```rust
/// use fasaha::convert::{self, NullableConverter};
/// use fasaha::error::InvalidArgumentError;
///
/// let parse = convert::nullable_from(
///     |text: Option<&str>| text.and_then(|text| text.parse::<u8>().ok()),
///     |number: Option<u8>| number.map(|_| "n"),
///     "parse",
/// )
/// .non_null();
///
/// assert_eq!(parse.try_convert("7"), Ok(7));
/// assert_eq!(
///     parse.try_convert("seven"),
///     Err(InvalidArgumentError::NullValue { operation: "convert_non_null" })
/// );
/// ```
#[derive(Debug, Clone)]
pub struct NonNullConverter<C> {
    inner: C,
}

impl<C> NonNullConverter<C> {
    /// Narrows `inner`.
    #[must_use]
    pub const fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Converts `value`, failing if the nullable converter yields `None`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError::NullValue`] when no value is produced.
    pub fn try_convert<A, B>(&self, value: A) -> Result<B, InvalidArgumentError>
    where
        C: NullableConverter<A, B>,
    {
        self.inner
            .convert(Some(value))
            .ok_or(InvalidArgumentError::NullValue {
                operation: "convert_non_null",
            })
    }

    /// Reverts `value`, failing if the nullable converter yields `None`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError::NullValue`] when no value is produced.
    pub fn try_revert<A, B>(&self, value: B) -> Result<A, InvalidArgumentError>
    where
        C: NullableConverter<A, B>,
    {
        self.inner
            .revert(Some(value))
            .ok_or(InvalidArgumentError::NullValue {
                operation: "revert_non_null",
            })
    }

    /// Returns the wrapped nullable converter.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<A, B, C> Converter<A, B> for NonNullConverter<C>
where
    C: NullableConverter<A, B>,
{
    /// # Panics
    ///
    /// Panics if the wrapped converter produces no value.
    fn convert_non_null(&self, value: A) -> B {
        match self.try_convert(value) {
            Ok(converted) => converted,
            Err(violation) => panic!("{violation}"),
        }
    }

    /// # Panics
    ///
    /// Panics if the wrapped converter produces no value.
    fn revert_non_null(&self, value: B) -> A {
        match self.try_revert(value) {
            Ok(reverted) => reverted,
            Err(violation) => panic!("{violation}"),
        }
    }
}

impl<C: fmt::Display> fmt::Display for NonNullConverter<C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}.non_null()", self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert;
    use rstest::rstest;

    fn blank_is_none() -> impl NullableConverter<String, String> + fmt::Display {
        nullable_from(
            |text: Option<String>| text.filter(|text| !text.trim().is_empty()),
            |text: Option<String>| text,
            "blankIsNone",
        )
    }

    #[rstest]
    fn reverse_twice_returns_original() {
        let converter = blank_is_none();
        let back = converter.reverse().reverse();
        assert_eq!(back.to_string(), "blankIsNone");
    }

    #[rstest]
    fn composition_runs_in_order() {
        let length = nullable_from(
            |text: Option<String>| text.map(|text| text.len()),
            |length: Option<usize>| length.map(|length| "x".repeat(length)),
            "length",
        );
        let composed = blank_is_none().and_then(length);

        assert_eq!(composed.convert(Some("abc".to_string())), Some(3));
        assert_eq!(composed.convert(Some("  ".to_string())), None);
        assert_eq!(composed.revert(Some(2)), Some("xx".to_string()));
        assert_eq!(composed.to_string(), "blankIsNone and_then length");
    }

    #[rstest]
    fn lifted_maps_none_to_none() {
        let lifted = convert::from(|x: i32| x + 1, |x: i32| x - 1, "inc").nullable();
        assert_eq!(lifted.convert(None), None);
        assert_eq!(lifted.convert(Some(1)), Some(2));
        assert_eq!(lifted.revert(Some(2)), Some(1));
        assert_eq!(lifted.to_string(), "inc.nullable()");
    }

    #[rstest]
    fn unnamed_uses_the_function_type_name() {
        fn shout(text: Option<String>) -> Option<String> {
            text.map(|text| text.to_uppercase())
        }
        let converter = nullable_from_unnamed(shout, |text: Option<String>| text);
        assert!(converter.name().contains("shout"));
    }

    #[rstest]
    #[should_panic(expected = "revert_non_null: a value was required but none was present")]
    fn non_null_panics_on_absent_result() {
        let converter = nullable_from(
            |value: Option<i32>| value,
            |_: Option<i32>| None::<i32>,
            "dropsOnRevert",
        )
        .non_null();
        let _ = converter.revert_non_null(5);
    }
}
