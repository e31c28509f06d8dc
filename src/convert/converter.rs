//! Bidirectional, composable converters between two types.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::Arc;

use super::convert_all::ConvertAll;
use super::nullable::LiftedConverter;

/// A bidirectional mapping between `A` and `B`.
///
/// Both directions are total: every `A` converts to some `B` and every `B`
/// reverts to some `A`. A missing result is unrepresentable, so the non-null
/// contract of a converter is enforced by its signature. Panics raised by the
/// underlying functions propagate to the caller unchanged.
///
/// # Laws
///
/// 1. **Associativity**: `f.and_then(g).and_then(h)` behaves exactly like
///    `f.and_then(g.and_then(h))`.
/// 2. **Reverse involution**: `f.reverse().reverse()` behaves exactly like `f`.
///
/// Where `revert_non_null(convert_non_null(a)) == a` holds for a domain the
/// converter round-trips over that domain; this is a property of the chosen
/// functions, not something the trait can enforce.
///
/// # Examples
///
/// ```rust
/// use fasaha::convert::{self, Converter};
///
/// let string_integer = convert::from(
///     |text: String| text.parse::<i32>().unwrap(),
///     |number: i32| number.to_string(),
///     "stringIntegerConverter",
/// );
///
/// assert_eq!(string_integer.convert_non_null("654".to_string()), 654);
/// assert_eq!(string_integer.revert_non_null(654), "654");
/// ```
pub trait Converter<A, B> {
    /// Converts from `A` to `B`.
    fn convert_non_null(&self, value: A) -> B;

    /// Converts from `B` back to `A`.
    fn revert_non_null(&self, value: B) -> A;

    /// Chains `next` after this converter.
    ///
    /// The forward direction runs `self` then `next`; the backward direction
    /// runs `next` then `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fasaha::convert::{self, Converter};
    ///
    /// let string_integer = convert::from(
    ///     |text: String| text.parse::<i32>().unwrap(),
    ///     |number: i32| number.to_string(),
    ///     "stringIntegerConverter",
    /// );
    /// let integer_double = convert::from(
    ///     |value: i32| f64::from(value),
    ///     |value: f64| value as i32,
    ///     "intDoubleConverter",
    /// );
    ///
    /// let string_double = string_integer.and_then(integer_double);
    /// assert_eq!(string_double.convert_non_null("45".to_string()), 45.0);
    /// assert_eq!(string_double.revert_non_null(89.0), "89");
    /// assert_eq!(string_double.to_string(), "stringIntegerConverter.and_then(intDoubleConverter)");
    /// ```
    fn and_then<C, N>(self, next: N) -> ConverterComposition<Self, N, B>
    where
        Self: Sized,
        N: Converter<B, C>,
    {
        ConverterComposition::new(self, next)
    }

    /// Swaps the two directions.
    ///
    /// Calling `reverse` on a concrete [`ReverseConverter`] hands back the
    /// converter it wraps instead of nesting another layer.
    fn reverse(self) -> ReverseConverter<Self>
    where
        Self: Sized,
    {
        ReverseConverter::new(self)
    }

    /// Lazily converts every element of `source`.
    ///
    /// The returned iterator is single-pass and pulls from `source` on demand;
    /// nothing is converted until it is advanced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fasaha::convert::{self, Converter};
    ///
    /// let parse = convert::from(
    ///     |text: &str| text.parse::<i32>().unwrap(),
    ///     |_: i32| "",
    ///     "parse",
    /// );
    /// let numbers: Vec<i32> = parse.convert_all(["10", "45", "65", "89"]).collect();
    /// assert_eq!(numbers, vec![10, 45, 65, 89]);
    /// ```
    fn convert_all<I>(&self, source: I) -> ConvertAll<'_, Self, I::IntoIter, B>
    where
        Self: Sized,
        I: IntoIterator<Item = A>,
    {
        ConvertAll::new(self, source.into_iter())
    }

    /// Lifts this converter to optional values; `None` maps to `None` in both
    /// directions.
    fn nullable(self) -> LiftedConverter<Self>
    where
        Self: Sized,
    {
        LiftedConverter::new(self)
    }
}

// =============================================================================
// Forwarding Implementations
// =============================================================================

impl<A, B, C> Converter<A, B> for &C
where
    C: Converter<A, B> + ?Sized,
{
    #[inline]
    fn convert_non_null(&self, value: A) -> B {
        (**self).convert_non_null(value)
    }

    #[inline]
    fn revert_non_null(&self, value: B) -> A {
        (**self).revert_non_null(value)
    }
}

impl<A, B, C> Converter<A, B> for Box<C>
where
    C: Converter<A, B> + ?Sized,
{
    #[inline]
    fn convert_non_null(&self, value: A) -> B {
        (**self).convert_non_null(value)
    }

    #[inline]
    fn revert_non_null(&self, value: B) -> A {
        (**self).revert_non_null(value)
    }
}

impl<A, B, C> Converter<A, B> for Arc<C>
where
    C: Converter<A, B> + ?Sized,
{
    #[inline]
    fn convert_non_null(&self, value: A) -> B {
        (**self).convert_non_null(value)
    }

    #[inline]
    fn revert_non_null(&self, value: B) -> A {
        (**self).revert_non_null(value)
    }
}

// =============================================================================
// FunctionConverter
// =============================================================================

/// A converter backed by a forward and a backward function.
///
/// The name is used only for diagnostics (`Display`). Equality compares the
/// two functions and ignores the name, so converters built from the same `fn`
/// items compare equal.
///
/// # Type Parameters
///
/// - `A`: The source type
/// - `B`: The target type
/// - `F`: The forward function type
/// - `G`: The backward function type
pub struct FunctionConverter<A, B, F, G> {
    forward: F,
    backward: G,
    name: Cow<'static, str>,
    _marker: PhantomData<fn(A) -> B>,
}

impl<A, B, F, G> FunctionConverter<A, B, F, G>
where
    F: Fn(A) -> B,
    G: Fn(B) -> A,
{
    /// Creates a converter from its two directions and a display name.
    pub fn new(forward: F, backward: G, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            forward,
            backward,
            name: name.into(),
            _marker: PhantomData,
        }
    }
}

impl<A, B, F, G> FunctionConverter<A, B, F, G> {
    /// The diagnostic name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Creates a [`FunctionConverter`] from a forward function, a backward
/// function and a display name.
#[inline]
pub fn from<A, B, F, G>(
    forward: F,
    backward: G,
    name: impl Into<Cow<'static, str>>,
) -> FunctionConverter<A, B, F, G>
where
    F: Fn(A) -> B,
    G: Fn(B) -> A,
{
    FunctionConverter::new(forward, backward, name)
}

impl<A, B, F, G> Converter<A, B> for FunctionConverter<A, B, F, G>
where
    F: Fn(A) -> B,
    G: Fn(B) -> A,
{
    #[inline]
    fn convert_non_null(&self, value: A) -> B {
        (self.forward)(value)
    }

    #[inline]
    fn revert_non_null(&self, value: B) -> A {
        (self.backward)(value)
    }
}

impl<A, B, F: Clone, G: Clone> Clone for FunctionConverter<A, B, F, G> {
    fn clone(&self) -> Self {
        Self {
            forward: self.forward.clone(),
            backward: self.backward.clone(),
            name: self.name.clone(),
            _marker: PhantomData,
        }
    }
}

impl<A, B, F: PartialEq, G: PartialEq> PartialEq for FunctionConverter<A, B, F, G> {
    fn eq(&self, other: &Self) -> bool {
        self.forward == other.forward && self.backward == other.backward
    }
}

impl<A, B, F: Eq, G: Eq> Eq for FunctionConverter<A, B, F, G> {}

impl<A, B, F: Hash, G: Hash> Hash for FunctionConverter<A, B, F, G> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.forward.hash(state);
        self.backward.hash(state);
    }
}

impl<A, B, F, G> fmt::Display for FunctionConverter<A, B, F, G> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.name)
    }
}

impl<A, B, F, G> fmt::Debug for FunctionConverter<A, B, F, G> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FunctionConverter")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// ConverterComposition
// =============================================================================

/// Two converters chained through an intermediate type `B`.
///
/// Produced by [`Converter::and_then`].
pub struct ConverterComposition<First, Second, B> {
    first: First,
    second: Second,
    _intermediate: PhantomData<fn(B) -> B>,
}

impl<First, Second, B> ConverterComposition<First, Second, B> {
    /// Chains `first` and `second`.
    #[must_use]
    pub const fn new(first: First, second: Second) -> Self {
        Self {
            first,
            second,
            _intermediate: PhantomData,
        }
    }

    /// The converter applied first in the forward direction.
    pub const fn first(&self) -> &First {
        &self.first
    }

    /// The converter applied second in the forward direction.
    pub const fn second(&self) -> &Second {
        &self.second
    }
}

impl<A, B, C, First, Second> Converter<A, C> for ConverterComposition<First, Second, B>
where
    First: Converter<A, B>,
    Second: Converter<B, C>,
{
    #[inline]
    fn convert_non_null(&self, value: A) -> C {
        let intermediate = self.first.convert_non_null(value);
        self.second.convert_non_null(intermediate)
    }

    #[inline]
    fn revert_non_null(&self, value: C) -> A {
        let intermediate = self.second.revert_non_null(value);
        self.first.revert_non_null(intermediate)
    }
}

impl<First: Clone, Second: Clone, B> Clone for ConverterComposition<First, Second, B> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<First: PartialEq, Second: PartialEq, B> PartialEq for ConverterComposition<First, Second, B> {
    fn eq(&self, other: &Self) -> bool {
        self.first == other.first && self.second == other.second
    }
}

impl<First: Eq, Second: Eq, B> Eq for ConverterComposition<First, Second, B> {}

impl<First: fmt::Display, Second: fmt::Display, B> fmt::Display
    for ConverterComposition<First, Second, B>
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}.and_then({})", self.first, self.second)
    }
}

impl<First: fmt::Debug, Second: fmt::Debug, B> fmt::Debug
    for ConverterComposition<First, Second, B>
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ConverterComposition")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

// =============================================================================
// ReverseConverter
// =============================================================================

/// A converter with its directions swapped.
///
/// Produced by [`Converter::reverse`].
#[derive(Clone, PartialEq, Eq)]
pub struct ReverseConverter<C> {
    original: C,
}

impl<C> ReverseConverter<C> {
    /// Wraps `original` with its directions swapped.
    #[must_use]
    pub const fn new(original: C) -> Self {
        Self { original }
    }

    /// Returns the converter this one reverses.
    ///
    /// Shadows [`Converter::reverse`] so that reversing twice yields the
    /// original value rather than a doubly wrapped one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fasaha::convert::{self, Converter};
    ///
    /// let double = convert::from(|x: i32| x * 2, |x: i32| x / 2, "double");
    /// let same = double.clone().reverse().reverse();
    /// assert_eq!(same.name(), "double");
    /// ```
    #[must_use]
    pub fn reverse(self) -> C {
        self.original
    }

    /// Borrows the converter this one reverses.
    pub const fn original(&self) -> &C {
        &self.original
    }
}

impl<A, B, C> Converter<B, A> for ReverseConverter<C>
where
    C: Converter<A, B>,
{
    #[inline]
    fn convert_non_null(&self, value: B) -> A {
        self.original.revert_non_null(value)
    }

    #[inline]
    fn revert_non_null(&self, value: A) -> B {
        self.original.convert_non_null(value)
    }
}

impl<C: fmt::Display> fmt::Display for ReverseConverter<C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}.reverse()", self.original)
    }
}

impl<C: fmt::Debug> fmt::Debug for ReverseConverter<C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ReverseConverter")
            .field("original", &self.original)
            .finish()
    }
}

// =============================================================================
// IdentityConverter
// =============================================================================

/// The converter that returns its input unchanged in both directions.
pub struct IdentityConverter<A> {
    _marker: PhantomData<fn(A) -> A>,
}

impl<A> IdentityConverter<A> {
    /// Creates the identity converter for `A`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<A> Default for IdentityConverter<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for IdentityConverter<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for IdentityConverter<A> {}

impl<A> PartialEq for IdentityConverter<A> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<A> Eq for IdentityConverter<A> {}

impl<A> Converter<A, A> for IdentityConverter<A> {
    #[inline]
    fn convert_non_null(&self, value: A) -> A {
        value
    }

    #[inline]
    fn revert_non_null(&self, value: A) -> A {
        value
    }
}

impl<A> fmt::Display for IdentityConverter<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("identity")
    }
}

impl<A> fmt::Debug for IdentityConverter<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("IdentityConverter")
    }
}

/// Returns the identity converter for `A`.
#[inline]
pub const fn identity<A>() -> IdentityConverter<A> {
    IdentityConverter::new()
}
