//! Boxes viewed through a converter.

use std::fmt;
use std::marker::PhantomData;

use super::mutable::MutableBox;
use super::nullable::{DisplayOption, NullableBox};
use crate::convert::{Converter, NullableConverter};

/// A live projection of a [`MutableBox`] through a [`Converter`].
///
/// Produced by [`MutableBox::map`]. The view stores nothing of its own:
///
/// - `get` converts the delegate's current value forward.
/// - `set` reverts the new value and stores it in the delegate.
/// - `modify` calls the delegate's `modify` exactly once and returns the
///   converted result. It is exactly as atomic as the delegate's `modify`.
///
/// # Type Parameters
///
/// - `B`: The delegate box
/// - `C`: The converter
/// - `T`: The delegate's value type
/// - `R`: The view's value type
pub struct MappedBox<B, C, T, R> {
    delegate: B,
    converter: C,
    _marker: PhantomData<fn(T) -> R>,
}

impl<B, C, T, R> MappedBox<B, C, T, R> {
    /// Creates a view of `delegate` through `converter`.
    #[must_use]
    pub const fn new(delegate: B, converter: C) -> Self {
        Self {
            delegate,
            converter,
            _marker: PhantomData,
        }
    }

    /// The underlying box.
    pub const fn delegate(&self) -> &B {
        &self.delegate
    }
}

impl<B, C, T, R> MutableBox<R> for MappedBox<B, C, T, R>
where
    B: MutableBox<T>,
    C: Converter<T, R>,
    T: Clone,
{
    #[inline]
    fn get(&self) -> R {
        self.converter.convert_non_null(self.delegate.get())
    }

    #[inline]
    fn set(&self, value: R) {
        self.delegate.set(self.converter.revert_non_null(value));
    }

    fn modify<F>(&self, mutator: F) -> R
    where
        F: FnOnce(R) -> R,
        R: Clone,
    {
        let mut result = None;
        self.delegate.modify(|input| {
            let unmapped = mutator(self.converter.convert_non_null(input));
            let reverted = self.converter.revert_non_null(unmapped.clone());
            result = Some(unmapped);
            reverted
        });
        match result {
            Some(modified) => modified,
            None => unreachable!("delegate `modify` returned without applying the mutator"),
        }
    }
}

impl<B, C, T, R> fmt::Display for MappedBox<B, C, T, R>
where
    B: MutableBox<T> + fmt::Display,
    C: Converter<T, R> + fmt::Display,
    R: fmt::Display,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "[{} mapped to {} by {}]",
            self.delegate,
            self.converter.convert_non_null(self.delegate.get()),
            self.converter
        )
    }
}

impl<B: fmt::Debug, C, T, R> fmt::Debug for MappedBox<B, C, T, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MappedBox")
            .field("delegate", &self.delegate)
            .finish_non_exhaustive()
    }
}

/// A live projection of a [`NullableBox`] through a [`NullableConverter`].
///
/// Produced by [`NullableBox::map`]. `None` is passed to the converter like
/// any other value; the converter decides what absence maps to.
pub struct MappedNullableBox<B, C, T, R> {
    delegate: B,
    converter: C,
    _marker: PhantomData<fn(T) -> R>,
}

impl<B, C, T, R> MappedNullableBox<B, C, T, R> {
    /// Creates a view of `delegate` through `converter`.
    #[must_use]
    pub const fn new(delegate: B, converter: C) -> Self {
        Self {
            delegate,
            converter,
            _marker: PhantomData,
        }
    }
}

impl<B, C, T, R> NullableBox<R> for MappedNullableBox<B, C, T, R>
where
    B: NullableBox<T>,
    C: NullableConverter<T, R>,
    T: Clone,
{
    #[inline]
    fn get(&self) -> Option<R> {
        self.converter.convert(self.delegate.get())
    }

    #[inline]
    fn set(&self, value: Option<R>) {
        self.delegate.set(self.converter.revert(value));
    }

    fn modify<F>(&self, mutator: F) -> Option<R>
    where
        F: FnOnce(Option<R>) -> Option<R>,
        R: Clone,
    {
        let mut result = None;
        self.delegate.modify(|input| {
            let unmapped = mutator(self.converter.convert(input));
            let reverted = self.converter.revert(unmapped.clone());
            result = Some(unmapped);
            reverted
        });
        match result {
            Some(modified) => modified,
            None => unreachable!("delegate `modify` returned without applying the mutator"),
        }
    }
}

impl<B, C, T, R> fmt::Display for MappedNullableBox<B, C, T, R>
where
    B: NullableBox<T> + fmt::Display,
    C: NullableConverter<T, R> + fmt::Display,
    R: fmt::Display,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "[{} mapped to {} by {}]",
            self.delegate,
            DisplayOption(&self.converter.convert(self.delegate.get())),
            self.converter
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxes::{DefaultBox, DefaultNullableBox, VolatileBox};
    use crate::convert;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn modify_runs_the_delegate_once_and_returns_the_view_value() {
        let reverts = Cell::new(0);
        let cents = DefaultBox::of(250_i64);
        let dollars = (&cents).map(convert::from(
            |cents: i64| cents as f64 / 100.0,
            |dollars: f64| {
                reverts.set(reverts.get() + 1);
                (dollars * 100.0).round() as i64
            },
            "centsDollars",
        ));

        let result = dollars.modify(|amount| amount + 1.0);

        assert_eq!(result, 3.5);
        assert_eq!(cents.get(), 350);
        assert_eq!(reverts.get(), 1);
    }

    #[rstest]
    fn display_includes_delegate_value_and_converter() {
        let celsius = VolatileBox::of(100);
        let view = (&celsius).map(convert::from(
            |c: i32| c * 9 / 5 + 32,
            |f: i32| (f - 32) * 5 / 9,
            "celsiusFahrenheit",
        ));
        assert_eq!(
            view.to_string(),
            "[Box.ofVolatile[100] mapped to 212 by celsiusFahrenheit]"
        );
    }

    #[rstest]
    fn nullable_view_passes_none_to_the_converter() {
        let maybe = DefaultNullableBox::of_none();
        let defaulted = (&maybe).map(convert::nullable_from(
            |value: Option<u32>| Some(value.unwrap_or(0)),
            |value: Option<u32>| value.filter(|value| *value != 0),
            "zeroIsNone",
        ));

        assert_eq!(defaulted.get(), Some(0));
        defaulted.set(Some(0));
        assert_eq!(maybe.get(), None);
        assert_eq!(defaulted.modify(|value| value.map(|value| value + 3)), Some(3));
        assert_eq!(maybe.get(), Some(3));
    }
}
