//! Lazy element-wise conversion.

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::Converter;

/// Iterator returned by [`Converter::convert_all`].
///
/// Each call to `next` pulls one element from the source and converts it.
/// The source is consumed as the iterator advances; to convert again, call
/// `convert_all` on a fresh source.
pub struct ConvertAll<'a, C, I, B> {
    converter: &'a C,
    source: I,
    _target: PhantomData<fn() -> B>,
}

impl<'a, C, I, B> ConvertAll<'a, C, I, B> {
    pub(super) const fn new(converter: &'a C, source: I) -> Self {
        Self {
            converter,
            source,
            _target: PhantomData,
        }
    }
}

impl<C, I, B> Iterator for ConvertAll<'_, C, I, B>
where
    I: Iterator,
    C: Converter<I::Item, B>,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<B> {
        self.source
            .next()
            .map(|element| self.converter.convert_non_null(element))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<C, I, B> DoubleEndedIterator for ConvertAll<'_, C, I, B>
where
    I: DoubleEndedIterator,
    C: Converter<I::Item, B>,
{
    #[inline]
    fn next_back(&mut self) -> Option<B> {
        self.source
            .next_back()
            .map(|element| self.converter.convert_non_null(element))
    }
}

impl<C, I, B> ExactSizeIterator for ConvertAll<'_, C, I, B>
where
    I: ExactSizeIterator,
    C: Converter<I::Item, B>,
{
}

impl<C, I, B> FusedIterator for ConvertAll<'_, C, I, B>
where
    I: FusedIterator,
    C: Converter<I::Item, B>,
{
}

impl<C: fmt::Display, I, B> fmt::Debug for ConvertAll<'_, C, I, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ConvertAll")
            .field("converter", &format_args!("{}", self.converter))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::convert::{self, Converter};
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn conversion_is_pulled_on_demand() {
        let calls = Cell::new(0);
        let counting = convert::from(
            |value: i32| {
                calls.set(calls.get() + 1);
                value * 10
            },
            |value: i32| value / 10,
            "counting",
        );

        let mut converted = counting.convert_all(vec![1, 2, 3]);
        assert_eq!(calls.get(), 0);
        assert_eq!(converted.next(), Some(10));
        assert_eq!(calls.get(), 1);
        assert_eq!(converted.len(), 2);
        assert_eq!(converted.next_back(), Some(30));
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn empty_source_yields_nothing() {
        let converter = convert::identity::<u8>();
        assert_eq!(converter.convert_all(Vec::new()).count(), 0);
    }
}
