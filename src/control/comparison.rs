//! Three-way comparison results.

use std::cmp::Ordering;

/// The outcome of comparing two values.
///
/// # Examples
///
/// ```rust
/// use fasaha::control::Comparison;
///
/// let label = Comparison::compare(&3, &5).lesser_equal_greater("below", "at", "above");
/// assert_eq!(label, "below");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Comparison {
    /// The first value is smaller.
    Lesser,
    /// Both values are equal.
    Equal,
    /// The first value is larger.
    Greater,
}

impl Comparison {
    /// Compares two values by their natural ordering.
    #[inline]
    pub fn compare<T: Ord + ?Sized>(first: &T, second: &T) -> Self {
        first.cmp(second).into()
    }

    /// Compares two values with an explicit comparator.
    #[inline]
    pub fn compare_with<T: ?Sized, F>(comparator: F, first: &T, second: &T) -> Self
    where
        F: FnOnce(&T, &T) -> Ordering,
    {
        comparator(first, second).into()
    }

    /// Interprets a signed comparison result: negative is `Lesser`, zero is
    /// `Equal`, positive is `Greater`.
    #[inline]
    pub const fn from_compare_result(result: i32) -> Self {
        match result {
            0 => Self::Equal,
            value if value < 0 => Self::Lesser,
            _ => Self::Greater,
        }
    }

    /// Selects one of three values according to this comparison.
    #[inline]
    pub fn lesser_equal_greater<T>(self, lesser: T, equal: T, greater: T) -> T {
        match self {
            Self::Lesser => lesser,
            Self::Equal => equal,
            Self::Greater => greater,
        }
    }
}

impl From<Ordering> for Comparison {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Lesser,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Greater,
        }
    }
}

impl From<Comparison> for Ordering {
    fn from(comparison: Comparison) -> Self {
        comparison.lesser_equal_greater(Self::Less, Self::Equal, Self::Greater)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-7, Comparison::Lesser)]
    #[case(i32::MIN, Comparison::Lesser)]
    #[case(0, Comparison::Equal)]
    #[case(1, Comparison::Greater)]
    #[case(i32::MAX, Comparison::Greater)]
    fn from_compare_result_classifies_sign(#[case] input: i32, #[case] expected: Comparison) {
        assert_eq!(Comparison::from_compare_result(input), expected);
    }

    #[rstest]
    fn compare_with_reversed_comparator() {
        let comparison = Comparison::compare_with(|a: &i32, b: &i32| b.cmp(a), &1, &2);
        assert_eq!(comparison, Comparison::Greater);
    }

    #[rstest]
    fn compare_unsized_strings() {
        assert_eq!(Comparison::compare("apple", "apple"), Comparison::Equal);
    }

    #[rstest]
    fn ordering_roundtrip() {
        for ordering in [Ordering::Less, Ordering::Equal, Ordering::Greater] {
            assert_eq!(Ordering::from(Comparison::from(ordering)), ordering);
        }
    }
}
