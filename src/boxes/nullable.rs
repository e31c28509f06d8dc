//! Mutable single-value cells that may be empty.

use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;

use parking_lot::RwLock;

use super::mapped::MappedNullableBox;
use crate::convert::NullableConverter;

/// A mutable slot holding an optional `T`.
///
/// The nullable counterpart of [`MutableBox`](super::MutableBox). Storing
/// `None` empties the box; reading an empty box yields `None`.
///
/// # Examples
///
/// ```rust
/// use fasaha::boxes::{DefaultNullableBox, NullableBox};
///
/// let name = DefaultNullableBox::of_none();
/// assert_eq!(name.get(), None);
/// name.set(Some("ada".to_string()));
/// assert_eq!(
///     name.modify(|name| name.map(|name| name.to_uppercase())),
///     Some("ADA".to_string())
/// );
/// ```
pub trait NullableBox<T> {
    /// Returns the current value, if any.
    fn get(&self) -> Option<T>;

    /// Stores `value`. `None` empties the box.
    fn set(&self, value: Option<T>);

    /// Applies `mutator` to the current value, stores the result and returns
    /// it.
    fn modify<F>(&self, mutator: F) -> Option<T>
    where
        Self: Sized,
        F: FnOnce(Option<T>) -> Option<T>,
        T: Clone,
    {
        let modified = mutator(self.get());
        self.set(modified.clone());
        modified
    }

    /// Returns a live view of this box through `converter`.
    fn map<R, C>(self, converter: C) -> MappedNullableBox<Self, C, T, R>
    where
        Self: Sized,
        C: NullableConverter<T, R>,
    {
        MappedNullableBox::new(self, converter)
    }
}

impl<T, B> NullableBox<T> for &B
where
    B: NullableBox<T>,
{
    #[inline]
    fn get(&self) -> Option<T> {
        (**self).get()
    }

    #[inline]
    fn set(&self, value: Option<T>) {
        (**self).set(value);
    }

    #[inline]
    fn modify<F>(&self, mutator: F) -> Option<T>
    where
        F: FnOnce(Option<T>) -> Option<T>,
        T: Clone,
    {
        (**self).modify(mutator)
    }
}

impl<T, B> NullableBox<T> for Rc<B>
where
    B: NullableBox<T>,
{
    #[inline]
    fn get(&self) -> Option<T> {
        (**self).get()
    }

    #[inline]
    fn set(&self, value: Option<T>) {
        (**self).set(value);
    }

    #[inline]
    fn modify<F>(&self, mutator: F) -> Option<T>
    where
        F: FnOnce(Option<T>) -> Option<T>,
        T: Clone,
    {
        (**self).modify(mutator)
    }
}

impl<T, B> NullableBox<T> for Arc<B>
where
    B: NullableBox<T>,
{
    #[inline]
    fn get(&self) -> Option<T> {
        (**self).get()
    }

    #[inline]
    fn set(&self, value: Option<T>) {
        (**self).set(value);
    }

    #[inline]
    fn modify<F>(&self, mutator: F) -> Option<T>
    where
        F: FnOnce(Option<T>) -> Option<T>,
        T: Clone,
    {
        (**self).modify(mutator)
    }
}

/// Returns a supplier that reads `source` on every call.
pub fn as_nullable_supplier<T, B>(source: B) -> impl Fn() -> Option<T>
where
    B: NullableBox<T>,
{
    move || source.get()
}

/// Returns a consumer that stores each value it is given in `target`.
pub fn as_nullable_consumer<T, B>(target: B) -> impl Fn(Option<T>)
where
    B: NullableBox<T>,
{
    move |value| target.set(value)
}

/// Formats `Some(v)` as `v` and `None` as `none`.
pub(super) struct DisplayOption<'a, T>(pub(super) &'a Option<T>);

impl<T: fmt::Display> fmt::Display for DisplayOption<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => value.fmt(formatter),
            None => formatter.write_str("none"),
        }
    }
}

// =============================================================================
// DefaultNullableBox
// =============================================================================

/// A nullable box backed by a plain field. Not `Sync`.
pub struct DefaultNullableBox<T> {
    value: RefCell<Option<T>>,
}

impl<T> DefaultNullableBox<T> {
    /// Creates a box holding `initial`.
    #[must_use]
    pub const fn of(initial: T) -> Self {
        Self {
            value: RefCell::new(Some(initial)),
        }
    }

    /// Creates an empty box.
    #[must_use]
    pub const fn of_none() -> Self {
        Self {
            value: RefCell::new(None),
        }
    }

    /// Consumes the box and returns its value.
    pub fn into_inner(self) -> Option<T> {
        self.value.into_inner()
    }
}

impl<T> Default for DefaultNullableBox<T> {
    fn default() -> Self {
        Self::of_none()
    }
}

impl<T: Clone> NullableBox<T> for DefaultNullableBox<T> {
    #[inline]
    fn get(&self) -> Option<T> {
        self.value.borrow().clone()
    }

    #[inline]
    fn set(&self, value: Option<T>) {
        drop(self.value.replace(value));
    }
}

impl<T: fmt::Display> fmt::Display for DefaultNullableBox<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "Box.Nullable.of[{}]",
            DisplayOption(&*self.value.borrow())
        )
    }
}

impl<T: fmt::Debug> fmt::Debug for DefaultNullableBox<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("DefaultNullableBox")
            .field(&*self.value.borrow())
            .finish()
    }
}

// =============================================================================
// VolatileNullableBox
// =============================================================================

/// A nullable box whose writes are visible to every thread that reads
/// afterwards. `modify` is NOT atomic.
pub struct VolatileNullableBox<T> {
    value: RwLock<Option<T>>,
}

impl<T> VolatileNullableBox<T> {
    /// Creates a box holding `initial`.
    #[must_use]
    pub const fn of(initial: T) -> Self {
        Self {
            value: RwLock::new(Some(initial)),
        }
    }

    /// Creates an empty box.
    #[must_use]
    pub const fn of_none() -> Self {
        Self {
            value: RwLock::new(None),
        }
    }

    /// Consumes the box and returns its value.
    pub fn into_inner(self) -> Option<T> {
        self.value.into_inner()
    }
}

impl<T> Default for VolatileNullableBox<T> {
    fn default() -> Self {
        Self::of_none()
    }
}

impl<T: Clone> NullableBox<T> for VolatileNullableBox<T> {
    #[inline]
    fn get(&self) -> Option<T> {
        self.value.read().clone()
    }

    #[inline]
    fn set(&self, value: Option<T>) {
        let previous = std::mem::replace(&mut *self.value.write(), value);
        drop(previous);
    }
}

impl<T: fmt::Display> fmt::Display for VolatileNullableBox<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "Box.Nullable.ofVolatile[{}]",
            DisplayOption(&*self.value.read())
        )
    }
}

impl<T: fmt::Debug> fmt::Debug for VolatileNullableBox<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("VolatileNullableBox")
            .field(&*self.value.read())
            .finish()
    }
}

// =============================================================================
// FnNullableBox
// =============================================================================

/// A nullable box synthesised from a getter and a setter.
pub struct FnNullableBox<T, G, S> {
    getter: G,
    setter: S,
    _marker: PhantomData<fn(T) -> T>,
}

impl<T, G, S> FnNullableBox<T, G, S>
where
    G: Fn() -> Option<T>,
    S: Fn(Option<T>),
{
    /// Creates a box that reads through `getter` and writes through `setter`.
    pub const fn from(getter: G, setter: S) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<T, G, S> NullableBox<T> for FnNullableBox<T, G, S>
where
    G: Fn() -> Option<T>,
    S: Fn(Option<T>),
{
    #[inline]
    fn get(&self) -> Option<T> {
        (self.getter)()
    }

    #[inline]
    fn set(&self, value: Option<T>) {
        (self.setter)(value);
    }
}

impl<T, G, S> fmt::Display for FnNullableBox<T, G, S>
where
    T: fmt::Display,
    G: Fn() -> Option<T>,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "Box.Nullable.from[{}]",
            DisplayOption(&(self.getter)())
        )
    }
}

impl<T, G, S> fmt::Debug for FnNullableBox<T, G, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("FnNullableBox").finish_non_exhaustive()
    }
}

static_assertions::assert_not_impl_any!(DefaultNullableBox<i32>: Sync);
static_assertions::assert_impl_all!(VolatileNullableBox<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DefaultNullableBox::of("contain").to_string(), "Box.Nullable.of[contain]")]
    #[case(DefaultNullableBox::<&str>::of_none().to_string(), "Box.Nullable.of[none]")]
    #[case(VolatileNullableBox::of("contain").to_string(), "Box.Nullable.ofVolatile[contain]")]
    #[case(VolatileNullableBox::<&str>::of_none().to_string(), "Box.Nullable.ofVolatile[none]")]
    fn display_names_the_constructor(#[case] rendered: String, #[case] expected: &str) {
        assert_eq!(rendered, expected);
    }

    #[rstest]
    fn from_methods_round_trip() {
        let backing = VolatileNullableBox::of_none();
        let view = FnNullableBox::from(|| backing.get(), |value| backing.set(value));

        view.set(Some(1_u8));
        assert_eq!(view.get(), Some(1));
        assert_eq!(view.to_string(), "Box.Nullable.from[1]");
        view.set(None);
        assert_eq!(backing.get(), None);
        assert_eq!(view.to_string(), "Box.Nullable.from[none]");
    }

    #[rstest]
    fn modify_can_empty_the_box() {
        let slot = DefaultNullableBox::of(7);
        assert_eq!(slot.modify(|_| None), None);
        assert_eq!(slot.into_inner(), None);
    }

    #[rstest]
    fn default_is_empty() {
        let slot: VolatileNullableBox<String> = VolatileNullableBox::default();
        assert_eq!(slot.get(), None);
    }
}
