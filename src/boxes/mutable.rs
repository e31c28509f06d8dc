//! Mutable single-value cells that always hold a value.

use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;

use parking_lot::RwLock;

use super::mapped::MappedBox;
use crate::convert::Converter;

/// A mutable slot that always holds a value of type `T`.
///
/// Boxes use shared-reference mutation: `set` takes `&self`, so a box can be
/// handed out by reference and updated through any of its holders. Because a
/// box can never be empty, `get` always returns the last value stored.
///
/// # Atomicity
///
/// [`modify`](Self::modify) reads, applies the mutator and writes back as
/// three separate steps. It is only as atomic as the implementation makes it;
/// none of the boxes in this module synthesise a compare-and-swap, so two
/// concurrent `modify` calls on a [`VolatileBox`] may lose an update.
///
/// # Examples
///
/// ```rust
/// use fasaha::boxes::{DefaultBox, MutableBox};
///
/// let counter = DefaultBox::of(1);
/// counter.set(5);
/// assert_eq!(counter.modify(|value| value * 2), 10);
/// assert_eq!(counter.get(), 10);
/// ```
pub trait MutableBox<T> {
    /// Returns the current value.
    fn get(&self) -> T;

    /// Stores `value`.
    fn set(&self, value: T);

    /// Applies `mutator` to the current value, stores the result and returns
    /// it.
    fn modify<F>(&self, mutator: F) -> T
    where
        Self: Sized,
        F: FnOnce(T) -> T,
        T: Clone,
    {
        let modified = mutator(self.get());
        self.set(modified.clone());
        modified
    }

    /// Returns a live view of this box through `converter`.
    ///
    /// Reading the view converts the current value forward; writing reverts
    /// the new value and stores it in this box. Pass `&box` to keep using the
    /// original alongside the view.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fasaha::boxes::{DefaultBox, MutableBox};
    /// use fasaha::convert;
    ///
    /// let number = DefaultBox::of(21);
    /// let text = (&number).map(convert::from(
    ///     |value: i32| value.to_string(),
    ///     |text: String| text.parse::<i32>().unwrap(),
    ///     "intString",
    /// ));
    ///
    /// assert_eq!(text.get(), "21");
    /// text.set("42".to_string());
    /// assert_eq!(number.get(), 42);
    /// ```
    fn map<R, C>(self, converter: C) -> MappedBox<Self, C, T, R>
    where
        Self: Sized,
        C: Converter<T, R>,
    {
        MappedBox::new(self, converter)
    }
}

impl<T, B> MutableBox<T> for &B
where
    B: MutableBox<T>,
{
    #[inline]
    fn get(&self) -> T {
        (**self).get()
    }

    #[inline]
    fn set(&self, value: T) {
        (**self).set(value);
    }

    #[inline]
    fn modify<F>(&self, mutator: F) -> T
    where
        F: FnOnce(T) -> T,
        T: Clone,
    {
        (**self).modify(mutator)
    }
}

impl<T, B> MutableBox<T> for Rc<B>
where
    B: MutableBox<T>,
{
    #[inline]
    fn get(&self) -> T {
        (**self).get()
    }

    #[inline]
    fn set(&self, value: T) {
        (**self).set(value);
    }

    #[inline]
    fn modify<F>(&self, mutator: F) -> T
    where
        F: FnOnce(T) -> T,
        T: Clone,
    {
        (**self).modify(mutator)
    }
}

impl<T, B> MutableBox<T> for Arc<B>
where
    B: MutableBox<T>,
{
    #[inline]
    fn get(&self) -> T {
        (**self).get()
    }

    #[inline]
    fn set(&self, value: T) {
        (**self).set(value);
    }

    #[inline]
    fn modify<F>(&self, mutator: F) -> T
    where
        F: FnOnce(T) -> T,
        T: Clone,
    {
        (**self).modify(mutator)
    }
}

/// Returns a supplier that reads `source` on every call.
///
/// Any `Fn() -> T` is a supplier, so the result can be memoized or composed
/// like any other.
///
/// # Examples
///
/// ```rust
/// use fasaha::boxes::{self, DefaultBox, MutableBox};
/// use fasaha::supplier::{self, Supplier};
///
/// let setting = DefaultBox::of(3);
/// let doubled = supplier::compose(|value: i32| value * 2, boxes::as_supplier(&setting));
/// setting.set(5);
/// assert_eq!(doubled.get(), 10);
/// ```
pub fn as_supplier<T, B>(source: B) -> impl Fn() -> T
where
    B: MutableBox<T>,
{
    move || source.get()
}

/// Returns a consumer that stores each value it is given in `target`.
pub fn as_consumer<T, B>(target: B) -> impl Fn(T)
where
    B: MutableBox<T>,
{
    move |value| target.set(value)
}

// =============================================================================
// DefaultBox
// =============================================================================

/// A box backed by a plain field.
///
/// Not `Sync`: values written on one thread have no visibility guarantee on
/// another, so the compiler refuses to share it. Use [`VolatileBox`] for
/// cross-thread access.
pub struct DefaultBox<T> {
    value: RefCell<T>,
}

impl<T> DefaultBox<T> {
    /// Creates a box holding `initial`.
    #[must_use]
    pub const fn of(initial: T) -> Self {
        Self {
            value: RefCell::new(initial),
        }
    }

    /// Consumes the box and returns its value.
    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }
}

impl<T: Clone> MutableBox<T> for DefaultBox<T> {
    #[inline]
    fn get(&self) -> T {
        self.value.borrow().clone()
    }

    #[inline]
    fn set(&self, value: T) {
        drop(self.value.replace(value));
    }
}

impl<T: fmt::Display> fmt::Display for DefaultBox<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Box.of[{}]", self.value.borrow())
    }
}

impl<T: fmt::Debug> fmt::Debug for DefaultBox<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("DefaultBox")
            .field(&*self.value.borrow())
            .finish()
    }
}

// =============================================================================
// VolatileBox
// =============================================================================

/// A box whose writes are visible to every thread that reads afterwards.
///
/// A `set` on one thread happens-before any later `get` on another. `modify`
/// is read-compute-write and NOT atomic.
///
/// # Examples
///
/// ```rust
/// use fasaha::boxes::{MutableBox, VolatileBox};
/// use std::sync::Arc;
/// use std::thread;
///
/// let flag = Arc::new(VolatileBox::of(false));
/// let writer = Arc::clone(&flag);
/// thread::spawn(move || writer.set(true)).join().unwrap();
/// assert!(flag.get());
/// ```
pub struct VolatileBox<T> {
    value: RwLock<T>,
}

impl<T> VolatileBox<T> {
    /// Creates a box holding `initial`.
    #[must_use]
    pub const fn of(initial: T) -> Self {
        Self {
            value: RwLock::new(initial),
        }
    }

    /// Consumes the box and returns its value.
    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }
}

impl<T: Clone> MutableBox<T> for VolatileBox<T> {
    #[inline]
    fn get(&self) -> T {
        self.value.read().clone()
    }

    #[inline]
    fn set(&self, value: T) {
        let previous = std::mem::replace(&mut *self.value.write(), value);
        drop(previous);
    }
}

impl<T: fmt::Display> fmt::Display for VolatileBox<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Box.ofVolatile[{}]", *self.value.read())
    }
}

impl<T: fmt::Debug> fmt::Debug for VolatileBox<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("VolatileBox")
            .field(&*self.value.read())
            .finish()
    }
}

// =============================================================================
// FnBox
// =============================================================================

/// A box synthesised from a getter and a setter.
///
/// The box owns no storage; every access goes through the two functions.
pub struct FnBox<T, G, S> {
    getter: G,
    setter: S,
    _marker: PhantomData<fn(T) -> T>,
}

impl<T, G, S> FnBox<T, G, S>
where
    G: Fn() -> T,
    S: Fn(T),
{
    /// Creates a box that reads through `getter` and writes through `setter`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fasaha::boxes::{FnBox, MutableBox, VolatileBox};
    ///
    /// let backing = VolatileBox::of(String::new());
    /// let view = FnBox::from(|| backing.get(), |value| backing.set(value));
    /// view.set("A".to_string());
    /// assert_eq!(backing.get(), "A");
    /// assert_eq!(view.to_string(), "Box.from[A]");
    /// ```
    pub const fn from(getter: G, setter: S) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<T, G, S> MutableBox<T> for FnBox<T, G, S>
where
    G: Fn() -> T,
    S: Fn(T),
{
    #[inline]
    fn get(&self) -> T {
        (self.getter)()
    }

    #[inline]
    fn set(&self, value: T) {
        (self.setter)(value);
    }
}

impl<T, G, S> fmt::Display for FnBox<T, G, S>
where
    T: fmt::Display,
    G: Fn() -> T,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Box.from[{}]", (self.getter)())
    }
}

impl<T, G, S> fmt::Debug for FnBox<T, G, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("FnBox").finish_non_exhaustive()
    }
}

static_assertions::assert_not_impl_any!(DefaultBox<i32>: Sync);
static_assertions::assert_impl_all!(VolatileBox<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn display_names_the_constructor() {
        assert_eq!(DefaultBox::of("contain").to_string(), "Box.of[contain]");
        assert_eq!(
            VolatileBox::of("contain").to_string(),
            "Box.ofVolatile[contain]"
        );
    }

    #[rstest]
    fn from_methods_round_trip() {
        let test_value = VolatileBox::of(String::new());
        let for_value = FnBox::from(|| test_value.get(), |value| test_value.set(value));
        for_value.set("A".to_string());
        assert_eq!(for_value.get(), "A");
        for_value.set("B".to_string());
        assert_eq!(for_value.get(), "B");
    }

    #[rstest]
    fn modify_returns_stored_value() {
        let words = DefaultBox::of(vec!["a"]);
        let modified = words.modify(|mut words| {
            words.push("b");
            words
        });
        assert_eq!(modified, vec!["a", "b"]);
        assert_eq!(words.into_inner(), vec!["a", "b"]);
    }

    #[rstest]
    fn shared_through_rc() {
        let shared = Rc::new(DefaultBox::of(3));
        let alias = Rc::clone(&shared);
        alias.set(4);
        assert_eq!(shared.get(), 4);
    }
}
