//! A supplier that computes once and caches forever.

use std::fmt;

use parking_lot::{RwLock, RwLockUpgradableReadGuard};

use super::Supplier;
use super::expiring::ExpiringMemoized;
use super::synchronized::Synchronized;

/// A supplier that calls its delegate once and returns clones of the result.
///
/// Created by [`memoize`]. The first [`get`](Supplier::get) runs the
/// delegate; every later call returns a clone of the cached value. Once
/// filled, reads only take a shared lock.
///
/// # Thread Safety
///
/// Single-flight: concurrent first callers queue on an upgradable lock, one
/// of them computes and the rest observe its result. If the delegate panics
/// the lock is released with the cache still empty.
///
/// # Re-entry
///
/// The delegate must not call `get` on the memoizer it belongs to. The
/// inner call waits for the upgradable lock its own thread already holds,
/// so an empty memoizer deadlocks instead of panicking. Reading
/// [`is_initialized`](Self::is_initialized) from the delegate only takes a
/// shared lock and is fine.
pub struct Memoized<T, S> {
    delegate: S,
    value: RwLock<Option<T>>,
}

impl<T, S> Memoized<T, S>
where
    T: Clone,
    S: Supplier<T>,
{
    /// Wraps `delegate` without calling it.
    #[must_use]
    pub const fn new(delegate: S) -> Self {
        Self {
            delegate,
            value: RwLock::new(None),
        }
    }
}

impl<T, S> Memoized<T, S> {
    /// Returns `true` once the delegate has produced a value.
    pub fn is_initialized(&self) -> bool {
        self.value.read().is_some()
    }
}

impl<T, S> Supplier<T> for Memoized<T, S>
where
    T: Clone,
    S: Supplier<T>,
{
    fn get(&self) -> T {
        if let Some(value) = self.value.read().as_ref() {
            return value.clone();
        }

        let guard = self.value.upgradable_read();
        if let Some(value) = guard.as_ref() {
            return value.clone();
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(message = "memoize.compute");

        let computed = self.delegate.get();
        let mut guard = RwLockUpgradableReadGuard::upgrade(guard);
        *guard = Some(computed.clone());
        computed
    }
}

impl<T, S> fmt::Debug for Memoized<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoized")
            .field("initialized", &self.is_initialized())
            .finish_non_exhaustive()
    }
}

impl<T, S: fmt::Display> fmt::Display for Memoized<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "memoize({})", self.delegate)
    }
}

/// Conversion into a memoizing supplier.
///
/// Lets [`memoize`] return an existing [`Memoized`] unchanged instead of
/// wrapping it a second time.
pub trait IntoMemoized<T> {
    /// The memoizing supplier produced.
    type Memoized: Supplier<T>;

    /// Wraps `self` in a memoizer, unless it already is one.
    fn into_memoized(self) -> Self::Memoized;
}

impl<T, F> IntoMemoized<T> for F
where
    T: Clone,
    F: Fn() -> T,
{
    type Memoized = Memoized<T, F>;

    fn into_memoized(self) -> Self::Memoized {
        Memoized::new(self)
    }
}

impl<T, S> IntoMemoized<T> for Memoized<T, S>
where
    T: Clone,
    S: Supplier<T>,
{
    type Memoized = Self;

    fn into_memoized(self) -> Self {
        self
    }
}

impl<T, S, C> IntoMemoized<T> for ExpiringMemoized<T, S, C>
where
    Self: Supplier<T>,
    T: Clone,
{
    type Memoized = Memoized<T, Self>;

    fn into_memoized(self) -> Self::Memoized {
        Memoized::new(self)
    }
}

impl<T, S> IntoMemoized<T> for Synchronized<S>
where
    Self: Supplier<T>,
    T: Clone,
{
    type Memoized = Memoized<T, Self>;

    fn into_memoized(self) -> Self::Memoized {
        Memoized::new(self)
    }
}

/// Returns a supplier that caches the first value produced by `supplier`.
///
/// Passing a [`Memoized`] returns it as is.
///
/// # Examples
///
/// ```rust
/// use fasaha::supplier::{self, Supplier};
///
/// let once = supplier::memoize(|| vec![1, 2, 3]);
/// let again = supplier::memoize(once);
/// assert_eq!(again.get(), vec![1, 2, 3]);
/// assert!(again.is_initialized());
/// ```
pub fn memoize<T, S>(supplier: S) -> S::Memoized
where
    S: IntoMemoized<T>,
{
    supplier.into_memoized()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    struct Constant(i32);

    impl Supplier<i32> for Constant {
        fn get(&self) -> i32 {
            self.0
        }
    }

    impl fmt::Display for Constant {
        fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "constant({})", self.0)
        }
    }

    #[rstest]
    fn computes_once() {
        let calls = Cell::new(0);
        let memoized = memoize(|| {
            calls.set(calls.get() + 1);
            "value".to_string()
        });

        assert!(!memoized.is_initialized());
        assert_eq!(memoized.get(), "value");
        assert_eq!(memoized.get(), "value");
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn memoizing_twice_keeps_the_cache() {
        let calls = Cell::new(0);
        let first = memoize(|| {
            calls.set(calls.get() + 1);
            1
        });
        assert_eq!(first.get(), 1);

        let second = memoize(first);
        assert!(second.is_initialized());
        assert_eq!(second.get(), 1);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn panic_leaves_cache_empty_and_next_call_retries() {
        let attempts = Cell::new(0);
        let flaky = memoize(|| {
            attempts.set(attempts.get() + 1);
            assert!(attempts.get() > 1, "first attempt fails");
            attempts.get()
        });

        let outcome = catch_unwind(AssertUnwindSafe(|| flaky.get()));
        assert!(outcome.is_err());
        assert!(!flaky.is_initialized());
        assert_eq!(flaky.get(), 2);
        assert_eq!(flaky.get(), 2);
    }

    #[rstest]
    fn display_names_the_delegate() {
        let memoized = Memoized::new(Constant(3));
        assert_eq!(memoized.to_string(), "memoize(constant(3))");
        assert_eq!(memoized.get(), 3);
    }

    #[rstest]
    fn delegate_may_inspect_its_own_memoizer() {
        static SELF_AWARE: Memoized<bool, fn() -> bool> = Memoized::new(observe as fn() -> bool);

        fn observe() -> bool {
            SELF_AWARE.is_initialized()
        }

        assert!(!SELF_AWARE.get());
        assert!(SELF_AWARE.is_initialized());
    }
}
