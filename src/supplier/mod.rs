//! Value suppliers and memoization.
//!
//! A [`Supplier`] produces a value on demand. Any `Fn() -> T` closure is a
//! supplier; this module adds combinators around them:
//!
//! - [`memoize`] caches the first result forever.
//! - [`memoize_with_expiration`] caches a result for a fixed window.
//! - [`synchronized`] serialises calls to a supplier that is not thread-safe.
//! - [`compose`] and [`of_instance`] build suppliers from functions and values.
//!
//! # Memoization Guarantee
//!
//! Both memoizers are single-flight: the delegate runs at most once per cache
//! fill, even when many threads ask at the same moment. Threads that arrive
//! while a computation is in progress wait for it and receive its result. If
//! the delegate panics the cache stays empty and the next call tries again.
//!
//! # Examples
//!
//! ```rust
//! use fasaha::supplier::{self, Supplier};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let calls = AtomicUsize::new(0);
//! let answer = supplier::memoize(|| {
//!     calls.fetch_add(1, Ordering::SeqCst);
//!     42
//! });
//!
//! assert_eq!(answer.get(), 42);
//! assert_eq!(answer.get(), 42);
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//! ```

mod expiring;
mod memoized;
mod synchronized;

pub use expiring::{
    Clock, ExpiringMemoized, MonotonicClock, memoize_with_expiration,
    memoize_with_expiration_and_clock,
};
pub use memoized::{IntoMemoized, Memoized, memoize};
pub use synchronized::{Synchronized, synchronized};

/// A source of values of type `T`.
///
/// Implemented for every `Fn() -> T`.
pub trait Supplier<T> {
    /// Produces a value.
    fn get(&self) -> T;
}

impl<T, F> Supplier<T> for F
where
    F: Fn() -> T,
{
    #[inline]
    fn get(&self) -> T {
        self()
    }
}

/// Returns a supplier that applies `function` to each value of `supplier`.
///
/// Neither argument is called until the returned supplier is.
///
/// # Examples
///
/// ```rust
/// use fasaha::supplier::{self, Supplier};
///
/// let length = supplier::compose(|text: String| text.len(), || "fasaha".to_string());
/// assert_eq!(length.get(), 6);
/// ```
pub fn compose<A, T, F, S>(function: F, supplier: S) -> impl Fn() -> T
where
    F: Fn(A) -> T,
    S: Supplier<A>,
{
    move || function(supplier.get())
}

/// Returns a supplier that always yields a clone of `instance`.
pub fn of_instance<T: Clone>(instance: T) -> impl Fn() -> T {
    move || instance.clone()
}

/// Returns a function that calls [`Supplier::get`] on its argument.
///
/// # Examples
///
/// ```rust
/// use fasaha::supplier;
///
/// let suppliers = [supplier::of_instance(1), supplier::of_instance(2)];
/// let values: Vec<i32> = suppliers.iter().map(supplier::supplier_function()).collect();
/// assert_eq!(values, vec![1, 2]);
/// ```
pub fn supplier_function<T, S>() -> impl Fn(&S) -> T
where
    S: Supplier<T>,
{
    |supplier: &S| supplier.get()
}
