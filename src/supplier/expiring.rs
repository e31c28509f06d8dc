//! A supplier whose cached value lapses after a fixed window.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::{RwLock, RwLockUpgradableReadGuard};

use super::Supplier;
use crate::error::InvalidArgumentError;

/// A monotonic time source.
///
/// Expiring memoizers read the clock to decide whether the cached value is
/// still fresh. Production code uses [`MonotonicClock`]; tests can supply a
/// clock they advance by hand.
pub trait Clock {
    /// The current instant. Must never go backwards.
    fn now(&self) -> Instant;
}

/// The system's monotonic clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now(&self) -> Instant {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    #[inline]
    fn now(&self) -> Instant {
        (**self).now()
    }
}

struct Entry<T> {
    value: T,
    // `None` when the window reaches past the end of representable time.
    expires_at: Option<Instant>,
}

impl<T> Entry<T> {
    fn is_fresh(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|expires_at| now < expires_at)
    }
}

/// A supplier that caches its delegate's value for a fixed window.
///
/// Created by [`memoize_with_expiration`]. A call inside the window returns a
/// clone of the cached value; the first call after the window closes runs the
/// delegate again. The new window starts when that computation completes.
///
/// Recomputation is single-flight: callers that find the window closed queue
/// on an upgradable lock and only the first of them runs the delegate.
///
/// # Re-entry
///
/// The delegate must not call `get` on the memoizer it belongs to. Whenever
/// the window is closed the inner call waits for the upgradable lock held by
/// the outer one, and the thread deadlocks.
pub struct ExpiringMemoized<T, S, C = MonotonicClock> {
    delegate: S,
    duration: Duration,
    clock: C,
    entry: RwLock<Option<Entry<T>>>,
}

impl<T, S, C> ExpiringMemoized<T, S, C> {
    /// The length of the caching window.
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns `true` if a cached value exists and its window is still open.
    pub fn is_fresh(&self) -> bool
    where
        C: Clock,
    {
        let now = self.clock.now();
        self.entry
            .read()
            .as_ref()
            .is_some_and(|entry| entry.is_fresh(now))
    }
}

impl<T, S, C> Supplier<T> for ExpiringMemoized<T, S, C>
where
    T: Clone,
    S: Supplier<T>,
    C: Clock,
{
    fn get(&self) -> T {
        if let Some(entry) = self.entry.read().as_ref()
            && entry.is_fresh(self.clock.now())
        {
            return entry.value.clone();
        }

        let guard = self.entry.upgradable_read();
        if let Some(entry) = guard.as_ref() {
            if entry.is_fresh(self.clock.now()) {
                return entry.value.clone();
            }
            #[cfg(feature = "tracing")]
            tracing::trace!(
                message = "memoize_with_expiration.expired",
                duration_ms = self.duration.as_millis()
            );
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(message = "memoize_with_expiration.compute");

        let value = self.delegate.get();
        let expires_at = self.clock.now().checked_add(self.duration);
        let mut guard = RwLockUpgradableReadGuard::upgrade(guard);
        *guard = Some(Entry {
            value: value.clone(),
            expires_at,
        });
        value
    }
}

impl<T, S, C> fmt::Debug for ExpiringMemoized<T, S, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ExpiringMemoized")
            .field("duration", &self.duration)
            .field("initialized", &self.entry.read().is_some())
            .finish_non_exhaustive()
    }
}

impl<T, S: fmt::Display, C> fmt::Display for ExpiringMemoized<T, S, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "memoize_with_expiration({}, {:?})",
            self.delegate, self.duration
        )
    }
}

/// Returns a supplier that caches `supplier`'s value for `duration`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError::NonPositiveDuration`] if `duration` is
/// zero.
///
/// # Examples
///
/// ```rust
/// use fasaha::supplier::{self, Supplier};
/// use std::time::Duration;
///
/// let config = supplier::memoize_with_expiration(
///     || "loaded".to_string(),
///     Duration::from_secs(60),
/// )?;
/// assert_eq!(config.get(), "loaded");
/// # Ok::<(), fasaha::error::InvalidArgumentError>(())
/// ```
pub fn memoize_with_expiration<T, S>(
    supplier: S,
    duration: Duration,
) -> Result<ExpiringMemoized<T, S>, InvalidArgumentError>
where
    T: Clone,
    S: Supplier<T>,
{
    memoize_with_expiration_and_clock(supplier, duration, MonotonicClock)
}

/// Like [`memoize_with_expiration`], reading time from `clock`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError::NonPositiveDuration`] if `duration` is
/// zero.
pub fn memoize_with_expiration_and_clock<T, S, C>(
    supplier: S,
    duration: Duration,
    clock: C,
) -> Result<ExpiringMemoized<T, S, C>, InvalidArgumentError>
where
    T: Clone,
    S: Supplier<T>,
    C: Clock,
{
    if duration.is_zero() {
        return Err(InvalidArgumentError::NonPositiveDuration);
    }
    Ok(ExpiringMemoized {
        delegate: supplier,
        duration,
        clock,
        entry: RwLock::new(None),
    })
}
