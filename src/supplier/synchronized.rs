//! Serialised access to a supplier.

use std::fmt;

use parking_lot::Mutex;

use super::Supplier;

/// A supplier whose calls to the delegate never overlap.
///
/// Created by [`synchronized`]. Each [`get`](Supplier::get) holds a mutex for
/// the duration of the delegate call, so a delegate with interior state that
/// is not itself safe to call concurrently can be shared between threads.
///
/// # Re-entry
///
/// The mutex is not reentrant: a delegate that calls `get` on its own
/// wrapper deadlocks.
pub struct Synchronized<S> {
    delegate: Mutex<S>,
}

impl<T, S> Supplier<T> for Synchronized<S>
where
    S: Supplier<T>,
{
    fn get(&self) -> T {
        self.delegate.lock().get()
    }
}

impl<S> Synchronized<S> {
    /// Consumes the wrapper and returns the delegate.
    pub fn into_inner(self) -> S {
        self.delegate.into_inner()
    }
}

impl<S> fmt::Debug for Synchronized<S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Synchronized")
            .field("locked", &self.delegate.is_locked())
            .finish_non_exhaustive()
    }
}

/// Returns a supplier that serialises calls to `supplier`.
///
/// # Examples
///
/// ```rust
/// use fasaha::supplier::{self, Supplier};
/// use std::cell::Cell;
///
/// let next_id = Cell::new(0_u32);
/// let ids = supplier::synchronized(move || {
///     next_id.set(next_id.get() + 1);
///     next_id.get()
/// });
///
/// assert_eq!(ids.get(), 1);
/// assert_eq!(ids.get(), 2);
/// ```
pub fn synchronized<S>(supplier: S) -> Synchronized<S> {
    Synchronized {
        delegate: Mutex::new(supplier),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::sync::Arc;
    use std::thread;

    // Cell is Send but not Sync; the mutex makes the closure shareable.
    #[rstest]
    fn shares_a_send_only_delegate_between_threads() {
        let counter = Cell::new(0_u64);
        let supplier = Arc::new(synchronized(move || {
            counter.set(counter.get() + 1);
            counter.get()
        }));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let supplier = Arc::clone(&supplier);
                thread::spawn(move || (0..100).map(|_| supplier.get()).max())
            })
            .collect();
        let highest = handles
            .into_iter()
            .filter_map(|handle| handle.join().expect("worker panicked"))
            .max();

        assert_eq!(highest, Some(800));
    }
}
