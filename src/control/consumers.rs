//! Consumer combinators.
//!
//! A consumer is any `Fn(T)`: a side-effecting sink for values.

/// Returns a consumer that ignores its input.
#[inline]
pub fn do_nothing<T>() -> impl Fn(T) {
    |_| {}
}

/// Returns a consumer that applies `function` and hands the result to
/// `consumer`.
///
/// # Examples
///
/// ```rust
/// use fasaha::control::consumers;
/// use std::cell::RefCell;
///
/// let lengths = RefCell::new(Vec::new());
/// let record = consumers::compose(|word: &str| word.len(), |length| lengths.borrow_mut().push(length));
/// record("hello");
/// record("hi");
/// assert_eq!(*lengths.borrow(), vec![5, 2]);
/// ```
#[inline]
pub fn compose<T, U, F, C>(function: F, consumer: C) -> impl Fn(T)
where
    F: Fn(T) -> U,
    C: Fn(U),
{
    move |value| consumer(function(value))
}

/// Returns a consumer that asks `target` for the current sink on every call.
///
/// Swapping what `target` returns redirects subsequent values without
/// rebuilding the consumer.
#[inline]
pub fn redirectable<T, S, C>(target: S) -> impl Fn(T)
where
    S: Fn() -> C,
    C: FnOnce(T),
{
    move |value| target()(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::{Cell, RefCell};

    #[rstest]
    fn do_nothing_accepts_anything() {
        let sink = do_nothing::<String>();
        sink("ignored".to_string());
    }

    #[rstest]
    fn redirectable_follows_the_current_target() {
        let first = RefCell::new(Vec::new());
        let second = RefCell::new(Vec::new());
        let use_second = Cell::new(false);

        let sink = redirectable(|| {
            let destination = if use_second.get() { &second } else { &first };
            move |value: i32| destination.borrow_mut().push(value)
        });

        sink(1);
        use_second.set(true);
        sink(2);
        sink(3);

        assert_eq!(*first.borrow(), vec![1]);
        assert_eq!(*second.borrow(), vec![2, 3]);
    }
}
