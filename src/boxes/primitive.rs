//! Unboxed boxes for `i32`, `i64` and `f64`.
//!
//! Each family has a trait with unboxed accessors plus three variants:
//!
//! | Family | Trait | Plain | Volatile | Function-backed |
//! |--------|-------|-------|----------|-----------------|
//! | `i32` | [`IntBox`] | [`DefaultIntBox`] | [`VolatileIntBox`] | [`FnIntBox`] |
//! | `i64` | [`LongBox`] | [`DefaultLongBox`] | [`VolatileLongBox`] | [`FnLongBox`] |
//! | `f64` | [`DoubleBox`] | [`DefaultDoubleBox`] | [`VolatileDoubleBox`] | [`FnDoubleBox`] |
//!
//! Every primitive box is also a [`MutableBox`] of its primitive, so it can
//! be mapped through a converter like any other box.

use std::cell::Cell;
use std::convert::identity;
use std::fmt;
use std::sync::atomic::{AtomicI32, AtomicI64, AtomicU64, Ordering};

use super::mutable::MutableBox;

macro_rules! primitive_box {
    (
        $(#[$meta:meta])*
        family $family:ident: $primitive:ty,
        tag $tag:literal,
        atomic $atomic:ty,
        encode $encode:path,
        decode $decode:path $(,)?
    ) => {
        paste::paste! {
            $(#[$meta])*
            pub trait [<$family Box>] {
                #[doc = concat!("Returns the current `", stringify!($primitive), "`.")]
                fn [<get_as_ $family:lower>](&self) -> $primitive;

                #[doc = concat!("Stores a `", stringify!($primitive), "`.")]
                fn [<set_ $family:lower>](&self, value: $primitive);

                /// Applies `mutator` to the current value, stores the result
                /// and returns it. Not atomic.
                fn [<modify_ $family:lower>]<F>(&self, mutator: F) -> $primitive
                where
                    F: FnOnce($primitive) -> $primitive,
                {
                    let modified = mutator(self.[<get_as_ $family:lower>]());
                    self.[<set_ $family:lower>](modified);
                    modified
                }
            }

            #[doc = concat!("A `", stringify!($primitive), "` box backed by a [`Cell`]. Not `Sync`.")]
            #[derive(Default)]
            pub struct [<Default $family Box>] {
                value: Cell<$primitive>,
            }

            impl [<Default $family Box>] {
                /// Creates a box holding `initial`.
                #[must_use]
                pub const fn of(initial: $primitive) -> Self {
                    Self {
                        value: Cell::new(initial),
                    }
                }
            }

            impl [<$family Box>] for [<Default $family Box>] {
                #[inline]
                fn [<get_as_ $family:lower>](&self) -> $primitive {
                    self.value.get()
                }

                #[inline]
                fn [<set_ $family:lower>](&self, value: $primitive) {
                    self.value.set(value);
                }
            }

            impl fmt::Display for [<Default $family Box>] {
                fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(formatter, concat!("Box.", $tag, ".of[{:?}]"), self.value.get())
                }
            }

            impl fmt::Debug for [<Default $family Box>] {
                fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    formatter
                        .debug_tuple(stringify!([<Default $family Box>]))
                        .field(&self.value.get())
                        .finish()
                }
            }

            #[doc = concat!(
                "A `", stringify!($primitive), "` box stored in an atomic.\n\n",
                "Stores release and loads acquire, so a `set` on one thread is visible to ",
                "every later `get` on another."
            )]
            pub struct [<Volatile $family Box>] {
                bits: $atomic,
            }

            impl [<Volatile $family Box>] {
                /// Creates a box holding `initial`.
                #[must_use]
                pub fn of(initial: $primitive) -> Self {
                    Self {
                        bits: <$atomic>::new($encode(initial)),
                    }
                }
            }

            impl Default for [<Volatile $family Box>] {
                fn default() -> Self {
                    Self::of(<$primitive>::default())
                }
            }

            impl [<$family Box>] for [<Volatile $family Box>] {
                #[inline]
                fn [<get_as_ $family:lower>](&self) -> $primitive {
                    $decode(self.bits.load(Ordering::Acquire))
                }

                #[inline]
                fn [<set_ $family:lower>](&self, value: $primitive) {
                    self.bits.store($encode(value), Ordering::Release);
                }
            }

            impl fmt::Display for [<Volatile $family Box>] {
                fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(
                        formatter,
                        concat!("Box.", $tag, ".ofVolatile[{:?}]"),
                        self.[<get_as_ $family:lower>]()
                    )
                }
            }

            impl fmt::Debug for [<Volatile $family Box>] {
                fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    formatter
                        .debug_tuple(stringify!([<Volatile $family Box>]))
                        .field(&self.[<get_as_ $family:lower>]())
                        .finish()
                }
            }

            #[doc = concat!("A `", stringify!($primitive), "` box synthesised from a getter and a setter.")]
            pub struct [<Fn $family Box>]<G, S> {
                getter: G,
                setter: S,
            }

            impl<G, S> [<Fn $family Box>]<G, S>
            where
                G: Fn() -> $primitive,
                S: Fn($primitive),
            {
                /// Creates a box that reads through `getter` and writes through
                /// `setter`.
                pub const fn from(getter: G, setter: S) -> Self {
                    Self { getter, setter }
                }
            }

            impl<G, S> [<$family Box>] for [<Fn $family Box>]<G, S>
            where
                G: Fn() -> $primitive,
                S: Fn($primitive),
            {
                #[inline]
                fn [<get_as_ $family:lower>](&self) -> $primitive {
                    (self.getter)()
                }

                #[inline]
                fn [<set_ $family:lower>](&self, value: $primitive) {
                    (self.setter)(value);
                }
            }

            impl<G, S> fmt::Display for [<Fn $family Box>]<G, S>
            where
                G: Fn() -> $primitive,
            {
                fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(formatter, concat!("Box.", $tag, ".from[{:?}]"), (self.getter)())
                }
            }

            impl<G, S> fmt::Debug for [<Fn $family Box>]<G, S> {
                fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    formatter
                        .debug_struct(stringify!([<Fn $family Box>]))
                        .finish_non_exhaustive()
                }
            }

            primitive_box!(@mutable $family, $primitive, [<Default $family Box>]);
            primitive_box!(@mutable $family, $primitive, [<Volatile $family Box>]);
            primitive_box!(@mutable $family, $primitive, [<Fn $family Box>]<G, S> where G: Fn() -> $primitive, S: Fn($primitive));

            static_assertions::assert_not_impl_any!([<Default $family Box>]: Sync);
            static_assertions::assert_impl_all!([<Volatile $family Box>]: Send, Sync);
        }
    };

    (@mutable $family:ident, $primitive:ty, $target:ty $(where $($bound:tt)*)?) => {
        paste::paste! {
            impl<$($($bound)*)?> MutableBox<$primitive> for $target {
                #[inline]
                fn get(&self) -> $primitive {
                    self.[<get_as_ $family:lower>]()
                }

                #[inline]
                fn set(&self, value: $primitive) {
                    self.[<set_ $family:lower>](value);
                }
            }
        }
    };
}

primitive_box! {
    /// A box of `i32` with unboxed accessors.
    family Int: i32,
    tag "Int",
    atomic AtomicI32,
    encode identity,
    decode identity,
}

primitive_box! {
    /// A box of `i64` with unboxed accessors.
    family Long: i64,
    tag "Long",
    atomic AtomicI64,
    encode identity,
    decode identity,
}

primitive_box! {
    /// A box of `f64` with unboxed accessors.
    ///
    /// The volatile variant stores the IEEE-754 bit pattern, so `NaN`
    /// payloads and signed zeros survive a round trip.
    family Double: f64,
    tag "Dbl",
    atomic AtomicU64,
    encode f64::to_bits,
    decode f64::from_bits,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;
    use std::thread;

    #[rstest]
    #[case(DefaultIntBox::of(0).to_string(), "Box.Int.of[0]")]
    #[case(VolatileIntBox::of(0).to_string(), "Box.Int.ofVolatile[0]")]
    #[case(DefaultLongBox::of(0).to_string(), "Box.Long.of[0]")]
    #[case(VolatileLongBox::of(-3).to_string(), "Box.Long.ofVolatile[-3]")]
    #[case(DefaultDoubleBox::of(0.0).to_string(), "Box.Dbl.of[0.0]")]
    #[case(VolatileDoubleBox::of(1.5).to_string(), "Box.Dbl.ofVolatile[1.5]")]
    fn display_names_family_and_constructor(#[case] rendered: String, #[case] expected: &str) {
        assert_eq!(rendered, expected);
    }

    #[rstest]
    fn from_methods_round_trip() {
        let backing = DefaultDoubleBox::of(0.0);
        let view = FnDoubleBox::from(|| backing.get_as_double(), |value| backing.set_double(value));
        assert_eq!(view.to_string(), "Box.Dbl.from[0.0]");

        view.set_double(2.25);
        assert_eq!(backing.get_as_double(), 2.25);

        let ints = DefaultIntBox::of(0);
        let int_view = FnIntBox::from(|| ints.get_as_int(), |value| ints.set_int(value));
        assert_eq!(int_view.to_string(), "Box.Int.from[0]");

        let longs = VolatileLongBox::default();
        let long_view = FnLongBox::from(|| longs.get_as_long(), |value| longs.set_long(value));
        assert_eq!(long_view.to_string(), "Box.Long.from[0]");
    }

    #[rstest]
    fn mutable_box_passes_through() {
        let counter = DefaultLongBox::of(41);
        assert_eq!(MutableBox::modify(&counter, |value| value + 1), 42);
        assert_eq!(counter.get_as_long(), 42);
        MutableBox::set(&counter, 7);
        assert_eq!(MutableBox::get(&counter), 7);
    }

    #[rstest]
    fn volatile_double_keeps_bit_pattern() {
        let slot = VolatileDoubleBox::of(-0.0);
        assert!(slot.get_as_double().is_sign_negative());
        slot.set_double(f64::NAN);
        assert!(slot.get_as_double().is_nan());
    }

    #[rstest]
    fn volatile_int_is_visible_across_threads() {
        let shared = Arc::new(VolatileIntBox::of(0));
        let writer = Arc::clone(&shared);
        thread::spawn(move || writer.set_int(9))
            .join()
            .expect("writer thread panicked");
        assert_eq!(shared.get_as_int(), 9);
        assert_eq!(shared.modify_int(|value| value * 2), 18);
    }
}
