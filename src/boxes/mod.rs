//! Mutable single-value holders.
//!
//! A box is a small cell with shared-reference mutation: every holder of
//! `&box` can read and replace its value. Boxes come in three families:
//!
//! - [`MutableBox`] always holds a value.
//! - [`NullableBox`] may be empty.
//! - [`IntBox`], [`LongBox`] and [`DoubleBox`] hold unboxed primitives.
//!
//! Each family offers a plain variant (fast, single-threaded), a volatile
//! variant (safe to share between threads) and a variant built from a getter
//! and a setter. Any box can be viewed through a converter with `map`; the
//! view reads and writes the original box.
//!
//! # Examples
//!
//! ```rust
//! use fasaha::boxes::{MutableBox, VolatileBox};
//! use fasaha::convert::{self, Converter};
//!
//! let meters = VolatileBox::of(1500_u32);
//! let kilometers = (&meters).map(
//!     convert::from(
//!         |kilometers: f64| (kilometers * 1000.0) as u32,
//!         |meters: u32| f64::from(meters) / 1000.0,
//!         "kilometersMeters",
//!     )
//!     .reverse(),
//! );
//!
//! assert_eq!(kilometers.get(), 1.5);
//! kilometers.set(2.0);
//! assert_eq!(meters.get(), 2000);
//! ```

mod mapped;
mod mutable;
mod nullable;
mod primitive;

pub use mapped::{MappedBox, MappedNullableBox};
pub use mutable::{DefaultBox, FnBox, MutableBox, VolatileBox, as_consumer, as_supplier};
pub use nullable::{
    DefaultNullableBox, FnNullableBox, NullableBox, VolatileNullableBox, as_nullable_consumer,
    as_nullable_supplier,
};
pub use primitive::{
    DefaultDoubleBox, DefaultIntBox, DefaultLongBox, DoubleBox, FnDoubleBox, FnIntBox,
    FnLongBox, IntBox, LongBox, VolatileDoubleBox, VolatileIntBox, VolatileLongBox,
};
