//! # fasaha
//!
//! Small general-purpose building blocks: bidirectional converters, mutable
//! value boxes, a disjoint-union `Either`, memoizing suppliers and a
//! three-way `Comparison`.
//!
//! ## Overview
//!
//! - **Converters**: [`Converter`](convert::Converter) maps values both ways
//!   and composes, reverses and converts whole sequences lazily.
//! - **Boxes**: [`MutableBox`](boxes::MutableBox) and friends are mutable
//!   slots with shared-reference mutation, viewable through converters.
//! - **Either**: [`Either`](control::Either) holds exactly one of two values.
//! - **Suppliers**: [`memoize`](supplier::memoize) and
//!   [`memoize_with_expiration`](supplier::memoize_with_expiration) cache a
//!   computation with a single-flight guarantee.
//! - **Comparison**: [`Comparison`](control::Comparison) names the result of
//!   an ordering.
//!
//! ## Feature Flags
//!
//! - `control`: `Either`, `Comparison` and consumer helpers
//! - `convert`: Converters
//! - `boxes`: Mutable boxes (implies `convert`)
//! - `supplier`: Suppliers and memoization
//! - `serde`: `Serialize`/`Deserialize` for `Either` and `Comparison`
//! - `tracing`: Trace events from the memoizers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fasaha::prelude::*;
//!
//! let celsius = DefaultBox::of(100.0);
//! let fahrenheit = (&celsius).map(from(
//!     |c: f64| c * 9.0 / 5.0 + 32.0,
//!     |f: f64| (f - 32.0) * 5.0 / 9.0,
//!     "celsiusFahrenheit",
//! ));
//! fahrenheit.set(32.0);
//! assert_eq!(celsius.get(), 0.0);
//!
//! let parsed: Either<String, i32> = Either::create_right(5);
//! assert_eq!(parsed.fold(|error| error.len() as i32, |value| value * 2), 10);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the public items of every enabled module, plus the error types.
///
/// # Usage
///
/// ```rust
/// use fasaha::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, InvalidArgumentError, Side, UnsupportedOperationError};

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "convert")]
    pub use crate::convert::*;

    #[cfg(feature = "boxes")]
    pub use crate::boxes::*;

    #[cfg(feature = "supplier")]
    pub use crate::supplier::*;
}

pub mod error;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "convert")]
pub mod convert;

#[cfg(feature = "boxes")]
pub mod boxes;

#[cfg(feature = "supplier")]
pub mod supplier;

#[cfg(all(test, feature = "control", feature = "boxes", feature = "supplier"))]
mod tests {
    use crate::prelude::*;
    use rstest::rstest;

    #[rstest]
    fn modules_work_together() {
        let raw = VolatileBox::of("17".to_string());
        let number = (&raw).map(from(
            |text: String| text.parse::<i32>().unwrap_or_default(),
            |number: i32| number.to_string(),
            "stringInt",
        ));
        let doubled = memoize(|| number.get() * 2);

        assert_eq!(doubled.get(), 34);
        assert_eq!(
            Comparison::compare(&number.get(), &20),
            Comparison::Lesser
        );
    }
}
