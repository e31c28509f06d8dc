//! Bidirectional converters.
//!
//! A converter maps values of one type to another and back. Converters
//! compose with [`Converter::and_then`], flip with [`Converter::reverse`],
//! and convert whole sequences lazily with [`Converter::convert_all`].
//!
//! # Converter Family
//!
//! ```text
//! Converter<A, B>          total in both directions
//!   FunctionConverter      from a forward and a backward function
//!   ConverterComposition   f.and_then(g)
//!   ReverseConverter       f.reverse()
//!   IdentityConverter      identity()
//!   NonNullConverter       nullable.non_null()
//!
//! NullableConverter<A, B>  Option<A> <-> Option<B>
//!   FunctionNullableConverter
//!   NullableComposition
//!   ReverseNullableConverter
//!   LiftedConverter        converter.nullable()
//! ```
//!
//! # Example
//!
//! ```
//! use fasaha::convert::{self, Converter};
//!
//! let celsius_fahrenheit = convert::from(
//!     |celsius: f64| celsius * 9.0 / 5.0 + 32.0,
//!     |fahrenheit: f64| (fahrenheit - 32.0) * 5.0 / 9.0,
//!     "celsiusFahrenheit",
//! );
//!
//! assert_eq!(celsius_fahrenheit.convert_non_null(100.0), 212.0);
//!
//! let fahrenheit_celsius = celsius_fahrenheit.reverse();
//! assert_eq!(fahrenheit_celsius.convert_non_null(32.0), 0.0);
//! assert_eq!(fahrenheit_celsius.to_string(), "celsiusFahrenheit.reverse()");
//! ```

mod convert_all;
mod converter;
mod nullable;

pub use convert_all::ConvertAll;
pub use converter::{
    Converter, ConverterComposition, FunctionConverter, IdentityConverter, ReverseConverter, from,
    identity,
};
pub use nullable::{
    FunctionNullableConverter, LiftedConverter, NonNullConverter, NullableComposition,
    NullableConverter, ReverseNullableConverter, nullable_from, nullable_from_unnamed,
};
