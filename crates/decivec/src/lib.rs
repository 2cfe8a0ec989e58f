//! Width-polymorphic, SIMD-accelerated decimal numeral parsing.
//!
//! `decivec` converts a textual decimal numeral — optional sign, integer
//! digits, optional fractional part, optional exponent — into either an
//! exact [`i64`] or an [`f64`]. Digit runs are classified and converted in
//! fixed 4-character vector batches instead of a byte-at-a-time scan, and
//! the input may be encoded in 8-, 16-, or 32-bit code units (raw bytes,
//! UTF-16, UTF-32); all three widths produce identical results for the
//! same digit sequence.
//!
//! The parser is a pure function over a bounded slice: it never reads past
//! the end of the input, holds no locks, and may be called concurrently
//! from any number of threads.
//!
//! ```rust
//! use decivec::{Number, parse_str};
//!
//! let parsed = parse_str("-42").unwrap();
//! assert_eq!(parsed.number, Number::Long(-42));
//! assert_eq!(parsed.len, 3);
//!
//! let parsed = parse_str("6.02214e23 mol^-1").unwrap();
//! let Number::Double(d) = parsed.number else { unreachable!() };
//! assert!((d - 6.02214e23).abs() / 6.02214e23 < 1e-15);
//! assert_eq!(parsed.len, "6.02214e23".len());
//! ```
//!
//! # Precision
//!
//! Floating-point results take a bounded fast path: the accumulated
//! mantissa is scaled by at most two power-of-ten multiplications from a
//! constant table. The result is within a couple of ULP of the correctly
//! rounded value, but bit-for-bit equality with a correctly rounded
//! converter is not guaranteed. Exponents below `-330` collapse to
//! negative infinity and above `330` to positive infinity; see
//! [`parse`] for the details of this convention.
//!
//! # Recognizing "no numeral here"
//!
//! Inputs with no digits (including the empty string) are not an error:
//! they parse to `Number::Long(0)` with [`Parsed::len`] left at the
//! position following any consumed sign character. Callers that need to
//! distinguish "parsed zero" from "nothing parsed" check
//! [`Parsed::saw_digits`] or compare `len` against the sign width.

#![no_std]

#[cfg(test)]
extern crate std;

mod error;
mod number;
mod parser;
mod unit;

pub use error::ParseError;
pub use number::{Number, Parsed};
pub use parser::parse;
pub use unit::CodeUnit;

/// Parses a decimal numeral from the start of a UTF-8 string.
///
/// Equivalent to [`parse`] over the string's bytes; any multi-byte
/// character terminates the numeral just like an ASCII non-digit would.
///
/// # Errors
///
/// Returns [`ParseError::ExponentOutOfRange`] if the exponent literal is
/// too large to be meaningful; see [`parse`].
pub fn parse_str(input: &str) -> Result<Parsed, ParseError> {
    parse(input.as_bytes())
}
