use thiserror::Error;

/// The only hard failure the parser can produce.
///
/// Every other input — including inputs with no digits at all — parses
/// successfully; see [`crate::parse`] for how "nothing was parsed" is
/// signaled through the cursor instead of an error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The exponent literal overflowed while being accumulated, or its
    /// magnitude exceeded `i32::MAX / 2`. Exponents that large cannot
    /// affect an `f64` and are rejected outright instead of risking
    /// integer overflow while combining exponent offsets.
    #[error("exponent magnitude out of range")]
    ExponentOutOfRange,
}
