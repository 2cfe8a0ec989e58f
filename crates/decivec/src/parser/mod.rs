//! The numeral state machine.
//!
//! A parse consumes, in order: an optional sign, the integer digit run,
//! an optional `.` plus fraction run, and an optional `e`/`E` exponent
//! clause, then finalizes as either an exact integer or a double.
//!
//! Digit runs go through the overflow-aware accumulator in [`digits`].
//! As long as accumulation stays exact the literal can still be a
//! `Number::Long`; the first decimal point, exponent marker, or 64-bit
//! overflow commits the result to `Number::Double`.
//!
//! The overflow switch is a deliberate precision/performance trade: once
//! the magnitude overflows, the overflowed prefix is taken as the whole
//! mantissa. Remaining integer digits only shift the decimal point (one
//! exponent step each, values dropped) and remaining fraction digits are
//! skipped entirely, since with a frozen mantissa they can move neither
//! the significant digits nor the decimal point. The final exponent is
//! applied once, through the bounded table fast path in [`pow10`].

mod digits;
mod pow10;


use crate::{
    error::ParseError,
    number::{Number, Parsed},
    unit::CodeUnit,
};

/// Parses a decimal numeral from the start of `input`.
///
/// Works uniformly over 8-, 16-, and 32-bit code units; identical digit
/// sequences parse to identical results at every width. Parsing stops at
/// the first code unit that cannot extend the numeral, and
/// [`Parsed::len`] reports how far it got. An input with no digits is
/// *not* an error: it yields `Number::Long(0)` with the cursor still at
/// the position following any sign character (see [`Parsed::len`]).
///
/// Exponents beyond the range of an `f64` clamp: above `330` to positive
/// infinity, below `-330` to negative infinity. The negative-infinity
/// underflow convention (rather than zero) is preserved, documented
/// behavior; note that the numeral's sign is applied *after* the clamp,
/// so `-1e-400` parses to positive infinity.
///
/// # Errors
///
/// [`ParseError::ExponentOutOfRange`] if the exponent literal itself
/// overflows or exceeds `i32::MAX / 2`.
pub fn parse<C: CodeUnit>(input: &[C]) -> Result<Parsed, ParseError> {
    let mut pos = 0;
    let mut negative = false;
    match input.first() {
        Some(unit) if unit.is_char(b'-') => {
            negative = true;
            pos = 1;
        }
        Some(unit) if unit.is_char(b'+') => {
            pos = 1;
        }
        _ => {}
    }

    let mut overflow = false;
    let mut is_double = false;
    let mut exponent: i64 = 0;
    let mut digit_count = 0;

    let int_from = pos;
    let mut magnitude = digits::accumulate(input, &mut pos, 0, &mut overflow);
    digit_count += pos - int_from;

    if overflow {
        is_double = true;
        // The mantissa is frozen; the rest of the integer part shifts
        // the decimal point one step per digit, values dropped.
        exponent += to_exp(digits::skip(input, &mut pos));
    }

    if input.get(pos).is_some_and(|unit| unit.is_char(b'.')) {
        pos += 1;
        is_double = true;
        if overflow {
            digits::skip(input, &mut pos);
        } else {
            let frac_from = pos;
            magnitude = digits::accumulate(input, &mut pos, magnitude, &mut overflow);
            digit_count += pos - frac_from;
            exponent -= to_exp(pos - frac_from);
            if overflow {
                // Fraction digits past the frozen mantissa move neither
                // the significant digits nor the decimal point.
                digits::skip(input, &mut pos);
            }
        }
    }

    if input
        .get(pos)
        .is_some_and(|unit| unit.is_char(b'e') || unit.is_char(b'E'))
    {
        pos += 1;
        is_double = true;
        let mut exp_negative = false;
        match input.get(pos) {
            Some(unit) if unit.is_char(b'-') => {
                exp_negative = true;
                pos += 1;
            }
            Some(unit) if unit.is_char(b'+') => {
                pos += 1;
            }
            _ => {}
        }
        let mut exp_overflow = false;
        let literal = digits::accumulate(input, &mut pos, 0, &mut exp_overflow);
        if exp_overflow || literal > i64::from(i32::MAX / 2) {
            return Err(ParseError::ExponentOutOfRange);
        }
        exponent += if exp_negative { -literal } else { literal };
    }

    let saw_digits = digit_count > 0;
    if !is_double {
        let value = if negative { -magnitude } else { magnitude };
        return Ok(Parsed {
            number: Number::Long(value),
            len: pos,
            saw_digits,
        });
    }

    // After an overflow the accumulator stopped consuming, so `magnitude`
    // still holds the frozen mantissa here.
    #[allow(clippy::cast_precision_loss)]
    let mut value = pow10::scale(magnitude as f64, exponent);
    if negative {
        value = -value;
    }
    Ok(Parsed {
        number: Number::Double(value),
        len: pos,
        saw_digits,
    })
}

fn to_exp(count: usize) -> i64 {
    // A digit run longer than i64::MAX units cannot exist, but keep the
    // conversion total.
    i64::try_from(count).unwrap_or(i64::MAX)
}
