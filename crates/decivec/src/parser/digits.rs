//! Overflow-aware digit-run accumulation.

use crate::unit::{BATCH, CodeUnit};

/// Base multiplier for folding an `n`-digit batch into the magnitude.
const BASE: [i64; 5] = [1, 10, 100, 1_000, 10_000];

/// Largest magnitude that can absorb an `n`-digit batch without any risk
/// of overflowing `i64`, regardless of the batch's value.
const MAX_BEFORE: [i64; 5] = [
    i64::MAX,
    (i64::MAX - 9) / 10,
    (i64::MAX - 99) / 100,
    (i64::MAX - 999) / 1_000,
    (i64::MAX - 9_999) / 10_000,
];

/// Accumulates the digit run at `*pos` into `magnitude`, batch-wise.
///
/// Stops at the first non-digit, the end of input, or the first digit
/// whose inclusion would overflow `i64`. In the overflow case the flag is
/// set and the offending digit is left unconsumed for the caller, which
/// switches to floating-point interpretation and rescans the remainder as
/// exponent contribution.
///
/// An empty run returns `magnitude` unchanged with `*pos` and `overflow`
/// untouched; that unmoved cursor is the "no digits here" signal.
pub(super) fn accumulate<C: CodeUnit>(
    input: &[C],
    pos: &mut usize,
    mut magnitude: i64,
    overflow: &mut bool,
) -> i64 {
    while let Some(block) = input[*pos..].first_chunk::<BATCH>() {
        let mask = C::digit_mask(block);
        let count = mask.trailing_ones();
        if count == 0 {
            return magnitude;
        }
        if magnitude > MAX_BEFORE[count as usize] {
            // The conservative per-batch bound tripped; let the scalar
            // loop find the exact digit that overflows, if any does.
            return accumulate_scalar(input, pos, magnitude, overflow);
        }
        magnitude = magnitude * BASE[count as usize] + i64::from(C::convert(block, count));
        *pos += count as usize;
        if count < BATCH as u32 {
            return magnitude;
        }
    }
    // Fewer than a batch of units remain; never load past the end.
    accumulate_scalar(input, pos, magnitude, overflow)
}

fn accumulate_scalar<C: CodeUnit>(
    input: &[C],
    pos: &mut usize,
    mut magnitude: i64,
    overflow: &mut bool,
) -> i64 {
    while let Some(d) = input.get(*pos).and_then(|&unit| unit.digit()) {
        let d = i64::from(d);
        if magnitude >= i64::MAX / 10 && (magnitude > i64::MAX / 10 || d > i64::MAX % 10) {
            *overflow = true;
            break;
        }
        magnitude = magnitude * 10 + d;
        *pos += 1;
    }
    magnitude
}

/// Advances past a digit run without accumulating, returning its length.
///
/// Used after the overflow switch, where digit values can no longer
/// affect the mantissa and only the count matters.
pub(super) fn skip<C: CodeUnit>(input: &[C], pos: &mut usize) -> usize {
    let start = *pos;
    while input.get(*pos).is_some_and(|&unit| unit.digit().is_some()) {
        *pos += 1;
    }
    *pos - start
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &[u8], initial: i64) -> (i64, usize, bool) {
        let mut pos = 0;
        let mut overflow = false;
        let magnitude = accumulate(input, &mut pos, initial, &mut overflow);
        (magnitude, pos, overflow)
    }

    #[test]
    fn empty_run_is_a_no_op() {
        assert_eq!(run(b"", 7), (7, 0, false));
        assert_eq!(run(b"abc", 7), (7, 0, false));
        assert_eq!(run(b".5", 7), (7, 0, false));
    }

    #[test]
    fn short_and_long_runs() {
        assert_eq!(run(b"7", 0), (7, 1, false));
        assert_eq!(run(b"123", 0), (123, 3, false));
        assert_eq!(run(b"1234", 0), (1234, 4, false));
        assert_eq!(run(b"12345678", 0), (12_345_678, 8, false));
        assert_eq!(run(b"123456789", 0), (123_456_789, 9, false));
        assert_eq!(run(b"123x456", 0), (123, 3, false));
    }

    #[test]
    fn continues_from_initial_magnitude() {
        assert_eq!(run(b"456", 123), (123_456, 3, false));
    }

    #[test]
    fn exact_i64_max_does_not_overflow() {
        assert_eq!(run(b"9223372036854775807", 0), (i64::MAX, 19, false));
    }

    #[test]
    fn stops_at_the_first_overflowing_digit() {
        // i64::MAX followed by one more digit: the tail digit must be
        // left unconsumed.
        let (magnitude, pos, overflow) = run(b"92233720368547758079", 0);
        assert_eq!(magnitude, i64::MAX);
        assert_eq!(pos, 19);
        assert!(overflow);

        // i64::MIN's magnitude overflows on its final digit.
        let (magnitude, pos, overflow) = run(b"9223372036854775808", 0);
        assert_eq!(magnitude, 922_337_203_685_477_580);
        assert_eq!(pos, 18);
        assert!(overflow);
    }

    #[test]
    fn threshold_trip_without_actual_overflow() {
        // The batch bound is conservative: it trips on the final "807x"
        // batch here, but the scalar loop finds no overflowing digit and
        // must finish the run cleanly.
        assert_eq!(run(b"9223372036854775807x", 0), (i64::MAX, 19, false));
        assert_eq!(run(b"1000000000000000000", 0), (1_000_000_000_000_000_000, 19, false));
    }

    #[test]
    fn skip_counts_digits() {
        let mut pos = 0;
        assert_eq!(skip(b"00123x", &mut pos), 5);
        assert_eq!(pos, 5);
        assert_eq!(skip(b"00123x", &mut pos), 0);
    }
}
