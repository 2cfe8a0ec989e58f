//! Cross-checks the fast-path parser against the standard library's
//! correctly rounded string-to-double conversion, reporting mismatches
//! as ULP distance.

use decivec::{Number, parse_str};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// The documented fast-path bound: one mantissa cast plus at most two
/// table multiplications.
const FAST_PATH_ULP: u64 = 3;

/// ULP distance between two doubles (Reynolds' construction, as used by
/// the reference comparison harness).
fn ulp_dist(a: f64, b: f64) -> u64 {
    let ua = a.to_bits();
    let ub = b.to_bits();
    if ((ua ^ ub) as i64) >= 0 {
        ua.abs_diff(ub)
    } else {
        ua.wrapping_add(ub).wrapping_add(1 << 63)
    }
}

#[quickcheck]
fn formatted_doubles_roundtrip_within_tolerance(value: f64) -> TestResult {
    if !value.is_finite() {
        return TestResult::discard();
    }
    let text = value.to_string();
    let parsed = parse_str(&text).unwrap();
    TestResult::from_bool(
        parsed.len == text.len()
            && parsed.saw_digits
            && ulp_dist(parsed.number.as_f64(), value) <= FAST_PATH_ULP,
    )
}

#[quickcheck]
fn formatted_integers_roundtrip_exactly(value: i64) -> bool {
    let text = value.to_string();
    let parsed = parse_str(&text).unwrap();
    if value == i64::MIN {
        // The magnitude of i64::MIN overflows the accumulator, so this
        // one literal takes the double path by design.
        matches!(parsed.number, Number::Double(_))
    } else {
        parsed.number == Number::Long(value) && parsed.len == text.len() && parsed.saw_digits
    }
}

/// One random numeral: sign, up to 19 integer digits, optional fraction,
/// optional exponent kept clear of the documented underflow-divergence
/// zone below -330 (where this parser clamps to infinity instead of
/// flushing to zero).
fn random_numeral(rng: &mut StdRng) -> String {
    let mut text = String::new();
    if rng.gen_bool(0.5) {
        text.push('-');
    }
    let int_digits = rng.gen_range(1..=19);
    for _ in 0..int_digits {
        text.push(char::from(b'0' + rng.gen_range(0..10)));
    }
    if rng.gen_bool(0.5) {
        text.push('.');
        let frac_digits = rng.gen_range(1..=12);
        for _ in 0..frac_digits {
            text.push(char::from(b'0' + rng.gen_range(0..10)));
        }
    }
    if rng.gen_bool(0.5) {
        text.push(if rng.gen_bool(0.5) { 'e' } else { 'E' });
        let exp: i32 = rng.gen_range(-290..=290);
        text.push_str(&exp.to_string());
    }
    text
}

#[test]
fn random_numerals_match_the_reference_conversion() {
    let mut rng = StdRng::seed_from_u64(0x00D1_CE5E);
    for _ in 0..20_000 {
        let text = random_numeral(&mut rng);
        let parsed = parse_str(&text).unwrap();
        assert_eq!(parsed.len, text.len(), "{text}");
        let expect: f64 = text.parse().unwrap();
        let got = parsed.number.as_f64();
        assert!(
            ulp_dist(got, expect) <= FAST_PATH_ULP,
            "{text}: got {got:e}, reference {expect:e}, ulp {}",
            ulp_dist(got, expect)
        );
    }
}

#[test]
fn long_digit_tails_match_the_reference_conversion() {
    // Force the overflow switch with oversized runs on both sides of the
    // decimal point.
    let mut rng = StdRng::seed_from_u64(0xFEED);
    for _ in 0..2_000 {
        let int_digits = rng.gen_range(20..=40);
        let frac_digits = rng.gen_range(0..=40);
        let mut text = String::new();
        text.push(char::from(b'1' + rng.gen_range(0..9)));
        for _ in 1..int_digits {
            text.push(char::from(b'0' + rng.gen_range(0..10)));
        }
        if frac_digits > 0 {
            text.push('.');
            for _ in 0..frac_digits {
                text.push(char::from(b'0' + rng.gen_range(0..10)));
            }
        }
        let parsed = parse_str(&text).unwrap();
        assert_eq!(parsed.len, text.len(), "{text}");
        let expect: f64 = text.parse().unwrap();
        let got = parsed.number.as_f64();
        assert!(
            ulp_dist(got, expect) <= FAST_PATH_ULP,
            "{text}: got {got:e}, reference {expect:e}"
        );
    }
}
