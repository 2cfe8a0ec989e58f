//! SSE2 batch classifier and converter.
//!
//! All three widths are normalized to 16-bit lanes so that one pair of
//! signed compares answers "is this a digit" and one `_mm_madd_epi16`
//! against a positional weight vector folds a confirmed digit prefix into
//! its base-10 value. Loads go through `&[_; 4]` borrows only, so no read
//! ever reaches past the logical end of the input.

#[cfg(target_arch = "x86")]
use core::arch::x86::{
    __m128i, _mm_add_epi32, _mm_and_si128, _mm_cmpgt_epi16, _mm_cmpgt_epi32, _mm_cmplt_epi16,
    _mm_cmplt_epi32, _mm_cvtsi32_si128, _mm_cvtsi128_si32, _mm_loadl_epi64, _mm_loadu_si128,
    _mm_madd_epi16, _mm_movemask_epi8, _mm_packs_epi32, _mm_set1_epi16, _mm_set1_epi32,
    _mm_setzero_si128, _mm_srli_si128, _mm_sub_epi16, _mm_sub_epi32, _mm_unpacklo_epi8,
};
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::{
    __m128i, _mm_add_epi32, _mm_and_si128, _mm_cmpgt_epi16, _mm_cmpgt_epi32, _mm_cmplt_epi16,
    _mm_cmplt_epi32, _mm_cvtsi32_si128, _mm_cvtsi128_si32, _mm_loadl_epi64, _mm_loadu_si128,
    _mm_madd_epi16, _mm_movemask_epi8, _mm_packs_epi32, _mm_set1_epi16, _mm_set1_epi32,
    _mm_setzero_si128, _mm_srli_si128, _mm_sub_epi16, _mm_sub_epi32, _mm_unpacklo_epi8,
};

use super::BATCH;

/// Row `k` holds the positional weights for a `k`-digit prefix, aligned to
/// lane 0 and zero-padded; lanes with weight 0 ignore whatever non-digit
/// garbage follows the prefix.
const WEIGHTS: [[i16; 8]; 5] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [1, 0, 0, 0, 0, 0, 0, 0],
    [10, 1, 0, 0, 0, 0, 0, 0],
    [100, 10, 1, 0, 0, 0, 0, 0],
    [1000, 100, 10, 1, 0, 0, 0, 0],
];

#[inline]
pub(super) fn digit_mask_u8(block: &[u8; BATCH]) -> u32 {
    let raw = i32::from_le_bytes(*block);
    // SAFETY: SSE2 is statically enabled, or this module is not compiled.
    unsafe {
        let lanes = _mm_unpacklo_epi8(_mm_cvtsi32_si128(raw), _mm_setzero_si128());
        mask_epi16(lanes)
    }
}

#[inline]
pub(super) fn digit_mask_u16(block: &[u16; BATCH]) -> u32 {
    // SAFETY: the borrow guarantees 8 readable bytes; `_mm_loadl_epi64`
    // reads exactly 8 and has no alignment requirement.
    unsafe {
        let lanes = _mm_loadl_epi64(block.as_ptr().cast::<__m128i>());
        mask_epi16(lanes)
    }
}

#[inline]
pub(super) fn digit_mask_u32(block: &[u32; BATCH]) -> u32 {
    // SAFETY: the borrow guarantees 16 readable bytes for the unaligned
    // load; SSE2 is statically enabled.
    unsafe {
        let v = _mm_loadu_si128(block.as_ptr().cast::<__m128i>());
        let d = _mm_sub_epi32(v, _mm_set1_epi32(i32::from(b'0')));
        let in_range = _mm_and_si128(
            _mm_cmpgt_epi32(d, _mm_set1_epi32(-1)),
            _mm_cmplt_epi32(d, _mm_set1_epi32(10)),
        );
        let bytes = _mm_movemask_epi8(in_range) as u32;
        // One movemask bit per lane byte; keep bit 0 of each 32-bit lane.
        (bytes & 0x1) | ((bytes >> 3) & 0x2) | ((bytes >> 6) & 0x4) | ((bytes >> 9) & 0x8)
    }
}

#[inline]
pub(super) fn convert_u8(block: &[u8; BATCH], count: u32) -> u32 {
    let raw = i32::from_le_bytes(*block);
    // SAFETY: SSE2 is statically enabled.
    unsafe {
        let lanes = _mm_unpacklo_epi8(_mm_cvtsi32_si128(raw), _mm_setzero_si128());
        let digits = _mm_sub_epi16(lanes, _mm_set1_epi16(i16::from(b'0')));
        madd(digits, count)
    }
}

#[inline]
pub(super) fn convert_u16(block: &[u16; BATCH], count: u32) -> u32 {
    // SAFETY: see `digit_mask_u16`.
    unsafe {
        let lanes = _mm_loadl_epi64(block.as_ptr().cast::<__m128i>());
        let digits = _mm_sub_epi16(lanes, _mm_set1_epi16(i16::from(b'0')));
        madd(digits, count)
    }
}

#[inline]
pub(super) fn convert_u32(block: &[u32; BATCH], count: u32) -> u32 {
    // SAFETY: see `digit_mask_u32`.
    unsafe {
        let v = _mm_loadu_si128(block.as_ptr().cast::<__m128i>());
        let d = _mm_sub_epi32(v, _mm_set1_epi32(i32::from(b'0')));
        // Confirmed digits are 0..=9 and narrow losslessly; saturated
        // garbage lanes meet a zero weight in `madd`.
        let digits = _mm_packs_epi32(d, _mm_setzero_si128());
        madd(digits, count)
    }
}

/// Collapses 16-bit digit lanes against the weight row for `count`.
#[inline]
unsafe fn madd(digits: __m128i, count: u32) -> u32 {
    debug_assert!((1..=4).contains(&count));
    // SAFETY: caller guarantees SSE2; the weight row borrow guarantees 16
    // readable bytes.
    unsafe {
        let weights = _mm_loadu_si128(WEIGHTS[count as usize].as_ptr().cast::<__m128i>());
        let pairs = _mm_madd_epi16(digits, weights);
        let folded = _mm_add_epi32(pairs, _mm_srli_si128::<4>(pairs));
        _mm_cvtsi128_si32(folded) as u32
    }
}

/// Digit mask for four characters widened into the low 16-bit lanes.
///
/// The subtract wraps, so any unit outside `'0'..='9'` lands outside
/// `0..=9` in signed 16-bit space and fails one of the two compares.
#[inline]
unsafe fn mask_epi16(lanes: __m128i) -> u32 {
    // SAFETY: caller guarantees SSE2.
    unsafe {
        let d = _mm_sub_epi16(lanes, _mm_set1_epi16(i16::from(b'0')));
        let in_range = _mm_and_si128(
            _mm_cmpgt_epi16(d, _mm_set1_epi16(-1)),
            _mm_cmplt_epi16(d, _mm_set1_epi16(10)),
        );
        let bytes = _mm_movemask_epi8(in_range) as u32;
        // Two movemask bits per 16-bit lane; keep the even ones.
        (bytes & 0x1) | ((bytes >> 1) & 0x2) | ((bytes >> 2) & 0x4) | ((bytes >> 3) & 0x8)
    }
}
